//! # Printer Registry
//!
//! Explicit mapping from fully-qualified type name to printer function.
//!
//! The host debugger looks printers up by the type name it resolved for the
//! value under inspection. That dynamic dispatch is an ordinary table here:
//! built once at registration time, immutable afterwards, shared freely
//! (`PrinterFn` is a plain `fn` pointer, so the registry is `Sync` for free).
//!
//! ## Usage
//!
//! ```rust
//! use vdump_core::registry::{builtins, PrinterRegistry};
//!
//! // The full builtin set, built once per process:
//! let registry = builtins();
//! assert!(registry.lookup("CColor").is_some());
//!
//! // Or a custom table for hosts that register their own printers:
//! let mut registry = PrinterRegistry::new();
//! registry.register("CColor", vdump_core::printers::color);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{DumpError, DumpResult};
use crate::host::{DisplaySink, Value};
use crate::printers;

/// Signature every printer shares: read the value, populate the sink.
pub type PrinterFn = fn(&mut dyn DisplaySink, &dyn Value) -> DumpResult<()>;

/// Table of printers keyed by fully-qualified type name.
#[derive(Default)]
pub struct PrinterRegistry
{
    printers: HashMap<&'static str, PrinterFn>,
}

impl PrinterRegistry
{
    /// Create an empty registry.
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Create a registry pre-loaded with every builtin printer.
    ///
    /// Type names match the editor's own (`CAssetID`, `CColor`, `CFourCC`,
    /// `TString`, `TWideString`, the `CVector*` family, `CQuaternion`).
    pub fn with_builtins() -> Self
    {
        let mut registry = Self::new();
        registry.register("CAssetID", printers::asset_id);
        registry.register("CColor", printers::color);
        registry.register("CFourCC", printers::fourcc);
        registry.register("TString", printers::tstring);
        registry.register("TWideString", printers::twide_string);
        registry.register("CVector2f", printers::vector2f);
        registry.register("CVector2i", printers::vector2i);
        registry.register("CVector3f", printers::vector3f);
        registry.register("CVector4f", printers::vector4f);
        registry.register("CQuaternion", printers::quaternion);
        registry
    }

    /// Associate a printer with a type name, replacing any existing entry.
    pub fn register(&mut self, type_name: &'static str, printer: PrinterFn)
    {
        if self.printers.insert(type_name, printer).is_some() {
            tracing::debug!(type_name, "replaced existing printer registration");
        }
    }

    /// Look up the printer for a type name, if one is registered.
    pub fn lookup(&self, type_name: &str) -> Option<PrinterFn>
    {
        self.printers.get(type_name).copied()
    }

    /// Number of registered printers.
    pub fn len(&self) -> usize
    {
        self.printers.len()
    }

    /// Whether the registry has no printers at all.
    pub fn is_empty(&self) -> bool
    {
        self.printers.is_empty()
    }

    /// Run the printer registered for `type_name` against a value and sink.
    ///
    /// ## Errors
    ///
    /// Returns [`DumpError::UnknownType`] if no printer is registered for the
    /// name, or whatever error the printer itself propagates from the host.
    pub fn dispatch(&self, type_name: &str, sink: &mut dyn DisplaySink, value: &dyn Value) -> DumpResult<()>
    {
        match self.lookup(type_name) {
            Some(printer) => {
                tracing::trace!(type_name, "dispatching printer");
                printer(sink, value)
            }
            None => {
                tracing::debug!(type_name, "no printer registered");
                Err(DumpError::UnknownType(type_name.to_string()))
            }
        }
    }
}

/// Process-wide builtin registry, built lazily on first use.
///
/// Hosts that never register custom printers can dispatch through this table
/// directly instead of carrying their own [`PrinterRegistry`].
pub fn builtins() -> &'static PrinterRegistry
{
    static BUILTINS: Lazy<PrinterRegistry> = Lazy::new(PrinterRegistry::with_builtins);
    &BUILTINS
}
