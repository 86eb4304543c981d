//! # vdump-core
//!
//! Debugger pretty-printers for editor value types.
//!
//! This crate turns in-memory values of a small set of custom editor types
//! (asset IDs, colors, four-character codes, strings, vectors, quaternions)
//! into the short display strings a debugger's variable view shows, with
//! optional named sub-fields for expansion.
//!
//! The crate contains no process control and no memory reading of its own.
//! The host debugger implements two traits — [`host::Value`] for read-only
//! field access and [`host::DisplaySink`] for display output — and dispatches
//! each display request through a [`registry::PrinterRegistry`] keyed by the
//! value's fully-qualified type name. Every printer is a stateless,
//! synchronous function; there is no shared state and no ordering between
//! calls.

pub mod error;
pub mod fragment;
pub mod host;
pub mod prelude;
pub mod printers;
pub mod registry;

// Re-export commonly used types
pub use error::{DumpError, DumpResult};
pub use host::{DisplaySink, Value, ValueKind};
pub use registry::{builtins, PrinterFn, PrinterRegistry};
