//! # Error Types
//!
//! General error handling for the printer library.
//!
//! We use `thiserror` to automatically generate `Error` trait implementations
//! and nice error messages.
//!
//! There is deliberately no recovery logic here: a printer that fails to read
//! a field simply propagates the error back to the host debugger, which owns
//! the display request and decides what to show in its place. The only
//! "invalid data" outcome a printer produces by itself is the identifier
//! printer's `[Invalid]` marker, and that is a formatted value, not an error.

use thiserror::Error;

use crate::host::ValueKind;

/// Main error type for printer operations
///
/// Each variant corresponds to a way a display request can fail while a
/// printer walks the host's value-accessor:
///
/// 1. **Accessor errors**: `MissingField`, `KindMismatch`, `Host`
/// 2. **Dispatch errors**: `UnknownType`
#[derive(Error, Debug)]
pub enum DumpError
{
    /// The accessor could not resolve a field by name
    ///
    /// This usually means the debugged binary's struct layout does not match
    /// what the printer expects (e.g. a renamed member after a refactor).
    #[error("value has no field named '{field}'")]
    MissingField
    {
        /// Name of the field the printer asked for
        field: String,
    },

    /// A primitive was extracted as the wrong kind
    ///
    /// Raised when a printer asks for, say, a float out of a field that the
    /// host knows to be an integer.
    #[error("expected a {expected} value, found {found}")]
    KindMismatch
    {
        /// The kind the printer asked for
        expected: ValueKind,
        /// The kind the host reports for the field
        found: ValueKind,
    },

    /// No printer is registered for the given type name
    ///
    /// Returned by [`crate::registry::PrinterRegistry::dispatch`] when the
    /// host asks to display a type the registry has never heard of.
    #[error("no printer registered for type '{0}'")]
    UnknownType(String),

    /// Opaque host-side failure surfaced through the accessor
    ///
    /// Covers anything that goes wrong below the accessor interface, such as
    /// a failed memory read in the inspected process.
    #[error("host error: {0}")]
    Host(String),
}

/// Convenience type alias for `Result<T, DumpError>`
///
/// ```rust
/// use vdump_core::error::DumpResult;
/// fn foo() -> DumpResult<()>
/// {
///     Ok(())
/// }
/// ```
pub type DumpResult<T> = std::result::Result<T, DumpError>;
