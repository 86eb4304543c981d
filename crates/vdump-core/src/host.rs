//! # Host Interface
//!
//! The two traits a debugger frontend implements to drive the printers.
//!
//! A printer never owns the value it formats. The host hands it a [`Value`]
//! (a read-only accessor over a struct in the inspected process's memory) and
//! a [`DisplaySink`] (the variable-view entry being populated). The printer
//! reads fields through the accessor and writes display state into the sink,
//! then returns. Everything else — memory reads, type resolution, child
//! recursion — stays on the host's side of these traits.
//!
//! ## Why traits instead of concrete types?
//!
//! Different frontends resolve values very differently (live process memory,
//! core dumps, replay traces). The printers only need two operations from a
//! value — "give me a named field" and "give me this primitive" — so that is
//! the whole contract. Any host binding satisfying it is acceptable.

use std::fmt;

use crate::error::DumpResult;

/// Primitive kind a [`Value`] can be extracted as.
///
/// Used in [`crate::error::DumpError::KindMismatch`] to report what a printer
/// asked for versus what the host had.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind
{
    /// Unsigned integer (IDs, four-character codes, lengths).
    Integer,
    /// Signed integer (integer vector components).
    SignedInteger,
    /// Floating-point number.
    Float,
    /// Aggregate with named fields.
    Struct,
}

impl fmt::Display for ValueKind
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let label = match self {
            ValueKind::Integer => "integer",
            ValueKind::SignedInteger => "signed integer",
            ValueKind::Float => "float",
            ValueKind::Struct => "struct",
        };
        write!(f, "{label}")
    }
}

/// Read-only accessor over a value in the inspected process.
///
/// The host owns the underlying bytes for the duration of the display call;
/// printers borrow, read, and return. Field lookup may be lazy on the host
/// side, which is why [`Value::field`] returns a boxed accessor rather than
/// a plain reference.
pub trait Value
{
    /// Resolve a named struct field.
    ///
    /// ## Errors
    ///
    /// Returns [`crate::error::DumpError::MissingField`] if the field does
    /// not exist, or [`crate::error::DumpError::Host`] if the host fails to
    /// materialize it.
    fn field(&self, name: &str) -> DumpResult<Box<dyn Value + '_>>;

    /// Extract this value as an unsigned integer.
    ///
    /// ## Errors
    ///
    /// Returns [`crate::error::DumpError::KindMismatch`] if the value is not
    /// an integer.
    fn integer(&self) -> DumpResult<u64>;

    /// Extract this value as a signed integer.
    ///
    /// ## Errors
    ///
    /// Returns [`crate::error::DumpError::KindMismatch`] if the value is not
    /// an integer.
    fn signed_integer(&self) -> DumpResult<i64>;

    /// Extract this value as a floating-point number.
    ///
    /// ## Errors
    ///
    /// Returns [`crate::error::DumpError::KindMismatch`] if the value is not
    /// a float.
    fn floating_point(&self) -> DumpResult<f64>;
}

/// The display entry a printer populates.
///
/// Mirrors the host debugger's variable-view callback surface: one value
/// string, an optional type-name override, a declared child count, and — only
/// when the user has expanded the entry — a sequence of named sub-values.
pub trait DisplaySink
{
    /// Set the one-line display string for this entry.
    fn set_value(&mut self, text: &str);

    /// Override the type name the debugger reports for this entry.
    ///
    /// Used by wrapper types whose display is delegated to an inner field but
    /// whose reported type should stay the wrapper's own name.
    fn set_type(&mut self, name: &str);

    /// Declare how many children this entry exposes on expansion.
    fn set_child_count(&mut self, count: usize);

    /// Whether the user has expanded this entry in the variable view.
    ///
    /// Printers skip child emission entirely when this is `false`; the host
    /// will call again once the user expands the entry.
    fn is_expanded(&self) -> bool;

    /// Emit one named child, displayed by the host's own machinery.
    ///
    /// ## Errors
    ///
    /// Propagates any host-side failure to display the child.
    fn put_child(&mut self, name: &str, value: &dyn Value) -> DumpResult<()>;

    /// Delegate this entire entry's display to another value.
    ///
    /// The host formats `value` as if it were the entry itself (running its
    /// printer, if one is registered). Callers typically follow up with
    /// [`DisplaySink::set_type`] to keep the wrapper's type name.
    ///
    /// ## Errors
    ///
    /// Propagates any host-side failure to display the delegated value.
    fn put_item(&mut self, value: &dyn Value) -> DumpResult<()>;
}
