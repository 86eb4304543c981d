//! Common module for library exports

pub use crate::error::{DumpError, DumpResult};
pub use crate::fragment::float_fragment;
pub use crate::host::{DisplaySink, Value, ValueKind};
pub use crate::registry::{builtins, PrinterFn, PrinterRegistry};
