//! String wrapper printers.
//!
//! The editor's string types wrap an internal string member. Display is
//! delegated wholesale to that member, then the reported type name is
//! overridden so the variable view still shows the wrapper's own type.

use crate::error::DumpResult;
use crate::host::{DisplaySink, Value};

/// Display a narrow string wrapper via its internal string field.
///
/// ## Errors
///
/// Propagates accessor failures for the `mInternalString` field.
pub fn tstring(sink: &mut dyn DisplaySink, value: &dyn Value) -> DumpResult<()>
{
    let inner = value.field("mInternalString")?;
    sink.put_item(inner.as_ref())?;
    sink.set_type("TString");
    Ok(())
}

/// Display a wide string wrapper via its internal string field.
///
/// ## Errors
///
/// Propagates accessor failures for the `mInternalString` field.
pub fn twide_string(sink: &mut dyn DisplaySink, value: &dyn Value) -> DumpResult<()>
{
    let inner = value.field("mInternalString")?;
    sink.put_item(inner.as_ref())?;
    sink.set_type("TWideString");
    Ok(())
}
