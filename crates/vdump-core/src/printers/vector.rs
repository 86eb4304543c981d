//! Vector and quaternion printers.
//!
//! All float vectors share the component rendering in
//! [`super::put_float_components`]; the integer 2D vector formats its
//! components as plain signed integers with no decimal point. The quaternion
//! printer is the 4-component float vector printer under another name — the
//! components are treated positionally, not semantically.

use super::put_float_components;
use crate::error::DumpResult;
use crate::host::{DisplaySink, Value};

/// Display a 2-component float vector as `[x, y]`.
///
/// ## Errors
///
/// Propagates accessor failures for the component fields.
pub fn vector2f(sink: &mut dyn DisplaySink, value: &dyn Value) -> DumpResult<()>
{
    put_float_components(sink, value, &["X", "Y"])
}

/// Display a 2-component integer vector as `[x, y]` with no decimal
/// formatting.
///
/// ## Errors
///
/// Propagates accessor failures for the component fields.
pub fn vector2i(sink: &mut dyn DisplaySink, value: &dyn Value) -> DumpResult<()>
{
    let x = value.field("X")?.signed_integer()?;
    let y = value.field("Y")?.signed_integer()?;
    sink.set_value(&format!("[{x}, {y}]"));
    sink.set_child_count(2);

    if sink.is_expanded() {
        for name in ["X", "Y"] {
            let component = value.field(name)?;
            sink.put_child(name, component.as_ref())?;
        }
    }
    Ok(())
}

/// Display a 3-component float vector as `[x, y, z]`.
///
/// ## Errors
///
/// Propagates accessor failures for the component fields.
pub fn vector3f(sink: &mut dyn DisplaySink, value: &dyn Value) -> DumpResult<()>
{
    put_float_components(sink, value, &["X", "Y", "Z"])
}

/// Display a 4-component float vector as `[x, y, z, w]`.
///
/// ## Errors
///
/// Propagates accessor failures for the component fields.
pub fn vector4f(sink: &mut dyn DisplaySink, value: &dyn Value) -> DumpResult<()>
{
    put_float_components(sink, value, &["X", "Y", "Z", "W"])
}

/// Display a quaternion exactly as a 4-component float vector.
///
/// ## Errors
///
/// Propagates accessor failures for the component fields.
pub fn quaternion(sink: &mut dyn DisplaySink, value: &dyn Value) -> DumpResult<()>
{
    vector4f(sink, value)
}
