//! # Printers
//!
//! One short, stateless formatting routine per editor value type. Each
//! printer reads pre-resolved struct fields through the host's [`Value`]
//! accessor and writes a display string (plus optional children) into the
//! [`DisplaySink`]. No printer keeps state across calls and none call each
//! other, except that the quaternion printer delegates to the 4-component
//! vector printer.

pub mod asset_id;
pub mod color;
pub mod fourcc;
pub mod string;
pub mod vector;

pub use asset_id::asset_id;
pub use color::color;
pub use fourcc::fourcc;
pub use string::{tstring, twide_string};
pub use vector::{quaternion, vector2f, vector2i, vector3f, vector4f};

use crate::error::DumpResult;
use crate::fragment::{bracket_join, float_fragment, Components};
use crate::host::{DisplaySink, Value};

/// Shared body for every float-component aggregate (colors and vectors).
///
/// Renders each named field as a trimmed fixed-point fragment, joins them in
/// brackets, declares one child per component, and emits the named children
/// when the entry is expanded.
pub(crate) fn put_float_components(sink: &mut dyn DisplaySink, value: &dyn Value, fields: &[&str]) -> DumpResult<()>
{
    let mut parts = Components::new();
    for name in fields {
        parts.push(float_fragment(value.field(name)?.floating_point()?));
    }
    sink.set_value(&bracket_join(&parts));
    sink.set_child_count(fields.len());

    if sink.is_expanded() {
        for name in fields {
            let component = value.field(name)?;
            sink.put_child(name, component.as_ref())?;
        }
    }
    Ok(())
}
