//! RGBA color printer.

use super::put_float_components;
use crate::error::DumpResult;
use crate::host::{DisplaySink, Value};

/// Display an RGBA color as `[r, g, b, a]` with trimmed float channels,
/// exposing the four channels as children on expansion.
///
/// ## Errors
///
/// Propagates accessor failures for the channel fields.
pub fn color(sink: &mut dyn DisplaySink, value: &dyn Value) -> DumpResult<()>
{
    put_float_components(sink, value, &["R", "G", "B", "A"])
}
