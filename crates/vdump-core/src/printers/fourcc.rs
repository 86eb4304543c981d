//! Four-character code printer.
//!
//! The editor tags resource formats with a 32-bit integer holding four ASCII
//! bytes, most-significant byte first. `0x54585452` reads as `'TXTR'`.

use crate::error::DumpResult;
use crate::host::{DisplaySink, Value};

/// Display a four-character code as a single-quoted 4-character string.
///
/// The value is split big-endian, so the most-significant byte becomes the
/// first character.
///
/// ## Errors
///
/// Propagates accessor failures for the `mFourCC` field.
pub fn fourcc(sink: &mut dyn DisplaySink, value: &dyn Value) -> DumpResult<()>
{
    let raw = value.field("mFourCC")?.integer()?;
    // Stored as a 32-bit field; anything above bit 31 is not part of the code.
    let bytes = (raw as u32).to_be_bytes();
    let text = format!(
        "'{}{}{}{}'",
        bytes[0] as char, bytes[1] as char, bytes[2] as char, bytes[3] as char
    );
    sink.set_value(&text);
    Ok(())
}
