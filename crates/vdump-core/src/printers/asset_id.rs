//! Asset identifier printer.
//!
//! Asset IDs come in a 32-bit and a 64-bit flavor, distinguished at runtime
//! by a byte-length field on the struct. The all-ones bit pattern is the
//! editor's "no asset" sentinel in both widths and is displayed as an
//! explicit invalid marker instead of a hex string.

use crate::error::DumpResult;
use crate::host::{DisplaySink, Value};

/// Display an asset ID as zero-padded uppercase hex sized to its bit width.
///
/// - length 4: `[XXXXXXXX]`, or `Invalid 32-bit ID` for the all-ones sentinel
/// - length 8: `[XXXXXXXXXXXXXXXX]`, or `Invalid 64-bit ID` for the sentinel
/// - any other length: `[Invalid]`
///
/// ## Errors
///
/// Propagates accessor failures for the `mLength` and `mID` fields.
pub fn asset_id(sink: &mut dyn DisplaySink, value: &dyn Value) -> DumpResult<()>
{
    let length = value.field("mLength")?.integer()?;
    let id = value.field("mID")?.integer()?;

    let text = match length {
        4 if id == u64::from(u32::MAX) => "Invalid 32-bit ID".to_string(),
        4 => format!("[{id:08X}]"),
        8 if id == u64::MAX => "Invalid 64-bit ID".to_string(),
        8 => format!("[{id:016X}]"),
        _ => "[Invalid]".to_string(),
    };
    sink.set_value(&text);
    Ok(())
}
