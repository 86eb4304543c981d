//! Display-string fragments shared by the printers.
//!
//! All float-bearing types (colors, vectors, quaternions) render their
//! components with the same rule: six decimal digits, trailing zeros
//! stripped, and never a bare trailing point. Keeping the rule in one place
//! keeps every printer's output byte-compatible with the workflows that
//! grep these strings out of debugger transcripts.

use smallvec::SmallVec;

/// Components of a vector-like value, sized for the largest case (4).
pub(crate) type Components = SmallVec<[String; 4]>;

/// Format one float component: `%.6f`, trailing zeros stripped, with a
/// single `0` restored if stripping leaves a bare point.
///
/// `1.5` renders as `1.5`, `2.0` as `2.0` (never `2.` and never `2`).
pub fn float_fragment(value: f64) -> String
{
    let fixed = format!("{value:.6}");
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}

/// Join components with `", "` inside square brackets.
pub(crate) fn bracket_join(parts: &[String]) -> String
{
    format!("[{}]", parts.join(", "))
}
