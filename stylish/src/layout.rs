//! Width measurement and fill construction.

use tracing::debug;
use unicode_width::UnicodeWidthStr;

/// Character used to pad headers, process markers and sub tasks.
pub const COLON_FILL: char = ':';

/// Character used to open sub task footers.
pub const CHEVRON_FILL: char = '<';

/// Fixed run length of sub task banners and footers.
pub const SUB_TASK_FILL_LEN: usize = 9;

/// Success marker.
pub const CHECK: &str = "[√]";

/// Failure marker.
pub const BANG: &str = "[!]";

/// Returns the number of terminal columns `text` occupies.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Returns `ch` repeated `count` times.
pub fn fill(ch: char, count: usize) -> String {
    std::iter::repeat(ch).take(count).collect()
}

/// Returns how many fill columns remain once `reserved` columns are spent.
///
/// Oversized input collapses the fill to zero instead of failing.
pub fn remaining(kind: &'static str, width: usize, reserved: usize) -> usize {
    if reserved > width {
        debug!(kind, width, overflow = reserved - width, "text exceeds target width");
    }
    width.saturating_sub(reserved)
}

/// Splits `pad` columns into left and right runs, the odd column going left.
pub fn split_pad(pad: usize) -> (usize, usize) {
    let right = pad / 2;
    (pad - right, right)
}
