//! Pattern rendering for hour/minute/second values
//!
//! Tokens are `hh`, `mm`, `ss` (zero padded to two digits, never truncated)
//! and `h`, `m`, `s` (unpadded). The pattern is lower-cased first, then the
//! first occurrence of each token is substituted in the order
//! `hh`, `mm`, `ss`, `h`, `m`, `s`. Later occurrences of a token are not
//! substituted as the same value: `"hh hh"` renders as `"08 8h"` for hour 8.

use crate::values::HourMinuteSecond;

/// Pattern used by `Display` implementations
pub const DEFAULT_PATTERN: &str = "hh:mm:ss";

/// Render `hms` with `pattern`
pub fn render(hms: &HourMinuteSecond, pattern: &str) -> String {
    let h = hms.hour.to_string();
    let m = hms.minute.to_string();
    let s = hms.second.to_string();
    let hh = format!("{:0>2}", h);
    let mm = format!("{:0>2}", m);
    let ss = format!("{:0>2}", s);

    pattern
        .to_lowercase()
        .replacen("hh", &hh, 1)
        .replacen("mm", &mm, 1)
        .replacen("ss", &ss, 1)
        .replacen('h', &h, 1)
        .replacen('m', &m, 1)
        .replacen('s', &s, 1)
}
