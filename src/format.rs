//! Human-readable size formatting.
//!
//! Chart labels keep a fixed mebibyte convention (see the chart module);
//! everything else that shows a size to the user, tooltips included, goes
//! through [`format_human_size`], which auto-scales its unit.

/// Unit suffixes for successive division by 1024.
const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with an auto-scaled unit.
///
/// Divides by 1024 until the value drops below 1024 or `TB` is reached,
/// then renders with at most two decimal digits, trailing zeros dropped:
/// `512 B`, `1.5 KB`, `2.34 MB`.
pub fn format_human_size(bytes: u64) -> String {
    let mut scaled = bytes as f64;
    let mut unit = 0;

    while scaled >= 1024.0 && unit < UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }

    format!("{} {}", trim_decimals(scaled), UNITS[unit])
}

/// Render a value with at most two decimal digits, dropping trailing
/// zeros and a dangling decimal point: `2`, `2.5`, `2.34`.
pub(crate) fn trim_decimals(value: f64) -> String {
    let rendered = format!("{:.2}", value);
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
