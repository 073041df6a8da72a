//! Human-readable byte sizes and reduction percentages.
//!
//! Formatting matches the browser workbench readouts exactly, so the CLI
//! and the page report identical figures for identical inputs.

/// Base-1024 unit suffixes. GB is the realistic ceiling for a text paste.
const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Formats a byte count in base-1024 units.
///
/// Values are rounded to two decimal places with trailing zeros trimmed:
/// `0` → `"0 B"`, `1024` → `"1 KB"`, `1536` → `"1.5 KB"`, `1100` →
/// `"1.07 KB"`.
pub fn format_bytes(bytes: usize) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);

    let mut rendered = format!("{value:.2}");
    if rendered.contains('.') {
        rendered = rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }

    format!("{rendered} {}", UNITS[exponent])
}

/// Percentage decrease from `original` to `minified` byte sizes.
///
/// Returns `None` when `original` is zero: there is no meaningful ratio and
/// the caller displays a placeholder instead.
pub fn reduction_percent(original: usize, minified: usize) -> Option<f64> {
    if original == 0 {
        return None;
    }

    Some((1.0 - minified as f64 / original as f64) * 100.0)
}

/// Renders a reduction as the UI shows it: two decimals, or `-` when the
/// original was empty.
pub fn format_reduction(original: usize, minified: usize) -> String {
    match reduction_percent(original, minified) {
        Some(percent) => format!("{percent:.2}%"),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_zero() {
        assert_eq!(format_bytes(0), "0 B");
    }

    #[test]
    fn test_format_bytes_trims_trailing_zeros() {
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
    }

    #[test]
    fn test_format_bytes_keeps_significant_decimals() {
        assert_eq!(format_bytes(1100), "1.07 KB");
        assert_eq!(format_bytes(999), "999 B");
    }

    #[test]
    fn test_format_bytes_larger_units() {
        assert_eq!(format_bytes(1024 * 1024), "1 MB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024), "5 GB");
    }

    #[test]
    fn test_reduction_two_decimals() {
        assert_eq!(format_reduction(1000, 400), "60.00%");
        assert_eq!(format_reduction(3, 2), "33.33%");
    }

    #[test]
    fn test_reduction_zero_original_is_placeholder() {
        assert_eq!(reduction_percent(0, 0), None);
        assert_eq!(format_reduction(0, 0), "-");
    }

    #[test]
    fn test_reduction_can_be_negative_for_grown_output() {
        assert_eq!(format_reduction(100, 150), "-50.00%");
    }
}
