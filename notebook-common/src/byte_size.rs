//! Human-readable byte sizes

const UNITS: [&str; 7] = ["b", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Binary scale step between units
const STEP: f64 = 1024.0;

/// Format a byte count for display, e.g. `512 b` or `1.50 KB`.
///
/// Counts below 1024 are shown without decimals, everything else with two.
/// A value that rounds up to 1024 of one unit is shown as 1 of the next.
/// The unit is picked from the magnitude, so negative counts keep their sign
/// (`-2048` becomes `-2 KB`). Missing and non-finite counts render as an empty
/// string.
pub fn format_bytes(bytes: Option<f64>) -> String {
    let Some(bytes) = bytes else {
        return String::new();
    };
    if !bytes.is_finite() {
        return String::new();
    }

    let decimals = if bytes < STEP { 0 } else { 2 };
    let last_unit = UNITS.len() - 1;

    let mut value = bytes.abs();
    let mut unit = 0;
    while value >= STEP && unit < last_unit {
        value /= STEP;
        unit += 1;
    }

    // Rounding can carry into the next unit (1023.6 b, 1023.999 KB)
    let mut rounded = round_to(value, decimals);
    if rounded >= STEP && unit < last_unit {
        rounded = round_to(value / STEP, decimals);
        unit += 1;
    }

    let sign = if bytes < 0.0 && rounded != 0.0 { "-" } else { "" };
    format!("{sign}{rounded:.decimals$} {}", UNITS[unit])
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Format a file's size in bytes, as stored on a [`crate::FileRecord`]
pub fn format_file_size(bytes: Option<i64>) -> String {
    format_bytes(bytes.map(|b| b as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_size_is_empty() {
        assert_eq!(format_bytes(None), "");
        assert_eq!(format_file_size(None), "");
    }

    #[test]
    fn small_sizes_have_no_decimals() {
        assert_eq!(format_bytes(Some(0.0)), "0 b");
        assert_eq!(format_bytes(Some(512.0)), "512 b");
        assert_eq!(format_bytes(Some(1000.0)), "1000 b");
        assert_eq!(format_bytes(Some(512.4)), "512 b");
        assert_eq!(format_file_size(Some(10)), "10 b");
    }

    #[test]
    fn rounding_up_to_a_full_unit_moves_to_the_next_unit() {
        assert_eq!(format_bytes(Some(1023.6)), "1 KB");
        assert_eq!(format_file_size(Some(1_048_575)), "1.00 MB");
        assert_eq!(format_file_size(Some(1_073_741_823)), "1.00 GB");
    }

    #[test]
    fn large_sizes_have_two_decimals() {
        assert_eq!(format_bytes(Some(1024.0)), "1.00 KB");
        assert_eq!(format_bytes(Some(1536.0)), "1.50 KB");
        assert_eq!(format_file_size(Some(1_048_576)), "1.00 MB");
        assert_eq!(format_file_size(Some(5_905_580_032)), "5.50 GB");
    }

    #[test]
    fn largest_unit_caps_scaling() {
        let huge = 1024f64.powi(7);
        assert_eq!(format_bytes(Some(huge)), "1024.00 EB");
    }

    #[test]
    fn negative_sizes_keep_sign() {
        assert_eq!(format_bytes(Some(-512.0)), "-512 b");
        assert_eq!(format_bytes(Some(-2048.0)), "-2 KB");
    }

    #[test]
    fn negative_fractions_round_to_unsigned_zero() {
        assert_eq!(format_bytes(Some(-0.4)), "0 b");
        assert_eq!(format_bytes(Some(-0.6)), "-1 b");
    }

    #[test]
    fn kilobyte_is_1024_bytes() {
        assert_eq!(format_bytes(Some(1000.0)), "1000 b");
        assert_eq!(format_bytes(Some(1023.0)), "1023 b");
        assert_eq!(format_bytes(Some(1536.0)), "1.50 KB");
        assert_eq!(format_file_size(Some(1_000_000)), "976.56 KB");
    }

    #[test]
    fn non_finite_sizes_are_empty() {
        assert_eq!(format_bytes(Some(f64::NAN)), "");
        assert_eq!(format_bytes(Some(f64::INFINITY)), "");
        assert_eq!(format_bytes(Some(f64::NEG_INFINITY)), "");
    }
}
