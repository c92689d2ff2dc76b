use super::value::display_number;

const UNITS: [&str; 4] = ["bytes", "KiB", "MiB", "GiB"];

/// Human-readable byte size with three significant digits, e.g. `1.17 KiB`.
#[must_use]
pub fn format_size(size: f64) -> String {
    if size.is_nan() {
        return "unknown size".to_owned();
    }
    if size <= 0.0 {
        return "0 bytes".to_owned();
    }
    let index = ((size.ln() / 1024f64.ln()).floor().max(0.0) as usize).min(UNITS.len() - 1);
    let scaled = size / 1024f64.powi(index as i32);
    format!("{} {}", display_number(round_significant(scaled, 3)), UNITS[index])
}

fn round_significant(value: f64, digits: i32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = digits - 1 - magnitude;
    let factor = 10f64.powi(decimals.abs());
    if decimals >= 0 {
        (value * factor).round() / factor
    } else {
        (value / factor).round() * factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_common_sizes() {
        assert_eq!(format_size(0.0), "0 bytes");
        assert_eq!(format_size(-4.0), "0 bytes");
        assert_eq!(format_size(512.0), "512 bytes");
        assert_eq!(format_size(1000.0), "1000 bytes");
        assert_eq!(format_size(1024.0), "1 KiB");
        assert_eq!(format_size(1200.0), "1.17 KiB");
        assert_eq!(format_size(1152.0), "1.13 KiB");
        assert_eq!(format_size(1_572_864.0), "1.5 MiB");
        assert_eq!(format_size(f64::NAN), "unknown size");
    }

    #[test]
    fn clamps_to_largest_unit() {
        assert_eq!(format_size(2.0 * 1024f64.powi(4)), "2050 GiB");
    }
}
