const UNITS: [&str; 7] = ["B", "kB", "MB", "GB", "TB", "PB", "EB"];
const BASE: u64 = 1000;

/// Formats a byte count with SI units, e.g. `38 B`, `1.2 kB`, `263 kB`.
///
/// Counts below ten bytes are printed as integers. Larger values are rounded
/// to one decimal and keep that decimal only while below ten.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 10 {
        return format!("{bytes} B");
    }
    let mut exponent = 0;
    let mut scale = 1u64;
    while exponent + 1 < UNITS.len() && bytes / scale >= BASE {
        scale *= BASE;
        exponent += 1;
    }
    let value = (bytes as f64 / scale as f64 * 10.0 + 0.5).floor() / 10.0;
    if value < 10.0 {
        format!("{value:.1} {}", UNITS[exponent])
    } else {
        format!("{value:.0} {}", UNITS[exponent])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_counts_are_plain_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(9), "9 B");
    }

    #[test]
    fn bytes_without_decimal_from_ten() {
        assert_eq!(format_bytes(38), "38 B");
        assert_eq!(format_bytes(999), "999 B");
    }

    #[test]
    fn one_decimal_below_ten_units() {
        assert_eq!(format_bytes(1_000), "1.0 kB");
        assert_eq!(format_bytes(1_234), "1.2 kB");
        assert_eq!(format_bytes(5_500_000), "5.5 MB");
    }

    #[test]
    fn whole_units_from_ten() {
        assert_eq!(format_bytes(263_200), "263 kB");
        assert_eq!(format_bytes(82_854_982), "83 MB");
    }

    #[test]
    fn largest_unit() {
        assert_eq!(format_bytes(u64::MAX), "18 EB");
    }
}
