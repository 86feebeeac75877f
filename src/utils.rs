use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to the nearest integer, ties go toward positive infinity.
///
/// `f64::round` sends ties away from zero, which disagrees for negative halves.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();

    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Two decimals, exact ties rounded away from zero.
///
/// Works on the exact binary value, so `1.005` (stored just below the tie) stays `1.00`
/// while `10.125` (an exact tie) becomes `10.13`.
pub fn format_money(value: f64) -> String {
    if value == 0.0 {
        return "0.00".to_owned()
    }

    match Decimal::from_f64_retain(value) {
        Some(exact) => format!("{:.2}", exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)),
        None => format!("{value:.2}"),
    }
}

/// Shown instead of a rate when the period has no days.
pub const NO_PERCENTAGE: &str = "N/A";

pub fn format_percentage(part: f64, whole: f64) -> String {
    let percentage = part / whole * 100.0;

    if whole == 0.0 || !percentage.is_finite() {
        return NO_PERCENTAGE.to_owned()
    }

    format!("{percentage:.1}")
}

/// `<bill_to or "invoice">-<invoice_number>.txt`
pub fn download_file_name(bill_to: Option<&str>, invoice_number: &str) -> String {
    let stem = bill_to
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("invoice");

    format!("{stem}-{invoice_number}.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(14084.85), 14085.0);
        assert_eq!(round_half_up(17621.0816), 17621.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
        assert!(round_half_up(f64::NAN).is_nan());
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(12116.0), "12116.00");
        assert_eq!(format_money(1343.9808), "1343.98");
        assert_eq!(format_money(f64::NAN), "NaN");
        assert_eq!(format_money(-0.0), "0.00");
    }

    #[test]
    fn test_format_money_ties_round_up() {
        assert_eq!(format_money(10.125), "10.13");
        assert_eq!(format_money(0.125), "0.13");
        assert_eq!(format_money(2.675), "2.67");
        assert_eq!(format_money(1.005), "1.00");
        assert_eq!(format_money(-10.125), "-10.13");
    }

    #[test]
    fn test_format_money_reparses() {
        for value in [0.0, 12116.0, 1575.08, 393.77, 14084.85, 848.12, 14933.12] {
            let parsed: f64 = format_money(value).parse().unwrap();
            assert!((parsed - value).abs() < 1e-9, "{value} came back as {parsed}");
        }
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(26.0, 30.0), "86.7");
        assert_eq!(format_percentage(30.0, 30.0), "100.0");
    }

    #[test]
    fn test_format_percentage_without_days() {
        assert_eq!(format_percentage(0.0, 0.0), NO_PERCENTAGE);
        assert_eq!(format_percentage(5.0, 0.0), NO_PERCENTAGE);
        assert_eq!(format_percentage(f64::NAN, 30.0), NO_PERCENTAGE);
    }

    #[test]
    fn test_download_file_name() {
        assert_eq!(download_file_name(None, "INV20261018123"), "invoice-INV20261018123.txt");
        assert_eq!(download_file_name(Some("  "), "INV20261018123"), "invoice-INV20261018123.txt");
        assert_eq!(download_file_name(Some("ACME"), "INV20261018123"), "ACME-INV20261018123.txt");
    }
}
