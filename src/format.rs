//! Number Formatting
//!
//! Compact magnitude strings for axis ticks and tooltips: 1500 becomes
//! "1.5k", 2500000 becomes "2.5M". Pure functions of the input value.

/// Scale units, largest first. A unit applies when `value / unit >= 1`.
const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "k")];

/// Round to one fractional digit, half away from zero.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// The largest applicable unit and the scaled quotient, or None for values
/// below 1000 which render plain.
fn scale(value: f64) -> Option<(f64, &'static str)> {
    UNITS
        .iter()
        .find(|(unit, _)| value / unit >= 1.0)
        .map(|(unit, suffix)| (round1(value / unit), *suffix))
}

/// Compact magnitude string: "999", "1.5k", "2.5M", "3.1B", "1.2T".
pub fn format_number(value: f64) -> String {
    match scale(value) {
        Some((scaled, suffix)) => format!("{:.1}{}", scaled, suffix),
        None => value.to_string(),
    }
}

/// Same scaling with a dollar prefix; sub-1000 values keep thousands
/// grouping in the integer part ("$999", "$1,234" would never occur here
/// since 1234 scales to "$1.2k").
pub fn format_currency(value: f64) -> String {
    match scale(value) {
        Some((scaled, suffix)) => format!("${:.1}{}", scaled, suffix),
        None => format!("${}", group_thousands(value)),
    }
}

/// Ratio to percentage with one fractional digit: 0.1234 becomes "12.3%".
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", round1(value * 100.0))
}

/// Locale-style thousands grouping of the integer part; any fractional part
/// is carried through untouched.
fn group_thousands(value: f64) -> String {
    let rendered = value.to_string();
    let (number, fraction) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), Some(frac_part.to_string())),
        None => (rendered, None),
    };

    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number.as_str()),
    };

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_plain_below_thousand() {
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(42.5), "42.5");
    }

    #[test]
    fn test_format_number_scaled_units() {
        assert_eq!(format_number(1500.0), "1.5k");
        assert_eq!(format_number(1000.0), "1.0k");
        assert_eq!(format_number(2_500_000.0), "2.5M");
        assert_eq!(format_number(3_200_000_000.0), "3.2B");
        assert_eq!(format_number(1_500_000_000_000.0), "1.5T");
    }

    #[test]
    fn test_format_number_rounds_half_away_from_zero() {
        assert_eq!(format_number(1950.0), "2.0k");
        assert_eq!(format_number(1949.0), "1.9k");
        assert_eq!(format_number(1_250_000.0), "1.3M");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1500.0), "$1.5k");
        assert_eq!(format_currency(2_500_000.0), "$2.5M");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(0.0), "$0");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.1234), "12.3%");
        assert_eq!(format_percentage(1.0), "100.0%");
        assert_eq!(format_percentage(0.0), "0.0%");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
        assert_eq!(group_thousands(-4200.0), "-4,200");
        assert_eq!(group_thousands(999.5), "999.5");
    }
}
