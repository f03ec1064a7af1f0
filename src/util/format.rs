/// Magnitude at and above which results switch to exponent notation.
const EXP_UPPER: f64 = 1e21;
/// Magnitude below which non-zero results switch to exponent notation.
const EXP_LOWER: f64 = 1e-7;
/// Largest number of decimals that can change how an `f64` prints.
pub const MAX_PRECISION: usize = 17;

/// Formats an evaluation result for display.
///
/// - NaN and infinities print as `NaN`, `Infinity` and `-Infinity`.
/// - Negative zero prints as `0`.
/// - Very large or very small magnitudes use exponent notation.
/// - With `precision`, the value is rounded to that many decimals and trailing
///   zeros are removed; without it the shortest round-trip form is used.
///   Precisions above [`MAX_PRECISION`] are treated as [`MAX_PRECISION`].
///
/// # Example
/// ```
/// use pcalc::util::format::format_value;
///
/// assert_eq!(format_value(0.1 + 0.2, Some(10)), "0.3");
/// assert_eq!(format_value(f64::NAN, None), "NaN");
/// ```
#[must_use]
pub fn format_value(value: f64, precision: Option<usize>) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return (if value > 0.0 { "Infinity" } else { "-Infinity" }).to_string();
    }

    let precision = precision.map(|digits| digits.min(MAX_PRECISION));
    let magnitude = value.abs();
    let scientific = magnitude >= EXP_UPPER || (magnitude != 0.0 && magnitude < EXP_LOWER);

    let text = match (precision, scientific) {
        (Some(digits), true) => {
            let formatted = format!("{value:.digits$e}");
            match formatted.split_once('e') {
                Some((mantissa, exponent)) => format!("{}e{exponent}", trim_fraction(mantissa)),
                None => formatted,
            }
        },
        (Some(digits), false) => trim_fraction(&format!("{value:.digits$}")).to_string(),
        (None, true) => format!("{value:e}"),
        (None, false) => format!("{value}"),
    };

    if text == "-0" { "0".to_string() } else { text }
}

/// Removes trailing zeros after a decimal point, and the point itself if
/// nothing remains after it.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_values_have_names() {
        assert_eq!(format_value(f64::NAN, Some(3)), "NaN");
        assert_eq!(format_value(f64::INFINITY, None), "Infinity");
        assert_eq!(format_value(f64::NEG_INFINITY, None), "-Infinity");
    }

    #[test]
    fn shortest_form_without_precision() {
        assert_eq!(format_value(14.0, None), "14");
        assert_eq!(format_value(0.5, None), "0.5");
        assert_eq!(format_value(0.1 + 0.2, None), "0.30000000000000004");
        assert_eq!(format_value(-0.0, None), "0");
    }

    #[test]
    fn precision_rounds_and_trims() {
        assert_eq!(format_value(std::f64::consts::PI, Some(4)), "3.1416");
        assert_eq!(format_value(2.5, Some(3)), "2.5");
        assert_eq!(format_value(7.0, Some(2)), "7");
        assert_eq!(format_value(-0.0001, Some(2)), "0");
        assert_eq!(format_value(3.7, Some(0)), "4");
    }

    #[test]
    fn oversized_precision_is_capped() {
        assert_eq!(format_value(1.5, Some(70_000)), "1.5");
        assert_eq!(format_value(1.5, Some(usize::MAX)), "1.5");
        assert_eq!(format_value(1.0 / 3.0, Some(70_000)),
                   format_value(1.0 / 3.0, Some(MAX_PRECISION)));
        assert_eq!(format_value(1.5e30, Some(70_000)), "1.5e30");
    }

    #[test]
    fn extreme_magnitudes_use_exponents() {
        assert_eq!(format_value(1e300, None), "1e300");
        assert_eq!(format_value(1.5e-8, None), "1.5e-8");
        assert_eq!(format_value(1.23456e25, Some(2)), "1.23e25");
        assert_eq!(format_value(2e21, Some(3)), "2e21");
    }
}
