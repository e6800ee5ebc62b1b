/// Significant digits kept when a real number is written to a dataset file.
pub const SIGNIFICANT_DIGITS: usize = 6;

/// Renders `value` in `%g` style with six significant digits.
///
/// Values whose decimal exponent lies in `[-4, 6)` are written in fixed notation,
/// everything else in scientific notation with a signed, two-digit exponent.
/// Trailing zeros and a dangling decimal point are removed in both cases, so
/// `12.5` stays `12.5`, `1200.0` becomes `1200` and `1234567.0` becomes `1.23457e+06`.
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to the target precision first tells us the exponent after rounding,
    // e.g. 999999.7 rounds up to 1.00000e6.
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_notation() {
        assert_eq!(format_real(10.0), "10");
        assert_eq!(format_real(-50.0), "-50");
        assert_eq!(format_real(12.5), "12.5");
        assert_eq!(format_real(1200.0), "1200");
        assert_eq!(format_real(123.456789), "123.457");
        assert_eq!(format_real(-999.9999), "-1000");
        assert_eq!(format_real(0.0001), "0.0001");
        assert_eq!(format_real(1.0 / 3.0), "0.333333");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(format_real(1234567.0), "1.23457e+06");
        assert_eq!(format_real(999999.7), "1e+06");
        assert_eq!(format_real(0.00001234), "1.234e-05");
        assert_eq!(format_real(-2.5e-10), "-2.5e-10");
        assert_eq!(format_real(1e100), "1e+100");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_real(0.0), "0");
        assert_eq!(format_real(-0.0), "-0");
        assert_eq!(format_real(f64::INFINITY), "inf");
        assert_eq!(format_real(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_real(f64::NAN), "nan");
    }
}
