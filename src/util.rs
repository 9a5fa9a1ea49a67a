// Formatting helpers for values written into CSS strings.

/// Formats a number the way a browser stringifies it inside a template
/// literal, so `1.0` prints as `1`, `-0.0` as `0`, NaN as `NaN`, and
/// magnitudes below `1e-6` or from `1e21` up in exponent form (`1e-7`, `1e+21`).
pub fn css_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let sci = format!("{:e}", value);
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return sci;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if (-6..21).contains(&exponent) {
        format!("{}", value)
    } else if exponent < 0 {
        format!("{mantissa}e{exponent}")
    } else {
        format!("{mantissa}e+{exponent}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_have_no_fraction() {
        assert_eq!(css_number(1.0), "1");
        assert_eq!(css_number(-3.0), "-3");
        assert_eq!(css_number(640.0), "640");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(css_number(-0.0), "0");
        assert_eq!(css_number(0.0), "0");
    }

    #[test]
    fn fractions_use_shortest_form() {
        assert_eq!(css_number(1.1), "1.1");
        assert_eq!(css_number(0.5), "0.5");
        assert_eq!(css_number(1.0 + 0.1 + 0.1), "1.2000000000000002");
    }

    #[test]
    fn tiny_and_huge_values_switch_to_exponent_form() {
        assert_eq!(css_number(1e-7), "1e-7");
        assert_eq!(css_number(-2.5e-9), "-2.5e-9");
        assert_eq!(css_number(1.3877787807814457e-16), "1.3877787807814457e-16");
        assert_eq!(css_number(1e21), "1e+21");
        assert_eq!(css_number(-1.5e300), "-1.5e+300");
    }

    #[test]
    fn exponent_thresholds_match_browser() {
        assert_eq!(css_number(1e-6), "0.000001");
        assert_eq!(css_number(0.0000015), "0.0000015");
        assert_eq!(css_number(1e20), "100000000000000000000");
        assert_eq!(css_number(123456789012345680000.0), "123456789012345680000");
    }

    #[test]
    fn non_finite_values_use_js_names() {
        assert_eq!(css_number(f64::NAN), "NaN");
        assert_eq!(css_number(f64::INFINITY), "Infinity");
        assert_eq!(css_number(f64::NEG_INFINITY), "-Infinity");
    }
}
