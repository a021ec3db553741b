use crate::utils::error::{Result, TemplateError};
use num_bigint::BigInt;
use num_traits::{One, ToPrimitive, Zero};
use std::fmt;

/// Result of `base ** exponent`.
#[derive(Debug, Clone, PartialEq)]
pub enum Power {
    /// Non-negative exponents stay in exact integer arithmetic.
    Exact(BigInt),
    /// Negative exponents produce a float.
    Fraction(f64),
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Power::Exact(value) => write!(f, "{}", value),
            Power::Fraction(value) => f.write_str(&float_repr(*value)),
        }
    }
}

/// Shortest round-trip rendering of a float: fixed notation with at least
/// one fractional digit for decimal exponents in `-4..16`, otherwise
/// scientific with a signed two-digit exponent (`1e-05`, `1.5e+16`).
pub fn float_repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value == 0.0 {
        return format!("{}0.0", sign);
    }

    // `{:e}` yields the shortest digits that round-trip, e.g. `3.0517578125e-5`.
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exp)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return scientific;
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if !(-4..16).contains(&exp) {
        let mut body = digits[..1].to_string();
        if digits.len() > 1 {
            body.push('.');
            body.push_str(&digits[1..]);
        }
        let exp_sign = if exp < 0 { '-' } else { '+' };
        return format!("{}{}e{}{:02}", sign, body, exp_sign, exp.abs());
    }

    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return format!("{}0.{}{}", sign, zeros, digits);
    }

    let point = exp as usize + 1;
    if digits.len() <= point {
        format!("{}{}{}.0", sign, digits, "0".repeat(point - digits.len()))
    } else {
        format!("{}{}.{}", sign, &digits[..point], &digits[point..])
    }
}

pub fn power(base: &BigInt, exponent: i64) -> Result<Power> {
    if exponent < 0 {
        if base.is_zero() {
            return Err(TemplateError::ZeroDivisionError { exponent });
        }
        let base_f = base
            .to_f64()
            .filter(|b| b.is_finite())
            .ok_or_else(|| TemplateError::OverflowError {
                base: base.to_string(),
                exponent,
                reason: "integer too large to convert to float".to_string(),
            })?;
        return Ok(Power::Fraction(base_f.powf(exponent as f64)));
    }

    let minus_one = -BigInt::one();
    let value = if exponent == 0 || base.is_one() {
        BigInt::one()
    } else if base.is_zero() {
        BigInt::zero()
    } else if *base == minus_one {
        if exponent % 2 == 0 {
            BigInt::one()
        } else {
            minus_one
        }
    } else {
        let exp = u32::try_from(exponent).map_err(|_| TemplateError::OverflowError {
            base: base.to_string(),
            exponent,
            reason: "result too large to compute".to_string(),
        })?;
        base.pow(exp)
    };

    Ok(Power::Exact(value))
}

/// The line the `power` binary prints: `n ** p = result`.
pub fn power_line(base: &BigInt, exponent: i64) -> Result<String> {
    let result = power(base, exponent)?;
    Ok(format!("{} ** {} = {}", base, exponent, result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(value: i64) -> BigInt {
        BigInt::from(value)
    }

    fn line(base: i64, exponent: i64) -> String {
        power_line(&big(base), exponent).unwrap()
    }

    #[test]
    fn test_non_negative_exponents() {
        assert_eq!(power(&big(2), 3).unwrap(), Power::Exact(big(8)));
        assert_eq!(power(&big(-3), 3).unwrap(), Power::Exact(big(-27)));
        assert_eq!(power(&big(7), 0).unwrap(), Power::Exact(big(1)));
        assert_eq!(power(&big(0), 0).unwrap(), Power::Exact(big(1)));
        assert_eq!(power(&big(0), 5).unwrap(), Power::Exact(big(0)));
    }

    #[test]
    fn test_results_beyond_machine_integers() {
        assert_eq!(
            line(2, 127),
            "2 ** 127 = 170141183460469231731687303715884105728"
        );
        assert_eq!(
            line(10, 40),
            "10 ** 40 = 10000000000000000000000000000000000000000"
        );

        let base: BigInt = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(
            power_line(&base, 2).unwrap(),
            "123456789012345678901234567890 ** 2 = \
             15241578753238836750495351562536198787501905199875019052100"
        );
    }

    #[test]
    fn test_unit_bases_with_huge_exponents() {
        assert_eq!(power(&big(1), i64::MAX).unwrap(), Power::Exact(big(1)));
        assert_eq!(power(&big(-1), i64::MAX).unwrap(), Power::Exact(big(-1)));
        assert_eq!(power(&big(-1), i64::MAX - 1).unwrap(), Power::Exact(big(1)));
        assert!(matches!(
            power(&big(3), 5_000_000_000),
            Err(TemplateError::OverflowError { .. })
        ));
    }

    #[test]
    fn test_negative_exponents() {
        assert_eq!(power(&big(2), -1).unwrap(), Power::Fraction(0.5));
        assert_eq!(power(&big(4), -2).unwrap(), Power::Fraction(0.0625));
        assert!(matches!(
            power(&big(0), -1),
            Err(TemplateError::ZeroDivisionError { exponent: -1 })
        ));

        let huge: BigInt = "1".repeat(400).parse().unwrap();
        assert!(matches!(
            power(&huge, -1),
            Err(TemplateError::OverflowError { .. })
        ));
    }

    #[test]
    fn test_power_line_format() {
        assert_eq!(line(2, 10), "2 ** 10 = 1024");
        assert_eq!(line(-2, 3), "-2 ** 3 = -8");
        assert_eq!(line(2, -1), "2 ** -1 = 0.5");
        assert_eq!(line(1, -1), "1 ** -1 = 1.0");
        assert_eq!(line(2, -15), "2 ** -15 = 3.0517578125e-05");
        assert_eq!(line(10, -5), "10 ** -5 = 1e-05");
        assert_eq!(line(-2, -3), "-2 ** -3 = -0.125");
    }

    #[test]
    fn test_float_repr() {
        assert_eq!(float_repr(0.0001), "0.0001");
        assert_eq!(float_repr(0.00001), "1e-05");
        assert_eq!(float_repr(1.0), "1.0");
        assert_eq!(float_repr(123.5), "123.5");
        assert_eq!(float_repr(1e15), "1000000000000000.0");
        assert_eq!(float_repr(1e16), "1e+16");
        assert_eq!(float_repr(1.5e300), "1.5e+300");
        assert_eq!(float_repr(-0.0), "-0.0");
        assert_eq!(float_repr(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(float_repr(f64::INFINITY), "inf");
    }
}
