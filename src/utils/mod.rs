//! Residue helpers shared by systems and elements.
//!
//! All reduction in the crate goes through [`floor_mod`], so every stored
//! component lies in `[0, modulus)` regardless of the sign of its input.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;

use crate::error::{Error, Result};

/// Reduce `value` into `[0, modulus)` using floor (Euclidean) semantics.
///
/// `modulus` must be positive; callers validate it with
/// [`validate_modulus`] before any element exists.
///
/// # Examples
///
/// ```
/// use modalg::utils::floor_mod;
/// use num_bigint::BigInt;
///
/// let seven = BigInt::from(7);
/// assert_eq!(floor_mod(&BigInt::from(10), &seven), BigInt::from(3));
/// assert_eq!(floor_mod(&BigInt::from(-1), &seven), BigInt::from(6));
/// assert_eq!(floor_mod(&BigInt::from(-14), &seven), BigInt::from(0));
/// ```
#[must_use]
pub fn floor_mod(value: &BigInt, modulus: &BigInt) -> BigInt {
    value.mod_floor(modulus)
}

/// Check that `modulus` defines a residue ring with at least two elements.
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`] if `modulus < 2`.
///
/// # Examples
///
/// ```
/// use modalg::utils::validate_modulus;
/// use num_bigint::BigInt;
///
/// assert!(validate_modulus(&BigInt::from(2)).is_ok());
/// assert!(validate_modulus(&BigInt::from(1)).is_err());
/// assert!(validate_modulus(&BigInt::from(-7)).is_err());
/// ```
pub fn validate_modulus(modulus: &BigInt) -> Result<()> {
    if *modulus <= BigInt::one() {
        return Err(Error::invalid_configuration(format!(
            "modulus {modulus} is below 2"
        )));
    }
    Ok(())
}

/// Render a slice of residues as `[x0, x1, ...]`.
pub(crate) fn format_vector(values: &[BigInt]) -> String {
    let parts: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: i64) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn test_floor_mod_positive() {
        assert_eq!(floor_mod(&big(0), &big(5)), big(0));
        assert_eq!(floor_mod(&big(4), &big(5)), big(4));
        assert_eq!(floor_mod(&big(5), &big(5)), big(0));
        assert_eq!(floor_mod(&big(123), &big(10)), big(3));
    }

    #[test]
    fn test_floor_mod_negative() {
        assert_eq!(floor_mod(&big(-1), &big(5)), big(4));
        assert_eq!(floor_mod(&big(-5), &big(5)), big(0));
        assert_eq!(floor_mod(&big(-6), &big(5)), big(4));
        assert_eq!(floor_mod(&big(-123), &big(10)), big(7));
    }

    #[test]
    fn test_floor_mod_large() {
        let m: BigInt = "340282366920938463463374607431768211297".parse().unwrap();
        let v: BigInt = "-340282366920938463463374607431768211298".parse().unwrap();
        assert_eq!(floor_mod(&v, &m), &m - big(1));
    }

    #[test]
    fn test_validate_modulus() {
        assert!(validate_modulus(&big(2)).is_ok());
        assert!(validate_modulus(&big(1_000_003)).is_ok());
        assert!(matches!(
            validate_modulus(&big(1)),
            Err(Error::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            validate_modulus(&big(0)),
            Err(Error::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            validate_modulus(&big(-3)),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_format_vector() {
        assert_eq!(format_vector(&[big(1), big(2), big(3)]), "[1, 2, 3]");
        assert_eq!(format_vector(&[]), "[]");
    }
}
