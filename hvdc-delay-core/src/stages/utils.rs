//! Shared precondition checks
//!
//! Every formula guards its inputs with these before dividing by anything,
//! and its intermediate results with [`check_computed`] afterwards. They are
//! pure functions that either pass the value through or return
//! [`DelayError::InvalidParameter`] naming the argument.

use crate::{
    errors::{DelayError, DelayResult},
    traits::Validatable,
};

fn reject(name: &'static str, value: f64, reason: &'static str) -> DelayError {
    log_warn!("rejected {} = {}: {}", name, value, reason);
    DelayError::InvalidParameter { name, value, reason }
}

/// Value must be a finite number
pub fn check_finite(name: &'static str, value: f64) -> DelayResult<f64> {
    if value.is_valid() {
        Ok(value)
    } else {
        Err(reject(name, value, "not a finite number"))
    }
}

/// Value must be finite and strictly positive
pub fn check_positive(name: &'static str, value: f64) -> DelayResult<f64> {
    let value = check_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(reject(name, value, "must be positive"))
    }
}

/// Value must be finite and not negative
pub fn check_non_negative(name: &'static str, value: f64) -> DelayResult<f64> {
    let value = check_finite(name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(reject(name, value, "must not be negative"))
    }
}

/// Count must be at least `min`
pub fn check_count(name: &'static str, value: u32, min: u32) -> DelayResult<u32> {
    if value >= min {
        Ok(value)
    } else {
        Err(reject(name, f64::from(value), "below the minimum count"))
    }
}

/// A value derived from input `name` must still be finite
///
/// Finite inputs can overflow (a subnormal frequency inverts to infinity, two
/// near-`f64::MAX` delays sum to infinity). The error names the input that
/// drove the result out of range and carries that input's value.
pub fn check_computed(name: &'static str, input: f64, result: f64) -> DelayResult<f64> {
    if result.is_valid() {
        Ok(result)
    } else {
        Err(reject(name, input, "result is not a finite number"))
    }
}

/// Name and value of the largest of `candidates`; the first wins a tie
pub fn largest(candidates: &[(&'static str, f64)]) -> (&'static str, f64) {
    candidates
        .iter()
        .copied()
        .fold(("", f64::NEG_INFINITY), |best, candidate| {
            if candidate.1 > best.1 {
                candidate
            } else {
                best
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_check() {
        assert_eq!(check_positive("fm", 1.0), Ok(1.0));
        assert!(check_positive("fm", 0.0).is_err());
        assert!(check_positive("fm", -3.0).is_err());
        assert!(check_positive("fm", f64::NAN).is_err());
        assert!(check_positive("fm", f64::INFINITY).is_err());
    }

    #[test]
    fn non_negative_check() {
        assert_eq!(check_non_negative("len", 0.0), Ok(0.0));
        assert!(check_non_negative("len", -0.1).is_err());
        assert!(check_non_negative("len", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn computed_check_names_the_input() {
        assert_eq!(check_computed("fm", 2.0, 0.5), Ok(0.5));
        assert_eq!(
            check_computed("fm", 1e-310, f64::INFINITY),
            Err(DelayError::InvalidParameter {
                name: "fm",
                value: 1e-310,
                reason: "result is not a finite number",
            })
        );
        assert!(check_computed("fm", 0.0, f64::NAN).is_err());
    }

    #[test]
    fn largest_keeps_first_on_tie() {
        assert_eq!(largest(&[("a", 1.0), ("b", 3.0), ("c", 3.0)]), ("b", 3.0));
    }

    #[test]
    fn count_check() {
        assert_eq!(check_count("order", 1, 1), Ok(1));
        assert!(matches!(
            check_count("order", 0, 1),
            Err(DelayError::InvalidParameter { name: "order", .. })
        ));
    }
}
