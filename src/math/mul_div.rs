//! Widened multiply-then-divide and integer square root.
//!
//! These are the only places the engine multiplies or divides. The
//! product is always computed in 128 bits, so the only failure modes are
//! a zero denominator and a quotient that does not fit back into `u64`.
//! Both primitives are deterministic and side-effect-free.

use crate::domain::Rounding;
use crate::error::{PoolError, Result};

/// Computes `a * b / denominator` with an explicit rounding direction.
///
/// The intermediate product is widened to `u128` and therefore never
/// overflows for `u64` inputs.
///
/// # Errors
///
/// Returns [`PoolError::Overflow`] if `denominator` is zero or the
/// quotient exceeds `u64::MAX`.
pub const fn mul_div(a: u64, b: u64, denominator: u64, rounding: Rounding) -> Result<u64> {
    if denominator == 0 {
        return Err(PoolError::Overflow("mul_div with zero denominator"));
    }

    let product = a as u128 * b as u128;
    let divisor = denominator as u128;

    let quotient = match rounding {
        Rounding::Down => product / divisor,
        Rounding::Up => {
            let q = product / divisor;
            if product % divisor != 0 {
                // q < product <= u128::MAX, so q + 1 cannot overflow.
                q + 1
            } else {
                q
            }
        }
    };

    if quotient > u64::MAX as u128 {
        return Err(PoolError::Overflow("mul_div quotient exceeds u64"));
    }
    Ok(quotient as u64)
}

/// Returns `⌊√n⌋` via Newton's method.
///
/// Infallible: the square root of any `u128` fits in a `u64`.
#[must_use]
pub const fn integer_sqrt(n: u128) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = (x + 1) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    // x = ⌊√n⌋ <= ⌊√(u128::MAX)⌋ = u64::MAX
    x as u64
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- mul_div ------------------------------------------------------------

    #[test]
    fn exact_division() {
        assert_eq!(mul_div(6, 10, 4, Rounding::Down), Ok(15));
        assert_eq!(mul_div(6, 10, 4, Rounding::Up), Ok(15));
    }

    #[test]
    fn round_down_truncates() {
        // 10 * 7 / 3 = 23.33…
        assert_eq!(mul_div(10, 7, 3, Rounding::Down), Ok(23));
    }

    #[test]
    fn round_up_ceils() {
        assert_eq!(mul_div(10, 7, 3, Rounding::Up), Ok(24));
    }

    #[test]
    fn zero_numerator() {
        assert_eq!(mul_div(0, 1_000, 7, Rounding::Up), Ok(0));
    }

    #[test]
    fn zero_denominator_rejected() {
        let Err(PoolError::Overflow(_)) = mul_div(1, 1, 0, Rounding::Down) else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn widened_product_does_not_overflow() {
        // u64::MAX * u64::MAX would overflow a 64-bit product but the
        // quotient fits: MAX * MAX / MAX = MAX.
        assert_eq!(
            mul_div(u64::MAX, u64::MAX, u64::MAX, Rounding::Down),
            Ok(u64::MAX)
        );
    }

    #[test]
    fn quotient_exceeding_u64_rejected() {
        let Err(PoolError::Overflow(_)) = mul_div(u64::MAX, 2, 1, Rounding::Down) else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn round_up_at_u64_boundary_rejected() {
        // floor fits exactly at MAX, ceil would need MAX + 1.
        assert_eq!(
            mul_div(u64::MAX, 3, 3, Rounding::Up),
            Ok(u64::MAX)
        );
        let Err(PoolError::Overflow(_)) = mul_div(u64::MAX, 4, 3, Rounding::Up) else {
            panic!("expected Overflow");
        };
    }

    #[test]
    fn swap_scenario_quotient() {
        // ⌊199 * 500 / 699⌋ = 142
        assert_eq!(mul_div(199, 500, 699, Rounding::Down), Ok(142));
    }

    // -- integer_sqrt -------------------------------------------------------

    #[test]
    fn sqrt_zero() {
        assert_eq!(integer_sqrt(0), 0);
    }

    #[test]
    fn sqrt_one() {
        assert_eq!(integer_sqrt(1), 1);
    }

    #[test]
    fn sqrt_perfect_square() {
        assert_eq!(integer_sqrt(1_000_000), 1_000);
    }

    #[test]
    fn sqrt_rounds_down() {
        assert_eq!(integer_sqrt(2), 1);
        assert_eq!(integer_sqrt(999_999), 999);
    }

    #[test]
    fn sqrt_of_max_product_fits() {
        let n = u64::MAX as u128 * u64::MAX as u128;
        assert_eq!(integer_sqrt(n), u64::MAX);
    }

    #[test]
    fn sqrt_monotone_around_squares() {
        for k in [2u128, 10, 255, 4_096, 1 << 32] {
            assert_eq!(integer_sqrt(k * k), k as u64);
            assert_eq!(integer_sqrt(k * k - 1), (k - 1) as u64);
        }
    }
}
