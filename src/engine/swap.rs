//! Constant-product swap arithmetic.
//!
//! Pure functions over a [`PoolState`] snapshot. The fee is deducted
//! from the input **before** the pricing formula is applied, rounded up
//! so the pool never under-collects; the output is rounded down in the
//! pool's favor. The fee remainder stays in the input-side reserve,
//! which is what makes the invariant product non-decreasing.

use crate::domain::{Amount, FeeBps, Rounding, SwapIntent};
use crate::error::{PoolError, Result};
use crate::math::{CheckedArithmetic, mul_div};
use crate::state::PoolState;

/// The computed outcome of a swap: output and fee portion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SwapAmounts {
    pub(crate) amount_out: Amount,
    pub(crate) fee: Amount,
}

/// Computes the output of a swap against the given state.
///
/// Formula, with `(reserve_in, reserve_out)` selected by direction:
///
/// ```text
/// fee        = ⌈amount_in · fee_bps / 10 000⌉
/// net_input  = amount_in − fee
/// amount_out = ⌊net_input · reserve_out / (reserve_in + net_input)⌋
/// ```
///
/// # Errors
///
/// - [`PoolError::InsufficientLiquidity`] if the output would reach or
///   exceed the output-side reserve (including any swap against an empty
///   pool).
/// - [`PoolError::SlippageExceeded`] if the output falls below the
///   caller's minimum.
/// - [`PoolError::Overflow`] if `reserve_in + net_input` exceeds `u64`.
pub(crate) fn swap_amounts(
    state: &PoolState,
    fee_rate: FeeBps,
    intent: &SwapIntent,
) -> Result<SwapAmounts> {
    let (reserve_in, reserve_out) = if intent.direction().is_x_to_y() {
        (state.reserve_x(), state.reserve_y())
    } else {
        (state.reserve_y(), state.reserve_x())
    };

    let fee = fee_rate.apply(intent.amount_in(), Rounding::Up);
    let net_input = intent.amount_in().safe_sub(&fee)?;

    let denominator = reserve_in.safe_add(&net_input)?;
    let amount_out = Amount::new(mul_div(
        net_input.get(),
        reserve_out.get(),
        denominator.get(),
        Rounding::Down,
    )?);

    if amount_out >= reserve_out {
        return Err(PoolError::InsufficientLiquidity);
    }
    if amount_out < intent.min_out() {
        return Err(PoolError::SlippageExceeded("swap output below minimum"));
    }

    Ok(SwapAmounts { amount_out, fee })
}
