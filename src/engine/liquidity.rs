//! Deposit and withdrawal arithmetic.
//!
//! Pure functions over a [`PoolState`] snapshot: they compute the exact
//! amounts an operation would move without touching the state. The
//! lifecycle layer commits the results.
//!
//! Rounding policy: deposits round the required amounts **up** so a
//! depositor always pays at least their fair share and can never dilute
//! existing holders; withdrawals round the payouts **down** so the pool
//! never pays out more than the redeemer's exact share.

use crate::domain::{Amount, DepositIntent, Rounding, Shares, WithdrawIntent};
use crate::error::{PoolError, Result};
use crate::math::{integer_sqrt, mul_div};
use crate::state::PoolState;

/// The amounts a deposit would debit from the depositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DepositAmounts {
    pub(crate) amount_x: Amount,
    pub(crate) amount_y: Amount,
}

/// The amounts a withdrawal would pay out to the redeemer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WithdrawAmounts {
    pub(crate) amount_x: Amount,
    pub(crate) amount_y: Amount,
}

/// Computes the amounts debited by a deposit.
///
/// Two regimes:
///
/// - **Bootstrap** (empty pool): the caller's maxima become the initial
///   reserves exactly, fixing the launch exchange rate, and the requested
///   share count is minted unconditionally.
/// - **Proportional** (funded pool): the required amounts preserve the
///   current reserve ratio, rounded up, and are checked against the
///   caller's maxima.
///
/// # Errors
///
/// - [`PoolError::ZeroLiquidity`] on a bootstrap deposit with a zero
///   amount for either asset.
/// - [`PoolError::SlippageExceeded`] if a required amount exceeds the
///   corresponding maximum.
/// - [`PoolError::Overflow`] if a proportional amount does not fit `u64`.
pub(crate) fn deposit_amounts(
    state: &PoolState,
    intent: &DepositIntent,
) -> Result<DepositAmounts> {
    if state.share_supply().is_zero() {
        if intent.max_x().is_zero() || intent.max_y().is_zero() {
            return Err(PoolError::ZeroLiquidity);
        }
        return Ok(DepositAmounts {
            amount_x: intent.max_x(),
            amount_y: intent.max_y(),
        });
    }

    let supply = state.share_supply().get();
    let required_x = Amount::new(mul_div(
        intent.shares().get(),
        state.reserve_x().get(),
        supply,
        Rounding::Up,
    )?);
    let required_y = Amount::new(mul_div(
        intent.shares().get(),
        state.reserve_y().get(),
        supply,
        Rounding::Up,
    )?);

    if required_x > intent.max_x() {
        return Err(PoolError::SlippageExceeded("deposit requires more of asset X"));
    }
    if required_y > intent.max_y() {
        return Err(PoolError::SlippageExceeded("deposit requires more of asset Y"));
    }

    Ok(DepositAmounts {
        amount_x: required_x,
        amount_y: required_y,
    })
}

/// Computes the amounts paid out by a withdrawal.
///
/// # Errors
///
/// - [`PoolError::InsufficientShares`] if more shares are redeemed than
///   are outstanding.
/// - [`PoolError::SlippageExceeded`] if a payout falls below the
///   corresponding minimum.
pub(crate) fn withdraw_amounts(
    state: &PoolState,
    intent: &WithdrawIntent,
) -> Result<WithdrawAmounts> {
    if intent.shares() > state.share_supply() {
        return Err(PoolError::InsufficientShares);
    }

    let supply = state.share_supply().get();
    let out_x = Amount::new(mul_div(
        intent.shares().get(),
        state.reserve_x().get(),
        supply,
        Rounding::Down,
    )?);
    let out_y = Amount::new(mul_div(
        intent.shares().get(),
        state.reserve_y().get(),
        supply,
        Rounding::Down,
    )?);

    if out_x < intent.min_x() {
        return Err(PoolError::SlippageExceeded("withdrawal pays less of asset X"));
    }
    if out_y < intent.min_y() {
        return Err(PoolError::SlippageExceeded("withdrawal pays less of asset Y"));
    }

    Ok(WithdrawAmounts {
        amount_x: out_x,
        amount_y: out_y,
    })
}

/// Returns the geometric mean `⌊√(max_x · max_y)⌋` as a share count.
///
/// This is the common fair-launch policy for the first deposit: minting
/// the geometric mean of the deposited amounts makes the initial share
/// price independent of the deposit ratio. The engine does not impose
/// it — the bootstrap depositor chooses the share count — but hosts that
/// want the policy can pass this hint as the requested shares.
#[must_use]
pub(crate) fn bootstrap_shares_hint(max_x: Amount, max_y: Amount) -> Shares {
    Shares::new(integer_sqrt(max_x.get() as u128 * max_y.get() as u128))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn funded(rx: u64, ry: u64, supply: u64) -> PoolState {
        PoolState {
            reserve_x: Amount::new(rx),
            reserve_y: Amount::new(ry),
            share_supply: Shares::new(supply),
        }
    }

    fn deposit(shares: u64, max_x: u64, max_y: u64) -> DepositIntent {
        let Ok(intent) =
            DepositIntent::new(Shares::new(shares), Amount::new(max_x), Amount::new(max_y))
        else {
            panic!("valid intent");
        };
        intent
    }

    fn withdraw(shares: u64, min_x: u64, min_y: u64) -> WithdrawIntent {
        let Ok(intent) =
            WithdrawIntent::new(Shares::new(shares), Amount::new(min_x), Amount::new(min_y))
        else {
            panic!("valid intent");
        };
        intent
    }

    // -- deposit: bootstrap -------------------------------------------------

    #[test]
    fn bootstrap_takes_maxima_exactly() {
        let state = PoolState::empty();
        let Ok(amounts) = deposit_amounts(&state, &deposit(100, 500, 500)) else {
            panic!("expected Ok");
        };
        assert_eq!(amounts.amount_x, Amount::new(500));
        assert_eq!(amounts.amount_y, Amount::new(500));
    }

    #[test]
    fn bootstrap_zero_x_rejected() {
        let state = PoolState::empty();
        assert_eq!(
            deposit_amounts(&state, &deposit(100, 0, 500)),
            Err(PoolError::ZeroLiquidity)
        );
    }

    #[test]
    fn bootstrap_zero_y_rejected() {
        let state = PoolState::empty();
        assert_eq!(
            deposit_amounts(&state, &deposit(100, 500, 0)),
            Err(PoolError::ZeroLiquidity)
        );
    }

    // -- deposit: proportional ----------------------------------------------

    #[test]
    fn proportional_preserves_ratio() {
        // 10% of the supply requires 10% of each reserve.
        let state = funded(1_000, 2_000, 100);
        let Ok(amounts) = deposit_amounts(&state, &deposit(10, 100, 200)) else {
            panic!("expected Ok");
        };
        assert_eq!(amounts.amount_x, Amount::new(100));
        assert_eq!(amounts.amount_y, Amount::new(200));
    }

    #[test]
    fn proportional_rounds_up() {
        // 1 * 1000 / 3 = 333.33… → depositor pays 334.
        let state = funded(1_000, 1_000, 3);
        let Ok(amounts) = deposit_amounts(&state, &deposit(1, 334, 334)) else {
            panic!("expected Ok");
        };
        assert_eq!(amounts.amount_x, Amount::new(334));
        assert_eq!(amounts.amount_y, Amount::new(334));
    }

    #[test]
    fn proportional_exceeding_max_x_rejected() {
        let state = funded(1_000, 2_000, 100);
        assert_eq!(
            deposit_amounts(&state, &deposit(10, 99, 200)),
            Err(PoolError::SlippageExceeded("deposit requires more of asset X"))
        );
    }

    #[test]
    fn proportional_exceeding_max_y_rejected() {
        let state = funded(1_000, 2_000, 100);
        assert_eq!(
            deposit_amounts(&state, &deposit(10, 100, 199)),
            Err(PoolError::SlippageExceeded("deposit requires more of asset Y"))
        );
    }

    #[test]
    fn proportional_requires_at_least_one_unit() {
        // Even a tiny share of a large supply costs at least one unit of
        // each reserve, so free share minting is impossible.
        let state = funded(10, 10, 1_000_000);
        let Ok(amounts) = deposit_amounts(&state, &deposit(1, 10, 10)) else {
            panic!("expected Ok");
        };
        assert!(amounts.amount_x >= Amount::new(1));
        assert!(amounts.amount_y >= Amount::new(1));
    }

    #[test]
    fn proportional_overflow_rejected() {
        // Requested shares are so large the required amount exceeds u64.
        let state = funded(u64::MAX, u64::MAX, 1);
        let Err(PoolError::Overflow(_)) = deposit_amounts(&state, &deposit(2, u64::MAX, u64::MAX))
        else {
            panic!("expected Overflow");
        };
    }

    // -- withdraw -----------------------------------------------------------

    #[test]
    fn withdraw_proportional_share() {
        // 10 of 100 shares on (700, 358): ⌊70⌋ and ⌊35.8⌋.
        let state = funded(700, 358, 100);
        let Ok(amounts) = withdraw_amounts(&state, &withdraw(10, 1, 1)) else {
            panic!("expected Ok");
        };
        assert_eq!(amounts.amount_x, Amount::new(70));
        assert_eq!(amounts.amount_y, Amount::new(35));
    }

    #[test]
    fn withdraw_rounds_down() {
        let state = funded(1_000, 1_000, 3);
        let Ok(amounts) = withdraw_amounts(&state, &withdraw(1, 0, 0)) else {
            panic!("expected Ok");
        };
        // 1 * 1000 / 3 = 333.33… → redeemer receives 333.
        assert_eq!(amounts.amount_x, Amount::new(333));
        assert_eq!(amounts.amount_y, Amount::new(333));
    }

    #[test]
    fn withdraw_full_supply_empties_reserves() {
        let state = funded(700, 358, 100);
        let Ok(amounts) = withdraw_amounts(&state, &withdraw(100, 0, 0)) else {
            panic!("expected Ok");
        };
        assert_eq!(amounts.amount_x, Amount::new(700));
        assert_eq!(amounts.amount_y, Amount::new(358));
    }

    #[test]
    fn withdraw_more_than_supply_rejected() {
        let state = funded(700, 358, 100);
        assert_eq!(
            withdraw_amounts(&state, &withdraw(101, 0, 0)),
            Err(PoolError::InsufficientShares)
        );
    }

    #[test]
    fn withdraw_below_min_x_rejected() {
        let state = funded(700, 358, 100);
        assert_eq!(
            withdraw_amounts(&state, &withdraw(10, 71, 1)),
            Err(PoolError::SlippageExceeded("withdrawal pays less of asset X"))
        );
    }

    #[test]
    fn withdraw_below_min_y_rejected() {
        let state = funded(700, 358, 100);
        assert_eq!(
            withdraw_amounts(&state, &withdraw(10, 1, 36)),
            Err(PoolError::SlippageExceeded("withdrawal pays less of asset Y"))
        );
    }

    // -- bootstrap_shares_hint ----------------------------------------------

    #[test]
    fn hint_is_geometric_mean() {
        assert_eq!(
            bootstrap_shares_hint(Amount::new(500), Amount::new(500)),
            Shares::new(500)
        );
        assert_eq!(
            bootstrap_shares_hint(Amount::new(100), Amount::new(400)),
            Shares::new(200)
        );
    }

    #[test]
    fn hint_rounds_down() {
        // √(2 * 4) = 2.83 → 2
        assert_eq!(
            bootstrap_shares_hint(Amount::new(2), Amount::new(4)),
            Shares::new(2)
        );
    }

    #[test]
    fn hint_of_max_amounts_fits() {
        assert_eq!(
            bootstrap_shares_hint(Amount::MAX, Amount::MAX),
            Shares::new(u64::MAX)
        );
    }
}
