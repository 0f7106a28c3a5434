//! Deposit and withdrawal specifications with slippage bounds.

use core::fmt;

use super::{Amount, Shares};
use crate::error::{PoolError, Result};

/// A validated deposit request: the share count to mint and the caller's
/// ceiling on the amounts debited from each side.
///
/// On an empty pool the maxima become the initial reserves exactly, so
/// the first depositor fixes the launch exchange rate. On a funded pool
/// the required amounts are derived from the current reserve ratio and
/// checked against the maxima.
///
/// # Invariants
///
/// `shares` is always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepositIntent {
    shares: Shares,
    max_x: Amount,
    max_y: Amount,
}

impl DepositIntent {
    /// Creates a new `DepositIntent`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ZeroLiquidity`] if `shares` is zero.
    pub const fn new(shares: Shares, max_x: Amount, max_y: Amount) -> Result<Self> {
        if shares.is_zero() {
            return Err(PoolError::ZeroLiquidity);
        }
        Ok(Self {
            shares,
            max_x,
            max_y,
        })
    }

    /// Returns the share count to mint.
    #[must_use]
    pub const fn shares(&self) -> Shares {
        self.shares
    }

    /// Returns the ceiling on the X-side debit.
    #[must_use]
    pub const fn max_x(&self) -> Amount {
        self.max_x
    }

    /// Returns the ceiling on the Y-side debit.
    #[must_use]
    pub const fn max_y(&self) -> Amount {
        self.max_y
    }
}

impl fmt::Display for DepositIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "deposit shares={} max_x={} max_y={}",
            self.shares, self.max_x, self.max_y
        )
    }
}

/// A validated withdrawal request: the share count to redeem and the
/// caller's floor on the amounts credited from each side.
///
/// # Invariants
///
/// `shares` is always non-zero. The minima may be zero, in which case the
/// caller accepts any proportional payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WithdrawIntent {
    shares: Shares,
    min_x: Amount,
    min_y: Amount,
}

impl WithdrawIntent {
    /// Creates a new `WithdrawIntent`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ZeroLiquidity`] if `shares` is zero.
    pub const fn new(shares: Shares, min_x: Amount, min_y: Amount) -> Result<Self> {
        if shares.is_zero() {
            return Err(PoolError::ZeroLiquidity);
        }
        Ok(Self {
            shares,
            min_x,
            min_y,
        })
    }

    /// Returns the share count to redeem.
    #[must_use]
    pub const fn shares(&self) -> Shares {
        self.shares
    }

    /// Returns the floor on the X-side payout.
    #[must_use]
    pub const fn min_x(&self) -> Amount {
        self.min_x
    }

    /// Returns the floor on the Y-side payout.
    #[must_use]
    pub const fn min_y(&self) -> Amount {
        self.min_y
    }
}

impl fmt::Display for WithdrawIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "withdraw shares={} min_x={} min_y={}",
            self.shares, self.min_x, self.min_y
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- DepositIntent ------------------------------------------------------

    #[test]
    fn deposit_valid() {
        let Ok(intent) = DepositIntent::new(Shares::new(100), Amount::new(500), Amount::new(500))
        else {
            panic!("expected Ok");
        };
        assert_eq!(intent.shares(), Shares::new(100));
        assert_eq!(intent.max_x(), Amount::new(500));
        assert_eq!(intent.max_y(), Amount::new(500));
    }

    #[test]
    fn deposit_zero_shares_rejected() {
        assert_eq!(
            DepositIntent::new(Shares::ZERO, Amount::new(500), Amount::new(500)),
            Err(PoolError::ZeroLiquidity)
        );
    }

    #[test]
    fn deposit_zero_maxima_allowed_at_construction() {
        // Zero maxima are rejected by the engine, not the intent: on a
        // funded pool a zero maximum is simply an unsatisfiable bound.
        assert!(DepositIntent::new(Shares::new(1), Amount::ZERO, Amount::ZERO).is_ok());
    }

    #[test]
    fn deposit_display() {
        let Ok(intent) = DepositIntent::new(Shares::new(5), Amount::new(10), Amount::new(20))
        else {
            panic!("expected Ok");
        };
        assert_eq!(format!("{intent}"), "deposit shares=5 max_x=10 max_y=20");
    }

    // -- WithdrawIntent -----------------------------------------------------

    #[test]
    fn withdraw_valid() {
        let Ok(intent) = WithdrawIntent::new(Shares::new(10), Amount::new(1), Amount::new(1))
        else {
            panic!("expected Ok");
        };
        assert_eq!(intent.shares(), Shares::new(10));
        assert_eq!(intent.min_x(), Amount::new(1));
        assert_eq!(intent.min_y(), Amount::new(1));
    }

    #[test]
    fn withdraw_zero_shares_rejected() {
        assert_eq!(
            WithdrawIntent::new(Shares::ZERO, Amount::new(1), Amount::new(1)),
            Err(PoolError::ZeroLiquidity)
        );
    }

    #[test]
    fn withdraw_zero_minima_allowed() {
        assert!(WithdrawIntent::new(Shares::new(1), Amount::ZERO, Amount::ZERO).is_ok());
    }
}
