//! Mutable pool state: reserves and outstanding share supply.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, Shares};

/// The mutable accounting record of a pool.
///
/// A pool is either fully **empty** (both reserves and the share supply
/// are zero) or fully **funded** (all three are positive); no mixed state
/// is ever observable. The state transitions between the two only via
/// the first deposit and a withdrawal that redeems the entire supply.
///
/// The fields are only written by the pool lifecycle
/// ([`Pool`](crate::Pool)); everything else reads them through the
/// accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PoolState {
    pub(crate) reserve_x: Amount,
    pub(crate) reserve_y: Amount,
    pub(crate) share_supply: Shares,
}

impl PoolState {
    /// Creates the empty state a pool starts in.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            reserve_x: Amount::ZERO,
            reserve_y: Amount::ZERO,
            share_supply: Shares::ZERO,
        }
    }

    /// Returns the X-side reserve.
    #[must_use]
    pub const fn reserve_x(&self) -> Amount {
        self.reserve_x
    }

    /// Returns the Y-side reserve.
    #[must_use]
    pub const fn reserve_y(&self) -> Amount {
        self.reserve_y
    }

    /// Returns the outstanding pool-share supply.
    #[must_use]
    pub const fn share_supply(&self) -> Shares {
        self.share_supply
    }

    /// Returns `true` if the pool holds nothing and has no shares out.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.share_supply.is_zero()
    }

    /// Returns the invariant product `reserve_x · reserve_y`, widened so
    /// it cannot overflow.
    #[must_use]
    pub const fn invariant_product(&self) -> u128 {
        self.reserve_x.get() as u128 * self.reserve_y.get() as u128
    }

    /// Returns `true` if the empty⟺funded dichotomy holds: either all of
    /// reserves and supply are zero, or all are positive.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        let x_zero = self.reserve_x.is_zero();
        let y_zero = self.reserve_y.is_zero();
        let s_zero = self.share_supply.is_zero();
        x_zero == y_zero && y_zero == s_zero
    }
}

impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reserves=({}, {}) supply={}",
            self.reserve_x, self.reserve_y, self.share_supply
        )
    }
}
