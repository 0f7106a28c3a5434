//! Swap operation specification.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;
use crate::error::{PoolError, Result};

/// Which reserve a swap consumes and which it pays out.
///
/// The two directions share identical math with the reserves swapped, so
/// the direction is resolved by a single branch at the top of the swap
/// path rather than by separate code paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapDirection {
    /// Sell asset X, receive asset Y.
    XToY,
    /// Sell asset Y, receive asset X.
    YToX,
}

impl SwapDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(&self) -> Self {
        match self {
            Self::XToY => Self::YToX,
            Self::YToX => Self::XToY,
        }
    }

    /// Returns `true` if the swap consumes the X reserve.
    #[must_use]
    pub const fn is_x_to_y(&self) -> bool {
        matches!(self, Self::XToY)
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XToY => write!(f, "X→Y"),
            Self::YToX => write!(f, "Y→X"),
        }
    }
}

/// A validated swap request: direction, exact input, and the minimum
/// acceptable output.
///
/// # Invariants
///
/// `amount_in` is always non-zero. `min_out` may be zero, in which case
/// the caller accepts any output including none.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::{Amount, SwapDirection, SwapIntent};
///
/// let intent = SwapIntent::new(SwapDirection::XToY, Amount::new(200), Amount::new(1))?;
/// assert_eq!(intent.amount_in(), Amount::new(200));
/// # Ok::<(), xyk_pool::PoolError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapIntent {
    direction: SwapDirection,
    amount_in: Amount,
    min_out: Amount,
}

impl SwapIntent {
    /// Creates a new `SwapIntent`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ZeroAmount`] if `amount_in` is zero.
    pub const fn new(direction: SwapDirection, amount_in: Amount, min_out: Amount) -> Result<Self> {
        if amount_in.is_zero() {
            return Err(PoolError::ZeroAmount);
        }
        Ok(Self {
            direction,
            amount_in,
            min_out,
        })
    }

    /// Returns the swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the exact input amount.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the minimum acceptable output (slippage floor).
    #[must_use]
    pub const fn min_out(&self) -> Amount {
        self.min_out
    }
}

impl fmt::Display for SwapIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "swap {} in={} min_out={}",
            self.direction, self.amount_in, self.min_out
        )
    }
}
