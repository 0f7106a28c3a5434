//! Swap fee rate in basis points, fixed at pool creation.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::{PoolError, Result};

/// Basis-point denominator (10 000 = 100%).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// A swap fee rate expressed in basis points (1 bp = 0.01%).
///
/// Valid rates are `0..10_000`: a zero fee is allowed, a 100% fee is not.
/// The rate is immutable for the lifetime of the pool.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::FeeBps;
///
/// let fee = FeeBps::new(30)?;
/// assert_eq!(fee.get(), 30);
/// # Ok::<(), xyk_pool::PoolError>(())
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
pub struct FeeBps(u16);

impl FeeBps {
    /// Zero fee (0 bp).
    pub const ZERO: Self = Self(0);

    /// The standard 0.30% tier used by most volatile pairs (30 bp).
    pub const STANDARD: Self = Self(30);

    /// Creates a new `FeeBps`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidFee`] if `bps >= 10_000`.
    pub const fn new(bps: u16) -> Result<Self> {
        if bps as u64 >= BPS_DENOMINATOR {
            return Err(PoolError::InvalidFee(bps));
        }
        Ok(Self(bps))
    }

    /// Returns the raw basis-point value.
    #[must_use]
    pub const fn get(&self) -> u16 {
        self.0
    }

    /// Returns `true` if the fee is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Computes `amount * bps / 10_000` with explicit rounding.
    ///
    /// Infallible: the product is computed in 128 bits, and since
    /// `bps < 10_000` the quotient always fits back into `u64`.
    #[must_use]
    pub const fn apply(&self, amount: Amount, rounding: Rounding) -> Amount {
        let product = amount.get() as u128 * self.0 as u128;
        let divisor = BPS_DENOMINATOR as u128;
        let quotient = match rounding {
            Rounding::Down => product / divisor,
            Rounding::Up => {
                let q = product / divisor;
                if product % divisor != 0 {
                    q + 1
                } else {
                    q
                }
            }
        };
        // quotient <= amount * 9_999 / 10_000 < u64::MAX
        Amount::new(quotient as u64)
    }
}

impl TryFrom<u16> for FeeBps {
    type Error = PoolError;

    fn try_from(bps: u16) -> Result<Self> {
        Self::new(bps)
    }
}

impl From<FeeBps> for u16 {
    fn from(fee: FeeBps) -> u16 {
        fee.get()
    }
}

impl fmt::Display for FeeBps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
