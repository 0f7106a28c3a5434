//! The pair of distinct reserve assets managed by a pool.

use serde::{Deserialize, Serialize};

use super::Identity;
use crate::error::{PoolError, Result};

/// The two distinct assets held by a pool, in creator-chosen order.
///
/// Unlike a canonically-sorted pair, the X/Y roles are fixed by the pool
/// creator and are meaningful: swap direction and slippage bounds are
/// always expressed relative to them.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::{AssetPair, Identity};
///
/// let x = Identity::from_bytes([1u8; 32]);
/// let y = Identity::from_bytes([2u8; 32]);
/// let pair = AssetPair::new(x, y)?;
/// assert_eq!(pair.asset_x(), x);
/// assert_eq!(pair.asset_y(), y);
/// # Ok::<(), xyk_pool::PoolError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetPair {
    asset_x: Identity,
    asset_y: Identity,
}

impl AssetPair {
    /// Creates a new `AssetPair`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::IdenticalAssets`] if both sides name the same
    /// asset.
    pub fn new(asset_x: Identity, asset_y: Identity) -> Result<Self> {
        if asset_x == asset_y {
            return Err(PoolError::IdenticalAssets);
        }
        Ok(Self { asset_x, asset_y })
    }

    /// Returns the X-side asset identity.
    #[must_use]
    pub const fn asset_x(&self) -> Identity {
        self.asset_x
    }

    /// Returns the Y-side asset identity.
    #[must_use]
    pub const fn asset_y(&self) -> Identity {
        self.asset_y
    }

    /// Returns `true` if the given asset is one of the pair.
    #[must_use]
    pub fn contains(&self, asset: &Identity) -> bool {
        self.asset_x == *asset || self.asset_y == *asset
    }

    /// Returns the counterpart of `asset` in this pair.
    ///
    /// Returns `None` if `asset` is not in the pair.
    #[must_use]
    pub fn other(&self, asset: &Identity) -> Option<Identity> {
        if *asset == self.asset_x {
            Some(self.asset_y)
        } else if *asset == self.asset_y {
            Some(self.asset_x)
        } else {
            None
        }
    }
}
