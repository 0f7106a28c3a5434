//! Immutable pool configuration fixed at creation time.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{AssetPair, FeeBps, Identity};
use crate::error::Result;

/// The immutable parameters of a pool, fixed at creation time.
///
/// The `seed` is an arbitrary discriminator chosen by the creator and is
/// only meaningful to the host's addressing scheme; the engine stores it
/// verbatim. The `authority` names the identity permitted to perform
/// administrative actions — none of which exist in this engine, so it is
/// likewise carried for the host's benefit.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::Identity;
/// use xyk_pool::PoolConfig;
///
/// let config = PoolConfig::new(
///     1234,
///     Identity::from_bytes([1u8; 32]),
///     Identity::from_bytes([2u8; 32]),
///     30,
///     Identity::from_bytes([9u8; 32]),
/// )?;
/// assert_eq!(config.fee().get(), 30);
/// # Ok::<(), xyk_pool::PoolError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolConfig {
    seed: u64,
    pair: AssetPair,
    fee: FeeBps,
    authority: Identity,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`, validating all creation-time rules.
    ///
    /// # Errors
    ///
    /// - [`PoolError::IdenticalAssets`](crate::PoolError::IdenticalAssets)
    ///   if `asset_x` and `asset_y` name the same asset.
    /// - [`PoolError::InvalidFee`](crate::PoolError::InvalidFee) if
    ///   `fee_bps >= 10_000`.
    pub fn new(
        seed: u64,
        asset_x: Identity,
        asset_y: Identity,
        fee_bps: u16,
        authority: Identity,
    ) -> Result<Self> {
        let pair = AssetPair::new(asset_x, asset_y)?;
        let fee = FeeBps::new(fee_bps)?;
        Ok(Self {
            seed,
            pair,
            fee,
            authority,
        })
    }

    /// Returns the creator-chosen discriminator.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns the swap fee rate.
    #[must_use]
    pub const fn fee(&self) -> FeeBps {
        self.fee
    }

    /// Returns the administrative authority identity.
    #[must_use]
    pub const fn authority(&self) -> Identity {
        self.authority
    }
}

impl fmt::Display for PoolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pool seed={} fee={}", self.seed, self.fee)
    }
}
