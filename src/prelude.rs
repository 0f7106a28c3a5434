//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use xyk_pool::prelude::*;
//! ```

pub use crate::domain::{
    Amount, AssetPair, DepositIntent, DepositReceipt, FeeBps, Identity, Rounding, Shares,
    SwapDirection, SwapIntent, SwapReceipt, WithdrawIntent, WithdrawReceipt,
};
pub use crate::error::{PoolError, Result};
pub use crate::math::CheckedArithmetic;
pub use crate::traits::{AssetTransfer, ShareIssuance};
pub use crate::{Pool, PoolConfig, PoolHost, PoolState};
