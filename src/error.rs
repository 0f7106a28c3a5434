//! Unified error types for the pool engine.
//!
//! All fallible operations across the crate return [`PoolError`] as their
//! error type. Every variant is terminal for the operation that raised it:
//! the operation performs no partial mutation, and the caller must retry
//! with adjusted inputs (slippage errors) or treat the condition as fatal
//! to that request (arithmetic errors). Arithmetic failures are never
//! saturated or wrapped silently.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, PoolError>;

/// The unified error enum for all pool operations.
///
/// `Overflow` and `Underflow` carry a static context string naming the
/// computation that failed, which keeps diagnostics useful without
/// allocating on the error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum PoolError {
    /// Fee rate at or above 100% supplied at pool creation.
    #[error("fee must be below 10000 basis points, got {0}")]
    InvalidFee(u16),

    /// Pool creation attempted with the same asset on both sides.
    #[error("a pool requires two distinct assets")]
    IdenticalAssets,

    /// A liquidity operation was given a zero share count, or a bootstrap
    /// deposit was given a zero amount for one of the assets.
    #[error("liquidity operation requires non-zero amounts")]
    ZeroLiquidity,

    /// A swap was given a zero input amount.
    #[error("swap input amount must be non-zero")]
    ZeroAmount,

    /// A caller-specified slippage bound was violated.
    #[error("slippage bound violated: {0}")]
    SlippageExceeded(&'static str),

    /// A withdrawal requested more shares than are outstanding.
    #[error("cannot redeem more shares than outstanding")]
    InsufficientShares,

    /// A swap would drain (or exceed) the output-side reserve.
    #[error("swap output would drain the pool reserve")]
    InsufficientLiquidity,

    /// An intermediate or final value exceeded the representable range,
    /// or a division had a zero denominator.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A subtraction would have produced a negative value.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),
}
