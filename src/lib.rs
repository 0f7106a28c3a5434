//! # xyk-pool
//!
//! Constant-product liquidity-pool accounting engine: a pair of token
//! reserves, a fungible pool-share claim on them, and value-conserving
//! exchanges between the two sides — all under integer-only arithmetic
//! with explicit rounding.
//!
//! The crate is the **accounting core** only. It decides how much moves
//! and commits the resulting reserves/supply state; actually moving
//! assets and crediting share balances belongs to the host environment,
//! reached through the [`traits`] seams and sequenced by [`PoolHost`].
//!
//! # Guarantees
//!
//! - **No partial mutation** — every operation validates and computes its
//!   full outcome before the first field is written; a failed call is a
//!   provable no-op.
//! - **Rounding favors the pool** — deposits round the required amounts
//!   up, withdrawals and swap outputs round down, and the swap fee rounds
//!   up, so value can never be extracted through truncation.
//! - **Invariant product never decreases** — across any swap,
//!   `reserve_x · reserve_y` grows (fee accrual) or stays exactly
//!   constant (zero-fee pool).
//! - **No panics, no saturation** — arithmetic failure aborts the
//!   operation with [`PoolError::Overflow`] or [`PoolError::Underflow`].
//!
//! # Quick Start
//!
//! ```rust
//! use xyk_pool::domain::{
//!     Amount, DepositIntent, Identity, Shares, SwapDirection, SwapIntent, WithdrawIntent,
//! };
//! use xyk_pool::Pool;
//!
//! // 1. Create an empty pool with a 0.30% fee.
//! let mut pool = Pool::initialize(
//!     1234,
//!     Identity::from_bytes([1u8; 32]), // asset X
//!     Identity::from_bytes([2u8; 32]), // asset Y
//!     30,
//!     Identity::from_bytes([9u8; 32]), // authority
//! )?;
//!
//! // 2. Bootstrap: the first depositor fixes the launch rate.
//! let bootstrap = DepositIntent::new(Shares::new(100), Amount::new(500), Amount::new(500))?;
//! pool.deposit(&bootstrap)?;
//!
//! // 3. Swap 200 X for Y, insisting on at least 1 unit out.
//! let swap = SwapIntent::new(SwapDirection::XToY, Amount::new(200), Amount::new(1))?;
//! let receipt = pool.swap(&swap)?;
//! assert_eq!(receipt.amount_out(), Amount::new(142));
//!
//! // 4. Redeem a tenth of the shares.
//! let withdraw = WithdrawIntent::new(Shares::new(10), Amount::new(1), Amount::new(1))?;
//! let receipt = pool.withdraw(&withdraw)?;
//! assert_eq!(receipt.amount_x(), Amount::new(70));
//! # Ok::<(), xyk_pool::PoolError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │     Host      │  serializes access per pool, owns the ledgers
//! └──────┬───────┘
//!        │ PoolHost: commit, then settle via traits
//!        ▼
//! ┌──────────────┐
//! │     Pool      │  validate → compute → mutate → emit receipt
//! └──────┬───────┘
//!        │ pure computations
//!        ▼
//! ┌──────────────┐
//! │    engine     │  deposit/withdraw/swap arithmetic
//! └──────┬───────┘
//!        │ mul_div / checked ops
//!        ▼
//! ┌──────────────┐
//! │  math/domain  │  Amount, Shares, FeeBps, Rounding, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), intents, receipts |
//! | [`math`]   | [`mul_div`](math::mul_div), [`integer_sqrt`](math::integer_sqrt), [`CheckedArithmetic`](math::CheckedArithmetic) |
//! | [`config`](PoolConfig) / [`state`](PoolState) | The persisted pool records |
//! | [`pool`](Pool) | The four lifecycle operations and their quotes |
//! | [`traits`] | [`AssetTransfer`](traits::AssetTransfer) and [`ShareIssuance`](traits::ShareIssuance) collaborator seams |
//! | [`host`](PoolHost) | Commit-then-settle sequencing with rollback |
//! | [`error`](PoolError) | Unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
pub mod traits;

mod config;
mod engine;
mod host;
mod pool;
mod state;

pub use config::PoolConfig;
pub use error::{PoolError, Result};
pub use host::{HostError, PoolHost};
pub use pool::Pool;
pub use state::PoolState;
