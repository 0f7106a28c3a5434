//! Pool lifecycle: validate → compute → mutate → emit.
//!
//! [`Pool`] owns a [`PoolConfig`] and a [`PoolState`] and is the only
//! component that writes the state. Every operation validates its inputs
//! and computes its full outcome **before** the first field is written,
//! so a failed call is provably a no-op. The returned receipt carries
//! the exact amounts the external collaborators must settle.
//!
//! The engine is a single-threaded state transition function: it assumes
//! the host serializes operations per pool and that each call observes
//! the true latest state. It never suspends, performs I/O, or retries.

use tracing::debug;

use crate::config::PoolConfig;
use crate::domain::{
    Amount, DepositIntent, DepositReceipt, Identity, Shares, SwapIntent, SwapReceipt,
    WithdrawIntent, WithdrawReceipt,
};
use crate::engine::{liquidity, swap};
use crate::error::Result;
use crate::math::CheckedArithmetic;
use crate::state::PoolState;

/// A constant-product liquidity pool.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::{Amount, DepositIntent, Identity, Shares};
/// use xyk_pool::Pool;
///
/// let mut pool = Pool::initialize(
///     1234,
///     Identity::from_bytes([1u8; 32]),
///     Identity::from_bytes([2u8; 32]),
///     30,
///     Identity::from_bytes([9u8; 32]),
/// )?;
///
/// let intent = DepositIntent::new(Shares::new(100), Amount::new(500), Amount::new(500))?;
/// let receipt = pool.deposit(&intent)?;
///
/// assert_eq!(receipt.amount_x(), Amount::new(500));
/// assert_eq!(pool.state().share_supply(), Shares::new(100));
/// # Ok::<(), xyk_pool::PoolError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    config: PoolConfig,
    state: PoolState,
}

impl Pool {
    /// Creates a new pool with an empty state.
    ///
    /// No asset movement occurs; the pool waits for its bootstrap
    /// deposit.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InvalidFee`](crate::PoolError::InvalidFee) if
    ///   `fee_bps >= 10_000`.
    /// - [`PoolError::IdenticalAssets`](crate::PoolError::IdenticalAssets)
    ///   if both assets are the same.
    pub fn initialize(
        seed: u64,
        asset_x: Identity,
        asset_y: Identity,
        fee_bps: u16,
        authority: Identity,
    ) -> Result<Self> {
        let config = PoolConfig::new(seed, asset_x, asset_y, fee_bps, authority)?;
        debug!(seed, fee_bps, "pool initialized");
        Ok(Self {
            config,
            state: PoolState::empty(),
        })
    }

    /// Rebuilds a pool from a persisted config and state.
    ///
    /// The state must be a value previously produced by this engine; the
    /// host is responsible for storing states only after a successful
    /// commit.
    #[must_use]
    pub fn resume(config: PoolConfig, state: PoolState) -> Self {
        debug_assert!(state.is_consistent());
        Self { config, state }
    }

    /// Returns the immutable configuration.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Returns the current accounting state.
    #[must_use]
    pub const fn state(&self) -> &PoolState {
        &self.state
    }

    /// Returns the geometric-mean share count for a bootstrap deposit of
    /// the given amounts, `⌊√(max_x · max_y)⌋`.
    ///
    /// The bootstrap depositor chooses the share count; this hint is the
    /// policy that makes the initial share price independent of the
    /// deposit ratio.
    #[must_use]
    pub fn bootstrap_shares_hint(max_x: Amount, max_y: Amount) -> Shares {
        liquidity::bootstrap_shares_hint(max_x, max_y)
    }

    /// Previews a deposit without mutating state.
    ///
    /// # Errors
    ///
    /// Same as [`Pool::deposit`].
    pub fn deposit_quote(&self, intent: &DepositIntent) -> Result<DepositReceipt> {
        let amounts = liquidity::deposit_amounts(&self.state, intent)?;
        Ok(DepositReceipt::new(
            intent.shares(),
            amounts.amount_x,
            amounts.amount_y,
        ))
    }

    /// Deposits liquidity, minting the requested share count.
    ///
    /// On an empty pool the maxima become the reserves exactly; on a
    /// funded pool the debited amounts preserve the reserve ratio,
    /// rounded up, and must not exceed the maxima.
    ///
    /// Returns the amounts to debit from the depositor.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroLiquidity`](crate::PoolError::ZeroLiquidity)
    ///   on a bootstrap deposit with a zero amount.
    /// - [`PoolError::SlippageExceeded`](crate::PoolError::SlippageExceeded)
    ///   if a required amount exceeds its maximum.
    /// - [`PoolError::Overflow`](crate::PoolError::Overflow) if a reserve
    ///   or the share supply would exceed `u64`.
    pub fn deposit(&mut self, intent: &DepositIntent) -> Result<DepositReceipt> {
        let receipt = self.deposit_quote(intent)?;

        let reserve_x = self.state.reserve_x.safe_add(&receipt.amount_x())?;
        let reserve_y = self.state.reserve_y.safe_add(&receipt.amount_y())?;
        let share_supply = self.state.share_supply.safe_add(&intent.shares())?;

        self.state.reserve_x = reserve_x;
        self.state.reserve_y = reserve_y;
        self.state.share_supply = share_supply;
        debug_assert!(self.state.is_consistent());

        debug!(
            seed = self.config.seed(),
            shares = intent.shares().get(),
            amount_x = receipt.amount_x().get(),
            amount_y = receipt.amount_y().get(),
            "deposit committed"
        );
        Ok(receipt)
    }

    /// Previews a withdrawal without mutating state.
    ///
    /// # Errors
    ///
    /// Same as [`Pool::withdraw`].
    pub fn withdraw_quote(&self, intent: &WithdrawIntent) -> Result<WithdrawReceipt> {
        let amounts = liquidity::withdraw_amounts(&self.state, intent)?;
        Ok(WithdrawReceipt::new(
            intent.shares(),
            amounts.amount_x,
            amounts.amount_y,
        ))
    }

    /// Withdraws liquidity, burning the redeemed share count.
    ///
    /// Payouts are the redeemer's proportional claim on each reserve,
    /// rounded down, and must meet the caller's minima. Redeeming the
    /// full supply returns the pool to the empty state.
    ///
    /// Returns the amounts to credit to the redeemer.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InsufficientShares`](crate::PoolError::InsufficientShares)
    ///   if more shares are redeemed than are outstanding.
    /// - [`PoolError::SlippageExceeded`](crate::PoolError::SlippageExceeded)
    ///   if a payout falls below its minimum.
    /// - [`PoolError::Underflow`](crate::PoolError::Underflow) if a
    ///   reserve subtraction would go negative (unreachable through the
    ///   proportional formula, defended anyway).
    pub fn withdraw(&mut self, intent: &WithdrawIntent) -> Result<WithdrawReceipt> {
        let receipt = self.withdraw_quote(intent)?;

        let reserve_x = self.state.reserve_x.safe_sub(&receipt.amount_x())?;
        let reserve_y = self.state.reserve_y.safe_sub(&receipt.amount_y())?;
        let share_supply = self.state.share_supply.safe_sub(&intent.shares())?;

        self.state.reserve_x = reserve_x;
        self.state.reserve_y = reserve_y;
        self.state.share_supply = share_supply;
        debug_assert!(self.state.is_consistent());

        debug!(
            seed = self.config.seed(),
            shares = intent.shares().get(),
            amount_x = receipt.amount_x().get(),
            amount_y = receipt.amount_y().get(),
            "withdrawal committed"
        );
        Ok(receipt)
    }

    /// Previews a swap without mutating state.
    ///
    /// # Errors
    ///
    /// Same as [`Pool::swap`].
    pub fn swap_quote(&self, intent: &SwapIntent) -> Result<SwapReceipt> {
        let amounts = swap::swap_amounts(&self.state, self.config.fee(), intent)?;
        Ok(SwapReceipt::new(
            intent.direction(),
            intent.amount_in(),
            amounts.amount_out,
            amounts.fee,
        ))
    }

    /// Exchanges an exact input of one asset for the other.
    ///
    /// The input-side reserve grows by the **full** input (the fee
    /// remainder stays in the pool, growing each share's redeemable
    /// value); the output-side reserve shrinks by the output.
    ///
    /// Returns the output amount to credit to the trader.
    ///
    /// # Errors
    ///
    /// - [`PoolError::InsufficientLiquidity`](crate::PoolError::InsufficientLiquidity)
    ///   if the output would drain the output-side reserve.
    /// - [`PoolError::SlippageExceeded`](crate::PoolError::SlippageExceeded)
    ///   if the output falls below `min_out`.
    /// - [`PoolError::Overflow`](crate::PoolError::Overflow) if the
    ///   input-side reserve would exceed `u64`.
    pub fn swap(&mut self, intent: &SwapIntent) -> Result<SwapReceipt> {
        let receipt = self.swap_quote(intent)?;
        let k_before = self.state.invariant_product();

        let (reserve_in, reserve_out) = if intent.direction().is_x_to_y() {
            (self.state.reserve_x, self.state.reserve_y)
        } else {
            (self.state.reserve_y, self.state.reserve_x)
        };
        let new_in = reserve_in.safe_add(&receipt.amount_in())?;
        let new_out = reserve_out.safe_sub(&receipt.amount_out())?;

        if intent.direction().is_x_to_y() {
            self.state.reserve_x = new_in;
            self.state.reserve_y = new_out;
        } else {
            self.state.reserve_y = new_in;
            self.state.reserve_x = new_out;
        }
        debug_assert!(self.state.is_consistent());
        debug_assert!(self.state.invariant_product() >= k_before);

        debug!(
            seed = self.config.seed(),
            direction = %intent.direction(),
            amount_in = receipt.amount_in().get(),
            amount_out = receipt.amount_out().get(),
            fee = receipt.fee().get(),
            "swap committed"
        );
        Ok(receipt)
    }
}
