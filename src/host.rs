//! Settlement of committed operations through the collaborator seams.
//!
//! [`PoolHost`] pairs a [`Pool`] with an [`AssetTransfer`] and a
//! [`ShareIssuance`] implementation and runs each operation as
//! commit-then-settle:
//!
//! 1. the engine validates and commits the state mutation;
//! 2. the collaborators settle the receipt, debit legs first.
//!
//! If a collaborator fails, the pre-operation state snapshot is restored
//! and any already-settled leg is refunded, so no asset movement is ever
//! left without a matching committed state. A refund that itself fails
//! is reported through `tracing::error!` — at that point the host's
//! ledgers need external reconciliation, which the engine cannot do.

use thiserror::Error;
use tracing::error;

use crate::domain::{
    DepositIntent, DepositReceipt, Identity, SwapIntent, SwapReceipt, WithdrawIntent,
    WithdrawReceipt,
};
use crate::error::PoolError;
use crate::pool::Pool;
use crate::state::PoolState;
use crate::traits::{AssetTransfer, ShareIssuance};

/// Failure of a hosted operation: either the engine rejected it, or a
/// collaborator could not settle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HostError<TE, SE> {
    /// The engine rejected the operation; nothing was settled.
    #[error("pool operation failed: {0}")]
    Pool(#[from] PoolError),

    /// The asset-transfer collaborator failed; the state was restored.
    #[error("asset transfer collaborator failed")]
    Transfer(TE),

    /// The share-issuance collaborator failed; the state was restored.
    #[error("share issuance collaborator failed")]
    Shares(SE),
}

/// A [`Pool`] wired to its settlement collaborators.
///
/// The `vault` identity is the holder of the pool's reserves in the
/// host's asset ledger.
#[derive(Debug)]
pub struct PoolHost<T, S> {
    pool: Pool,
    vault: Identity,
    transfers: T,
    shares: S,
}

impl<T, S> PoolHost<T, S>
where
    T: AssetTransfer,
    S: ShareIssuance,
{
    /// Creates a new host around an existing pool.
    pub fn new(pool: Pool, vault: Identity, transfers: T, shares: S) -> Self {
        Self {
            pool,
            vault,
            transfers,
            shares,
        }
    }

    /// Returns the hosted pool.
    #[must_use]
    pub const fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Returns the asset-transfer collaborator.
    #[must_use]
    pub const fn transfers(&self) -> &T {
        &self.transfers
    }

    /// Returns the share-issuance collaborator.
    #[must_use]
    pub const fn shares(&self) -> &S {
        &self.shares
    }

    fn rollback(&mut self, snapshot: PoolState) {
        self.pool = Pool::resume(*self.pool.config(), snapshot);
    }

    /// Deposits liquidity on behalf of `depositor` and settles the
    /// debits and the share mint.
    ///
    /// # Errors
    ///
    /// [`HostError::Pool`] if the engine rejects the deposit;
    /// [`HostError::Transfer`]/[`HostError::Shares`] if settlement fails,
    /// in which case the pool state is restored.
    pub fn deposit(
        &mut self,
        depositor: &Identity,
        intent: &DepositIntent,
    ) -> Result<DepositReceipt, HostError<T::Error, S::Error>> {
        let snapshot = *self.pool.state();
        let receipt = self.pool.deposit(intent)?;

        let vault = self.vault;
        let asset_x = self.pool.config().pair().asset_x();
        let asset_y = self.pool.config().pair().asset_y();

        if let Err(e) = self
            .transfers
            .transfer(depositor, &vault, &asset_x, receipt.amount_x())
        {
            self.rollback(snapshot);
            return Err(HostError::Transfer(e));
        }
        if let Err(e) = self
            .transfers
            .transfer(depositor, &vault, &asset_y, receipt.amount_y())
        {
            self.rollback(snapshot);
            if self
                .transfers
                .transfer(&vault, depositor, &asset_x, receipt.amount_x())
                .is_err()
            {
                error!("deposit refund failed; asset ledger needs reconciliation");
            }
            return Err(HostError::Transfer(e));
        }
        if let Err(e) = self.shares.mint(depositor, receipt.shares_minted()) {
            self.rollback(snapshot);
            if self
                .transfers
                .transfer(&vault, depositor, &asset_x, receipt.amount_x())
                .is_err()
                || self
                    .transfers
                    .transfer(&vault, depositor, &asset_y, receipt.amount_y())
                    .is_err()
            {
                error!("deposit refund failed; asset ledger needs reconciliation");
            }
            return Err(HostError::Shares(e));
        }

        Ok(receipt)
    }

    /// Withdraws liquidity on behalf of `redeemer`: burns the shares,
    /// then pays out both reserves.
    ///
    /// # Errors
    ///
    /// [`HostError::Pool`] if the engine rejects the withdrawal;
    /// [`HostError::Transfer`]/[`HostError::Shares`] if settlement fails,
    /// in which case the pool state is restored.
    pub fn withdraw(
        &mut self,
        redeemer: &Identity,
        intent: &WithdrawIntent,
    ) -> Result<WithdrawReceipt, HostError<T::Error, S::Error>> {
        let snapshot = *self.pool.state();
        let receipt = self.pool.withdraw(intent)?;

        let vault = self.vault;
        let asset_x = self.pool.config().pair().asset_x();
        let asset_y = self.pool.config().pair().asset_y();

        if let Err(e) = self.shares.burn(redeemer, receipt.shares_burned()) {
            self.rollback(snapshot);
            return Err(HostError::Shares(e));
        }
        if let Err(e) = self
            .transfers
            .transfer(&vault, redeemer, &asset_x, receipt.amount_x())
        {
            self.rollback(snapshot);
            if self.shares.mint(redeemer, receipt.shares_burned()).is_err() {
                error!("withdrawal re-mint failed; share ledger needs reconciliation");
            }
            return Err(HostError::Transfer(e));
        }
        if let Err(e) = self
            .transfers
            .transfer(&vault, redeemer, &asset_y, receipt.amount_y())
        {
            self.rollback(snapshot);
            if self.shares.mint(redeemer, receipt.shares_burned()).is_err()
                || self
                    .transfers
                    .transfer(redeemer, &vault, &asset_x, receipt.amount_x())
                    .is_err()
            {
                error!("withdrawal refund failed; ledgers need reconciliation");
            }
            return Err(HostError::Transfer(e));
        }

        Ok(receipt)
    }

    /// Swaps on behalf of `trader`: debits the input, credits the output.
    ///
    /// # Errors
    ///
    /// [`HostError::Pool`] if the engine rejects the swap;
    /// [`HostError::Transfer`] if settlement fails, in which case the
    /// pool state is restored.
    pub fn swap(
        &mut self,
        trader: &Identity,
        intent: &SwapIntent,
    ) -> Result<SwapReceipt, HostError<T::Error, S::Error>> {
        let snapshot = *self.pool.state();
        let receipt = self.pool.swap(intent)?;

        let vault = self.vault;
        let pair = self.pool.config().pair();
        let (asset_in, asset_out) = if intent.direction().is_x_to_y() {
            (pair.asset_x(), pair.asset_y())
        } else {
            (pair.asset_y(), pair.asset_x())
        };

        if let Err(e) = self
            .transfers
            .transfer(trader, &vault, &asset_in, receipt.amount_in())
        {
            self.rollback(snapshot);
            return Err(HostError::Transfer(e));
        }
        if let Err(e) = self
            .transfers
            .transfer(&vault, trader, &asset_out, receipt.amount_out())
        {
            self.rollback(snapshot);
            if self
                .transfers
                .transfer(&vault, trader, &asset_in, receipt.amount_in())
                .is_err()
            {
                error!("swap refund failed; asset ledger needs reconciliation");
            }
            return Err(HostError::Transfer(e));
        }

        Ok(receipt)
    }
}
