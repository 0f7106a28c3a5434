//! Asset movement collaborator seam.

use crate::domain::{Amount, Identity};

/// Moves underlying assets between holders.
///
/// Implemented by the host environment (a token ledger, a database, a
/// chain runtime). The engine only ever calls it with amounts it has
/// already computed and validated, and only for operations whose state
/// mutation has been committed — see [`PoolHost`](crate::PoolHost) for
/// the ordering guarantee.
///
/// # Contract
///
/// `transfer` moves **exactly** `amount` of `asset` from `from` to `to`,
/// or fails without moving anything. Partial transfers are forbidden.
pub trait AssetTransfer {
    /// Host-defined failure type.
    type Error;

    /// Moves `amount` of `asset` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns the host's error if the transfer cannot be performed in
    /// full; no assets may have moved in that case.
    fn transfer(
        &mut self,
        from: &Identity,
        to: &Identity,
        asset: &Identity,
        amount: Amount,
    ) -> Result<(), Self::Error>;
}
