//! Pool-share issuance collaborator seam.

use crate::domain::{Identity, Shares};

/// Mints and burns pool-share units on holder balances.
///
/// The engine only tracks the total outstanding supply; who holds which
/// shares is the host's ledger. Both methods are invoked with exactly
/// the share count the engine validated and committed.
pub trait ShareIssuance {
    /// Host-defined failure type.
    type Error;

    /// Credits `shares` to `holder`'s balance.
    ///
    /// # Errors
    ///
    /// Returns the host's error if the mint cannot be performed; no
    /// balance may have changed in that case.
    fn mint(&mut self, holder: &Identity, shares: Shares) -> Result<(), Self::Error>;

    /// Debits `shares` from `holder`'s balance.
    ///
    /// # Errors
    ///
    /// Returns the host's error if `holder` does not have `shares` to
    /// burn; no balance may have changed in that case.
    fn burn(&mut self, holder: &Identity, shares: Shares) -> Result<(), Self::Error>;
}
