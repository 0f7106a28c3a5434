//! Outcomes of committed pool operations.
//!
//! A receipt carries the exact amounts the external collaborators must
//! move: the asset-transfer collaborator settles the amount fields, the
//! share-issuance collaborator settles the share fields. Receipts are
//! only produced for operations whose state mutation has been committed.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Shares, SwapDirection};

/// The outcome of a committed deposit: shares minted and amounts debited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepositReceipt {
    shares_minted: Shares,
    amount_x: Amount,
    amount_y: Amount,
}

impl DepositReceipt {
    /// Creates a new `DepositReceipt`.
    #[must_use]
    pub const fn new(shares_minted: Shares, amount_x: Amount, amount_y: Amount) -> Self {
        Self {
            shares_minted,
            amount_x,
            amount_y,
        }
    }

    /// Returns the shares minted to the depositor.
    #[must_use]
    pub const fn shares_minted(&self) -> Shares {
        self.shares_minted
    }

    /// Returns the X-side amount debited from the depositor.
    #[must_use]
    pub const fn amount_x(&self) -> Amount {
        self.amount_x
    }

    /// Returns the Y-side amount debited from the depositor.
    #[must_use]
    pub const fn amount_y(&self) -> Amount {
        self.amount_y
    }
}

impl fmt::Display for DepositReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "minted {} for ({}, {})",
            self.shares_minted, self.amount_x, self.amount_y
        )
    }
}

/// The outcome of a committed withdrawal: shares burned and amounts paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WithdrawReceipt {
    shares_burned: Shares,
    amount_x: Amount,
    amount_y: Amount,
}

impl WithdrawReceipt {
    /// Creates a new `WithdrawReceipt`.
    #[must_use]
    pub const fn new(shares_burned: Shares, amount_x: Amount, amount_y: Amount) -> Self {
        Self {
            shares_burned,
            amount_x,
            amount_y,
        }
    }

    /// Returns the shares burned from the redeemer.
    #[must_use]
    pub const fn shares_burned(&self) -> Shares {
        self.shares_burned
    }

    /// Returns the X-side amount paid out to the redeemer.
    #[must_use]
    pub const fn amount_x(&self) -> Amount {
        self.amount_x
    }

    /// Returns the Y-side amount paid out to the redeemer.
    #[must_use]
    pub const fn amount_y(&self) -> Amount {
        self.amount_y
    }
}

impl fmt::Display for WithdrawReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "burned {} for ({}, {})",
            self.shares_burned, self.amount_x, self.amount_y
        )
    }
}

/// The outcome of a committed swap.
///
/// `amount_in` is the full input including the fee: the entire input is
/// credited to the pool's input-side reserve, which is how the fee
/// remainder accrues to all share holders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapReceipt {
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapReceipt {
    /// Creates a new `SwapReceipt`.
    #[must_use]
    pub const fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    ) -> Self {
        Self {
            direction,
            amount_in,
            amount_out,
            fee,
        }
    }

    /// Returns the swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the full input amount, fee included.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount paid to the trader.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the fee portion of the input.
    #[must_use]
    pub const fn fee(&self) -> Amount {
        self.fee
    }
}

impl fmt::Display for SwapReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "swap {} in={} out={} fee={}",
            self.direction, self.amount_in, self.amount_out, self.fee
        )
    }
}
