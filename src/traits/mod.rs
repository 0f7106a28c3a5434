//! Boundary contracts implemented by the host environment.
//!
//! The engine computes and commits accounting state; actually moving
//! assets and crediting share balances is delegated through these seams.
//! [`PoolHost`](crate::PoolHost) wires a [`Pool`](crate::Pool) to a pair
//! of implementations and enforces the commit-then-settle ordering.

mod asset_transfer;
mod share_issuance;

pub use asset_transfer::AssetTransfer;
pub use share_issuance::ShareIssuance;
