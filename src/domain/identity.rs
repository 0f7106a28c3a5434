//! Chain-agnostic 32-byte identity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A generic, chain-agnostic identity: an asset, a holder, or an
/// authority on any ledger.
///
/// Wraps a fixed-size `[u8; 32]` byte array. All 32-byte sequences are
/// valid identities, so construction is infallible.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::Identity;
///
/// let id = Identity::from_bytes([1u8; 32]);
/// assert_eq!(id.as_bytes(), [1u8; 32]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Identity([u8; 32]);

impl Identity {
    /// Creates an `Identity` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns the all-zero identity.
    ///
    /// Useful as a sentinel or placeholder value; use sparingly.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Leading four bytes are enough to tell identities apart in logs.
        write!(
            f,
            "Identity({:02x}{:02x}{:02x}{:02x}…)",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}
