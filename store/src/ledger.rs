//! Owned-token ledger trait.

use crate::StoreError;
use lockpass_types::{Address, PassId};

/// The ledger that records who holds each pass.
///
/// The registry calls `mint` on a successful allocation and reads
/// `owner_of` to authorise name binding. Transfers happen outside the
/// registry, through the host.
pub trait TokenLedger {
    /// Create `id` owned by `recipient`. Fails with `Duplicate` if it exists.
    fn mint(&self, recipient: &Address, id: PassId) -> Result<(), StoreError>;

    /// Destroy `id`. Used only to undo mints of a redemption that failed
    /// partway through. Fails with `NotFound` if it does not exist.
    fn burn(&self, id: PassId) -> Result<(), StoreError>;

    /// Current holder of `id`. Fails with `NotFound` if it was never minted.
    fn owner_of(&self, id: PassId) -> Result<Address, StoreError>;

    /// Move `id` from `from` to `to`. Fails with `NotOwner` if `from` does
    /// not hold it.
    fn transfer(&self, from: &Address, to: &Address, id: PassId) -> Result<(), StoreError>;

    fn exists(&self, id: PassId) -> Result<bool, StoreError>;

    /// Passes held by `owner`, ascending by identifier.
    fn passes_of(&self, owner: &Address) -> Result<Vec<PassId>, StoreError>;

    /// Number of passes held by `owner`.
    fn balance_of(&self, owner: &Address) -> Result<u64, StoreError> {
        self.passes_of(owner).map(|v| v.len() as u64)
    }
}
