//! The pass record.

use crate::class::PassClass;
use crate::hash::Fingerprint;
use serde::{Deserialize, Serialize};

/// Pass identifier. Zero is never a valid pass; in a redemption request it
/// selects the open-voucher path.
pub type PassId = u64;

/// A minted pass as tracked by the registry.
///
/// Ownership lives in the external token ledger; the registry only keeps the
/// class and the bound name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pass {
    pub id: PassId,
    pub class: PassClass,
    /// Fingerprint of the bound name. Set at most once.
    pub name: Option<Fingerprint>,
}

impl Pass {
    pub fn new(id: PassId, class: PassClass) -> Self {
        Self {
            id,
            class,
            name: None,
        }
    }

    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }
}
