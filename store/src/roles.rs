//! Capability store trait.

use crate::StoreError;
use lockpass_types::Address;
use serde::{Deserialize, Serialize};

/// Capabilities an address can hold. Administered outside the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// May sign bound vouchers.
    Inviter,
    /// May reserve names and mint reserved names.
    Admin,
}

/// Read-only capability queries used by the registry.
pub trait RoleStore {
    fn has_capability(
        &self,
        address: &Address,
        capability: Capability,
    ) -> Result<bool, StoreError>;

    fn has_inviter_role(&self, address: &Address) -> Result<bool, StoreError> {
        self.has_capability(address, Capability::Inviter)
    }

    fn is_admin(&self, address: &Address) -> Result<bool, StoreError> {
        self.has_capability(address, Capability::Admin)
    }
}
