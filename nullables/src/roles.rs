//! Nullable role store: explicit address → capability-set map.

use lockpass_store::{Capability, RoleStore, StoreError};
use lockpass_types::Address;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// An in-memory capability store. Grants and revocations are the host's
/// business; the registry only reads.
pub struct NullRoles {
    capabilities: Mutex<HashMap<Address, HashSet<Capability>>>,
}

impl NullRoles {
    pub fn new() -> Self {
        Self {
            capabilities: Mutex::new(HashMap::new()),
        }
    }

    /// A store where `admin` holds both Admin and Inviter.
    pub fn with_admin(admin: &Address) -> Self {
        let roles = Self::new();
        roles.grant(admin, Capability::Admin);
        roles.grant(admin, Capability::Inviter);
        roles
    }

    pub fn grant(&self, address: &Address, capability: Capability) {
        self.capabilities
            .lock()
            .unwrap()
            .entry(*address)
            .or_default()
            .insert(capability);
    }

    /// Returns whether the capability was held.
    pub fn revoke(&self, address: &Address, capability: Capability) -> bool {
        let mut caps = self.capabilities.lock().unwrap();
        let Some(set) = caps.get_mut(address) else {
            return false;
        };
        let removed = set.remove(&capability);
        if set.is_empty() {
            caps.remove(address);
        }
        removed
    }

    pub fn capabilities_of(&self, address: &Address) -> HashSet<Capability> {
        self.capabilities
            .lock()
            .unwrap()
            .get(address)
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for NullRoles {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleStore for NullRoles {
    fn has_capability(
        &self,
        address: &Address,
        capability: Capability,
    ) -> Result<bool, StoreError> {
        Ok(self
            .capabilities
            .lock()
            .unwrap()
            .get(address)
            .is_some_and(|set| set.contains(&capability)))
    }
}
