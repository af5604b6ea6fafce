//! Name bindings and reservations.
//!
//! Names are keyed by fingerprint. A fingerprint maps to at most one pass, and
//! a pass carries at most one name, set exactly once. Reserved fingerprints
//! can only be bound through the administrative path.

use crate::error::RegistryError;
use crate::length::LengthValidator;
use lockpass_crypto::name_fingerprint;
use lockpass_types::{Fingerprint, PassClass, PassId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct NameBinding {
    pass_id: PassId,
    /// The name exactly as submitted.
    name: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NameRegistry {
    by_fingerprint: HashMap<Fingerprint, NameBinding>,
    by_pass: HashMap<PassId, Fingerprint>,
    reserved: HashSet<Fingerprint>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a public binding of `name` to a pass of `class` without
    /// changing anything.
    pub fn check_bind(
        &self,
        validator: &LengthValidator,
        pass_id: PassId,
        class: PassClass,
        name: &str,
    ) -> Result<Fingerprint, RegistryError> {
        if self.by_pass.contains_key(&pass_id) {
            return Err(RegistryError::AlreadyBound(pass_id));
        }
        if name.is_empty() || !validator.is_valid_for(class, name) {
            return Err(RegistryError::NameInvalid);
        }
        let fingerprint = name_fingerprint(name);
        if self.reserved.contains(&fingerprint) {
            return Err(RegistryError::NameReserved);
        }
        if let Some(existing) = self.by_fingerprint.get(&fingerprint) {
            return Err(RegistryError::NameTaken(existing.pass_id));
        }
        Ok(fingerprint)
    }

    /// Bind `name` to `pass_id`. Pass ownership is the caller's concern.
    pub fn bind(
        &mut self,
        validator: &LengthValidator,
        pass_id: PassId,
        class: PassClass,
        name: &str,
    ) -> Result<Fingerprint, RegistryError> {
        let fingerprint = self.check_bind(validator, pass_id, class, name)?;
        self.insert(pass_id, fingerprint, name);
        Ok(fingerprint)
    }

    /// Check that a reserved `name` can be released to a fresh pass.
    pub fn check_release(&self, name: &str) -> Result<Fingerprint, RegistryError> {
        let fingerprint = name_fingerprint(name);
        if !self.reserved.contains(&fingerprint) {
            return Err(RegistryError::NotReserved);
        }
        if let Some(existing) = self.by_fingerprint.get(&fingerprint) {
            return Err(RegistryError::NameTaken(existing.pass_id));
        }
        Ok(fingerprint)
    }

    /// Administrative binding of a reserved name. Skips the length rule and
    /// clears the reservation.
    pub fn release_and_bind(
        &mut self,
        pass_id: PassId,
        name: &str,
    ) -> Result<Fingerprint, RegistryError> {
        let fingerprint = self.check_release(name)?;
        if self.by_pass.contains_key(&pass_id) {
            return Err(RegistryError::AlreadyBound(pass_id));
        }
        self.reserved.remove(&fingerprint);
        self.insert(pass_id, fingerprint, name);
        Ok(fingerprint)
    }

    fn insert(&mut self, pass_id: PassId, fingerprint: Fingerprint, name: &str) {
        self.by_pass.insert(pass_id, fingerprint);
        self.by_fingerprint.insert(
            fingerprint,
            NameBinding {
                pass_id,
                name: name.to_string(),
            },
        );
    }

    /// Reserve fingerprints. Returns the ones that were newly reserved.
    pub fn reserve(&mut self, fingerprints: &[Fingerprint]) -> Vec<Fingerprint> {
        fingerprints
            .iter()
            .filter(|fp| self.reserved.insert(**fp))
            .copied()
            .collect()
    }

    /// Lift reservations. Returns the ones that were actually reserved.
    pub fn unreserve(&mut self, fingerprints: &[Fingerprint]) -> Vec<Fingerprint> {
        fingerprints
            .iter()
            .filter(|fp| self.reserved.remove(*fp))
            .copied()
            .collect()
    }

    pub fn is_reserved(&self, fingerprint: &Fingerprint) -> bool {
        self.reserved.contains(fingerprint)
    }

    pub fn name_of(&self, fingerprint: &Fingerprint) -> Option<&str> {
        self.by_fingerprint
            .get(fingerprint)
            .map(|binding| binding.name.as_str())
    }

    pub fn pass_of(&self, fingerprint: &Fingerprint) -> Option<PassId> {
        self.by_fingerprint
            .get(fingerprint)
            .map(|binding| binding.pass_id)
    }

    pub fn fingerprint_of_pass(&self, pass_id: PassId) -> Option<Fingerprint> {
        self.by_pass.get(&pass_id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_fingerprint.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_fingerprint.is_empty()
    }
}
