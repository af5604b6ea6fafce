//! Pass allocator: explicit low-range identifiers and the auto cursor.
//!
//! Identifiers `1..=reserved_upper_bound` are only ever assigned explicitly by
//! bound vouchers. Everything else comes from a cursor that starts right above
//! the reserved range and only moves forward.

use crate::error::RegistryError;
use lockpass_types::PassId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PassAllocator {
    reserved_upper_bound: PassId,
    explicit: BTreeSet<PassId>,
    next_auto: PassId,
}

impl PassAllocator {
    pub fn new(reserved_upper_bound: PassId) -> Self {
        Self {
            reserved_upper_bound,
            explicit: BTreeSet::new(),
            next_auto: reserved_upper_bound.saturating_add(1),
        }
    }

    pub fn reserved_upper_bound(&self) -> PassId {
        self.reserved_upper_bound
    }

    pub fn in_reserved_range(&self, id: PassId) -> bool {
        (1..=self.reserved_upper_bound).contains(&id)
    }

    pub fn is_allocated(&self, id: PassId) -> bool {
        if self.in_reserved_range(id) {
            self.explicit.contains(&id)
        } else {
            id > self.reserved_upper_bound && id < self.next_auto
        }
    }

    /// Validate an explicit allocation without performing it.
    pub fn check_explicit(&self, id: PassId) -> Result<(), RegistryError> {
        if !self.in_reserved_range(id) {
            return Err(RegistryError::InvalidTarget(format!(
                "{id} is outside the reserved range 1..={}",
                self.reserved_upper_bound
            )));
        }
        if self.explicit.contains(&id) {
            return Err(RegistryError::TargetAlreadyConsumed(id));
        }
        Ok(())
    }

    pub fn allocate_explicit(&mut self, id: PassId) -> Result<PassId, RegistryError> {
        self.check_explicit(id)?;
        self.explicit.insert(id);
        Ok(id)
    }

    /// The next `count` auto identifiers, without advancing the cursor.
    ///
    /// Fails unless the cursor can move past all of them, so a successful
    /// peek guarantees the matching `allocate_next` calls succeed.
    pub fn peek_next(&self, count: u32) -> Result<Vec<PassId>, RegistryError> {
        let end = self
            .next_auto
            .checked_add(u64::from(count))
            .ok_or(RegistryError::Overflow)?;
        Ok((self.next_auto..end).collect())
    }

    /// The single next auto identifier, under the same guarantee as
    /// [`peek_next`](Self::peek_next).
    pub fn check_next(&self) -> Result<PassId, RegistryError> {
        self.next_auto
            .checked_add(1)
            .map(|_| self.next_auto)
            .ok_or(RegistryError::Overflow)
    }

    pub fn allocate_next(&mut self) -> Result<PassId, RegistryError> {
        let id = self.next_auto;
        self.next_auto = id.checked_add(1).ok_or(RegistryError::Overflow)?;
        Ok(id)
    }

    /// Identifier the next auto allocation will return.
    pub fn next_auto(&self) -> PassId {
        self.next_auto
    }
}
