//! Nullable token ledger: thread-safe in-memory pass ownership.

use lockpass_store::{StoreError, TokenLedger};
use lockpass_types::{Address, PassId};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Mutex;

/// An in-memory owned-token ledger for testing.
pub struct NullLedger {
    owners: Mutex<BTreeMap<PassId, Address>>,
    holdings: Mutex<HashMap<Address, BTreeSet<PassId>>>,
    /// When set, every write fails with a backend error.
    fail_writes: Mutex<bool>,
    /// Mints still allowed before `mint` starts failing; `None` is unlimited.
    mint_budget: Mutex<Option<usize>>,
}

impl NullLedger {
    pub fn new() -> Self {
        Self {
            owners: Mutex::new(BTreeMap::new()),
            holdings: Mutex::new(HashMap::new()),
            fail_writes: Mutex::new(false),
            mint_budget: Mutex::new(None),
        }
    }

    /// Make subsequent `mint`/`transfer` calls fail, to exercise error paths.
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap() = fail;
    }

    /// Let the next `count` mints succeed and fail every one after that.
    pub fn fail_mints_after(&self, count: usize) {
        *self.mint_budget.lock().unwrap() = Some(count);
    }

    /// Lift a limit set by [`fail_mints_after`](Self::fail_mints_after).
    pub fn clear_mint_limit(&self) {
        *self.mint_budget.lock().unwrap() = None;
    }

    /// Number of passes currently in existence.
    pub fn total_supply(&self) -> usize {
        self.owners.lock().unwrap().len()
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if *self.fail_writes.lock().unwrap() {
            return Err(StoreError::Backend("writes disabled".into()));
        }
        Ok(())
    }
}

impl Default for NullLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenLedger for NullLedger {
    fn mint(&self, recipient: &Address, id: PassId) -> Result<(), StoreError> {
        self.check_writable()?;
        let mut owners = self.owners.lock().unwrap();
        if owners.contains_key(&id) {
            return Err(StoreError::Duplicate(id));
        }
        if let Some(budget) = self.mint_budget.lock().unwrap().as_mut() {
            if *budget == 0 {
                return Err(StoreError::Backend("mint limit reached".into()));
            }
            *budget -= 1;
        }
        owners.insert(id, *recipient);
        self.holdings
            .lock()
            .unwrap()
            .entry(*recipient)
            .or_default()
            .insert(id);
        Ok(())
    }

    fn burn(&self, id: PassId) -> Result<(), StoreError> {
        self.check_writable()?;
        let owner = self
            .owners
            .lock()
            .unwrap()
            .remove(&id)
            .ok_or(StoreError::NotFound(id))?;
        let mut holdings = self.holdings.lock().unwrap();
        if let Some(set) = holdings.get_mut(&owner) {
            set.remove(&id);
            if set.is_empty() {
                holdings.remove(&owner);
            }
        }
        Ok(())
    }

    fn owner_of(&self, id: PassId) -> Result<Address, StoreError> {
        self.owners
            .lock()
            .unwrap()
            .get(&id)
            .copied()
            .ok_or(StoreError::NotFound(id))
    }

    fn transfer(&self, from: &Address, to: &Address, id: PassId) -> Result<(), StoreError> {
        self.check_writable()?;
        let mut owners = self.owners.lock().unwrap();
        let owner = owners.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        if *owner != *from {
            return Err(StoreError::NotOwner {
                pass_id: id,
                claimed: from.to_string(),
            });
        }
        *owner = *to;
        let mut holdings = self.holdings.lock().unwrap();
        if let Some(set) = holdings.get_mut(from) {
            set.remove(&id);
            if set.is_empty() {
                holdings.remove(from);
            }
        }
        holdings.entry(*to).or_default().insert(id);
        Ok(())
    }

    fn exists(&self, id: PassId) -> Result<bool, StoreError> {
        Ok(self.owners.lock().unwrap().contains_key(&id))
    }

    fn passes_of(&self, owner: &Address) -> Result<Vec<PassId>, StoreError> {
        Ok(self
            .holdings
            .lock()
            .unwrap()
            .get(owner)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default())
    }
}
