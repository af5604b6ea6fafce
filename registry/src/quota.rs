//! Quota ledger: remaining open-voucher invitations per issuer.

use crate::error::RegistryError;
use lockpass_types::params::ClassTable;
use lockpass_types::{Address, PassClass};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An issuer's invitation allowance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaRecord {
    /// Class of the bound voucher that granted the allowance.
    pub class: PassClass,
    /// Starting allowance.
    pub allotment: u32,
    pub remaining: u32,
}

impl QuotaRecord {
    pub fn issued(&self) -> u32 {
        self.allotment - self.remaining
    }
}

/// Per-address invitation counters. Counters never increase after they are
/// initialised.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuotaLedger {
    allotments: ClassTable<u32>,
    records: HashMap<Address, QuotaRecord>,
}

impl QuotaLedger {
    pub fn new(allotments: ClassTable<u32>) -> Self {
        Self {
            allotments,
            records: HashMap::new(),
        }
    }

    /// Grant the class allotment the first time `address` receives a bound
    /// voucher. Returns `false` (and changes nothing) if a record exists.
    pub fn initialize(&mut self, address: &Address, class: PassClass) -> bool {
        if self.records.contains_key(address) {
            return false;
        }
        let allotment = self.allotments.get(class);
        self.records.insert(
            *address,
            QuotaRecord {
                class,
                allotment,
                remaining: allotment,
            },
        );
        true
    }

    /// Fails with `QuotaExhausted` when no record exists or nothing remains.
    pub fn check(&self, address: &Address) -> Result<u32, RegistryError> {
        match self.records.get(address) {
            Some(record) if record.remaining > 0 => Ok(record.remaining),
            _ => Err(RegistryError::QuotaExhausted),
        }
    }

    /// Spend one invitation, returning how many remain afterwards.
    pub fn consume_one(&mut self, address: &Address) -> Result<u32, RegistryError> {
        self.check(address)?;
        let record = self
            .records
            .get_mut(address)
            .ok_or(RegistryError::QuotaExhausted)?;
        record.remaining -= 1;
        Ok(record.remaining)
    }

    /// Remaining invitations of `address` under `class`; zero when the
    /// address has no allowance of that class.
    pub fn remaining(&self, address: &Address, class: PassClass) -> u32 {
        self.records
            .get(address)
            .filter(|r| r.class == class)
            .map_or(0, |r| r.remaining)
    }

    pub fn record(&self, address: &Address) -> Option<&QuotaRecord> {
        self.records.get(address)
    }
}
