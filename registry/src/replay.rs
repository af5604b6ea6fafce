//! Replay guard: the append-only set of consumed signature fingerprints.

use crate::error::RegistryError;
use lockpass_crypto::blake2b_256_multi;
use lockpass_types::{Address, Fingerprint};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Domain separator for per-recipient open-voucher keys.
const RECIPIENT_DOMAIN: &[u8] = b"lockpass-open-redemption";

/// Tracks every signature fingerprint the engine has accepted.
///
/// The engine checks before any semantic validation and consumes only once a
/// redemption has been committed.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReplayGuard {
    consumed: HashSet<Fingerprint>,
    /// Signatures accepted at least once as open vouchers. They stay open to
    /// new recipients but are never redeemable as bound vouchers.
    open_accepted: HashSet<Fingerprint>,
}

impl ReplayGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key for one recipient's redemption of an open voucher. Open vouchers
    /// serve many recipients, so their replay key includes the recipient.
    pub fn recipient_key(signature: &Fingerprint, recipient: &Address) -> Fingerprint {
        Fingerprint::new(blake2b_256_multi(&[
            RECIPIENT_DOMAIN,
            signature.as_bytes(),
            recipient.as_bytes(),
        ]))
    }

    pub fn is_consumed(&self, fingerprint: &Fingerprint) -> bool {
        self.consumed.contains(fingerprint)
    }

    pub fn check(&self, fingerprint: &Fingerprint) -> Result<(), RegistryError> {
        if self.is_consumed(fingerprint) {
            return Err(RegistryError::Replay);
        }
        Ok(())
    }

    /// Whether `signature` has been accepted as an open voucher.
    pub fn is_open_accepted(&self, signature: &Fingerprint) -> bool {
        self.open_accepted.contains(signature)
    }

    /// Replay check for a bound redemption of `signature`.
    pub fn check_bound(&self, signature: &Fingerprint) -> Result<(), RegistryError> {
        self.check(signature)?;
        if self.is_open_accepted(signature) {
            return Err(RegistryError::Replay);
        }
        Ok(())
    }

    /// Replay check for `recipient` redeeming the open voucher `signature`.
    /// Returns the per-recipient key to consume on commit.
    pub fn check_open(
        &self,
        signature: &Fingerprint,
        recipient: &Address,
    ) -> Result<Fingerprint, RegistryError> {
        self.check(signature)?;
        let key = Self::recipient_key(signature, recipient);
        self.check(&key)?;
        Ok(key)
    }

    /// Record a fingerprint. Returns `false` if it was already present.
    pub fn consume(&mut self, fingerprint: Fingerprint) -> bool {
        self.consumed.insert(fingerprint)
    }

    /// Record `recipient`'s redemption of the open voucher `signature`.
    pub fn consume_open(&mut self, signature: Fingerprint, recipient: &Address) {
        self.consumed.insert(Self::recipient_key(&signature, recipient));
        self.open_accepted.insert(signature);
    }

    pub fn len(&self) -> usize {
        self.consumed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consumed.is_empty()
    }
}
