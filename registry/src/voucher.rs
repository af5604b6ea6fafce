//! Redemption request and result types.

use crate::error::RegistryError;
use lockpass_types::{Fingerprint, PassClass, PassId};

/// A voucher as submitted by the redeeming caller. Not persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoucherRequest {
    /// Raw signature bytes: a 96-byte signed envelope or a 32-byte compact code.
    pub signature: Vec<u8>,
    /// Name to bind to the new pass. Empty means "do not bind".
    pub name: String,
    pub class: PassClass,
    /// Explicit pass identifier for a bound voucher, zero for an open one.
    pub target: PassId,
}

impl VoucherRequest {
    pub fn bound(signature: Vec<u8>, class: PassClass, target: PassId) -> Self {
        Self {
            signature,
            name: String::new(),
            class,
            target,
        }
    }

    pub fn open(signature: Vec<u8>, class: PassClass) -> Self {
        Self::bound(signature, class, 0)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn kind(&self) -> VoucherKind {
        if self.target == 0 {
            VoucherKind::Open
        } else {
            VoucherKind::Bound
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoucherKind {
    Bound,
    Open,
}

/// What happened to the name submitted with a redemption.
#[derive(Debug)]
pub enum NameOutcome {
    Bound(Fingerprint),
    /// Binding failed after the pass was minted; the mint stands.
    Rejected(RegistryError),
}

/// Result of a successful redemption.
#[derive(Debug)]
pub struct Redemption {
    /// The pass the voucher was for.
    pub pass_id: PassId,
    pub class: PassClass,
    pub kind: VoucherKind,
    /// Class-C passes minted alongside a bound voucher's pass.
    pub bonus: Vec<PassId>,
    /// `None` when no name was submitted.
    pub name: Option<NameOutcome>,
}

impl Redemption {
    pub fn name_bound(&self) -> bool {
        matches!(self.name, Some(NameOutcome::Bound(_)))
    }

    /// Every pass minted by this redemption, primary first.
    pub fn minted(&self) -> Vec<PassId> {
        std::iter::once(self.pass_id)
            .chain(self.bonus.iter().copied())
            .collect()
    }
}
