//! Issuer recovery for voucher signatures.
//!
//! Two encodings are accepted:
//! - **Signed envelope** (96 bytes): `public_key ‖ ed25519_signature`. The
//!   issuer is the address of the embedded key, provided the signature
//!   verifies over the message.
//! - **Compact code** (32 bytes): the issuer's address masked with the
//!   message. Anyone can build one, so the engine only honours them where
//!   the issuer's own quota is what gets spent.

use crate::address::derive_address;
use crate::error::SignatureError;
use crate::sign::verify_signature;
use lockpass_types::{Address, PublicKey, Signature};

pub const SIGNED_ENVELOPE_LEN: usize = 96;
pub const COMPACT_CODE_LEN: usize = 32;

/// A decoded voucher signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VoucherSignature {
    Signed {
        public_key: PublicKey,
        signature: Signature,
    },
    Compact([u8; 32]),
}

impl VoucherSignature {
    /// Decode raw signature bytes. Fails only on a length that matches
    /// neither encoding.
    pub fn parse(bytes: &[u8]) -> Result<Self, SignatureError> {
        match bytes.len() {
            SIGNED_ENVELOPE_LEN => {
                let mut key = [0u8; 32];
                let mut sig = [0u8; 64];
                key.copy_from_slice(&bytes[..32]);
                sig.copy_from_slice(&bytes[32..]);
                Ok(Self::Signed {
                    public_key: PublicKey(key),
                    signature: Signature(sig),
                })
            }
            COMPACT_CODE_LEN => {
                let mut code = [0u8; 32];
                code.copy_from_slice(bytes);
                Ok(Self::Compact(code))
            }
            len => Err(SignatureError::Malformed { len }),
        }
    }

    pub fn is_compact(&self) -> bool {
        matches!(self, Self::Compact(_))
    }
}

/// Recovers the issuer address a voucher signature speaks for.
pub trait SignatureVerifier {
    /// Returns `Mismatch` when the signature was made over a different
    /// message, which callers treat the same as an issuer with no standing.
    fn recover(
        &self,
        message: &[u8; 32],
        signature: &VoucherSignature,
    ) -> Result<Address, SignatureError>;
}

/// Default verifier: Ed25519 envelopes and compact codes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ed25519Verifier;

impl SignatureVerifier for Ed25519Verifier {
    fn recover(
        &self,
        message: &[u8; 32],
        signature: &VoucherSignature,
    ) -> Result<Address, SignatureError> {
        match signature {
            VoucherSignature::Signed {
                public_key,
                signature,
            } => {
                if verify_signature(message, signature, public_key) {
                    Ok(derive_address(public_key))
                } else {
                    Err(SignatureError::Mismatch)
                }
            }
            VoucherSignature::Compact(code) => {
                Ok(Address::new(Address::new(*code).masked(message)))
            }
        }
    }
}
