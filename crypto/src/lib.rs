//! Cryptographic primitives for the LockPass registry.
//!
//! - **Ed25519** for voucher signing and verification
//! - **Blake2b** for fingerprints (names, classes, signatures) and voucher messages
//! - Address derivation from public keys
//! - The [`SignatureVerifier`] seam the voucher engine recovers issuers through

pub mod address;
pub mod error;
pub mod hash;
pub mod keys;
pub mod message;
pub mod sign;
pub mod verifier;

pub use address::derive_address;
pub use error::SignatureError;
pub use hash::{
    blake2b_256, blake2b_256_multi, class_fingerprint, name_fingerprint, signature_fingerprint,
};
pub use keys::{generate_keypair, keypair_from_private, keypair_from_seed, public_from_private};
pub use message::{bound_voucher_message, open_voucher_message};
pub use sign::{compact_code, compact_code_for, sign_message, sign_voucher, verify_signature};
pub use verifier::{Ed25519Verifier, SignatureVerifier, VoucherSignature};
