//! Ed25519 message signing and voucher encoding.

use crate::address::derive_address;
use ed25519_dalek::{Signer, SigningKey, VerifyingKey};
use lockpass_types::{Address, KeyPair, PrivateKey, PublicKey, Signature};

/// Sign a message with a private key, returning the signature.
pub fn sign_message(message: &[u8], private_key: &PrivateKey) -> Signature {
    let signing_key = SigningKey::from_bytes(&private_key.0);
    Signature(signing_key.sign(message).to_bytes())
}

/// Verify a signature against a message and public key.
///
/// Returns `false` for an undecodable public key as well as a bad signature.
/// Uses strict verification, so non-canonical signatures are rejected.
pub fn verify_signature(message: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(&public_key.0) else {
        return false;
    };
    let dalek_sig = ed25519_dalek::Signature::from_bytes(&signature.0);
    verifying_key.verify_strict(message, &dalek_sig).is_ok()
}

/// Sign a voucher message and return the 96-byte signed envelope
/// (`public_key ‖ signature`) that redemption requests carry.
pub fn sign_voucher(message: &[u8; 32], keypair: &KeyPair) -> Vec<u8> {
    let signature = sign_message(message, &keypair.private);
    let mut envelope = Vec::with_capacity(96);
    envelope.extend_from_slice(keypair.public.as_bytes());
    envelope.extend_from_slice(signature.as_bytes());
    envelope
}

/// Build the 32-byte compact referral code of `issuer` for a message:
/// the issuer's address masked with the message.
pub fn compact_code(issuer: &Address, message: &[u8; 32]) -> [u8; 32] {
    issuer.masked(message)
}

/// Compact code for the holder of `keypair`.
pub fn compact_code_for(keypair: &KeyPair, message: &[u8; 32]) -> [u8; 32] {
    compact_code(&derive_address(&keypair.public), message)
}
