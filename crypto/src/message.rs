//! Voucher message construction.
//!
//! The two voucher shapes sign different messages and carry no variant tag.
//! A signature made for one shape never verifies under the other, so feeding
//! the wrong target or class simply fails to recover the intended issuer.

use crate::hash::{blake2b_256_multi, class_fingerprint};
use lockpass_types::{PassClass, PassId};

/// Message committed to by a bound voucher:
/// `Blake2b-256(be256(target) ‖ class_fingerprint)`.
///
/// The target is widened to a 32-byte big-endian word.
pub fn bound_voucher_message(target: PassId, class: PassClass) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&target.to_be_bytes());
    blake2b_256_multi(&[&word, class_fingerprint(class).as_bytes()])
}

/// Message committed to by an open voucher: the class fingerprint itself.
pub fn open_voucher_message(class: PassClass) -> [u8; 32] {
    *class_fingerprint(class).as_bytes()
}
