//! Blake2b fingerprints for names, classes, and signatures.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use lockpass_types::{Fingerprint, PassClass};

type Blake2b256 = Blake2b<U32>;

/// Compute a 256-bit Blake2b hash of arbitrary data.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    blake2b_256_multi(&[data])
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn blake2b_256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    let mut output = [0u8; 32];
    output.copy_from_slice(&hasher.finalize());
    output
}

/// Lookup key of a name: the digest of its UTF-8 bytes, no normalisation.
pub fn name_fingerprint(name: &str) -> Fingerprint {
    Fingerprint::new(blake2b_256(name.as_bytes()))
}

/// Digest of the class label. Open vouchers sign this value directly.
pub fn class_fingerprint(class: PassClass) -> Fingerprint {
    Fingerprint::new(blake2b_256(class.label().as_bytes()))
}

/// Replay key of a raw signature encoding.
pub fn signature_fingerprint(signature: &[u8]) -> Fingerprint {
    Fingerprint::new(blake2b_256(signature))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_equivalent_to_concatenation() {
        let single = blake2b_256(b"lockpass");
        let multi = blake2b_256_multi(&[b"lock", b"pass"]);
        assert_eq!(single, multi);
    }

    #[test]
    fn name_fingerprint_is_case_sensitive() {
        assert_eq!(name_fingerprint("abc"), name_fingerprint("abc"));
        assert_ne!(name_fingerprint("abc"), name_fingerprint("ABC"));
    }

    #[test]
    fn class_fingerprints_are_distinct() {
        let a = class_fingerprint(PassClass::A);
        let b = class_fingerprint(PassClass::B);
        let c = class_fingerprint(PassClass::C);
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
        assert_eq!(a, name_fingerprint("A"));
    }

    #[test]
    fn empty_input_is_not_zero() {
        assert!(!signature_fingerprint(b"").is_zero());
    }
}
