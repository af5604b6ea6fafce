//! Address derivation from public keys.

use crate::hash::blake2b_256_multi;
use lockpass_types::{Address, PublicKey};

/// Domain separator so an address never equals a plain key or name digest.
const ADDRESS_DOMAIN: &[u8] = b"lockpass-address";

/// Derive the account address of a public key:
/// `Blake2b-256("lockpass-address" ‖ public_key)`.
pub fn derive_address(public_key: &PublicKey) -> Address {
    Address::new(blake2b_256_multi(&[ADDRESS_DOMAIN, public_key.as_bytes()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{generate_keypair, keypair_from_seed};

    #[test]
    fn derive_is_deterministic() {
        let kp = keypair_from_seed(&[7u8; 32]);
        assert_eq!(derive_address(&kp.public), derive_address(&kp.public));
    }

    #[test]
    fn address_is_not_the_raw_key() {
        let kp = keypair_from_seed(&[7u8; 32]);
        assert_ne!(derive_address(&kp.public).as_bytes(), kp.public.as_bytes());
    }

    #[test]
    fn different_keys_different_addresses() {
        let k1 = generate_keypair();
        let k2 = generate_keypair();
        assert_ne!(derive_address(&k1.public), derive_address(&k2.public));
    }
}
