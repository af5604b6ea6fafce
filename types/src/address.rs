//! Account address type with `pass_` prefix.

use crate::error::TypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A LockPass account address.
///
/// 32 bytes derived from the holder's public key (see
/// `lockpass_crypto::derive_address`). Rendered as `pass_` followed by
/// lowercase hex.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address([u8; 32]);

impl Address {
    /// The standard prefix for rendered addresses.
    pub const PREFIX: &'static str = "pass_";

    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Byte-wise XOR with a 32-byte mask.
    ///
    /// Compact referral codes are an address masked with the message they
    /// commit to, so the same operation encodes and decodes them.
    pub fn masked(&self, mask: &[u8; 32]) -> [u8; 32] {
        let mut out = self.0;
        for (b, m) in out.iter_mut().zip(mask) {
            *b ^= m;
        }
        out
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({}{})", Self::PREFIX, hex::encode(&self.0[..6]))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let encoded = s
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| TypeError::InvalidAddress(s.to_string()))?;
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(encoded, &mut bytes)
            .map_err(|_| TypeError::InvalidAddress(s.to_string()))?;
        Ok(Self(bytes))
    }
}
