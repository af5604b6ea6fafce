use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("malformed voucher signature: expected 96 or 32 bytes, got {len}")]
    Malformed { len: usize },

    #[error("signature does not verify against the voucher message")]
    Mismatch,
}
