use lockpass_crypto::SignatureError;
use lockpass_store::StoreError;
use lockpass_types::PassId;
use thiserror::Error;

/// Every way a registry call can fail. Each variant is a distinct, stable
/// cause; no call is retried internally.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("signature already consumed")]
    Replay,

    #[error("unusable voucher signature: {0}")]
    MalformedSignature(#[from] SignatureError),

    #[error("voucher issuer lacks the required capability")]
    InvalidIssuer,

    #[error("invalid voucher target: {0}")]
    InvalidTarget(String),

    #[error("target pass {0} has already been redeemed")]
    TargetAlreadyConsumed(PassId),

    #[error("issuer has no invitations left")]
    QuotaExhausted,

    #[error("name does not satisfy the length rules for this pass")]
    NameInvalid,

    #[error("name is already bound to pass {0}")]
    NameTaken(PassId),

    #[error("name is reserved")]
    NameReserved,

    #[error("pass {0} already has a bound name")]
    AlreadyBound(PassId),

    #[error("caller does not hold pass {0}")]
    NotOwner(PassId),

    #[error("pass {0} does not exist")]
    PassNotFound(PassId),

    #[error("caller is not an administrator")]
    NotAuthorized,

    #[error("name is not reserved")]
    NotReserved,

    #[error("no name is bound to this fingerprint")]
    NameNotFound,

    #[error("pass identifier space exhausted")]
    Overflow,

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
