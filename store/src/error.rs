use lockpass_types::PassId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("pass {0} does not exist")]
    NotFound(PassId),

    #[error("pass {0} already exists")]
    Duplicate(PassId),

    #[error("pass {pass_id} is not owned by {claimed}")]
    NotOwner { pass_id: PassId, claimed: String },

    #[error("storage backend error: {0}")]
    Backend(String),
}
