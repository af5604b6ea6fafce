//! Parse errors for the fundamental types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypeError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("unknown pass class: {0}")]
    UnknownClass(String),
}
