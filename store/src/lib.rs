//! Abstract collaborator traits for the LockPass registry.
//!
//! The token ledger (ownership, transfers, enumeration) and the role store
//! (Inviter and admin capabilities) are owned by the host. The registry
//! depends only on these traits; `lockpass-nullables` provides in-memory
//! implementations for tests.

pub mod error;
pub mod ledger;
pub mod roles;

pub use error::StoreError;
pub use ledger::TokenLedger;
pub use roles::{Capability, RoleStore};
