//! Nullable collaborators for deterministic testing.
//!
//! The registry talks to its token ledger and role store through traits.
//! This crate provides in-memory implementations that:
//! - Never touch the filesystem or network
//! - Can be seeded and inspected programmatically
//! - Are safe to share across threads
//!
//! Usage: hand these to the voucher engine in tests and local tooling.

pub mod ledger;
pub mod roles;

pub use ledger::NullLedger;
pub use roles::NullRoles;
