//! LockPass registry: signed-voucher pass issuance and name binding.
//!
//! A pass is minted only against a valid, single-use voucher:
//! - **Bound vouchers** name a target identifier in the reserved low range
//!   and must be signed by an address holding the Inviter capability.
//! - **Open vouchers** name only a class and are signed by an established
//!   holder, each redemption spending one unit of that holder's quota.
//!
//! Holders may then bind a name to a pass, once, subject to a class-specific
//! minimum effective length and global uniqueness.
//!
//! The [`VoucherEngine`] orchestrates the independently owned stores:
//! [`ReplayGuard`], [`QuotaLedger`], [`PassAllocator`] and [`NameRegistry`].

pub mod allocator;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod length;
pub mod names;
pub mod quota;
pub mod replay;
pub mod voucher;

pub use allocator::PassAllocator;
pub use config::{ConfigError, RegistryConfig};
pub use engine::VoucherEngine;
pub use error::RegistryError;
pub use events::RegistryEvent;
pub use length::LengthValidator;
pub use names::NameRegistry;
pub use quota::{QuotaLedger, QuotaRecord};
pub use replay::ReplayGuard;
pub use voucher::{NameOutcome, Redemption, VoucherKind, VoucherRequest};
