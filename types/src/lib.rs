//! Fundamental types for the LockPass registry.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! addresses, fingerprints, pass classes, key material, and registry parameters.

pub mod address;
pub mod class;
pub mod error;
pub mod hash;
pub mod keys;
pub mod params;
pub mod pass;

pub use address::Address;
pub use class::PassClass;
pub use error::TypeError;
pub use hash::Fingerprint;
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use params::RegistryParams;
pub use pass::{Pass, PassId};
