//! Registry parameters: class tables, identifier ranges, and name limits.
//!
//! Every field has a serde default, so a TOML file only needs the values it
//! overrides.

use crate::class::PassClass;
use crate::pass::PassId;
use serde::{Deserialize, Serialize};

/// One value per pass class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassTable<T> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T: Copy> ClassTable<T> {
    pub const fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    pub fn get(&self, class: PassClass) -> T {
        match class {
            PassClass::A => self.a,
            PassClass::B => self.b,
            PassClass::C => self.c,
        }
    }
}

/// All tunable registry parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryParams {
    // ── Issuance ─────────────────────────────────────────────────────────
    /// Open-voucher invitations granted to the recipient of a bound voucher,
    /// keyed by the bound voucher's class.
    #[serde(default = "default_invitation_allotment")]
    pub invitation_allotment: ClassTable<u32>,

    /// Extra class-C passes minted alongside a bound voucher's pass.
    #[serde(default = "default_bonus_passes")]
    pub bonus_passes: ClassTable<u32>,

    /// Highest identifier a bound voucher may target. Auto-allocated
    /// identifiers start right above it.
    #[serde(default = "default_reserved_upper_bound")]
    pub reserved_upper_bound: PassId,

    /// Whether 32-byte compact referral codes are accepted for open vouchers.
    #[serde(default = "default_true")]
    pub accept_compact_codes: bool,

    // ── Names ────────────────────────────────────────────────────────────
    /// Minimum effective name length, in narrow-character units.
    #[serde(default = "default_min_name_length")]
    pub min_name_length: ClassTable<u32>,

    /// Absolute cap on effective name length, in narrow-character units.
    #[serde(default = "default_max_name_length")]
    pub max_name_length: u32,
}

fn default_invitation_allotment() -> ClassTable<u32> {
    ClassTable::new(18, 18, 3)
}

fn default_bonus_passes() -> ClassTable<u32> {
    ClassTable::new(5, 5, 0)
}

fn default_reserved_upper_bound() -> PassId {
    100_000
}

fn default_true() -> bool {
    true
}

fn default_min_name_length() -> ClassTable<u32> {
    ClassTable::new(2, 4, 6)
}

fn default_max_name_length() -> u32 {
    64
}

impl RegistryParams {
    /// First identifier handed out by the auto-allocator.
    pub fn first_auto_id(&self) -> PassId {
        self.reserved_upper_bound.saturating_add(1)
    }
}

impl Default for RegistryParams {
    fn default() -> Self {
        Self {
            invitation_allotment: default_invitation_allotment(),
            bonus_passes: default_bonus_passes(),
            reserved_upper_bound: default_reserved_upper_bound(),
            accept_compact_codes: default_true(),
            min_name_length: default_min_name_length(),
            max_name_length: default_max_name_length(),
        }
    }
}
