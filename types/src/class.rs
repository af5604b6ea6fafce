//! Pass classes.

use crate::error::TypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The tier a pass is issued under.
///
/// The class decides the minimum name length a pass may bind and, for passes
/// issued by the foundation, how many further invitations the holder may sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PassClass {
    A,
    B,
    C,
}

impl PassClass {
    pub const ALL: [PassClass; 3] = [PassClass::A, PassClass::B, PassClass::C];

    /// The canonical label. Its Blake2b digest is the class fingerprint that
    /// vouchers sign over.
    pub fn label(&self) -> &'static str {
        match self {
            PassClass::A => "A",
            PassClass::B => "B",
            PassClass::C => "C",
        }
    }
}

impl fmt::Display for PassClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PassClass {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" | "a" => Ok(PassClass::A),
            "B" | "b" => Ok(PassClass::B),
            "C" | "c" => Ok(PassClass::C),
            other => Err(TypeError::UnknownClass(other.to_string())),
        }
    }
}
