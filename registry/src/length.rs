//! Weighted name-length rules.
//!
//! Lengths are counted in thirds of a unit so that the weights stay integral:
//! a single-byte character counts 3 thirds, every multi-byte character counts
//! 2 thirds.

use lockpass_types::params::ClassTable;
use lockpass_types::{PassClass, RegistryParams};

const NARROW_WEIGHT: u64 = 3;
const WIDE_WEIGHT: u64 = 2;
const THIRDS_PER_UNIT: u64 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthValidator {
    minimums: ClassTable<u32>,
    maximum: u32,
}

impl LengthValidator {
    pub fn new(minimums: ClassTable<u32>, maximum: u32) -> Self {
        Self { minimums, maximum }
    }

    pub fn from_params(params: &RegistryParams) -> Self {
        Self::new(params.min_name_length, params.max_name_length)
    }

    /// Effective length of `name` in thirds of a unit.
    pub fn effective_thirds(name: &str) -> u64 {
        name.chars()
            .map(|c| {
                if c.len_utf8() == 1 {
                    NARROW_WEIGHT
                } else {
                    WIDE_WEIGHT
                }
            })
            .sum()
    }

    /// Whether `name` is at least `minimum` units long and within the cap.
    pub fn is_valid(&self, minimum: u32, name: &str) -> bool {
        let thirds = Self::effective_thirds(name);
        thirds >= u64::from(minimum) * THIRDS_PER_UNIT
            && thirds <= u64::from(self.maximum) * THIRDS_PER_UNIT
    }

    pub fn minimum_for(&self, class: PassClass) -> u32 {
        self.minimums.get(class)
    }

    pub fn is_valid_for(&self, class: PassClass, name: &str) -> bool {
        self.is_valid(self.minimum_for(class), name)
    }
}

impl Default for LengthValidator {
    fn default() -> Self {
        Self::from_params(&RegistryParams::default())
    }
}
