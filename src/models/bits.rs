//! Per-bit view of a single octet.

use serde::{Deserialize, Serialize};

/// One bit of an octet together with its positional weight.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BitRecord {
    /// 0 or 1.
    pub bit_value: u8,
    /// Power of two for this position, 128 down to 1.
    pub positional_weight: u8,
    /// `bit_value * positional_weight`.
    pub contribution: u8,
}

impl BitRecord {
    /// Exponent of the positional weight (7 for 128, 0 for 1).
    pub fn exponent(&self) -> u32 {
        self.positional_weight.trailing_zeros()
    }

    pub fn is_set(&self) -> bool {
        self.bit_value == 1
    }
}

/// The eight bits of an octet, most significant first.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BitBreakdown {
    pub decimal: u8,
    pub binary: String,
    pub bits: [BitRecord; 8],
}

impl BitBreakdown {
    /// Sum of all contributions; always equals `decimal`.
    pub fn total(&self) -> u16 {
        self.bits.iter().map(|b| u16::from(b.contribution)).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BitRecord> {
        self.bits.iter()
    }
}
