//! Decimal to binary conversion for single octets.

use crate::models::{BitBreakdown, BitRecord, OCTET_BITS};

/// Render an octet as 8 binary digits, most significant bit first.
///
/// # Examples
/// ```
/// use subnet_tutor::to_binary8;
/// assert_eq!(to_binary8(170), "10101010");
/// ```
pub fn to_binary8(value: u8) -> String {
    format!("{value:08b}")
}

/// Split an octet into its eight bits with positional weights 2^7 .. 2^0.
pub fn breakdown(value: u8) -> BitBreakdown {
    let mut bits = [BitRecord {
        bit_value: 0,
        positional_weight: 0,
        contribution: 0,
    }; 8];
    for (idx, record) in bits.iter_mut().enumerate() {
        let exponent = OCTET_BITS - 1 - idx as u8;
        let positional_weight = 1u8 << exponent;
        let bit_value = (value >> exponent) & 1;
        *record = BitRecord {
            bit_value,
            positional_weight,
            contribution: bit_value * positional_weight,
        };
    }
    log::trace!("breakdown({value}) = {bits:?}");

    BitBreakdown {
        decimal: value,
        binary: to_binary8(value),
        bits,
    }
}
