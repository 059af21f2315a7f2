//! IPv4 octet and subnet mask utilities.
//!
//! Provides the bit-width constants and the helpers that turn a CIDR prefix
//! length into the four dotted-decimal octets of a subnet mask.

use itertools::Itertools;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Number of bits in one octet.
pub const OCTET_BITS: u8 = 8;

/// Build the subnet mask octets for a prefix length.
///
/// Octet `i` (most significant first) gets `clamp(network_bits - i*8, 0, 8)`
/// leading one bits. Prefix lengths above 32 saturate to `255.255.255.255`.
///
/// # Examples
/// ```
/// use subnet_tutor::models::mask_octets;
/// assert_eq!(mask_octets(20), [255, 255, 240, 0]);
/// ```
pub fn mask_octets(network_bits: u8) -> [u8; 4] {
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        let set_bits = network_bits
            .saturating_sub(i as u8 * OCTET_BITS)
            .min(OCTET_BITS);
        *octet = (OCTET_BITS - set_bits..OCTET_BITS)
            .map(|j| 1u8 << j)
            .sum();
    }
    octets
}

/// Join octets (or any displayable values) with '.'.
pub fn dotted<T: std::fmt::Display>(parts: &[T]) -> String {
    parts.iter().join(".")
}
