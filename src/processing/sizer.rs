//! Subnet sizing from a required host count.
//!
//! Finds the smallest power-of-two block that holds the requested hosts plus
//! the network and broadcast addresses, and derives mask and prefix from it.

use crate::models::{dotted, mask_octets, SubnetPlan, MAX_LENGTH};

/// Network and broadcast addresses, unusable by hosts.
pub const RESERVED_ADDRESSES: u64 = 2;

/// Smallest host part ever reported (a /30).
pub const MIN_HOST_BITS: u8 = 2;

/// Longest prefix ever reported.
pub const MAX_NETWORK_BITS: u8 = 30;

/// `ceil(log2(n))` for `n >= 1`, exact at powers of two.
fn ceil_log2(n: u64) -> u8 {
    if n <= 1 {
        0
    } else {
        (u64::BITS - (n - 1).leading_zeros()) as u8
    }
}

/// Host bits needed before any clamping: `ceil(log2(hosts_needed + 2))`.
pub fn required_host_bits(hosts_needed: u32) -> u8 {
    ceil_log2(u64::from(hosts_needed) + RESERVED_ADDRESSES)
}

/// Size a subnet for `hosts_needed` hosts.
///
/// Callers validate the input first (see [`crate::input::parse_host_count`]);
/// a count of 0 is outside the contract and simply yields the floor /30.
///
/// Host bits are floored at [`MIN_HOST_BITS`] and network bits capped at
/// [`MAX_NETWORK_BITS`] independently of each other. Requests larger than a
/// /1 can hold leave the plan oversubscribed.
///
/// # Examples
/// ```
/// let plan = subnet_tutor::plan(5);
/// assert_eq!(plan.subnet_mask, "255.255.255.248");
/// assert_eq!(plan.cidr_prefix, "/29");
/// ```
pub fn plan(hosts_needed: u32) -> SubnetPlan {
    let raw_host_bits = required_host_bits(hosts_needed);
    let raw_network_bits = MAX_LENGTH.saturating_sub(raw_host_bits);
    log::debug!(
        "plan({hosts_needed}) raw host_bits={raw_host_bits} network_bits={raw_network_bits}"
    );

    let host_bits = raw_host_bits.max(MIN_HOST_BITS);
    let network_bits = raw_network_bits.min(MAX_NETWORK_BITS);
    if host_bits != raw_host_bits || network_bits != raw_network_bits {
        log::debug!(
            "plan({hosts_needed}) clamped to host_bits={host_bits} network_bits={network_bits}"
        );
    }

    let total_addresses = 1u64 << host_bits;
    let usable_addresses = total_addresses - RESERVED_ADDRESSES;
    let subnet_mask = dotted(&mask_octets(network_bits));

    let plan = SubnetPlan {
        hosts_needed,
        host_bits,
        network_bits,
        total_addresses,
        usable_addresses,
        subnet_mask,
        cidr_prefix: format!("/{network_bits}"),
    };
    if plan.is_oversubscribed() {
        log::info!(
            "{hosts_needed} hosts do not fit in any IPv4 prefix, reporting {}",
            plan.cidr_prefix
        );
    }
    plan
}
