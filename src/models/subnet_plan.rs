//! Subnet sizing result.

use super::MAX_LENGTH;
use serde::{Deserialize, Serialize};

/// The smallest subnet that holds a requested number of hosts.
///
/// `host_bits` and `network_bits` are clamped independently (host bits never
/// below 2, network bits never above 30), so at the extremes they are not
/// guaranteed to sum to 32.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetPlan {
    /// Number of hosts the caller asked for.
    pub hosts_needed: u32,
    /// Bits left for host addressing.
    pub host_bits: u8,
    /// Prefix length of the subnet.
    pub network_bits: u8,
    /// `2^host_bits`.
    #[serde(rename = "totalIPs")]
    pub total_addresses: u64,
    /// Total minus network and broadcast addresses.
    #[serde(rename = "usableIPs")]
    pub usable_addresses: u64,
    /// Dotted-decimal mask, e.g. "255.255.255.248".
    pub subnet_mask: String,
    /// CIDR notation, e.g. "/29".
    #[serde(rename = "cidr")]
    pub cidr_prefix: String,
}

impl SubnetPlan {
    /// True when the prefix no longer describes a block that holds the
    /// request: host and network bits stop adding up to 32, or the block is
    /// too small for the hosts plus network and broadcast.
    pub fn is_oversubscribed(&self) -> bool {
        u32::from(self.host_bits) + u32::from(self.network_bits) != u32::from(MAX_LENGTH)
            || self.total_addresses < u64::from(self.hosts_needed) + 2
    }

    /// Number of usable addresses left after the requested hosts.
    pub fn spare_addresses(&self) -> u64 {
        self.usable_addresses
            .saturating_sub(u64::from(self.hosts_needed))
    }
}

impl std::fmt::Display for SubnetPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} hosts -> {} ({}), {} usable",
            self.hosts_needed, self.cidr_prefix, self.subnet_mask, self.usable_addresses
        )
    }
}
