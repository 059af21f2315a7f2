//! Domain models for the subnetting tutor.
//!
//! This module contains the value records returned by the calculators:
//! - [`SubnetPlan`] - result of sizing a subnet for a host count
//! - [`AddressClassification`] - result of validating and classifying an address
//! - [`BitBreakdown`] - per-bit view of one octet

mod bits;
mod classification;
mod ipv4;
mod subnet_plan;

// Re-export public types
pub use bits::{BitBreakdown, BitRecord};
pub use classification::{AddressClass, AddressClassification, ClassifiedAddress, Scope};
pub use ipv4::{dotted, mask_octets, MAX_LENGTH, OCTET_BITS};
pub use subnet_plan::SubnetPlan;
