//! Subnetting arithmetic.
//!
//! - [`sizer`] - subnet size, mask and prefix from a host count
//! - [`classifier`] - address validation, class and scope
//! - [`binary`] - octet to binary conversion

mod binary;
mod classifier;
mod sizer;

// Re-export public functions
pub use binary::{breakdown, to_binary8};
pub use classifier::{address_class, classify, scope};
pub use sizer::{plan, required_host_bits, MAX_NETWORK_BITS, MIN_HOST_BITS, RESERVED_ADDRESSES};
