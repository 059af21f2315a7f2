// cargo watch -x 'fmt' -x 'test'

//! IPv4 subnetting tutor.
//!
//! Three pure calculators plus the plumbing to drive them from a terminal:
//! - [`plan`] sizes a subnet for a host count
//! - [`classify`] validates an address and reports class, scope and binary form
//! - [`to_binary8`] / [`breakdown`] show an octet bit by bit

pub mod cli;
pub mod config;
mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

pub use error::TutorError;
pub use processing::{breakdown, classify, plan, to_binary8};
