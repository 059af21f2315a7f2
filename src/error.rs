//! Error types for input handling and configuration.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TutorError {
    #[error("Please enter a valid number of hosts (1 or greater).")]
    InvalidHostCount(String),
    #[error("Host count {0} is larger than the IPv4 address space")]
    HostCountTooLarge(u64),
    #[error("Enter a number between 0 and 255")]
    InvalidOctet(String),
    #[error("{0}")]
    InvalidAddressFormat(String),
    #[error("Unknown command '{0}', type 'help' for usage")]
    UnknownCommand(String),
    #[error("Command '{command}' needs {argument}")]
    MissingArgument {
        command: String,
        argument: &'static str,
    },
    #[error("Invalid value '{value}' for {key}")]
    Config { key: String, value: String },
}
