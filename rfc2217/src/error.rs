// rfc2217-rs/rfc2217/src/error.rs
//! Crate error type.

use thiserror::Error;

/// Common error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Fewer than the option and opcode bytes.
    #[error("truncated subnegotiation: expected at least 2 bytes, got {actual}")]
    Truncated {
        /// Bytes received
        actual: usize,
    },

    /// First byte is not COM-PORT-OPTION.
    #[error("invalid option byte: expected 0x2c, got {actual:#04x}")]
    InvalidOptionByte {
        /// Byte found in the option position
        actual: u8,
    },

    /// Opcode is neither a client nor a server command.
    #[error("unknown opcode {0:#04x}")]
    UnknownOpcode(u8),

    /// Payload length outside the command's bounds.
    #[error("{command}: payload length {actual} out of range {min}..={max}")]
    PayloadLengthOutOfRange {
        /// RFC command name
        command: &'static str,
        /// Shortest legal payload
        min: usize,
        /// Longest legal payload
        max: usize,
        /// Payload bytes received
        actual: usize,
    },

    /// Field byte not in the command's value table.
    #[error("{command}: illegal field value {value:#04x}")]
    IllegalFieldValue {
        /// RFC command name
        command: &'static str,
        /// Rejected byte
        value: u8,
    },

    /// Operation on a closed `ComPort`.
    #[error("port is closed")]
    PortClosed,

    /// Baud rate the port cannot be set to.
    #[error("invalid baud rate {0}")]
    InvalidBaudRate(u32),

    /// Setting the port cannot be set to.
    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    /// The connection failed to send.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
