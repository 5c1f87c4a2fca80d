// rfc2217-rs/rfc2217/src/telnet/binary.rs

use crate::constants::TRANSMIT_BINARY;

use super::{OptionFlags, OptionHandler};

/// TRANSMIT-BINARY (RFC 856). Enabled in both directions so the TELNET
/// layer passes serial data through as 8-bit bytes; it has no
/// subnegotiation.
#[derive(Debug, Clone, Copy)]
pub struct TransmitBinaryOptionHandler {
    flags: OptionFlags,
}

impl TransmitBinaryOptionHandler {
    /// Handler that accepts in both directions.
    pub fn new() -> Self {
        Self {
            flags: OptionFlags::ALL,
        }
    }
}

impl Default for TransmitBinaryOptionHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionHandler for TransmitBinaryOptionHandler {
    fn option_code(&self) -> u8 {
        TRANSMIT_BINARY
    }

    fn flags(&self) -> OptionFlags {
        self.flags
    }

    fn answer_subnegotiation(&mut self, _data: &[u8]) -> Option<Vec<u8>> {
        None
    }

    fn start_subnegotiation_local(&mut self) -> Option<Vec<u8>> {
        None
    }

    fn start_subnegotiation_remote(&mut self) -> Option<Vec<u8>> {
        None
    }
}
