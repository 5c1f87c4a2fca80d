// rfc2217-rs/rfc2217/src/protocol/codec.rs

use crate::Result;
use crate::utils::bytes_to_hex_spaced;

use super::commands::ComPortCommand;

/// Decode one reassembled COM-PORT-OPTION subnegotiation
/// (`[44, opcode, payload...]`) into a command.
pub fn decode(bytes: &[u8]) -> Result<ComPortCommand> {
    log::trace!("decode: {}", bytes_to_hex_spaced(bytes));
    match ComPortCommand::decode(bytes) {
        Ok(cmd) => {
            log::debug!("decoded {} command: {}", cmd.role(), cmd);
            Ok(cmd)
        }
        Err(e) => {
            log::debug!("rejected subnegotiation [{}]: {}", bytes_to_hex_spaced(bytes), e);
            Err(e)
        }
    }
}

/// Encode a command into its subnegotiation bytes.
pub fn encode(cmd: &ComPortCommand) -> Vec<u8> {
    let bytes = cmd.encode();
    log::trace!("encode {}: {}", cmd, bytes_to_hex_spaced(&bytes));
    bytes
}
