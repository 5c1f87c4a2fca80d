// rfc2217-rs/rfc2217/src/protocol/commands/baud_rate.rs

use crate::Result;
use crate::protocol::opcode::Opcode;
use crate::protocol::parser;

/// Encode SET-BAUDRATE payload: 4 bytes, network byte order.
/// A rate of 0 asks the peer for its current rate.
pub fn encode_baud_rate(baud_rate: u32, buf: &mut Vec<u8>) {
    buf.extend_from_slice(&baud_rate.to_be_bytes());
}

/// Decode SET-BAUDRATE payload.
pub fn decode_baud_rate(payload: &[u8]) -> Result<u32> {
    parser::be_u32_at(Opcode::SetBaudRate, payload, 0)
}
