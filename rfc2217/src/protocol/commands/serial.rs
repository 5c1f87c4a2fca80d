// rfc2217-rs/rfc2217/src/protocol/commands/serial.rs
//! SET-DATASIZE, SET-PARITY and SET-STOPSIZE. Each carries one byte that
//! must be a member of the command's value table.

use crate::protocol::opcode::Opcode;
use crate::protocol::parser;
use crate::types::{DataSize, Parity, StopSize};
use crate::{Error, Result};

fn illegal(op: Opcode, value: u8) -> Error {
    Error::IllegalFieldValue {
        command: op.name(),
        value,
    }
}

/// Decode SET-DATASIZE payload
pub fn decode_data_size(payload: &[u8]) -> Result<DataSize> {
    let op = Opcode::SetDataSize;
    let value = parser::byte_at(op, payload, 0)?;
    DataSize::from_code(value).ok_or_else(|| illegal(op, value))
}

/// Decode SET-PARITY payload
pub fn decode_parity(payload: &[u8]) -> Result<Parity> {
    let op = Opcode::SetParity;
    let value = parser::byte_at(op, payload, 0)?;
    Parity::from_code(value).ok_or_else(|| illegal(op, value))
}

/// Decode SET-STOPSIZE payload
pub fn decode_stop_size(payload: &[u8]) -> Result<StopSize> {
    let op = Opcode::SetStopSize;
    let value = parser::byte_at(op, payload, 0)?;
    StopSize::from_code(value).ok_or_else(|| illegal(op, value))
}
