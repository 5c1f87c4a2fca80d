// rfc2217-rs/rfc2217/src/protocol/parser.rs

use crate::constants::{COM_PORT_OPTION, HEADER_LEN};
use crate::protocol::opcode::Opcode;
use crate::types::Role;
use crate::{Error, Result};

/// Ensure the subnegotiation has at least the option and opcode bytes.
/// A lone non-44 byte is still reported as a bad option byte.
pub fn ensure_header(data: &[u8]) -> Result<()> {
    if let Some(&first) = data.first() {
        expect_option_byte(first)?;
    }
    if data.len() < HEADER_LEN {
        return Err(Error::Truncated { actual: data.len() });
    }
    Ok(())
}

/// The first byte must be COM-PORT-OPTION.
pub fn expect_option_byte(actual: u8) -> Result<()> {
    if actual != COM_PORT_OPTION {
        return Err(Error::InvalidOptionByte { actual });
    }
    Ok(())
}

/// Map a wire opcode to its command and sender role.
pub fn resolve_opcode(code: u8) -> Result<(Opcode, Role)> {
    Opcode::resolve(code).ok_or(Error::UnknownOpcode(code))
}

/// Check a payload against the command's declared length bounds.
pub fn check_payload_len(op: Opcode, payload: &[u8]) -> Result<()> {
    let (min, max) = op.payload_len();
    if payload.len() < min || payload.len() > max {
        return Err(Error::PayloadLengthOutOfRange {
            command: op.name(),
            min,
            max,
            actual: payload.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(op: Opcode, data: &[u8], idx: usize) -> Result<u8> {
    data.get(idx).copied().ok_or_else(|| short(op, data))
}

/// Read a big-endian u32 at `idx` with bounds checking.
pub fn be_u32_at(op: Opcode, data: &[u8], idx: usize) -> Result<u32> {
    let s = data.get(idx..idx + 4).ok_or_else(|| short(op, data))?;
    Ok(u32::from_be_bytes([s[0], s[1], s[2], s[3]]))
}

fn short(op: Opcode, data: &[u8]) -> Error {
    let (min, max) = op.payload_len();
    Error::PayloadLengthOutOfRange {
        command: op.name(),
        min,
        max,
        actual: data.len(),
    }
}
