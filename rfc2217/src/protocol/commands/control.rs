// rfc2217-rs/rfc2217/src/protocol/commands/control.rs
//! SET-CONTROL and PURGE-DATA payloads.

use crate::protocol::opcode::Opcode;
use crate::protocol::parser;
use crate::types::{Control, Purge};
use crate::{Error, Result};

/// Decode SET-CONTROL payload
pub fn decode_control(payload: &[u8]) -> Result<Control> {
    let op = Opcode::SetControl;
    let value = parser::byte_at(op, payload, 0)?;
    Control::from_code(value).ok_or(Error::IllegalFieldValue {
        command: op.name(),
        value,
    })
}

/// Decode PURGE-DATA payload
pub fn decode_purge(payload: &[u8]) -> Result<Purge> {
    let op = Opcode::PurgeData;
    let value = parser::byte_at(op, payload, 0)?;
    Purge::from_code(value).ok_or(Error::IllegalFieldValue {
        command: op.name(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_control_values() {
        assert_eq!(decode_control(&[8]).unwrap(), Control::DtrOn);
        assert_eq!(decode_control(&[16]).unwrap(), Control::InboundFlowHardware);
        assert!(matches!(
            decode_control(&[20]),
            Err(Error::IllegalFieldValue {
                command: "SET-CONTROL",
                value: 20
            })
        ));
    }

    #[test]
    fn decode_purge_values() {
        assert_eq!(decode_purge(&[3]).unwrap(), Purge::Both);
        assert!(matches!(
            decode_purge(&[0]),
            Err(Error::IllegalFieldValue { value: 0, .. })
        ));
    }
}
