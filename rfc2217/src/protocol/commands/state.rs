// rfc2217-rs/rfc2217/src/protocol/commands/state.rs
//! Line-state and modem-state payloads. Any byte is a valid mask.

use crate::Result;
use crate::protocol::opcode::Opcode;
use crate::protocol::parser;
use crate::types::{LineState, ModemState};

/// Decode a NOTIFY-LINESTATE or SET-LINESTATE-MASK payload.
pub fn decode_line_state(op: Opcode, payload: &[u8]) -> Result<LineState> {
    parser::byte_at(op, payload, 0).map(LineState::new)
}

/// Decode a NOTIFY-MODEMSTATE or SET-MODEMSTATE-MASK payload.
pub fn decode_modem_state(op: Opcode, payload: &[u8]) -> Result<ModemState> {
    parser::byte_at(op, payload, 0).map(ModemState::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    #[test]
    fn every_byte_is_a_mask() {
        for b in 0..=u8::MAX {
            let l = decode_line_state(Opcode::NotifyLineState, &[b]).unwrap();
            assert_eq!(l.bits(), b);
            let m = decode_modem_state(Opcode::SetModemStateMask, &[b]).unwrap();
            assert_eq!(m.bits(), b);
        }
    }

    #[test]
    fn contains_checks_bits() {
        let l = decode_line_state(Opcode::NotifyLineState, &[0x18]).unwrap();
        assert!(l.contains(LINESTATE_BREAK_DETECT));
        assert!(l.contains(LINESTATE_FRAMING_ERROR));
        assert!(!l.contains(LINESTATE_DATA_READY));
    }
}
