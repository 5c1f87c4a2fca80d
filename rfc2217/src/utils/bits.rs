//! Rendering of RFC 2217 line-state and modem-state bitmasks.

use crate::constants::*;

/// Bit -> name table. Order is the order names are reported in.
pub type BitTable = &'static [(u8, &'static str)];

/// Line-state bits, most significant first.
pub const LINESTATE_BITS: BitTable = &[
    (LINESTATE_TIME_OUT, "TIME_OUT"),
    (
        LINESTATE_TRANSFER_SHIFT_REGISTER_EMPTY,
        "TRANSFER_SHIFT_REGISTER_EMPTY",
    ),
    (
        LINESTATE_TRANSFER_HOLDING_REGISTER_EMPTY,
        "TRANSFER_HOLDING_REGISTER_EMPTY",
    ),
    (LINESTATE_BREAK_DETECT, "BREAK_DETECT"),
    (LINESTATE_FRAMING_ERROR, "FRAMING_ERROR"),
    (LINESTATE_PARITY_ERROR, "PARITY_ERROR"),
    (LINESTATE_OVERRUN_ERROR, "OVERRUN_ERROR"),
    (LINESTATE_DATA_READY, "DATA_READY"),
];

/// Modem-state bits, most significant first.
pub const MODEMSTATE_BITS: BitTable = &[
    (MODEMSTATE_CARRIER_DETECT, "CARRIER_DETECT"),
    (MODEMSTATE_RING_INDICATOR, "RING_INDICATOR"),
    (MODEMSTATE_DSR, "DSR"),
    (MODEMSTATE_CTS, "CTS"),
    (MODEMSTATE_DELTA_CARRIER_DETECT, "DELTA_CARRIER_DETECT"),
    (
        MODEMSTATE_TRAILING_EDGE_RING_DETECTOR,
        "TRAILING_EDGE_RING_DETECTOR",
    ),
    (MODEMSTATE_DELTA_DSR, "DELTA_DSR"),
    (MODEMSTATE_DELTA_CTS, "DELTA_CTS"),
];

/// Names of the bits set in `mask`, in table order. Bits the table does not
/// name are ignored; a zero mask yields an empty list.
pub fn decode_bits(mask: u8, table: BitTable) -> Vec<&'static str> {
    table
        .iter()
        .filter(|(bit, _)| mask & bit != 0)
        .map(|&(_, name)| name)
        .collect()
}
