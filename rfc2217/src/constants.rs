// rfc2217-rs/rfc2217/src/constants.rs
//! Fixed protocol vocabulary of RFC 2217 (and the TELNET option numbers it
//! rides on).

/// TELNET TRANSMIT-BINARY option number (RFC 856)
pub const TRANSMIT_BINARY: u8 = 0;

/// TELNET COM-PORT-OPTION option number (RFC 2217)
pub const COM_PORT_OPTION: u8 = 44;

/// Added to a client->server opcode to obtain the server->client opcode
pub const SERVER_OFFSET: u8 = 100;

/// Option byte + opcode byte
pub const HEADER_LEN: usize = 2;

// Command opcodes (client direction)
/// SIGNATURE: exchange of free-form implementation names
pub const SIGNATURE: u8 = 0;
/// SET-BAUDRATE: 4-byte rate in network order
pub const SET_BAUDRATE: u8 = 1;
/// SET-DATASIZE: bits per character
pub const SET_DATASIZE: u8 = 2;
/// SET-PARITY
pub const SET_PARITY: u8 = 3;
/// SET-STOPSIZE
pub const SET_STOPSIZE: u8 = 4;
/// SET-CONTROL: flow control, break, DTR and RTS
pub const SET_CONTROL: u8 = 5;
/// NOTIFY-LINESTATE, sent by the server only
pub const NOTIFY_LINESTATE: u8 = 6;
/// NOTIFY-MODEMSTATE, sent by the server only
pub const NOTIFY_MODEMSTATE: u8 = 7;
/// FLOWCONTROL-SUSPEND: stop sending data
pub const FLOWCONTROL_SUSPEND: u8 = 8;
/// FLOWCONTROL-RESUME: sending may continue
pub const FLOWCONTROL_RESUME: u8 = 9;
/// SET-LINESTATE-MASK: line bits the client wants reported
pub const SET_LINESTATE_MASK: u8 = 10;
/// SET-MODEMSTATE-MASK: modem bits the client wants reported
pub const SET_MODEMSTATE_MASK: u8 = 11;
/// PURGE-DATA: discard buffered data
pub const PURGE_DATA: u8 = 12;

/// SET-BAUDRATE value asking the peer for its current rate
pub const BAUDRATE_REQUEST: u32 = 0;

// SET-DATASIZE values
/// Ask for the current data size
pub const DATASIZE_REQUEST: u8 = 0;
/// 5 data bits
pub const DATASIZE_5: u8 = 5;
/// 6 data bits
pub const DATASIZE_6: u8 = 6;
/// 7 data bits
pub const DATASIZE_7: u8 = 7;
/// 8 data bits
pub const DATASIZE_8: u8 = 8;

// SET-PARITY values
/// Ask for the current parity
pub const PARITY_REQUEST: u8 = 0;
/// No parity bit
pub const PARITY_NONE: u8 = 1;
/// Odd parity
pub const PARITY_ODD: u8 = 2;
/// Even parity
pub const PARITY_EVEN: u8 = 3;
/// Parity bit always 1
pub const PARITY_MARK: u8 = 4;
/// Parity bit always 0
pub const PARITY_SPACE: u8 = 5;

// SET-STOPSIZE values
/// Ask for the current stop size
pub const STOPSIZE_REQUEST: u8 = 0;
/// 1 stop bit
pub const STOPSIZE_1: u8 = 1;
/// 2 stop bits
pub const STOPSIZE_2: u8 = 2;
/// 1.5 stop bits
pub const STOPSIZE_1_5: u8 = 3;

// SET-CONTROL values
/// Ask for the outbound flow setting
pub const CONTROL_OUTBOUND_FLOW_REQUEST: u8 = 0;
/// No outbound flow control
pub const CONTROL_OUTBOUND_FLOW_NONE: u8 = 1;
/// XON/XOFF outbound flow control
pub const CONTROL_OUTBOUND_FLOW_XON_XOFF: u8 = 2;
/// RTS/CTS outbound flow control
pub const CONTROL_OUTBOUND_FLOW_HARDWARE: u8 = 3;
/// Ask for the break state
pub const CONTROL_BREAK_REQUEST: u8 = 4;
/// Start a break condition
pub const CONTROL_BREAK_ON: u8 = 5;
/// End a break condition
pub const CONTROL_BREAK_OFF: u8 = 6;
/// Ask for the DTR state
pub const CONTROL_DTR_REQUEST: u8 = 7;
/// Raise DTR
pub const CONTROL_DTR_ON: u8 = 8;
/// Drop DTR
pub const CONTROL_DTR_OFF: u8 = 9;
/// Ask for the RTS state
pub const CONTROL_RTS_REQUEST: u8 = 10;
/// Raise RTS
pub const CONTROL_RTS_ON: u8 = 11;
/// Drop RTS
pub const CONTROL_RTS_OFF: u8 = 12;
/// Ask for the inbound flow setting
pub const CONTROL_INBOUND_FLOW_REQUEST: u8 = 13;
/// No inbound flow control
pub const CONTROL_INBOUND_FLOW_NONE: u8 = 14;
/// XON/XOFF inbound flow control
pub const CONTROL_INBOUND_FLOW_XON_XOFF: u8 = 15;
/// RTS/CTS inbound flow control
pub const CONTROL_INBOUND_FLOW_HARDWARE: u8 = 16;
/// DCD outbound flow control
pub const CONTROL_OUTBOUND_FLOW_DCD: u8 = 17;
/// DTR inbound flow control
pub const CONTROL_INBOUND_FLOW_DTR: u8 = 18;
/// DSR outbound flow control
pub const CONTROL_OUTBOUND_FLOW_DSR: u8 = 19;

// NOTIFY-LINESTATE / SET-LINESTATE-MASK bits
/// Time-out error
pub const LINESTATE_TIME_OUT: u8 = 0x80;
/// Transmit shift register empty
pub const LINESTATE_TRANSFER_SHIFT_REGISTER_EMPTY: u8 = 0x40;
/// Transmit holding register empty
pub const LINESTATE_TRANSFER_HOLDING_REGISTER_EMPTY: u8 = 0x20;
/// Break detected
pub const LINESTATE_BREAK_DETECT: u8 = 0x10;
/// Framing error
pub const LINESTATE_FRAMING_ERROR: u8 = 0x08;
/// Parity error
pub const LINESTATE_PARITY_ERROR: u8 = 0x04;
/// Overrun error
pub const LINESTATE_OVERRUN_ERROR: u8 = 0x02;
/// Data ready
pub const LINESTATE_DATA_READY: u8 = 0x01;

// NOTIFY-MODEMSTATE / SET-MODEMSTATE-MASK bits
/// Carrier detect (DCD) line
pub const MODEMSTATE_CARRIER_DETECT: u8 = 0x80;
/// Ring indicator line
pub const MODEMSTATE_RING_INDICATOR: u8 = 0x40;
/// Data set ready line
pub const MODEMSTATE_DSR: u8 = 0x20;
/// Clear to send line
pub const MODEMSTATE_CTS: u8 = 0x10;
/// DCD changed
pub const MODEMSTATE_DELTA_CARRIER_DETECT: u8 = 0x08;
/// Ring indicator went low
pub const MODEMSTATE_TRAILING_EDGE_RING_DETECTOR: u8 = 0x04;
/// DSR changed
pub const MODEMSTATE_DELTA_DSR: u8 = 0x02;
/// CTS changed
pub const MODEMSTATE_DELTA_CTS: u8 = 0x01;

// PURGE-DATA values
/// Discard the server receive buffer
pub const PURGE_RECEIVE: u8 = 1;
/// Discard the server transmit buffer
pub const PURGE_TRANSMIT: u8 = 2;
/// Discard both buffers
pub const PURGE_BOTH: u8 = 3;
