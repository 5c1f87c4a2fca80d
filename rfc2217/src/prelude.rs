// rfc2217-rs/rfc2217/src/prelude.rs

pub use crate::port::{
    ComPort, FlowControl, FlowMode, PortConfig, PortEvent, PortEventKind, PortState,
};
pub use crate::protocol::{ComPortCommand, Command, CommandVisitor, Opcode};
pub use crate::telnet::{ComPortOptionHandler, OptionHandler, TransmitBinaryOptionHandler};
pub use crate::transport::Transport;
pub use crate::{
    Control, DataSize, Error, LineState, ModemState, Parity, Purge, Result, Role, StopSize,
};

pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, decode_bits};
