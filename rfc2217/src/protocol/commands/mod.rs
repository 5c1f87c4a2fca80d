// rfc2217-rs/rfc2217/src/protocol/commands/mod.rs

/// SET-BAUDRATE payload.
pub mod baud_rate;
pub mod control;
pub mod serial;
/// SIGNATURE payload.
pub mod signature;
pub mod state;

pub use baud_rate::{decode_baud_rate, encode_baud_rate};
pub use control::{decode_control, decode_purge};
pub use serial::{decode_data_size, decode_parity, decode_stop_size};
pub use signature::{decode_signature, encode_signature, signature_bytes, signature_text};
pub use state::{decode_line_state, decode_modem_state};

use std::fmt;

use crate::constants::{BAUDRATE_REQUEST, COM_PORT_OPTION};
use crate::protocol::opcode::Opcode;
use crate::protocol::parser;
use crate::types::{Control, DataSize, LineState, ModemState, Parity, Purge, Role, StopSize};
use crate::Result;

/// Payload of a COM-PORT-OPTION command, one variant per RFC 2217 command.
/// New commands are added here together with an `Opcode` entry and a
/// `CommandVisitor` method.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    /// Empty signature requests the peer's signature.
    Signature(Vec<u8>),
    /// 0 requests the current rate.
    BaudRate(u32),
    /// Bits per character.
    DataSize(DataSize),
    /// Parity mode.
    Parity(Parity),
    /// Stop bits.
    StopSize(StopSize),
    /// Flow control, break, DTR or RTS change.
    Control(Control),
    /// Current line state, server only.
    NotifyLineState(LineState),
    /// Current modem state, server only.
    NotifyModemState(ModemState),
    /// Peer asks us to stop sending.
    FlowControlSuspend,
    /// Peer allows sending again.
    FlowControlResume,
    /// Line bits the client wants reported.
    LineStateMask(LineState),
    /// Modem bits the client wants reported.
    ModemStateMask(ModemState),
    /// Discard buffered data.
    PurgeData(Purge),
}

impl Command {
    /// The command kind this payload belongs to.
    pub fn opcode(&self) -> Opcode {
        match self {
            Self::Signature(_) => Opcode::Signature,
            Self::BaudRate(_) => Opcode::SetBaudRate,
            Self::DataSize(_) => Opcode::SetDataSize,
            Self::Parity(_) => Opcode::SetParity,
            Self::StopSize(_) => Opcode::SetStopSize,
            Self::Control(_) => Opcode::SetControl,
            Self::NotifyLineState(_) => Opcode::NotifyLineState,
            Self::NotifyModemState(_) => Opcode::NotifyModemState,
            Self::FlowControlSuspend => Opcode::FlowControlSuspend,
            Self::FlowControlResume => Opcode::FlowControlResume,
            Self::LineStateMask(_) => Opcode::SetLineStateMask,
            Self::ModemStateMask(_) => Opcode::SetModemStateMask,
            Self::PurgeData(_) => Opcode::PurgeData,
        }
    }

    /// Decode the payload bytes of `op`. The caller has already checked the
    /// payload length against `op.payload_len()`.
    pub fn decode_payload(op: Opcode, payload: &[u8]) -> Result<Self> {
        Ok(match op {
            Opcode::Signature => Self::Signature(decode_signature(payload)),
            Opcode::SetBaudRate => Self::BaudRate(decode_baud_rate(payload)?),
            Opcode::SetDataSize => Self::DataSize(decode_data_size(payload)?),
            Opcode::SetParity => Self::Parity(decode_parity(payload)?),
            Opcode::SetStopSize => Self::StopSize(decode_stop_size(payload)?),
            Opcode::SetControl => Self::Control(decode_control(payload)?),
            Opcode::NotifyLineState => Self::NotifyLineState(decode_line_state(op, payload)?),
            Opcode::NotifyModemState => Self::NotifyModemState(decode_modem_state(op, payload)?),
            Opcode::FlowControlSuspend => Self::FlowControlSuspend,
            Opcode::FlowControlResume => Self::FlowControlResume,
            Opcode::SetLineStateMask => Self::LineStateMask(decode_line_state(op, payload)?),
            Opcode::SetModemStateMask => Self::ModemStateMask(decode_modem_state(op, payload)?),
            Opcode::PurgeData => Self::PurgeData(decode_purge(payload)?),
        })
    }

    /// Append the payload bytes (everything after the opcode) to `buf`.
    pub fn encode_payload(&self, buf: &mut Vec<u8>) {
        match self {
            Self::Signature(signature) => encode_signature(signature, buf),
            Self::BaudRate(rate) => encode_baud_rate(*rate, buf),
            Self::DataSize(v) => buf.push(v.code()),
            Self::Parity(v) => buf.push(v.code()),
            Self::StopSize(v) => buf.push(v.code()),
            Self::Control(v) => buf.push(v.code()),
            Self::NotifyLineState(v) | Self::LineStateMask(v) => buf.push(v.bits()),
            Self::NotifyModemState(v) | Self::ModemStateMask(v) => buf.push(v.bits()),
            Self::FlowControlSuspend | Self::FlowControlResume => {}
            Self::PurgeData(v) => buf.push(v.code()),
        }
    }

    /// Field rendering used by `ComPortCommand::describe`, `None` for
    /// commands without a field.
    fn describe_value(&self) -> Option<String> {
        match self {
            Self::Signature(s) if s.is_empty() => Some("REQUEST".to_string()),
            Self::Signature(s) => Some(format!("\"{}\"", signature_text(s))),
            Self::BaudRate(BAUDRATE_REQUEST) => Some("REQUEST".to_string()),
            Self::BaudRate(rate) => Some(rate.to_string()),
            Self::DataSize(v) => Some(v.to_string()),
            Self::Parity(v) => Some(v.to_string()),
            Self::StopSize(v) => Some(v.to_string()),
            Self::Control(v) => Some(v.to_string()),
            Self::NotifyLineState(v) | Self::LineStateMask(v) => Some(v.to_string()),
            Self::NotifyModemState(v) | Self::ModemStateMask(v) => Some(v.to_string()),
            Self::FlowControlSuspend | Self::FlowControlResume => None,
            Self::PurgeData(v) => Some(v.to_string()),
        }
    }
}

/// A COM-PORT-OPTION command together with the direction it travels in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComPortCommand {
    role: Role,
    command: Command,
}

impl ComPortCommand {
    /// Pair a command with its direction.
    pub fn new(role: Role, command: Command) -> Self {
        Self { role, command }
    }

    /// Client->server command.
    pub fn client(command: Command) -> Self {
        Self::new(Role::Client, command)
    }

    /// Server->client command.
    pub fn server(command: Command) -> Self {
        Self::new(Role::Server, command)
    }

    /// Decode one reassembled COM-PORT-OPTION subnegotiation
    /// (`[44, opcode, payload...]`).
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        parser::ensure_header(bytes)?;
        let (op, role) = parser::resolve_opcode(bytes[1])?;
        let payload = &bytes[2..];
        parser::check_payload_len(op, payload)?;
        let command = Command::decode_payload(op, payload)?;
        Ok(Self { role, command })
    }

    /// Wire bytes: `[44, opcode, payload...]`.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(2 + 4);
        buf.push(COM_PORT_OPTION);
        buf.push(self.option_code());
        self.command.encode_payload(&mut buf);
        buf
    }

    /// Direction the command travels in.
    pub fn role(&self) -> Role {
        self.role
    }

    /// True when sent by the server.
    pub fn is_server(&self) -> bool {
        self.role.is_server()
    }

    /// The payload value.
    pub fn command(&self) -> &Command {
        &self.command
    }

    /// Drop the role and keep the payload value.
    pub fn into_command(self) -> Command {
        self.command
    }

    /// Command kind.
    pub fn opcode(&self) -> Opcode {
        self.command.opcode()
    }

    /// Opcode byte as sent, offset for server commands.
    pub fn option_code(&self) -> u8 {
        self.opcode().code(self.role)
    }

    /// RFC command name, e.g. `SET-PARITY`.
    pub fn name(&self) -> &'static str {
        self.opcode().name()
    }

    /// Payload bytes only.
    pub fn payload(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.command.encode_payload(&mut buf);
        buf
    }

    /// Human-readable rendering, e.g. `SET-PARITY EVEN`.
    pub fn describe(&self) -> String {
        match self.command.describe_value() {
            Some(value) => format!("{} {}", self.name(), value),
            None => self.name().to_string(),
        }
    }
}

impl fmt::Display for ComPortCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn decode_data_size_client() {
        let cmd = ComPortCommand::decode(&[44, 2, 8]).unwrap();
        assert_eq!(cmd.role(), Role::Client);
        assert_eq!(cmd.command(), &Command::DataSize(DataSize::Eight));
        assert_eq!(cmd.describe(), "SET-DATASIZE 8");
    }

    #[test]
    fn decode_parity_server() {
        let cmd = ComPortCommand::decode(&[44, 103, 2]).unwrap();
        assert!(cmd.is_server());
        assert_eq!(cmd.command(), &Command::Parity(Parity::Odd));
        assert_eq!(cmd.option_code(), 103);
    }

    #[test]
    fn encode_baud_rate_server() {
        let cmd = ComPortCommand::server(Command::BaudRate(9600));
        assert_eq!(cmd.encode(), vec![44, 101, 0x00, 0x00, 0x25, 0x80]);
        assert_eq!(cmd.payload(), vec![0x00, 0x00, 0x25, 0x80]);
    }

    #[test]
    fn describe_renders_every_shape() {
        let cases = [
            (Command::Signature(Vec::new()), "SIGNATURE REQUEST"),
            (Command::Signature(b"ser2net".to_vec()), "SIGNATURE \"ser2net\""),
            (Command::BaudRate(0), "SET-BAUDRATE REQUEST"),
            (Command::BaudRate(115_200), "SET-BAUDRATE 115200"),
            (Command::Parity(Parity::Even), "SET-PARITY EVEN"),
            (Command::StopSize(StopSize::OnePointFive), "SET-STOPSIZE 1.5"),
            (Command::Control(Control::BreakOn), "SET-CONTROL BREAK_ON"),
            (
                Command::NotifyLineState(LineState::new(0x02)),
                "NOTIFY-LINESTATE 0x02 [OVERRUN_ERROR]",
            ),
            (Command::FlowControlSuspend, "FLOWCONTROL-SUSPEND"),
            (Command::PurgeData(Purge::Receive), "PURGE-DATA RECEIVE"),
        ];
        for (command, expected) in cases {
            assert_eq!(ComPortCommand::client(command).describe(), expected);
        }
    }

    #[test]
    fn flow_control_has_empty_payload() {
        let cmd = ComPortCommand::decode(&[44, 108]).unwrap();
        assert_eq!(cmd.command(), &Command::FlowControlSuspend);
        assert!(cmd.is_server());
        assert!(matches!(
            ComPortCommand::decode(&[44, 9, 0]),
            Err(Error::PayloadLengthOutOfRange {
                command: "FLOWCONTROL-RESUME",
                ..
            })
        ));
    }

    #[test]
    fn length_checked_before_value() {
        // Two bytes of an illegal value still report the length problem.
        match ComPortCommand::decode(&[44, 3, 9, 9]) {
            Err(Error::PayloadLengthOutOfRange {
                command: "SET-PARITY",
                min: 1,
                max: 1,
                actual: 2,
            }) => {}
            other => panic!("expected PayloadLengthOutOfRange, got {:?}", other),
        }
    }
}
