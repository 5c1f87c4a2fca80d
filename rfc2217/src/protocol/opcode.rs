// rfc2217-rs/rfc2217/src/protocol/opcode.rs

use crate::constants::*;
use crate::types::Role;

/// Unbounded payload length (SIGNATURE text).
pub const UNBOUNDED: usize = usize::MAX;

/// The closed set of COM-PORT-OPTION commands, keyed by client opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// SIGNATURE
    Signature,
    /// SET-BAUDRATE
    SetBaudRate,
    /// SET-DATASIZE
    SetDataSize,
    /// SET-PARITY
    SetParity,
    /// SET-STOPSIZE
    SetStopSize,
    /// SET-CONTROL
    SetControl,
    /// NOTIFY-LINESTATE
    NotifyLineState,
    /// NOTIFY-MODEMSTATE
    NotifyModemState,
    /// FLOWCONTROL-SUSPEND
    FlowControlSuspend,
    /// FLOWCONTROL-RESUME
    FlowControlResume,
    /// SET-LINESTATE-MASK
    SetLineStateMask,
    /// SET-MODEMSTATE-MASK
    SetModemStateMask,
    /// PURGE-DATA
    PurgeData,
}

impl Opcode {
    /// Opcode table used by the decoder.
    pub const ALL: [Opcode; 13] = [
        Opcode::Signature,
        Opcode::SetBaudRate,
        Opcode::SetDataSize,
        Opcode::SetParity,
        Opcode::SetStopSize,
        Opcode::SetControl,
        Opcode::NotifyLineState,
        Opcode::NotifyModemState,
        Opcode::FlowControlSuspend,
        Opcode::FlowControlResume,
        Opcode::SetLineStateMask,
        Opcode::SetModemStateMask,
        Opcode::PurgeData,
    ];

    /// Client-direction opcode.
    pub const fn base(self) -> u8 {
        match self {
            Opcode::Signature => SIGNATURE,
            Opcode::SetBaudRate => SET_BAUDRATE,
            Opcode::SetDataSize => SET_DATASIZE,
            Opcode::SetParity => SET_PARITY,
            Opcode::SetStopSize => SET_STOPSIZE,
            Opcode::SetControl => SET_CONTROL,
            Opcode::NotifyLineState => NOTIFY_LINESTATE,
            Opcode::NotifyModemState => NOTIFY_MODEMSTATE,
            Opcode::FlowControlSuspend => FLOWCONTROL_SUSPEND,
            Opcode::FlowControlResume => FLOWCONTROL_RESUME,
            Opcode::SetLineStateMask => SET_LINESTATE_MASK,
            Opcode::SetModemStateMask => SET_MODEMSTATE_MASK,
            Opcode::PurgeData => PURGE_DATA,
        }
    }

    /// Opcode as it appears on the wire for `role`.
    pub const fn code(self, role: Role) -> u8 {
        self.base() + role.offset()
    }

    /// RFC 2217 command name, for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Opcode::Signature => "SIGNATURE",
            Opcode::SetBaudRate => "SET-BAUDRATE",
            Opcode::SetDataSize => "SET-DATASIZE",
            Opcode::SetParity => "SET-PARITY",
            Opcode::SetStopSize => "SET-STOPSIZE",
            Opcode::SetControl => "SET-CONTROL",
            Opcode::NotifyLineState => "NOTIFY-LINESTATE",
            Opcode::NotifyModemState => "NOTIFY-MODEMSTATE",
            Opcode::FlowControlSuspend => "FLOWCONTROL-SUSPEND",
            Opcode::FlowControlResume => "FLOWCONTROL-RESUME",
            Opcode::SetLineStateMask => "SET-LINESTATE-MASK",
            Opcode::SetModemStateMask => "SET-MODEMSTATE-MASK",
            Opcode::PurgeData => "PURGE-DATA",
        }
    }

    /// Inclusive `(min, max)` payload length.
    pub const fn payload_len(self) -> (usize, usize) {
        match self {
            Opcode::Signature => (0, UNBOUNDED),
            Opcode::SetBaudRate => (4, 4),
            Opcode::FlowControlSuspend | Opcode::FlowControlResume => (0, 0),
            Opcode::SetDataSize
            | Opcode::SetParity
            | Opcode::SetStopSize
            | Opcode::SetControl
            | Opcode::NotifyLineState
            | Opcode::NotifyModemState
            | Opcode::SetLineStateMask
            | Opcode::SetModemStateMask
            | Opcode::PurgeData => (1, 1),
        }
    }

    /// Look up a client-direction opcode.
    pub fn from_base(base: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.base() == base)
    }

    /// Resolve a wire opcode into the command and the role that sent it.
    pub fn resolve(code: u8) -> Option<(Self, Role)> {
        if let Some(op) = Self::from_base(code) {
            return Some((op, Role::Client));
        }
        code.checked_sub(SERVER_OFFSET)
            .and_then(Self::from_base)
            .map(|op| (op, Role::Server))
    }
}
