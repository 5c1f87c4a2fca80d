// rfc2217-rs/rfc2217/src/types.rs
//! Typed field values of COM-PORT-OPTION commands.

use derive_more::{Display, From, Into};

use crate::constants::*;
use crate::utils::bits::{LINESTATE_BITS, MODEMSTATE_BITS, decode_bits};

/// Direction of a command. Server commands carry `opcode + SERVER_OFFSET`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Client to server (access server)
    #[display(fmt = "client")]
    Client,
    /// Server to client
    #[display(fmt = "server")]
    Server,
}

impl Role {
    /// Offset added to the base opcode for this direction.
    pub const fn offset(self) -> u8 {
        match self {
            Role::Client => 0,
            Role::Server => SERVER_OFFSET,
        }
    }

    /// True for server-to-client commands.
    pub fn is_server(self) -> bool {
        self == Role::Server
    }
}

/// SET-DATASIZE field
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataSize {
    /// Ask for the current data size
    #[display(fmt = "REQUEST")]
    Request,
    /// 5 data bits
    #[display(fmt = "5")]
    Five,
    /// 6 data bits
    #[display(fmt = "6")]
    Six,
    /// 7 data bits
    #[display(fmt = "7")]
    Seven,
    /// 8 data bits
    #[display(fmt = "8")]
    Eight,
}

impl DataSize {
    /// Every legal value, in wire-code order.
    pub const ALL: [DataSize; 5] = [
        DataSize::Request,
        DataSize::Five,
        DataSize::Six,
        DataSize::Seven,
        DataSize::Eight,
    ];

    /// Value byte on the wire.
    pub const fn code(self) -> u8 {
        match self {
            DataSize::Request => DATASIZE_REQUEST,
            DataSize::Five => DATASIZE_5,
            DataSize::Six => DATASIZE_6,
            DataSize::Seven => DATASIZE_7,
            DataSize::Eight => DATASIZE_8,
        }
    }

    /// Look up a wire value; `None` if it is not in the RFC table.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }

    /// Number of data bits, `None` for the request placeholder.
    pub fn bits(self) -> Option<u8> {
        match self {
            DataSize::Request => None,
            other => Some(other.code()),
        }
    }
}

/// SET-PARITY field
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parity {
    /// Ask for the current parity
    #[display(fmt = "REQUEST")]
    Request,
    /// No parity bit
    #[display(fmt = "NONE")]
    None,
    /// Odd parity
    #[display(fmt = "ODD")]
    Odd,
    /// Even parity
    #[display(fmt = "EVEN")]
    Even,
    /// Parity bit always 1
    #[display(fmt = "MARK")]
    Mark,
    /// Parity bit always 0
    #[display(fmt = "SPACE")]
    Space,
}

impl Parity {
    /// Every legal value, in wire-code order.
    pub const ALL: [Parity; 6] = [
        Parity::Request,
        Parity::None,
        Parity::Odd,
        Parity::Even,
        Parity::Mark,
        Parity::Space,
    ];

    /// Value byte on the wire.
    pub const fn code(self) -> u8 {
        match self {
            Parity::Request => PARITY_REQUEST,
            Parity::None => PARITY_NONE,
            Parity::Odd => PARITY_ODD,
            Parity::Even => PARITY_EVEN,
            Parity::Mark => PARITY_MARK,
            Parity::Space => PARITY_SPACE,
        }
    }

    /// Look up a wire value; `None` if it is not in the RFC table.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }
}

/// SET-STOPSIZE field
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopSize {
    /// Ask for the current stop size
    #[display(fmt = "REQUEST")]
    Request,
    /// 1 stop bit
    #[display(fmt = "1")]
    One,
    /// 2 stop bits
    #[display(fmt = "2")]
    Two,
    /// 1.5 stop bits
    #[display(fmt = "1.5")]
    OnePointFive,
}

impl StopSize {
    /// Every legal value, in wire-code order.
    pub const ALL: [StopSize; 4] = [
        StopSize::Request,
        StopSize::One,
        StopSize::Two,
        StopSize::OnePointFive,
    ];

    /// Value byte on the wire.
    pub const fn code(self) -> u8 {
        match self {
            StopSize::Request => STOPSIZE_REQUEST,
            StopSize::One => STOPSIZE_1,
            StopSize::Two => STOPSIZE_2,
            StopSize::OnePointFive => STOPSIZE_1_5,
        }
    }

    /// Look up a wire value; `None` if it is not in the RFC table.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }
}

/// SET-CONTROL field
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Ask for the outbound flow setting
    #[display(fmt = "OUTBOUND_FLOW_REQUEST")]
    OutboundFlowRequest,
    /// No outbound flow control
    #[display(fmt = "OUTBOUND_FLOW_NONE")]
    OutboundFlowNone,
    /// XON/XOFF outbound flow control
    #[display(fmt = "OUTBOUND_FLOW_XON_XOFF")]
    OutboundFlowXonXoff,
    /// RTS/CTS outbound flow control
    #[display(fmt = "OUTBOUND_FLOW_HARDWARE")]
    OutboundFlowHardware,
    /// Ask for the break state
    #[display(fmt = "BREAK_REQUEST")]
    BreakRequest,
    /// Start a break condition
    #[display(fmt = "BREAK_ON")]
    BreakOn,
    /// End a break condition
    #[display(fmt = "BREAK_OFF")]
    BreakOff,
    /// Ask for the DTR state
    #[display(fmt = "DTR_REQUEST")]
    DtrRequest,
    /// Raise DTR
    #[display(fmt = "DTR_ON")]
    DtrOn,
    /// Drop DTR
    #[display(fmt = "DTR_OFF")]
    DtrOff,
    /// Ask for the RTS state
    #[display(fmt = "RTS_REQUEST")]
    RtsRequest,
    /// Raise RTS
    #[display(fmt = "RTS_ON")]
    RtsOn,
    /// Drop RTS
    #[display(fmt = "RTS_OFF")]
    RtsOff,
    /// Ask for the inbound flow setting
    #[display(fmt = "INBOUND_FLOW_REQUEST")]
    InboundFlowRequest,
    /// No inbound flow control
    #[display(fmt = "INBOUND_FLOW_NONE")]
    InboundFlowNone,
    /// XON/XOFF inbound flow control
    #[display(fmt = "INBOUND_FLOW_XON_XOFF")]
    InboundFlowXonXoff,
    /// RTS/CTS inbound flow control
    #[display(fmt = "INBOUND_FLOW_HARDWARE")]
    InboundFlowHardware,
    /// DCD outbound flow control
    #[display(fmt = "OUTBOUND_FLOW_DCD")]
    OutboundFlowDcd,
    /// DTR inbound flow control
    #[display(fmt = "INBOUND_FLOW_DTR")]
    InboundFlowDtr,
    /// DSR outbound flow control
    #[display(fmt = "OUTBOUND_FLOW_DSR")]
    OutboundFlowDsr,
}

impl Control {
    /// Every control value, indexed by its wire code.
    pub const ALL: [Control; 20] = [
        Control::OutboundFlowRequest,
        Control::OutboundFlowNone,
        Control::OutboundFlowXonXoff,
        Control::OutboundFlowHardware,
        Control::BreakRequest,
        Control::BreakOn,
        Control::BreakOff,
        Control::DtrRequest,
        Control::DtrOn,
        Control::DtrOff,
        Control::RtsRequest,
        Control::RtsOn,
        Control::RtsOff,
        Control::InboundFlowRequest,
        Control::InboundFlowNone,
        Control::InboundFlowXonXoff,
        Control::InboundFlowHardware,
        Control::OutboundFlowDcd,
        Control::InboundFlowDtr,
        Control::OutboundFlowDsr,
    ];

    /// Value byte on the wire.
    pub const fn code(self) -> u8 {
        match self {
            Control::OutboundFlowRequest => CONTROL_OUTBOUND_FLOW_REQUEST,
            Control::OutboundFlowNone => CONTROL_OUTBOUND_FLOW_NONE,
            Control::OutboundFlowXonXoff => CONTROL_OUTBOUND_FLOW_XON_XOFF,
            Control::OutboundFlowHardware => CONTROL_OUTBOUND_FLOW_HARDWARE,
            Control::BreakRequest => CONTROL_BREAK_REQUEST,
            Control::BreakOn => CONTROL_BREAK_ON,
            Control::BreakOff => CONTROL_BREAK_OFF,
            Control::DtrRequest => CONTROL_DTR_REQUEST,
            Control::DtrOn => CONTROL_DTR_ON,
            Control::DtrOff => CONTROL_DTR_OFF,
            Control::RtsRequest => CONTROL_RTS_REQUEST,
            Control::RtsOn => CONTROL_RTS_ON,
            Control::RtsOff => CONTROL_RTS_OFF,
            Control::InboundFlowRequest => CONTROL_INBOUND_FLOW_REQUEST,
            Control::InboundFlowNone => CONTROL_INBOUND_FLOW_NONE,
            Control::InboundFlowXonXoff => CONTROL_INBOUND_FLOW_XON_XOFF,
            Control::InboundFlowHardware => CONTROL_INBOUND_FLOW_HARDWARE,
            Control::OutboundFlowDcd => CONTROL_OUTBOUND_FLOW_DCD,
            Control::InboundFlowDtr => CONTROL_INBOUND_FLOW_DTR,
            Control::OutboundFlowDsr => CONTROL_OUTBOUND_FLOW_DSR,
        }
    }

    /// Look up a wire value; `None` if it is not in the RFC table.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }
}

/// PURGE-DATA field
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Purge {
    /// Discard the server receive buffer
    #[display(fmt = "RECEIVE")]
    Receive,
    /// Discard the server transmit buffer
    #[display(fmt = "TRANSMIT")]
    Transmit,
    /// Discard both buffers
    #[display(fmt = "BOTH")]
    Both,
}

impl Purge {
    /// Every legal value, in wire-code order.
    pub const ALL: [Purge; 3] = [Purge::Receive, Purge::Transmit, Purge::Both];

    /// Value byte on the wire.
    pub const fn code(self) -> u8 {
        match self {
            Purge::Receive => PURGE_RECEIVE,
            Purge::Transmit => PURGE_TRANSMIT,
            Purge::Both => PURGE_BOTH,
        }
    }

    /// Look up a wire value; `None` if it is not in the RFC table.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }
}

/// Line-state bitmask (NOTIFY-LINESTATE, SET-LINESTATE-MASK).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, From, Into)]
pub struct LineState(u8);

impl LineState {
    /// Wrap a raw mask.
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw mask.
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Whether any bit of `bit` is set.
    pub fn contains(&self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    /// Names of the set bits, most significant first.
    pub fn flags(&self) -> Vec<&'static str> {
        decode_bits(self.0, LINESTATE_BITS)
    }
}

impl std::fmt::Display for LineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#04x} [{}]", self.0, self.flags().join(", "))
    }
}

/// Modem-state bitmask (NOTIFY-MODEMSTATE, SET-MODEMSTATE-MASK).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, From, Into)]
pub struct ModemState(u8);

impl ModemState {
    /// Wrap a raw mask.
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw mask.
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Whether any bit of `bit` is set.
    pub fn contains(&self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    /// Names of the set bits, most significant first.
    pub fn flags(&self) -> Vec<&'static str> {
        decode_bits(self.0, MODEMSTATE_BITS)
    }
}

impl std::fmt::Display for ModemState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#04x} [{}]", self.0, self.flags().join(", "))
    }
}
