// rfc2217-rs/rfc2217/src/port/events.rs
//! Conditions an application listens for and the events they raise.

use crate::constants::*;

/// Conditions an application can ask to be notified about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortEventKind {
    /// Serial data arrived; never requested from the server
    DataAvailable,
    /// Transmit shift register empty
    OutputEmpty,
    /// Break detected
    BreakInterrupt,
    /// Framing error
    FramingError,
    /// Parity error
    ParityError,
    /// Overrun error
    OverrunError,
    /// DCD changed
    CarrierDetect,
    /// RI changed
    RingIndicator,
    /// DSR changed
    Dsr,
    /// CTS changed
    Cts,
}

/// Where a condition is reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StateBit {
    Line(u8),
    Modem(u8),
}

impl PortEventKind {
    pub(crate) fn state_bit(self) -> StateBit {
        match self {
            Self::DataAvailable => StateBit::Line(LINESTATE_DATA_READY),
            Self::OutputEmpty => StateBit::Line(LINESTATE_TRANSFER_SHIFT_REGISTER_EMPTY),
            Self::BreakInterrupt => StateBit::Line(LINESTATE_BREAK_DETECT),
            Self::FramingError => StateBit::Line(LINESTATE_FRAMING_ERROR),
            Self::ParityError => StateBit::Line(LINESTATE_PARITY_ERROR),
            Self::OverrunError => StateBit::Line(LINESTATE_OVERRUN_ERROR),
            Self::CarrierDetect => StateBit::Modem(MODEMSTATE_CARRIER_DETECT),
            Self::RingIndicator => StateBit::Modem(MODEMSTATE_RING_INDICATOR),
            Self::Dsr => StateBit::Modem(MODEMSTATE_DSR),
            Self::Cts => StateBit::Modem(MODEMSTATE_CTS),
        }
    }
}

/// Notification produced from a server NOTIFY-LINESTATE / NOTIFY-MODEMSTATE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortEvent {
    /// Serial data arrived on the connection.
    DataAvailable,
    /// The transmit shift register drained.
    OutputEmpty,
    /// Break detected.
    BreakInterrupt,
    /// Framing error.
    FramingError,
    /// Parity error.
    ParityError,
    /// Overrun error.
    OverrunError,
    /// New DCD level.
    CarrierDetect(bool),
    /// New RI level.
    RingIndicator(bool),
    /// New DSR level.
    Dsr(bool),
    /// New CTS level.
    Cts(bool),
}

impl PortEvent {
    /// The condition this event reports.
    pub fn kind(&self) -> PortEventKind {
        match self {
            Self::DataAvailable => PortEventKind::DataAvailable,
            Self::OutputEmpty => PortEventKind::OutputEmpty,
            Self::BreakInterrupt => PortEventKind::BreakInterrupt,
            Self::FramingError => PortEventKind::FramingError,
            Self::ParityError => PortEventKind::ParityError,
            Self::OverrunError => PortEventKind::OverrunError,
            Self::CarrierDetect(_) => PortEventKind::CarrierDetect,
            Self::RingIndicator(_) => PortEventKind::RingIndicator,
            Self::Dsr(_) => PortEventKind::Dsr,
            Self::Cts(_) => PortEventKind::Cts,
        }
    }
}

/// Line-state conditions in the order they are reported.
pub(crate) const LINE_EVENTS: [(u8, PortEvent); 5] = [
    (LINESTATE_TRANSFER_SHIFT_REGISTER_EMPTY, PortEvent::OutputEmpty),
    (LINESTATE_BREAK_DETECT, PortEvent::BreakInterrupt),
    (LINESTATE_FRAMING_ERROR, PortEvent::FramingError),
    (LINESTATE_PARITY_ERROR, PortEvent::ParityError),
    (LINESTATE_OVERRUN_ERROR, PortEvent::OverrunError),
];

/// Modem-state lines in the order they are reported.
pub(crate) const MODEM_EVENTS: [(u8, fn(bool) -> PortEvent); 4] = [
    (MODEMSTATE_CARRIER_DETECT, PortEvent::CarrierDetect),
    (MODEMSTATE_RING_INDICATOR, PortEvent::RingIndicator),
    (MODEMSTATE_DSR, PortEvent::Dsr),
    (MODEMSTATE_CTS, PortEvent::Cts),
];
