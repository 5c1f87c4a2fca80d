// rfc2217-rs/rfc2217/src/port/config.rs
//! Settings a port is created with, and the builder for them.

use crate::constants::*;
use crate::types::{Control, DataSize, Parity, StopSize};
use crate::{Error, Result};

/// Baud rate used until configured otherwise
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Signature sent to the server on startup
pub const DEFAULT_SIGNATURE: &str = "rfc2217";

/// Flow control in one direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlowMode {
    /// No flow control
    #[default]
    None,
    /// In-band XON/XOFF characters
    XonXoff,
    /// RTS/CTS lines
    Hardware,
}

/// Flow control for both directions. Outbound is client->device data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowControl {
    /// Device to client
    pub inbound: FlowMode,
    /// Client to device
    pub outbound: FlowMode,
}

impl FlowControl {
    /// No flow control either way.
    pub const NONE: Self = Self {
        inbound: FlowMode::None,
        outbound: FlowMode::None,
    };

    /// RTS/CTS both ways.
    pub const HARDWARE: Self = Self {
        inbound: FlowMode::Hardware,
        outbound: FlowMode::Hardware,
    };

    /// XON/XOFF both ways.
    pub const XON_XOFF: Self = Self {
        inbound: FlowMode::XonXoff,
        outbound: FlowMode::XonXoff,
    };

    /// SET-CONTROL value for the outbound setting.
    pub fn outbound_control(&self) -> Control {
        match self.outbound {
            FlowMode::None => Control::OutboundFlowNone,
            FlowMode::XonXoff => Control::OutboundFlowXonXoff,
            FlowMode::Hardware => Control::OutboundFlowHardware,
        }
    }

    /// SET-CONTROL value for the inbound setting.
    pub fn inbound_control(&self) -> Control {
        match self.inbound {
            FlowMode::None => Control::InboundFlowNone,
            FlowMode::XonXoff => Control::InboundFlowXonXoff,
            FlowMode::Hardware => Control::InboundFlowHardware,
        }
    }
}

/// Serial settings a port starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortConfig {
    /// Label used in log output
    pub name: String,
    /// Our SIGNATURE text; empty sends none
    pub signature: String,
    /// Bits per second
    pub baud_rate: u32,
    /// Bits per character
    pub data_size: DataSize,
    /// Parity mode
    pub parity: Parity,
    /// Stop bits
    pub stop_size: StopSize,
    /// Flow control per direction
    pub flow_control: FlowControl,
    /// DTR raised
    pub dtr: bool,
    /// RTS raised
    pub rts: bool,
}

impl Default for PortConfig {
    fn default() -> Self {
        Self {
            name: "rfc2217".to_string(),
            signature: DEFAULT_SIGNATURE.to_string(),
            baud_rate: DEFAULT_BAUD_RATE,
            data_size: DataSize::Eight,
            parity: Parity::None,
            stop_size: StopSize::One,
            flow_control: FlowControl::NONE,
            dtr: false,
            rts: false,
        }
    }
}

impl PortConfig {
    /// Builder starting from the defaults.
    pub fn builder() -> PortConfigBuilder {
        PortConfigBuilder::new()
    }

    /// Reject values that only make sense as a query to the server.
    pub fn validate(&self) -> Result<()> {
        validate_params(self.baud_rate, self.data_size, self.parity, self.stop_size)
    }
}

/// Check a baud/data/parity/stop combination the application wants to apply.
pub(crate) fn validate_params(
    baud_rate: u32,
    data_size: DataSize,
    parity: Parity,
    stop_size: StopSize,
) -> Result<()> {
    if baud_rate == BAUDRATE_REQUEST {
        return Err(Error::InvalidBaudRate(baud_rate));
    }
    if data_size == DataSize::Request {
        return Err(Error::InvalidSetting("data size REQUEST".into()));
    }
    if parity == Parity::Request {
        return Err(Error::InvalidSetting("parity REQUEST".into()));
    }
    if stop_size == StopSize::Request {
        return Err(Error::InvalidSetting("stop size REQUEST".into()));
    }
    Ok(())
}

/// Helper to construct a `PortConfig` starting from the defaults.
#[derive(Debug, Default)]
pub struct PortConfigBuilder {
    config: PortConfig,
}

impl PortConfigBuilder {
    /// Builder starting from the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Label used in log output.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Signature announced to the server; empty disables it.
    pub fn signature(mut self, signature: impl Into<String>) -> Self {
        self.config.signature = signature.into();
        self
    }

    /// Bits per second; 0 is rejected by `build`.
    pub fn baud_rate(mut self, baud_rate: u32) -> Self {
        self.config.baud_rate = baud_rate;
        self
    }

    /// Bits per character.
    pub fn data_size(mut self, data_size: DataSize) -> Self {
        self.config.data_size = data_size;
        self
    }

    /// Parity mode.
    pub fn parity(mut self, parity: Parity) -> Self {
        self.config.parity = parity;
        self
    }

    /// Stop bits.
    pub fn stop_size(mut self, stop_size: StopSize) -> Self {
        self.config.stop_size = stop_size;
        self
    }

    /// Flow control per direction.
    pub fn flow_control(mut self, flow_control: FlowControl) -> Self {
        self.config.flow_control = flow_control;
        self
    }

    /// Initial DTR level.
    pub fn dtr(mut self, on: bool) -> Self {
        self.config.dtr = on;
        self
    }

    /// Initial RTS level.
    pub fn rts(mut self, on: bool) -> Self {
        self.config.rts = on;
        self
    }

    /// Consume the builder, validating the serial parameters.
    pub fn build(self) -> Result<PortConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
