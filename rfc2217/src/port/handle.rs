// rfc2217-rs/rfc2217/src/port/handle.rs
//! `ComPort`: the client-side view of a remote serial port.

use crate::constants::*;
use crate::port::config::{FlowControl, PortConfig, validate_params};
use crate::port::events::{PortEventKind, StateBit};
use crate::port::incoming::ServerUpdate;
use crate::port::PortEvent;
use crate::protocol::{Command, ComPortCommand, codec};
use crate::protocol::commands::{signature_bytes, signature_text};
use crate::transport::Transport;
use crate::types::{Control, DataSize, LineState, ModemState, Parity, Purge, StopSize};
use crate::{Error, Result};

/// Modem lines the server always reports, whether or not anyone listens.
const MODEM_BASE_MASK: u8 =
    MODEMSTATE_CARRIER_DETECT | MODEMSTATE_RING_INDICATOR | MODEMSTATE_DSR | MODEMSTATE_CTS;

fn line_mask_for(notify: u8) -> LineState {
    LineState::new(notify & !LINESTATE_DATA_READY)
}

fn modem_mask_for(notify: u8) -> ModemState {
    ModemState::new(notify | MODEM_BASE_MASK)
}

/// Lifecycle of a `ComPort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortState {
    /// Settings are recorded locally only.
    Initial,
    /// COM-PORT-OPTION is active; changes are sent to the server.
    Established,
    /// No further operations are accepted.
    Closed,
}

/// A serial port on the far side of an RFC 2217 connection.
pub struct ComPort<T: Transport> {
    transport: T,
    config: PortConfig,
    state: PortState,
    peer_signature: Option<Vec<u8>>,
    line_notify: u8,
    modem_notify: u8,
    line_state: LineState,
    modem_state: ModemState,
}

impl<T: Transport> ComPort<T> {
    /// Create a port that will apply `config` once established.
    pub fn new(config: PortConfig, transport: T) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            transport,
            config,
            state: PortState::Initial,
            peer_signature: None,
            line_notify: 0,
            modem_notify: 0,
            line_state: LineState::default(),
            modem_state: ModemState::default(),
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PortState {
        self.state
    }

    /// True once the startup sequence was sent.
    pub fn is_established(&self) -> bool {
        self.state == PortState::Established
    }

    /// Settings as last applied by us or reported by the server.
    pub fn config(&self) -> &PortConfig {
        &self.config
    }

    /// Signature reported by the server, if it sent one.
    pub fn peer_signature(&self) -> Option<&[u8]> {
        self.peer_signature.as_deref()
    }

    /// Server signature decoded as ISO-8859-1.
    pub fn peer_signature_text(&self) -> Option<String> {
        self.peer_signature.as_deref().map(signature_text)
    }

    /// Mask sent with SET-LINESTATE-MASK. DATA_READY is never requested.
    pub fn line_state_mask(&self) -> LineState {
        line_mask_for(self.line_notify)
    }

    /// Mask sent with SET-MODEMSTATE-MASK.
    pub fn modem_state_mask(&self) -> ModemState {
        modem_mask_for(self.modem_notify)
    }

    /// Last NOTIFY-LINESTATE value.
    pub fn line_state(&self) -> LineState {
        self.line_state
    }

    /// Last NOTIFY-MODEMSTATE value.
    pub fn modem_state(&self) -> ModemState {
        self.modem_state
    }

    /// DCD level from the last modem notification.
    pub fn is_cd(&self) -> bool {
        self.modem_state.contains(MODEMSTATE_CARRIER_DETECT)
    }

    /// RI level from the last modem notification.
    pub fn is_ri(&self) -> bool {
        self.modem_state.contains(MODEMSTATE_RING_INDICATOR)
    }

    /// DSR level from the last modem notification.
    pub fn is_dsr(&self) -> bool {
        self.modem_state.contains(MODEMSTATE_DSR)
    }

    /// CTS level from the last modem notification.
    pub fn is_cts(&self) -> bool {
        self.modem_state.contains(MODEMSTATE_CTS)
    }

    /// Whether the application listens for `kind`.
    pub fn notifies(&self, kind: PortEventKind) -> bool {
        match kind.state_bit() {
            StateBit::Line(bit) => self.line_notify & bit != 0,
            StateBit::Modem(bit) => self.modem_notify & bit != 0,
        }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The underlying transport, mutably.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Give back the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Push the whole configuration to the server once it has agreed to
    /// COM-PORT-OPTION. Calling it again on an established port is a no-op.
    pub fn establish(&mut self) -> Result<()> {
        match self.state {
            PortState::Closed => return Err(Error::PortClosed),
            PortState::Established => return Ok(()),
            PortState::Initial => {}
        }

        let c = &self.config;
        let mut cmds = vec![Command::Signature(Vec::new())];
        if !c.signature.is_empty() {
            cmds.push(Command::Signature(signature_bytes(&c.signature)));
        }
        cmds.extend([
            Command::BaudRate(c.baud_rate),
            Command::DataSize(c.data_size),
            Command::Parity(c.parity),
            Command::StopSize(c.stop_size),
            Command::LineStateMask(self.line_state_mask()),
            Command::ModemStateMask(self.modem_state_mask()),
            Command::Control(c.flow_control.inbound_control()),
            Command::Control(c.flow_control.outbound_control()),
            Command::Control(if c.dtr { Control::DtrOn } else { Control::DtrOff }),
            Command::Control(if c.rts { Control::RtsOn } else { Control::RtsOff }),
        ]);

        log::debug!("establishing port {}", self.config.name);
        self.send(cmds)?;
        self.state = PortState::Established;
        Ok(())
    }

    /// Change the serial parameters. When any of them differs from the
    /// current settings the whole geometry is sent, in RFC 2217 order.
    /// Local settings change only once the server has been told.
    pub fn set_params(
        &mut self,
        baud_rate: u32,
        data_size: DataSize,
        parity: Parity,
        stop_size: StopSize,
    ) -> Result<()> {
        self.ensure_open()?;
        validate_params(baud_rate, data_size, parity, stop_size)?;

        let c = &self.config;
        if (c.baud_rate, c.data_size, c.parity, c.stop_size)
            == (baud_rate, data_size, parity, stop_size)
        {
            return Ok(());
        }
        self.send_if_established(vec![
            Command::BaudRate(baud_rate),
            Command::DataSize(data_size),
            Command::Parity(parity),
            Command::StopSize(stop_size),
        ])?;

        self.config.baud_rate = baud_rate;
        self.config.data_size = data_size;
        self.config.parity = parity;
        self.config.stop_size = stop_size;
        Ok(())
    }

    /// Raise or drop DTR.
    pub fn set_dtr(&mut self, on: bool) -> Result<()> {
        self.ensure_open()?;
        if self.config.dtr == on {
            return Ok(());
        }
        let control = if on { Control::DtrOn } else { Control::DtrOff };
        self.send_if_established(vec![Command::Control(control)])?;
        self.config.dtr = on;
        Ok(())
    }

    /// Raise or drop RTS.
    pub fn set_rts(&mut self, on: bool) -> Result<()> {
        self.ensure_open()?;
        if self.config.rts == on {
            return Ok(());
        }
        let control = if on { Control::RtsOn } else { Control::RtsOff };
        self.send_if_established(vec![Command::Control(control)])?;
        self.config.rts = on;
        Ok(())
    }

    /// Change flow control. Outbound is sent before inbound.
    pub fn set_flow_control(&mut self, flow: FlowControl) -> Result<()> {
        self.ensure_open()?;
        let old = self.config.flow_control;

        let mut cmds = Vec::new();
        if old.outbound != flow.outbound {
            cmds.push(Command::Control(flow.outbound_control()));
        }
        if old.inbound != flow.inbound {
            cmds.push(Command::Control(flow.inbound_control()));
        }
        self.send_if_established(cmds)?;
        self.config.flow_control = flow;
        Ok(())
    }

    /// Pulse a break condition on the remote line.
    pub fn send_break(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.send_if_established(vec![
            Command::Control(Control::BreakOn),
            Command::Control(Control::BreakOff),
        ])
    }

    /// Ask the server to discard buffered data.
    pub fn purge(&mut self, purge: Purge) -> Result<()> {
        self.ensure_open()?;
        self.send_if_established(vec![Command::PurgeData(purge)])
    }

    /// Start or stop listening for `kind`. The server is only told when
    /// the resulting mask changes.
    pub fn notify_on(&mut self, kind: PortEventKind, enabled: bool) -> Result<()> {
        self.ensure_open()?;
        let toggle = |notify: u8, bit: u8| if enabled { notify | bit } else { notify & !bit };
        let (line_notify, modem_notify) = match kind.state_bit() {
            StateBit::Line(bit) => (toggle(self.line_notify, bit), self.modem_notify),
            StateBit::Modem(bit) => (self.line_notify, toggle(self.modem_notify, bit)),
        };

        let mut cmds = Vec::new();
        let line_mask = line_mask_for(line_notify);
        if line_mask != self.line_state_mask() {
            cmds.push(Command::LineStateMask(line_mask));
        }
        let modem_mask = modem_mask_for(modem_notify);
        if modem_mask != self.modem_state_mask() {
            cmds.push(Command::ModemStateMask(modem_mask));
        }
        self.send_if_established(cmds)?;

        self.line_notify = line_notify;
        self.modem_notify = modem_notify;
        Ok(())
    }

    /// Called by the connection when serial data has arrived. Returns the
    /// event to raise if the application listens for incoming data.
    pub fn input_available(&self) -> Result<Option<PortEvent>> {
        self.ensure_open()?;
        if self.line_notify & LINESTATE_DATA_READY != 0 {
            return Ok(Some(PortEvent::DataAvailable));
        }
        Ok(None)
    }

    /// Apply a command received from the server and return the events it
    /// raises. Client-direction commands are ignored.
    pub fn handle_command(&mut self, cmd: &ComPortCommand) -> Result<Vec<PortEvent>> {
        self.ensure_open()?;
        if !cmd.is_server() {
            log::debug!("ignoring client-direction command {}", cmd);
            return Ok(Vec::new());
        }
        let mut update = ServerUpdate {
            config: &mut self.config,
            peer_signature: &mut self.peer_signature,
            line_state: &mut self.line_state,
            modem_state: &mut self.modem_state,
            line_notify: self.line_notify,
            modem_notify: self.modem_notify,
        };
        let events = cmd.accept(&mut update);
        if !events.is_empty() {
            log::debug!("{} raised {:?}", cmd, events);
        }
        Ok(events)
    }

    /// Close the port. Closing twice is allowed.
    pub fn close(&mut self) {
        if self.state != PortState::Closed {
            log::debug!("closing port {}", self.config.name);
            self.state = PortState::Closed;
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.state == PortState::Closed {
            return Err(Error::PortClosed);
        }
        Ok(())
    }

    fn send_if_established(&mut self, cmds: Vec<Command>) -> Result<()> {
        if self.state != PortState::Established || cmds.is_empty() {
            return Ok(());
        }
        self.send(cmds)
    }

    fn send(&mut self, cmds: Vec<Command>) -> Result<()> {
        let bodies: Vec<Vec<u8>> = cmds
            .into_iter()
            .map(|c| {
                let cmd = ComPortCommand::client(c);
                log::debug!("-> {}", cmd);
                codec::encode(&cmd)
            })
            .collect();
        self.transport.send_all(&bodies)
    }
}
