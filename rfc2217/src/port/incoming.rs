// rfc2217-rs/rfc2217/src/port/incoming.rs

use crate::port::config::{FlowMode, PortConfig};
use crate::port::events::{LINE_EVENTS, MODEM_EVENTS, PortEvent};
use crate::protocol::CommandVisitor;
use crate::types::{Control, DataSize, LineState, ModemState, Parity, Purge, Role, StopSize};

/// Applies one server command to the port's view of the remote device.
pub(crate) struct ServerUpdate<'a> {
    pub config: &'a mut PortConfig,
    pub peer_signature: &'a mut Option<Vec<u8>>,
    pub line_state: &'a mut LineState,
    pub modem_state: &'a mut ModemState,
    /// Line bits the application listens to
    pub line_notify: u8,
    /// Modem bits the application listens to
    pub modem_notify: u8,
}

impl ServerUpdate<'_> {
    fn apply_control(&mut self, control: Control) {
        let flow = &mut self.config.flow_control;
        match control {
            Control::DtrOn => self.config.dtr = true,
            Control::DtrOff => self.config.dtr = false,
            Control::RtsOn => self.config.rts = true,
            Control::RtsOff => self.config.rts = false,
            Control::OutboundFlowNone => flow.outbound = FlowMode::None,
            Control::OutboundFlowXonXoff => flow.outbound = FlowMode::XonXoff,
            Control::OutboundFlowHardware => flow.outbound = FlowMode::Hardware,
            Control::InboundFlowNone => flow.inbound = FlowMode::None,
            Control::InboundFlowXonXoff => flow.inbound = FlowMode::XonXoff,
            Control::InboundFlowHardware => flow.inbound = FlowMode::Hardware,
            other => log::debug!("server control {} not tracked", other),
        }
    }
}

impl CommandVisitor for ServerUpdate<'_> {
    type Output = Vec<PortEvent>;

    fn on_signature(&mut self, _: Role, signature: &[u8]) -> Vec<PortEvent> {
        // An empty server signature is a request for ours, not an answer.
        if !signature.is_empty() {
            *self.peer_signature = Some(signature.to_vec());
        }
        Vec::new()
    }

    fn on_baud_rate(&mut self, _: Role, baud_rate: u32) -> Vec<PortEvent> {
        if baud_rate != crate::constants::BAUDRATE_REQUEST {
            self.config.baud_rate = baud_rate;
        }
        Vec::new()
    }

    fn on_data_size(&mut self, _: Role, data_size: DataSize) -> Vec<PortEvent> {
        if data_size != DataSize::Request {
            self.config.data_size = data_size;
        }
        Vec::new()
    }

    fn on_parity(&mut self, _: Role, parity: Parity) -> Vec<PortEvent> {
        if parity != Parity::Request {
            self.config.parity = parity;
        }
        Vec::new()
    }

    fn on_stop_size(&mut self, _: Role, stop_size: StopSize) -> Vec<PortEvent> {
        if stop_size != StopSize::Request {
            self.config.stop_size = stop_size;
        }
        Vec::new()
    }

    fn on_control(&mut self, _: Role, control: Control) -> Vec<PortEvent> {
        self.apply_control(control);
        Vec::new()
    }

    fn on_notify_line_state(&mut self, _: Role, state: LineState) -> Vec<PortEvent> {
        *self.line_state = state;
        LINE_EVENTS
            .into_iter()
            .filter(|(bit, _)| self.line_notify & bit != 0 && state.contains(*bit))
            .map(|(_, event)| event)
            .collect()
    }

    fn on_notify_modem_state(&mut self, _: Role, state: ModemState) -> Vec<PortEvent> {
        let changed = self.modem_state.bits() ^ state.bits();
        *self.modem_state = state;
        MODEM_EVENTS
            .into_iter()
            .filter(|(bit, _)| self.modem_notify & changed & bit != 0)
            .map(|(bit, make)| make(state.contains(bit)))
            .collect()
    }

    fn on_flow_control_suspend(&mut self, _: Role) -> Vec<PortEvent> {
        log::debug!("server asked to suspend outbound data");
        Vec::new()
    }

    fn on_flow_control_resume(&mut self, _: Role) -> Vec<PortEvent> {
        log::debug!("server asked to resume outbound data");
        Vec::new()
    }

    fn on_line_state_mask(&mut self, _: Role, _: LineState) -> Vec<PortEvent> {
        Vec::new()
    }

    fn on_modem_state_mask(&mut self, _: Role, _: ModemState) -> Vec<PortEvent> {
        Vec::new()
    }

    fn on_purge_data(&mut self, _: Role, _: Purge) -> Vec<PortEvent> {
        Vec::new()
    }
}
