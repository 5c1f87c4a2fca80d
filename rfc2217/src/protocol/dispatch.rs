// rfc2217-rs/rfc2217/src/protocol/dispatch.rs

use crate::protocol::commands::{Command, ComPortCommand};
use crate::types::{Control, DataSize, LineState, ModemState, Parity, Purge, Role, StopSize};

/// Typed handler for decoded commands, one method per command kind.
///
/// No method has a default body, so a new `Command` variant does not
/// compile until every visitor handles it.
pub trait CommandVisitor {
    /// Value produced by every handler.
    type Output;

    /// SIGNATURE; empty bytes are a request.
    fn on_signature(&mut self, role: Role, signature: &[u8]) -> Self::Output;
    /// SET-BAUDRATE; 0 is a request.
    fn on_baud_rate(&mut self, role: Role, baud_rate: u32) -> Self::Output;
    /// SET-DATASIZE.
    fn on_data_size(&mut self, role: Role, data_size: DataSize) -> Self::Output;
    /// SET-PARITY.
    fn on_parity(&mut self, role: Role, parity: Parity) -> Self::Output;
    /// SET-STOPSIZE.
    fn on_stop_size(&mut self, role: Role, stop_size: StopSize) -> Self::Output;
    /// SET-CONTROL.
    fn on_control(&mut self, role: Role, control: Control) -> Self::Output;
    /// NOTIFY-LINESTATE.
    fn on_notify_line_state(&mut self, role: Role, state: LineState) -> Self::Output;
    /// NOTIFY-MODEMSTATE.
    fn on_notify_modem_state(&mut self, role: Role, state: ModemState) -> Self::Output;
    /// FLOWCONTROL-SUSPEND.
    fn on_flow_control_suspend(&mut self, role: Role) -> Self::Output;
    /// FLOWCONTROL-RESUME.
    fn on_flow_control_resume(&mut self, role: Role) -> Self::Output;
    /// SET-LINESTATE-MASK.
    fn on_line_state_mask(&mut self, role: Role, mask: LineState) -> Self::Output;
    /// SET-MODEMSTATE-MASK.
    fn on_modem_state_mask(&mut self, role: Role, mask: ModemState) -> Self::Output;
    /// PURGE-DATA.
    fn on_purge_data(&mut self, role: Role, purge: Purge) -> Self::Output;
}

impl ComPortCommand {
    /// Invoke the visitor method matching this command.
    pub fn accept<V: CommandVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        let role = self.role();
        match self.command() {
            Command::Signature(s) => visitor.on_signature(role, s),
            Command::BaudRate(rate) => visitor.on_baud_rate(role, *rate),
            Command::DataSize(v) => visitor.on_data_size(role, *v),
            Command::Parity(v) => visitor.on_parity(role, *v),
            Command::StopSize(v) => visitor.on_stop_size(role, *v),
            Command::Control(v) => visitor.on_control(role, *v),
            Command::NotifyLineState(v) => visitor.on_notify_line_state(role, *v),
            Command::NotifyModemState(v) => visitor.on_notify_modem_state(role, *v),
            Command::FlowControlSuspend => visitor.on_flow_control_suspend(role),
            Command::FlowControlResume => visitor.on_flow_control_resume(role),
            Command::LineStateMask(v) => visitor.on_line_state_mask(role, *v),
            Command::ModemStateMask(v) => visitor.on_modem_state_mask(role, *v),
            Command::PurgeData(v) => visitor.on_purge_data(role, *v),
        }
    }
}
