// rfc2217-rs/rfc2217/src/telnet/com_port.rs

use std::collections::VecDeque;

use crate::constants::COM_PORT_OPTION;
use crate::protocol::{ComPortCommand, codec};

use super::{OptionFlags, OptionHandler};

/// Commands held before the port model drains them.
pub const MAX_QUEUED: usize = 256;

/// COM-PORT-OPTION handler for the client side.
///
/// The client offers the option (WILL); once the server agrees the handler
/// reports the session as established. Every inbound subnegotiation is
/// decoded and queued for the port model; malformed ones are logged and
/// dropped without affecting the connection. The queue holds at most
/// `MAX_QUEUED` commands; callers drain it after each read, and commands
/// arriving at a full queue are dropped and counted as rejected.
#[derive(Debug, Default)]
pub struct ComPortOptionHandler {
    established: bool,
    inbound: VecDeque<ComPortCommand>,
    rejected: usize,
}

impl ComPortOptionHandler {
    /// Handler with an empty queue, not yet established.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the server has accepted COM-PORT-OPTION.
    pub fn is_established(&self) -> bool {
        self.established
    }

    /// Number of subnegotiations dropped, malformed or over the queue limit.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Take the decoded commands received so far, oldest first.
    pub fn drain(&mut self) -> Vec<ComPortCommand> {
        self.inbound.drain(..).collect()
    }
}

impl OptionHandler for ComPortOptionHandler {
    fn option_code(&self) -> u8 {
        COM_PORT_OPTION
    }

    fn flags(&self) -> OptionFlags {
        OptionFlags {
            init_local: true,
            init_remote: false,
            accept_local: true,
            accept_remote: false,
        }
    }

    fn answer_subnegotiation(&mut self, data: &[u8]) -> Option<Vec<u8>> {
        match codec::decode(data) {
            Ok(cmd) if self.inbound.len() >= MAX_QUEUED => {
                self.rejected += 1;
                log::warn!("COM-PORT-OPTION queue full, dropping {}", cmd);
            }
            Ok(cmd) => self.inbound.push_back(cmd),
            Err(e) => {
                self.rejected += 1;
                log::warn!("dropping COM-PORT-OPTION subnegotiation: {}", e);
            }
        }
        None
    }

    fn start_subnegotiation_local(&mut self) -> Option<Vec<u8>> {
        log::debug!("COM-PORT-OPTION accepted by server");
        self.established = true;
        None
    }

    fn start_subnegotiation_remote(&mut self) -> Option<Vec<u8>> {
        None
    }
}
