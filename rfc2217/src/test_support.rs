// rfc2217-rs/rfc2217/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! They wire a `ComPort` to a `MockTransport` and build raw subnegotiation
//! bodies so tests do not repeat the setup.
#![allow(dead_code)]

use crate::port::{ComPort, PortConfig, PortEvent};
use crate::protocol::Opcode;
use crate::telnet::{ComPortOptionHandler, OptionHandler};
use crate::transport::MockTransport;
use crate::types::Role;
use crate::Result;

/// Create a port over a `MockTransport`, run the startup sequence and
/// clear the recorded startup traffic.
#[doc(hidden)]
pub fn established_mock_port(config: PortConfig) -> Result<ComPort<MockTransport>> {
    let mut port = ComPort::new(config, MockTransport::new())?;
    port.establish()?;
    port.transport_mut().take_sent();
    Ok(port)
}

/// Raw `[44, opcode, payload...]` body for `op` sent by `role`.
#[doc(hidden)]
pub fn subnegotiation(role: Role, op: Opcode, payload: &[u8]) -> Vec<u8> {
    let mut body = vec![crate::constants::COM_PORT_OPTION, op.code(role)];
    body.extend_from_slice(payload);
    body
}

/// Pass raw server bodies through a `ComPortOptionHandler` and apply every
/// command that decoded to `port`. Returns the events raised, in order.
#[doc(hidden)]
pub fn feed_server_bodies(
    handler: &mut ComPortOptionHandler,
    port: &mut ComPort<MockTransport>,
    bodies: &[Vec<u8>],
) -> Result<Vec<PortEvent>> {
    for body in bodies {
        handler.answer_subnegotiation(body);
    }
    let mut events = Vec::new();
    for cmd in handler.drain() {
        events.extend(port.handle_command(&cmd)?);
    }
    Ok(events)
}
