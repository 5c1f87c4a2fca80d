#[path = "../common/mod.rs"]
mod common;

use rfc2217::constants::COM_PORT_OPTION;
use rfc2217::protocol::Command;
use rfc2217::telnet::{ComPortOptionHandler, OptionHandler};
use rfc2217::Parity;

#[test]
fn handler_queues_valid_and_drops_malformed() {
    common::helpers::init_logging();
    let mut handler = ComPortOptionHandler::new();
    assert_eq!(handler.option_code(), COM_PORT_OPTION);

    assert!(handler.answer_subnegotiation(&common::fixtures::server_parity_odd()).is_none());
    assert!(handler.answer_subnegotiation(&[44, 3, 9]).is_none());
    assert!(handler.answer_subnegotiation(&[44]).is_none());

    let cmds = handler.drain();
    assert_eq!(cmds.len(), 1);
    assert_eq!(cmds[0].command(), &Command::Parity(Parity::Odd));
    assert_eq!(handler.rejected(), 2);
    assert!(handler.drain().is_empty());
}

#[test]
fn handler_established_after_local_start() {
    let mut handler = ComPortOptionHandler::new();
    assert!(!handler.is_established());
    assert!(handler.start_subnegotiation_local().is_none());
    assert!(handler.is_established());
}
