#[path = "../common/mod.rs"]
mod common;

use rfc2217::protocol::{Command, ComPortCommand, codec};
use rfc2217::utils::bytes_to_hex_spaced;
use rfc2217::{Control, LineState, Purge, StopSize};

#[test]
fn server_baud_rate_is_big_endian() {
    let cmd = ComPortCommand::server(Command::BaudRate(115_200));
    assert_eq!(codec::encode(&cmd), common::fixtures::server_baud_115200());
}

#[test]
fn encode_matches_captured_bytes() {
    let cases = [
        (
            ComPortCommand::client(Command::StopSize(StopSize::OnePointFive)),
            "2c 04 03",
        ),
        (
            ComPortCommand::client(Command::Control(Control::InboundFlowHardware)),
            "2c 05 10",
        ),
        (
            ComPortCommand::client(Command::LineStateMask(LineState::new(0x1e))),
            "2c 0a 1e",
        ),
        (ComPortCommand::server(Command::FlowControlSuspend), "2c 6c"),
        (
            ComPortCommand::server(Command::PurgeData(Purge::Both)),
            "2c 70 03",
        ),
    ];
    for (cmd, expected) in cases {
        assert_eq!(bytes_to_hex_spaced(&codec::encode(&cmd)), expected, "{}", cmd);
    }
}

#[test]
fn signature_request_is_bare_header() {
    let cmd = ComPortCommand::client(Command::Signature(Vec::new()));
    assert_eq!(cmd.encode(), vec![44, 0]);
    assert!(cmd.payload().is_empty());
}
