#[path = "../common/mod.rs"]
mod common;

use rfc2217::port::{PortConfig, PortEvent, PortEventKind};
use rfc2217::telnet::ComPortOptionHandler;
use rfc2217::Parity;

#[test]
fn server_traffic_updates_port_and_raises_events() -> anyhow::Result<()> {
    common::helpers::init_logging();
    let mut port = common::helpers::established_mock_port(PortConfig::default())?;
    for kind in [
        PortEventKind::CarrierDetect,
        PortEventKind::Cts,
        PortEventKind::BreakInterrupt,
    ] {
        port.notify_on(kind, true)?;
    }

    let mut handler = ComPortOptionHandler::new();
    let events = common::helpers::feed_server_bodies(
        &mut handler,
        &mut port,
        &[
            common::fixtures::server_signature(),
            common::fixtures::server_baud_115200(),
            common::fixtures::server_parity_odd(),
            common::fixtures::server_modem_up(),
            vec![44, 250],
            common::fixtures::server_line_break_framing(),
            common::fixtures::server_modem_dsr_only(),
        ],
    )?;

    assert_eq!(
        events,
        vec![
            PortEvent::CarrierDetect(true),
            PortEvent::Cts(true),
            PortEvent::BreakInterrupt,
            PortEvent::CarrierDetect(false),
            PortEvent::Cts(false),
        ]
    );
    assert_eq!(handler.rejected(), 1);
    assert_eq!(port.config().baud_rate, 115_200);
    assert_eq!(port.config().parity, Parity::Odd);
    assert_eq!(port.peer_signature_text().as_deref(), Some("ser2net v4.3.11"));
    assert!(port.is_dsr());
    assert!(!port.is_cd());
    Ok(())
}

#[test]
fn unmonitored_changes_raise_nothing() -> anyhow::Result<()> {
    let mut port = common::helpers::established_mock_port(PortConfig::default())?;
    let mut handler = ComPortOptionHandler::new();
    let events = common::helpers::feed_server_bodies(
        &mut handler,
        &mut port,
        &[
            common::fixtures::server_modem_up(),
            common::fixtures::server_line_break_framing(),
        ],
    )?;
    assert!(events.is_empty());
    assert!(port.is_cts());
    Ok(())
}

#[test]
fn listening_for_line_errors_updates_mask() -> anyhow::Result<()> {
    let mut port = common::helpers::established_mock_port(PortConfig::default())?;
    port.notify_on(PortEventKind::ParityError, true)?;
    port.notify_on(PortEventKind::OutputEmpty, true)?;
    port.notify_on(PortEventKind::ParityError, false)?;
    assert_eq!(
        port.transport().sent,
        vec![
            common::fixtures::bytes("2c 0a 04"),
            common::fixtures::bytes("2c 0a 44"),
            common::fixtures::bytes("2c 0a 40"),
        ]
    );
    Ok(())
}
