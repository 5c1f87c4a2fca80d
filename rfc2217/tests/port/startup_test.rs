#[path = "../common/mod.rs"]
mod common;

use rfc2217::port::{ComPort, FlowControl, FlowMode, PortConfig, PortState};
use rfc2217::transport::MockTransport;
use rfc2217::{DataSize, Error, Parity, StopSize};

#[test]
fn default_port_startup_bytes() -> anyhow::Result<()> {
    common::helpers::init_logging();
    let mut port = ComPort::new(PortConfig::default(), MockTransport::new())?;
    assert_eq!(port.state(), PortState::Initial);
    port.establish()?;
    assert_eq!(port.transport().sent, common::fixtures::default_startup());
    Ok(())
}

#[test]
fn configured_port_startup_carries_settings() -> anyhow::Result<()> {
    let config = PortConfig::builder()
        .name("/dev/ttyUSB0")
        .baud_rate(2400)
        .data_size(DataSize::Seven)
        .parity(Parity::Even)
        .stop_size(StopSize::Two)
        .flow_control(FlowControl {
            inbound: FlowMode::Hardware,
            outbound: FlowMode::XonXoff,
        })
        .dtr(true)
        .rts(true)
        .build()?;
    let mut port = ComPort::new(config, MockTransport::new())?;
    port.establish()?;

    let described: Vec<String> = port
        .transport()
        .sent_commands()?
        .iter()
        .map(|c| c.describe())
        .collect();
    assert_eq!(
        &described[2..6],
        &[
            "SET-BAUDRATE 2400",
            "SET-DATASIZE 7",
            "SET-PARITY EVEN",
            "SET-STOPSIZE 2"
        ]
    );
    assert_eq!(
        &described[8..],
        &[
            "SET-CONTROL INBOUND_FLOW_HARDWARE",
            "SET-CONTROL OUTBOUND_FLOW_XON_XOFF",
            "SET-CONTROL DTR_ON",
            "SET-CONTROL RTS_ON"
        ]
    );
    Ok(())
}

#[test]
fn establish_twice_sends_once() -> anyhow::Result<()> {
    let mut port = ComPort::new(PortConfig::default(), MockTransport::new())?;
    port.establish()?;
    port.establish()?;
    assert_eq!(port.transport().sent.len(), 12);
    Ok(())
}

#[test]
fn transport_failure_surfaces_after_establish() -> anyhow::Result<()> {
    let mut port = common::helpers::established_mock_port(PortConfig::default())?;
    port.transport_mut().set_failures(1);
    assert!(matches!(port.set_rts(true), Err(Error::Transport(_))));
    Ok(())
}

#[test]
fn closed_port_refuses_everything() -> anyhow::Result<()> {
    let mut port = common::helpers::established_mock_port(PortConfig::default())?;
    port.close();
    assert_eq!(
        port.set_params(300, DataSize::Eight, Parity::None, StopSize::One),
        Err(Error::PortClosed)
    );
    assert_eq!(port.purge(rfc2217::Purge::Both), Err(Error::PortClosed));
    assert!(port.into_transport().sent.is_empty());
    Ok(())
}
