#[path = "../common/mod.rs"]
mod common;

use rfc2217::protocol::{Command, ComPortCommand, Opcode, codec};
use rfc2217::{DataSize, Error, ModemState, Parity, Role};

use proptest::prelude::*;

fn legal_payload(op: Opcode) -> Vec<u8> {
    match op {
        Opcode::SetDataSize => vec![8],
        Opcode::SetParity | Opcode::SetStopSize | Opcode::PurgeData => vec![1],
        _ => vec![0; op.payload_len().0],
    }
}

#[test]
fn client_data_size_from_wire() -> anyhow::Result<()> {
    common::helpers::init_logging();
    let cmd = codec::decode(&common::fixtures::set_datasize_8())?;
    assert_eq!(cmd.role(), Role::Client);
    assert_eq!(cmd.command(), &Command::DataSize(DataSize::Eight));
    assert_eq!(cmd.describe(), "SET-DATASIZE 8");
    Ok(())
}

#[test]
fn server_parity_from_wire() -> anyhow::Result<()> {
    let cmd = codec::decode(&common::fixtures::server_parity_odd())?;
    assert_eq!(cmd.role(), Role::Server);
    assert_eq!(cmd.command(), &Command::Parity(Parity::Odd));
    Ok(())
}

#[test]
fn server_signature_text() -> anyhow::Result<()> {
    let cmd = codec::decode(&common::fixtures::server_signature())?;
    assert_eq!(cmd.describe(), "SIGNATURE \"ser2net v4.3.11\"");
    Ok(())
}

#[test]
fn modem_mask_names_in_table_order() -> anyhow::Result<()> {
    let cmd = codec::decode(&common::fixtures::bytes("2c 0b 41"))?;
    match cmd.command() {
        Command::ModemStateMask(mask) => {
            assert_eq!(mask.flags(), vec!["RING_INDICATOR", "DELTA_CTS"]);
        }
        other => panic!("expected modem mask, got {:?}", other),
    }
    Ok(())
}

#[test]
fn every_error_kind_is_reachable() {
    assert_eq!(codec::decode(&[]), Err(Error::Truncated { actual: 0 }));
    assert_eq!(
        codec::decode(&[0xff, 0xfa]),
        Err(Error::InvalidOptionByte { actual: 0xff })
    );
    assert_eq!(codec::decode(&[44, 50]), Err(Error::UnknownOpcode(50)));
    assert_eq!(
        codec::decode(&[44, 3, 9]),
        Err(Error::IllegalFieldValue {
            command: "SET-PARITY",
            value: 9
        })
    );
    assert_eq!(
        codec::decode(&[44, 2, 8, 8]),
        Err(Error::PayloadLengthOutOfRange {
            command: "SET-DATASIZE",
            min: 1,
            max: 1,
            actual: 2
        })
    );
}

#[test]
fn server_offset_recovers_role_for_every_opcode() {
    for op in Opcode::ALL {
        let payload = legal_payload(op);
        for role in [Role::Client, Role::Server] {
            let body = common::helpers::subnegotiation(role, op, &payload);
            let cmd = ComPortCommand::decode(&body).unwrap();
            assert_eq!(cmd.role(), role, "{}", op.name());
            assert_eq!(cmd.opcode(), op);
        }
    }
}

#[test]
fn describe_is_stable() -> anyhow::Result<()> {
    let cmd = codec::decode(&common::fixtures::server_modem_up())?;
    assert_eq!(cmd.describe(), cmd.describe());
    assert_eq!(
        cmd.command(),
        &Command::NotifyModemState(ModemState::new(0xb3))
    );
    Ok(())
}

proptest! {
    #[test]
    fn foreign_option_byte_rejected_for_every_command(
        idx in 0..Opcode::ALL.len(),
        server in any::<bool>(),
        first in any::<u8>().prop_filter("COM-PORT-OPTION byte", |b| *b != 44),
    ) {
        let op = Opcode::ALL[idx];
        let role = if server { Role::Server } else { Role::Client };
        let mut body = common::helpers::subnegotiation(role, op, &legal_payload(op));
        prop_assert!(codec::decode(&body).is_ok());
        body[0] = first;
        prop_assert_eq!(
            codec::decode(&body),
            Err(Error::InvalidOptionByte { actual: first })
        );
    }
}
