// fixtures.rs — subnegotiation bodies captured from ser2net sessions

/// Decode a hex fixture; panics on malformed test data.
pub fn bytes(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str.replace(' ', "")).expect("fixture hex")
}

/// Client SET-DATASIZE 8
pub fn set_datasize_8() -> Vec<u8> {
    bytes("2c 02 08")
}

/// Server SET-PARITY ODD
pub fn server_parity_odd() -> Vec<u8> {
    bytes("2c 67 02")
}

/// Server SET-BAUDRATE 115200
pub fn server_baud_115200() -> Vec<u8> {
    bytes("2c 65 00 01 c2 00")
}

/// Server SIGNATURE "ser2net v4.3.11"
pub fn server_signature() -> Vec<u8> {
    let mut body = bytes("2c 64");
    body.extend_from_slice(b"ser2net v4.3.11");
    body
}

/// Server NOTIFY-MODEMSTATE with CD, DSR and CTS up plus delta bits
pub fn server_modem_up() -> Vec<u8> {
    bytes("2c 6b b3")
}

/// Server NOTIFY-MODEMSTATE with only DSR up
pub fn server_modem_dsr_only() -> Vec<u8> {
    bytes("2c 6b 20")
}

/// Server NOTIFY-LINESTATE with break and framing error
pub fn server_line_break_framing() -> Vec<u8> {
    bytes("2c 6a 18")
}

/// Startup traffic of a default port, in send order.
pub fn default_startup() -> Vec<Vec<u8>> {
    vec![
        bytes("2c 00"),
        bytes("2c 00 72 66 63 32 32 31 37"),
        bytes("2c 01 00 00 25 80"),
        bytes("2c 02 08"),
        bytes("2c 03 01"),
        bytes("2c 04 01"),
        bytes("2c 0a 00"),
        bytes("2c 0b f0"),
        bytes("2c 05 0e"),
        bytes("2c 05 01"),
        bytes("2c 05 09"),
        bytes("2c 05 0c"),
    ]
}
