// rfc2217-rs/rfc2217/src/telnet/mod.rs
//! Option handlers plugged into an external TELNET client. The client owns
//! negotiation and IAC escaping; handlers only decide what to accept and
//! what to do with one reassembled subnegotiation.

/// TRANSMIT-BINARY.
pub mod binary;
/// COM-PORT-OPTION.
pub mod com_port;

pub use binary::TransmitBinaryOptionHandler;
pub use com_port::ComPortOptionHandler;

/// Negotiation policy for one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionFlags {
    /// Send WILL on connect
    pub init_local: bool,
    /// Send DO on connect
    pub init_remote: bool,
    /// Answer DO with WILL
    pub accept_local: bool,
    /// Answer WILL with DO
    pub accept_remote: bool,
}

impl OptionFlags {
    /// Initiate and accept in both directions.
    pub const ALL: Self = Self {
        init_local: true,
        init_remote: true,
        accept_local: true,
        accept_remote: true,
    };
}

/// Hook set a TELNET client calls for one option.
pub trait OptionHandler {
    /// TELNET option number this handler serves.
    fn option_code(&self) -> u8;

    /// Which side may initiate and accept the option.
    fn flags(&self) -> OptionFlags;

    /// Called with one subnegotiation (`[option, data...]`). Returns the
    /// reply body to send back, if any.
    fn answer_subnegotiation(&mut self, data: &[u8]) -> Option<Vec<u8>>;

    /// Called once the option is enabled on our side.
    fn start_subnegotiation_local(&mut self) -> Option<Vec<u8>>;

    /// Called once the option is enabled on the peer's side.
    fn start_subnegotiation_remote(&mut self) -> Option<Vec<u8>>;
}
