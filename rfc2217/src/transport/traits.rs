// rfc2217-rs/rfc2217/src/transport/traits.rs

use crate::Result;

/// Outbound side of the TELNET connection, as seen by the port model.
///
/// Implementations wrap each body in `IAC SB ... IAC SE` and escape IAC
/// bytes; the port model only produces `[44, opcode, payload...]`.
pub trait Transport {
    /// Send one COM-PORT-OPTION subnegotiation body.
    fn send_subnegotiation(&mut self, data: &[u8]) -> Result<()>;

    /// Send several bodies in order. Default implementation sends them one
    /// by one and stops at the first failure.
    fn send_all(&mut self, bodies: &[Vec<u8>]) -> Result<()> {
        for body in bodies {
            self.send_subnegotiation(body)?;
        }
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send_subnegotiation(&mut self, data: &[u8]) -> Result<()> {
        (**self).send_subnegotiation(data)
    }

    fn send_all(&mut self, bodies: &[Vec<u8>]) -> Result<()> {
        (**self).send_all(bodies)
    }
}
