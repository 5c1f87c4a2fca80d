// rfc2217-rs/rfc2217/src/transport/mock.rs

use crate::protocol::{ComPortCommand, codec};
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for tests. It records every subnegotiation body sent.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Bodies sent, oldest first
    pub sent: Vec<Vec<u8>>,
    /// Testing hook: number of upcoming sends that should fail
    pub failures: usize,
}

impl MockTransport {
    /// Empty mock that never fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many subsequent sends should fail (for tests).
    pub fn set_failures(&mut self, n: usize) {
        self.failures = n;
    }

    /// Remove and return the most recent body.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// Drain everything sent so far.
    pub fn take_sent(&mut self) -> Vec<Vec<u8>> {
        std::mem::take(&mut self.sent)
    }

    /// Decode everything sent so far, for assertions on command content.
    pub fn sent_commands(&self) -> Result<Vec<ComPortCommand>> {
        self.sent.iter().map(|b| codec::decode(b)).collect()
    }
}

impl Transport for MockTransport {
    fn send_subnegotiation(&mut self, data: &[u8]) -> Result<()> {
        if self.failures > 0 {
            self.failures -= 1;
            return Err(Error::Transport("connection reset".into()));
        }
        self.sent.push(data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Command;
    use crate::types::Parity;

    #[test]
    fn mock_records_and_decodes() {
        let mut m = MockTransport::new();
        m.send_subnegotiation(&[44, 3, 3]).unwrap();
        assert_eq!(m.sent.len(), 1);
        let cmds = m.sent_commands().unwrap();
        assert_eq!(cmds[0].command(), &Command::Parity(Parity::Even));
        assert_eq!(m.take_sent(), vec![vec![44, 3, 3]]);
        assert!(m.pop_sent().is_none());
    }

    #[test]
    fn mock_failure_injection() {
        let mut m = MockTransport::new();
        m.set_failures(1);
        assert!(matches!(
            m.send_subnegotiation(&[44, 0]),
            Err(Error::Transport(_))
        ));
        m.send_subnegotiation(&[44, 0]).unwrap();
        assert_eq!(m.sent, vec![vec![44, 0]]);
    }
}
