// rfc2217-rs/rfc2217/src/transport/mod.rs

/// Recording transport for tests.
pub mod mock;
/// The `Transport` trait.
pub mod traits;

pub use mock::MockTransport;
pub use traits::Transport;
