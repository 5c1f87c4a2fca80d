// rfc2217-rs/rfc2217/src/port/mod.rs
//! Client-side model of a remote serial port. Settings changed by the
//! application are pushed to the server as COM-PORT-OPTION commands and
//! server notifications are turned into `PortEvent`s.

/// Initial port settings.
pub mod config;
/// Conditions and the events they raise.
pub mod events;
/// The `ComPort` handle.
pub mod handle;
mod incoming;

pub use config::{FlowControl, FlowMode, PortConfig, PortConfigBuilder};
pub use events::{PortEvent, PortEventKind};
pub use handle::{ComPort, PortState};
