// rfc2217-rs/rfc2217/src/lib.rs

//! rfc2217
//!
//! RFC 2217 (TELNET COM-PORT-OPTION) command codec and client-side serial
//! port model.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod port;
/// Common imports.
pub mod prelude;
/// COM-PORT-OPTION command codec.
pub mod protocol;
pub mod telnet;
pub mod test_support;
/// Outbound side of the connection.
pub mod transport;
pub mod types;
pub mod utils;

// Crate-root re-exports so `crate::Error`, `crate::Result` and the field
// types are reachable without spelling out the module.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
