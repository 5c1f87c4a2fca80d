//! Small stateless helpers shared across the crate: bitmask rendering for
//! line/modem state and hex formatting of wire bytes for log output.

pub mod bits;
pub mod hex;

pub use bits::*;
pub use hex::*;
