// rfc2217-rs/rfc2217/src/protocol/mod.rs

/// Logging decode/encode entry points.
pub mod codec;
/// Command values and per-command payload codecs.
pub mod commands;
/// Typed dispatch of decoded commands.
pub mod dispatch;
/// Opcode table.
pub mod opcode;
/// Bounds-checked header and payload readers.
pub mod parser;

pub use codec::{decode, encode};
pub use commands::{ComPortCommand, Command};
pub use dispatch::CommandVisitor;
pub use opcode::Opcode;
