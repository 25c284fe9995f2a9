//! # RESPB
//!
//! Binary wire protocol core for Redis/Valkey-compatible commands.
//!
//! RESPB replaces text RESP framing on the request path with fixed-size
//! opcodes, length-prefixed payloads, and an in-frame multiplexing id. This
//! crate is the protocol core only:
//! - Incremental, zero-copy frame reader
//! - Declarative opcode dispatch table (~260 commands)
//! - Module sub-dispatch (JSON, Bloom, Search)
//! - Text-RESP passthrough framing, plus the reference text parser used by
//!   its consumers
//! - Frame writer with a bit-exact round-trip guarantee
//!
//! It performs no I/O, executes nothing, and owns no buffers: arguments are
//! borrowed slices into caller memory.
//!
//! ## Example
//!
//! ```
//! use respb::{parse_one, frame_to_bytes, ParsedCommand, opcodes};
//!
//! // GET mykey, mux id 0
//! let frame = b"\x00\x00\x00\x00\x00\x05mykey";
//! let (cmd, consumed) = parse_one(frame, 0).unwrap().unwrap();
//! assert_eq!(consumed, frame.len());
//! assert_eq!(opcodes::name_for(cmd.opcode()), "GET");
//! assert_eq!(cmd.args(), [b"mykey".as_slice()]);
//!
//! // Round-trip is bit-exact.
//! assert_eq!(&frame_to_bytes(&cmd).unwrap()[..], frame);
//!
//! // Frames can also be built from scratch.
//! let cmd = ParsedCommand::new(opcodes::strings::GET, 7, &[b"other"]);
//! let bytes = frame_to_bytes(&cmd).unwrap();
//! assert_eq!(&bytes[..4], b"\x00\x00\x00\x07");
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_lifetimes,
    unused_qualifications
)]

/// Error types and result aliases.
pub mod error;
/// Opcode dispatch table and name lookups.
pub mod opcodes;
/// Frame reader, writer, grammars, and the passthrough text parser.
pub mod protocol;

pub use error::{FrameError, RespTextError, Result};
pub use protocol::{
    encoded_len, frame_to_bytes, parse_one, peek_header, write_frame, CommandStream, Field,
    Grammar, ModuleCommand, ParsedCommand,
};

/// Crate version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of argument slices retained per parsed command. Elements
/// past the cap are consumed for framing but not stored.
pub const MAX_ARGS: usize = 64;

/// Maximum bytes for a single 4-byte-prefixed argument (512 MiB), matching
/// the Redis bulk-string limit.
pub const MAX_BULK_SIZE: usize = 512 * 1024 * 1024;

/// Maximum element count accepted by the text-RESP multibulk parser.
pub const MAX_MULTIBULK: usize = 1_000_000;
