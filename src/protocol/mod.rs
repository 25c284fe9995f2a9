//! RESPB binary protocol implementation.
//!
//! This module implements framing, parsing, and serialization for the binary
//! command protocol: fixed 16-bit opcodes, length-prefixed payloads, and an
//! in-frame multiplexing identifier. The reader is zero-copy and streaming;
//! the writer is its exact inverse.

mod command;
pub mod grammar;
mod reader;
pub mod resp_text;
mod writer;

pub use command::{ModuleCommand, ParsedCommand};
pub use grammar::{ExpiryFlags, Field, Grammar};
pub use reader::{parse_one, peek_header, CommandStream};
pub use writer::{encoded_len, frame_to_bytes, write_frame};

/// Core frame header: opcode + mux id, both big-endian u16.
pub const HEADER_LEN: usize = 4;

/// Module and passthrough frames extend the core header by four bytes.
pub const MODULE_HEADER_LEN: usize = 8;

/// Sentinel opcode introducing a module frame.
pub const OP_MODULE: u16 = 0xF000;

/// Sentinel opcode introducing a verbatim text-RESP payload.
pub const OP_RESP_PASSTHROUGH: u16 = 0xFFFF;

/// Highest opcode assignable to a core request command. Everything between
/// this and the two sentinels is reserved and rejected by the reader.
pub const MAX_CORE_OPCODE: u16 = 0xEFFF;

/// First opcode of the response namespace. Responses are produced by a
/// serving process and are not parsed by this crate; the constant exists so
/// the request allocation stays clear of the range.
pub const RESPONSE_OPCODE_BASE: u16 = 0x8000;
