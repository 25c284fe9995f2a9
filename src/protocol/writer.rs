//! RESPB frame writer — the exact inverse of the reader.
//!
//! Two serialization paths exist, and tests hold them to the same contract:
//!
//! - A command produced by the reader carries its consumed payload in
//!   `raw_payload`, and the writer re-emits that region verbatim. Opaque
//!   fixed fields (flags, scores, expiries) round-trip bit-exactly without the
//!   core ever interpreting them.
//! - A command built from scratch has no raw payload, so the writer walks the
//!   opcode's grammar: length-prefixed fields draw from the argument list,
//!   counts are derived from the remaining argument count, and opaque fixed
//!   fields are zero-filled.

use super::command::ParsedCommand;
use super::grammar::{args_per_group, Field, Grammar};
use super::{OP_MODULE, OP_RESP_PASSTHROUGH};
use crate::error::FrameError;
use crate::{opcodes, MAX_BULK_SIZE};
use bytes::Bytes;

/// Largest opaque fixed field in any grammar (WAITAOF's three i64s).
const ZERO_PAD: [u8; 24] = [0; 24];

/// Write cursor over the output buffer. Checks capacity before every write;
/// on shortfall the partially written region is left unspecified.
struct Emit<'b> {
    buf: &'b mut [u8],
    pos: usize,
}

impl<'b> Emit<'b> {
    fn new(buf: &'b mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline]
    fn put(&mut self, bytes: &[u8]) -> Result<(), FrameError> {
        let end = self.pos + bytes.len();
        if end > self.buf.len() {
            return Err(FrameError::InsufficientCapacity {
                needed: end,
                available: self.buf.len(),
            });
        }
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }

    #[inline]
    fn u8(&mut self, val: u8) -> Result<(), FrameError> {
        self.put(&[val])
    }

    #[inline]
    fn u16(&mut self, val: u16) -> Result<(), FrameError> {
        self.put(&val.to_be_bytes())
    }

    #[inline]
    fn u32(&mut self, val: u32) -> Result<(), FrameError> {
        self.put(&val.to_be_bytes())
    }
}

/// Arguments remaining to be serialized, in wire order.
struct ArgFeed<'a, 'c> {
    args: &'c [&'a [u8]],
    idx: usize,
}

impl<'a> ArgFeed<'a, '_> {
    #[inline]
    fn next(&mut self) -> &'a [u8] {
        let arg = self.args.get(self.idx).copied().unwrap_or(&[]);
        self.idx += 1;
        arg
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.args.len().saturating_sub(self.idx)
    }
}

/// Serialize one command into `buf`, returning the number of bytes written.
///
/// Fails with `InsufficientCapacity` when the buffer is too small (discard the
/// buffer contents in that case) and `UnknownOpcode` when asked to synthesize
/// a frame for an opcode with no grammar.
pub fn write_frame(cmd: &ParsedCommand<'_>, buf: &mut [u8]) -> Result<usize, FrameError> {
    let mut out = Emit::new(buf);
    out.u16(cmd.opcode())?;
    out.u16(cmd.mux_id())?;

    // Round-trip path: the consumed payload region already contains the
    // module subcommand / passthrough length where applicable.
    let raw = cmd.raw_payload();
    if !raw.is_empty() {
        out.put(raw)?;
        return Ok(out.pos);
    }

    match cmd.opcode() {
        OP_MODULE => {
            let module = cmd.module_command().unwrap_or_default();
            out.u32(module.subcommand)?;
            let grammar = opcodes::modules::grammar_for(module.module_id, module.command_id);
            let mut feed = ArgFeed {
                args: cmd.args(),
                idx: 0,
            };
            write_fields(&mut out, grammar, &mut feed)?;
        }
        OP_RESP_PASSTHROUGH => {
            let data = cmd.resp_data().unwrap_or(&[]);
            out.u32(data.len() as u32)?;
            out.put(data)?;
        }
        opcode => {
            let grammar =
                opcodes::grammar_for(opcode).ok_or(FrameError::UnknownOpcode(opcode))?;
            let mut feed = ArgFeed {
                args: cmd.args(),
                idx: 0,
            };
            write_fields(&mut out, grammar, &mut feed)?;
        }
    }

    Ok(out.pos)
}

fn write_fields(
    out: &mut Emit<'_>,
    fields: Grammar,
    feed: &mut ArgFeed<'_, '_>,
) -> Result<(), FrameError> {
    for field in fields {
        match *field {
            Field::Short => {
                let arg = feed.next();
                if arg.len() > usize::from(u16::MAX) {
                    return Err(FrameError::BulkTooLarge {
                        len: arg.len(),
                        max: usize::from(u16::MAX),
                    });
                }
                out.u16(arg.len() as u16)?;
                out.put(arg)?;
            }
            Field::Long => {
                let arg = feed.next();
                if arg.len() > MAX_BULK_SIZE {
                    return Err(FrameError::BulkTooLarge {
                        len: arg.len(),
                        max: MAX_BULK_SIZE,
                    });
                }
                out.u32(arg.len() as u32)?;
                out.put(arg)?;
            }
            Field::Fixed(n) => {
                // Synthesized from scratch: no original bytes to carry.
                out.put(&ZERO_PAD[..n as usize])?;
            }
            Field::Count(inner) => {
                let per = args_per_group(inner);
                let count = if per == 0 { 0 } else { feed.remaining() / per };
                out.u16(count as u16)?;
                for _ in 0..count {
                    write_fields(out, inner, feed)?;
                }
            }
            Field::OptExpiry => {
                out.u8(0)?;
            }
        }
    }
    Ok(())
}

/// Exact serialized size of `cmd`, without writing anything.
pub fn encoded_len(cmd: &ParsedCommand<'_>) -> Result<usize, FrameError> {
    let raw = cmd.raw_payload();
    if !raw.is_empty() {
        return Ok(super::HEADER_LEN + raw.len());
    }
    let len = match cmd.opcode() {
        OP_MODULE => {
            let module = cmd.module_command().unwrap_or_default();
            let grammar = opcodes::modules::grammar_for(module.module_id, module.command_id);
            let mut feed = ArgFeed {
                args: cmd.args(),
                idx: 0,
            };
            super::MODULE_HEADER_LEN + fields_len(grammar, &mut feed)
        }
        OP_RESP_PASSTHROUGH => {
            super::MODULE_HEADER_LEN + cmd.resp_data().map_or(0, <[u8]>::len)
        }
        opcode => {
            let grammar =
                opcodes::grammar_for(opcode).ok_or(FrameError::UnknownOpcode(opcode))?;
            let mut feed = ArgFeed {
                args: cmd.args(),
                idx: 0,
            };
            super::HEADER_LEN + fields_len(grammar, &mut feed)
        }
    };
    Ok(len)
}

fn fields_len(fields: Grammar, feed: &mut ArgFeed<'_, '_>) -> usize {
    let mut len = 0;
    for field in fields {
        match *field {
            Field::Short => len += 2 + feed.next().len(),
            Field::Long => len += 4 + feed.next().len(),
            Field::Fixed(n) => len += n as usize,
            Field::Count(inner) => {
                let per = args_per_group(inner);
                let count = if per == 0 { 0 } else { feed.remaining() / per };
                len += 2;
                for _ in 0..count {
                    len += fields_len(inner, feed);
                }
            }
            Field::OptExpiry => len += 1,
        }
    }
    len
}

/// Serialize into a freshly allocated [`Bytes`] buffer.
pub fn frame_to_bytes(cmd: &ParsedCommand<'_>) -> Result<Bytes, FrameError> {
    let mut buf = vec![0u8; encoded_len(cmd)?];
    let written = write_frame(cmd, &mut buf)?;
    debug_assert_eq!(written, buf.len());
    Ok(Bytes::from(buf))
}
