//! Incremental RESPB frame reader.
//!
//! The reader is a pure function over a borrowed byte buffer:
//! - Zero-copy: arguments are slices into the input, never owned
//! - Streaming: a truncated frame yields `Ok(None)` and no offset advance
//! - Stateless: the caller owns the offset and the buffer
//!
//! There is no in-place buffer compaction here, unlike a text RESP parser:
//! every length is known up front, so a frame either fits in the remaining
//! bytes or it does not.

use super::command::{ModuleCommand, ParsedCommand};
use super::grammar::{ExpiryFlags, Field, Grammar};
use super::{HEADER_LEN, OP_MODULE, OP_RESP_PASSTHROUGH};
use crate::error::FrameError;
use crate::{opcodes, MAX_BULK_SIZE};

/// Why a parse attempt stopped early. Internal to the reader; `Incomplete`
/// surfaces as `Ok(None)` and `Fail` as `Err`.
enum Interrupt {
    Incomplete,
    Fail(FrameError),
}

impl From<FrameError> for Interrupt {
    fn from(e: FrameError) -> Self {
        Interrupt::Fail(e)
    }
}

/// Read cursor over the input buffer.
struct Scan<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Scan<'a> {
    fn new(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    #[inline]
    fn take(&mut self, n: usize) -> Result<&'a [u8], Interrupt> {
        if self.remaining() < n {
            return Err(Interrupt::Incomplete);
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    #[inline]
    fn u8(&mut self) -> Result<u8, Interrupt> {
        Ok(self.take(1)?[0])
    }

    #[inline]
    fn u16(&mut self) -> Result<u16, Interrupt> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    #[inline]
    fn u32(&mut self) -> Result<u32, Interrupt> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }
}

/// Parse one frame starting at `offset`.
///
/// Returns:
/// - `Ok(Some((command, next_offset)))` — a complete frame was parsed
/// - `Ok(None)` — the buffer ends mid-frame; retry with more bytes
/// - `Err(e)` — the frame is malformed (unknown opcode, oversized string)
///
/// The input buffer is never mutated and the offset is never advanced on
/// `Ok(None)`; the caller carries `next_offset` forward itself.
pub fn parse_one(buf: &[u8], offset: usize) -> Result<Option<(ParsedCommand<'_>, usize)>, FrameError> {
    let mut scan = Scan::new(buf, offset);
    match parse_frame(&mut scan) {
        Ok(cmd) => Ok(Some((cmd, scan.pos))),
        Err(Interrupt::Incomplete) => Ok(None),
        Err(Interrupt::Fail(e)) => Err(e),
    }
}

/// Read the (opcode, mux_id) pair of the next frame without consuming it.
///
/// Returns `None` when fewer than four bytes remain. Useful for magic-byte
/// protocol detection in front of a mixed binary/text listener.
pub fn peek_header(buf: &[u8], offset: usize) -> Option<(u16, u16)> {
    let rest = buf.get(offset..)?;
    if rest.len() < HEADER_LEN {
        return None;
    }
    Some((
        u16::from_be_bytes([rest[0], rest[1]]),
        u16::from_be_bytes([rest[2], rest[3]]),
    ))
}

fn parse_frame<'a>(scan: &mut Scan<'a>) -> Result<ParsedCommand<'a>, Interrupt> {
    let opcode = scan.u16()?;
    let mux_id = scan.u16()?;

    let mut cmd = ParsedCommand::empty(opcode, mux_id);
    let payload_start = scan.pos;

    match opcode {
        OP_MODULE => {
            let module = ModuleCommand::from_subcommand(scan.u32()?);
            cmd.set_module(module);
            let grammar = opcodes::modules::grammar_for(module.module_id, module.command_id);
            read_fields(scan, grammar, &mut cmd)?;
        }
        OP_RESP_PASSTHROUGH => {
            let len = scan.u32()? as usize;
            if len > MAX_BULK_SIZE {
                return Err(FrameError::BulkTooLarge {
                    len,
                    max: MAX_BULK_SIZE,
                }
                .into());
            }
            // The embedded text is framed here but parsed elsewhere; see
            // `protocol::resp_text` for the collaborator.
            let data = scan.take(len)?;
            cmd.set_resp_data(data);
        }
        _ => {
            let grammar =
                opcodes::grammar_for(opcode).ok_or(FrameError::UnknownOpcode(opcode))?;
            read_fields(scan, grammar, &mut cmd)?;
        }
    }

    cmd.set_raw_payload(&scan.buf[payload_start..scan.pos]);
    Ok(cmd)
}

fn read_fields<'a>(
    scan: &mut Scan<'a>,
    fields: Grammar,
    cmd: &mut ParsedCommand<'a>,
) -> Result<(), Interrupt> {
    for field in fields {
        match *field {
            Field::Short => {
                let len = scan.u16()? as usize;
                let data = scan.take(len)?;
                cmd.push_arg(data);
            }
            Field::Long => {
                let len = scan.u32()? as usize;
                if len > MAX_BULK_SIZE {
                    return Err(FrameError::BulkTooLarge {
                        len,
                        max: MAX_BULK_SIZE,
                    }
                    .into());
                }
                let data = scan.take(len)?;
                cmd.push_arg(data);
            }
            Field::Fixed(n) => {
                scan.take(n as usize)?;
            }
            Field::Count(inner) => {
                let count = scan.u16()?;
                // Elements past the argument cap are parsed and dropped:
                // their bytes must be consumed for the frame extent to stay
                // correct, but the slices are not retained.
                for _ in 0..count {
                    read_fields(scan, inner, cmd)?;
                }
            }
            Field::OptExpiry => {
                let flags = ExpiryFlags::from_bits_truncate(scan.u8()?);
                if flags.contains(ExpiryFlags::EXPIRY) {
                    scan.take(8)?;
                }
            }
        }
    }
    Ok(())
}

/// Iterator over the complete frames in a buffer.
///
/// Drives [`parse_one`] forward, stopping at the first truncated frame (more
/// bytes needed) or the first malformed frame. `position` reports how many
/// bytes were consumed, so a network caller can shift its buffer.
#[derive(Debug)]
pub struct CommandStream<'a> {
    buf: &'a [u8],
    pos: usize,
    halted: bool,
}

impl<'a> CommandStream<'a> {
    /// Iterate frames from the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            halted: false,
        }
    }

    /// Offset of the first unconsumed byte.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'a> Iterator for CommandStream<'a> {
    type Item = Result<ParsedCommand<'a>, FrameError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        match parse_one(self.buf, self.pos) {
            Ok(Some((cmd, next))) => {
                self.pos = next;
                Some(Ok(cmd))
            }
            Ok(None) => None,
            Err(e) => {
                self.halted = true;
                Some(Err(e))
            }
        }
    }
}
