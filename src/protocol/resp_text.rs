//! Reference text-RESP multibulk parser.
//!
//! The binary frame reader only *frames* a `0xFFFF` passthrough payload; the
//! embedded `*N\r\n$L\r\n...` command is decoded here, by a collaborator kept
//! outside the binary core. Consumers of the passthrough bridge call this, and
//! the differential tests use it to cross-check the binary path.
//!
//! Grammar accepted (request direction only):
//!
//! ```text
//! "*" <ascii-uint> "\r\n" ( "$" <ascii-uint> "\r\n" <bytes> "\r\n" ){N}
//! ```
//!
//! Like the binary reader, this is zero-copy over a borrowed buffer and
//! returns `Ok(None)` for truncated input.

use crate::error::RespTextError;
use crate::{MAX_BULK_SIZE, MAX_MULTIBULK};
use memchr::memchr;

/// Multibulk array marker.
const ARRAY: u8 = b'*';
/// Bulk string marker.
const BULK: u8 = b'$';

/// Parse one multibulk command starting at `offset`.
///
/// Returns the argument vector and the offset one past the command's final
/// CRLF, or `Ok(None)` when the buffer ends mid-command.
pub fn parse_multibulk(
    buf: &[u8],
    offset: usize,
) -> Result<Option<(Vec<&[u8]>, usize)>, RespTextError> {
    let mut pos = offset;

    let Some((line, next)) = read_line(buf, pos) else {
        return Ok(None);
    };
    let Some((&marker, count_digits)) = line.split_first() else {
        return Err(RespTextError::InvalidLength);
    };
    if marker != ARRAY {
        return Err(RespTextError::InvalidTypeMarker(marker));
    }
    let count = ascii_uint(count_digits).ok_or(RespTextError::InvalidLength)? as usize;
    if count > MAX_MULTIBULK {
        return Err(RespTextError::TooManyElements {
            count,
            max: MAX_MULTIBULK,
        });
    }
    pos = next;

    let mut args = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        let Some((line, next)) = read_line(buf, pos) else {
            return Ok(None);
        };
        let Some((&marker, len_digits)) = line.split_first() else {
            return Err(RespTextError::InvalidLength);
        };
        if marker != BULK {
            return Err(RespTextError::InvalidTypeMarker(marker));
        }
        let len = ascii_uint(len_digits).ok_or(RespTextError::InvalidLength)? as usize;
        if len > MAX_BULK_SIZE {
            return Err(RespTextError::BulkTooLarge {
                len,
                max: MAX_BULK_SIZE,
            });
        }
        pos = next;

        if buf.len().saturating_sub(pos) < len + 2 {
            return Ok(None);
        }
        let data = &buf[pos..pos + len];
        if &buf[pos + len..pos + len + 2] != b"\r\n" {
            return Err(RespTextError::MissingCrlf);
        }
        args.push(data);
        pos += len + 2;
    }

    Ok(Some((args, pos)))
}

/// Read one CRLF-terminated line starting at `pos`, returning the line body
/// and the offset past the terminator. `None` means the buffer ended first.
fn read_line(buf: &[u8], pos: usize) -> Option<(&[u8], usize)> {
    let end = pos + find_crlf(buf.get(pos..)?)?;
    Some((&buf[pos..end], end + 2))
}

/// SIMD-assisted CRLF search: memchr for `\r`, then verify `\n` follows.
fn find_crlf(buf: &[u8]) -> Option<usize> {
    let mut offset = 0;
    while offset + 1 < buf.len() {
        match memchr(b'\r', &buf[offset..]) {
            Some(rel) => {
                let abs = offset + rel;
                if abs + 1 < buf.len() && buf[abs + 1] == b'\n' {
                    return Some(abs);
                }
                offset = abs + 1;
            }
            None => return None,
        }
    }
    None
}

/// Parse an unsigned ASCII decimal. Rejects empty input, non-digits, and
/// values that overflow u64.
fn ascii_uint(digits: &[u8]) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }
    let mut value: u64 = 0;
    for &b in digits {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value
            .checked_mul(10)?
            .checked_add(u64::from(b - b'0'))?;
    }
    Some(value)
}
