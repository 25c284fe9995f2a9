//! Declarative payload grammars.
//!
//! Every opcode's payload layout is described as a flat list of field
//! descriptors. The reader and writer both walk the same description, which is
//! what keeps the two sides bit-compatible: there is exactly one statement of
//! each command's wire shape, in the dispatch table.

use bitflags::bitflags;

/// One field of an opcode's payload.
///
/// All multi-byte integers are big-endian on the wire. Length-prefix widths
/// are fixed per field kind, never per value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// 2-byte length prefix followed by that many bytes. Surfaced as an
    /// argument slice. Maximum 65,535 bytes by construction.
    Short,

    /// 4-byte length prefix followed by that many bytes. Surfaced as an
    /// argument slice. Capped at [`crate::MAX_BULK_SIZE`].
    Long,

    /// `n` opaque bytes: flags, scores, offsets, timestamps, expiries. The
    /// meaning is command-specific and invisible to the core; the bytes are
    /// consumed and preserved through `raw_payload` for round-trip.
    Fixed(u8),

    /// 2-byte element count followed by that many repetitions of the inner
    /// field sequence.
    Count(&'static [Field]),

    /// 1-byte flag field that gates an optional 8-byte expiry: when
    /// [`ExpiryFlags::EXPIRY`] is set, eight more bytes follow.
    OptExpiry,
}

/// A complete payload description for one opcode.
pub type Grammar = &'static [Field];

bitflags! {
    /// Wire flag bits that are load-bearing for framing.
    ///
    /// Most 1-byte flag fields are opaque to the core, but the expiry
    /// presence bit changes the frame length and therefore must be
    /// interpreted here.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ExpiryFlags: u8 {
        /// An 8-byte expiry follows the flag byte.
        const EXPIRY = 0x01;
    }
}

// Shared grammar shapes. Command-specific layouts live next to their opcode
// registrations in `crate::opcodes`.

/// No payload.
pub const EMPTY: Grammar = &[];

/// `[key:short]`
pub const KEY: Grammar = &[Field::Short];

/// `[key:short, other:short]` — renames, member lookups, two-key forms.
pub const KEY_KEY: Grammar = &[Field::Short, Field::Short];

/// `[key:short, value:long]`
pub const KEY_VALUE: Grammar = &[Field::Short, Field::Long];

/// `[key:short, operand:fixed(8)]` — one signed 64-bit operand.
pub const KEY_I64: Grammar = &[Field::Short, Field::Fixed(8)];

/// `[key:short, start:fixed(8), stop:fixed(8)]`
pub const KEY_RANGE: Grammar = &[Field::Short, Field::Fixed(16)];

/// `[count_u16_then [key:short]]` — multi-key bulk reads and deletes.
pub const KEY_LIST: Grammar = &[Field::Count(&[Field::Short])];

/// `[key:short, count_u16_then [elem:short]]` — pushes, member adds, and
/// destination-plus-sources store forms.
pub const KEY_ELEMS: Grammar = &[Field::Short, Field::Count(&[Field::Short])];

/// `[count_u16_then [key:short, value:long]]` — multi-pair writes.
pub const PAIR_LIST: Grammar = &[Field::Count(&[Field::Short, Field::Long])];

/// `[key:short, count_u16_then [field:short, value:long]]` — hash writes.
pub const KEY_PAIRS: Grammar = &[Field::Short, Field::Count(&[Field::Short, Field::Long])];

/// `[subcommand:fixed(1)]` — container commands whose textual subcommand is
/// collapsed to a single opaque byte.
pub const SUBCOMMAND: Grammar = &[Field::Fixed(1)];

/// `[key:short, cursor:fixed(8)]` — incremental scans.
pub const KEY_CURSOR: Grammar = &[Field::Short, Field::Fixed(8)];

/// Number of arguments one repetition of `fields` surfaces.
///
/// Used by the writer to derive a count from the caller's argument list when
/// serialising a command that was built from scratch. Grammars never nest
/// `Count` inside `Count`, so this does not recurse.
pub(crate) fn args_per_group(fields: &[Field]) -> usize {
    fields
        .iter()
        .filter(|f| matches!(f, Field::Short | Field::Long))
        .count()
}
