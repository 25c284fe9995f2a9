//! Stream command opcodes (`0x01C0`-`0x01FF`).
//!
//! Stream IDs travel as short strings in their textual `ms-seq` form, which
//! keeps them opaque to the core and printable in diagnostics.

use super::{Category, OpcodeTable};
use crate::protocol::grammar::{self, Field, Grammar};

pub const XADD: u16 = 0x01C0;
pub const XLEN: u16 = 0x01C1;
pub const XRANGE: u16 = 0x01C2;
pub const XREVRANGE: u16 = 0x01C3;
pub const XREAD: u16 = 0x01C4;
pub const XREADGROUP: u16 = 0x01C5;
pub const XDEL: u16 = 0x01C6;
pub const XTRIM: u16 = 0x01C7;
pub const XACK: u16 = 0x01C8;
pub const XPENDING: u16 = 0x01C9;
pub const XCLAIM: u16 = 0x01CA;
pub const XAUTOCLAIM: u16 = 0x01CB;
pub const XINFO: u16 = 0x01CC;
pub const XGROUP: u16 = 0x01CD;
pub const XSETID: u16 = 0x01CE;

/// `[key, id, count_u16_then [field, value]]`
const XADD_PAYLOAD: Grammar = &[
    Field::Short,
    Field::Short,
    Field::Count(&[Field::Short, Field::Long]),
];

/// `[key, start, end]`
const XRANGE_PAYLOAD: Grammar = &[Field::Short, Field::Short, Field::Short];

/// `[count_u16_then [key, id]]`
const XREAD_PAYLOAD: Grammar = &[Field::Count(&[Field::Short, Field::Short])];

/// `[group, consumer, count_u16_then [key, id]]`
const XREADGROUP_PAYLOAD: Grammar = &[
    Field::Short,
    Field::Short,
    Field::Count(&[Field::Short, Field::Short]),
];

/// `[key, strategy:fixed(1) + threshold:fixed(8) + flags:fixed(1)]`
const XTRIM_PAYLOAD: Grammar = &[Field::Short, Field::Fixed(10)];

/// `[key, group, count_u16_then [id]]`
const XACK_PAYLOAD: Grammar = &[Field::Short, Field::Short, Field::Count(&[Field::Short])];

/// `[key, group, consumer, min_idle:fixed(8), count_u16_then [id], flags:fixed(1)]`
const XCLAIM_PAYLOAD: Grammar = &[
    Field::Short,
    Field::Short,
    Field::Short,
    Field::Fixed(8),
    Field::Count(&[Field::Short]),
    Field::Fixed(1),
];

/// `[key, group, consumer, min_idle:fixed(8), start]`
const XAUTOCLAIM_PAYLOAD: Grammar = &[
    Field::Short,
    Field::Short,
    Field::Short,
    Field::Fixed(8),
    Field::Short,
];

/// `[subcommand:fixed(1), key]`
const SUBCOMMAND_KEY: Grammar = &[Field::Fixed(1), Field::Short];

pub(crate) fn register(table: &mut OpcodeTable) {
    table.insert(XADD, "XADD", Category::Stream, XADD_PAYLOAD);
    table.insert(XLEN, "XLEN", Category::Stream, grammar::KEY);
    table.insert(XRANGE, "XRANGE", Category::Stream, XRANGE_PAYLOAD);
    table.insert(XREVRANGE, "XREVRANGE", Category::Stream, XRANGE_PAYLOAD);
    table.insert(XREAD, "XREAD", Category::Stream, XREAD_PAYLOAD);
    table.insert(XREADGROUP, "XREADGROUP", Category::Stream, XREADGROUP_PAYLOAD);
    table.insert(XDEL, "XDEL", Category::Stream, grammar::KEY_ELEMS);
    table.insert(XTRIM, "XTRIM", Category::Stream, XTRIM_PAYLOAD);
    table.insert(XACK, "XACK", Category::Stream, XACK_PAYLOAD);
    table.insert(XPENDING, "XPENDING", Category::Stream, grammar::KEY_KEY);
    table.insert(XCLAIM, "XCLAIM", Category::Stream, XCLAIM_PAYLOAD);
    table.insert(XAUTOCLAIM, "XAUTOCLAIM", Category::Stream, XAUTOCLAIM_PAYLOAD);
    table.insert(XINFO, "XINFO", Category::Stream, SUBCOMMAND_KEY);
    table.insert(XGROUP, "XGROUP", Category::Stream, SUBCOMMAND_KEY);
    table.insert(XSETID, "XSETID", Category::Stream, grammar::KEY_KEY);
}
