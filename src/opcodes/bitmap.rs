//! Bitmap command opcodes (`0x0140`-`0x015F`).

use super::{Category, OpcodeTable};
use crate::protocol::grammar::{self, Field, Grammar};

pub const SETBIT: u16 = 0x0140;
pub const GETBIT: u16 = 0x0141;
pub const BITCOUNT: u16 = 0x0142;
pub const BITPOS: u16 = 0x0143;
pub const BITOP: u16 = 0x0144;
pub const BITFIELD: u16 = 0x0145;
pub const BITFIELD_RO: u16 = 0x0146;

/// `[key, offset:fixed(8) + value:fixed(1)]`
const SETBIT_PAYLOAD: Grammar = &[Field::Short, Field::Fixed(9)];

/// `[key, bit:fixed(1)]`
const BITPOS_PAYLOAD: Grammar = &[Field::Short, Field::Fixed(1)];

/// `[operation:fixed(1), dst, count_u16_then [key]]`
const BITOP_PAYLOAD: Grammar = &[Field::Fixed(1), Field::Short, Field::Count(&[Field::Short])];

/// `[key, count_u16_then [op:fixed(1), args:fixed(2)]]`
const BITFIELD_PAYLOAD: Grammar = &[
    Field::Short,
    Field::Count(&[Field::Fixed(1), Field::Fixed(2)]),
];

pub(crate) fn register(table: &mut OpcodeTable) {
    table.insert(SETBIT, "SETBIT", Category::Bitmap, SETBIT_PAYLOAD);
    table.insert(GETBIT, "GETBIT", Category::Bitmap, grammar::KEY_I64);
    table.insert(BITCOUNT, "BITCOUNT", Category::Bitmap, grammar::KEY);
    table.insert(BITPOS, "BITPOS", Category::Bitmap, BITPOS_PAYLOAD);
    table.insert(BITOP, "BITOP", Category::Bitmap, BITOP_PAYLOAD);
    table.insert(BITFIELD, "BITFIELD", Category::Bitmap, BITFIELD_PAYLOAD);
    table.insert(BITFIELD_RO, "BITFIELD_RO", Category::Bitmap, BITFIELD_PAYLOAD);
}
