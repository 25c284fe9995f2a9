//! Set command opcodes (`0x0080`-`0x00BF`).

use super::{Category, OpcodeTable};
use crate::protocol::grammar::{self, Field, Grammar};

pub const SADD: u16 = 0x0080;
pub const SREM: u16 = 0x0081;
pub const SMEMBERS: u16 = 0x0082;
pub const SISMEMBER: u16 = 0x0083;
pub const SCARD: u16 = 0x0084;
pub const SPOP: u16 = 0x0085;
pub const SRANDMEMBER: u16 = 0x0086;
pub const SINTER: u16 = 0x0087;
pub const SINTERSTORE: u16 = 0x0088;
pub const SUNION: u16 = 0x0089;
pub const SUNIONSTORE: u16 = 0x008A;
pub const SDIFF: u16 = 0x008B;
pub const SDIFFSTORE: u16 = 0x008C;
pub const SMOVE: u16 = 0x008D;
pub const SSCAN: u16 = 0x008E;
pub const SINTERCARD: u16 = 0x008F;
pub const SMISMEMBER: u16 = 0x0090;

/// `[src, dst, member]`
const SMOVE_PAYLOAD: Grammar = &[Field::Short, Field::Short, Field::Short];

pub(crate) fn register(table: &mut OpcodeTable) {
    table.insert(SADD, "SADD", Category::Set, grammar::KEY_ELEMS);
    table.insert(SREM, "SREM", Category::Set, grammar::KEY_ELEMS);
    table.insert(SMEMBERS, "SMEMBERS", Category::Set, grammar::KEY);
    table.insert(SISMEMBER, "SISMEMBER", Category::Set, grammar::KEY_KEY);
    table.insert(SCARD, "SCARD", Category::Set, grammar::KEY);
    table.insert(SPOP, "SPOP", Category::Set, grammar::KEY);
    table.insert(SRANDMEMBER, "SRANDMEMBER", Category::Set, grammar::KEY);
    table.insert(SINTER, "SINTER", Category::Set, grammar::KEY_LIST);
    table.insert(SINTERSTORE, "SINTERSTORE", Category::Set, grammar::KEY_ELEMS);
    table.insert(SUNION, "SUNION", Category::Set, grammar::KEY_LIST);
    table.insert(SUNIONSTORE, "SUNIONSTORE", Category::Set, grammar::KEY_ELEMS);
    table.insert(SDIFF, "SDIFF", Category::Set, grammar::KEY_LIST);
    table.insert(SDIFFSTORE, "SDIFFSTORE", Category::Set, grammar::KEY_ELEMS);
    table.insert(SMOVE, "SMOVE", Category::Set, SMOVE_PAYLOAD);
    table.insert(SSCAN, "SSCAN", Category::Set, grammar::KEY_CURSOR);
    table.insert(SINTERCARD, "SINTERCARD", Category::Set, grammar::KEY_LIST);
    table.insert(SMISMEMBER, "SMISMEMBER", Category::Set, grammar::KEY_ELEMS);
}
