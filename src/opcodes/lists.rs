//! List command opcodes (`0x0040`-`0x007F`), including the blocking forms.

use super::{Category, OpcodeTable};
use crate::protocol::grammar::{self, Field, Grammar};

pub const LPUSH: u16 = 0x0040;
pub const RPUSH: u16 = 0x0041;
pub const LPOP: u16 = 0x0042;
pub const RPOP: u16 = 0x0043;
pub const LLEN: u16 = 0x0044;
pub const LRANGE: u16 = 0x0045;
pub const LINDEX: u16 = 0x0046;
pub const LSET: u16 = 0x0047;
pub const LREM: u16 = 0x0048;
pub const LTRIM: u16 = 0x0049;
pub const LINSERT: u16 = 0x004A;
pub const LPUSHX: u16 = 0x004B;
pub const RPUSHX: u16 = 0x004C;
pub const RPOPLPUSH: u16 = 0x004D;
pub const LMOVE: u16 = 0x004E;
pub const LMPOP: u16 = 0x004F;
pub const LPOS: u16 = 0x0050;
pub const BLPOP: u16 = 0x0051;
pub const BRPOP: u16 = 0x0052;
pub const BRPOPLPUSH: u16 = 0x0053;
pub const BLMOVE: u16 = 0x0054;
pub const BLMPOP: u16 = 0x0055;

/// `[key, index:fixed(8), element]`
const KEY_INDEX_ELEM: Grammar = &[Field::Short, Field::Fixed(8), Field::Short];

/// `[key, before_after:fixed(1), pivot, element]`
const LINSERT_PAYLOAD: Grammar = &[Field::Short, Field::Fixed(1), Field::Short, Field::Short];

/// `[src, dst, wherefrom:fixed(1) + whereto:fixed(1)]`
const LMOVE_PAYLOAD: Grammar = &[Field::Short, Field::Short, Field::Fixed(2)];

/// `[src, dst, timeout:fixed(8)]`
const BRPOPLPUSH_PAYLOAD: Grammar = &[Field::Short, Field::Short, Field::Fixed(8)];

/// `[src, dst, directions:fixed(2) + timeout:fixed(8)]`
const BLMOVE_PAYLOAD: Grammar = &[Field::Short, Field::Short, Field::Fixed(10)];

/// `[count_u16_then [key], left_right:fixed(1)]`
const LMPOP_PAYLOAD: Grammar = &[Field::Count(&[Field::Short]), Field::Fixed(1)];

/// `[timeout:fixed(8), count_u16_then [key], left_right:fixed(1)]`
const BLMPOP_PAYLOAD: Grammar = &[Field::Fixed(8), Field::Count(&[Field::Short]), Field::Fixed(1)];

/// `[count_u16_then [key], timeout:fixed(8)]`
const KEYS_TIMEOUT: Grammar = &[Field::Count(&[Field::Short]), Field::Fixed(8)];

pub(crate) fn register(table: &mut OpcodeTable) {
    table.insert(LPUSH, "LPUSH", Category::List, grammar::KEY_ELEMS);
    table.insert(RPUSH, "RPUSH", Category::List, grammar::KEY_ELEMS);
    table.insert(LPOP, "LPOP", Category::List, grammar::KEY);
    table.insert(RPOP, "RPOP", Category::List, grammar::KEY);
    table.insert(LLEN, "LLEN", Category::List, grammar::KEY);
    table.insert(LRANGE, "LRANGE", Category::List, grammar::KEY_RANGE);
    table.insert(LINDEX, "LINDEX", Category::List, grammar::KEY_I64);
    table.insert(LSET, "LSET", Category::List, KEY_INDEX_ELEM);
    table.insert(LREM, "LREM", Category::List, KEY_INDEX_ELEM);
    table.insert(LTRIM, "LTRIM", Category::List, grammar::KEY_RANGE);
    table.insert(LINSERT, "LINSERT", Category::List, LINSERT_PAYLOAD);
    table.insert(LPUSHX, "LPUSHX", Category::List, grammar::KEY_ELEMS);
    table.insert(RPUSHX, "RPUSHX", Category::List, grammar::KEY_ELEMS);
    table.insert(RPOPLPUSH, "RPOPLPUSH", Category::List, grammar::KEY_KEY);
    table.insert(LMOVE, "LMOVE", Category::List, LMOVE_PAYLOAD);
    table.insert(LMPOP, "LMPOP", Category::List, LMPOP_PAYLOAD);
    table.insert(LPOS, "LPOS", Category::List, grammar::KEY_KEY);
    table.insert(BLPOP, "BLPOP", Category::List, KEYS_TIMEOUT);
    table.insert(BRPOP, "BRPOP", Category::List, KEYS_TIMEOUT);
    table.insert(BRPOPLPUSH, "BRPOPLPUSH", Category::List, BRPOPLPUSH_PAYLOAD);
    table.insert(BLMOVE, "BLMOVE", Category::List, BLMOVE_PAYLOAD);
    table.insert(BLMPOP, "BLMPOP", Category::List, BLMPOP_PAYLOAD);
}
