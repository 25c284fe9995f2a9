//! Hash command opcodes (`0x0100`-`0x013F`), including field expiration.

use super::{Category, OpcodeTable};
use crate::protocol::grammar::{self, Field, Grammar};

pub const HSET: u16 = 0x0100;
pub const HGET: u16 = 0x0101;
pub const HMSET: u16 = 0x0102;
pub const HMGET: u16 = 0x0103;
pub const HGETALL: u16 = 0x0104;
pub const HDEL: u16 = 0x0105;
pub const HEXISTS: u16 = 0x0106;
pub const HINCRBY: u16 = 0x0107;
pub const HINCRBYFLOAT: u16 = 0x0108;
pub const HKEYS: u16 = 0x0109;
pub const HVALS: u16 = 0x010A;
pub const HLEN: u16 = 0x010B;
pub const HSETNX: u16 = 0x010C;
pub const HSTRLEN: u16 = 0x010D;
pub const HSCAN: u16 = 0x010E;
pub const HRANDFIELD: u16 = 0x010F;
pub const HEXPIRE: u16 = 0x0110;
pub const HEXPIREAT: u16 = 0x0111;
pub const HEXPIRETIME: u16 = 0x0112;
pub const HPEXPIRE: u16 = 0x0113;
pub const HPEXPIREAT: u16 = 0x0114;
pub const HPEXPIRETIME: u16 = 0x0115;
pub const HPTTL: u16 = 0x0116;
pub const HTTL: u16 = 0x0117;
pub const HPERSIST: u16 = 0x0118;
pub const HGETEX: u16 = 0x0119;
pub const HSETEX: u16 = 0x011A;

/// `[key, field, increment:fixed(8)]`
const KEY_FIELD_I64: Grammar = &[Field::Short, Field::Short, Field::Fixed(8)];

/// `[key, field, value]`
const HSETNX_PAYLOAD: Grammar = &[Field::Short, Field::Short, Field::Long];

/// `[key, time:fixed(8) + flags:fixed(1), count_u16_then [field]]`
const KEY_TTL_FIELDS: Grammar = &[Field::Short, Field::Fixed(9), Field::Count(&[Field::Short])];

/// `[key, flags:fixed(1) + expiry when flagged, count_u16_then [field]]`
const HGETEX_PAYLOAD: Grammar = &[Field::Short, Field::OptExpiry, Field::Count(&[Field::Short])];

/// `[key, flags:fixed(1) + expiry when flagged, count_u16_then [field, value]]`
const HSETEX_PAYLOAD: Grammar = &[
    Field::Short,
    Field::OptExpiry,
    Field::Count(&[Field::Short, Field::Long]),
];

pub(crate) fn register(table: &mut OpcodeTable) {
    table.insert(HSET, "HSET", Category::Hash, grammar::KEY_PAIRS);
    table.insert(HGET, "HGET", Category::Hash, grammar::KEY_KEY);
    table.insert(HMSET, "HMSET", Category::Hash, grammar::KEY_PAIRS);
    table.insert(HMGET, "HMGET", Category::Hash, grammar::KEY_ELEMS);
    table.insert(HGETALL, "HGETALL", Category::Hash, grammar::KEY);
    table.insert(HDEL, "HDEL", Category::Hash, grammar::KEY_ELEMS);
    table.insert(HEXISTS, "HEXISTS", Category::Hash, grammar::KEY_KEY);
    table.insert(HINCRBY, "HINCRBY", Category::Hash, KEY_FIELD_I64);
    table.insert(HINCRBYFLOAT, "HINCRBYFLOAT", Category::Hash, KEY_FIELD_I64);
    table.insert(HKEYS, "HKEYS", Category::Hash, grammar::KEY);
    table.insert(HVALS, "HVALS", Category::Hash, grammar::KEY);
    table.insert(HLEN, "HLEN", Category::Hash, grammar::KEY);
    table.insert(HSETNX, "HSETNX", Category::Hash, HSETNX_PAYLOAD);
    table.insert(HSTRLEN, "HSTRLEN", Category::Hash, grammar::KEY_KEY);
    table.insert(HSCAN, "HSCAN", Category::Hash, grammar::KEY_CURSOR);
    table.insert(HRANDFIELD, "HRANDFIELD", Category::Hash, grammar::KEY);
    table.insert(HEXPIRE, "HEXPIRE", Category::Hash, KEY_TTL_FIELDS);
    table.insert(HEXPIREAT, "HEXPIREAT", Category::Hash, KEY_TTL_FIELDS);
    table.insert(HEXPIRETIME, "HEXPIRETIME", Category::Hash, grammar::KEY_ELEMS);
    table.insert(HPEXPIRE, "HPEXPIRE", Category::Hash, KEY_TTL_FIELDS);
    table.insert(HPEXPIREAT, "HPEXPIREAT", Category::Hash, KEY_TTL_FIELDS);
    table.insert(HPEXPIRETIME, "HPEXPIRETIME", Category::Hash, grammar::KEY_ELEMS);
    table.insert(HPTTL, "HPTTL", Category::Hash, grammar::KEY_ELEMS);
    table.insert(HTTL, "HTTL", Category::Hash, grammar::KEY_ELEMS);
    table.insert(HPERSIST, "HPERSIST", Category::Hash, grammar::KEY_ELEMS);
    table.insert(HGETEX, "HGETEX", Category::Hash, HGETEX_PAYLOAD);
    table.insert(HSETEX, "HSETEX", Category::Hash, HSETEX_PAYLOAD);
}
