//! Sorted-set command opcodes (`0x00C0`-`0x00FF`).
//!
//! `ZADD` parses its full score/member pair list; the scores are opaque
//! 8-byte fields consumed into `raw_payload`, the members surface as
//! arguments.

use super::{Category, OpcodeTable};
use crate::protocol::grammar::{self, Field, Grammar};

pub const ZADD: u16 = 0x00C0;
pub const ZREM: u16 = 0x00C1;
pub const ZCARD: u16 = 0x00C2;
pub const ZCOUNT: u16 = 0x00C3;
pub const ZINCRBY: u16 = 0x00C4;
pub const ZRANGE: u16 = 0x00C5;
pub const ZRANGEBYSCORE: u16 = 0x00C6;
pub const ZRANGEBYLEX: u16 = 0x00C7;
pub const ZREVRANGE: u16 = 0x00C8;
pub const ZREVRANGEBYSCORE: u16 = 0x00C9;
pub const ZREVRANGEBYLEX: u16 = 0x00CA;
pub const ZRANK: u16 = 0x00CB;
pub const ZREVRANK: u16 = 0x00CC;
pub const ZSCORE: u16 = 0x00CD;
pub const ZMSCORE: u16 = 0x00CE;
pub const ZREMRANGEBYRANK: u16 = 0x00CF;
pub const ZREMRANGEBYSCORE: u16 = 0x00D0;
pub const ZREMRANGEBYLEX: u16 = 0x00D1;
pub const ZLEXCOUNT: u16 = 0x00D2;
pub const ZPOPMIN: u16 = 0x00D3;
pub const ZPOPMAX: u16 = 0x00D4;
pub const BZPOPMIN: u16 = 0x00D5;
pub const BZPOPMAX: u16 = 0x00D6;
pub const ZRANDMEMBER: u16 = 0x00D7;
pub const ZDIFF: u16 = 0x00D8;
pub const ZDIFFSTORE: u16 = 0x00D9;
pub const ZINTER: u16 = 0x00DA;
pub const ZINTERSTORE: u16 = 0x00DB;
pub const ZINTERCARD: u16 = 0x00DC;
pub const ZUNION: u16 = 0x00DD;
pub const ZUNIONSTORE: u16 = 0x00DE;
pub const ZSCAN: u16 = 0x00DF;
pub const ZMPOP: u16 = 0x00E0;
pub const BZMPOP: u16 = 0x00E1;
pub const ZRANGESTORE: u16 = 0x00E2;

/// `[key, flags:fixed(1), count_u16_then [score:fixed(8), member]]`
const ZADD_PAYLOAD: Grammar = &[
    Field::Short,
    Field::Fixed(1),
    Field::Count(&[Field::Fixed(8), Field::Short]),
];

/// `[key, min:fixed(8) + max:fixed(8) + flags:fixed(1)]`
const KEY_RANGE_FLAGS: Grammar = &[Field::Short, Field::Fixed(17)];

/// `[key, min, max]` — lexicographic bounds travel as strings.
const KEY_LEX_RANGE: Grammar = &[Field::Short, Field::Short, Field::Short];

/// `[key, increment:fixed(8), member]`
const ZINCRBY_PAYLOAD: Grammar = &[Field::Short, Field::Fixed(8), Field::Short];

/// `[key, member, withscore:fixed(1)]`
const ZRANK_PAYLOAD: Grammar = &[Field::Short, Field::Short, Field::Fixed(1)];

/// `[count_u16_then [key], timeout:fixed(8)]`
const KEYS_TIMEOUT: Grammar = &[Field::Count(&[Field::Short]), Field::Fixed(8)];

/// `[count_u16_then [key], flags:fixed(1)]`
const KEYS_FLAGS: Grammar = &[Field::Count(&[Field::Short]), Field::Fixed(1)];

/// `[dst, count_u16_then [key], flags:fixed(1)]`
const DST_KEYS_FLAGS: Grammar = &[Field::Short, Field::Count(&[Field::Short]), Field::Fixed(1)];

/// `[timeout:fixed(8), count_u16_then [key], min_max:fixed(1)]`
const BZMPOP_PAYLOAD: Grammar = &[Field::Fixed(8), Field::Count(&[Field::Short]), Field::Fixed(1)];

/// `[dst, src, min:fixed(8) + max:fixed(8) + flags:fixed(1)]`
const ZRANGESTORE_PAYLOAD: Grammar = &[Field::Short, Field::Short, Field::Fixed(17)];

pub(crate) fn register(table: &mut OpcodeTable) {
    table.insert(ZADD, "ZADD", Category::SortedSet, ZADD_PAYLOAD);
    table.insert(ZREM, "ZREM", Category::SortedSet, grammar::KEY_ELEMS);
    table.insert(ZCARD, "ZCARD", Category::SortedSet, grammar::KEY);
    table.insert(ZCOUNT, "ZCOUNT", Category::SortedSet, grammar::KEY_RANGE);
    table.insert(ZINCRBY, "ZINCRBY", Category::SortedSet, ZINCRBY_PAYLOAD);
    table.insert(ZRANGE, "ZRANGE", Category::SortedSet, KEY_RANGE_FLAGS);
    table.insert(ZRANGEBYSCORE, "ZRANGEBYSCORE", Category::SortedSet, KEY_RANGE_FLAGS);
    table.insert(ZRANGEBYLEX, "ZRANGEBYLEX", Category::SortedSet, KEY_LEX_RANGE);
    table.insert(ZREVRANGE, "ZREVRANGE", Category::SortedSet, KEY_RANGE_FLAGS);
    table.insert(ZREVRANGEBYSCORE, "ZREVRANGEBYSCORE", Category::SortedSet, KEY_RANGE_FLAGS);
    table.insert(ZREVRANGEBYLEX, "ZREVRANGEBYLEX", Category::SortedSet, KEY_LEX_RANGE);
    table.insert(ZRANK, "ZRANK", Category::SortedSet, ZRANK_PAYLOAD);
    table.insert(ZREVRANK, "ZREVRANK", Category::SortedSet, ZRANK_PAYLOAD);
    table.insert(ZSCORE, "ZSCORE", Category::SortedSet, grammar::KEY_KEY);
    table.insert(ZMSCORE, "ZMSCORE", Category::SortedSet, grammar::KEY_ELEMS);
    table.insert(ZREMRANGEBYRANK, "ZREMRANGEBYRANK", Category::SortedSet, grammar::KEY_RANGE);
    table.insert(ZREMRANGEBYSCORE, "ZREMRANGEBYSCORE", Category::SortedSet, grammar::KEY_RANGE);
    table.insert(ZREMRANGEBYLEX, "ZREMRANGEBYLEX", Category::SortedSet, KEY_LEX_RANGE);
    table.insert(ZLEXCOUNT, "ZLEXCOUNT", Category::SortedSet, KEY_LEX_RANGE);
    table.insert(ZPOPMIN, "ZPOPMIN", Category::SortedSet, grammar::KEY);
    table.insert(ZPOPMAX, "ZPOPMAX", Category::SortedSet, grammar::KEY);
    table.insert(BZPOPMIN, "BZPOPMIN", Category::SortedSet, KEYS_TIMEOUT);
    table.insert(BZPOPMAX, "BZPOPMAX", Category::SortedSet, KEYS_TIMEOUT);
    table.insert(ZRANDMEMBER, "ZRANDMEMBER", Category::SortedSet, grammar::KEY);
    table.insert(ZDIFF, "ZDIFF", Category::SortedSet, KEYS_FLAGS);
    table.insert(ZDIFFSTORE, "ZDIFFSTORE", Category::SortedSet, grammar::KEY_ELEMS);
    table.insert(ZINTER, "ZINTER", Category::SortedSet, KEYS_FLAGS);
    table.insert(ZINTERSTORE, "ZINTERSTORE", Category::SortedSet, DST_KEYS_FLAGS);
    table.insert(ZINTERCARD, "ZINTERCARD", Category::SortedSet, grammar::KEY_LIST);
    table.insert(ZUNION, "ZUNION", Category::SortedSet, KEYS_FLAGS);
    table.insert(ZUNIONSTORE, "ZUNIONSTORE", Category::SortedSet, DST_KEYS_FLAGS);
    table.insert(ZSCAN, "ZSCAN", Category::SortedSet, grammar::KEY_CURSOR);
    table.insert(ZMPOP, "ZMPOP", Category::SortedSet, KEYS_FLAGS);
    table.insert(BZMPOP, "BZMPOP", Category::SortedSet, BZMPOP_PAYLOAD);
    table.insert(ZRANGESTORE, "ZRANGESTORE", Category::SortedSet, ZRANGESTORE_PAYLOAD);
}
