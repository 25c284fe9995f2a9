//! Generic key command opcodes (`0x02C0`-`0x02FF`).

use super::{Category, OpcodeTable};
use crate::protocol::grammar::{self, Field, Grammar};

pub const DEL: u16 = 0x02C0;
pub const UNLINK: u16 = 0x02C1;
pub const EXISTS: u16 = 0x02C2;
pub const EXPIRE: u16 = 0x02C3;
pub const EXPIREAT: u16 = 0x02C4;
pub const EXPIRETIME: u16 = 0x02C5;
pub const PEXPIRE: u16 = 0x02C6;
pub const PEXPIREAT: u16 = 0x02C7;
pub const PEXPIRETIME: u16 = 0x02C8;
pub const TTL: u16 = 0x02C9;
pub const PTTL: u16 = 0x02CA;
pub const PERSIST: u16 = 0x02CB;
pub const KEYS: u16 = 0x02CC;
pub const SCAN: u16 = 0x02CD;
pub const RANDOMKEY: u16 = 0x02CE;
pub const RENAME: u16 = 0x02CF;
pub const RENAMENX: u16 = 0x02D0;
pub const TYPE: u16 = 0x02D1;
pub const DUMP: u16 = 0x02D2;
pub const RESTORE: u16 = 0x02D3;
pub const MIGRATE: u16 = 0x02D4;
pub const MOVE: u16 = 0x02D5;
pub const COPY: u16 = 0x02D6;
pub const SORT: u16 = 0x02D7;
pub const SORT_RO: u16 = 0x02D8;
pub const TOUCH: u16 = 0x02D9;
pub const OBJECT: u16 = 0x02DA;
pub const WAIT: u16 = 0x02DB;
pub const WAITAOF: u16 = 0x02DC;

/// `[key, time:fixed(8) + flags:fixed(1)]`
const KEY_TTL_FLAGS: Grammar = &[Field::Short, Field::Fixed(9)];

/// `[key, ttl:fixed(8), data:long, flags:fixed(1)]`
const RESTORE_PAYLOAD: Grammar = &[Field::Short, Field::Fixed(8), Field::Long, Field::Fixed(1)];

/// `[host, port:fixed(2), key, db:fixed(2) + timeout:fixed(8) + flags:fixed(1)]`
const MIGRATE_PAYLOAD: Grammar = &[
    Field::Short,
    Field::Fixed(2),
    Field::Short,
    Field::Fixed(11),
];

/// `[key, db:fixed(2)]`
const MOVE_PAYLOAD: Grammar = &[Field::Short, Field::Fixed(2)];

/// `[src, dst, db:fixed(2) + replace:fixed(1)]`
const COPY_PAYLOAD: Grammar = &[Field::Short, Field::Short, Field::Fixed(3)];

/// `[subcommand:fixed(1), key]`
const OBJECT_PAYLOAD: Grammar = &[Field::Fixed(1), Field::Short];

/// `[cursor:fixed(8)]`
const SCAN_PAYLOAD: Grammar = &[Field::Fixed(8)];

/// `[numreplicas:fixed(8) + timeout:fixed(8)]`
const WAIT_PAYLOAD: Grammar = &[Field::Fixed(16)];

/// `[numlocal:fixed(8) + numreplicas:fixed(8) + timeout:fixed(8)]`
const WAITAOF_PAYLOAD: Grammar = &[Field::Fixed(24)];

pub(crate) fn register(table: &mut OpcodeTable) {
    table.insert(DEL, "DEL", Category::Key, grammar::KEY_LIST);
    table.insert(UNLINK, "UNLINK", Category::Key, grammar::KEY_LIST);
    table.insert(EXISTS, "EXISTS", Category::Key, grammar::KEY_LIST);
    table.insert(EXPIRE, "EXPIRE", Category::Key, KEY_TTL_FLAGS);
    table.insert(EXPIREAT, "EXPIREAT", Category::Key, KEY_TTL_FLAGS);
    table.insert(EXPIRETIME, "EXPIRETIME", Category::Key, grammar::KEY);
    table.insert(PEXPIRE, "PEXPIRE", Category::Key, KEY_TTL_FLAGS);
    table.insert(PEXPIREAT, "PEXPIREAT", Category::Key, KEY_TTL_FLAGS);
    table.insert(PEXPIRETIME, "PEXPIRETIME", Category::Key, grammar::KEY);
    table.insert(TTL, "TTL", Category::Key, grammar::KEY);
    table.insert(PTTL, "PTTL", Category::Key, grammar::KEY);
    table.insert(PERSIST, "PERSIST", Category::Key, grammar::KEY);
    table.insert(KEYS, "KEYS", Category::Key, grammar::KEY);
    table.insert(SCAN, "SCAN", Category::Key, SCAN_PAYLOAD);
    table.insert(RANDOMKEY, "RANDOMKEY", Category::Key, grammar::EMPTY);
    table.insert(RENAME, "RENAME", Category::Key, grammar::KEY_KEY);
    table.insert(RENAMENX, "RENAMENX", Category::Key, grammar::KEY_KEY);
    table.insert(TYPE, "TYPE", Category::Key, grammar::KEY);
    table.insert(DUMP, "DUMP", Category::Key, grammar::KEY);
    table.insert(RESTORE, "RESTORE", Category::Key, RESTORE_PAYLOAD);
    table.insert(MIGRATE, "MIGRATE", Category::Key, MIGRATE_PAYLOAD);
    table.insert(MOVE, "MOVE", Category::Key, MOVE_PAYLOAD);
    table.insert(COPY, "COPY", Category::Key, COPY_PAYLOAD);
    table.insert(SORT, "SORT", Category::Key, grammar::KEY);
    table.insert(SORT_RO, "SORT_RO", Category::Key, grammar::KEY);
    table.insert(TOUCH, "TOUCH", Category::Key, grammar::KEY_LIST);
    table.insert(OBJECT, "OBJECT", Category::Key, OBJECT_PAYLOAD);
    table.insert(WAIT, "WAIT", Category::Key, WAIT_PAYLOAD);
    table.insert(WAITAOF, "WAITAOF", Category::Key, WAITAOF_PAYLOAD);
}
