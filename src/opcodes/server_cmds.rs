//! Server management opcodes (`0x03C0`-`0x04FF`).

use super::{Category, OpcodeTable};
use crate::protocol::grammar::{self, Field, Grammar};

pub const DBSIZE: u16 = 0x03C0;
pub const FLUSHDB: u16 = 0x03C1;
pub const FLUSHALL: u16 = 0x03C2;
pub const SAVE: u16 = 0x03C3;
pub const BGSAVE: u16 = 0x03C4;
pub const BGREWRITEAOF: u16 = 0x03C5;
pub const LASTSAVE: u16 = 0x03C6;
pub const SHUTDOWN: u16 = 0x03C7;
pub const INFO: u16 = 0x03C8;
pub const CONFIG: u16 = 0x03C9;
pub const COMMAND: u16 = 0x03CA;
pub const TIME: u16 = 0x03CB;
pub const ROLE: u16 = 0x03CC;
pub const REPLICAOF: u16 = 0x03CD;
pub const SLAVEOF: u16 = 0x03CE;
pub const MONITOR: u16 = 0x03CF;
pub const DEBUG: u16 = 0x03D0;
pub const SYNC: u16 = 0x03D1;
pub const PSYNC: u16 = 0x03D2;
pub const REPLCONF: u16 = 0x03D3;
pub const SLOWLOG: u16 = 0x03D4;
pub const LATENCY: u16 = 0x03D5;
pub const MEMORY: u16 = 0x03D6;
pub const MODULE_CMD: u16 = 0x03D7;
pub const ACL: u16 = 0x03D8;
pub const FAILOVER: u16 = 0x03D9;
pub const SWAPDB: u16 = 0x03DA;
pub const LOLWUT: u16 = 0x03DB;
pub const RESTORE_ASKING: u16 = 0x03DC;
pub const COMMANDLOG: u16 = 0x03DD;

/// `[host, port:fixed(2)]`
const HOST_PORT: Grammar = &[Field::Short, Field::Fixed(2)];

/// `[replicationid, offset:fixed(8)]`
const PSYNC_PAYLOAD: Grammar = &[Field::Short, Field::Fixed(8)];

/// `[db1:fixed(2) + db2:fixed(2)]`
const SWAPDB_PAYLOAD: Grammar = &[Field::Fixed(4)];

/// `[key, ttl:fixed(8), data:long, flags:fixed(1)]`
const RESTORE_ASKING_PAYLOAD: Grammar = &[
    Field::Short,
    Field::Fixed(8),
    Field::Long,
    Field::Fixed(1),
];

pub(crate) fn register(table: &mut OpcodeTable) {
    table.insert(DBSIZE, "DBSIZE", Category::Server, grammar::EMPTY);
    table.insert(FLUSHDB, "FLUSHDB", Category::Server, grammar::SUBCOMMAND);
    table.insert(FLUSHALL, "FLUSHALL", Category::Server, grammar::SUBCOMMAND);
    table.insert(SAVE, "SAVE", Category::Server, grammar::EMPTY);
    table.insert(BGSAVE, "BGSAVE", Category::Server, grammar::SUBCOMMAND);
    table.insert(BGREWRITEAOF, "BGREWRITEAOF", Category::Server, grammar::EMPTY);
    table.insert(LASTSAVE, "LASTSAVE", Category::Server, grammar::EMPTY);
    table.insert(SHUTDOWN, "SHUTDOWN", Category::Server, grammar::SUBCOMMAND);
    table.insert(INFO, "INFO", Category::Server, grammar::KEY_LIST);
    table.insert(CONFIG, "CONFIG", Category::Server, grammar::SUBCOMMAND);
    table.insert(COMMAND, "COMMAND", Category::Server, grammar::SUBCOMMAND);
    table.insert(TIME, "TIME", Category::Server, grammar::EMPTY);
    table.insert(ROLE, "ROLE", Category::Server, grammar::EMPTY);
    table.insert(REPLICAOF, "REPLICAOF", Category::Server, HOST_PORT);
    table.insert(SLAVEOF, "SLAVEOF", Category::Server, HOST_PORT);
    table.insert(MONITOR, "MONITOR", Category::Server, grammar::EMPTY);
    table.insert(DEBUG, "DEBUG", Category::Server, grammar::SUBCOMMAND);
    table.insert(SYNC, "SYNC", Category::Server, grammar::EMPTY);
    table.insert(PSYNC, "PSYNC", Category::Server, PSYNC_PAYLOAD);
    table.insert(REPLCONF, "REPLCONF", Category::Server, grammar::KEY_LIST);
    table.insert(SLOWLOG, "SLOWLOG", Category::Server, grammar::SUBCOMMAND);
    table.insert(LATENCY, "LATENCY", Category::Server, grammar::SUBCOMMAND);
    table.insert(MEMORY, "MEMORY", Category::Server, grammar::SUBCOMMAND);
    table.insert(MODULE_CMD, "MODULE", Category::Server, grammar::SUBCOMMAND);
    table.insert(ACL, "ACL", Category::Server, grammar::SUBCOMMAND);
    table.insert(FAILOVER, "FAILOVER", Category::Server, grammar::SUBCOMMAND);
    table.insert(SWAPDB, "SWAPDB", Category::Server, SWAPDB_PAYLOAD);
    table.insert(LOLWUT, "LOLWUT", Category::Server, grammar::KEY_LIST);
    table.insert(RESTORE_ASKING, "RESTORE-ASKING", Category::Server, RESTORE_ASKING_PAYLOAD);
    table.insert(COMMANDLOG, "COMMANDLOG", Category::Server, grammar::SUBCOMMAND);
}
