//! Reverse command lookup using compile-time perfect hashing.
//!
//! Maps canonical command names back to their binary identifiers with no
//! allocation. The forward direction (opcode to name) lives in the dispatch
//! table; this side exists for diagnostics, tests, and tooling that starts
//! from a textual command, e.g. converting a captured text-RESP workload into
//! binary frames.

use super::{
    bitmap, cluster, connection, geo, hashes, hyperloglog, keys, lists, pubsub, scripting,
    server_cmds, sets, sorted_sets, streams, strings, transactions,
};
use phf::phf_map;

/// Longest registered command name, dotted module names included.
const MAX_NAME_LEN: usize = 32;

/// Core command names to opcodes. Keys are canonical uppercase.
static OPCODES: phf::Map<&'static [u8], u16> = phf_map! {
    // Strings
    b"GET" => strings::GET,
    b"SET" => strings::SET,
    b"APPEND" => strings::APPEND,
    b"DECR" => strings::DECR,
    b"DECRBY" => strings::DECRBY,
    b"GETDEL" => strings::GETDEL,
    b"GETEX" => strings::GETEX,
    b"GETRANGE" => strings::GETRANGE,
    b"GETSET" => strings::GETSET,
    b"INCR" => strings::INCR,
    b"INCRBY" => strings::INCRBY,
    b"INCRBYFLOAT" => strings::INCRBYFLOAT,
    b"MGET" => strings::MGET,
    b"MSET" => strings::MSET,
    b"MSETNX" => strings::MSETNX,
    b"PSETEX" => strings::PSETEX,
    b"SETEX" => strings::SETEX,
    b"SETNX" => strings::SETNX,
    b"SETRANGE" => strings::SETRANGE,
    b"STRLEN" => strings::STRLEN,
    b"SUBSTR" => strings::SUBSTR,
    b"LCS" => strings::LCS,
    b"DELIFEQ" => strings::DELIFEQ,
    // Lists
    b"LPUSH" => lists::LPUSH,
    b"RPUSH" => lists::RPUSH,
    b"LPOP" => lists::LPOP,
    b"RPOP" => lists::RPOP,
    b"LLEN" => lists::LLEN,
    b"LRANGE" => lists::LRANGE,
    b"LINDEX" => lists::LINDEX,
    b"LSET" => lists::LSET,
    b"LREM" => lists::LREM,
    b"LTRIM" => lists::LTRIM,
    b"LINSERT" => lists::LINSERT,
    b"LPUSHX" => lists::LPUSHX,
    b"RPUSHX" => lists::RPUSHX,
    b"RPOPLPUSH" => lists::RPOPLPUSH,
    b"LMOVE" => lists::LMOVE,
    b"LMPOP" => lists::LMPOP,
    b"LPOS" => lists::LPOS,
    b"BLPOP" => lists::BLPOP,
    b"BRPOP" => lists::BRPOP,
    b"BRPOPLPUSH" => lists::BRPOPLPUSH,
    b"BLMOVE" => lists::BLMOVE,
    b"BLMPOP" => lists::BLMPOP,
    // Sets
    b"SADD" => sets::SADD,
    b"SREM" => sets::SREM,
    b"SMEMBERS" => sets::SMEMBERS,
    b"SISMEMBER" => sets::SISMEMBER,
    b"SCARD" => sets::SCARD,
    b"SPOP" => sets::SPOP,
    b"SRANDMEMBER" => sets::SRANDMEMBER,
    b"SINTER" => sets::SINTER,
    b"SINTERSTORE" => sets::SINTERSTORE,
    b"SUNION" => sets::SUNION,
    b"SUNIONSTORE" => sets::SUNIONSTORE,
    b"SDIFF" => sets::SDIFF,
    b"SDIFFSTORE" => sets::SDIFFSTORE,
    b"SMOVE" => sets::SMOVE,
    b"SSCAN" => sets::SSCAN,
    b"SINTERCARD" => sets::SINTERCARD,
    b"SMISMEMBER" => sets::SMISMEMBER,
    // Sorted sets
    b"ZADD" => sorted_sets::ZADD,
    b"ZREM" => sorted_sets::ZREM,
    b"ZCARD" => sorted_sets::ZCARD,
    b"ZCOUNT" => sorted_sets::ZCOUNT,
    b"ZINCRBY" => sorted_sets::ZINCRBY,
    b"ZRANGE" => sorted_sets::ZRANGE,
    b"ZRANGEBYSCORE" => sorted_sets::ZRANGEBYSCORE,
    b"ZRANGEBYLEX" => sorted_sets::ZRANGEBYLEX,
    b"ZREVRANGE" => sorted_sets::ZREVRANGE,
    b"ZREVRANGEBYSCORE" => sorted_sets::ZREVRANGEBYSCORE,
    b"ZREVRANGEBYLEX" => sorted_sets::ZREVRANGEBYLEX,
    b"ZRANK" => sorted_sets::ZRANK,
    b"ZREVRANK" => sorted_sets::ZREVRANK,
    b"ZSCORE" => sorted_sets::ZSCORE,
    b"ZMSCORE" => sorted_sets::ZMSCORE,
    b"ZREMRANGEBYRANK" => sorted_sets::ZREMRANGEBYRANK,
    b"ZREMRANGEBYSCORE" => sorted_sets::ZREMRANGEBYSCORE,
    b"ZREMRANGEBYLEX" => sorted_sets::ZREMRANGEBYLEX,
    b"ZLEXCOUNT" => sorted_sets::ZLEXCOUNT,
    b"ZPOPMIN" => sorted_sets::ZPOPMIN,
    b"ZPOPMAX" => sorted_sets::ZPOPMAX,
    b"BZPOPMIN" => sorted_sets::BZPOPMIN,
    b"BZPOPMAX" => sorted_sets::BZPOPMAX,
    b"ZRANDMEMBER" => sorted_sets::ZRANDMEMBER,
    b"ZDIFF" => sorted_sets::ZDIFF,
    b"ZDIFFSTORE" => sorted_sets::ZDIFFSTORE,
    b"ZINTER" => sorted_sets::ZINTER,
    b"ZINTERSTORE" => sorted_sets::ZINTERSTORE,
    b"ZINTERCARD" => sorted_sets::ZINTERCARD,
    b"ZUNION" => sorted_sets::ZUNION,
    b"ZUNIONSTORE" => sorted_sets::ZUNIONSTORE,
    b"ZSCAN" => sorted_sets::ZSCAN,
    b"ZMPOP" => sorted_sets::ZMPOP,
    b"BZMPOP" => sorted_sets::BZMPOP,
    b"ZRANGESTORE" => sorted_sets::ZRANGESTORE,
    // Hashes
    b"HSET" => hashes::HSET,
    b"HGET" => hashes::HGET,
    b"HMSET" => hashes::HMSET,
    b"HMGET" => hashes::HMGET,
    b"HGETALL" => hashes::HGETALL,
    b"HDEL" => hashes::HDEL,
    b"HEXISTS" => hashes::HEXISTS,
    b"HINCRBY" => hashes::HINCRBY,
    b"HINCRBYFLOAT" => hashes::HINCRBYFLOAT,
    b"HKEYS" => hashes::HKEYS,
    b"HVALS" => hashes::HVALS,
    b"HLEN" => hashes::HLEN,
    b"HSETNX" => hashes::HSETNX,
    b"HSTRLEN" => hashes::HSTRLEN,
    b"HSCAN" => hashes::HSCAN,
    b"HRANDFIELD" => hashes::HRANDFIELD,
    b"HEXPIRE" => hashes::HEXPIRE,
    b"HEXPIREAT" => hashes::HEXPIREAT,
    b"HEXPIRETIME" => hashes::HEXPIRETIME,
    b"HPEXPIRE" => hashes::HPEXPIRE,
    b"HPEXPIREAT" => hashes::HPEXPIREAT,
    b"HPEXPIRETIME" => hashes::HPEXPIRETIME,
    b"HPTTL" => hashes::HPTTL,
    b"HTTL" => hashes::HTTL,
    b"HPERSIST" => hashes::HPERSIST,
    b"HGETEX" => hashes::HGETEX,
    b"HSETEX" => hashes::HSETEX,
    // Bitmaps
    b"SETBIT" => bitmap::SETBIT,
    b"GETBIT" => bitmap::GETBIT,
    b"BITCOUNT" => bitmap::BITCOUNT,
    b"BITPOS" => bitmap::BITPOS,
    b"BITOP" => bitmap::BITOP,
    b"BITFIELD" => bitmap::BITFIELD,
    b"BITFIELD_RO" => bitmap::BITFIELD_RO,
    // HyperLogLog
    b"PFADD" => hyperloglog::PFADD,
    b"PFCOUNT" => hyperloglog::PFCOUNT,
    b"PFMERGE" => hyperloglog::PFMERGE,
    b"PFDEBUG" => hyperloglog::PFDEBUG,
    b"PFSELFTEST" => hyperloglog::PFSELFTEST,
    // Geo
    b"GEOADD" => geo::GEOADD,
    b"GEODIST" => geo::GEODIST,
    b"GEOHASH" => geo::GEOHASH,
    b"GEOPOS" => geo::GEOPOS,
    b"GEORADIUS" => geo::GEORADIUS,
    b"GEORADIUSBYMEMBER" => geo::GEORADIUSBYMEMBER,
    b"GEORADIUS_RO" => geo::GEORADIUS_RO,
    b"GEORADIUSBYMEMBER_RO" => geo::GEORADIUSBYMEMBER_RO,
    b"GEOSEARCH" => geo::GEOSEARCH,
    b"GEOSEARCHSTORE" => geo::GEOSEARCHSTORE,
    // Streams
    b"XADD" => streams::XADD,
    b"XLEN" => streams::XLEN,
    b"XRANGE" => streams::XRANGE,
    b"XREVRANGE" => streams::XREVRANGE,
    b"XREAD" => streams::XREAD,
    b"XREADGROUP" => streams::XREADGROUP,
    b"XDEL" => streams::XDEL,
    b"XTRIM" => streams::XTRIM,
    b"XACK" => streams::XACK,
    b"XPENDING" => streams::XPENDING,
    b"XCLAIM" => streams::XCLAIM,
    b"XAUTOCLAIM" => streams::XAUTOCLAIM,
    b"XINFO" => streams::XINFO,
    b"XGROUP" => streams::XGROUP,
    b"XSETID" => streams::XSETID,
    // Pub/Sub
    b"PUBLISH" => pubsub::PUBLISH,
    b"SUBSCRIBE" => pubsub::SUBSCRIBE,
    b"UNSUBSCRIBE" => pubsub::UNSUBSCRIBE,
    b"PSUBSCRIBE" => pubsub::PSUBSCRIBE,
    b"PUNSUBSCRIBE" => pubsub::PUNSUBSCRIBE,
    b"PUBSUB" => pubsub::PUBSUB,
    b"SPUBLISH" => pubsub::SPUBLISH,
    b"SSUBSCRIBE" => pubsub::SSUBSCRIBE,
    b"SUNSUBSCRIBE" => pubsub::SUNSUBSCRIBE,
    // Transactions
    b"MULTI" => transactions::MULTI,
    b"EXEC" => transactions::EXEC,
    b"DISCARD" => transactions::DISCARD,
    b"WATCH" => transactions::WATCH,
    b"UNWATCH" => transactions::UNWATCH,
    // Scripting
    b"EVAL" => scripting::EVAL,
    b"EVALSHA" => scripting::EVALSHA,
    b"EVAL_RO" => scripting::EVAL_RO,
    b"EVALSHA_RO" => scripting::EVALSHA_RO,
    b"SCRIPT" => scripting::SCRIPT,
    b"FCALL" => scripting::FCALL,
    b"FCALL_RO" => scripting::FCALL_RO,
    b"FUNCTION" => scripting::FUNCTION,
    // Generic keys
    b"DEL" => keys::DEL,
    b"UNLINK" => keys::UNLINK,
    b"EXISTS" => keys::EXISTS,
    b"EXPIRE" => keys::EXPIRE,
    b"EXPIREAT" => keys::EXPIREAT,
    b"EXPIRETIME" => keys::EXPIRETIME,
    b"PEXPIRE" => keys::PEXPIRE,
    b"PEXPIREAT" => keys::PEXPIREAT,
    b"PEXPIRETIME" => keys::PEXPIRETIME,
    b"TTL" => keys::TTL,
    b"PTTL" => keys::PTTL,
    b"PERSIST" => keys::PERSIST,
    b"KEYS" => keys::KEYS,
    b"SCAN" => keys::SCAN,
    b"RANDOMKEY" => keys::RANDOMKEY,
    b"RENAME" => keys::RENAME,
    b"RENAMENX" => keys::RENAMENX,
    b"TYPE" => keys::TYPE,
    b"DUMP" => keys::DUMP,
    b"RESTORE" => keys::RESTORE,
    b"MIGRATE" => keys::MIGRATE,
    b"MOVE" => keys::MOVE,
    b"COPY" => keys::COPY,
    b"SORT" => keys::SORT,
    b"SORT_RO" => keys::SORT_RO,
    b"TOUCH" => keys::TOUCH,
    b"OBJECT" => keys::OBJECT,
    b"WAIT" => keys::WAIT,
    b"WAITAOF" => keys::WAITAOF,
    // Connection
    b"PING" => connection::PING,
    b"ECHO" => connection::ECHO,
    b"AUTH" => connection::AUTH,
    b"SELECT" => connection::SELECT,
    b"QUIT" => connection::QUIT,
    b"HELLO" => connection::HELLO,
    b"RESET" => connection::RESET,
    b"CLIENT" => connection::CLIENT,
    // Cluster
    b"CLUSTER" => cluster::CLUSTER,
    b"READONLY" => cluster::READONLY,
    b"READWRITE" => cluster::READWRITE,
    b"ASKING" => cluster::ASKING,
    // Server
    b"DBSIZE" => server_cmds::DBSIZE,
    b"FLUSHDB" => server_cmds::FLUSHDB,
    b"FLUSHALL" => server_cmds::FLUSHALL,
    b"SAVE" => server_cmds::SAVE,
    b"BGSAVE" => server_cmds::BGSAVE,
    b"BGREWRITEAOF" => server_cmds::BGREWRITEAOF,
    b"LASTSAVE" => server_cmds::LASTSAVE,
    b"SHUTDOWN" => server_cmds::SHUTDOWN,
    b"INFO" => server_cmds::INFO,
    b"CONFIG" => server_cmds::CONFIG,
    b"COMMAND" => server_cmds::COMMAND,
    b"TIME" => server_cmds::TIME,
    b"ROLE" => server_cmds::ROLE,
    b"REPLICAOF" => server_cmds::REPLICAOF,
    b"SLAVEOF" => server_cmds::SLAVEOF,
    b"MONITOR" => server_cmds::MONITOR,
    b"DEBUG" => server_cmds::DEBUG,
    b"SYNC" => server_cmds::SYNC,
    b"PSYNC" => server_cmds::PSYNC,
    b"REPLCONF" => server_cmds::REPLCONF,
    b"SLOWLOG" => server_cmds::SLOWLOG,
    b"LATENCY" => server_cmds::LATENCY,
    b"MEMORY" => server_cmds::MEMORY,
    b"MODULE" => server_cmds::MODULE_CMD,
    b"ACL" => server_cmds::ACL,
    b"FAILOVER" => server_cmds::FAILOVER,
    b"SWAPDB" => server_cmds::SWAPDB,
    b"LOLWUT" => server_cmds::LOLWUT,
    b"RESTORE-ASKING" => server_cmds::RESTORE_ASKING,
    b"COMMANDLOG" => server_cmds::COMMANDLOG,
};

/// Module command names to 4-byte subcommand words
/// (`module_id << 16 | command_id`).
static MODULE_SUBCOMMANDS: phf::Map<&'static [u8], u32> = phf_map! {
    b"JSON.SET" => 0x0000_0000,
    b"JSON.GET" => 0x0000_0001,
    b"JSON.MGET" => 0x0000_0002,
    b"JSON.MSET" => 0x0000_0003,
    b"JSON.DEL" => 0x0000_0004,
    b"JSON.FORGET" => 0x0000_0005,
    b"JSON.TYPE" => 0x0000_0006,
    b"JSON.CLEAR" => 0x0000_0007,
    b"JSON.ARRAPPEND" => 0x0000_0008,
    b"JSON.ARRINDEX" => 0x0000_0009,
    b"JSON.ARRINSERT" => 0x0000_000A,
    b"JSON.ARRLEN" => 0x0000_000B,
    b"JSON.ARRPOP" => 0x0000_000C,
    b"JSON.ARRTRIM" => 0x0000_000D,
    b"JSON.OBJKEYS" => 0x0000_000E,
    b"JSON.OBJLEN" => 0x0000_000F,
    b"JSON.STRLEN" => 0x0000_0010,
    b"JSON.STRAPPEND" => 0x0000_0011,
    b"JSON.NUMINCRBY" => 0x0000_0012,
    b"JSON.NUMMULTBY" => 0x0000_0013,
    b"JSON.TOGGLE" => 0x0000_0014,
    b"JSON.DEBUG" => 0x0000_0015,
    b"JSON.RESP" => 0x0000_0016,
    b"BF.ADD" => 0x0001_0000,
    b"BF.MADD" => 0x0001_0001,
    b"BF.EXISTS" => 0x0001_0002,
    b"BF.MEXISTS" => 0x0001_0003,
    b"BF.RESERVE" => 0x0001_0004,
    b"BF.INSERT" => 0x0001_0005,
    b"BF.CARD" => 0x0001_0006,
    b"BF.INFO" => 0x0001_0007,
    b"BF.LOAD" => 0x0001_0008,
    b"FT.CREATE" => 0x0002_0000,
    b"FT.SEARCH" => 0x0002_0001,
    b"FT.DROPINDEX" => 0x0002_0002,
    b"FT.INFO" => 0x0002_0003,
    b"FT._LIST" => 0x0002_0004,
};

/// Core opcode for a command name, case-insensitive.
pub fn opcode_for_name(name: &[u8]) -> Option<u16> {
    with_uppercase(name, |upper| OPCODES.get(upper).copied())
}

/// Module subcommand word for a dotted module command name, case-insensitive.
pub fn module_subcommand_for_name(name: &[u8]) -> Option<u32> {
    with_uppercase(name, |upper| MODULE_SUBCOMMANDS.get(upper).copied())
}

/// Uppercase `name` into a stack buffer and run the lookup on it.
fn with_uppercase<T>(name: &[u8], lookup: impl FnOnce(&[u8]) -> Option<T>) -> Option<T> {
    if name.len() > MAX_NAME_LEN {
        return None;
    }
    let mut upper = [0u8; MAX_NAME_LEN];
    for (dst, src) in upper.iter_mut().zip(name) {
        *dst = src.to_ascii_uppercase();
    }
    lookup(&upper[..name.len()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcodes::{self, modules};

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(opcode_for_name(b"get"), Some(strings::GET));
        assert_eq!(opcode_for_name(b"GeT"), Some(strings::GET));
        assert_eq!(opcode_for_name(b"ZRANGEBYSCORE"), Some(sorted_sets::ZRANGEBYSCORE));
        assert_eq!(opcode_for_name(b"NOSUCHCOMMAND"), None);
        assert_eq!(opcode_for_name(&[b'A'; 64]), None);
    }

    #[test]
    fn test_module_lookup() {
        assert_eq!(module_subcommand_for_name(b"json.set"), Some(0));
        assert_eq!(module_subcommand_for_name(b"FT.SEARCH"), Some(0x0002_0001));
        assert_eq!(module_subcommand_for_name(b"JSON.NOPE"), None);
    }

    #[test]
    fn test_reverse_map_agrees_with_table() {
        // Every phf entry must point at a registered opcode whose canonical
        // name round-trips back to the entry's key.
        for (name, &opcode) in OPCODES.entries() {
            assert_eq!(
                opcodes::name_for(opcode).as_bytes(),
                *name,
                "mismatch at {opcode:#06x}"
            );
        }
        assert_eq!(OPCODES.len(), opcodes::table().len());
    }

    #[test]
    fn test_module_map_agrees_with_names() {
        for (name, &sub) in MODULE_SUBCOMMANDS.entries() {
            let module_id = (sub >> 16) as u16;
            let command_id = (sub & 0xFFFF) as u16;
            assert_eq!(modules::name_for(module_id, command_id).as_bytes(), *name);
        }
    }
}
