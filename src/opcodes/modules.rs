//! Module sub-dispatch for opcode `0xF000`.
//!
//! The 4-byte subcommand word selects a module (high u16) and a command
//! within it (low u16). Three modules are currently assigned. Commands
//! without a dedicated grammar fall back to the single-key shape so the
//! frame can still be framed; the same lenient fallback applies to modules
//! this build has never heard of.

use crate::protocol::grammar::{self, Field, Grammar};

/// JSON document module.
pub const MODULE_JSON: u16 = 0x0000;
/// Bloom filter module.
pub const MODULE_BF: u16 = 0x0001;
/// Full-text search module.
pub const MODULE_FT: u16 = 0x0002;

/// JSON command identifiers.
pub mod json {
    pub const SET: u16 = 0x0000;
    pub const GET: u16 = 0x0001;
    pub const MGET: u16 = 0x0002;
    pub const MSET: u16 = 0x0003;
    pub const DEL: u16 = 0x0004;
    pub const FORGET: u16 = 0x0005;
    pub const TYPE: u16 = 0x0006;
    pub const CLEAR: u16 = 0x0007;
    pub const ARRAPPEND: u16 = 0x0008;
    pub const ARRINDEX: u16 = 0x0009;
    pub const ARRINSERT: u16 = 0x000A;
    pub const ARRLEN: u16 = 0x000B;
    pub const ARRPOP: u16 = 0x000C;
    pub const ARRTRIM: u16 = 0x000D;
    pub const OBJKEYS: u16 = 0x000E;
    pub const OBJLEN: u16 = 0x000F;
    pub const STRLEN: u16 = 0x0010;
    pub const STRAPPEND: u16 = 0x0011;
    pub const NUMINCRBY: u16 = 0x0012;
    pub const NUMMULTBY: u16 = 0x0013;
    pub const TOGGLE: u16 = 0x0014;
    pub const DEBUG: u16 = 0x0015;
    pub const RESP: u16 = 0x0016;
}

/// Bloom filter command identifiers.
pub mod bf {
    pub const ADD: u16 = 0x0000;
    pub const MADD: u16 = 0x0001;
    pub const EXISTS: u16 = 0x0002;
    pub const MEXISTS: u16 = 0x0003;
    pub const RESERVE: u16 = 0x0004;
    pub const INSERT: u16 = 0x0005;
    pub const CARD: u16 = 0x0006;
    pub const INFO: u16 = 0x0007;
    pub const LOAD: u16 = 0x0008;
}

/// Search command identifiers.
pub mod ft {
    pub const CREATE: u16 = 0x0000;
    pub const SEARCH: u16 = 0x0001;
    pub const DROPINDEX: u16 = 0x0002;
    pub const INFO: u16 = 0x0003;
    pub const LIST: u16 = 0x0004;
}

/// `[key, path, value:long, flags:fixed(1)]`
const JSON_SET_PAYLOAD: Grammar = &[Field::Short, Field::Short, Field::Long, Field::Fixed(1)];

/// `[key, count_u16_then [path]]`
const JSON_GET_PAYLOAD: Grammar = &[Field::Short, Field::Count(&[Field::Short])];

/// Payload grammar for a module command.
///
/// Total: every `(module_id, command_id)` pair resolves to a grammar, so a
/// module frame never fails dispatch.
pub fn grammar_for(module_id: u16, command_id: u16) -> Grammar {
    match (module_id, command_id) {
        (MODULE_JSON, json::SET) => JSON_SET_PAYLOAD,
        (MODULE_JSON, json::GET) => JSON_GET_PAYLOAD,
        (MODULE_BF, bf::ADD) | (MODULE_BF, bf::EXISTS) => grammar::KEY_KEY,
        (MODULE_FT, ft::SEARCH) => grammar::KEY_KEY,
        _ => grammar::KEY,
    }
}

/// Canonical dotted name for a module command, `"UNKNOWN"` when unassigned.
pub fn name_for(module_id: u16, command_id: u16) -> &'static str {
    match module_id {
        MODULE_JSON => match command_id {
            json::SET => "JSON.SET",
            json::GET => "JSON.GET",
            json::MGET => "JSON.MGET",
            json::MSET => "JSON.MSET",
            json::DEL => "JSON.DEL",
            json::FORGET => "JSON.FORGET",
            json::TYPE => "JSON.TYPE",
            json::CLEAR => "JSON.CLEAR",
            json::ARRAPPEND => "JSON.ARRAPPEND",
            json::ARRINDEX => "JSON.ARRINDEX",
            json::ARRINSERT => "JSON.ARRINSERT",
            json::ARRLEN => "JSON.ARRLEN",
            json::ARRPOP => "JSON.ARRPOP",
            json::ARRTRIM => "JSON.ARRTRIM",
            json::OBJKEYS => "JSON.OBJKEYS",
            json::OBJLEN => "JSON.OBJLEN",
            json::STRLEN => "JSON.STRLEN",
            json::STRAPPEND => "JSON.STRAPPEND",
            json::NUMINCRBY => "JSON.NUMINCRBY",
            json::NUMMULTBY => "JSON.NUMMULTBY",
            json::TOGGLE => "JSON.TOGGLE",
            json::DEBUG => "JSON.DEBUG",
            json::RESP => "JSON.RESP",
            _ => "UNKNOWN",
        },
        MODULE_BF => match command_id {
            bf::ADD => "BF.ADD",
            bf::MADD => "BF.MADD",
            bf::EXISTS => "BF.EXISTS",
            bf::MEXISTS => "BF.MEXISTS",
            bf::RESERVE => "BF.RESERVE",
            bf::INSERT => "BF.INSERT",
            bf::CARD => "BF.CARD",
            bf::INFO => "BF.INFO",
            bf::LOAD => "BF.LOAD",
            _ => "UNKNOWN",
        },
        MODULE_FT => match command_id {
            ft::CREATE => "FT.CREATE",
            ft::SEARCH => "FT.SEARCH",
            ft::DROPINDEX => "FT.DROPINDEX",
            ft::INFO => "FT.INFO",
            ft::LIST => "FT._LIST",
            _ => "UNKNOWN",
        },
        _ => "UNKNOWN",
    }
}
