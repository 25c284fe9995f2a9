//! Transaction command opcodes (`0x0240`-`0x025F`).

use super::{Category, OpcodeTable};
use crate::protocol::grammar;

pub const MULTI: u16 = 0x0240;
pub const EXEC: u16 = 0x0241;
pub const DISCARD: u16 = 0x0242;
pub const WATCH: u16 = 0x0243;
pub const UNWATCH: u16 = 0x0244;

pub(crate) fn register(table: &mut OpcodeTable) {
    table.insert(MULTI, "MULTI", Category::Transaction, grammar::EMPTY);
    table.insert(EXEC, "EXEC", Category::Transaction, grammar::EMPTY);
    table.insert(DISCARD, "DISCARD", Category::Transaction, grammar::EMPTY);
    table.insert(WATCH, "WATCH", Category::Transaction, grammar::KEY_LIST);
    table.insert(UNWATCH, "UNWATCH", Category::Transaction, grammar::EMPTY);
}
