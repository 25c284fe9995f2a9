//! HyperLogLog command opcodes (`0x0160`-`0x017F`).

use super::{Category, OpcodeTable};
use crate::protocol::grammar;

pub const PFADD: u16 = 0x0160;
pub const PFCOUNT: u16 = 0x0161;
pub const PFMERGE: u16 = 0x0162;
pub const PFDEBUG: u16 = 0x0163;
pub const PFSELFTEST: u16 = 0x0164;

pub(crate) fn register(table: &mut OpcodeTable) {
    table.insert(PFADD, "PFADD", Category::HyperLogLog, grammar::KEY_ELEMS);
    table.insert(PFCOUNT, "PFCOUNT", Category::HyperLogLog, grammar::KEY_LIST);
    table.insert(PFMERGE, "PFMERGE", Category::HyperLogLog, grammar::KEY_ELEMS);
    table.insert(PFDEBUG, "PFDEBUG", Category::HyperLogLog, grammar::KEY_KEY);
    table.insert(PFSELFTEST, "PFSELFTEST", Category::HyperLogLog, grammar::EMPTY);
}
