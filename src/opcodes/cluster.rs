//! Cluster management opcodes (`0x0340`-`0x03BF`).

use super::{Category, OpcodeTable};
use crate::protocol::grammar;

pub const CLUSTER: u16 = 0x0340;
pub const READONLY: u16 = 0x0341;
pub const READWRITE: u16 = 0x0342;
pub const ASKING: u16 = 0x0343;

pub(crate) fn register(table: &mut OpcodeTable) {
    table.insert(CLUSTER, "CLUSTER", Category::Cluster, grammar::SUBCOMMAND);
    table.insert(READONLY, "READONLY", Category::Cluster, grammar::EMPTY);
    table.insert(READWRITE, "READWRITE", Category::Cluster, grammar::EMPTY);
    table.insert(ASKING, "ASKING", Category::Cluster, grammar::EMPTY);
}
