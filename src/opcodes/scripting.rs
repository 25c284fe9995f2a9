//! Scripting and function command opcodes (`0x0260`-`0x02BF`).

use super::{Category, OpcodeTable};
use crate::protocol::grammar::{self, Field, Grammar};

pub const EVAL: u16 = 0x0260;
pub const EVALSHA: u16 = 0x0261;
pub const EVAL_RO: u16 = 0x0262;
pub const EVALSHA_RO: u16 = 0x0263;
pub const SCRIPT: u16 = 0x0264;
pub const FCALL: u16 = 0x0265;
pub const FCALL_RO: u16 = 0x0266;
pub const FUNCTION: u16 = 0x0267;

/// `[script:long, count_u16_then [key], count_u16_then [arg]]`
const EVAL_PAYLOAD: Grammar = &[
    Field::Long,
    Field::Count(&[Field::Short]),
    Field::Count(&[Field::Short]),
];

/// `[sha1_or_name:short, count_u16_then [key], count_u16_then [arg]]`
const EVALSHA_PAYLOAD: Grammar = &[
    Field::Short,
    Field::Count(&[Field::Short]),
    Field::Count(&[Field::Short]),
];

pub(crate) fn register(table: &mut OpcodeTable) {
    table.insert(EVAL, "EVAL", Category::Scripting, EVAL_PAYLOAD);
    table.insert(EVALSHA, "EVALSHA", Category::Scripting, EVALSHA_PAYLOAD);
    table.insert(EVAL_RO, "EVAL_RO", Category::Scripting, EVAL_PAYLOAD);
    table.insert(EVALSHA_RO, "EVALSHA_RO", Category::Scripting, EVALSHA_PAYLOAD);
    table.insert(SCRIPT, "SCRIPT", Category::Scripting, grammar::SUBCOMMAND);
    table.insert(FCALL, "FCALL", Category::Scripting, EVALSHA_PAYLOAD);
    table.insert(FCALL_RO, "FCALL_RO", Category::Scripting, EVALSHA_PAYLOAD);
    table.insert(FUNCTION, "FUNCTION", Category::Scripting, grammar::SUBCOMMAND);
}
