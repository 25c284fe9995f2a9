//! Connection management opcodes (`0x0300`-`0x033F`).

use super::{Category, OpcodeTable};
use crate::protocol::grammar::{self, Field, Grammar};

pub const PING: u16 = 0x0300;
pub const ECHO: u16 = 0x0301;
pub const AUTH: u16 = 0x0302;
pub const SELECT: u16 = 0x0303;
pub const QUIT: u16 = 0x0304;
pub const HELLO: u16 = 0x0305;
pub const RESET: u16 = 0x0306;
pub const CLIENT: u16 = 0x0307;

/// `[dbindex:fixed(2)]`
const SELECT_PAYLOAD: Grammar = &[Field::Fixed(2)];

/// `[protover:fixed(1)]`
const HELLO_PAYLOAD: Grammar = &[Field::Fixed(1)];

pub(crate) fn register(table: &mut OpcodeTable) {
    table.insert(PING, "PING", Category::Connection, grammar::EMPTY);
    table.insert(ECHO, "ECHO", Category::Connection, grammar::KEY);
    table.insert(AUTH, "AUTH", Category::Connection, grammar::KEY);
    table.insert(SELECT, "SELECT", Category::Connection, SELECT_PAYLOAD);
    table.insert(QUIT, "QUIT", Category::Connection, grammar::EMPTY);
    table.insert(HELLO, "HELLO", Category::Connection, HELLO_PAYLOAD);
    table.insert(RESET, "RESET", Category::Connection, grammar::EMPTY);
    table.insert(CLIENT, "CLIENT", Category::Connection, grammar::SUBCOMMAND);
}
