//! Pub/Sub command opcodes (`0x0200`-`0x023F`).

use super::{Category, OpcodeTable};
use crate::protocol::grammar::{self, Field, Grammar};

pub const PUBLISH: u16 = 0x0200;
pub const SUBSCRIBE: u16 = 0x0201;
pub const UNSUBSCRIBE: u16 = 0x0202;
pub const PSUBSCRIBE: u16 = 0x0203;
pub const PUNSUBSCRIBE: u16 = 0x0204;
pub const PUBSUB: u16 = 0x0205;
pub const SPUBLISH: u16 = 0x0206;
pub const SSUBSCRIBE: u16 = 0x0207;
pub const SUNSUBSCRIBE: u16 = 0x0208;

/// `[channel, message:long]` — messages get the 4-byte prefix, channels the
/// 2-byte one.
const PUBLISH_PAYLOAD: Grammar = &[Field::Short, Field::Long];

pub(crate) fn register(table: &mut OpcodeTable) {
    table.insert(PUBLISH, "PUBLISH", Category::PubSub, PUBLISH_PAYLOAD);
    table.insert(SUBSCRIBE, "SUBSCRIBE", Category::PubSub, grammar::KEY_LIST);
    table.insert(UNSUBSCRIBE, "UNSUBSCRIBE", Category::PubSub, grammar::KEY_LIST);
    table.insert(PSUBSCRIBE, "PSUBSCRIBE", Category::PubSub, grammar::KEY_LIST);
    table.insert(PUNSUBSCRIBE, "PUNSUBSCRIBE", Category::PubSub, grammar::KEY_LIST);
    table.insert(PUBSUB, "PUBSUB", Category::PubSub, grammar::SUBCOMMAND);
    table.insert(SPUBLISH, "SPUBLISH", Category::PubSub, PUBLISH_PAYLOAD);
    table.insert(SSUBSCRIBE, "SSUBSCRIBE", Category::PubSub, grammar::KEY_LIST);
    table.insert(SUNSUBSCRIBE, "SUNSUBSCRIBE", Category::PubSub, grammar::KEY_LIST);
}
