//! Opcode dispatch table: the single source of truth about the wire format.
//!
//! Every assigned request opcode maps to a name, a category, and a payload
//! grammar. One module per command family registers its block of the opcode
//! space; the table is built once and is immutable afterwards, safe for
//! unsynchronised concurrent reads.
//!
//! Opcode space partition (request direction):
//!
//! ```text
//! 0x0000-0xEFFF   core commands, power-of-two aligned family sub-ranges
//! 0xF000          module command sentinel (see `modules`)
//! 0xF001-0xFFFE   reserved, rejected
//! 0xFFFF          text-RESP passthrough
//! ```

pub mod bitmap;
pub mod cluster;
pub mod connection;
pub mod dispatch;
pub mod geo;
pub mod hashes;
pub mod hyperloglog;
pub mod keys;
pub mod lists;
pub mod modules;
pub mod pubsub;
pub mod scripting;
pub mod server_cmds;
pub mod sets;
pub mod sorted_sets;
pub mod streams;
pub mod strings;
pub mod transactions;

use crate::protocol::{Grammar, MAX_CORE_OPCODE, OP_MODULE, OP_RESP_PASSTHROUGH};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Command family an opcode belongs to, matching its sub-range of the opcode
/// space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    String,
    List,
    Set,
    SortedSet,
    Hash,
    Bitmap,
    HyperLogLog,
    Geo,
    Stream,
    PubSub,
    Transaction,
    Scripting,
    Key,
    Connection,
    Cluster,
    Server,
}

/// One dispatch table entry.
#[derive(Debug, Clone, Copy)]
pub struct OpcodeSpec {
    /// Canonical uppercase command name.
    pub name: &'static str,
    /// Command family.
    pub category: Category,
    /// Payload layout.
    pub grammar: Grammar,
}

/// Registry of all assigned request opcodes.
#[derive(Debug, Default)]
pub struct OpcodeTable {
    entries: HashMap<u16, OpcodeSpec>,
}

impl OpcodeTable {
    /// Build the table with every built-in command family registered.
    pub fn new() -> Self {
        let mut table = Self {
            entries: HashMap::new(),
        };
        table.register_all();
        table
    }

    fn register_all(&mut self) {
        strings::register(self);
        lists::register(self);
        sets::register(self);
        sorted_sets::register(self);
        hashes::register(self);
        bitmap::register(self);
        hyperloglog::register(self);
        geo::register(self);
        streams::register(self);
        pubsub::register(self);
        transactions::register(self);
        scripting::register(self);
        keys::register(self);
        connection::register(self);
        cluster::register(self);
        server_cmds::register(self);
    }

    pub(crate) fn insert(
        &mut self,
        opcode: u16,
        name: &'static str,
        category: Category,
        grammar: Grammar,
    ) {
        debug_assert!(opcode <= MAX_CORE_OPCODE, "opcode {opcode:#06x} outside core range");
        let prev = self.entries.insert(opcode, OpcodeSpec {
            name,
            category,
            grammar,
        });
        debug_assert!(prev.is_none(), "duplicate opcode {opcode:#06x}");
    }

    /// Look up the entry for an opcode.
    #[inline]
    pub fn get(&self, opcode: u16) -> Option<&OpcodeSpec> {
        self.entries.get(&opcode)
    }

    /// Iterate all registered opcodes and their entries.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &OpcodeSpec)> + '_ {
        self.entries.iter().map(|(&op, spec)| (op, spec))
    }

    /// Number of registered opcodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static TABLE: LazyLock<OpcodeTable> = LazyLock::new(OpcodeTable::new);

/// The process-wide dispatch table.
pub fn table() -> &'static OpcodeTable {
    &TABLE
}

/// Payload grammar for a core opcode, `None` when unassigned.
#[inline]
pub fn grammar_for(opcode: u16) -> Option<Grammar> {
    TABLE.get(opcode).map(|spec| spec.grammar)
}

/// Command family for a core opcode, `None` when unassigned.
#[inline]
pub fn category_for(opcode: u16) -> Option<Category> {
    TABLE.get(opcode).map(|spec| spec.category)
}

/// Canonical uppercase name for any opcode; `"UNKNOWN"` when unassigned.
///
/// The two sentinels report their frame kind rather than a command name,
/// matching what diagnostics want to see for them.
pub fn name_for(opcode: u16) -> &'static str {
    match opcode {
        OP_MODULE => "MODULE",
        OP_RESP_PASSTHROUGH => "RESP_PASSTHROUGH",
        _ => TABLE.get(opcode).map_or("UNKNOWN", |spec| spec.name),
    }
}
