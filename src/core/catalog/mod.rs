//! Entry catalog: the directory entry model and tree projections of it

pub mod entry;

pub use entry::{Entry, EntryType};

use serde::{Deserialize, Serialize};

/// An entry together with its children (empty for files)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryNode {
    pub entry: Entry,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<EntryNode>,
}

impl EntryNode {
    pub fn new(entry: Entry) -> Self {
        EntryNode {
            entry,
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, including this one
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(EntryNode::count).sum::<usize>()
    }

    /// Child with the given name
    pub fn child(&self, name: &str) -> Option<&EntryNode> {
        self.children.iter().find(|node| node.entry.name == name)
    }
}
