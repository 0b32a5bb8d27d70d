//! Traversal callbacks and the collectors built on them

use crate::core::catalog::{Entry, EntryNode};

/// Callbacks for [`VirtualFileSystem::iterate`](super::VirtualFileSystem::iterate)
///
/// For each folder, `visit_folder_begin` runs before any of its children
/// and `visit_folder_end` after the last one, including for empty folders.
pub trait FileSystemVisitor {
    fn visit_file(&mut self, _entry: &Entry) {}

    fn visit_folder_begin(&mut self, _entry: &Entry) {}

    fn visit_folder_end(&mut self) {}
}

/// Rebuilds the folder tree as [`EntryNode`]s
#[derive(Debug, Default)]
pub struct TreeCollector {
    open: Vec<EntryNode>,
    roots: Vec<EntryNode>,
}

impl TreeCollector {
    pub fn new() -> Self {
        Self::default()
    }

    fn attach(&mut self, node: EntryNode) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }

    /// Top-level nodes. Folders left open by an aborted walk are dropped.
    pub fn into_nodes(self) -> Vec<EntryNode> {
        self.roots
    }
}

impl FileSystemVisitor for TreeCollector {
    fn visit_file(&mut self, entry: &Entry) {
        self.attach(EntryNode::new(entry.clone()));
    }

    fn visit_folder_begin(&mut self, entry: &Entry) {
        self.open.push(EntryNode::new(entry.clone()));
    }

    fn visit_folder_end(&mut self) {
        if let Some(node) = self.open.pop() {
            self.attach(node);
        }
    }
}

/// Collects every file with its full `/`-joined path
#[derive(Debug, Default)]
pub struct PathCollector {
    folders: Vec<String>,
    files: Vec<(String, Entry)>,
}

impl PathCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_files(self) -> Vec<(String, Entry)> {
        self.files
    }
}

impl FileSystemVisitor for PathCollector {
    fn visit_file(&mut self, entry: &Entry) {
        let path = if self.folders.is_empty() {
            entry.name.clone()
        } else {
            format!("{}/{}", self.folders.join("/"), entry.name)
        };
        self.files.push((path, entry.clone()));
    }

    fn visit_folder_begin(&mut self, entry: &Entry) {
        self.folders.push(entry.name.clone());
    }

    fn visit_folder_end(&mut self) {
        self.folders.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::EntryType;

    fn entry(name: &str, entry_type: EntryType) -> Entry {
        Entry {
            flags: 1,
            name: name.to_string(),
            entry_type,
            cluster: 3,
            size: 0,
            timestamp: 0,
        }
    }

    #[test]
    fn test_tree_collector_nesting() {
        let mut collector = TreeCollector::new();
        collector.visit_file(&entry("canvas", EntryType::File));
        collector.visit_folder_begin(&entry("layers", EntryType::Folder));
        collector.visit_file(&entry("00000002", EntryType::File));
        collector.visit_folder_begin(&entry("empty", EntryType::Folder));
        collector.visit_folder_end();
        collector.visit_folder_end();

        let nodes = collector.into_nodes();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].entry.name, "canvas");
        let layers = &nodes[1];
        assert_eq!(layers.children.len(), 2);
        assert!(layers.child("empty").unwrap().children.is_empty());
    }

    #[test]
    fn test_path_collector() {
        let mut collector = PathCollector::new();
        collector.visit_file(&entry("canvas", EntryType::File));
        collector.visit_folder_begin(&entry("layers", EntryType::Folder));
        collector.visit_file(&entry("00000002", EntryType::File));
        collector.visit_folder_end();
        collector.visit_file(&entry("thumbnail", EntryType::File));

        let paths: Vec<String> = collector.into_files().into_iter().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["canvas", "layers/00000002", "thumbnail"]);
    }
}
