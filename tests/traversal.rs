//! Depth-first traversal tests

use sai_vfs::{Entry, EntryNode, FileSystemVisitor, ImageBuilder, VirtualFileSystem};
use std::io::Cursor;

#[derive(Default)]
struct Counter {
    files: usize,
    folders: usize,
    open: usize,
    max_open: usize,
    bytes: u64,
}

impl FileSystemVisitor for Counter {
    fn visit_file(&mut self, entry: &Entry) {
        self.files += 1;
        self.bytes += u64::from(entry.size);
    }

    fn visit_folder_begin(&mut self, _entry: &Entry) {
        self.folders += 1;
        self.open += 1;
        self.max_open = self.max_open.max(self.open);
    }

    fn visit_folder_end(&mut self) {
        self.open -= 1;
    }
}

fn nested() -> VirtualFileSystem {
    let mut builder = ImageBuilder::new();
    builder.add_file("canvas", &[1u8; 5000]).unwrap();
    builder.add_folder("layers").unwrap();
    builder.add_folder("layers/group").unwrap();
    builder.add_file("layers/group/00000004", &[2u8; 10]).unwrap();
    builder.add_folder("layers/empty").unwrap();
    builder.add_file("layers/00000002", &[3u8; 20]).unwrap();
    builder.add_tagged("layers/odd", 0x33).unwrap();
    builder.add_file("thumbnail", &[4u8; 30]).unwrap();

    let mut fs = VirtualFileSystem::new();
    fs.mount_reader(Cursor::new(builder.build().unwrap())).unwrap();
    fs
}

#[test]
fn test_counts_and_balance() {
    let mut fs = nested();
    let mut counter = Counter::default();
    fs.iterate(&mut counter).unwrap();

    assert_eq!(counter.files, 4);
    assert_eq!(counter.folders, 3);
    assert_eq!(counter.open, 0);
    assert_eq!(counter.max_open, 2);
    assert_eq!(counter.bytes, 5060);
}

#[test]
fn test_repeated_iteration_is_stable() {
    let mut fs = nested();
    let first = fs.list_files().unwrap();
    let second = fs.list_files().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_list_files_paths_resolve() {
    let mut fs = nested();
    let files = fs.list_files().unwrap();
    let paths: Vec<&str> = files.iter().map(|(path, _)| path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["canvas", "layers/group/00000004", "layers/00000002", "thumbnail"]
    );

    for (path, entry) in &files {
        assert_eq!(&fs.get_entry(path).unwrap(), entry);
    }
}

#[test]
fn test_tree_shape() {
    let mut fs = nested();
    let tree = fs.tree().unwrap();

    let names: Vec<&str> = tree.iter().map(|node| node.entry.name.as_str()).collect();
    assert_eq!(names, vec!["canvas", "layers", "thumbnail"]);

    let layers = &tree[1];
    let children: Vec<&str> = layers
        .children
        .iter()
        .map(|node| node.entry.name.as_str())
        .collect();
    assert_eq!(children, vec!["group", "empty", "00000002"]);
    assert_eq!(layers.count(), 5);
}

#[test]
fn test_tree_serializes() {
    let mut fs = nested();
    let tree = fs.tree().unwrap();

    let json = serde_json::to_string(&tree).unwrap();
    let back: Vec<EntryNode> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn test_empty_root() {
    let mut fs = VirtualFileSystem::new();
    fs.mount_reader(Cursor::new(ImageBuilder::new().build().unwrap()))
        .unwrap();

    let mut counter = Counter::default();
    fs.iterate(&mut counter).unwrap();
    assert_eq!(counter.files + counter.folders, 0);
    assert!(fs.tree().unwrap().is_empty());
}
