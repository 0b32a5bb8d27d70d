#![no_main]
use libfuzzer_sys::fuzz_target;
use sai_vfs::{VirtualFileSystem, CLUSTER_SIZE};
use std::io::Cursor;

// Arbitrary bytes must never panic the mount or the traversal that follows.
fuzz_target!(|data: &[u8]| {
    let mut image = data.to_vec();
    image.resize(data.len().div_ceil(CLUSTER_SIZE) * CLUSTER_SIZE, 0);

    let mut fs = VirtualFileSystem::new();
    if fs.mount_reader(Cursor::new(image)).is_err() {
        return;
    }

    if let Ok(files) = fs.list_files() {
        for (_, entry) in files {
            let _ = fs.read_all(&entry);
        }
    }
});
