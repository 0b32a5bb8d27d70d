#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sai_vfs::{ImageBuilder, VirtualFileSystem};
use std::io::Cursor;

#[derive(Arbitrary, Debug)]
struct Input {
    files: Vec<(String, Vec<u8>)>,
    lookups: Vec<String>,
    offset: u32,
    len: u16,
}

// Valid containers with arbitrary names and contents, queried with arbitrary
// paths and ranges.
fuzz_target!(|input: Input| {
    let mut builder = ImageBuilder::new();
    let mut stored = Vec::new();
    for (name, data) in input.files.iter().take(64) {
        if builder.add_file(name, data).is_ok() {
            stored.push((name, data));
        }
    }
    let Ok(image) = builder.build() else {
        return;
    };

    let mut fs = VirtualFileSystem::new();
    fs.mount_reader(Cursor::new(image)).unwrap();

    for (name, data) in stored {
        assert_eq!(&fs.read_path(name).unwrap(), data);
    }

    for path in &input.lookups {
        if let Ok(entry) = fs.get_entry(path) {
            let _ = fs.read_to_vec(&entry, u64::from(input.offset), usize::from(input.len));
        }
    }
});
