//! Cluster cipher and checksum
//!
//! Both transforms are chained: the state used for word `i` is the raw
//! ciphertext of word `i - 1`, seeded by the table-aligned cluster index
//! (table clusters) or by the owning table's checksum slot (data clusters).
//! Each transform is therefore a strict left-to-right fold over the words.
//!
//! The encrypting halves exist so that valid containers can be synthesised
//! for tests and tooling; the reader itself only ever decrypts.

use crate::core::key_table::CLUSTER_KEY;

/// Clusters per table group; also the table-alignment mask + 1.
pub const TABLE_SPAN: u32 = 512;

const TABLE_MASK: u32 = TABLE_SPAN - 1;

/// Sum of the four key-table words selected by the bytes of `state`.
#[inline]
fn key_mix(state: u32) -> u32 {
    CLUSTER_KEY[(state & 0xFF) as usize]
        .wrapping_add(CLUSTER_KEY[((state >> 8) & 0xFF) as usize])
        .wrapping_add(CLUSTER_KEY[((state >> 16) & 0xFF) as usize])
        .wrapping_add(CLUSTER_KEY[((state >> 24) & 0xFF) as usize])
}

/// Round a cluster index down to the table cluster that owns it.
#[inline]
pub fn table_base(cluster_index: u32) -> u32 {
    cluster_index & !TABLE_MASK
}

/// Whether `cluster_index` addresses a table cluster.
#[inline]
pub fn is_table_index(cluster_index: u32) -> bool {
    cluster_index & TABLE_MASK == 0
}

/// Decrypt the words of a table cluster in place.
pub fn decrypt_table(words: &mut [u32], cluster_index: u32) {
    let mut state = table_base(cluster_index);
    for word in words.iter_mut() {
        let cipher = *word;
        let x = state ^ cipher ^ key_mix(state);
        *word = x.rotate_left(16);
        state = cipher;
    }
}

/// Encrypt the words of a table cluster in place (inverse of [`decrypt_table`]).
pub fn encrypt_table(words: &mut [u32], cluster_index: u32) {
    let mut state = table_base(cluster_index);
    for word in words.iter_mut() {
        let cipher = word.rotate_left(16) ^ state ^ key_mix(state);
        *word = cipher;
        state = cipher;
    }
}

/// Decrypt the words of a data cluster in place, keyed by its checksum slot.
pub fn decrypt_data(words: &mut [u32], key: u32) {
    let mut key = key;
    for word in words.iter_mut() {
        let cipher = *word;
        *word = cipher.wrapping_sub(key ^ key_mix(key));
        key = cipher;
    }
}

/// Encrypt the words of a data cluster in place (inverse of [`decrypt_data`]).
pub fn encrypt_data(words: &mut [u32], key: u32) {
    let mut key = key;
    for word in words.iter_mut() {
        let cipher = word.wrapping_add(key ^ key_mix(key));
        *word = cipher;
        key = cipher;
    }
}

/// Rolling checksum over decrypted words.
///
/// Table clusters skip word 0, which stores the table's own checksum.
/// The result is always odd, so it is never a zero key.
pub fn checksum(words: &[u32], is_table: bool) -> u32 {
    let start = usize::from(is_table);
    words
        .iter()
        .skip(start)
        .fold(0u32, |acc, &word| acc.rotate_left(1) ^ word)
        | 1
}
