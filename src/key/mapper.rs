//! Key-to-filename mapping
//!
//! A key's entry file is named by the lowercase hex digest of the BLAKE3
//! hash of the key's UTF-8 bytes: 64 hex characters, fixed width, no
//! separators. Equal keys map to equal names; distinct keys collide only
//! with cryptographic improbability. The mapping is one-way, so the store
//! cannot recover or enumerate original keys from the directory listing.

/// Derive the entry file name for a key
pub fn file_name_for(key: &str) -> String {
    hex::encode(blake3::hash(key.as_bytes()).as_bytes())
}
