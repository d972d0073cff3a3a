//! # Storage Layer
//!
//! Durable client storage is a plain string-keyed, string-valued store with two
//! operations, [`KeyValueStore::get`] and [`KeyValueStore::set`]. The catalog
//! only ever keeps one key in it (the serialized selection), but the store
//! itself is generic.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - All keys live in one JSON object file, `storage.json`
//!   - Writes go to a temp file and are renamed into place
//!
//! - [`memory::InMemoryStore`]: Storage for tests
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── storage.json        # {"selectedCards": "[\"a\",\"b\"]"}
//! └── config.json         # GrimoireConfig
//! ```
//!
//! Values are opaque strings: the selection is stored as its own JSON text,
//! so a store never needs to understand what it holds.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// A persistent string-to-string store that survives restarts.
///
/// `set` must have reached durable storage by the time it returns, so a later
/// `get` (in this process or the next) observes it.
pub trait KeyValueStore {
    /// Value for `key`, or `None` when never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
