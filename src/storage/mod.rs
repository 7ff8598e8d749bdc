//! Persistence boundary
//!
//! The board keeps its entire note collection under a single key in a
//! whole-value key-value store, rewritten after every mutation.
//!
//! ## Backends
//!
//! - `MemoryStore` - in-process map, used by tests and headless callers
//! - `FileStore` - one JSON file per key with atomic replace
//!
//! ## Error Handling
//!
//! Backends return `StorageResult<T>`. Loading never fails: missing or
//! malformed data degrades to an empty board and the cause is logged.

mod error;
mod kv;
mod notes;

pub use error::*;
pub use kv::*;
pub use notes::*;
