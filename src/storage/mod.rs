//! Session storage backends.
//!
//! The identity store persists its snapshot through the `SessionStorage`
//! trait so that the backing medium can be swapped by configuration:
//! - `memory`: lives and dies with the process (default)
//! - `file`: one file per key under a directory, survives restarts

mod backend;
mod factory;
mod file;
mod memory;

pub use backend::{SessionStorage, StorageError};
pub use factory::create_session_storage;
pub use file::FileSessionStorage;
pub use memory::MemorySessionStorage;
