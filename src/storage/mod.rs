//! User storage
//!
//! Handles the key-value slot backends and the user list kept in them.

pub mod slot;
pub mod users;

pub use slot::{FileStorage, KeyValueStorage, MemoryStorage};
pub use users::{DEFAULT_SLOT, UserStore};
