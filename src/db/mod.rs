//! Persistence layer: key-value backends and the profile store on top.

pub mod backend;
pub mod store;

pub use backend::{FileBackend, KeyValueBackend, MemoryBackend};
pub use store::ProfileStore;

/// Storage slot names. The `_v4` suffix is the only schema version; a change
/// to a record shape needs a new key name.
pub mod keys {
    /// Serialized list of all accounts
    pub const ACCOUNTS: &str = "djpress_users_v4";
    /// Serialized active session (absent when logged out)
    pub const SESSION: &str = "djpress_session_v4";
    /// Serialized remembered-accounts cache
    pub const REMEMBERED: &str = "djpress_accounts_v4";
}
