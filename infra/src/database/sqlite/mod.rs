//! SQLite repository implementations

mod key_repository_impl;

pub use key_repository_impl::SqliteKeyRepository;
