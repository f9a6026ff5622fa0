//! SQLite-backed persistence adapters.

mod character_repository;
mod monster_repository;

pub use character_repository::SqliteCharacterRepo;
pub use monster_repository::SqliteMonsterRepo;
