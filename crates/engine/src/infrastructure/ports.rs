//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is
//! concrete types. Ports exist for:
//! - Database access (could swap SQLite -> Postgres)
//! - The external monster compendium (could swap providers)
//! - Clock/Random (for testing)

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use dndrpg_domain::{ChallengeRating, Character, CharacterId, Monster, MonsterId};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Not found")]
    NotFound,
    /// The row changed underneath the caller (stale version token).
    /// Concurrent read-modify-write on one character must not silently
    /// lose an update, so writes are version-checked.
    #[error("Version conflict: {0}")]
    Conflict(String),
    #[error("Database error: {0}")]
    Database(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    pub fn database(context: &str, err: impl std::fmt::Display) -> Self {
        Self::Database(format!("{}: {}", context, err))
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    RequestFailed(String),
    #[error("Monster not found in catalog: {0}")]
    NotFound(String),
    #[error("Invalid catalog response: {0}")]
    InvalidResponse(String),
}

// =============================================================================
// Repository Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError>;
    async fn list(&self) -> Result<Vec<Character>, RepoError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Character>, RepoError>;
    async fn insert(&self, character: &Character) -> Result<(), RepoError>;
    /// Version-checked write. Succeeds only when the stored row still has
    /// `character.version`; returns the new version on success and
    /// `Conflict` when the row moved underneath the caller.
    async fn update(&self, character: &Character) -> Result<i64, RepoError>;
    async fn delete(&self, id: CharacterId) -> Result<(), RepoError>;
    async fn count(&self) -> Result<i64, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MonsterRepo: Send + Sync {
    async fn get(&self, id: MonsterId) -> Result<Option<Monster>, RepoError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Monster>, RepoError>;
    async fn list(&self) -> Result<Vec<Monster>, RepoError>;
    async fn list_in_cr_range(
        &self,
        min: ChallengeRating,
        max: ChallengeRating,
    ) -> Result<Vec<Monster>, RepoError>;
    async fn insert(&self, monster: &Monster) -> Result<(), RepoError>;
    async fn count(&self) -> Result<i64, RepoError>;
}

// =============================================================================
// External Service Ports
// =============================================================================

/// A monster as the external compendium describes it, before it becomes a
/// domain entity.
#[derive(Debug, Clone)]
pub struct CatalogMonster {
    pub slug: String,
    pub name: String,
    pub challenge_rating: f64,
    pub armor_class: i32,
    pub hit_points: i32,
    pub xp: i64,
    pub monster_type: String,
    pub image_url: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MonsterCatalogPort: Send + Sync {
    async fn fetch_monster(&self, slug: &str) -> Result<CatalogMonster, CatalogError>;
}

// =============================================================================
// Clock & Random
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniform integer in `min..=max`.
    fn gen_range(&self, min: i32, max: i32) -> i32;
}
