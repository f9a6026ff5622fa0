//! Use cases - user story orchestration.
//!
//! Each module covers one domain area. Use cases hold port trait objects
//! and orchestrate domain operations; they own no business rules themselves.

pub mod characters;
pub mod monsters;
pub mod seed;

pub use characters::progression::{GainExperience, SetLevel};
pub use characters::vitals::VitalsUseCases;
pub use characters::CharacterUseCases;
pub use monsters::MonsterUseCases;
pub use seed::SeedService;

use dndrpg_domain::DomainError;

use crate::infrastructure::ports::{CatalogError, RepoError};

/// Error type shared by all use cases.
#[derive(Debug, thiserror::Error)]
pub enum UseCaseError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl UseCaseError {
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::Domain(DomainError::not_found(entity_type, id))
    }
}
