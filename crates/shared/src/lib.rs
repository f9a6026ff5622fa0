//! DndRpg Shared - wire types for Engine and client communication
//!
//! This crate contains the request and response DTOs the HTTP API speaks.
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - only serde, uuid, and the domain vocabulary
//! 2. **No business logic** - pure data types and conversions
//! 3. **camelCase wire format** - matches the original JSON consumed by the
//!    web client

pub mod requests;
pub mod responses;

pub use requests::{
    CreateCharacterRequest, EquipmentUpdate, RandomMonsterQuery, UpdateCharacterRequest,
};
pub use responses::{CharacterResponse, ErrorResponse, MonsterResponse};
