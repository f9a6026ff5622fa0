//! HTTP routes.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use dndrpg_domain::{CharacterId, DomainError};
use dndrpg_shared::{
    CharacterResponse, CreateCharacterRequest, ErrorResponse, MonsterResponse,
    RandomMonsterQuery, UpdateCharacterRequest,
};

use crate::app::App;
use crate::infrastructure::ports::{CatalogError, RepoError};
use crate::use_cases::characters::{CreateCharacter, UpdateCharacter};
use crate::use_cases::UseCaseError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route(
            "/api/characters",
            get(list_characters).post(create_character),
        )
        .route(
            "/api/characters/{id}",
            get(get_character)
                .put(update_character)
                .delete(delete_character),
        )
        .route("/api/characters/{id}/experience", post(gain_experience))
        .route("/api/characters/{id}/heal", post(heal_character))
        .route("/api/characters/{id}/damage", post(damage_character))
        .route("/api/characters/{id}/level", post(set_character_level))
        .route("/api/monsters", get(list_monsters))
        .route("/api/monsters/random", get(random_monster))
        .route("/api/monsters/for-level/{level}", get(monsters_for_level))
        .route("/api/monsters/import/{slug}", post(import_monster))
}

// =============================================================================
// Errors
// =============================================================================

pub enum ApiError {
    NotFound,
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };
        (status, Json(ErrorResponse { message })).into_response()
    }
}

impl From<UseCaseError> for ApiError {
    fn from(err: UseCaseError) -> Self {
        match err {
            UseCaseError::Domain(DomainError::NotFound { .. }) => Self::NotFound,
            UseCaseError::Domain(
                DomainError::InvalidArgument(msg)
                | DomainError::OutOfRange(msg)
                | DomainError::Validation(msg)
                | DomainError::Constraint(msg)
                | DomainError::Parse(msg),
            ) => Self::BadRequest(msg),
            UseCaseError::Repo(RepoError::NotFound) => Self::NotFound,
            UseCaseError::Repo(RepoError::Conflict(msg)) => Self::Conflict(msg),
            UseCaseError::Repo(err) => Self::Internal(err.to_string()),
            UseCaseError::Catalog(CatalogError::NotFound(_)) => Self::NotFound,
            UseCaseError::Catalog(err) => Self::Internal(err.to_string()),
        }
    }
}

/// Extract user ID from X-User-Id header, falling back to a default.
fn extract_user_id(headers: &HeaderMap) -> String {
    headers
        .get("X-User-Id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| "anonymous".to_string())
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Characters
// =============================================================================

#[derive(Debug, Deserialize)]
struct ListCharactersQuery {
    #[serde(rename = "userId")]
    user_id: Option<String>,
}

async fn list_characters(
    State(app): State<Arc<App>>,
    Query(query): Query<ListCharactersQuery>,
) -> Result<Json<Vec<CharacterResponse>>, ApiError> {
    let characters = match query.user_id {
        Some(user_id) => app.use_cases.characters.list_by_user(&user_id).await?,
        None => app.use_cases.characters.list().await?,
    };
    Ok(Json(
        characters.into_iter().map(CharacterResponse::from).collect(),
    ))
}

async fn get_character(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CharacterResponse>, ApiError> {
    let character = app
        .use_cases
        .characters
        .get(CharacterId::from_uuid(id))
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(CharacterResponse::from(character)))
}

async fn create_character(
    State(app): State<Arc<App>>,
    headers: HeaderMap,
    Json(request): Json<CreateCharacterRequest>,
) -> Result<(StatusCode, Json<CharacterResponse>), ApiError> {
    let class = request
        .character_class
        .parse()
        .map_err(|e: DomainError| ApiError::BadRequest(e.to_string()))?;

    let character = app
        .use_cases
        .characters
        .create(CreateCharacter {
            user_id: extract_user_id(&headers),
            name: request.name,
            class,
            max_health: request.max_health,
            abilities: request.abilities,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(CharacterResponse::from(character))))
}

async fn update_character(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCharacterRequest>,
) -> Result<Json<CharacterResponse>, ApiError> {
    let equipment = request.equipment.unwrap_or_default();
    let changes = UpdateCharacter {
        name: request.name,
        gold: request.gold,
        abilities: request.abilities,
        weapon_name: equipment.weapon_name,
        weapon_damage: equipment.weapon_damage,
        weapon_attack_bonus: equipment.weapon_attack_bonus,
        armor_name: equipment.armor_name,
        armor_class: equipment.armor_class,
        shield_name: equipment.shield_name,
        shield_armor_class_bonus: equipment.shield_armor_class_bonus,
    };

    let character = app
        .use_cases
        .characters
        .update(CharacterId::from_uuid(id), changes)
        .await?;
    Ok(Json(CharacterResponse::from(character)))
}

async fn delete_character(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    app.use_cases
        .characters
        .delete(CharacterId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// The mutation endpoints take a bare JSON integer body, matching the wire
// format the web client already sends.

async fn gain_experience(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(xp_delta): Json<i64>,
) -> Result<Json<CharacterResponse>, ApiError> {
    let character = app
        .use_cases
        .gain_experience
        .execute(CharacterId::from_uuid(id), xp_delta)
        .await?;
    Ok(Json(CharacterResponse::from(character)))
}

async fn heal_character(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(amount): Json<i32>,
) -> Result<Json<CharacterResponse>, ApiError> {
    let character = app
        .use_cases
        .vitals
        .heal(CharacterId::from_uuid(id), amount)
        .await?;
    Ok(Json(CharacterResponse::from(character)))
}

async fn damage_character(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(amount): Json<i32>,
) -> Result<Json<CharacterResponse>, ApiError> {
    let character = app
        .use_cases
        .vitals
        .damage(CharacterId::from_uuid(id), amount)
        .await?;
    Ok(Json(CharacterResponse::from(character)))
}

async fn set_character_level(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(target_level): Json<i32>,
) -> Result<Json<CharacterResponse>, ApiError> {
    let character = app
        .use_cases
        .set_level
        .execute(CharacterId::from_uuid(id), target_level)
        .await?;
    Ok(Json(CharacterResponse::from(character)))
}

// =============================================================================
// Monsters
// =============================================================================

async fn list_monsters(
    State(app): State<Arc<App>>,
) -> Result<Json<Vec<MonsterResponse>>, ApiError> {
    let monsters = app.use_cases.monsters.list().await?;
    Ok(Json(
        monsters.into_iter().map(MonsterResponse::from).collect(),
    ))
}

async fn random_monster(
    State(app): State<Arc<App>>,
    Query(query): Query<RandomMonsterQuery>,
) -> Result<Json<MonsterResponse>, ApiError> {
    let monster = app
        .use_cases
        .monsters
        .random_encounter(query.max_cr)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(MonsterResponse::from(monster)))
}

async fn monsters_for_level(
    State(app): State<Arc<App>>,
    Path(level): Path<i32>,
) -> Result<Json<Vec<MonsterResponse>>, ApiError> {
    if !(1..=20).contains(&level) {
        return Err(ApiError::BadRequest(format!(
            "level must be between 1 and 20, got {}",
            level
        )));
    }
    let monsters = app.use_cases.monsters.list_for_level(level).await?;
    Ok(Json(
        monsters.into_iter().map(MonsterResponse::from).collect(),
    ))
}

async fn import_monster(
    State(app): State<Arc<App>>,
    Path(slug): Path<String>,
) -> Result<(StatusCode, Json<MonsterResponse>), ApiError> {
    let monster = app.use_cases.monsters.import_from_catalog(&slug).await?;
    Ok((StatusCode::CREATED, Json(MonsterResponse::from(monster))))
}
