//! HTTP client for the public D&D 5e compendium API.

use async_trait::async_trait;
use serde::Deserialize;

use crate::infrastructure::ports::{CatalogError, CatalogMonster, MonsterCatalogPort};

/// Client for <https://www.dnd5eapi.co>, used to import monster stat blocks.
pub struct Dnd5eApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl Dnd5eApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// The subset of the compendium's monster document this system reads.
#[derive(Debug, Deserialize)]
struct ApiMonster {
    name: String,
    challenge_rating: f64,
    xp: i64,
    hit_points: i32,
    #[serde(default)]
    armor_class: Vec<ApiArmorClass>,
    #[serde(rename = "type")]
    monster_type: String,
    #[serde(default)]
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiArmorClass {
    value: i32,
}

#[async_trait]
impl MonsterCatalogPort for Dnd5eApiClient {
    async fn fetch_monster(&self, slug: &str) -> Result<CatalogMonster, CatalogError> {
        let url = format!("{}/api/monsters/{}", self.base_url, slug);
        tracing::debug!(%url, "Fetching monster from compendium");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::RequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(slug.to_string()));
        }
        if !response.status().is_success() {
            return Err(CatalogError::RequestFailed(format!(
                "compendium returned {}",
                response.status()
            )));
        }

        let monster: ApiMonster = response
            .json()
            .await
            .map_err(|e| CatalogError::InvalidResponse(e.to_string()))?;

        let armor_class = monster
            .armor_class
            .first()
            .map(|ac| ac.value)
            .unwrap_or(10);
        let image_url = monster
            .image
            .map(|path| format!("{}{}", self.base_url, path));

        Ok(CatalogMonster {
            slug: slug.to_string(),
            name: monster.name,
            challenge_rating: monster.challenge_rating,
            armor_class,
            hit_points: monster.hit_points,
            xp: monster.xp,
            monster_type: monster.monster_type,
            image_url,
        })
    }
}
