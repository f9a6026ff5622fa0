//! Request DTOs.
//!
//! The XP/heal/damage/level mutation endpoints take a bare JSON integer
//! body (the wire format the original web client already speaks), so only
//! the structured requests live here.

use dndrpg_domain::AbilityScores;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacterRequest {
    pub name: String,
    /// Class name, parsed against the closed class catalog
    pub character_class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_health: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abilities: Option<AbilityScores>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCharacterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abilities: Option<AbilityScores>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<EquipmentUpdate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weapon_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weapon_damage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weapon_attack_bonus: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub armor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub armor_class: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shield_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shield_armor_class_bonus: Option<i32>,
}

/// Query string for the random-encounter endpoint (`?maxCR=0.5`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RandomMonsterQuery {
    #[serde(rename = "maxCR", skip_serializing_if = "Option::is_none")]
    pub max_cr: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_uses_camel_case() {
        let json = r#"{"name":"Borin","characterClass":"fighter","maxHealth":40}"#;
        let request: CreateCharacterRequest =
            serde_json::from_str(json).expect("well-formed request");
        assert_eq!(request.name, "Borin");
        assert_eq!(request.character_class, "fighter");
        assert_eq!(request.max_health, Some(40));
        assert!(request.abilities.is_none());
    }

    #[test]
    fn random_monster_query_reads_max_cr() {
        let query: RandomMonsterQuery =
            serde_json::from_str(r#"{"maxCR":0.25}"#).expect("well-formed query");
        assert_eq!(query.max_cr, Some(0.25));
    }
}
