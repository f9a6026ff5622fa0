//! Response DTOs.

use dndrpg_domain::{Character, Monster};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterResponse {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub character_class: String,
    pub level: i32,
    pub health: i32,
    pub max_health: i32,
    /// XP earned since entering the current level
    pub experience: i64,
    /// XP span of the current level; 0 at max level
    pub experience_to_next_level: i64,
    pub total_experience: i64,
    /// Clients must render max level as a terminal state instead of a
    /// progress fraction (the span above is 0 there)
    pub is_max_level: bool,
    pub gold: i32,

    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
    pub constitution_modifier: i32,

    pub weapon_name: String,
    pub weapon_damage: String,
    pub weapon_attack_bonus: i32,
    pub armor_name: String,
    pub armor_class: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shield_name: Option<String>,
    pub shield_armor_class_bonus: i32,
    pub total_armor_class: i32,

    pub created_at: String,
    pub updated_at: String,
    pub version: i64,
}

impl From<Character> for CharacterResponse {
    fn from(character: Character) -> Self {
        Self {
            id: character.id.to_uuid(),
            user_id: character.user_id.clone(),
            name: character.name.clone(),
            character_class: character.class.to_string(),
            level: character.level,
            health: character.health,
            max_health: character.max_health,
            experience: character.experience_in_level,
            experience_to_next_level: character.experience_to_next_level,
            total_experience: character.total_experience,
            is_max_level: character.is_max_level(),
            gold: character.gold,
            strength: character.abilities.strength,
            dexterity: character.abilities.dexterity,
            constitution: character.abilities.constitution,
            intelligence: character.abilities.intelligence,
            wisdom: character.abilities.wisdom,
            charisma: character.abilities.charisma,
            constitution_modifier: character.constitution_modifier(),
            total_armor_class: character.total_armor_class(),
            weapon_name: character.equipment.weapon_name,
            weapon_damage: character.equipment.weapon_damage,
            weapon_attack_bonus: character.equipment.weapon_attack_bonus,
            armor_name: character.equipment.armor_name,
            armor_class: character.equipment.armor_class,
            shield_name: character.equipment.shield_name,
            shield_armor_class_bonus: character.equipment.shield_armor_class_bonus,
            created_at: character.created_at.to_rfc3339(),
            updated_at: character.updated_at.to_rfc3339(),
            version: character.version,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterResponse {
    pub id: Uuid,
    pub api_slug: String,
    pub name: String,
    pub challenge_rating: f64,
    pub armor_class: i32,
    pub hit_points: i32,
    pub damage_dice: String,
    pub experience_value: i64,
    pub monster_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack_bonus: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub has_only_physical_attacks: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Monster> for MonsterResponse {
    fn from(monster: Monster) -> Self {
        Self {
            id: monster.id.to_uuid(),
            api_slug: monster.api_slug,
            name: monster.name,
            challenge_rating: monster.challenge_rating.as_f64(),
            armor_class: monster.armor_class,
            hit_points: monster.hit_points,
            damage_dice: monster.damage_dice,
            experience_value: monster.xp_award,
            monster_type: monster.monster_type,
            attack_bonus: monster.attack_bonus,
            attack_name: monster.attack_name,
            image_url: monster.image_url,
            has_only_physical_attacks: monster.has_only_physical_attacks,
            created_at: monster.created_at.to_rfc3339(),
            updated_at: monster.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
