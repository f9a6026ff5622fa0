//! SQLite-backed character storage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use dndrpg_domain::{AbilityScores, Character, CharacterId, Equipment};

use crate::infrastructure::ports::{CharacterRepo, RepoError};

/// SQLite implementation of [`CharacterRepo`].
///
/// Writes are version-checked: `update` only lands when the stored row
/// still carries the version the caller read, so a concurrent writer
/// cannot be silently overwritten.
pub struct SqliteCharacterRepo {
    pool: SqlitePool,
}

impl SqliteCharacterRepo {
    pub async fn new(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("characters", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS characters (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                name TEXT NOT NULL,
                class TEXT NOT NULL,
                level INTEGER NOT NULL,
                health INTEGER NOT NULL,
                max_health INTEGER NOT NULL,
                experience_in_level INTEGER NOT NULL,
                experience_to_next_level INTEGER NOT NULL,
                total_experience INTEGER NOT NULL,
                gold INTEGER NOT NULL,
                strength INTEGER NOT NULL,
                dexterity INTEGER NOT NULL,
                constitution INTEGER NOT NULL,
                intelligence INTEGER NOT NULL,
                wisdom INTEGER NOT NULL,
                charisma INTEGER NOT NULL,
                weapon_name TEXT NOT NULL,
                weapon_damage TEXT NOT NULL,
                weapon_attack_bonus INTEGER NOT NULL,
                armor_name TEXT NOT NULL,
                armor_class INTEGER NOT NULL,
                shield_name TEXT,
                shield_armor_class_bonus INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                version INTEGER NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("characters", e))?;

        Ok(Self { pool })
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, RepoError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepoError::Serialization(e.to_string()))
}

fn row_to_character(row: &sqlx::sqlite::SqliteRow) -> Result<Character, RepoError> {
    let id: String = row.get("id");
    let id = Uuid::parse_str(&id).map_err(|e| RepoError::Serialization(e.to_string()))?;
    let class: String = row.get("class");
    let class = class
        .parse()
        .map_err(|e: dndrpg_domain::DomainError| RepoError::Serialization(e.to_string()))?;
    let created_at: String = row.get("created_at");
    let updated_at: String = row.get("updated_at");

    Ok(Character {
        id: CharacterId::from_uuid(id),
        user_id: row.get("user_id"),
        name: row.get("name"),
        class,
        level: row.get("level"),
        health: row.get("health"),
        max_health: row.get("max_health"),
        experience_in_level: row.get("experience_in_level"),
        experience_to_next_level: row.get("experience_to_next_level"),
        total_experience: row.get("total_experience"),
        gold: row.get("gold"),
        abilities: AbilityScores {
            strength: row.get("strength"),
            dexterity: row.get("dexterity"),
            constitution: row.get("constitution"),
            intelligence: row.get("intelligence"),
            wisdom: row.get("wisdom"),
            charisma: row.get("charisma"),
        },
        equipment: Equipment {
            weapon_name: row.get("weapon_name"),
            weapon_damage: row.get("weapon_damage"),
            weapon_attack_bonus: row.get("weapon_attack_bonus"),
            armor_name: row.get("armor_name"),
            armor_class: row.get("armor_class"),
            shield_name: row.get("shield_name"),
            shield_armor_class_bonus: row.get("shield_armor_class_bonus"),
        },
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
        version: row.get("version"),
    })
}

#[async_trait]
impl CharacterRepo for SqliteCharacterRepo {
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError> {
        let row = sqlx::query("SELECT * FROM characters WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("characters", e))?;

        row.as_ref().map(row_to_character).transpose()
    }

    async fn list(&self) -> Result<Vec<Character>, RepoError> {
        let rows = sqlx::query("SELECT * FROM characters ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("characters", e))?;

        rows.iter().map(row_to_character).collect()
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Character>, RepoError> {
        let rows = sqlx::query("SELECT * FROM characters WHERE user_id = ? ORDER BY name")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("characters", e))?;

        rows.iter().map(row_to_character).collect()
    }

    async fn insert(&self, character: &Character) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO characters (
                id, user_id, name, class, level, health, max_health,
                experience_in_level, experience_to_next_level, total_experience,
                gold, strength, dexterity, constitution, intelligence, wisdom,
                charisma, weapon_name, weapon_damage, weapon_attack_bonus,
                armor_name, armor_class, shield_name, shield_armor_class_bonus,
                created_at, updated_at, version
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(character.id.to_string())
        .bind(&character.user_id)
        .bind(&character.name)
        .bind(character.class.to_string())
        .bind(character.level)
        .bind(character.health)
        .bind(character.max_health)
        .bind(character.experience_in_level)
        .bind(character.experience_to_next_level)
        .bind(character.total_experience)
        .bind(character.gold)
        .bind(character.abilities.strength)
        .bind(character.abilities.dexterity)
        .bind(character.abilities.constitution)
        .bind(character.abilities.intelligence)
        .bind(character.abilities.wisdom)
        .bind(character.abilities.charisma)
        .bind(&character.equipment.weapon_name)
        .bind(&character.equipment.weapon_damage)
        .bind(character.equipment.weapon_attack_bonus)
        .bind(&character.equipment.armor_name)
        .bind(character.equipment.armor_class)
        .bind(character.equipment.shield_name.as_deref())
        .bind(character.equipment.shield_armor_class_bonus)
        .bind(character.created_at.to_rfc3339())
        .bind(character.updated_at.to_rfc3339())
        .bind(character.version)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("characters", e))?;

        Ok(())
    }

    async fn update(&self, character: &Character) -> Result<i64, RepoError> {
        let new_version = character.version + 1;
        let result = sqlx::query(
            r#"
            UPDATE characters SET
                name = ?, class = ?, level = ?, health = ?, max_health = ?,
                experience_in_level = ?, experience_to_next_level = ?,
                total_experience = ?, gold = ?,
                strength = ?, dexterity = ?, constitution = ?,
                intelligence = ?, wisdom = ?, charisma = ?,
                weapon_name = ?, weapon_damage = ?, weapon_attack_bonus = ?,
                armor_name = ?, armor_class = ?, shield_name = ?,
                shield_armor_class_bonus = ?, updated_at = ?, version = ?
            WHERE id = ? AND version = ?
            "#,
        )
        .bind(&character.name)
        .bind(character.class.to_string())
        .bind(character.level)
        .bind(character.health)
        .bind(character.max_health)
        .bind(character.experience_in_level)
        .bind(character.experience_to_next_level)
        .bind(character.total_experience)
        .bind(character.gold)
        .bind(character.abilities.strength)
        .bind(character.abilities.dexterity)
        .bind(character.abilities.constitution)
        .bind(character.abilities.intelligence)
        .bind(character.abilities.wisdom)
        .bind(character.abilities.charisma)
        .bind(&character.equipment.weapon_name)
        .bind(&character.equipment.weapon_damage)
        .bind(character.equipment.weapon_attack_bonus)
        .bind(&character.equipment.armor_name)
        .bind(character.equipment.armor_class)
        .bind(character.equipment.shield_name.as_deref())
        .bind(character.equipment.shield_armor_class_bonus)
        .bind(character.updated_at.to_rfc3339())
        .bind(new_version)
        .bind(character.id.to_string())
        .bind(character.version)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("characters", e))?;

        if result.rows_affected() == 0 {
            // Either the row is gone or someone else wrote first
            return match self.get(character.id).await? {
                None => Err(RepoError::NotFound),
                Some(current) => Err(RepoError::conflict(format!(
                    "character {} is at version {}, caller had {}",
                    character.id, current.version, character.version
                ))),
            };
        }

        Ok(new_version)
    }

    async fn delete(&self, id: CharacterId) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM characters WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("characters", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, RepoError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM characters")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepoError::database("characters", e))?;
        Ok(row.get("n"))
    }
}
