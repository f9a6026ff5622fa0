//! SQLite-backed monster storage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use dndrpg_domain::{ChallengeRating, Monster, MonsterId};

use crate::infrastructure::ports::{MonsterRepo, RepoError};

/// SQLite implementation of [`MonsterRepo`].
///
/// Challenge ratings are stored in eighths so the fractional ratings stay
/// exact and range queries are plain integer comparisons.
pub struct SqliteMonsterRepo {
    pool: SqlitePool,
}

impl SqliteMonsterRepo {
    pub async fn new(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("monsters", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS monsters (
                id TEXT PRIMARY KEY,
                api_slug TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL,
                cr_eighths INTEGER NOT NULL,
                armor_class INTEGER NOT NULL,
                hit_points INTEGER NOT NULL,
                damage_dice TEXT NOT NULL,
                xp_award INTEGER NOT NULL,
                monster_type TEXT NOT NULL,
                attack_bonus INTEGER,
                attack_name TEXT,
                image_url TEXT,
                has_only_physical_attacks INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("monsters", e))?;

        Ok(Self { pool })
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, RepoError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepoError::Serialization(e.to_string()))
}

fn row_to_monster(row: &sqlx::sqlite::SqliteRow) -> Result<Monster, RepoError> {
    let id: String = row.get("id");
    let id = Uuid::parse_str(&id).map_err(|e| RepoError::Serialization(e.to_string()))?;
    let created_at: String = row.get("created_at");
    let updated_at: String = row.get("updated_at");
    let has_only_physical_attacks: i32 = row.get("has_only_physical_attacks");

    Ok(Monster {
        id: MonsterId::from_uuid(id),
        api_slug: row.get("api_slug"),
        name: row.get("name"),
        challenge_rating: ChallengeRating::from_eighths(row.get("cr_eighths")),
        armor_class: row.get("armor_class"),
        hit_points: row.get("hit_points"),
        damage_dice: row.get("damage_dice"),
        xp_award: row.get("xp_award"),
        monster_type: row.get("monster_type"),
        attack_bonus: row.get("attack_bonus"),
        attack_name: row.get("attack_name"),
        image_url: row.get("image_url"),
        has_only_physical_attacks: has_only_physical_attacks != 0,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}

#[async_trait]
impl MonsterRepo for SqliteMonsterRepo {
    async fn get(&self, id: MonsterId) -> Result<Option<Monster>, RepoError> {
        let row = sqlx::query("SELECT * FROM monsters WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("monsters", e))?;

        row.as_ref().map(row_to_monster).transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Monster>, RepoError> {
        let row = sqlx::query("SELECT * FROM monsters WHERE api_slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("monsters", e))?;

        row.as_ref().map(row_to_monster).transpose()
    }

    async fn list(&self) -> Result<Vec<Monster>, RepoError> {
        let rows = sqlx::query("SELECT * FROM monsters ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("monsters", e))?;

        rows.iter().map(row_to_monster).collect()
    }

    async fn list_in_cr_range(
        &self,
        min: ChallengeRating,
        max: ChallengeRating,
    ) -> Result<Vec<Monster>, RepoError> {
        let rows = sqlx::query(
            "SELECT * FROM monsters WHERE cr_eighths BETWEEN ? AND ? ORDER BY cr_eighths, name",
        )
        .bind(min.eighths())
        .bind(max.eighths())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("monsters", e))?;

        rows.iter().map(row_to_monster).collect()
    }

    async fn insert(&self, monster: &Monster) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO monsters (
                id, api_slug, name, cr_eighths, armor_class, hit_points,
                damage_dice, xp_award, monster_type, attack_bonus, attack_name,
                image_url, has_only_physical_attacks, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(monster.id.to_string())
        .bind(&monster.api_slug)
        .bind(&monster.name)
        .bind(monster.challenge_rating.eighths())
        .bind(monster.armor_class)
        .bind(monster.hit_points)
        .bind(&monster.damage_dice)
        .bind(monster.xp_award)
        .bind(&monster.monster_type)
        .bind(monster.attack_bonus)
        .bind(monster.attack_name.as_deref())
        .bind(monster.image_url.as_deref())
        .bind(i32::from(monster.has_only_physical_attacks))
        .bind(monster.created_at.to_rfc3339())
        .bind(monster.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("monsters", e))?;

        Ok(())
    }

    async fn count(&self) -> Result<i64, RepoError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM monsters")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepoError::database("monsters", e))?;
        Ok(row.get("n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    async fn repo() -> (SqliteMonsterRepo, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("temp dir");
        let db_path = dir.path().join("monsters.db");
        let repo = SqliteMonsterRepo::new(&db_path.to_string_lossy())
            .await
            .expect("open repo");
        (repo, dir)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn goblin() -> Monster {
        Monster::new("goblin", "Goblin", ChallengeRating::ONE_QUARTER, now())
            .with_combat_stats(15, 7, "1d6+2")
            .with_xp_award(50)
            .with_attack("Scimitar", 4)
    }

    #[tokio::test]
    async fn round_trips_a_monster() {
        let (repo, _dir) = repo().await;
        let monster = goblin();
        repo.insert(&monster).await.expect("insert");

        let loaded = repo
            .find_by_slug("goblin")
            .await
            .expect("find")
            .expect("monster exists");
        assert_eq!(loaded.name, "Goblin");
        assert_eq!(loaded.challenge_rating, ChallengeRating::ONE_QUARTER);
        assert_eq!(loaded.attack_name.as_deref(), Some("Scimitar"));
        assert_eq!(loaded.attack_bonus, Some(4));
        assert!(loaded.has_only_physical_attacks);
    }

    #[tokio::test]
    async fn filters_by_cr_range() {
        let (repo, _dir) = repo().await;
        repo.insert(&goblin()).await.expect("insert");
        repo.insert(
            &Monster::new("ogre", "Ogre", ChallengeRating::from_whole(2), now())
                .with_combat_stats(11, 59, "2d8+4")
                .with_xp_award(450),
        )
        .await
        .expect("insert");

        let low = repo
            .list_in_cr_range(ChallengeRating::ONE_EIGHTH, ChallengeRating::ONE_HALF)
            .await
            .expect("list");
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].api_slug, "goblin");

        let all = repo
            .list_in_cr_range(ChallengeRating::ONE_EIGHTH, ChallengeRating::from_whole(5))
            .await
            .expect("list");
        assert_eq!(all.len(), 2);
        assert_eq!(repo.count().await.expect("count"), 2);
    }
}
