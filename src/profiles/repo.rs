use sqlx::PgPool;

use crate::profiles::repo_types::{NewUserProfile, UserProfile};

const COLUMNS: &str = "id, name, age, height_cm, weight_kg, activity_level, \
                       dietary_preference, health_goal, allergies, health_conditions, created_at";

impl UserProfile {
    pub async fn find_by_id(db: &PgPool, id: i64) -> anyhow::Result<Option<UserProfile>> {
        let profile = sqlx::query_as::<_, UserProfile>(&format!(
            "SELECT {COLUMNS} FROM user_profiles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(profile)
    }

    pub async fn find_by_name(db: &PgPool, name: &str) -> anyhow::Result<Option<UserProfile>> {
        let profile = sqlx::query_as::<_, UserProfile>(&format!(
            "SELECT {COLUMNS} FROM user_profiles WHERE name = $1"
        ))
        .bind(name)
        .fetch_optional(db)
        .await?;
        Ok(profile)
    }

    pub async fn list(db: &PgPool) -> anyhow::Result<Vec<UserProfile>> {
        let rows = sqlx::query_as::<_, UserProfile>(&format!(
            "SELECT {COLUMNS} FROM user_profiles ORDER BY id"
        ))
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Insert a profile. Fails with a unique violation when the name is taken.
    pub async fn create(db: &PgPool, new: &NewUserProfile) -> Result<UserProfile, sqlx::Error> {
        sqlx::query_as::<_, UserProfile>(&format!(
            r#"
            INSERT INTO user_profiles
                (name, age, height_cm, weight_kg, activity_level,
                 dietary_preference, health_goal, allergies, health_conditions)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&new.name)
        .bind(new.age)
        .bind(new.height_cm)
        .bind(new.weight_kg)
        .bind(&new.activity_level)
        .bind(&new.dietary_preference)
        .bind(&new.health_goal)
        .bind(&new.allergies)
        .bind(&new.health_conditions)
        .fetch_one(db)
        .await
    }

    /// Returns `false` when no row had that id.
    pub async fn delete(db: &PgPool, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM user_profiles WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
