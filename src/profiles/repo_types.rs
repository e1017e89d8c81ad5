use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

/// Stored health profile.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: String,
    pub dietary_preference: String,
    pub health_goal: String,
    pub allergies: Option<String>,
    pub health_conditions: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Fields accepted when creating a profile.
#[derive(Debug, Clone)]
pub struct NewUserProfile {
    pub name: String,
    pub age: i32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: String,
    pub dietary_preference: String,
    pub health_goal: String,
    pub allergies: Option<String>,
    pub health_conditions: Option<String>,
}
