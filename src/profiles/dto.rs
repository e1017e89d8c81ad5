use serde::{Deserialize, Serialize};

use crate::profiles::repo_types::NewUserProfile;

/// Request body for `POST /users`.
#[derive(Debug, Deserialize)]
pub struct CreateProfileRequest {
    pub name: String,
    pub age: i32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: String,
    pub dietary_preference: String,
    pub health_goal: String,
    #[serde(default)]
    pub allergies: Option<String>,
    #[serde(default)]
    pub health_conditions: Option<String>,
}

impl CreateProfileRequest {
    /// Trim text fields and reject biometrics that cannot describe a person.
    pub fn validate(self) -> Result<NewUserProfile, &'static str> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err("name must not be empty");
        }
        if self.age <= 0 {
            return Err("age must be positive");
        }
        if !(self.height_cm.is_finite() && self.height_cm > 0.0) {
            return Err("height_cm must be positive");
        }
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err("weight_kg must be positive");
        }
        Ok(NewUserProfile {
            name,
            age: self.age,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            activity_level: self.activity_level.trim().to_string(),
            dietary_preference: self.dietary_preference.trim().to_string(),
            health_goal: self.health_goal.trim().to_string(),
            allergies: non_blank(self.allergies),
            health_conditions: non_blank(self.health_conditions),
        })
    }
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}
