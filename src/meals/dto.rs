use serde::{Deserialize, Serialize};

use crate::catalog::MealRecord;

#[derive(Debug, Serialize)]
pub struct MealListResponse {
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub meals: Vec<MealRecord>,
}

#[derive(Debug, Deserialize)]
pub struct TagFilter {
    pub tag: String,
}
