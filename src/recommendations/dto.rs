use serde::Serialize;

use crate::recommendations::plan::DailyPlan;

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub user: String,
    pub goal: String,
    pub diet: String,
    pub daily_plan: DailyPlan,
}
