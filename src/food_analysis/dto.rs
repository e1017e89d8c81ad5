use serde::Serialize;

use crate::food_analysis::nutrition::NutritionFacts;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodCandidate {
    pub food: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodAnalysis {
    pub food_detected: String,
    pub confidence_percent: f64,
    pub other_possibilities: Vec<FoodCandidate>,
    pub nutrition_per_serving: NutritionFacts,
    pub note: &'static str,
}
