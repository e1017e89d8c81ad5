use crate::catalog::MealRecord;
use crate::recommendations::preferences::{DietaryPreference, HealthGoal};

/// Split a comma separated allergy list into lowercase needles.
///
/// Blank entries are kept: an empty needle is contained in every name, so a
/// list like `"peanut,"` rules out the whole catalog.
pub fn parse_allergies(raw: Option<&str>) -> Vec<String> {
    match raw {
        None | Some("") => Vec::new(),
        Some(s) => s.split(',').map(|a| a.trim().to_lowercase()).collect(),
    }
}

fn contains_allergen(meal: &MealRecord, allergies: &[String]) -> bool {
    let name = meal.name.to_lowercase();
    allergies.iter().any(|a| name.contains(a.as_str()))
}

/// Keep meals tagged with the diet OR the goal, minus any whose name mentions
/// an allergen. Matching on the name is textual: "egg" also hits "eggplant".
pub fn filter_meals(
    meals: Vec<MealRecord>,
    diet: &DietaryPreference,
    goal: &HealthGoal,
    allergies: &[String],
) -> Vec<MealRecord> {
    meals
        .into_iter()
        .filter(|meal| !contains_allergen(meal, allergies))
        .filter(|meal| meal.has_tag(diet.as_tag()) || meal.has_tag(goal.as_tag()))
        .collect()
}
