use tracing::debug;

use crate::{
    catalog::{CatalogError, MealCatalog},
    profiles::UserProfile,
    recommendations::{
        energy::estimate_daily_calories,
        filter::{filter_meals, parse_allergies},
        plan::{build_daily_plan, DailyPlan},
        preferences::{ActivityLevel, DietaryPreference, HealthGoal},
    },
};

/// Build today's plan for `profile` from a fresh catalog snapshot.
///
/// Only a catalog failure is an error; a profile nothing matches simply gets
/// empty slots.
pub fn recommend(catalog: &dyn MealCatalog, profile: &UserProfile) -> Result<DailyPlan, CatalogError> {
    let meals = catalog.load()?;

    let activity = ActivityLevel::parse(&profile.activity_level);
    let goal = HealthGoal::parse(&profile.health_goal);
    let diet = DietaryPreference::parse(&profile.dietary_preference);

    let target = estimate_daily_calories(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        &activity,
        &goal,
    );

    let allergies = parse_allergies(profile.allergies.as_deref());
    let catalog_size = meals.len();
    let filtered = filter_meals(meals, &diet, &goal, &allergies);

    let plan = build_daily_plan(&filtered, target);
    debug!(
        user_id = profile.id,
        target_calories = plan.target_calories,
        catalog_size,
        matched = filtered.len(),
        filled_slots = plan.meals.filled().count(),
        "daily plan built"
    );
    Ok(plan)
}
