use crate::recommendations::preferences::{ActivityLevel, HealthGoal};

/// Mifflin-St Jeor resting energy, using the male constant for everyone.
pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age: i32) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + 5.0
}

/// Daily calorie target: BMR scaled by activity, then shifted for the goal.
///
/// Inputs are not range-checked; nonsense biometrics give a nonsense target.
pub fn estimate_daily_calories(
    weight_kg: f64,
    height_cm: f64,
    age: i32,
    activity: &ActivityLevel,
    goal: &HealthGoal,
) -> f64 {
    let tdee = basal_metabolic_rate(weight_kg, height_cm, age) * activity.factor();
    tdee + goal.calorie_adjustment()
}

#[cfg(test)]
mod energy_tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn bmr_formula() {
        assert!(close(basal_metabolic_rate(70.0, 170.0, 30), 1617.5));
    }

    #[test]
    fn moderate_weight_loss_example() {
        let target = estimate_daily_calories(
            70.0,
            170.0,
            30,
            &ActivityLevel::Moderate,
            &HealthGoal::WeightLoss,
        );
        assert!(close(target, 2007.125), "got {target}");
    }

    #[test]
    fn goal_shifts_relative_to_tdee() {
        let tdee = 1617.5 * 1.2;
        let est = |goal: HealthGoal| {
            estimate_daily_calories(70.0, 170.0, 30, &ActivityLevel::Sedentary, &goal)
        };
        assert!(close(est(HealthGoal::WeightLoss), tdee - 500.0));
        assert!(close(est(HealthGoal::MuscleGain), tdee + 300.0));
        assert!(close(est(HealthGoal::Maintenance), tdee));
        assert!(close(est(HealthGoal::Other("recomp".into())), tdee));
    }

    #[test]
    fn unknown_activity_uses_light_factor() {
        let known = estimate_daily_calories(
            60.0,
            160.0,
            40,
            &ActivityLevel::Light,
            &HealthGoal::Maintenance,
        );
        let unknown = estimate_daily_calories(
            60.0,
            160.0,
            40,
            &ActivityLevel::parse("extreme"),
            &HealthGoal::Maintenance,
        );
        assert!(close(known, unknown));
    }

    #[test]
    fn garbage_inputs_are_not_rejected() {
        let target =
            estimate_daily_calories(0.0, 0.0, 200, &ActivityLevel::Active, &HealthGoal::WeightLoss);
        assert!(target < 0.0);
    }
}
