use serde::Serialize;

use crate::catalog::MealRecord;

/// Fixed meal times of a day, in serving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Snack => "snack",
            MealSlot::Dinner => "dinner",
        }
    }
}

/// One meal per slot; `None` serialises as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SlotMeals {
    pub breakfast: Option<MealRecord>,
    pub lunch: Option<MealRecord>,
    pub snack: Option<MealRecord>,
    pub dinner: Option<MealRecord>,
}

impl SlotMeals {
    pub fn get(&self, slot: MealSlot) -> Option<&MealRecord> {
        match slot {
            MealSlot::Breakfast => self.breakfast.as_ref(),
            MealSlot::Lunch => self.lunch.as_ref(),
            MealSlot::Snack => self.snack.as_ref(),
            MealSlot::Dinner => self.dinner.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: MealSlot) -> &mut Option<MealRecord> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Snack => &mut self.snack,
            MealSlot::Dinner => &mut self.dinner,
        }
    }

    pub fn filled(&self) -> impl Iterator<Item = (MealSlot, &MealRecord)> {
        MealSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|m| (slot, m)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPlan {
    pub target_calories: i64,
    #[serde(serialize_with = "whole_kcal_as_integer")]
    pub total_plan_calories: f64,
    pub meals: SlotMeals,
}

/// Pick the first meal tagged for each slot. A meal tagged for two slots may
/// fill both.
pub fn build_daily_plan(filtered: &[MealRecord], target_calories: f64) -> DailyPlan {
    let mut meals = SlotMeals::default();
    for slot in MealSlot::ALL {
        *meals.slot_mut(slot) = filtered.iter().find(|m| m.has_tag(slot.tag())).cloned();
    }

    let total_plan_calories = meals.filled().map(|(_, m)| m.kcal()).sum();

    DailyPlan {
        // half-to-even, so 2.5 rounds to 2
        target_calories: target_calories.round_ties_even() as i64,
        total_plan_calories,
        meals,
    }
}

/// A total of whole-number meals is written as `200`, not `200.0`.
fn whole_kcal_as_integer<S: serde::Serializer>(kcal: &f64, s: S) -> Result<S::Ok, S::Error> {
    if kcal.fract() == 0.0 && kcal.abs() < i64::MAX as f64 {
        s.serialize_i64(*kcal as i64)
    } else {
        s.serialize_f64(*kcal)
    }
}
