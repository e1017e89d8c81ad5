use serde::Serialize;

/// Approximate values for one standard serving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutritionFacts {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

const fn facts(calories: f64, protein: f64, carbs: f64, fat: f64) -> NutritionFacts {
    NutritionFacts {
        calories,
        protein,
        carbs,
        fat,
    }
}

/// Used when a label matches nothing in the table.
pub const GENERIC_SERVING: NutritionFacts = facts(200.0, 5.0, 30.0, 8.0);

// Checked in order; the first key contained in the label wins.
const NUTRITION_TABLE: &[(&str, NutritionFacts)] = &[
    ("pizza", facts(285.0, 12.0, 36.0, 10.0)),
    ("hamburger", facts(354.0, 20.0, 29.0, 17.0)),
    ("hotdog", facts(290.0, 10.0, 24.0, 18.0)),
    ("french fries", facts(312.0, 3.0, 41.0, 15.0)),
    ("ice cream", facts(207.0, 4.0, 24.0, 11.0)),
    ("cake", facts(350.0, 4.0, 55.0, 14.0)),
    ("donut", facts(452.0, 5.0, 51.0, 25.0)),
    ("sandwich", facts(300.0, 15.0, 35.0, 10.0)),
    ("rice", facts(206.0, 4.0, 45.0, 0.4)),
    ("chicken", facts(239.0, 27.0, 0.0, 14.0)),
    ("egg", facts(155.0, 13.0, 1.0, 11.0)),
    ("banana", facts(89.0, 1.0, 23.0, 0.3)),
    ("apple", facts(52.0, 0.3, 14.0, 0.2)),
    ("broccoli", facts(55.0, 4.0, 11.0, 0.6)),
    ("carrot", facts(41.0, 1.0, 10.0, 0.2)),
    ("corn", facts(86.0, 3.0, 19.0, 1.4)),
    ("spaghetti", facts(220.0, 8.0, 43.0, 1.3)),
    ("soup", facts(150.0, 6.0, 18.0, 5.0)),
    ("salad", facts(50.0, 2.0, 8.0, 0.5)),
    ("bread", facts(150.0, 5.0, 28.0, 2.0)),
    ("dal", facts(116.0, 9.0, 20.0, 0.4)),
    ("paneer", facts(265.0, 18.0, 3.0, 20.0)),
    ("roti", facts(120.0, 3.0, 25.0, 1.0)),
    ("curry", facts(180.0, 8.0, 15.0, 9.0)),
    ("biryani", facts(290.0, 10.0, 45.0, 8.0)),
    ("samosa", facts(262.0, 5.0, 32.0, 13.0)),
    ("idli", facts(58.0, 2.0, 12.0, 0.4)),
    ("dosa", facts(168.0, 4.0, 30.0, 4.0)),
    ("naan", facts(317.0, 9.0, 55.0, 7.0)),
    ("khichdi", facts(360.0, 12.0, 62.0, 8.0)),
];

pub fn estimate_nutrition(label: &str) -> NutritionFacts {
    let label = label.to_lowercase();
    NUTRITION_TABLE
        .iter()
        .find(|(key, _)| label.contains(key))
        .map(|(_, f)| *f)
        .unwrap_or(GENERIC_SERVING)
}
