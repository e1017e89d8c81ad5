//! Typed views over the free-text profile fields that drive a recommendation.
//!
//! Profiles store these as plain strings. Parsing never fails: anything
//! unrecognised lands in the `Other` arm, which carries the documented
//! fallback behaviour.

/// Self-reported activity, mapped to a TDEE multiplier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    Other(String),
}

impl ActivityLevel {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "sedentary" => Self::Sedentary,
            "light" => Self::Light,
            "moderate" => Self::Moderate,
            "active" => Self::Active,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn factor(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            // unknown levels are treated as light activity
            Self::Other(_) => 1.375,
        }
    }
}

/// What the user is trying to achieve. Also used as a meal tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthGoal {
    WeightLoss,
    MuscleGain,
    Maintenance,
    Other(String),
}

impl HealthGoal {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "weight_loss" => Self::WeightLoss,
            "muscle_gain" => Self::MuscleGain,
            "maintenance" => Self::Maintenance,
            other => Self::Other(other.to_string()),
        }
    }

    /// Daily kcal added to (or removed from) the TDEE.
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            Self::WeightLoss => -500.0,
            Self::MuscleGain => 300.0,
            Self::Maintenance | Self::Other(_) => 0.0,
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Maintenance => "maintenance",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DietaryPreference {
    Veg,
    Vegan,
    Keto,
    NonVeg,
    Other(String),
}

impl DietaryPreference {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "veg" => Self::Veg,
            "vegan" => Self::Vegan,
            "keto" => Self::Keto,
            "non-veg" => Self::NonVeg,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            Self::Veg => "veg",
            Self::Vegan => "vegan",
            Self::Keto => "keto",
            Self::NonVeg => "non-veg",
            Self::Other(raw) => raw.as_str(),
        }
    }
}
