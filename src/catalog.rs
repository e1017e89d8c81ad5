use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// One entry of the meal dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    pub name: String,
    /// Kept as the dataset wrote it, so `150` is echoed as `150`, not `150.0`.
    pub calories: serde_json::Number,
    pub tags: Vec<String>,
    /// Any further attributes carried by the dataset (protein, cuisine...),
    /// passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl MealRecord {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, calories: f64, tags: &[&str]) -> Self {
        let calories = if calories.fract() == 0.0 {
            serde_json::Number::from(calories as i64)
        } else {
            serde_json::Number::from_f64(calories).expect("finite calories")
        };
        Self {
            name: name.into(),
            calories,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            extra: serde_json::Map::new(),
        }
    }

    pub fn kcal(&self) -> f64 {
        self.calories.as_f64().unwrap_or_default()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("read meal dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse meal dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("meal record #{index} ({name:?}): {reason}")]
    InvalidRecord {
        index: usize,
        name: String,
        reason: &'static str,
    },
}

/// Read-only source of meal records. Every call returns a fresh snapshot.
pub trait MealCatalog: Send + Sync {
    fn load(&self) -> Result<Vec<MealRecord>, CatalogError>;

    /// Meals carrying `tag`, compared case-insensitively, in catalog order.
    fn filter_by_tag(&self, tag: &str) -> Result<Vec<MealRecord>, CatalogError> {
        let wanted = tag.trim().to_lowercase();
        Ok(self
            .load()?
            .into_iter()
            .filter(|m| m.tags.iter().any(|t| t.to_lowercase() == wanted))
            .collect())
    }
}

/// Dataset stored as a JSON array on disk, re-read on every `load`.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MealCatalog for JsonFileCatalog {
    fn load(&self) -> Result<Vec<MealRecord>, CatalogError> {
        let raw = std::fs::read(&self.path).map_err(|source| CatalogError::Read {
            path: self.path.clone(),
            source,
        })?;
        let meals = parse_meals(&raw, &self.path)?;
        debug!(path = %self.path.display(), count = meals.len(), "meal catalog loaded");
        Ok(meals)
    }
}

/// Fixed in-memory catalog.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    meals: Vec<MealRecord>,
}

#[cfg(test)]
impl StaticCatalog {
    pub fn new(meals: Vec<MealRecord>) -> Self {
        Self { meals }
    }
}

#[cfg(test)]
impl MealCatalog for StaticCatalog {
    fn load(&self) -> Result<Vec<MealRecord>, CatalogError> {
        Ok(self.meals.clone())
    }
}

pub fn parse_meals(raw: &[u8], origin: &Path) -> Result<Vec<MealRecord>, CatalogError> {
    let meals: Vec<MealRecord> =
        serde_json::from_slice(raw).map_err(|source| CatalogError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
    for (index, meal) in meals.iter().enumerate() {
        validate(index, meal)?;
    }
    Ok(meals)
}

fn validate(index: usize, meal: &MealRecord) -> Result<(), CatalogError> {
    let reason = if meal.name.trim().is_empty() {
        "name is empty"
    } else if meal.kcal() < 0.0 {
        "calories is negative"
    } else {
        return Ok(());
    };
    Err(CatalogError::InvalidRecord {
        index,
        name: meal.name.clone(),
        reason,
    })
}

#[cfg(test)]
mod catalog_tests {
    use super::*;

    fn origin() -> &'static Path {
        Path::new("meals.json")
    }

    #[test]
    fn parses_records_and_keeps_extra_fields() {
        let raw = br#"[
            {"name": "Oats", "calories": 150, "tags": ["veg", "breakfast"], "protein": 5},
            {"name": "Chicken Wrap", "calories": 420.5, "tags": ["non-veg", "lunch"]}
        ]"#;
        let meals = parse_meals(raw, origin()).unwrap();
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[0].name, "Oats");
        assert_eq!(meals[0].kcal(), 150.0);
        assert_eq!(meals[1].kcal(), 420.5);
        assert_eq!(meals[0].extra.get("protein"), Some(&serde_json::json!(5)));
        assert!(meals[1].has_tag("lunch"));

        let echoed = serde_json::to_value(&meals[0]).unwrap();
        assert_eq!(echoed["protein"], 5);
        assert_eq!(echoed["tags"], serde_json::json!(["veg", "breakfast"]));
    }

    #[test]
    fn calories_are_echoed_as_written() {
        let raw = br#"[
            {"name": "Oats", "calories": 150, "tags": [], "protein": 6},
            {"name": "Wrap", "calories": 420.5, "tags": []}
        ]"#;
        let meals = parse_meals(raw, origin()).unwrap();
        let first = serde_json::to_string(&meals[0]).unwrap();
        assert!(first.contains(r#""calories":150,"#), "{first}");
        assert!(first.contains(r#""protein":6"#), "{first}");
        let second = serde_json::to_string(&meals[1]).unwrap();
        assert!(second.contains(r#""calories":420.5"#), "{second}");
    }

    #[test]
    fn rejects_missing_fields() {
        let raw = br#"[{"name": "Oats", "tags": ["veg"]}]"#;
        let err = parse_meals(raw, origin()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn rejects_negative_calories() {
        let raw = br#"[
            {"name": "Oats", "calories": 150, "tags": []},
            {"name": "Broken", "calories": -1, "tags": []}
        ]"#;
        match parse_meals(raw, origin()).unwrap_err() {
            CatalogError::InvalidRecord { index, name, .. } => {
                assert_eq!(index, 1);
                assert_eq!(name, "Broken");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_blank_name() {
        let raw = br#"[{"name": "  ", "calories": 10, "tags": []}]"#;
        assert!(matches!(
            parse_meals(raw, origin()),
            Err(CatalogError::InvalidRecord { index: 0, .. })
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let catalog = JsonFileCatalog::new("/definitely/not/here/meals.json");
        let err = catalog.load().unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here/meals.json"));
    }

    #[test]
    fn file_catalog_reloads_on_every_call() {
        let path = std::env::temp_dir().join(format!("jivocare-catalog-{}.json", std::process::id()));
        std::fs::write(&path, br#"[{"name": "Oats", "calories": 150, "tags": ["breakfast"]}]"#)
            .unwrap();
        let catalog = JsonFileCatalog::new(&path);
        assert_eq!(catalog.load().unwrap().len(), 1);

        std::fs::write(&path, b"[]").unwrap();
        assert!(catalog.load().unwrap().is_empty());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn filter_by_tag_is_case_insensitive_and_ordered() {
        let catalog = StaticCatalog::new(vec![
            MealRecord::new("Paneer Tikka", 300.0, &["veg", "dinner"]),
            MealRecord::new("Egg Bhurji", 250.0, &["non-veg", "breakfast"]),
            MealRecord::new("Dal Rice", 400.0, &["veg", "lunch"]),
        ]);
        let veg = catalog.filter_by_tag(" VEG ").unwrap();
        let names: Vec<_> = veg.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Paneer Tikka", "Dal Rice"]);
        assert!(catalog.filter_by_tag("keto").unwrap().is_empty());
    }

    #[test]
    fn filter_by_tag_is_exact_membership() {
        let catalog = StaticCatalog::new(vec![MealRecord::new("Tofu", 200.0, &["vegan"])]);
        assert!(catalog.filter_by_tag("veg").unwrap().is_empty());
    }
}
