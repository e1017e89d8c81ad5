use bytes::Bytes;
use thiserror::Error;

use crate::{
    classifier::{ClassifierError, FoodClassifier, Prediction},
    food_analysis::{
        dto::{FoodAnalysis, FoodCandidate},
        nutrition::estimate_nutrition,
    },
};

pub const SERVING_NOTE: &str = "Nutrition values are estimates per standard serving size";
const CANDIDATES: usize = 3;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
    #[error("classifier returned no predictions")]
    NoPrediction,
}

/// Classify a food photo and attach a nutrition estimate for the top label.
pub async fn analyze_food_image(
    classifier: &dyn FoodClassifier,
    image: Bytes,
    content_type: &str,
) -> Result<FoodAnalysis, AnalysisError> {
    let predictions = classifier.classify(image, content_type).await?;
    let top = predictions.first().ok_or(AnalysisError::NoPrediction)?;

    let food_detected = display_label(&top.label);
    let nutrition_per_serving = estimate_nutrition(&food_detected);
    Ok(FoodAnalysis {
        confidence_percent: as_percent(top.confidence),
        other_possibilities: predictions.iter().take(CANDIDATES).map(candidate).collect(),
        food_detected,
        nutrition_per_serving,
        note: SERVING_NOTE,
    })
}

fn candidate(p: &Prediction) -> FoodCandidate {
    FoodCandidate {
        food: display_label(&p.label),
        confidence: as_percent(p.confidence),
    }
}

/// Model labels use underscores for spaces ("french_fries").
fn display_label(label: &str) -> String {
    label.replace('_', " ")
}

fn as_percent(confidence: f64) -> f64 {
    (confidence * 100.0 * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use bytes::Bytes;

    use crate::classifier::{ClassifierError, FoodClassifier, Prediction};

    /// Returns canned predictions regardless of input.
    pub struct CannedClassifier(pub Vec<Prediction>);

    #[async_trait]
    impl FoodClassifier for CannedClassifier {
        async fn classify(
            &self,
            _image: Bytes,
            _content_type: &str,
        ) -> Result<Vec<Prediction>, ClassifierError> {
            Ok(self.0.clone())
        }
    }

    pub fn prediction(label: &str, confidence: f64) -> Prediction {
        Prediction {
            label: label.into(),
            confidence,
        }
    }
}
