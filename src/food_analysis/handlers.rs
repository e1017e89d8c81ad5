use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    classifier::ClassifierError,
    food_analysis::{
        dto::FoodAnalysis,
        services::{analyze_food_image, AnalysisError},
    },
    state::AppState,
};

pub fn write_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/food-analysis", post(analyze_upload))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

/// POST /food-analysis (multipart, field `file`)
#[instrument(skip(state, mp))]
pub async fn analyze_upload(
    State(state): State<AppState>,
    mut mp: Multipart,
) -> Result<Json<FoodAnalysis>, (StatusCode, String)> {
    let mut upload = None;
    while let Some(field) = mp
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let content_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "application/octet-stream".into());
        let data = field
            .bytes()
            .await
            .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
        upload = Some((data, content_type));
        break;
    }

    let Some((data, content_type)) = upload.filter(|(d, _)| !d.is_empty()) else {
        warn!("food analysis without a file");
        return Err((StatusCode::BAD_REQUEST, "file is required".into()));
    };

    let size = data.len();
    match analyze_food_image(state.classifier.as_ref(), data, &content_type).await {
        Ok(analysis) => {
            info!(
                size,
                food = %analysis.food_detected,
                confidence = analysis.confidence_percent,
                "food image analysed"
            );
            Ok(Json(analysis))
        }
        Err(e) => {
            error!(error = %e, size, "food image analysis failed");
            Err(status_for(&e))
        }
    }
}

fn status_for(e: &AnalysisError) -> (StatusCode, String) {
    let status = match e {
        AnalysisError::Classifier(ClassifierError::NotConfigured) => StatusCode::SERVICE_UNAVAILABLE,
        AnalysisError::Classifier(_) => StatusCode::BAD_GATEWAY,
        AnalysisError::NoPrediction => StatusCode::UNPROCESSABLE_ENTITY,
    };
    (status, e.to_string())
}

#[cfg(test)]
mod food_analysis_handler_tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::{
        app::build_app,
        classifier::{DisabledClassifier, FoodClassifier},
        food_analysis::services::test_support::{prediction, CannedClassifier},
        state::AppState,
    };

    const BOUNDARY: &str = "X-JIVOCARE-BOUNDARY";

    fn multipart(field: &str, payload: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"meal.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(payload);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        Request::post("/food-analysis")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn with_classifier(classifier: impl FoodClassifier + 'static) -> AppState {
        let mut state = AppState::fake();
        state.classifier = Arc::new(classifier) as Arc<dyn FoodClassifier>;
        state
    }

    #[tokio::test]
    async fn analyses_uploaded_photo() {
        let state = with_classifier(CannedClassifier(vec![
            prediction("pizza", 0.9),
            prediction("bagel", 0.05),
        ]));
        let res = build_app(state)
            .oneshot(multipart("file", b"\xff\xd8fake-jpeg"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["food_detected"], "pizza");
        assert_eq!(json["confidence_percent"], 90.0);
        assert_eq!(json["nutrition_per_serving"]["calories"], 285.0);
        assert_eq!(json["other_possibilities"][1]["food"], "bagel");
    }

    #[tokio::test]
    async fn missing_file_field_is_bad_request() {
        let state = with_classifier(CannedClassifier(vec![prediction("pizza", 0.9)]));
        let res = build_app(state)
            .oneshot(multipart("photo", b"data"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unconfigured_classifier_is_unavailable() {
        let res = build_app(with_classifier(DisabledClassifier))
            .oneshot(multipart("file", b"data"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn empty_predictions_are_unprocessable() {
        let res = build_app(with_classifier(CannedClassifier(Vec::new())))
            .oneshot(multipart("file", b"data"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
