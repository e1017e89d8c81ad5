use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{error, info, instrument};

use crate::{
    profiles::handlers::load_profile,
    recommendations::{dto::RecommendationResponse, services::recommend},
    state::AppState,
};

pub fn recommendation_routes() -> Router<AppState> {
    Router::new().route("/recommendations/:user_id", get(recommend_meals))
}

#[instrument(skip(state))]
pub async fn recommend_meals(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<RecommendationResponse>, (StatusCode, String)> {
    let profile = load_profile(&state, user_id).await?;

    // catalog load reads a file; keep it off the async workers
    let catalog = state.catalog.clone();
    let (profile, plan) = tokio::task::spawn_blocking(move || {
        let plan = recommend(catalog.as_ref(), &profile);
        (profile, plan)
    })
    .await
    .map_err(|e| {
        error!(error = %e, user_id, "recommendation task failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    let daily_plan = plan.map_err(|e| {
        error!(error = %e, user_id, "meal catalog unavailable");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    info!(
        user_id,
        target_calories = daily_plan.target_calories,
        total_plan_calories = daily_plan.total_plan_calories,
        "recommendation served"
    );
    Ok(Json(RecommendationResponse {
        user: profile.name,
        goal: profile.health_goal,
        diet: profile.dietary_preference,
        daily_plan,
    }))
}
