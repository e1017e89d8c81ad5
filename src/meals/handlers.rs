use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{error, instrument};

use crate::{
    catalog::{CatalogError, MealCatalog, MealRecord},
    meals::dto::{MealListResponse, TagFilter},
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", get(list_meals))
        .route("/meals/filter", get(filter_meals_by_tag))
}

#[instrument(skip(state))]
pub async fn list_meals(
    State(state): State<AppState>,
) -> Result<Json<MealListResponse>, (StatusCode, String)> {
    let meals = with_catalog(state.catalog.clone(), |c| c.load()).await?;
    Ok(Json(MealListResponse {
        total: meals.len(),
        message: None,
        meals,
    }))
}

#[instrument(skip(state))]
pub async fn filter_meals_by_tag(
    State(state): State<AppState>,
    Query(q): Query<TagFilter>,
) -> Result<Json<MealListResponse>, (StatusCode, String)> {
    let tag = q.tag.clone();
    let meals = with_catalog(state.catalog.clone(), move |c| c.filter_by_tag(&tag)).await?;
    let message = meals
        .is_empty()
        .then(|| format!("No meals found for tag: {}", q.tag));
    Ok(Json(MealListResponse {
        total: meals.len(),
        message,
        meals,
    }))
}

async fn with_catalog<F>(
    catalog: Arc<dyn MealCatalog>,
    f: F,
) -> Result<Vec<MealRecord>, (StatusCode, String)>
where
    F: FnOnce(&dyn MealCatalog) -> Result<Vec<MealRecord>, CatalogError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || f(catalog.as_ref()))
        .await
        .map_err(internal)?
        .map_err(|e| {
            error!(error = %e, "meal catalog unavailable");
            internal(e)
        })
}

fn internal<E: std::error::Error>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
