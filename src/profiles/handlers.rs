use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    profiles::{
        dto::{CreateProfileRequest, DeletedResponse},
        repo_types::UserProfile,
    },
    state::AppState,
};

pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_profiles).post(create_profile))
        .route("/users/:id", get(get_profile).delete(delete_profile))
}

#[instrument(skip(state, payload))]
pub async fn create_profile(
    State(state): State<AppState>,
    Json(payload): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<UserProfile>), (StatusCode, String)> {
    let new = payload.validate().map_err(|msg| {
        warn!(reason = msg, "invalid profile");
        (StatusCode::BAD_REQUEST, msg.to_string())
    })?;

    match UserProfile::find_by_name(&state.db, &new.name).await {
        Ok(Some(_)) => {
            warn!(name = %new.name, "profile name already taken");
            return Err(name_taken());
        }
        Ok(None) => {}
        Err(e) => {
            error!(error = %e, "find_by_name failed");
            return Err(internal(e));
        }
    }

    let profile = match UserProfile::create(&state.db, &new).await {
        Ok(p) => p,
        // lost a race with a concurrent insert of the same name
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            warn!(name = %new.name, "profile name already taken");
            return Err(name_taken());
        }
        Err(e) => {
            error!(error = %e, "create profile failed");
            return Err(internal(e));
        }
    };

    info!(user_id = profile.id, name = %profile.name, "profile created");
    Ok((StatusCode::CREATED, Json(profile)))
}

#[instrument(skip(state))]
pub async fn list_profiles(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserProfile>>, (StatusCode, String)> {
    let profiles = UserProfile::list(&state.db).await.map_err(|e| {
        error!(error = %e, "list profiles failed");
        internal(e)
    })?;
    Ok(Json(profiles))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserProfile>, (StatusCode, String)> {
    load_profile(&state, id).await.map(Json)
}

#[instrument(skip(state))]
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeletedResponse>, (StatusCode, String)> {
    let deleted = UserProfile::delete(&state.db, id).await.map_err(|e| {
        error!(error = %e, user_id = id, "delete profile failed");
        internal(e)
    })?;
    if !deleted {
        return Err(not_found());
    }
    info!(user_id = id, "profile deleted");
    Ok(Json(DeletedResponse {
        message: format!("User {id} deleted successfully"),
    }))
}

/// Fetch a profile or map the miss to 404.
pub(crate) async fn load_profile(
    state: &AppState,
    id: i64,
) -> Result<UserProfile, (StatusCode, String)> {
    match UserProfile::find_by_id(&state.db, id).await {
        Ok(Some(p)) => Ok(p),
        Ok(None) => {
            warn!(user_id = id, "profile not found");
            Err(not_found())
        }
        Err(e) => {
            error!(error = %e, user_id = id, "find_by_id failed");
            Err(internal(e))
        }
    }
}

fn not_found() -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, "User not found".into())
}

fn name_taken() -> (StatusCode, String) {
    (
        StatusCode::CONFLICT,
        "User with this name already exists".into(),
    )
}

fn internal(e: impl std::fmt::Display) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
