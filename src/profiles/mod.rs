use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
mod repo;
pub mod repo_types;

pub use repo_types::UserProfile;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::profile_routes())
}
