use crate::state::AppState;
use axum::Router;

mod dto;
pub mod energy;
pub mod filter;
pub mod handlers;
pub mod plan;
pub mod preferences;
pub mod services;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::recommendation_routes())
}
