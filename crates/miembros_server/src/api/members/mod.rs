//! Member API module.

mod handler;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::BASE_PATH;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest(BASE_PATH, routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/crear", post(handler::create))
        .route("/{id}", get(handler::get_by_id))
        .route("/actualizar/{id}", put(handler::update))
        .route("/eliminar/{id}", delete(handler::delete))
}
