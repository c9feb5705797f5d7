//! /api/v1 routes: registration, auth check, lists, items.

use crate::handlers::{add_item, create_list, current_user, delete_item, delete_list, register, update_item, view_list};
use crate::openapi::openapi_json;
use crate::state::AppState;
use axum::{routing::get, routing::post, routing::put, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/__user__", get(current_user))
        .route("/list", post(create_list))
        .route("/list/:list_id", get(view_list).post(add_item).delete(delete_list))
        .route("/list/:list_id/:item_id", put(update_item).delete(delete_item))
        .route("/openapi.json", get(openapi_json))
        .with_state(state)
}
