//! OpenAPI document for the HTTP surface, served at /api/v1/openapi.json.

use crate::error::ErrorBody;
use crate::handlers;
use crate::models::{CreateListRequest, ItemRequest, ItemResponse, ListResponse, RegisterRequest, UsernameResponse};
use axum::Json;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::users::register,
        handlers::users::current_user,
        handlers::todo::create_list,
        handlers::todo::view_list,
        handlers::todo::add_item,
        handlers::todo::update_item,
        handlers::todo::delete_item,
        handlers::todo::delete_list,
    ),
    components(schemas(
        RegisterRequest,
        UsernameResponse,
        CreateListRequest,
        ListResponse,
        ItemRequest,
        ItemResponse,
        ErrorBody,
    )),
    modifiers(&BasicAuthScheme),
    tags(
        (name = "users", description = "Registration and credential check"),
        (name = "lists", description = "To-do lists"),
        (name = "items", description = "Items within a list"),
    )
)]
pub struct ApiDoc;

struct BasicAuthScheme;

impl Modify for BasicAuthScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "basic_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
        );
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
