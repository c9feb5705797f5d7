//! List and item handlers. All require basic auth; lists are not scoped to the caller.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{AuthUser, ValidJson};
use crate::models::{CreateListRequest, ItemRequest, ItemResponse, ListResponse};
use crate::service::TodoService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

fn parse_id(kind: &str, id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid {} id: {}", kind, id_str)))
}

#[utoipa::path(
    post,
    path = "/api/v1/list",
    tag = "lists",
    security(("basic_auth" = [])),
    request_body = CreateListRequest,
    responses(
        (status = 200, description = "List created", body = ListResponse),
        (status = 401, description = "Not authenticated", body = ErrorBody),
        (status = 422, description = "Malformed body", body = ErrorBody),
    )
)]
pub async fn create_list(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ValidJson(body): ValidJson<CreateListRequest>,
) -> Result<Json<ListResponse>, AppError> {
    let list = TodoService::create_list(&state.pool, &body.list_name).await?;
    tracing::info!(user_id = user.id, list_id = list.id, "list created");
    Ok(Json(list.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/list/{list_id}",
    tag = "lists",
    security(("basic_auth" = [])),
    params(("list_id" = i64, Path, description = "List id")),
    responses(
        (status = 200, description = "Items of the list", body = [ItemResponse]),
        (status = 401, description = "Not authenticated", body = ErrorBody),
    )
)]
pub async fn view_list(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(list_id): Path<String>,
) -> Result<Json<Vec<ItemResponse>>, AppError> {
    let list_id = parse_id("list", &list_id)?;
    let items = TodoService::list_items(&state.pool, list_id).await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/v1/list/{list_id}",
    tag = "items",
    security(("basic_auth" = [])),
    params(("list_id" = i64, Path, description = "List id")),
    request_body = ItemRequest,
    responses(
        (status = 200, description = "Item created", body = ItemResponse),
        (status = 404, description = "List not found", body = ErrorBody),
        (status = 422, description = "Malformed body", body = ErrorBody),
    )
)]
pub async fn add_item(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(list_id): Path<String>,
    ValidJson(body): ValidJson<ItemRequest>,
) -> Result<Json<ItemResponse>, AppError> {
    let list_id = parse_id("list", &list_id)?;
    let item = TodoService::add_item(&state.pool, list_id, &body.todo_item_name).await?;
    tracing::info!(user_id = user.id, list_id, item_id = item.id, "item added");
    Ok(Json(item.into()))
}

#[utoipa::path(
    put,
    path = "/api/v1/list/{list_id}/{item_id}",
    tag = "items",
    security(("basic_auth" = [])),
    params(
        ("list_id" = i64, Path, description = "List id"),
        ("item_id" = i64, Path, description = "Item id"),
    ),
    request_body = ItemRequest,
    responses(
        (status = 204, description = "Item renamed"),
        (status = 404, description = "Item not in list", body = ErrorBody),
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path((list_id, item_id)): Path<(String, String)>,
    ValidJson(body): ValidJson<ItemRequest>,
) -> Result<StatusCode, AppError> {
    let list_id = parse_id("list", &list_id)?;
    let item_id = parse_id("item", &item_id)?;
    TodoService::update_item(&state.pool, list_id, item_id, &body.todo_item_name).await?;
    tracing::info!(user_id = user.id, list_id, item_id, "item updated");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/v1/list/{list_id}/{item_id}",
    tag = "items",
    security(("basic_auth" = [])),
    params(
        ("list_id" = i64, Path, description = "List id"),
        ("item_id" = i64, Path, description = "Item id"),
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not in list", body = ErrorBody),
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path((list_id, item_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let list_id = parse_id("list", &list_id)?;
    let item_id = parse_id("item", &item_id)?;
    TodoService::delete_item(&state.pool, list_id, item_id).await?;
    tracing::info!(user_id = user.id, list_id, item_id, "item deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/v1/list/{list_id}",
    tag = "lists",
    security(("basic_auth" = [])),
    params(("list_id" = i64, Path, description = "List id")),
    responses(
        (status = 204, description = "List and its items deleted"),
        (status = 404, description = "List not found", body = ErrorBody),
    )
)]
pub async fn delete_list(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(list_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let list_id = parse_id("list", &list_id)?;
    TodoService::delete_list(&state.pool, list_id).await?;
    tracing::info!(user_id = user.id, list_id, "list deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids() {
        assert_eq!(parse_id("list", "42").unwrap(), 42);
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let err = parse_id("item", "abc").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(err.to_string(), "invalid item id: abc");
    }
}
