//! Row types and the JSON shapes of the HTTP API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Clone, Debug, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, FromRow)]
pub struct TodoList {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, FromRow)]
pub struct TodoItem {
    pub id: i64,
    pub list_id: i64,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UsernameResponse {
    pub username: String,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct CreateListRequest {
    pub list_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ListResponse {
    pub list_id: i64,
    pub list_name: String,
}

impl From<TodoList> for ListResponse {
    fn from(list: TodoList) -> Self {
        Self {
            list_id: list.id,
            list_name: list.name,
        }
    }
}

/// Body for adding an item and for renaming one.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct ItemRequest {
    pub todo_item_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub todo_item_id: i64,
    pub todo_item_name: String,
}

impl From<TodoItem> for ItemResponse {
    fn from(item: TodoItem) -> Self {
        Self {
            todo_item_id: item.id,
            todo_item_name: item.name,
        }
    }
}
