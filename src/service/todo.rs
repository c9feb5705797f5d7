//! List and item persistence. Every operation is a single statement.

use crate::error::AppError;
use crate::models::{TodoItem, TodoList};
use crate::store::{qualified_table, ITEMS_TABLE, LISTS_TABLE};
use sqlx::PgPool;

pub struct TodoService;

impl TodoService {
    pub async fn create_list(pool: &PgPool, name: &str) -> Result<TodoList, AppError> {
        let sql = format!(
            "INSERT INTO {} (name) VALUES ($1) RETURNING id, name",
            qualified_table(LISTS_TABLE)
        );
        tracing::debug!(sql = %sql, "query");
        let list = sqlx::query_as::<_, TodoList>(&sql)
            .bind(name.trim())
            .fetch_one(pool)
            .await?;
        Ok(list)
    }

    /// Items of a list ordered by id. An unknown list yields an empty vec.
    pub async fn list_items(pool: &PgPool, list_id: i64) -> Result<Vec<TodoItem>, AppError> {
        let sql = format!(
            "SELECT id, list_id, name FROM {} WHERE list_id = $1 ORDER BY id",
            qualified_table(ITEMS_TABLE)
        );
        tracing::debug!(sql = %sql, list_id, "query");
        let items = sqlx::query_as::<_, TodoItem>(&sql)
            .bind(list_id)
            .fetch_all(pool)
            .await?;
        Ok(items)
    }

    pub async fn add_item(pool: &PgPool, list_id: i64, name: &str) -> Result<TodoItem, AppError> {
        let sql = format!(
            "INSERT INTO {} (list_id, name) VALUES ($1, $2) RETURNING id, list_id, name",
            qualified_table(ITEMS_TABLE)
        );
        tracing::debug!(sql = %sql, list_id, "query");
        sqlx::query_as::<_, TodoItem>(&sql)
            .bind(list_id)
            .bind(name.trim())
            .fetch_one(pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                    AppError::NotFound(format!("list {}", list_id))
                }
                other => AppError::Db(other),
            })
    }

    /// Rename an item of `list_id`. Returns NotFound when no such item lives in that list.
    pub async fn update_item(pool: &PgPool, list_id: i64, item_id: i64, name: &str) -> Result<(), AppError> {
        let sql = format!(
            "UPDATE {} SET name = $3 WHERE id = $2 AND list_id = $1",
            qualified_table(ITEMS_TABLE)
        );
        tracing::debug!(sql = %sql, list_id, item_id, "query");
        let result = sqlx::query(&sql)
            .bind(list_id)
            .bind(item_id)
            .bind(name.trim())
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("item {} in list {}", item_id, list_id)));
        }
        Ok(())
    }

    pub async fn delete_item(pool: &PgPool, list_id: i64, item_id: i64) -> Result<(), AppError> {
        let sql = format!(
            "DELETE FROM {} WHERE id = $2 AND list_id = $1",
            qualified_table(ITEMS_TABLE)
        );
        tracing::debug!(sql = %sql, list_id, item_id, "query");
        let result = sqlx::query(&sql)
            .bind(list_id)
            .bind(item_id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("item {} in list {}", item_id, list_id)));
        }
        Ok(())
    }

    /// Delete a list; its items go with it through the ON DELETE CASCADE foreign key.
    pub async fn delete_list(pool: &PgPool, list_id: i64) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", qualified_table(LISTS_TABLE));
        tracing::debug!(sql = %sql, list_id, "query");
        let result = sqlx::query(&sql).bind(list_id).execute(pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("list {}", list_id)));
        }
        Ok(())
    }
}
