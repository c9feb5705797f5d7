//! Database bootstrap and table naming. All tables live in a schema named from `TODO_SCHEMA` env (default `todo`).

use crate::error::AppError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

pub const USERS_TABLE: &str = "users";
pub const LISTS_TABLE: &str = "lists";
pub const ITEMS_TABLE: &str = "items";

pub const DEFAULT_SCHEMA: &str = "todo";

/// Schema name for the service tables. From env `TODO_SCHEMA`, default `todo`.
/// Case is preserved: the name is always quoted when it reaches SQL.
pub fn todo_schema() -> String {
    schema_or_default(std::env::var("TODO_SCHEMA").ok())
}

fn schema_or_default(raw: Option<String>) -> String {
    raw.map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SCHEMA.into())
}

/// Returns schema-qualified table name (e.g. `"todo".items`).
pub fn qualified_table(table: &str) -> String {
    schema_table(&todo_schema(), table)
}

pub(crate) fn schema_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quote_ident(schema), table)
}

/// Open the shared pool for `database_url`.
pub async fn connect_pool(database_url: &str, max_connections: u32) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let mut parts = path_and_query.splitn(2, '?');
    let db_name = parts.next().unwrap_or("").trim();
    let query = parts.next().map(|q| format!("?{}", q)).unwrap_or_default();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres{}", base, query), db_name.to_string()))
}

pub(crate) fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_database_name() {
        let (admin, name) = parse_db_name_from_url("postgres://u:p@localhost:5432/todo").unwrap();
        assert_eq!(admin, "postgres://u:p@localhost:5432/postgres");
        assert_eq!(name, "todo");
    }

    #[test]
    fn keeps_query_on_admin_url() {
        let (admin, name) = parse_db_name_from_url("postgres://localhost/todo_test?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://localhost/postgres?sslmode=disable");
        assert_eq!(name, "todo_test");
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("todo"), "\"todo\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn schema_keeps_case_when_qualified() {
        assert_eq!(schema_table("TodoApp", ITEMS_TABLE), "\"TodoApp\".items");
        assert_eq!(schema_table("todo", USERS_TABLE), "\"todo\".users");
    }

    #[test]
    fn blank_schema_falls_back_to_default() {
        assert_eq!(schema_or_default(None), DEFAULT_SCHEMA);
        assert_eq!(schema_or_default(Some("  ".into())), DEFAULT_SCHEMA);
        assert_eq!(schema_or_default(Some(" Lists ".into())), "Lists");
    }
}
