//! Initial table creation: schema, users, lists, items. Idempotent (IF NOT EXISTS).

use crate::error::AppError;
use crate::store::{quote_ident, schema_table, todo_schema, ITEMS_TABLE, LISTS_TABLE, USERS_TABLE};
use sqlx::PgPool;

/// Create the schema from `TODO_SCHEMA` and the three service tables.
/// Items reference lists with ON DELETE CASCADE so a list delete never leaves orphans.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    migrate_schema(pool, &todo_schema()).await
}

async fn migrate_schema(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(schema)))
        .execute(pool)
        .await?;

    for ddl in table_ddl(schema) {
        sqlx::query(&ddl).execute(pool).await?;
    }
    tracing::info!(schema = %schema, "tables ready");
    Ok(())
}

fn table_ddl(schema: &str) -> Vec<String> {
    let users = schema_table(schema, USERS_TABLE);
    let lists = schema_table(schema, LISTS_TABLE);
    let items = schema_table(schema, ITEMS_TABLE);
    vec![
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id BIGSERIAL PRIMARY KEY,
                email TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            users
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            lists
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id BIGSERIAL PRIMARY KEY,
                list_id BIGINT NOT NULL REFERENCES {} (id) ON DELETE CASCADE,
                name TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            items, lists
        ),
        format!(
            "CREATE INDEX IF NOT EXISTS items_list_id_idx ON {} (list_id)",
            items
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_cascade_from_lists() {
        let ddl = table_ddl("todo");
        let items = ddl.iter().find(|d| d.contains(".items (")).unwrap();
        assert!(items.contains("ON DELETE CASCADE"));
        assert!(items.contains("list_id BIGINT NOT NULL"));
    }

    #[test]
    fn users_email_is_unique() {
        let ddl = table_ddl("todo");
        assert!(ddl[0].contains("email TEXT NOT NULL UNIQUE"));
    }

    #[test]
    fn mixed_case_schema_is_quoted_everywhere() {
        for ddl in table_ddl("TodoApp") {
            assert!(ddl.contains("\"TodoApp\"."), "unquoted schema in: {ddl}");
            assert!(!ddl.contains(" TodoApp."));
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrates_mixed_case_schema() {
        let url = std::env::var("TEST_DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/todo_test".into());
        crate::store::ensure_database_exists(&url).await.unwrap();
        let pool = crate::store::connect_pool(&url, 2).await.unwrap();
        let schema = format!("TodoApp_{}", std::process::id());

        migrate_schema(&pool, &schema).await.unwrap();
        // Second run is a no-op.
        migrate_schema(&pool, &schema).await.unwrap();

        let list_id: i64 = sqlx::query_scalar(&format!(
            "INSERT INTO {} (name) VALUES ('groceries') RETURNING id",
            schema_table(&schema, LISTS_TABLE)
        ))
        .fetch_one(&pool)
        .await
        .unwrap();
        sqlx::query(&format!(
            "INSERT INTO {} (list_id, name) VALUES ($1, 'milk')",
            schema_table(&schema, ITEMS_TABLE)
        ))
        .bind(list_id)
        .execute(&pool)
        .await
        .unwrap();
        let items: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM {} WHERE list_id = $1",
            schema_table(&schema, ITEMS_TABLE)
        ))
        .bind(list_id)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(items, 1);

        sqlx::query(&format!("DROP SCHEMA {} CASCADE", quote_ident(&schema)))
            .execute(&pool)
            .await
            .unwrap();
        pool.close().await;
    }
}
