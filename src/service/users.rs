//! Registration and credential checks against the users table.

use crate::error::{AppError, INCORRECT_CREDENTIALS};
use crate::models::{RegisterRequest, User};
use crate::password::{hash_password_blocking, verify_password_blocking};
use crate::store::{qualified_table, USERS_TABLE};
use sqlx::PgPool;

pub struct UserService;

impl UserService {
    /// Insert a user with a hashed password. A duplicate email is reported as `AlreadyExists`;
    /// uniqueness is left to the database so concurrent registrations cannot both win.
    pub async fn register(pool: &PgPool, req: &RegisterRequest) -> Result<i64, AppError> {
        let email = req.email.trim();
        let password_hash = hash_password_blocking(req.password.clone()).await?;
        let sql = format!(
            r#"
            INSERT INTO {} (email, password_hash, first_name, last_name)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO NOTHING
            RETURNING id
            "#,
            qualified_table(USERS_TABLE)
        );
        tracing::debug!(sql = %sql, "query");
        let id: Option<i64> = sqlx::query_scalar(&sql)
            .bind(email)
            .bind(&password_hash)
            .bind(req.first_name.trim())
            .bind(req.last_name.trim())
            .fetch_optional(pool)
            .await?;
        match id {
            Some(id) => {
                tracing::info!(user_id = id, "user registered");
                Ok(id)
            }
            None => Err(AppError::AlreadyExists(format!(
                "User with email {} already exists",
                email
            ))),
        }
    }

    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, AppError> {
        let sql = format!(
            "SELECT id, email, password_hash, first_name, last_name, created_at FROM {} WHERE email = $1",
            qualified_table(USERS_TABLE)
        );
        tracing::debug!(sql = %sql, "query");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// Resolve basic-auth credentials to a user. Unknown email and wrong password are indistinguishable to the caller.
    pub async fn authenticate(pool: &PgPool, email: &str, password: &str) -> Result<User, AppError> {
        let user = match Self::find_by_email(pool, email).await? {
            Some(user) => user,
            None => {
                tracing::warn!("authentication failed: unknown email");
                return Err(AppError::Unauthorized(INCORRECT_CREDENTIALS));
            }
        };
        let ok = verify_password_blocking(password.to_string(), user.password_hash.clone()).await?;
        if !ok {
            tracing::warn!(user_id = user.id, "authentication failed: wrong password");
            return Err(AppError::Unauthorized(INCORRECT_CREDENTIALS));
        }
        Ok(user)
    }
}
