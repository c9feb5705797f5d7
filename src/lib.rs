//! To-do list service: users, lists, and items over PostgreSQL with HTTP basic auth.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod openapi;
pub mod password;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use openapi::ApiDoc;
pub use routes::{api_routes, app, common_routes};
pub use service::{TodoService, UserService};
pub use state::AppState;
pub use store::{connect_pool, ensure_database_exists};
