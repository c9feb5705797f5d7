//! Request extractors: basic-auth identity and validated JSON bodies.

pub mod basic_auth;
pub mod json;

pub use basic_auth::{AuthUser, BasicCredentials};
pub use json::ValidJson;
