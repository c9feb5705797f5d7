//! HTTP handlers for registration, the auth check, lists, and items.

pub mod todo;
pub mod users;
pub use todo::*;
pub use users::*;
