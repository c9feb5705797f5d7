//! Persistence services used by the HTTP handlers.

mod todo;
mod users;
mod validation;
pub use todo::TodoService;
pub use users::UserService;
pub use validation::{Format, RequestValidator, Validate, ValidationRule};
