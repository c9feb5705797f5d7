//! Request validation: per-field rules applied after JSON decoding.

use crate::error::AppError;
use crate::models::{CreateListRequest, ItemRequest, RegisterRequest};
use regex::Regex;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, Default)]
pub struct ValidationRule {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub format: Option<Format>,
    /// Measure length after trimming surrounding whitespace.
    pub trimmed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Email,
}

pub const EMAIL_RULE: ValidationRule = ValidationRule {
    min_length: Some(3),
    max_length: Some(255),
    format: Some(Format::Email),
    trimmed: true,
};

pub const PASSWORD_RULE: ValidationRule = ValidationRule {
    min_length: Some(1),
    max_length: Some(128),
    format: None,
    trimmed: false,
};

pub const PERSON_NAME_RULE: ValidationRule = ValidationRule {
    min_length: Some(1),
    max_length: Some(100),
    format: None,
    trimmed: true,
};

pub const TODO_NAME_RULE: ValidationRule = ValidationRule {
    min_length: Some(1),
    max_length: Some(255),
    format: None,
    trimmed: true,
};

/// Implemented by request bodies so extractors can reject them before handlers run.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

pub struct RequestValidator;

impl RequestValidator {
    pub fn check(field: &str, value: &str, rule: &ValidationRule) -> Result<(), AppError> {
        let value = if rule.trimmed { value.trim() } else { value };
        let len = value.chars().count();
        if let Some(min) = rule.min_length {
            if len < min {
                if min == 1 {
                    return Err(AppError::Validation(format!("{} is required", field)));
                }
                return Err(AppError::Validation(format!(
                    "{} must be at least {} characters",
                    field, min
                )));
            }
        }
        if let Some(max) = rule.max_length {
            if len > max {
                return Err(AppError::Validation(format!(
                    "{} must be at most {} characters",
                    field, max
                )));
            }
        }
        if let Some(Format::Email) = rule.format {
            if !email_regex().is_match(value) {
                return Err(AppError::Validation(format!("{} must be a valid email", field)));
            }
        }
        Ok(())
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$").unwrap_or_else(|e| panic!("email pattern: {}", e))
    })
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), AppError> {
        RequestValidator::check("email", &self.email, &EMAIL_RULE)?;
        RequestValidator::check("password", &self.password, &PASSWORD_RULE)?;
        RequestValidator::check("first_name", &self.first_name, &PERSON_NAME_RULE)?;
        RequestValidator::check("last_name", &self.last_name, &PERSON_NAME_RULE)
    }
}

impl Validate for CreateListRequest {
    fn validate(&self) -> Result<(), AppError> {
        RequestValidator::check("list_name", &self.list_name, &TODO_NAME_RULE)
    }
}

impl Validate for ItemRequest {
    fn validate(&self) -> Result<(), AppError> {
        RequestValidator::check("todo_item_name", &self.todo_item_name, &TODO_NAME_RULE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.into(),
            password: password.into(),
            first_name: "Test".into(),
            last_name: "User".into(),
        }
    }

    #[test]
    fn accepts_well_formed_registration() {
        assert!(register("test@example.com", "testpassword123").validate().is_ok());
    }

    #[test]
    fn rejects_bad_email() {
        for email in ["", "plain", "no-domain@", "a@b", "two@@example.com"] {
            let err = register(email, "pw").validate().unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{email}");
        }
    }

    #[test]
    fn rejects_empty_password() {
        let err = register("test@example.com", "").validate().unwrap_err();
        assert_eq!(err.to_string(), "password is required");
    }

    #[test]
    fn blank_names_are_missing() {
        let err = CreateListRequest { list_name: "   ".into() }.validate().unwrap_err();
        assert_eq!(err.to_string(), "list_name is required");
    }

    #[test]
    fn long_item_names_rejected() {
        let err = ItemRequest {
            todo_item_name: "x".repeat(256),
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "todo_item_name must be at most 255 characters");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let name = "é".repeat(255);
        assert!(ItemRequest { todo_item_name: name }.validate().is_ok());
    }
}
