//! Form validation state consumed by the view controller.
//!
//! Validation runs before a controller action; the action only asks whether
//! the state is valid.

use serde::Serialize;
use thiserror::Error;

use crate::domain::Product;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ModelState {
    errors: Vec<FieldError>,
}

impl ModelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_model_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn merge(&mut self, other: ModelState) {
        self.errors.extend(other.errors);
    }

    pub fn errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }
}

pub trait Validate {
    fn validate(&self) -> ModelState;
}

impl Validate for Product {
    fn validate(&self) -> ModelState {
        let mut state = ModelState::new();
        if self.name.trim().is_empty() {
            state.add_model_error("Name", "The Name field is required.");
        }
        state
    }
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
