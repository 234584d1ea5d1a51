//! Error types for tracker mutations and draft validation.

use std::fmt;

use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Could not allocate a unique expense id after {0} attempts")]
    IdentifierExhausted(usize),
}

/// The form field a validation message is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Description,
    Amount,
    Date,
    Category,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Description => "description",
            Field::Amount => "amount",
            Field::Date => "date",
            Field::Category => "category",
        };
        f.write_str(label)
    }
}

/// One rejected field and its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every field that failed validation for a submitted draft.
///
/// The draft is rejected as a whole; no partial record is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the message attached to `field`, if it failed.
    pub fn field(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| entry.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.errors.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", entry.field, entry.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_messages_per_field() {
        let errors = ValidationErrors::new(vec![
            FieldError::new(Field::Description, "Description is required."),
            FieldError::new(Field::Amount, "Enter a positive amount."),
        ]);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.field(Field::Amount), Some("Enter a positive amount."));
        assert_eq!(errors.field(Field::Date), None);
    }

    #[test]
    fn display_joins_all_messages() {
        let errors = ValidationErrors::new(vec![
            FieldError::new(Field::Date, "Select the transaction date."),
            FieldError::new(Field::Category, "Choose a category."),
        ]);
        assert_eq!(
            errors.to_string(),
            "date: Select the transaction date.; category: Choose a category."
        );
    }
}
