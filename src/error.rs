use thiserror::Error;

use crate::model::{Field, Pattern};

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{field} cannot be empty!")]
    EmptyField { field: Field },

    #[error("{}", .pattern.message())]
    InvalidFormat { pattern: Pattern, value: String },

    #[error("{}", .field.duplicate_message())]
    DuplicateValue { field: Field, value: String },

    #[error("Contact not found!")]
    NotFound { name: String },

    #[error("Invalid value for {var}: {reason}")]
    Config { var: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ContactResult<T> = Result<T, ContactError>;
