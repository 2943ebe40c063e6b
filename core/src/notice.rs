//! User-facing messages for every operation outcome.

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

/// The operation a failure belongs to; picks the wording of generic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Update,
    Delete,
}

impl Operation {
    fn failure_prefix(self) -> &'static str {
        match self {
            Operation::Create => "Error adding product",
            Operation::List => "Error fetching products",
            Operation::Update => "Error updating product",
            Operation::Delete => "Error deleting product",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Level::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Level::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    pub fn created(title: &str) -> Self {
        Self::success(format!("Product '{title}' added successfully!"))
    }

    pub fn updated(title: &str) -> Self {
        Self::success(format!("Product '{title}' updated successfully!"))
    }

    pub fn deleted(id: i64) -> Self {
        Self::success(format!("Product {id} deleted successfully!"))
    }

    pub fn empty_list() -> Self {
        Self::warning("No products found.")
    }

    pub fn missing_fields() -> Self {
        Self::error("Please fill in all required fields.")
    }

    /// Map a failed operation to the message shown to the user.
    pub fn from_error(operation: Operation, error: &ApiError) -> Self {
        let message = match error {
            ApiError::Validation(_) => return Self::missing_fields(),
            ApiError::Rejected { detail } => detail.clone(),
            ApiError::NotFound => "Product not found.".to_string(),
            ApiError::Transport(reason) => format!("Error connecting to the API: {reason}"),
            ApiError::HttpError { status, .. } => format!("{}: {status}", operation.failure_prefix()),
            ApiError::DeserializationError(reason) | ApiError::SerializationError(reason) => {
                format!("{}: {reason}", operation.failure_prefix())
            }
        };
        Self::error(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_messages_name_the_product() {
        assert_eq!(Notice::created("Keyboard").message, "Product 'Keyboard' added successfully!");
        assert_eq!(Notice::updated("Desk").level, Level::Success);
        assert!(Notice::deleted(4).message.contains('4'));
    }

    #[test]
    fn rejection_detail_is_shown_verbatim() {
        let err = ApiError::Rejected {
            detail: "duplicate title".to_string(),
        };
        assert_eq!(
            Notice::from_error(Operation::Create, &err),
            Notice::error("duplicate title")
        );
    }

    #[test]
    fn not_found_uses_fixed_message() {
        let notice = Notice::from_error(Operation::Update, &ApiError::NotFound);
        assert_eq!(notice.message, "Product not found.");
        assert!(!notice.message.contains("Error updating"));
    }

    #[test]
    fn other_statuses_include_the_code() {
        let err = ApiError::HttpError {
            status: 502,
            body: String::new(),
        };
        assert_eq!(
            Notice::from_error(Operation::Delete, &err).message,
            "Error deleting product: 502"
        );
        assert_eq!(
            Notice::from_error(Operation::Create, &err).message,
            "Error adding product: 502"
        );
    }

    #[test]
    fn transport_failures_carry_the_raw_text() {
        let err = ApiError::Transport("dns lookup failed".to_string());
        assert_eq!(
            Notice::from_error(Operation::List, &err).message,
            "Error connecting to the API: dns lookup failed"
        );
    }

    #[test]
    fn validation_never_names_a_field() {
        let notice = Notice::from_error(Operation::Create, &ApiError::Validation("title is empty"));
        assert_eq!(notice, Notice::missing_fields());
        assert!(!notice.message.contains("title"));
    }
}
