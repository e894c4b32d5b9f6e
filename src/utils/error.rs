use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Product {id} not found")]
    ProductNotFound { id: u64 },

    #[error("Order {id} not found")]
    OrderNotFound { id: u64 },

    #[error("Cart for session '{session}' is empty")]
    EmptyCart { session: String },

    #[error("Validation error on '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Invalid money amount '{value}': {reason}")]
    InvalidMoney { value: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Catalog,
    Checkout,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StoreError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        StoreError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            StoreError::ProductNotFound { .. } => ErrorCategory::Catalog,
            StoreError::OrderNotFound { .. } | StoreError::EmptyCart { .. } => {
                ErrorCategory::Checkout
            }
            StoreError::ValidationError { .. } | StoreError::InvalidMoney { .. } => {
                ErrorCategory::Input
            }
            StoreError::ConfigError { .. } => ErrorCategory::Configuration,
            StoreError::IoError(_)
            | StoreError::CsvError(_)
            | StoreError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Catalog | ErrorCategory::Checkout => ErrorSeverity::Low,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StoreError::ProductNotFound { id } => {
                format!("We could not find product #{}", id)
            }
            StoreError::OrderNotFound { id } => format!("We could not find order #{}", id),
            StoreError::EmptyCart { .. } => "Sorry, your cart is empty!".to_string(),
            StoreError::ValidationError { field, message } => {
                format!("Please check '{}': {}", field, message)
            }
            StoreError::InvalidMoney { value, .. } => {
                format!("'{}' is not a valid price", value)
            }
            StoreError::ConfigError { message } => {
                format!("The store configuration is invalid: {}", message)
            }
            other => format!("An internal error occurred: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StoreError::ProductNotFound { .. } => "List the catalog to find valid product ids",
            StoreError::OrderNotFound { .. } => "List orders to find valid order ids",
            StoreError::EmptyCart { .. } => "Add at least one product before checking out",
            StoreError::ValidationError { .. } => "Correct the highlighted field and retry",
            StoreError::InvalidMoney { .. } => {
                "Use a decimal amount with at most two fractional digits, e.g. 19.99"
            }
            StoreError::ConfigError { .. } => "Fix the configuration file and retry",
            StoreError::IoError(_) => "Check that the file exists and is readable",
            StoreError::CsvError(_) => {
                "Check the CSV header: name,description,category,price"
            }
            StoreError::SerializationError(_) => "Report this problem with the input used",
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
