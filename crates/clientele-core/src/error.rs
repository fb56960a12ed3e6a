use thiserror::Error;

/// Attribute validation errors raised when constructing a customer record.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("customer name must be capitalized words separated by single spaces: '{value}'")]
    InvalidName { value: String },
    #[error("contact phone must match '+<country> (<operator>) ddd-dddd': '{value}'")]
    InvalidPhone { value: String },
    #[error("revenue must be finite")]
    NonFiniteRevenue,
    #[error("revenue must be non-negative: {value}")]
    NegativeRevenue { value: f64 },
}

/// Format specifier and value errors raised while rendering.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("format specifier '{spec}' exceeds {max} field letters")]
    SpecifierTooLong { spec: String, max: usize },
    #[error("format specifier '{spec}' contains unknown field letter '{ch}'")]
    UnknownField { spec: String, ch: char },
    #[error("format specifier '{spec}' repeats field letter '{ch}'")]
    DuplicateField { spec: String, ch: char },
    #[error("no value was supplied to format")]
    MissingValue,
    #[error("value to format must be a customer record")]
    UnsupportedValue,
}

/// Top-level error type for core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Format(#[from] FormatError),
}
