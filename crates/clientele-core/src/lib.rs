//! Core contracts for clientele.
//!
//! This crate contains:
//! - Validated customer record and attribute types
//! - Field specifier parsing and order-preserving rendering
//! - The locale provider abstraction with a fixed default style
//! - A customer formatter with capability lookup and a reversed display mode

pub mod domain;
pub mod error;
pub mod formatter;
pub mod provider;

pub use domain::{ContactPhone, Customer, CustomerName, Field, FieldSpec, Revenue};
pub use error::{CoreError, FormatError, ValidationError};
pub use formatter::{CustomFormatter, CustomerFormatter};
pub use provider::{FormatProvider, LocaleProvider};
