//! Validated customer domain types.
//!
//! All types enforce their invariants at construction and are immutable
//! afterwards; serde deserialization re-runs the same validation.

mod customer;
mod field;
mod name;
mod phone;
mod revenue;

pub use customer::Customer;
pub use field::{Field, FieldSpec};
pub use name::CustomerName;
pub use phone::ContactPhone;
pub use revenue::Revenue;
