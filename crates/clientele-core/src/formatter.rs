use std::any::Any;
use std::sync::Arc;

use crate::domain::Customer;
use crate::provider::{FormatProvider, LocaleProvider};
use crate::FormatError;

/// Specifier handled by the formatter itself rather than delegated.
const REVERSED_SPEC: &str = "REV";

/// Custom formatting capability surfaced through provider lookup.
pub trait CustomFormatter: Send + Sync {
    /// Format `value` under `spec`, consulting `provider` for locale
    /// decisions when one is supplied.
    fn format_value(
        &self,
        spec: &str,
        value: Option<&dyn Any>,
        provider: Option<&dyn FormatProvider>,
    ) -> Result<String, FormatError>;
}

/// Formatter over customer records adding a reversed display mode.
///
/// Every call is stateless given its inputs; the only persistent state is
/// the immutable parent provider used when callers omit one.
pub struct CustomerFormatter {
    parent: Arc<dyn FormatProvider>,
}

impl CustomerFormatter {
    /// Build a formatter with an explicit parent provider.
    pub fn with_parent(parent: Arc<dyn FormatProvider>) -> Self {
        Self { parent }
    }

    /// Build a formatter whose parent is the process-wide default provider.
    pub fn new() -> Self {
        Self::with_parent(LocaleProvider::current())
    }

    /// Format `value` under `spec`.
    ///
    /// `"REV"` (any case) reverses the canonical rendering character by
    /// character; any other specifier is delegated to the record's own
    /// rendering with its errors propagated unchanged.
    pub fn format(
        &self,
        spec: &str,
        value: Option<&dyn Any>,
        provider: Option<&dyn FormatProvider>,
    ) -> Result<String, FormatError> {
        let value = value.ok_or(FormatError::MissingValue)?;
        let customer = value
            .downcast_ref::<Customer>()
            .ok_or(FormatError::UnsupportedValue)?;
        let provider = provider.unwrap_or(self.parent.as_ref());

        if spec.eq_ignore_ascii_case(REVERSED_SPEC) {
            return Ok(customer.canonical(provider).chars().rev().collect());
        }

        customer.render(spec, provider)
    }
}

impl Default for CustomerFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatProvider for CustomerFormatter {
    fn format_decimal(&self, value: f64, fraction_digits: u8) -> String {
        self.parent.format_decimal(value, fraction_digits)
    }

    fn custom_formatter(&self) -> Option<&dyn CustomFormatter> {
        Some(self)
    }
}

impl CustomFormatter for CustomerFormatter {
    fn format_value(
        &self,
        spec: &str,
        value: Option<&dyn Any>,
        provider: Option<&dyn FormatProvider>,
    ) -> Result<String, FormatError> {
        self.format(spec, value, provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Customer {
        Customer::new("Jeffrey Richter", "+1 (425) 555-0100", 1_000_000.0)
            .expect("sample customer must validate")
    }

    #[test]
    fn reverses_canonical_rendering() {
        let formatter = CustomerFormatter::new();
        let reversed = formatter
            .format("REV", Some(&sample()), None)
            .expect("must format");
        assert_eq!(reversed, "0010-555 )524( 1+ ,00.000,000,1 ,rethciR yerffeJ");
    }

    #[test]
    fn delegates_other_specifiers() {
        let formatter = CustomerFormatter::new();
        let rendered = formatter
            .format("nr", Some(&sample()), None)
            .expect("must format");
        assert_eq!(rendered, "Jeffrey Richter, 1,000,000.00");
    }

    #[test]
    fn missing_value_is_rejected() {
        let formatter = CustomerFormatter::new();
        let err = formatter.format("REV", None, None).expect_err("must fail");
        assert!(matches!(err, FormatError::MissingValue));
    }

    #[test]
    fn non_customer_value_is_rejected() {
        let formatter = CustomerFormatter::new();
        let err = formatter
            .format("REV", Some(&25_i32), None)
            .expect_err("must fail");
        assert!(matches!(err, FormatError::UnsupportedValue));
    }

    #[test]
    fn advertises_custom_formatter_capability() {
        let formatter = CustomerFormatter::new();
        assert!(formatter.custom_formatter().is_some());
    }
}
