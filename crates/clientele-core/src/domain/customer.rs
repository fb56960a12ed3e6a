use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::{ContactPhone, CustomerName, Field, FieldSpec, Revenue};
use crate::provider::{FormatProvider, LocaleProvider};
use crate::{FormatError, ValidationError};

/// Specifier selecting the canonical rendering, matched case-insensitively.
const GENERAL_SPEC: &str = "G";

/// Separator between rendered fields.
const FIELD_SEPARATOR: &str = ", ";

/// Fraction digits used for revenue rendering.
const REVENUE_FRACTION_DIGITS: u8 = 2;

/// Validated customer record.
///
/// All three attributes are validated at construction, in declaration order,
/// and are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    name: CustomerName,
    contact_phone: ContactPhone,
    revenue: Revenue,
}

impl Customer {
    /// Validate raw attributes and build a record.
    ///
    /// Checks run name, then phone, then revenue; the first failure returns
    /// immediately and nothing is stored.
    pub fn new(name: &str, contact_phone: &str, revenue: f64) -> Result<Self, ValidationError> {
        let name = CustomerName::parse(name)?;
        let contact_phone = ContactPhone::parse(contact_phone)?;
        let revenue = Revenue::new(revenue)?;

        Ok(Self {
            name,
            contact_phone,
            revenue,
        })
    }

    /// Assemble a record from already-validated attributes.
    pub fn from_parts(name: CustomerName, contact_phone: ContactPhone, revenue: Revenue) -> Self {
        Self {
            name,
            contact_phone,
            revenue,
        }
    }

    pub fn name(&self) -> &CustomerName {
        &self.name
    }

    pub fn contact_phone(&self) -> &ContactPhone {
        &self.contact_phone
    }

    pub fn revenue(&self) -> Revenue {
        self.revenue
    }

    /// Render under a field specifier, fields joined by `", "` in the
    /// caller-given letter order.
    ///
    /// An empty specifier or `"G"` (any case) selects the canonical
    /// rendering. The provider is consulted for decimal rendering only;
    /// name and phone are plain strings in every path.
    pub fn render(&self, spec: &str, provider: &dyn FormatProvider) -> Result<String, FormatError> {
        if spec.is_empty() || spec.eq_ignore_ascii_case(GENERAL_SPEC) {
            return Ok(self.canonical(provider));
        }

        let parsed = FieldSpec::parse(spec)?;
        Ok(self.render_fields(parsed.fields(), provider))
    }

    /// Canonical full rendering in fixed Name, Revenue, Phone order.
    pub fn canonical(&self, provider: &dyn FormatProvider) -> String {
        self.render_fields(FieldSpec::canonical().fields(), provider)
    }

    fn render_fields(&self, fields: &[Field], provider: &dyn FormatProvider) -> String {
        let parts: Vec<String> = fields
            .iter()
            .map(|field| self.field_text(*field, provider))
            .collect();
        parts.join(FIELD_SEPARATOR)
    }

    fn field_text(&self, field: Field, provider: &dyn FormatProvider) -> String {
        match field {
            Field::Name => self.name.as_str().to_owned(),
            Field::Revenue => {
                provider.format_decimal(self.revenue.amount(), REVENUE_FRACTION_DIGITS)
            }
            Field::Phone => self.contact_phone.as_str().to_owned(),
        }
    }
}

impl Display for Customer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical(&LocaleProvider::default()))
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
    fn renders_canonical_order() {
        assert_eq!(
            sample().to_string(),
            "Jeffrey Richter, 1,000,000.00, +1 (425) 555-0100"
        );
    }

    #[test]
    fn renders_caller_specified_order() {
        let rendered = sample()
            .render("PR", &LocaleProvider::default())
            .expect("must render");
        assert_eq!(rendered, "+1 (425) 555-0100, 1,000,000.00");
    }

    #[test]
    fn empty_specifier_matches_general() {
        let customer = sample();
        let provider = LocaleProvider::default();
        let empty = customer.render("", &provider).expect("must render");
        let general = customer.render("g", &provider).expect("must render");
        assert_eq!(empty, general);
    }

    #[test]
    fn assembles_from_validated_parts() {
        let name = CustomerName::parse("Grace Hopper").expect("must parse");
        let phone = ContactPhone::parse("+1 (212) 555-0147").expect("must parse");
        let revenue = Revenue::new(250.5).expect("must validate");

        let customer = Customer::from_parts(name, phone, revenue);
        assert_eq!(
            customer.to_string(),
            "Grace Hopper, 250.50, +1 (212) 555-0147"
        );
    }

    #[test]
    fn validates_name_before_phone_and_revenue() {
        let err = Customer::new("jeffrey richter", "bad", -45.0).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidName { .. }));
    }

    #[test]
    fn phone_failure_masks_revenue_failure() {
        let err = Customer::new("Jeffrey Richter", "555-0100", -45.0).expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidPhone { .. }));
    }
}
