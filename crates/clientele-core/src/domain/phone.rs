use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Country code, parenthesized operator code, hyphenated local number,
/// single literal spaces between the segments.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+\d+ \(\d+\) \d{3}-\d{4}$").expect("phone pattern must compile"));

/// Validated contact phone, e.g. "+1 (425) 555-0100".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactPhone(String);

impl ContactPhone {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if !PHONE_PATTERN.is_match(input) {
            return Err(ValidationError::InvalidPhone {
                value: input.to_owned(),
            });
        }

        Ok(Self(input.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ContactPhone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ContactPhone {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for ContactPhone {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ContactPhone> for String {
    fn from(value: ContactPhone) -> Self {
        value.0
    }
}
