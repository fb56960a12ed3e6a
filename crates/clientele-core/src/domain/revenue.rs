use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Non-negative revenue amount.
///
/// The stored value keeps full precision; every read observes the amount
/// rounded to 2 fraction digits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Revenue(f64);

/// Equality observes the rounded amount, like every other read.
impl PartialEq for Revenue {
    fn eq(&self, other: &Self) -> bool {
        self.amount() == other.amount()
    }
}

const FRACTION_SCALE: f64 = 100.0;

impl Revenue {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteRevenue);
        }
        if value < 0.0 {
            return Err(ValidationError::NegativeRevenue { value });
        }

        Ok(Self(value))
    }

    /// The amount rounded to 2 fraction digits.
    pub fn amount(self) -> f64 {
        (self.0 * FRACTION_SCALE).round() / FRACTION_SCALE
    }
}

impl TryFrom<f64> for Revenue {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Revenue> for f64 {
    fn from(value: Revenue) -> Self {
        value.amount()
    }
}
