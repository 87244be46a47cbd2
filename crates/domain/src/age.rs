//! Pet age expressed in (fractional) years.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A finite, non-negative age in years (`0.25` is three months).
///
/// Negative, NaN and infinite values are rejected on construction, so the
/// cadence rules that consume an `AgeYears` never have to.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct AgeYears(f64);

impl AgeYears {
    /// Validate and wrap an age in years.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFiniteAge`] for NaN or infinite input
    /// and [`ValidationError::NegativeAge`] for values below zero.
    pub fn new(years: f64) -> Result<Self, ValidationError> {
        if !years.is_finite() {
            return Err(ValidationError::NonFiniteAge(years));
        }
        if years < 0.0 {
            return Err(ValidationError::NegativeAge(years));
        }
        // Normalise -0.0 so equality and display stay predictable.
        Ok(Self(years + 0.0))
    }

    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for AgeYears {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AgeYears> for f64 {
    fn from(age: AgeYears) -> Self {
        age.0
    }
}

impl fmt::Display for AgeYears {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}y", self.0)
    }
}
