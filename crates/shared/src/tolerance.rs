use std::convert::TryFrom;

use anyhow::Result;
use derive_more::{Deref, Display, Into};
use serde::{Deserialize, Serialize};

use crate::NumberError;

/// Maximum distance allowed between a curve and its flattened approximation.
#[derive(Debug, Copy, Clone, PartialEq, Deref, Display, Into, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Tolerance(f64);

impl Tolerance {
    pub fn new(v: f64) -> Result<Self> {
        Ok(Tolerance::try_from(v)?)
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = NumberError;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        if !v.is_finite() || v <= 0.0 {
            return Err(NumberError::InvalidTolerance(v));
        }
        Ok(Tolerance(v))
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance(0.5)
    }
}
