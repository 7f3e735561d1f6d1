use std::convert::TryFrom;

use anyhow::Result;
use derive_more::{Deref, Display, Into};
use serde::{Deserialize, Serialize};

use crate::NumberError;

/// Distance between two generated points of an axis-aligned line.
#[derive(Debug, Copy, Clone, PartialEq, Deref, Display, Into, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Step(f64);

impl Step {
    pub fn new(v: f64) -> Result<Self> {
        Ok(Step::try_from(v)?)
    }
}

impl TryFrom<f64> for Step {
    type Error = NumberError;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        if !v.is_finite() || v <= 0.0 {
            return Err(NumberError::InvalidStep(v));
        }
        Ok(Step(v))
    }
}

impl Default for Step {
    fn default() -> Self {
        Step(10.0)
    }
}
