use std::convert::TryFrom;

use anyhow::Result;
use derive_more::{Display, Into};
use serde::{Deserialize, Serialize};

use crate::NumberError;

/// Number of decimal digits kept by [`crate::safe_number`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, Into, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Precision(u32);

impl Precision {
    pub const MAX: u32 = 12;

    pub fn new(digits: u32) -> Result<Self> {
        Ok(Precision::try_from(digits)?)
    }

    pub fn digits(&self) -> u32 {
        self.0
    }

    pub(crate) fn factor(&self) -> f64 {
        10f64.powi(self.0 as i32)
    }
}

impl TryFrom<u32> for Precision {
    type Error = NumberError;

    fn try_from(digits: u32) -> Result<Self, Self::Error> {
        if digits > Precision::MAX {
            return Err(NumberError::PrecisionOutOfRange(digits));
        }
        Ok(Precision(digits))
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision(3)
    }
}
