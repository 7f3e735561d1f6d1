use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum NumberError {
    #[error("precision must be at most {max} decimal digits but was {0}", max = crate::Precision::MAX)]
    PrecisionOutOfRange(u32),
    #[error("step must be a positive finite number but was {0}")]
    InvalidStep(f64),
    #[error("tolerance must be a positive finite number but was {0}")]
    InvalidTolerance(f64),
}
