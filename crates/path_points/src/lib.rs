//! Samples SVG path data (`d` attributes) into points.
//!
//! Supports `M`, `L`, `H`, `V`, `C` and `Z` in both absolute and relative
//! form. Only sub-paths closed with `Z`/`z` end up in the result.

mod command;
mod convert;
mod curve;
mod error;
mod expand;
mod lexer;
mod state;

#[cfg(test)]
mod test_utils;

pub use crate::command::{Command, Position};
pub use crate::convert::{convert, convert_with, convert_with_sampler, ConvertOptions};
pub use crate::curve::{CurveSampler, CurveSampling, Flatten, Uniform};
pub use crate::error::PathError;
pub use crate::expand::{expand_line, Axis};
pub use crate::lexer::{scan, tokenize, Lexeme, Scanner};
pub use crate::state::{Context, PathState};
pub use shared::{safe_number, NumberError, Precision, Step, Tolerance};

pub type Point = lyon::geom::Point<f64>;
pub type Vector = lyon::geom::Vector<f64>;
/// Points of one sub-path, in drawing order.
pub type SubPath = Vec<Point>;
