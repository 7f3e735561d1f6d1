use lyon::geom::point;
use shared::{safe_number, Precision, Step};
use strum_macros::Display;

use crate::{error::PathError, Point};

/// Axis an axis-aligned line travels along.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    pub fn coordinate(self, p: Point) -> f64 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }

    /// `base` with its coordinate on this axis replaced by `v`.
    #[inline]
    pub fn with_coordinate(self, base: Point, v: f64) -> Point {
        match self {
            Axis::X => point(v, base.y),
            Axis::Y => point(base.x, v),
        }
    }
}

/// Rounds half-way cases towards positive infinity, so `-2.5` becomes `-2`.
#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Breaks an axis-aligned line into points `step` apart.
///
/// The distance is rounded to a whole number first and one point is placed
/// per full `step` of it, starting one step after `from`. The result always
/// ends with `to` itself; a last step landing exactly on `to` is not repeated.
/// Fails when more than `limit` points would be produced.
pub fn expand_line(
    from: Point,
    to: Point,
    axis: Axis,
    step: Step,
    precision: Precision,
    limit: usize,
) -> Result<Vec<Point>, PathError> {
    let start = axis.coordinate(from);
    let delta = round_half_up(axis.coordinate(to) - start);
    let stride = if delta < 0.0 { -*step } else { *step };
    let steps = (delta.abs() / *step).floor();
    if steps >= limit as f64 {
        return Err(PathError::TooManyPoints { limit });
    }

    let mut points = (1..=steps as usize)
        .map(|i| {
            let v = safe_number(start + i as f64 * stride, precision);
            axis.with_coordinate(from, v)
        })
        .collect::<Vec<_>>();
    if points.last() == Some(&to) {
        points.pop();
    }
    points.push(to);
    Ok(points)
}
