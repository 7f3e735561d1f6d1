use std::mem;

use lyon::geom::{point, CubicBezierSegment};
use shared::safe_number;
use tracing::{debug, warn};

use crate::command::{Command, Position};
use crate::convert::ConvertOptions;
use crate::curve::CurveSampler;
use crate::error::PathError;
use crate::expand::{expand_line, Axis};
use crate::{Point, SubPath, Vector};

/// Everything a transition needs besides the state itself.
pub struct Context<'a> {
    pub options: &'a ConvertOptions,
    pub sampler: &'a dyn CurveSampler,
}

/// Pen state while walking a path: where the pen is, the sub-path being drawn
/// and the sub-paths already closed.
#[derive(Debug, Clone, PartialEq)]
pub struct PathState {
    cursor: Point,
    open: SubPath,
    closed: Vec<SubPath>,
}

impl Default for PathState {
    fn default() -> Self {
        PathState {
            cursor: point(0.0, 0.0),
            open: vec![],
            closed: vec![],
        }
    }
}

impl PathState {
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn open(&self) -> &[Point] {
        &self.open
    }

    pub fn closed(&self) -> &[SubPath] {
        &self.closed
    }

    pub fn apply(self, command: &Command, cx: &Context) -> Self {
        match *command {
            Command::MoveTo(position, to) => {
                let state = if cx.options.close_on_move {
                    self.close()
                } else {
                    self
                };
                let at = state.resolve(position, to, cx);
                state.extend(Some(at))
            }
            Command::LineTo(position, to) => {
                let at = self.resolve(position, to, cx);
                self.extend(Some(at))
            }
            Command::HorizontalLineTo(position, x) => {
                let x = self.resolve_coordinate(position, Axis::X, x, cx);
                self.line_along(Axis::X, x, cx)
            }
            Command::VerticalLineTo(position, y) => {
                let y = self.resolve_coordinate(position, Axis::Y, y, cx);
                self.line_along(Axis::Y, y, cx)
            }
            Command::CubicTo {
                position,
                ctrl1,
                ctrl2,
                to,
            } => {
                // All three points are measured from the same cursor in relative mode.
                let curve = CubicBezierSegment {
                    from: self.cursor,
                    ctrl1: self.resolve(position, ctrl1, cx),
                    ctrl2: self.resolve(position, ctrl2, cx),
                    to: self.resolve(position, to, cx),
                };
                let precision = cx.options.precision;
                let points = match cx.sampler.sample(&curve, cx.options.point_limit) {
                    Ok(points) => points,
                    Err(err) => return self.skip(err),
                };
                let points = points
                    .into_iter()
                    .map(|p| point(safe_number(p.x, precision), safe_number(p.y, precision)))
                    .collect::<Vec<_>>();
                debug!(
                    control_points = ?[curve.from, curve.ctrl1, curve.ctrl2, curve.to],
                    samples = points.len(),
                    "sampled curve"
                );
                if points.is_empty() {
                    self.extend(Some(curve.to))
                } else {
                    self.extend(points)
                }
            }
            Command::Close(_) => self.close(),
        }
    }

    /// Returns the closed sub-paths. An unclosed trailing sub-path is dropped.
    pub fn finish(self) -> Vec<SubPath> {
        if !self.open.is_empty() {
            debug!(points = self.open.len(), "discarding unclosed sub-path");
        }
        self.closed
    }

    fn resolve(&self, position: Position, v: Vector, cx: &Context) -> Point {
        point(
            self.resolve_coordinate(position, Axis::X, v.x, cx),
            self.resolve_coordinate(position, Axis::Y, v.y, cx),
        )
    }

    fn resolve_coordinate(&self, position: Position, axis: Axis, v: f64, cx: &Context) -> f64 {
        let v = match position {
            Position::Absolute => v,
            Position::Relative => axis.coordinate(self.cursor) + v,
        };
        safe_number(v, cx.options.precision)
    }

    fn line_along(self, axis: Axis, v: f64, cx: &Context) -> Self {
        let to = axis.with_coordinate(self.cursor, v);
        let options = cx.options;
        match expand_line(self.cursor, to, axis, options.step, options.precision, options.point_limit) {
            Ok(points) => self.extend(points),
            Err(err) => self.skip(err),
        }
    }

    /// Leaves the state untouched for a command that cannot be carried out.
    fn skip(self, err: PathError) -> Self {
        warn!(%err, "skipping command");
        self
    }

    fn extend(mut self, points: impl IntoIterator<Item = Point>) -> Self {
        for p in points {
            self.open.push(p);
            self.cursor = p;
        }
        self
    }

    fn close(mut self) -> Self {
        if !self.open.is_empty() {
            self.closed.push(mem::take(&mut self.open));
        }
        self
    }
}
