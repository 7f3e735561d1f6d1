//! Sampling of cubic Bézier curves into points.

use lyon::geom::CubicBezierSegment;
use serde::{Deserialize, Serialize};
use shared::Tolerance;

use crate::{error::PathError, Point};

/// Turns a cubic curve into points along it.
///
/// Implementations must not repeat `curve.from`, must end with a point at
/// `curve.to` and must fail rather than produce more than `limit` points.
pub trait CurveSampler {
    fn sample(&self, curve: &CubicBezierSegment<f64>, limit: usize) -> Result<Vec<Point>, PathError>;
}

/// Adaptive flattening: the polyline stays within `tolerance` of the curve.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Flatten {
    pub tolerance: Tolerance,
}

impl CurveSampler for Flatten {
    fn sample(&self, curve: &CubicBezierSegment<f64>, limit: usize) -> Result<Vec<Point>, PathError> {
        let mut points = curve
            .flattened(*self.tolerance)
            .take(limit.saturating_add(1))
            .collect::<Vec<_>>();
        if points.len() > limit {
            return Err(PathError::TooManyPoints { limit });
        }
        match points.last_mut() {
            Some(last) => *last = curve.to,
            None => points.push(curve.to),
        }
        Ok(points)
    }
}

/// `segments` evenly spaced parameter values.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Uniform {
    pub segments: usize,
}

impl CurveSampler for Uniform {
    fn sample(&self, curve: &CubicBezierSegment<f64>, limit: usize) -> Result<Vec<Point>, PathError> {
        let segments = self.segments.max(1);
        if segments > limit {
            return Err(PathError::TooManyPoints { limit });
        }
        let mut points = (1..segments)
            .map(|i| curve.sample(i as f64 / segments as f64))
            .collect::<Vec<_>>();
        points.push(curve.to);
        Ok(points)
    }
}

/// Serializable choice between the built-in samplers.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CurveSampling {
    Flatten {
        #[serde(default)]
        tolerance: Tolerance,
    },
    Uniform {
        #[serde(default = "CurveSampling::default_segments")]
        segments: usize,
    },
}

impl CurveSampling {
    pub const DEFAULT_SEGMENTS: usize = 10;

    fn default_segments() -> usize {
        CurveSampling::DEFAULT_SEGMENTS
    }

    pub fn uniform() -> Self {
        CurveSampling::Uniform {
            segments: CurveSampling::default_segments(),
        }
    }
}

impl Default for CurveSampling {
    fn default() -> Self {
        CurveSampling::Flatten {
            tolerance: Tolerance::default(),
        }
    }
}

impl CurveSampler for CurveSampling {
    fn sample(&self, curve: &CubicBezierSegment<f64>, limit: usize) -> Result<Vec<Point>, PathError> {
        match *self {
            CurveSampling::Flatten { tolerance } => Flatten { tolerance }.sample(curve, limit),
            CurveSampling::Uniform { segments } => Uniform { segments }.sample(curve, limit),
        }
    }
}

#[cfg(test)]
mod test {
    use lyon::geom::{point, CubicBezierSegment};
    use shared::Tolerance;

    use super::{CurveSampler, CurveSampling, Flatten, Uniform};
    use crate::error::PathError;
    use crate::test_utils::assert_relative_eq_points;

    const LIMIT: usize = 1_000;

    fn arch() -> CubicBezierSegment<f64> {
        CubicBezierSegment {
            from: point(0.0, 0.0),
            ctrl1: point(0.0, 40.0),
            ctrl2: point(40.0, 40.0),
            to: point(40.0, 0.0),
        }
    }

    #[test]
    fn uniform_samples() {
        let points = Uniform { segments: 2 }.sample(&arch(), LIMIT).unwrap();
        assert_relative_eq_points(&points, &[point(20.0, 30.0), point(40.0, 0.0)]);
    }

    #[test]
    fn uniform_zero_segments_still_reaches_the_end() {
        let points = Uniform { segments: 0 }.sample(&arch(), LIMIT).unwrap();
        assert_relative_eq_points(&points, &[point(40.0, 0.0)]);
    }

    #[test]
    fn flatten_ends_on_the_endpoint() {
        let coarse = Flatten {
            tolerance: Tolerance::new(5.0).unwrap(),
        }
        .sample(&arch(), LIMIT)
        .unwrap();
        let fine = Flatten {
            tolerance: Tolerance::new(0.01).unwrap(),
        }
        .sample(&arch(), LIMIT)
        .unwrap();
        assert!(!coarse.is_empty());
        assert!(fine.len() > coarse.len());
        assert_eq!(coarse.last(), Some(&point(40.0, 0.0)));
        assert_eq!(fine.last(), Some(&point(40.0, 0.0)));
        assert!(fine.iter().all(|p| p.y > -0.05 && p.y < 30.05));
    }

    #[test]
    fn straight_curve_flattens_to_its_endpoint() {
        let line = CubicBezierSegment {
            from: point(0.0, 0.0),
            ctrl1: point(10.0, 0.0),
            ctrl2: point(20.0, 0.0),
            to: point(30.0, 0.0),
        };
        let points = CurveSampling::default().sample(&line, LIMIT).unwrap();
        assert_eq!(points.last(), Some(&point(30.0, 0.0)));
    }

    #[test]
    fn sampling_respects_the_limit() {
        let err = Uniform { segments: 5_000 }.sample(&arch(), LIMIT).unwrap_err();
        assert_eq!(err, PathError::TooManyPoints { limit: LIMIT });
        assert_eq!(Uniform { segments: LIMIT }.sample(&arch(), LIMIT).unwrap().len(), LIMIT);

        let fine = Flatten {
            tolerance: Tolerance::new(0.001).unwrap(),
        };
        assert_eq!(
            fine.sample(&arch(), 4).unwrap_err(),
            PathError::TooManyPoints { limit: 4 }
        );
    }

    #[test]
    fn sampling_from_toml() {
        let sampling: CurveSampling = toml::from_str("kind = \"uniform\"\nsegments = 4").unwrap();
        assert_eq!(sampling, CurveSampling::Uniform { segments: 4 });
        let sampling: CurveSampling = toml::from_str("kind = \"flatten\"").unwrap();
        assert_eq!(sampling, CurveSampling::default());
    }
}
