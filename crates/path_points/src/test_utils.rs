use approx::{assert_relative_eq, AbsDiffEq, RelativeEq};

use crate::Point;

pub fn assert_relative_eq_points(left: &[Point], right: &[Point]) {
    assert_relative_eq!(
        AssertablePoints(left.to_vec()),
        AssertablePoints(right.to_vec()),
        epsilon = 1e-9
    )
}

#[derive(PartialEq, Debug)]
pub(crate) struct AssertablePoints(pub Vec<Point>);

impl AbsDiffEq for AssertablePoints {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.0.len() == other.0.len()
            && self.0.iter().zip(other.0.iter()).all(|(me, other)| {
                f64::abs_diff_eq(&me.x, &other.x, epsilon) && f64::abs_diff_eq(&me.y, &other.y, epsilon)
            })
    }
}

impl RelativeEq for AssertablePoints {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.0.len() == other.0.len()
            && self.0.iter().zip(other.0.iter()).all(|(me, other)| {
                f64::relative_eq(&me.x, &other.x, epsilon, max_relative)
                    && f64::relative_eq(&me.y, &other.y, epsilon, max_relative)
            })
    }
}
