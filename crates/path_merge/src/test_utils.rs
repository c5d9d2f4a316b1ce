use approx::{assert_relative_eq, AbsDiffEq, RelativeEq};
use lyon::math::Point;

use crate::path::Path;

/// The on-curve points of a path, in drawing order.
pub fn end_points(path: &Path) -> Vec<Point> {
    path.iter().filter_map(|c| c.end_point()).collect()
}

pub fn assert_relative_eq_pt_slice(left: &[Point], right: &[Point]) {
    assert_relative_eq!(
        AssertablePointSlice(left.to_vec()),
        AssertablePointSlice(right.to_vec()),
    )
}

#[derive(PartialEq, Debug)]
pub(crate) struct AssertablePointSlice(pub Vec<Point>);

impl AbsDiffEq for AssertablePointSlice {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.0.len() == other.0.len()
            && self.0.iter().zip(other.0.iter()).all(|(me, other)| {
                f32::abs_diff_eq(&me.x, &other.x, epsilon)
                    && f32::abs_diff_eq(&me.y, &other.y, epsilon)
            })
    }
}

impl RelativeEq for AssertablePointSlice {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.0.len() == other.0.len()
            && self.0.iter().zip(other.0.iter()).all(|(me, other)| {
                f32::relative_eq(&me.x, &other.x, epsilon, max_relative)
                    && f32::relative_eq(&me.y, &other.y, epsilon, max_relative)
            })
    }
}
