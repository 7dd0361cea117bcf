//! Factory functions for test data: paths, points, and actions.

use kurbo::BezPath;
use shared::{Paint, Point2D};

use crate::action::{ReversibleAction, StrokeAction};

/// Straight polyline through `points`
pub fn polyline_path(points: &[(f64, f64)]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(&(x, y)) = iter.next() {
        path.move_to((x, y));
    }
    for &(x, y) in iter {
        path.line_to((x, y));
    }
    path
}

/// A short diagonal path
pub fn diagonal_path() -> BezPath {
    polyline_path(&[(0.0, 0.0), (10.0, 10.0), (20.0, 5.0)])
}

/// `count` pointer samples along the x axis, `step` apart. Keep the
/// step above the capture's jitter threshold for strokes meant to
/// survive.
pub fn spaced_points(count: usize, step: f64) -> Vec<Point2D> {
    (0..count)
        .map(|i| Point2D::new(i as f64 * step, 0.0))
        .collect()
}

/// Ready-to-commit stroke over [`diagonal_path`]
pub fn stroke_action(paint: Paint) -> ReversibleAction {
    ReversibleAction::Stroke(
        StrokeAction::new(diagonal_path(), paint).expect("fixture path is non-empty"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_path_element_count() {
        assert_eq!(polyline_path(&[]).elements().len(), 0);
        assert_eq!(polyline_path(&[(0.0, 0.0)]).elements().len(), 1);
        assert_eq!(diagonal_path().elements().len(), 3);
    }

    #[test]
    fn test_spaced_points_spacing() {
        let points = spaced_points(3, 10.0);
        assert_eq!(points.len(), 3);
        assert_eq!(points[2], Point2D::new(20.0, 0.0));
    }
}
