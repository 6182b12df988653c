use crate::svg::geometry::Point;

/// A curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// ```text
/// ∀ t ∈ [0..1],  B(t) = (1 - t)³ from + 3 t (1 - t)² ctrl1 + 3 t² (1 - t) ctrl2 + t³ to
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezierSegment {
    pub from: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

impl CubicBezierSegment {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f64) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = 1. - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;
        self.from * one_t3
            + self.ctrl1 * (3. * t * one_t2)
            + self.ctrl2 * (3. * t2 * one_t)
            + self.to * t3
    }

    /// Sum of the lengths of the three legs of the control polygon.
    /// Always at least the length of the curve itself.
    pub fn control_polygon_length(&self) -> f64 {
        self.from.distance_to(&self.ctrl1)
            + self.ctrl1.distance_to(&self.ctrl2)
            + self.ctrl2.distance_to(&self.to)
    }

    /// Number of straight segments used to approximate this curve:
    /// `|resolution / control_polygon_length|`, truncated, within `1..=max_steps`.
    ///
    /// A curve whose control points all coincide takes a single step.
    pub fn step_count(&self, resolution: f64, max_steps: u32) -> u32 {
        let length = self.control_polygon_length();
        if !(length > 0.) {
            return 1
        }
        let steps = (resolution / length).abs();
        if steps.is_nan() {
            return 1
        }
        // `as` saturates, so an infinite quotient lands on `u32::MAX` before clamping.
        (steps as u32).max(1).min(max_steps.max(1))
    }

    /// Iterate over `steps` points evenly spaced in parameter space over `(0, 1]`.
    /// The last point is exactly `self.to`.
    pub fn flattened(&self, steps: u32) -> CubicSteps {
        CubicSteps {
            curve: *self,
            steps: steps.max(1),
            done: 0,
        }
    }
}

/// An iterator over the samples of a cubic bezier segment, see `CubicBezierSegment::flattened`.
pub struct CubicSteps {
    curve: CubicBezierSegment,
    steps: u32,
    done: u32,
}

impl Iterator for CubicSteps {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done >= self.steps {
            return None
        }
        self.done += 1;
        if self.done == self.steps {
            // Avoid accumulating rounding errors on the end point.
            return Some(self.curve.to)
        }
        let t = f64::from(self.done) / f64::from(self.steps);
        Some(self.curve.sample(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps - self.done) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CubicSteps {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::geometry::point;

    fn arch() -> CubicBezierSegment {
        CubicBezierSegment {
            from: point(0., 0.),
            ctrl1: point(0., 0.),
            ctrl2: point(10., 10.),
            to: point(10., 0.),
        }
    }

    #[test]
    fn sample_end_points() {
        let curve = arch();
        assert_eq!(curve.sample(0.), curve.from);
        assert_eq!(curve.sample(1.), curve.to);
    }

    #[test]
    fn sample_middle() {
        // 1/8 from + 3/8 ctrl1 + 3/8 ctrl2 + 1/8 to
        let p = arch().sample(0.5);
        assert!((p.x - 5.).abs() < 1e-12);
        assert!((p.y - 3.75).abs() < 1e-12);
    }

    #[test]
    fn step_count_from_resolution() {
        // Control polygon: 0 + 10√2 + 10 ≈ 24.14
        let curve = arch();
        assert_eq!(curve.step_count(100., 2048), 4);
        assert_eq!(curve.step_count(-100., 2048), 4);
        assert_eq!(curve.step_count(1., 2048), 1);
        assert_eq!(curve.step_count(0., 2048), 1);
        assert_eq!(curve.step_count(1e12, 2048), 2048);
        assert_eq!(curve.step_count(f64::NAN, 2048), 1);
    }

    #[test]
    fn degenerate_curve_takes_one_step() {
        let p = point(3., 3.);
        let curve = CubicBezierSegment { from: p, ctrl1: p, ctrl2: p, to: p };
        assert_eq!(curve.step_count(100., 2048), 1);
        assert_eq!(curve.flattened(1).collect::<Vec<_>>(), [p]);
    }

    #[test]
    fn flattened_ends_on_curve_end() {
        let curve = arch();
        let points: Vec<_> = curve.flattened(4).collect();
        assert_eq!(points.len(), 4);
        assert_eq!(points[1], curve.sample(0.5));
        assert_eq!(points[3], point(10., 0.));
        assert_eq!(curve.flattened(0).len(), 1);
    }
}
