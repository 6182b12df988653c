use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A position in user space, or the difference between two of them.
#[derive(Copy, Clone, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

pub fn point(x: f64, y: f64) -> Point {
    Point { x, y }
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0., y: 0. };

    pub fn distance_to(&self, other: &Point) -> f64 {
        let d = *self - *other;
        (d.x * d.x + d.y * d.y).sqrt()
    }

    pub fn with_x(self, x: f64) -> Point {
        Point { x, y: self.y }
    }

    pub fn with_y(self, y: f64) -> Point {
        Point { x: self.x, y }
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        // Truncate to avoid printing values like 56.974000000000004
        write!(formatter, "({}, {})", self.x as f32, self.y as f32)
    }
}

/// Serialized as a two-element `[x, y]` array.
impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.x, self.y].serialize(serializer)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, other: Point) -> Point {
        Point { x: self.x + other.x, y: self.y + other.y }
    }
}

impl<'a, 'b> Add<&'b Point> for &'a Point {
    type Output = Point;
    fn add(self, other: &'b Point) -> Point {
        *self + *other
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, factor: f64) -> Point {
        Point { x: self.x * factor, y: self.y * factor }
    }
}

#[test]
fn distance() {
    assert_eq!(point(0., 0.).distance_to(&point(3., 4.)), 5.);
    assert_eq!(point(-1., 2.).distance_to(&point(-1., 2.)), 0.);
}

#[test]
fn arithmetic() {
    let a = point(1., 2.);
    let b = point(0.5, -4.);
    assert_eq!(a + b, point(1.5, -2.));
    assert_eq!(&a + &b, point(1.5, -2.));
    assert_eq!(a - b, point(0.5, 6.));
    assert_eq!(a * 3., point(3., 6.));
    assert_eq!(a.with_x(7.), point(7., 2.));
    assert_eq!(a.with_y(7.), point(1., 7.));
}

#[test]
fn serializes_as_pair() {
    let json = serde_json::to_string(&point(1.5, -2.)).unwrap();
    assert_eq!(json, "[1.5,-2.0]");
}
