//! Screen-space points and the paw placement geometry.
//!
//! Coordinates are `f64` screen units with y growing downward, and headings
//! are degrees measured the same way the host renderer rotates elements
//! (0° points right, 90° points down).

use crate::PawSlot;

/// Half the distance between a dog's left and right paws, per unit of size.
pub const LATERAL_SPAN: f64 = 15.0;

/// Half the distance between a dog's front and back paws, per unit of size.
pub const LONGITUDINAL_SPAN: f64 = 10.0;

/// A screen-space position or displacement.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotate this vector by `heading_deg` about the origin.
    #[inline]
    pub fn rotated(self, heading_deg: f64) -> Point {
        let (sin, cos) = heading_deg.to_radians().sin_cos();
        Point {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Displacement of `distance` units along `heading_deg`.
#[inline]
pub fn heading_step(heading_deg: f64, distance: f64) -> Point {
    Point::new(distance, 0.0).rotated(heading_deg)
}

/// Offset of `slot` from the centre of a dog of scale `size` facing
/// `heading_deg`.
///
/// In the dog's own frame the longitudinal axis is x (front paws at −10·size,
/// back paws at +10·size) and the lateral axis is y (left paws at −15·size,
/// right paws at +15·size).  The body-frame offset is then rotated into
/// screen space by the heading.
pub fn paw_offset(heading_deg: f64, size: f64, slot: PawSlot) -> Point {
    let lateral = if slot.is_left() { -1.0 } else { 1.0 } * LATERAL_SPAN * size;
    let longitudinal = if slot.is_front() { -1.0 } else { 1.0 } * LONGITUDINAL_SPAN * size;
    Point::new(longitudinal, lateral).rotated(heading_deg)
}

/// Absolute screen position of `slot` for a dog centred on `center`.
#[inline]
pub fn paw_position(center: Point, heading_deg: f64, size: f64, slot: PawSlot) -> Point {
    center + paw_offset(heading_deg, size, slot)
}
