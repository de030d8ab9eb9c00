//--------------------------------------------------------------------
// quadratic_bezier.rs
//--------------------------------------------------------------------
// Represents a quadratic Bézier curve, the derivative of the cubic
// segments of a fitted stroke
//--------------------------------------------------------------------

use crate::derive_more::*;
use crate::geometry::*;

#[derive(Copy, Clone, Debug, Display)]
#[display(fmt = "QuadraticBezier({},{},{})", a, b, c)]
pub struct QuadraticBezier { pub a: Vec2, pub b: Vec2, pub c: Vec2 }

impl QuadraticBezier {
    // Parameters where each coordinate reaches an extremum
    pub fn roots_x(&self) -> roots::Roots<Coord> {
        roots::find_roots_quadratic(self.a.x - 2.0 * self.b.x + self.c.x,
            2.0 * (self.b.x - self.a.x), self.a.x)
    }

    pub fn roots_y(&self) -> roots::Roots<Coord> {
        roots::find_roots_quadratic(self.a.y - 2.0 * self.b.y + self.c.y,
            2.0 * (self.b.y - self.a.y), self.a.y)
    }
}
