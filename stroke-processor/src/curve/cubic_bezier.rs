//--------------------------------------------------------------------
// cubic_bezier.rs
//--------------------------------------------------------------------
// Represents a cubic Bézier curve
//--------------------------------------------------------------------

use crate::derive_more::*;

use crate::geometry::*;
use crate::vec_utils::*;
use super::quadratic_bezier::QuadraticBezier;
use super::*;

// The cubic bezier structure
#[derive(Copy, Clone, Debug, Display, PartialEq)]
#[display(fmt = "CubicBezier({},{},{},{})", a, b, c, d)]
pub struct CubicBezier { pub a: Vec2, pub b: Vec2, pub c: Vec2, pub d: Vec2 }

impl CubicBezier {
    pub fn at(&self, t: Coord) -> Vec2 { 
        let ct = 1.0 - t;
        ct * ct * ct * self.a + 3.0 * ct * ct * t * self.b
            + 3.0 * ct * t * t * self.c + t * t * t * self.d
    }

    pub fn derivative(&self) -> QuadraticBezier {
        let a = 3.0 * (self.b - self.a);
        let b = 3.0 * (self.c - self.b);
        let c = 3.0 * (self.d - self.c);
        QuadraticBezier { a, b, c }
    }

    pub fn critical_points(&self) -> CriticalPoints {
        let dd = self.derivative();
        let tx = dd.roots_x();
        let ty = dd.roots_y();

        let mut v = CriticalPoints::new();
        v.push(0.0);
        v.extend(tx.as_ref().iter().copied());
        v.extend(ty.as_ref().iter().copied());
        v.push(1.0);
        v.retain(|&mut t| inside01(t));
        v.sort_unstable_by(|a: &Coord, b: &Coord| a.total_cmp(b));
        arrayvec_dedup(&mut v);
        v
    }

    pub fn bbox(&self) -> Rect {
        let pts = self.critical_points();
        Rect::enclosing_rect(pts.iter().map(|&t| self.at(t)))
            .unwrap_or_else(|| Rect::enclosing_rect_of_point(self.a))
    }
}
