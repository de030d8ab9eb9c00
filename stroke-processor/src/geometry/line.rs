//--------------------------------------------------------------------
// line.rs
//--------------------------------------------------------------------
// Represents a line segment, used as the chord of the deviation
// based simplification
//--------------------------------------------------------------------

use crate::derive_more::*;
use super::*;

#[derive(Copy, Clone, Debug, Display, Constructor)]
#[display(fmt = "Line({},{})", a, b)]
pub struct Line { pub a: Vec2, pub b: Vec2 }

impl Line {
    // Distance from the point to the infinite line through the segment;
    // a degenerate segment measures the distance to its start point
    pub fn distance_to(&self, p: Vec2) -> Coord {
        let dv = self.b - self.a;
        let pv = p - self.a;
        let len = dv.length();
        if len > 0.0 { (dv.cross(pv) / len).abs() }
        else { pv.length() }
    }
}
