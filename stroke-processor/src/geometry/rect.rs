//--------------------------------------------------------------------
// rect.rs
//--------------------------------------------------------------------
// Provides a rectangle class, used for the bounds of the strokes
//--------------------------------------------------------------------

use crate::derive_more::*;
use crate::approx::AbsDiffEq;

use super::*;
use std::iter::Iterator;
use CoordM::INFINITY;

#[derive(Copy, Clone, PartialEq, Debug, Display, Constructor)]
#[display(fmt = "(x={}, y={}, width={}, height={})", x, y, width, height)]
pub struct Rect { pub x: Coord, pub y: Coord, pub width: Coord, pub height: Coord }

impl Rect {
    pub fn right(&self) -> Coord { self.x + self.width }
    pub fn bottom(&self) -> Coord { self.y + self.height }

    // Grows the rectangle until it contains the point
    pub fn expand_to(&mut self, pt: Vec2) {
        let x1 = self.x.min(pt.x);
        let y1 = self.y.min(pt.y);
        let x2 = self.right().max(pt.x);
        let y2 = self.bottom().max(pt.y);
        *self = Rect::new(x1, y1, x2 - x1, y2 - y1);
    }

    pub fn union(&self, other: Rect) -> Rect {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.right().max(other.right());
        let y2 = self.bottom().max(other.bottom());
        Rect::new(x1, y1, x2 - x1, y2 - y1)
    }

    pub fn enclosing_rect(pts: impl Iterator<Item = Vec2>) -> Option<Rect> {
        let mut x1 = INFINITY;
        let mut x2 = -INFINITY;
        let mut y1 = INFINITY;
        let mut y2 = -INFINITY;
    
        let mut empty = true;
        for pt in pts {
            if x1 > pt.x { x1 = pt.x; }
            if x2 < pt.x { x2 = pt.x; }
            if y1 > pt.y { y1 = pt.y; }
            if y2 < pt.y { y2 = pt.y; }
            empty = false;
        }
    
        if empty { None } else { Some(Rect::new(x1, y1, x2 - x1, y2 - y1)) }
    }

    pub fn enclosing_rect_of_point(pt: Vec2) -> Rect { Rect::new(pt.x, pt.y, 0.0, 0.0) }
}

// Growing a rectangle point by point rounds its extent at every step
impl AbsDiffEq for Rect {
    type Epsilon = Coord;

    fn default_epsilon() -> Coord { EPSILON }

    fn abs_diff_eq(&self, other: &Rect, epsilon: Coord) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
            && self.width.abs_diff_eq(&other.width, epsilon)
            && self.height.abs_diff_eq(&other.height, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn covers(rect: Rect, pt: Vec2) -> bool {
        rect.x <= pt.x && rect.y <= pt.y && rect.right() >= pt.x && rect.bottom() >= pt.y
    }

    #[test]
    fn enclosing_rect_of_points() {
        let pts = vec![Vec2::new(1.0, 2.0), Vec2::new(-1.0, 5.0), Vec2::new(3.0, 0.0)];
        let rect = Rect::enclosing_rect(pts.into_iter()).unwrap();
        assert_eq!(rect, Rect::new(-1.0, 0.0, 4.0, 5.0));
        assert!(Rect::enclosing_rect(std::iter::empty::<Vec2>()).is_none());
    }

    #[test]
    fn incremental_expansion_matches_enclosing_rect() {
        let pts = [Vec2::new(0.5, 0.5), Vec2::new(2.0, -3.0), Vec2::new(-4.0, 1.0)];
        let mut rect = Rect::enclosing_rect_of_point(pts[0]);
        for &p in &pts[1..] { rect.expand_to(p); }
        assert_abs_diff_eq!(rect, Rect::enclosing_rect(pts.iter().copied()).unwrap());
        assert!(pts.iter().all(|&p| covers(rect, p)));
    }

    #[test]
    fn expansion_error_stays_within_tolerance() {
        // Extents that are not representable accumulate rounding on every step
        let pts: Vec<_> = (0..200)
            .map(|i| Vec2::new(0.1 * i as Coord + 0.3, 7.7 - 0.3 * (i % 17) as Coord))
            .collect();
        let mut rect = Rect::enclosing_rect_of_point(pts[0]);
        for &p in &pts[1..] { rect.expand_to(p); }

        let expected = Rect::enclosing_rect(pts.iter().copied()).unwrap();
        assert_abs_diff_eq!(rect, expected, epsilon = 1e-9);
        assert_eq!(rect.x, expected.x);
        assert_eq!(rect.y, expected.y);
    }

    #[test]
    fn union_covers_both() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(2.0, -1.0, 1.0, 1.0);
        let u = a.union(b);
        assert_eq!(u, Rect::new(0.0, -1.0, 3.0, 2.0));
        for r in &[a, b] {
            assert!(covers(u, Vec2::new(r.x, r.y)) && covers(u, Vec2::new(r.right(), r.bottom())));
        }
    }
}
