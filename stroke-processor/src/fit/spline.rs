//--------------------------------------------------------------------
// spline.rs
//--------------------------------------------------------------------
// Fits a C1 piecewise cubic Bézier spline through every point of a
// polyline
//--------------------------------------------------------------------

use crate::geometry::*;
use crate::curve::CubicBezier;
use crate::error::*;
use super::TridiagonalSystem;

// The inner control points of each segment: segment i goes from
// points[i] to points[i+1] through a[i] and b[i]
#[derive(Clone, Debug, PartialEq)]
pub struct BezierControls { pub a: Vec<Vec2>, pub b: Vec<Vec2> }

// The matrix of the system for n segments
pub fn spline_system(n: usize) -> StrokeResult<TridiagonalSystem> {
    require_points(n.saturating_add(1), 3)?;

    let mut sub = vec![1.0; n - 1];
    let mut diag = vec![4.0; n];
    let sup = vec![1.0; n - 1];

    sub[n-2] = 2.0;
    diag[0] = 2.0;
    diag[n-1] = 7.0;

    Ok(TridiagonalSystem::new(sub, diag, sup))
}

// The right-hand side of the system for the n+1 points
pub fn spline_rhs(points: &[Vec2]) -> StrokeResult<Vec<Vec2>> {
    require_points(points.len(), 3)?;

    let n = points.len() - 1;
    let mut p = Vec::with_capacity(n);

    p.push(points[0] + 2.0 * points[1]);
    for i in 1..n-1 { p.push(2.0 * (2.0 * points[i] + points[i+1])); }
    p.push(8.0 * points[n-1] + points[n]);

    Ok(p)
}

pub fn fit_bezier_controls(points: &[Vec2]) -> StrokeResult<BezierControls> {
    let rhs = spline_rhs(points)?;
    let n = points.len() - 1;
    let system = spline_system(n)?;
    let a = system.solve(&rhs)?;

    if log::log_enabled!(log::Level::Trace) {
        let residual = system.apply(&a)?.iter().zip(&rhs)
            .map(|(&l, &r)| (l - r).length())
            .fold(0.0, Coord::max);
        log::trace!("spline system of {} rows solved with residual {}", n, residual);
    }

    let mut b = Vec::with_capacity(n);
    for i in 0..n-1 { b.push(2.0 * points[i+1] - a[i+1]); }
    b.push((a[n-1] + points[n]) / 2.0);

    log::debug!("fitted {} cubic segments", n);
    Ok(BezierControls { a, b })
}

// A fitted spline along with the points it interpolates
#[derive(Clone, Debug)]
pub struct BezierSpline {
    points: Polyline,
    controls: BezierControls
}

impl BezierSpline {
    pub fn fit(points: &[Vec2]) -> StrokeResult<BezierSpline> {
        let controls = fit_bezier_controls(points)?;
        Ok(BezierSpline { points: points.to_vec(), controls })
    }

    pub fn points(&self) -> &[Vec2] { &self.points }

    // Number of segments, never zero
    pub fn len(&self) -> usize { self.controls.a.len() }

    pub fn segment(&self, i: usize) -> CubicBezier {
        CubicBezier {
            a: self.points[i],
            b: self.controls.a[i],
            c: self.controls.b[i],
            d: self.points[i+1]
        }
    }

    pub fn segments(&self) -> impl Iterator<Item = CubicBezier> + '_ {
        (0..self.len()).map(move |i| self.segment(i))
    }

    // The integer part of t selects the segment
    pub fn at(&self, t: Coord) -> Vec2 {
        let t = t.max(0.0).min(self.len() as Coord);
        let i = (t.floor() as usize).min(self.len() - 1);
        self.segment(i).at(t - i as Coord)
    }

    pub fn bbox(&self) -> Rect {
        let mut segments = self.segments().map(|s| s.bbox());
        let first = segments.next().unwrap_or_else(|| Rect::enclosing_rect_of_point(self.points[0]));
        segments.fold(first, |acc, r| acc.union(r))
    }
}
