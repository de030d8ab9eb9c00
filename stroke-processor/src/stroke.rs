//--------------------------------------------------------------------
// stroke.rs
//--------------------------------------------------------------------
// Accumulates the samples of a stroke and turns the finished stroke
// into a reduced polyline and a smooth curve
//--------------------------------------------------------------------

use crate::geometry::*;
use crate::fit::BezierSpline;
use crate::config::StrokeConfig;
use crate::error::*;

// The fitter needs at least this many points
const MIN_STROKE_POINTS: usize = 3;

#[derive(Clone, Debug)]
pub struct Stroke {
    pub raw: Polyline,
    pub points: Polyline,
    pub spline: Option<BezierSpline>,
    pub bounds: Rect
}

pub struct StrokeBuilder {
    points: Polyline,
    bounds: Rect,
    config: StrokeConfig
}

impl StrokeBuilder {
    pub fn new(start: Vec2, config: StrokeConfig) -> StrokeBuilder {
        StrokeBuilder { points: vec![start], bounds: Rect::enclosing_rect_of_point(start), config }
    }

    pub fn add_point(&mut self, p: Vec2) {
        self.points.push(p);
        self.bounds.expand_to(p);
    }

    pub fn finish(self) -> StrokeResult<Stroke> {
        let StrokeBuilder { points: mut raw, bounds, config } = self;

        // A tap still has to produce a curve
        let last = raw[raw.len() - 1];
        while raw.len() < MIN_STROKE_POINTS { raw.push(last); }

        let reduced = config.reduction.apply(&raw)?;
        let points = if reduced.len() < MIN_STROKE_POINTS {
            log::warn!("{:?} left {} of {} points, keeping the raw stroke",
                config.reduction, reduced.len(), raw.len());
            raw.clone()
        } else { reduced };

        let spline = if config.fit_curve { Some(BezierSpline::fit(&points)?) } else { None };

        // The curve may overshoot the samples between them
        let bounds = spline.as_ref().map_or(bounds, |s| bounds.union(s.bbox()));

        log::debug!("finished stroke of {} points, reduced to {}", raw.len(), points.len());
        Ok(Stroke { raw, points, spline, bounds })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Reduction;
    use approx::assert_abs_diff_eq;

    fn build(pts: &[(Coord, Coord)], config: StrokeConfig) -> StrokeBuilder {
        let mut builder = StrokeBuilder::new(Vec2::new(pts[0].0, pts[0].1), config);
        for &(x, y) in &pts[1..] { builder.add_point(Vec2::new(x, y)); }
        builder
    }

    #[test]
    fn tap_is_padded() {
        let stroke = build(&[(3.0, 4.0)], StrokeConfig::default()).finish().unwrap();
        assert_eq!(stroke.raw.len(), 3);
        assert!(stroke.raw.iter().all(|&p| p == Vec2::new(3.0, 4.0)));
        assert_eq!(stroke.points, stroke.raw);
        let spline = stroke.spline.unwrap();
        assert_eq!(spline.len(), 2);
        assert_abs_diff_eq!(spline.at(1.5), Vec2::new(3.0, 4.0), epsilon = 1e-12);
    }

    #[test]
    fn bounds_follow_the_samples() {
        let config = StrokeConfig { reduction: Reduction::None, fit_curve: false };
        let stroke = build(&[(0.0, 0.0), (2.0, -1.0), (5.0, 3.0)], config).finish().unwrap();
        assert_eq!(stroke.bounds, Rect::new(0.0, -1.0, 5.0, 4.0));
    }

    #[test]
    fn bounds_include_the_curve_overshoot() {
        let config = StrokeConfig { reduction: Reduction::None, fit_curve: true };
        let stroke = build(&[(0.0, 0.0), (1.0, 2.0), (2.0, 0.0), (3.0, 2.0)], config).finish().unwrap();
        let samples = Rect::new(0.0, 0.0, 3.0, 2.0);
        let spline = stroke.spline.as_ref().unwrap();

        assert_abs_diff_eq!(stroke.bounds, samples.union(spline.bbox()));
        assert!(stroke.bounds.y <= samples.y && stroke.bounds.bottom() >= samples.bottom());
        for i in 0..=30 {
            let p = spline.at(i as Coord / 10.0);
            assert!(p.y >= stroke.bounds.y - 1e-9 && p.y <= stroke.bounds.bottom() + 1e-9);
        }
    }

    #[test]
    fn degenerate_area_reduction_falls_back_to_raw() {
        let line: Vec<_> = (0..10).map(|i| (i as Coord, 0.0)).collect();
        let stroke = build(&line, StrokeConfig::default()).finish().unwrap();
        assert_eq!(stroke.points.len(), 10);
        assert!(stroke.spline.is_some());
    }

    #[test]
    fn deviation_reduction_keeps_corners() {
        let config = StrokeConfig { reduction: Reduction::Deviation(0.5), fit_curve: false };
        let stroke = build(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (2.0, 2.0),
            (3.0, 2.0), (4.0, 2.0)], config).finish().unwrap();
        assert_eq!(stroke.points, vec![Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0), Vec2::new(4.0, 2.0)]);
        assert!(stroke.spline.is_none());
    }

    #[test]
    fn area_reduction_drops_jitter() {
        let config = StrokeConfig { reduction: Reduction::Area(0.5), fit_curve: true };
        let stroke = build(&[(0.0, 0.0), (1.0, 0.01), (2.0, 0.0), (3.0, 4.0), (4.0, 0.0),
            (5.0, 4.0), (6.0, 0.0)], config).finish().unwrap();
        assert!(!stroke.points.contains(&Vec2::new(1.0, 0.01)));
        assert_eq!(stroke.points.len(), 6);
        assert_eq!(stroke.spline.unwrap().len(), 5);
    }
}
