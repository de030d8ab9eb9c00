//--------------------------------------------------------------------
// douglas_peucker.rs
//--------------------------------------------------------------------
// Reduces a polyline by recursively keeping the point that deviates
// the most from the chord of each range
//--------------------------------------------------------------------

use crate::geometry::*;
use crate::error::*;

pub fn douglas_peucker(points: &[Vec2], epsilon: Coord) -> StrokeResult<Polyline> {
    require_points(points.len(), 2)?;

    let mut out = vec![points[0]];
    simplify_range(points, epsilon, &mut out);

    log::debug!("deviation reduction at {} kept {} of {} points", epsilon, out.len(), points.len());
    Ok(out)
}

// Pushes every retained point of the range except its first one
fn simplify_range(points: &[Vec2], epsilon: Coord, out: &mut Polyline) {
    let end = points.len() - 1;
    let chord = Line::new(points[0], points[end]);

    // Find the point with the maximum distance to the chord
    let mut dmax = 0.0;
    let mut index = 0;
    for i in 1..end {
        let d = chord.distance_to(points[i]);
        if d > dmax {
            index = i;
            dmax = d;
        }
    }

    if dmax > epsilon {
        simplify_range(&points[..=index], epsilon, out);
        simplify_range(&points[index..], epsilon, out);
    } else { out.push(points[end]); }
}
