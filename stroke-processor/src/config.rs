//--------------------------------------------------------------------
// config.rs
//--------------------------------------------------------------------
// Parameters of the processing applied to a finished stroke
//--------------------------------------------------------------------

use crate::geometry::*;
use crate::simplify::*;
use crate::error::*;

// How the raw samples of a stroke are reduced before fitting
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reduction {
    None,
    // Visvalingam-Whyatt with an area threshold
    Area(Coord),
    // Douglas-Peucker with a distance tolerance
    Deviation(Coord)
}

impl Reduction {
    pub fn apply(&self, points: &[Vec2]) -> StrokeResult<Polyline> {
        match *self {
            Reduction::None => Ok(points.to_vec()),
            Reduction::Area(threshold) => visvalingam_simplify(points, threshold),
            Reduction::Deviation(epsilon) => douglas_peucker(points, epsilon)
        }
    }
}

#[derive(Debug, Clone)]
pub struct StrokeConfig {
    pub reduction: Reduction,
    // Whether to fit a smooth curve through the reduced points
    pub fit_curve: bool
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            reduction: Reduction::Area(1.0),
            fit_curve: true
        }
    }
}
