//--------------------------------------------------------------------
// curve.rs
//--------------------------------------------------------------------
// Provides the Bézier curves the fitted strokes are made of
//--------------------------------------------------------------------

mod quadratic_bezier;
mod cubic_bezier;

pub use quadratic_bezier::*;
pub use cubic_bezier::*;

use crate::geometry::*;
use crate::arrayvec::ArrayVec;

pub const MAX_CRITICAL_POINTS: usize = 6;

pub type CriticalPoints = ArrayVec<[Coord; MAX_CRITICAL_POINTS]>;
