//--------------------------------------------------------------------
// simplify.rs
//--------------------------------------------------------------------
// Provides the two polyline reduction strategies: the area based one
// (Visvalingam-Whyatt) and the deviation based one (Douglas-Peucker)
//--------------------------------------------------------------------

mod visvalingam;
mod douglas_peucker;

pub use visvalingam::*;
pub use douglas_peucker::*;

// Minimum number of points an area reduction may yield
pub const MIN_REDUCED_POINTS: usize = 4;
