//--------------------------------------------------------------------
// fit.rs
//--------------------------------------------------------------------
// Provides the interpolating cubic spline fitting of the strokes
//--------------------------------------------------------------------

mod tridiagonal;
mod spline;

pub use tridiagonal::*;
pub use spline::*;
