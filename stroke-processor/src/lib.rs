//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Declaration of all modules occurs here
//--------------------------------------------------------------------

extern crate approx;
extern crate derive_more;
extern crate ordered_float;
extern crate roots;
extern crate arrayvec;

mod geometry;
mod curve;
mod indexed_heap;
mod simplify;
mod fit;
mod config;
mod stroke;
mod error;
mod vec_utils;

pub use geometry::*;
pub use curve::*;
pub use indexed_heap::IndexedHeap;
pub use simplify::*;
pub use fit::*;
pub use config::*;
pub use stroke::*;
pub use error::{StrokeError, StrokeResult};
