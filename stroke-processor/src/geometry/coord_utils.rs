//--------------------------------------------------------------------
// coord_utils.rs
//--------------------------------------------------------------------
// Provides utilities to work with the coordinate class
//--------------------------------------------------------------------

use super::*;

// Default tolerance of the approximate point comparisons
pub const EPSILON: Coord = 1.0 / 32768.0;

// Triangles below this area are considered collinear or duplicated
pub const NEARLY_ZERO_AREA: Coord = 1e-7;

pub fn inside01(t: Coord) -> bool { t >= 0.0 && t <= 1.0 }

// Area of the triangle formed by a point and its two neighbors
pub fn triangle_area(prev: Vec2, cur: Vec2, next: Vec2) -> Coord {
    0.5 * (next - cur).cross(prev - cur).abs()
}
