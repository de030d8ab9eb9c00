//--------------------------------------------------------------------
// tridiagonal.rs
//--------------------------------------------------------------------
// Solves tridiagonal linear systems with the Thomas algorithm
//--------------------------------------------------------------------

use std::ops::{Add, Div, Mul, Sub};

use crate::geometry::*;
use crate::error::*;

// A banded matrix: sub[i] is at (i+1, i), sup[i] is at (i, i+1)
#[derive(Clone, Debug, PartialEq)]
pub struct TridiagonalSystem {
    pub sub: Vec<Coord>,
    pub diag: Vec<Coord>,
    pub sup: Vec<Coord>
}

impl TridiagonalSystem {
    pub fn new(sub: Vec<Coord>, diag: Vec<Coord>, sup: Vec<Coord>) -> TridiagonalSystem {
        TridiagonalSystem { sub, diag, sup }
    }

    fn check_dimensions(&self, rhs: usize) -> StrokeResult<()> {
        let n = self.diag.len();
        let band = n.saturating_sub(1);
        if n == 0 || self.sub.len() != band || self.sup.len() != band || rhs != n {
            Err(StrokeError::DimensionMismatch {
                diagonal: n, sub: self.sub.len(), sup: self.sup.len(), rhs
            })
        } else { Ok(()) }
    }

    // Forward elimination followed by back substitution
    pub fn solve<T>(&self, rhs: &[T]) -> StrokeResult<Vec<T>>
        where T: Copy + Sub<Output = T> + Mul<Coord, Output = T> + Div<Coord, Output = T> {
        self.check_dimensions(rhs.len())?;

        let n = self.diag.len();
        let mut b = self.diag.clone();
        let mut d = rhs.to_vec();

        for i in 1..n {
            let w = self.sub[i-1] / b[i-1];
            b[i] -= w * self.sup[i-1];
            d[i] = d[i] - d[i-1] * w;
        }

        let mut x = d.clone();
        x[n-1] = d[n-1] / b[n-1];
        for i in (0..n-1).rev() {
            x[i] = (d[i] - x[i+1] * self.sup[i]) / b[i];
        }

        Ok(x)
    }

    // The product of the matrix by a vector
    pub fn apply<T>(&self, x: &[T]) -> StrokeResult<Vec<T>>
        where T: Copy + Add<Output = T> + Mul<Coord, Output = T> {
        self.check_dimensions(x.len())?;

        let n = self.diag.len();
        Ok((0..n).map(|i| {
            let mut v = x[i] * self.diag[i];
            if i > 0 { v = v + x[i-1] * self.sub[i-1]; }
            if i + 1 < n { v = v + x[i+1] * self.sup[i]; }
            v
        }).collect())
    }
}
