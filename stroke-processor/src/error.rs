//--------------------------------------------------------------------
// error.rs
//--------------------------------------------------------------------
// Errors reported to the callers of the stroke algorithms
//--------------------------------------------------------------------

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum StrokeError {
    #[error("not enough points: needed at least {needed}, got {got}")]
    TooFewPoints { needed: usize, got: usize },

    #[error("band sizes do not match: {diagonal} diagonal entries, {sub} sub-diagonal, {sup} super-diagonal, {rhs} right-hand side")]
    DimensionMismatch { diagonal: usize, sub: usize, sup: usize, rhs: usize },
}

pub type StrokeResult<T> = std::result::Result<T, StrokeError>;

pub(crate) fn require_points(got: usize, needed: usize) -> StrokeResult<()> {
    if got < needed { Err(StrokeError::TooFewPoints { needed, got }) }
    else { Ok(()) }
}
