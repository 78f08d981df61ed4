use thiserror::Error;

/// The result type of the fallible builder operations.
pub type FreeformResult<T> = Result<T, FreeformError>;

/// Errors reported while recording drawing operations.
///
/// A failing call leaves the recorded operations untouched.
#[non_exhaustive]
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FreeformError {
    #[error("Cannot close a contour that has no line segment since its pen placement.")]
    EmptyContour,
    #[error("Vertex {index} cannot be converted to a finite absolute-unit position.")]
    InvalidVertexSequence { index: usize },
    #[error("The shape placement does not fit in absolute units.")]
    PlacementOutOfRange,
}
