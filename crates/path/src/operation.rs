use crate::math::{Point, Vector};

use core::fmt;

/// A single recorded drawing operation, in absolute units.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum DrawingOperation {
    /// Moves the pen without drawing. Always the first operation of a contour.
    PenPlace(Point),
    /// Draws a straight line from the previous endpoint.
    LineTo(Point),
    /// Closes the current contour back to its most recent pen placement.
    Close,
}

impl DrawingOperation {
    /// The target of the operation, `None` for `Close`.
    #[inline]
    pub fn position(&self) -> Option<Point> {
        match *self {
            DrawingOperation::PenPlace(at) | DrawingOperation::LineTo(at) => Some(at),
            DrawingOperation::Close => None,
        }
    }

    #[inline]
    pub fn is_pen_place(&self) -> bool {
        matches!(self, DrawingOperation::PenPlace(..))
    }

    #[inline]
    pub fn is_line_to(&self) -> bool {
        matches!(self, DrawingOperation::LineTo(..))
    }

    #[inline]
    pub fn is_close(&self) -> bool {
        matches!(self, DrawingOperation::Close)
    }

    /// Returns the same operation with its target moved by `by`.
    #[inline]
    pub fn translated(&self, by: Vector) -> Self {
        match *self {
            DrawingOperation::PenPlace(at) => DrawingOperation::PenPlace(at + by),
            DrawingOperation::LineTo(to) => DrawingOperation::LineTo(to + by),
            DrawingOperation::Close => DrawingOperation::Close,
        }
    }
}

/// Writes operations in a compact SVG-like syntax, for example `" M 0 0 L 10 0 Z"`.
pub(crate) fn write_path_data(
    formatter: &mut fmt::Formatter,
    operations: &[DrawingOperation],
) -> fmt::Result {
    fn write_point(formatter: &mut fmt::Formatter, point: Point) -> fmt::Result {
        write!(formatter, " {} {}", point.x, point.y)
    }

    write!(formatter, "\"")?;

    for op in operations {
        match *op {
            DrawingOperation::PenPlace(at) => {
                write!(formatter, " M")?;
                write_point(formatter, at)?;
            }
            DrawingOperation::LineTo(to) => {
                write!(formatter, " L")?;
                write_point(formatter, to)?;
            }
            DrawingOperation::Close => {
                write!(formatter, " Z")?;
            }
        }
    }

    write!(formatter, "\"")
}
