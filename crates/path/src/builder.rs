//! Freeform building utilities.
//!
//! ## Contours
//!
//! A freeform shape is made of one or more contours. A contour starts with a
//! pen placement, is followed by line segments and is optionally closed. The
//! builder records the first pen placement when it is created, at the start
//! position. Additional contours are started with `move_to`, which never
//! closes the previous contour.
//!
//! Overlapping contours are not merged. How overlapping areas are filled is
//! decided by the host document's fill rule, so drawing a smaller contour
//! inside a larger one is the way to cut a hole.
//!
//! ## Coordinates
//!
//! The start position is given in absolute units and is only rounded. Every
//! other position is given in local units and converted with the builder's
//! [CoordinateTransform](../struct.CoordinateTransform.html) at the moment it
//! is recorded.
//!
//! ## Examples
//!
//! ```
//! use freeform_path::{DrawingOperation, FreeformBuilder, FreeformOptions, Scale, ShapeList};
//! use freeform_path::math::point;
//! use freeform_path::traits::*;
//!
//! let mut shapes = ShapeList::new();
//! let options = FreeformOptions::DEFAULT.with_scale(Scale::uniform(10.0));
//! let mut builder = FreeformBuilder::with_options(&mut shapes, 0, 0, &options);
//!
//! builder.add_line_segments(&[(1.0, 0.0), (1.0, 1.0)], false)?;
//! builder.close()?;
//!
//! let ops: Vec<DrawingOperation> = builder.iter().cloned().collect();
//! assert_eq!(
//!     ops,
//!     &[
//!         DrawingOperation::PenPlace(point(0, 0)),
//!         DrawingOperation::LineTo(point(10, 0)),
//!         DrawingOperation::LineTo(point(10, 10)),
//!         DrawingOperation::Close,
//!     ]
//! );
//! # Ok::<(), freeform_path::FreeformError>(())
//! ```

use crate::error::{FreeformError, FreeformResult};
use crate::geom::{euclid, CoordinateTransform, Scale};
use crate::math::{Box2D, Point};
use crate::operation::{write_path_data, DrawingOperation};
use crate::sequence::{OperationSequence, OperationsSlice};
use crate::shape::{FreeformGeometry, ShapeCollection};

use num_traits::ToPrimitive;

use alloc::vec::Vec;
use core::fmt;
use core::slice;

/// Parameters for [FreeformBuilder::with_options](struct.FreeformBuilder.html#method.with_options).
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct FreeformOptions {
    /// Ratio between local units and absolute units, per axis.
    ///
    /// Default value: `Scale::ONE`.
    pub scale: Scale,

    /// Number of drawing operations to allocate space for up front.
    ///
    /// Default value: `0`.
    pub capacity: usize,
}

impl FreeformOptions {
    /// Default scale.
    pub const DEFAULT_SCALE: Scale = Scale::ONE;

    pub const DEFAULT: Self = FreeformOptions {
        scale: Self::DEFAULT_SCALE,
        capacity: 0,
    };

    #[inline]
    pub fn scale(scale: Scale) -> Self {
        Self::DEFAULT.with_scale(scale)
    }

    #[inline]
    pub const fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    #[inline]
    pub const fn with_x_scale(mut self, x_scale: f64) -> Self {
        self.scale.x = x_scale;
        self
    }

    #[inline]
    pub const fn with_y_scale(mut self, y_scale: f64) -> Self {
        self.scale.y = y_scale;
        self
    }

    #[inline]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Default for FreeformOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A value that can be resolved to a local `(x, y)` position.
///
/// Implemented for pairs and two-element arrays of primitive numbers, euclid
/// points, and slices or vectors holding exactly two numbers.
pub trait Vertex {
    /// Returns `None` if the value is not a pair of numbers.
    fn local_position(&self) -> Option<(f64, f64)>;
}

impl<X: ToPrimitive, Y: ToPrimitive> Vertex for (X, Y) {
    fn local_position(&self) -> Option<(f64, f64)> {
        Some((self.0.to_f64()?, self.1.to_f64()?))
    }
}

impl<T: ToPrimitive> Vertex for [T; 2] {
    fn local_position(&self) -> Option<(f64, f64)> {
        Some((self[0].to_f64()?, self[1].to_f64()?))
    }
}

impl<T: ToPrimitive> Vertex for [T] {
    fn local_position(&self) -> Option<(f64, f64)> {
        match self {
            [x, y] => Some((x.to_f64()?, y.to_f64()?)),
            _ => None,
        }
    }
}

impl<T: ToPrimitive> Vertex for Vec<T> {
    fn local_position(&self) -> Option<(f64, f64)> {
        self[..].local_position()
    }
}

impl<T: ToPrimitive, U> Vertex for euclid::Point2D<T, U> {
    fn local_position(&self) -> Option<(f64, f64)> {
        Some((self.x.to_f64()?, self.y.to_f64()?))
    }
}

impl<'l, V: Vertex + ?Sized> Vertex for &'l V {
    fn local_position(&self) -> Option<(f64, f64)> {
        (**self).local_position()
    }
}

/// Records the drawing operations of a freeform shape.
///
/// The builder always contains at least one operation: the pen placement at
/// the start position. Operations are only ever appended.
///
/// Mutating methods return `&mut Self` so calls can be chained with `?`.
/// A failing call records nothing.
pub struct FreeformBuilder<S> {
    shapes: S,
    transform: CoordinateTransform,
    operations: Vec<DrawingOperation>,
    // A line segment was recorded since the last pen placement.
    has_segments: bool,
}

impl<S: ShapeCollection> FreeformBuilder<S> {
    /// Creates a builder with its pen at `(start_x, start_y)`.
    ///
    /// The start position is in absolute units. It is rounded half-to-even and
    /// not scaled. `x_scale` and `y_scale` convert the local positions given to
    /// the other methods into absolute units.
    pub fn new<X, Y>(shapes: S, start_x: X, start_y: Y, x_scale: f64, y_scale: f64) -> Self
    where
        X: ToPrimitive,
        Y: ToPrimitive,
    {
        FreeformBuilder::with_options(
            shapes,
            start_x,
            start_y,
            &FreeformOptions::scale(Scale::new(x_scale, y_scale)),
        )
    }

    /// Creates a builder with its pen at `(start_x, start_y)`, configured by
    /// `options`.
    pub fn with_options<X, Y>(shapes: S, start_x: X, start_y: Y, options: &FreeformOptions) -> Self
    where
        X: ToPrimitive,
        Y: ToPrimitive,
    {
        let transform = CoordinateTransform::new(
            start_x,
            start_y,
            options.scale.x,
            options.scale.y,
        );

        let mut operations = Vec::with_capacity(options.capacity.max(1));
        operations.push(DrawingOperation::PenPlace(transform.origin()));

        FreeformBuilder {
            shapes,
            transform,
            operations,
            has_segments: false,
        }
    }

    /// Adds a line segment to each vertex, in order, then closes the contour
    /// if `close` is true.
    ///
    /// Either every vertex is recorded or none is. Fails with
    /// `InvalidVertexSequence` if a vertex cannot be resolved to a finite
    /// position, and with `EmptyContour` if `close` is requested on a contour
    /// that would have no line segment.
    pub fn add_line_segments<I>(&mut self, vertices: I, close: bool) -> FreeformResult<&mut Self>
    where
        I: IntoIterator,
        I::Item: Vertex,
    {
        let vertices = vertices.into_iter();
        let mut segments = Vec::with_capacity(vertices.size_hint().0 + 1);
        for (index, vertex) in vertices.enumerate() {
            let to = vertex
                .local_position()
                .and_then(|(x, y)| self.transform.try_convert(x, y))
                .ok_or(FreeformError::InvalidVertexSequence { index })?;
            segments.push(DrawingOperation::LineTo(to));
        }

        let has_segments = self.has_segments || !segments.is_empty();
        if close {
            if !has_segments {
                return Err(FreeformError::EmptyContour);
            }
            segments.push(DrawingOperation::Close);
        }

        log::trace!(
            "freeform: recording {} operations (close: {})",
            segments.len(),
            close
        );

        self.operations.extend(segments);
        self.has_segments = has_segments;

        Ok(self)
    }

    /// Starts a new contour at the local position `(x, y)`.
    ///
    /// The current contour is left as is, closed or not.
    pub fn move_to<X, Y>(&mut self, x: X, y: Y) -> FreeformResult<&mut Self>
    where
        X: ToPrimitive,
        Y: ToPrimitive,
    {
        let at = self
            .transform
            .try_convert(x, y)
            .ok_or(FreeformError::InvalidVertexSequence { index: 0 })?;

        log::trace!("freeform: pen placed at {:?}", at);

        self.operations.push(DrawingOperation::PenPlace(at));
        self.has_segments = false;

        Ok(self)
    }

    /// Closes the current contour.
    ///
    /// Fails with `EmptyContour` if no line segment was added since the last
    /// pen placement.
    pub fn close(&mut self) -> FreeformResult<&mut Self> {
        if !self.has_segments {
            return Err(FreeformError::EmptyContour);
        }

        self.operations.push(DrawingOperation::Close);

        Ok(self)
    }

    /// Creates a shape out of the recorded operations and returns its handle.
    ///
    /// `origin_x` and `origin_y` are in absolute units. The top-left corner of
    /// the created shape is the origin moved by the top-left corner of the
    /// bounding box. Each call creates a new shape. The builder can still be
    /// used afterwards.
    ///
    /// Fails with `PlacementOutOfRange` if that corner does not fit in an
    /// `i64`, in which case no shape is created.
    pub fn convert_to_shape(&mut self, origin_x: i64, origin_y: i64) -> FreeformResult<S::Shape> {
        let geometry = FreeformGeometry::with_bounds(
            Point::new(origin_x, origin_y),
            self.bounds(),
            &self.operations,
        )
        .ok_or(FreeformError::PlacementOutOfRange)?;

        log::debug!(
            "freeform: creating shape {:?} from {} operations",
            geometry,
            self.operations.len()
        );

        Ok(self.shapes.add_freeform_shape(geometry))
    }
}

impl<S> FreeformBuilder<S> {
    #[inline]
    pub fn transform(&self) -> &CoordinateTransform {
        &self.transform
    }

    /// The start position, in absolute units.
    #[inline]
    pub fn start(&self) -> Point {
        self.transform.origin()
    }

    /// The bounding box of every recorded position, in absolute units.
    pub fn bounds(&self) -> Box2D {
        let start = self.start();
        self.bounding_box()
            .unwrap_or_else(|| Box2D::new(start, start))
    }

    /// The top-left corner of the bounding box.
    #[inline]
    pub fn shape_offset(&self) -> Point {
        self.bounds().min
    }

    #[inline]
    pub fn width(&self) -> i64 {
        self.bounds().width()
    }

    #[inline]
    pub fn height(&self) -> i64 {
        self.bounds().height()
    }

    #[inline]
    pub fn shapes(&self) -> &S {
        &self.shapes
    }

    /// Gives back the shape collection.
    pub fn into_shapes(self) -> S {
        self.shapes
    }
}

impl<S> OperationSequence for FreeformBuilder<S> {
    fn view(&self) -> OperationsSlice {
        OperationsSlice::new(&self.operations)
    }
}

impl<S> core::ops::Index<usize> for FreeformBuilder<S> {
    type Output = DrawingOperation;
    fn index(&self, index: usize) -> &DrawingOperation {
        &self.operations[index]
    }
}

impl<'l, S> IntoIterator for &'l FreeformBuilder<S> {
    type Item = &'l DrawingOperation;
    type IntoIter = slice::Iter<'l, DrawingOperation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}

impl<S> fmt::Debug for FreeformBuilder<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "FreeformBuilder {{ transform: {:?}, operations: ", self.transform)?;
        write_path_data(formatter, &self.operations)?;
        write!(formatter, " }}")
    }
}
