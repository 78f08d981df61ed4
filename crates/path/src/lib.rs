#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![no_std]

//! Build freeform shapes out of pen placements, line segments and closes.
//!
//! A freeform shape is a custom outline made of one or more contours. Each
//! contour starts with a pen placement, continues with straight line segments
//! and may be closed back to its pen placement. Positions are provided in a
//! local coordinate space and converted to integer absolute units as soon as
//! they are recorded.
//!
//! The recorded [operations](enum.DrawingOperation.html) are exposed through
//! the read-only [OperationSequence](trait.OperationSequence.html) view and
//! are eventually handed to a [ShapeCollection](trait.ShapeCollection.html)
//! which creates the document shape.
//!
//! # Examples
//!
//! ```
//! use freeform_path::{DrawingOperation, FreeformBuilder, ShapeList};
//! use freeform_path::math::point;
//! use freeform_path::traits::*;
//!
//! let mut shapes = ShapeList::new();
//! let mut builder = FreeformBuilder::new(&mut shapes, 0.0, 0.0, 1.0, 1.0);
//!
//! // An outer square with a smaller square inside.
//! builder
//!     .add_line_segments(&[(100, 0), (100, 100), (0, 100)], true)?
//!     .move_to(25, 25)?
//!     .add_line_segments(&[(75, 25), (75, 75), (25, 75)], true)?;
//!
//! assert_eq!(builder.len(), 10);
//! assert_eq!(builder[0], DrawingOperation::PenPlace(point(0, 0)));
//! assert_eq!(builder.contours().count(), 2);
//!
//! let shape = builder.convert_to_shape(914_400, 914_400)?;
//! assert_eq!(shapes[shape].width(), 100);
//! # Ok::<(), freeform_path::FreeformError>(())
//! ```

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub use freeform_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod builder;
mod error;
mod operation;
pub mod sequence;
pub mod shape;


#[doc(inline)]
pub use crate::builder::{FreeformBuilder, FreeformOptions, Vertex};
pub use crate::error::*;
#[doc(inline)]
pub use crate::operation::DrawingOperation;
#[doc(inline)]
pub use crate::sequence::{Contours, OperationSequence, OperationsSlice};
#[doc(inline)]
pub use crate::shape::{FreeformGeometry, ShapeCollection, ShapeId, ShapeList};

pub use crate::geom::{math, CoordinateTransform, Scale};

pub mod traits {
    //! `freeform_path` traits reexported here for convenience.

    pub use crate::sequence::OperationSequence;
    pub use crate::shape::ShapeCollection;
}
