#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![no_std]

//! Integer geometry primitives and the local-to-absolute coordinate transform
//! used by freeform shapes.
//!
//! Freeform shapes are described in a caller-chosen local coordinate space and
//! persisted by the host document as integer path commands in absolute units.
//! This crate provides the pieces that sit between the two:
//!
//! - the [math](math/index.html) aliases for integer points, vectors and boxes,
//! - [round_half_even](fn.round_half_even.html), the single rounding step
//!   applied to every converted coordinate,
//! - the [CoordinateTransform](struct.CoordinateTransform.html) that maps local
//!   positions to absolute units.
//!
//! # Examples
//!
//! ```
//! use freeform_geom::{CoordinateTransform, math::point};
//!
//! let transform = CoordinateTransform::new(100.0, 50.0, 2.0, 0.5);
//!
//! assert_eq!(transform.origin(), point(100, 50));
//! assert_eq!(transform.convert(3.0, 5.0), point(106, 52));
//! ```

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport dependencies.
pub use euclid;
pub use num_traits;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod rounding;
mod transform;

#[doc(inline)]
pub use crate::rounding::{clamp_coordinate, round_half_even, to_coordinate, MAX_COORDINATE};
#[doc(inline)]
pub use crate::transform::{CoordinateTransform, Scale};

pub mod math {
    //! i64 versions of the euclid types used for absolute-unit geometry.

    /// Alias for ```euclid::default::Point2D<i64>```.
    pub type Point = euclid::default::Point2D<i64>;

    /// Alias for ```euclid::default::Vector2D<i64>```.
    pub type Vector = euclid::default::Vector2D<i64>;

    /// Alias for ```euclid::default::Size2D<i64>```.
    pub type Size = euclid::default::Size2D<i64>;

    /// Alias for ```euclid::default::Box2D<i64>```.
    pub type Box2D = euclid::default::Box2D<i64>;

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: i64, y: i64) -> Point {
        Point::new(x, y)
    }

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: i64, y: i64) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Size::new(w, h)`.
    #[inline]
    pub fn size(w: i64, h: i64) -> Size {
        Size::new(w, h)
    }
}
