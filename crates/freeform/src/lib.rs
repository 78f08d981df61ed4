#![deny(bare_trait_objects)]

//! Freeform shapes for document formats that persist geometry as integer
//! path commands.
//!
//! # Crates
//!
//! This meta-crate reexports the following sub-crates for convenience:
//!
//! * [![crate](https://img.shields.io/crates/v/freeform_path.svg)](https://crates.io/crates/freeform_path)
//!   [![doc](https://docs.rs/freeform_path/badge.svg)](https://docs.rs/freeform_path) -
//!   **freeform_path** - Drawing operations, the freeform builder and the shape
//!   collection interface.
//! * [![crate](https://img.shields.io/crates/v/freeform_geom.svg)](https://crates.io/crates/freeform_geom)
//!   [![doc](https://docs.rs/freeform_geom/badge.svg)](https://docs.rs/freeform_geom) -
//!   **freeform_geom** - Integer geometry, rounding and coordinate transforms.
//!
//! Each `freeform_<name>` crate is reexported as a `<name>` module in `freeform`.
//! For example:
//!
//! ```ignore
//! extern crate freeform_path;
//! use freeform_path::FreeformBuilder;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate freeform;
//! use freeform::path::FreeformBuilder;
//! ```
//!
//! # Feature flags
//!
//! Serialization of the geometry, operation and option types using serde can
//! be enabled with the `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ```
//! use freeform::path::{FreeformBuilder, ShapeList};
//! use freeform::path::traits::*;
//!
//! // One inch is 914400 absolute units; draw in inches.
//! let mut shapes = ShapeList::new();
//! let mut builder = FreeformBuilder::new(&mut shapes, 0, 0, 914_400.0, 914_400.0);
//! builder.add_line_segments(&[(1.0, 0.0), (0.5, 1.0)], true)?;
//!
//! let triangle = builder.convert_to_shape(0, 0)?;
//! assert_eq!(shapes[triangle].width(), 914_400);
//! assert_eq!(shapes[triangle].len(), 4);
//! # Ok::<(), freeform::path::FreeformError>(())
//! ```

pub extern crate freeform_path;

pub use freeform_path as path;
pub use path::geom;

pub use path::math;
