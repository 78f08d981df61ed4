//! The boundary with the host document's shape collection.
//!
//! A finished freeform is described by a [FreeformGeometry](struct.FreeformGeometry.html):
//! the bounding box of every recorded position, the path commands expressed
//! relative to that box and the placement of the shape in the document. The
//! geometry is handed to a [ShapeCollection](trait.ShapeCollection.html) which
//! returns a handle to the shape it created.

use crate::math::{point, Box2D, Point, Size, Vector};
use crate::operation::{write_path_data, DrawingOperation};
use crate::sequence::{OperationSequence, OperationsSlice};

use alloc::vec::Vec;
use core::fmt;

/// The geometry of a freeform shape, ready to be inserted in a document.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct FreeformGeometry {
    placement: Point,
    bounds: Box2D,
    commands: Vec<DrawingOperation>,
}

impl FreeformGeometry {
    /// Builds the geometry of `operations` placed relative to `origin`.
    ///
    /// Returns `None` if no operation has a position, or if the extents of the
    /// bounding box or the placement do not fit in an `i64`.
    pub fn from_operations(origin: Point, operations: &[DrawingOperation]) -> Option<Self> {
        let bounds = operations.bounding_box()?;

        FreeformGeometry::with_bounds(origin, bounds, operations)
    }

    pub(crate) fn with_bounds(
        origin: Point,
        bounds: Box2D,
        operations: &[DrawingOperation],
    ) -> Option<Self> {
        // Every position lies within the bounds, so once the extents fit,
        // so does each position relative to `bounds.min`.
        bounds.max.x.checked_sub(bounds.min.x)?;
        bounds.max.y.checked_sub(bounds.min.y)?;
        let placement = point(
            origin.x.checked_add(bounds.min.x)?,
            origin.y.checked_add(bounds.min.y)?,
        );

        let min = bounds.min.to_vector();
        let commands = operations
            .iter()
            .map(|op| match *op {
                DrawingOperation::PenPlace(at) => DrawingOperation::PenPlace(at - min),
                DrawingOperation::LineTo(to) => DrawingOperation::LineTo(to - min),
                DrawingOperation::Close => DrawingOperation::Close,
            })
            .collect();

        Some(FreeformGeometry {
            placement,
            bounds,
            commands,
        })
    }

    /// Where the top-left corner of the shape lands in the document.
    #[inline]
    pub fn placement(&self) -> Point {
        self.placement
    }

    /// The bounding box of the recorded positions, in absolute units.
    #[inline]
    pub fn bounds(&self) -> Box2D {
        self.bounds
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i64 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i64 {
        self.bounds.height()
    }

    /// The path commands, relative to the top-left corner of `bounds`.
    #[inline]
    pub fn commands(&self) -> &[DrawingOperation] {
        &self.commands
    }

    /// The path commands with the bounding box offset re-applied.
    pub fn absolute_commands(&self) -> impl Iterator<Item = DrawingOperation> + '_ {
        let offset: Vector = self.bounds.min.to_vector();
        self.commands.iter().map(move |op| op.translated(offset))
    }
}

impl OperationSequence for FreeformGeometry {
    fn view(&self) -> OperationsSlice {
        OperationsSlice::new(&self.commands)
    }
}

impl fmt::Debug for FreeformGeometry {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "FreeformGeometry {{ placement: ({}, {}), size: ({}, {}), path: ",
            self.placement.x,
            self.placement.y,
            self.width(),
            self.height()
        )?;
        write_path_data(formatter, &self.commands)?;
        write!(formatter, " }}")
    }
}

/// The document service that turns freeform geometry into shapes.
pub trait ShapeCollection {
    /// The handle returned for each created shape.
    type Shape;

    /// Inserts a new shape with the given geometry and returns its handle.
    fn add_freeform_shape(&mut self, geometry: FreeformGeometry) -> Self::Shape;
}

impl<'l, S: ShapeCollection + ?Sized> ShapeCollection for &'l mut S {
    type Shape = S::Shape;

    fn add_freeform_shape(&mut self, geometry: FreeformGeometry) -> S::Shape {
        (**self).add_freeform_shape(geometry)
    }
}

/// Refers to a shape stored in a [ShapeList](struct.ShapeList.html).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ShapeId(pub u32);

impl ShapeId {
    pub const INVALID: Self = ShapeId(u32::MAX);

    #[inline]
    pub fn to_usize(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn from_usize(val: usize) -> Self {
        debug_assert!(val < u32::MAX as usize);
        ShapeId(val as u32)
    }
}

/// An in-memory shape collection.
///
/// Stores every geometry it receives and hands out sequential IDs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ShapeList {
    shapes: Vec<FreeformGeometry>,
}

impl ShapeList {
    pub fn new() -> Self {
        ShapeList { shapes: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: ShapeId) -> Option<&FreeformGeometry> {
        self.shapes.get(id.to_usize())
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &FreeformGeometry)> + '_ {
        self.shapes
            .iter()
            .enumerate()
            .map(|(idx, shape)| (ShapeId::from_usize(idx), shape))
    }
}

impl ShapeCollection for ShapeList {
    type Shape = ShapeId;

    fn add_freeform_shape(&mut self, geometry: FreeformGeometry) -> ShapeId {
        let id = ShapeId::from_usize(self.shapes.len());
        self.shapes.push(geometry);

        id
    }
}

impl core::ops::Index<ShapeId> for ShapeList {
    type Output = FreeformGeometry;
    fn index(&self, id: ShapeId) -> &FreeformGeometry {
        &self.shapes[id.to_usize()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vector;
    use alloc::format;
    use alloc::vec::Vec;

    fn square(x: i64, y: i64, side: i64) -> [DrawingOperation; 5] {
        [
            DrawingOperation::PenPlace(point(x, y)),
            DrawingOperation::LineTo(point(x + side, y)),
            DrawingOperation::LineTo(point(x + side, y + side)),
            DrawingOperation::LineTo(point(x, y + side)),
            DrawingOperation::Close,
        ]
    }

    #[test]
    fn square_at_origin() {
        let ops = square(0, 0, 100);
        let geometry = FreeformGeometry::from_operations(point(0, 0), &ops).unwrap();

        assert_eq!(geometry.bounds(), Box2D::new(point(0, 0), point(100, 100)));
        assert_eq!(geometry.placement(), point(0, 0));
        assert_eq!(geometry.commands(), &ops[..]);
    }

    #[test]
    fn commands_are_relative_to_the_bounding_box() {
        let ops = square(250, -40, 60);
        let geometry = FreeformGeometry::from_operations(point(1000, 2000), &ops).unwrap();

        assert_eq!(
            geometry.bounds(),
            Box2D::new(point(250, -40), point(310, 20))
        );
        assert_eq!(geometry.placement(), point(1250, 1960));
        assert_eq!(geometry.size(), Size::new(60, 60));
        assert_eq!(geometry.commands(), &square(0, 0, 60)[..]);

        let absolute: Vec<DrawingOperation> = geometry.absolute_commands().collect();
        assert_eq!(absolute, &ops[..]);
    }

    #[test]
    fn no_position_no_geometry() {
        let ops = [DrawingOperation::Close];
        assert_eq!(FreeformGeometry::from_operations(point(0, 0), &ops), None);
    }

    #[test]
    fn extents_beyond_i64_have_no_geometry() {
        let ops = [
            DrawingOperation::PenPlace(point(i64::MIN, 0)),
            DrawingOperation::LineTo(point(i64::MAX, 0)),
        ];
        assert_eq!(FreeformGeometry::from_operations(point(0, 0), &ops), None);

        let ops = square(i64::MAX - 10, 0, 10);
        assert_eq!(FreeformGeometry::from_operations(point(11, 0), &ops), None);
        assert!(FreeformGeometry::from_operations(point(10, 0), &ops).is_some());
    }

    #[test]
    fn geometry_debug() {
        let ops = square(0, 0, 10);
        let geometry = FreeformGeometry::from_operations(point(5, 5), &ops).unwrap();

        assert_eq!(
            format!("{:?}", geometry),
            "FreeformGeometry { placement: (5, 5), size: (10, 10), path: \" M 0 0 L 10 0 L 10 10 L 0 10 Z\" }"
        );
    }

    #[test]
    fn shape_list_ids() {
        let mut shapes = ShapeList::new();
        assert!(shapes.is_empty());

        let a = shapes.add_freeform_shape(
            FreeformGeometry::from_operations(point(0, 0), &square(0, 0, 10)).unwrap(),
        );
        let b = shapes.add_freeform_shape(
            FreeformGeometry::from_operations(point(0, 0), &square(0, 0, 20)).unwrap(),
        );

        assert_eq!(a, ShapeId(0));
        assert_eq!(b, ShapeId(1));
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[a].width(), 10);
        assert_eq!(shapes.get(b).map(|shape| shape.width()), Some(20));
        assert_eq!(shapes.get(ShapeId::INVALID), None);

        let ids: Vec<ShapeId> = shapes.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, [a, b]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn shape_id_out_of_range() {
        ShapeId::from_usize(u32::MAX as usize);
    }

    #[test]
    fn translated_square_round_trip() {
        let ops = square(-7, 13, 3);
        let geometry = FreeformGeometry::from_operations(point(0, 0), &ops).unwrap();
        let offset = vector(-7, 13);

        for (relative, original) in geometry.commands().iter().zip(ops.iter()) {
            assert_eq!(relative.translated(offset), *original);
        }
    }
}
