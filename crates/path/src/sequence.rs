//! Read-only views over recorded drawing operations.
//!
//! The operations recorded by a [FreeformBuilder](../struct.FreeformBuilder.html)
//! are only ever exposed through the [OperationSequence](trait.OperationSequence.html)
//! trait: length, positional access and forward iteration. There is no way to
//! remove, reorder or overwrite an operation through a view.

use crate::math::Box2D;
use crate::operation::{write_path_data, DrawingOperation};

use core::fmt;
use core::slice;

/// An ordered, indexable and iterable sequence of drawing operations.
pub trait OperationSequence {
    /// The operations in drawing order.
    fn view(&self) -> OperationsSlice;

    /// Number of recorded operations.
    fn len(&self) -> usize {
        self.view().operations.len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The operation at `index`, if any.
    fn get(&self, index: usize) -> Option<&DrawingOperation> {
        self.view().operations.get(index)
    }

    /// Iterates over the operations in drawing order.
    fn iter(&self) -> slice::Iter<DrawingOperation> {
        self.view().operations.iter()
    }

    /// Iterates over the contours, each starting at a pen placement.
    fn contours(&self) -> Contours {
        Contours::new(self.view().operations)
    }

    /// The smallest box containing the target of every pen placement and line
    /// segment, or `None` if no operation has a position.
    fn bounding_box(&self) -> Option<Box2D> {
        let mut positions = self.iter().filter_map(DrawingOperation::position);
        let first = positions.next()?;
        let mut bounds = Box2D::new(first, first);
        for p in positions {
            bounds.min = bounds.min.min(p);
            bounds.max = bounds.max.max(p);
        }

        Some(bounds)
    }
}

/// A borrowed view over a run of drawing operations.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct OperationsSlice<'l> {
    pub(crate) operations: &'l [DrawingOperation],
}

impl<'l> OperationsSlice<'l> {
    #[inline]
    pub fn new(operations: &'l [DrawingOperation]) -> Self {
        OperationsSlice { operations }
    }

    /// The underlying operations, with the lifetime of the borrowed storage.
    #[inline]
    pub fn operations(&self) -> &'l [DrawingOperation] {
        self.operations
    }
}

impl<'l> OperationSequence for OperationsSlice<'l> {
    fn view(&self) -> OperationsSlice {
        *self
    }
}

impl OperationSequence for [DrawingOperation] {
    fn view(&self) -> OperationsSlice {
        OperationsSlice::new(self)
    }
}

impl<'l> core::ops::Index<usize> for OperationsSlice<'l> {
    type Output = DrawingOperation;
    fn index(&self, index: usize) -> &DrawingOperation {
        &self.operations[index]
    }
}

impl<'l> IntoIterator for OperationsSlice<'l> {
    type Item = &'l DrawingOperation;
    type IntoIter = slice::Iter<'l, DrawingOperation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}

impl<'l> fmt::Debug for OperationsSlice<'l> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write_path_data(formatter, self.operations)
    }
}

/// An iterator over the contours of an operation sequence.
///
/// Each item starts at a pen placement and extends up to (not including)
/// the next one. Operations preceding the first pen placement, if any, form
/// their own leading item.
#[derive(Clone)]
pub struct Contours<'l> {
    remaining: &'l [DrawingOperation],
}

impl<'l> Contours<'l> {
    pub fn new(operations: &'l [DrawingOperation]) -> Self {
        Contours {
            remaining: operations,
        }
    }
}

impl<'l> Iterator for Contours<'l> {
    type Item = OperationsSlice<'l>;

    fn next(&mut self) -> Option<OperationsSlice<'l>> {
        if self.remaining.is_empty() {
            return None;
        }

        let end = self.remaining[1..]
            .iter()
            .position(DrawingOperation::is_pen_place)
            .map_or(self.remaining.len(), |idx| idx + 1);

        let (contour, rest) = self.remaining.split_at(end);
        self.remaining = rest;

        Some(OperationsSlice::new(contour))
    }
}
