//! Scenario tests spanning the geometry and path crates.
//!
//! `Slide` is a minimal stand-in for a host document's shape collection: it
//! keeps every freeform geometry it receives along with a generated name.

use freeform::path::{FreeformGeometry, ShapeCollection};

#[cfg(test)]
mod scenarios;

/// A shape created on a [Slide](struct.Slide.html).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideShape {
    pub id: u32,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct Slide {
    shapes: Vec<(SlideShape, FreeformGeometry)>,
    next_id: u32,
}

impl Slide {
    pub fn new() -> Self {
        // Shape ids start after the id reserved for the slide's group shape.
        Slide {
            shapes: Vec::new(),
            next_id: 2,
        }
    }

    pub fn shapes(&self) -> &[(SlideShape, FreeformGeometry)] {
        &self.shapes
    }

    pub fn geometry(&self, shape: &SlideShape) -> Option<&FreeformGeometry> {
        self.shapes
            .iter()
            .find(|(s, _)| s.id == shape.id)
            .map(|(_, geometry)| geometry)
    }
}

impl Default for Slide {
    fn default() -> Self {
        Slide::new()
    }
}

impl ShapeCollection for Slide {
    type Shape = SlideShape;

    fn add_freeform_shape(&mut self, geometry: FreeformGeometry) -> SlideShape {
        let id = self.next_id;
        self.next_id += 1;

        let shape = SlideShape {
            id,
            name: format!("Freeform {}", id - 1),
        };

        log::info!(
            "slide: added {:?} at {:?} ({} x {})",
            shape.name,
            geometry.placement(),
            geometry.width(),
            geometry.height()
        );

        self.shapes.push((shape.clone(), geometry));

        shape
    }
}
