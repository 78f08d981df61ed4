use crate::{Slide, SlideShape};

use freeform::math::{point, Box2D};
use freeform::path::traits::*;
use freeform::path::{DrawingOperation, FreeformBuilder, FreeformError, FreeformGeometry};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const EMU_PER_INCH: f64 = 914_400.0;

#[test]
fn square_with_square_hole_on_a_slide() {
    init_logger();

    let mut slide = Slide::new();
    let mut builder = FreeformBuilder::new(&mut slide, 0, 0, 1.0, 1.0);
    builder
        .add_line_segments(&[(100, 0), (100, 100), (0, 100)], true)
        .unwrap()
        .move_to(25, 25)
        .unwrap()
        .add_line_segments(&[(25, 75), (75, 75), (75, 25)], true)
        .unwrap();

    let shape = builder.convert_to_shape(0, 0).unwrap();
    assert_eq!(
        shape,
        SlideShape {
            id: 2,
            name: "Freeform 1".to_string()
        }
    );

    let geometry = slide.geometry(&shape).unwrap();
    assert_eq!(geometry.bounds(), Box2D::new(point(0, 0), point(100, 100)));
    assert_eq!(geometry.contours().count(), 2);
    for contour in geometry.contours() {
        assert!(contour[0].is_pen_place());
        assert!(contour.iter().any(DrawingOperation::is_line_to));
        assert!(contour[contour.len() - 1].is_close());
    }
}

#[test]
fn inch_based_drawing() {
    init_logger();

    let mut slide = Slide::new();
    let start = EMU_PER_INCH;
    let mut builder = FreeformBuilder::new(&mut slide, start, start, EMU_PER_INCH, EMU_PER_INCH);
    builder
        .add_line_segments(&[(2.0, 0.0), (2.0, 1.5), (0.0, 1.5)], true)
        .unwrap();

    assert_eq!(builder.shape_offset(), point(914_400, 914_400));
    assert_eq!(builder.width(), 1_828_800);
    assert_eq!(builder.height(), 1_371_600);

    let shape = builder.convert_to_shape(0, 0).unwrap();
    let geometry = slide.geometry(&shape).unwrap();
    assert_eq!(geometry.placement(), point(914_400, 914_400));
    assert_eq!(
        geometry.commands(),
        &[
            DrawingOperation::PenPlace(point(0, 0)),
            DrawingOperation::LineTo(point(1_828_800, 0)),
            DrawingOperation::LineTo(point(1_828_800, 1_371_600)),
            DrawingOperation::LineTo(point(0, 1_371_600)),
            DrawingOperation::Close,
        ]
    );
}

#[test]
fn repeated_builds_are_identical() {
    fn build() -> FreeformGeometry {
        let mut slide = Slide::new();
        let mut builder = FreeformBuilder::new(&mut slide, 0.5, 1.5, 12_700.0 / 3.0, 9_525.0 / 7.0);
        builder
            .add_line_segments(&[(0.1, 0.2), (33.3, 0.7), (12.5, 66.6)], true)
            .unwrap();
        builder.move_to(-2.5, -3.5).unwrap();
        builder
            .add_line_segments(&[(1.0 / 3.0, 2.0 / 3.0)], false)
            .unwrap();
        let shape = builder.convert_to_shape(100, 100).unwrap();

        slide.geometry(&shape).unwrap().clone()
    }

    let a = build();
    let b = build();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn geometry_survives_serialization() {
    let mut slide = Slide::new();
    let mut builder = FreeformBuilder::new(&mut slide, 10, 20, 2.0, 2.0);
    builder.add_line_segments(&[(5, 0), (5, 5)], true).unwrap();
    let shape = builder.convert_to_shape(0, 0).unwrap();

    let geometry = slide.geometry(&shape).unwrap();
    let json = serde_json::to_string(geometry).unwrap();
    let parsed: FreeformGeometry = serde_json::from_str(&json).unwrap();

    assert_eq!(&parsed, geometry);
}

#[test]
fn failed_calls_leave_the_builder_unchanged() {
    let mut slide = Slide::new();
    let mut builder = FreeformBuilder::new(&mut slide, 0, 0, 1.0, 1.0);
    builder.add_line_segments(&[(10, 0)], false).unwrap();

    let before: Vec<DrawingOperation> = builder.iter().cloned().collect();

    assert_eq!(
        builder
            .add_line_segments(&[(1.0, 1.0), (f64::NAN, 2.0)], true)
            .err(),
        Some(FreeformError::InvalidVertexSequence { index: 1 })
    );
    builder.close().unwrap();
    builder.move_to(20, 20).unwrap();
    assert_eq!(builder.close().err(), Some(FreeformError::EmptyContour));
    builder
        .add_line_segments(&[(3e18, 0.0), (-3e18, 0.0)], false)
        .unwrap();
    assert_eq!(
        builder.convert_to_shape(i64::MIN, 0).err(),
        Some(FreeformError::PlacementOutOfRange)
    );

    let after: Vec<DrawingOperation> = builder.iter().cloned().collect();
    assert_eq!(after[..before.len()], before[..]);
    assert_eq!(after.len(), before.len() + 4);
    assert!(slide.shapes().is_empty());
}

#[test]
fn two_builders_share_a_slide() {
    init_logger();

    let mut slide = Slide::new();

    let mut triangle = FreeformBuilder::new(&mut slide, 0, 0, 1.0, 1.0);
    triangle.add_line_segments(&[(10, 0), (5, 8)], true).unwrap();
    let first = triangle.convert_to_shape(0, 0).unwrap();

    let mut line = FreeformBuilder::new(&mut slide, 0, 0, 1.0, 1.0);
    line.add_line_segments(&[(0, 40)], false).unwrap();
    let second = line.convert_to_shape(0, 0).unwrap();

    assert_eq!(first.id, 2);
    assert_eq!(second.id, 3);
    assert_eq!(slide.shapes().len(), 2);
    assert_eq!(slide.geometry(&second).map(|g| (g.width(), g.height())), Some((0, 40)));
}
