use super::*;

use crate::consts::{INK, PAPER, STROKE_WIDTH};

fn ink_count(raster: &Raster) -> usize {
    raster
        .as_rgba()
        .chunks_exact(4)
        .filter(|px| *px == INK)
        .count()
}

// =============================================================
// Point
// =============================================================

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

#[test]
fn point_copy_semantics() {
    let a = Point::new(1.5, 2.5);
    let b = a;
    assert_eq!(a, b);
}

// =============================================================
// stamp
// =============================================================

#[test]
fn stamp_inks_a_compact_block() {
    let mut raster = Raster::new(20, 20);
    stamp(&mut raster, Point::new(10.0, 10.0), STROKE_WIDTH, INK);
    // A 2-px round pen at integer coordinates covers the 2×2 block whose
    // corner is the stamp point.
    assert_eq!(raster.get(9, 9), Some(INK));
    assert_eq!(raster.get(10, 9), Some(INK));
    assert_eq!(raster.get(9, 10), Some(INK));
    assert_eq!(raster.get(10, 10), Some(INK));
    assert_eq!(ink_count(&raster), 4);
}

#[test]
fn stamp_outside_bounds_is_clipped() {
    let mut raster = Raster::new(20, 20);
    stamp(&mut raster, Point::new(-50.0, -50.0), STROKE_WIDTH, INK);
    stamp(&mut raster, Point::new(500.0, 500.0), STROKE_WIDTH, INK);
    assert!(raster.is_uniform(PAPER));
}

#[test]
fn stamp_straddling_the_edge_inks_only_inside() {
    let mut raster = Raster::new(20, 20);
    stamp(&mut raster, Point::new(0.0, 10.0), STROKE_WIDTH, INK);
    assert!(ink_count(&raster) > 0);
    assert_eq!(raster.get(0, 9), Some(INK));
    assert_eq!(raster.get(0, 10), Some(INK));
}

// =============================================================
// segment
// =============================================================

#[test]
fn zero_length_segment_stamps_a_point() {
    let mut raster = Raster::new(20, 20);
    segment(&mut raster, Point::new(10.0, 10.0), Point::new(10.0, 10.0), STROKE_WIDTH, INK);
    assert_eq!(ink_count(&raster), 4);
}

#[test]
fn horizontal_segment_inks_both_endpoints_and_between() {
    let mut raster = Raster::new(40, 20);
    segment(&mut raster, Point::new(5.0, 10.0), Point::new(30.0, 10.0), STROKE_WIDTH, INK);
    assert_eq!(raster.get(5, 10), Some(INK));
    assert_eq!(raster.get(17, 10), Some(INK));
    assert_eq!(raster.get(29, 10), Some(INK));
}

#[test]
fn diagonal_segment_has_no_gaps() {
    let mut raster = Raster::new(40, 40);
    segment(&mut raster, Point::new(2.0, 2.0), Point::new(35.0, 33.0), STROKE_WIDTH, INK);
    // Every column the line crosses should contain at least one inked pixel.
    for x in 2..35 {
        let hit = (0..40).any(|y| raster.get(x, y) == Some(INK));
        assert!(hit, "gap at column {x}");
    }
}

#[test]
fn segment_leaving_the_surface_is_clipped() {
    let mut raster = Raster::new(20, 20);
    segment(&mut raster, Point::new(10.0, 10.0), Point::new(100.0, 10.0), STROKE_WIDTH, INK);
    assert_eq!(raster.get(19, 10), Some(INK));
    assert!(ink_count(&raster) > 0);
}
