use super::*;

// =============================================================
// PenState
// =============================================================

#[test]
fn pen_state_default_is_up() {
    assert_eq!(PenState::default(), PenState::Up);
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn fresh_core_is_all_white() {
    let core = SketchCore::new();
    assert!(core.raster().is_uniform(PAPER));
}

#[test]
fn fresh_core_has_surface_dimensions() {
    let core = SketchCore::new();
    assert_eq!(core.raster().width(), SURFACE_WIDTH);
    assert_eq!(core.raster().height(), SURFACE_HEIGHT);
}

#[test]
fn fresh_core_pen_is_up() {
    let core = SketchCore::new();
    assert!(!core.pen_is_down());
}

// =============================================================
// Stroke lifecycle
// =============================================================

#[test]
fn begin_stroke_lowers_the_pen_without_inking() {
    let mut core = SketchCore::new();
    core.begin_stroke(Point::new(100.0, 100.0));
    assert!(core.pen_is_down());
    // Starting a path draws nothing until the stroke extends.
    assert!(core.raster().is_uniform(PAPER));
}

#[test]
fn extend_stroke_before_begin_is_a_noop() {
    let mut core = SketchCore::new();
    core.extend_stroke(Point::new(50.0, 50.0));
    core.extend_stroke(Point::new(200.0, 200.0));
    assert!(core.raster().is_uniform(PAPER));
    assert!(!core.pen_is_down());
}

#[test]
fn extend_stroke_inks_a_segment() {
    let mut core = SketchCore::new();
    core.begin_stroke(Point::new(100.0, 100.0));
    core.extend_stroke(Point::new(150.0, 100.0));
    assert_eq!(core.raster().get(120, 100), Some(INK));
    assert!(!core.raster().is_uniform(PAPER));
}

#[test]
fn extend_stroke_advances_the_path_position() {
    let mut core = SketchCore::new();
    core.begin_stroke(Point::new(10.0, 10.0));
    core.extend_stroke(Point::new(10.0, 40.0));
    core.extend_stroke(Point::new(40.0, 40.0));
    // Second segment continues from where the first ended.
    assert_eq!(core.raster().get(10, 25), Some(INK));
    assert_eq!(core.raster().get(25, 40), Some(INK));
    // Nothing connects the original start to the second target directly.
    assert_eq!(core.raster().get(25, 25), Some(PAPER));
}

#[test]
fn end_stroke_lifts_the_pen() {
    let mut core = SketchCore::new();
    core.begin_stroke(Point::new(10.0, 10.0));
    core.end_stroke();
    assert!(!core.pen_is_down());
    core.extend_stroke(Point::new(100.0, 100.0));
    assert!(core.raster().is_uniform(PAPER));
}

#[test]
fn end_stroke_is_idempotent() {
    let mut core = SketchCore::new();
    core.end_stroke();
    core.end_stroke();
    assert!(!core.pen_is_down());
}

#[test]
fn separate_strokes_do_not_connect() {
    let mut core = SketchCore::new();
    core.begin_stroke(Point::new(10.0, 10.0));
    core.extend_stroke(Point::new(20.0, 10.0));
    core.end_stroke();
    core.begin_stroke(Point::new(100.0, 10.0));
    core.extend_stroke(Point::new(110.0, 10.0));
    core.end_stroke();
    // The gap between the two strokes stays white.
    assert_eq!(core.raster().get(60, 10), Some(PAPER));
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_restores_all_white() {
    let mut core = SketchCore::new();
    core.begin_stroke(Point::new(10.0, 10.0));
    core.extend_stroke(Point::new(400.0, 400.0));
    core.clear();
    assert!(core.raster().is_uniform(PAPER));
}

#[test]
fn clear_is_idempotent() {
    let mut core = SketchCore::new();
    core.begin_stroke(Point::new(10.0, 10.0));
    core.extend_stroke(Point::new(40.0, 40.0));
    core.clear();
    let after_first = core.raster().clone();
    core.clear();
    assert_eq!(core.raster(), &after_first);
}

#[test]
fn drawing_still_works_after_clear() {
    let mut core = SketchCore::new();
    core.begin_stroke(Point::new(10.0, 10.0));
    core.extend_stroke(Point::new(40.0, 10.0));
    core.clear();
    core.begin_stroke(Point::new(10.0, 10.0));
    core.extend_stroke(Point::new(40.0, 10.0));
    assert_eq!(core.raster().get(25, 10), Some(INK));
}
