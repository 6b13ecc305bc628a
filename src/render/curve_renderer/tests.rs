use super::{CurveCanvas, CurveKind, CurvePath, CurveRenderer, CurveShape, PathOp};
use crate::core::{MarkerState, Point, PointRegistry};
use glam::Vec2;

#[derive(Default)]
struct RecordingCanvas {
    circles: Vec<(Vec2, f32, u8)>,
    paths: Vec<Vec<PathOp>>,
}

impl CurveCanvas for RecordingCanvas {
    fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: u8) {
        self.circles.push((center, radius, alpha));
    }

    fn stroke_path(&mut self, path: &CurvePath) {
        self.paths.push(path.ops().to_vec());
    }
}

fn registry_with(points: &[(i32, i32)]) -> PointRegistry {
    let mut registry = PointRegistry::new();
    for &(x, y) in points {
        registry.register_next(Point::new(x, y));
    }
    registry
}

// ── Kurvenauswahl ──

#[test]
fn test_select_by_filled_count() {
    let points = [(0, 0), (10, 0), (10, 10), (0, 10)];
    let expected = [
        CurveKind::None,
        CurveKind::None,
        CurveKind::Line,
        CurveKind::Quadratic,
        CurveKind::Cubic,
    ];
    for (count, kind) in expected.into_iter().enumerate() {
        let registry = registry_with(&points[..count]);
        assert_eq!(CurveShape::select(&registry).kind(), kind, "{count} Punkte");
    }
}

#[test]
fn test_select_ignores_point_values() {
    // Identische Punkte ergeben trotzdem eine kubische Kurve
    let registry = registry_with(&[(5, 5), (5, 5), (5, 5), (5, 5)]);
    assert_eq!(CurveShape::select(&registry).kind(), CurveKind::Cubic);
}

#[test]
fn test_select_quadratic_uses_slot_roles() {
    let registry = registry_with(&[(0, 0), (5, 10), (10, 0)]);
    assert_eq!(
        CurveShape::select(&registry),
        CurveShape::Quadratic {
            start: Point::new(0, 0),
            control: Point::new(5, 10),
            end: Point::new(10, 0),
        }
    );
}

// ── Zeichnen ──

#[test]
fn test_draw_empty_registry_draws_nothing() {
    let mut renderer = CurveRenderer::new();
    let mut canvas = RecordingCanvas::default();

    let kind = renderer.draw(&PointRegistry::new(), &MarkerState::new(), &mut canvas);

    assert_eq!(kind, CurveKind::None);
    assert!(canvas.circles.is_empty());
    assert!(canvas.paths.is_empty());
}

#[test]
fn test_draw_single_point_draws_marker_only() {
    let mut renderer = CurveRenderer::new();
    let mut canvas = RecordingCanvas::default();
    let mut markers = MarkerState::new();
    markers.set_radius(0, 12.5);
    markers.fill_alpha = 90;

    renderer.draw(&registry_with(&[(10, 10)]), &markers, &mut canvas);

    assert_eq!(canvas.circles, vec![(Vec2::new(10.0, 10.0), 12.5, 90)]);
    assert!(canvas.paths.is_empty());
}

#[test]
fn test_draw_cubic_path() {
    let mut renderer = CurveRenderer::new();
    let mut canvas = RecordingCanvas::default();
    let registry = registry_with(&[(0, 0), (3, 10), (7, 10), (10, 0)]);

    let kind = renderer.draw(&registry, &MarkerState::new(), &mut canvas);

    assert_eq!(kind, CurveKind::Cubic);
    assert_eq!(canvas.circles.len(), 4);
    assert_eq!(
        canvas.paths,
        vec![vec![
            PathOp::MoveTo(Vec2::new(0.0, 0.0)),
            PathOp::CubicTo {
                control1: Vec2::new(3.0, 10.0),
                control2: Vec2::new(7.0, 10.0),
                end: Vec2::new(10.0, 0.0),
            },
        ]]
    );
}

#[test]
fn test_path_is_rewound_between_frames() {
    let mut renderer = CurveRenderer::new();
    let mut canvas = RecordingCanvas::default();
    let mut registry = registry_with(&[(0, 0), (10, 0)]);

    renderer.draw(&registry, &MarkerState::new(), &mut canvas);
    registry.register_next(Point::new(10, 10));
    renderer.draw(&registry, &MarkerState::new(), &mut canvas);

    assert_eq!(canvas.paths.len(), 2);
    assert_eq!(canvas.paths[1].len(), 2);
    assert!(matches!(canvas.paths[1][1], PathOp::QuadTo { .. }));
}

#[test]
fn test_gap_before_secondary_slot_draws_markers_only() {
    let mut renderer = CurveRenderer::new();
    let mut canvas = RecordingCanvas::default();
    let mut registry = registry_with(&[(0, 0)]);
    registry.update_slot(2, Point::new(20, 20));

    let kind = renderer.draw(&registry, &MarkerState::new(), &mut canvas);

    assert_eq!(kind, CurveKind::None);
    assert_eq!(canvas.circles.len(), 2);
    assert!(canvas.paths.is_empty());
}

#[test]
fn test_wrapped_session_draws_no_curve() {
    let registry = registry_with(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    assert_eq!(registry.filled_len(), 1);
    assert_eq!(CurveShape::select(&registry), CurveShape::None);
}
