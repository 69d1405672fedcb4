//! End-to-end recognition of synthetic strokes through the public API.

use proptest::prelude::*;
use shape_recognizer::{
    recognize, Point, RecognitionError, RecognitionResult, Recognizer, RecognizerConfig,
    ShapeLabel, ShapeMetrics, Stroke,
};
use std::f32::consts::TAU;

// ============================================================================
// Stroke builders
// ============================================================================

/// Walks the polyline through `vertices`, sampling `per_edge` points on every edge,
/// the way a pointer trace would arrive.
fn trace(vertices: &[(f32, f32)], per_edge: usize) -> Vec<Point> {
    let mut pts = Vec::new();
    for w in vertices.windows(2) {
        let (a, b) = (w[0], w[1]);
        for i in 0..per_edge {
            let t = i as f32 / per_edge as f32;
            pts.push(Point::new(a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t));
        }
    }
    if let Some(&(x, y)) = vertices.last() {
        pts.push(Point::new(x, y));
    }
    pts
}

fn circle(n: usize, cx: f32, cy: f32, radius: f32) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let a = i as f32 / n as f32 * TAU;
            Point::new(cx + radius * a.cos(), cy + radius * a.sin())
        })
        .collect()
}

fn label_of(points: &[Point]) -> ShapeLabel {
    recognize(points, &RecognizerConfig::default())
        .expect("valid input")
        .expect("long enough to classify")
        .label
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn closed_right_triangle_is_a_triangle() {
    let stroke = trace(&[(0.0, 0.0), (200.0, 0.0), (0.0, 200.0), (0.0, 0.0)], 20);
    let result = recognize(&stroke, &RecognizerConfig::default()).unwrap().unwrap();
    assert_eq!(result.metrics.corner_count, 3);
    assert_eq!(result.label, ShapeLabel::Triangle);
}

#[test]
fn open_right_angle_is_a_triangle() {
    // two corners, but the implicitly closed outline is a thin right triangle
    let stroke = trace(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)], 10);
    let result = recognize(&stroke, &RecognizerConfig::default()).unwrap().unwrap();
    assert_eq!(result.metrics.corner_count, 2);
    assert!(result.metrics.circularity < 0.6);
    assert_eq!(result.label, ShapeLabel::Triangle);
    assert_eq!(
        result.corners,
        vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(100.0, 100.0)]
    );
}

#[test]
fn dense_circle_is_a_circle() {
    for n in [60, 100, 200] {
        let stroke = circle(n, 300.0, 240.0, 100.0);
        let result = recognize(&stroke, &RecognizerConfig::default()).unwrap().unwrap();
        assert!(result.metrics.corner_count > 5, "{n} points: {:?}", result.metrics);
        assert!(result.metrics.circularity > 0.7, "{n} points: {:?}", result.metrics);
        assert_eq!(result.label, ShapeLabel::Circle);
    }
}

#[test]
fn square_is_a_square() {
    let stroke = trace(
        &[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0), (0.0, 0.0)],
        25,
    );
    let result = recognize(&stroke, &RecognizerConfig::default()).unwrap().unwrap();
    assert_eq!(result.metrics.corner_count, 4);
    assert_eq!(result.metrics.aspect_ratio, Some(1.0));
    assert_eq!(result.label, ShapeLabel::Square);
    assert_eq!(result.summary(), "Shape: Square");
}

#[test]
fn square_started_mid_edge_is_a_square() {
    let stroke = trace(
        &[(50.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0), (0.0, 0.0), (50.0, 0.0)],
        20,
    );
    assert_eq!(label_of(&stroke), ShapeLabel::Square);
}

#[test]
fn wide_rectangle_is_a_rectangle() {
    let stroke = trace(
        &[(100.0, 0.0), (200.0, 0.0), (200.0, 50.0), (0.0, 50.0), (0.0, 0.0), (100.0, 0.0)],
        20,
    );
    let result = recognize(&stroke, &RecognizerConfig::default()).unwrap().unwrap();
    assert_eq!(result.metrics.corner_count, 5);
    assert_eq!(result.metrics.aspect_ratio, Some(4.0));
    assert_eq!(result.label, ShapeLabel::Rectangle);
}

#[test]
fn elongated_quad_from_a_corner_hits_the_triangle_rule_first() {
    // four corners and circularity ~0.48: rule order sends it to the triangle branch
    let stroke = trace(
        &[(0.0, 0.0), (200.0, 0.0), (200.0, 50.0), (0.0, 50.0), (0.0, 0.0)],
        25,
    );
    let result = recognize(&stroke, &RecognizerConfig::default()).unwrap().unwrap();
    assert_eq!(result.metrics.corner_count, 4);
    assert!(result.metrics.circularity < 0.6);
    assert_eq!(result.label, ShapeLabel::Triangle);
}

#[test]
fn three_point_stroke_is_not_classified() {
    let stroke = [Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(100.0, 100.0)];
    assert_eq!(recognize(&stroke, &RecognizerConfig::default()), Ok(None));
}

#[test]
fn single_point_stroke_is_not_classified() {
    assert_eq!(
        recognize(&[Point::new(12.0, 34.0)], &RecognizerConfig::default()),
        Ok(None)
    );
}

#[test]
fn empty_stroke_is_rejected() {
    assert_eq!(
        recognize(Stroke::new().points(), &RecognizerConfig::default()),
        Err(RecognitionError::EmptyStroke)
    );
}

// ============================================================================
// Degenerate geometry
// ============================================================================

#[test]
fn straight_lines_are_unknown() {
    let horizontal: Vec<Point> = (0..30).map(|i| Point::new(i as f32 * 10.0, 0.0)).collect();
    let vertical: Vec<Point> = (0..30).map(|i| Point::new(0.0, i as f32 * 10.0)).collect();
    for stroke in [horizontal, vertical] {
        let result = recognize(&stroke, &RecognizerConfig::default()).unwrap().unwrap();
        assert_eq!(result.metrics.aspect_ratio, None);
        assert_eq!(result.metrics.circularity, 0.0);
        assert_eq!(result.label, ShapeLabel::Unknown);
    }
}

#[test]
fn stationary_pointer_is_unknown() {
    let stroke = vec![Point::new(5.0, 5.0); 12];
    let result = recognize(&stroke, &RecognizerConfig::default()).unwrap().unwrap();
    assert!(result.metrics.circularity.is_finite());
    assert_eq!(result.label, ShapeLabel::Unknown);
}

#[test]
fn short_strokes_classify_without_corners() {
    // between the classification and corner detection thresholds
    let stroke = circle(8, 0.0, 0.0, 100.0);
    let result = recognize(&stroke, &RecognizerConfig::default()).unwrap().unwrap();
    assert_eq!(result.metrics.corner_count, 0);
    assert!(result.corners.is_empty());
    // every 10th point of 8 leaves only the first and last: no enclosed area
    assert_eq!(result.metrics.area, 0.0);
    assert_eq!(result.label, ShapeLabel::Unknown);

    let full_area = RecognizerConfig::default().with_area_stride(1);
    let result = recognize(&stroke, &full_area).unwrap().unwrap();
    assert_eq!(result.label, ShapeLabel::Circle);
}

// ============================================================================
// Sampling asymmetry
// ============================================================================

fn circularity_skew(points: usize) -> f32 {
    let stroke = circle(points, 0.0, 0.0, 100.0);
    let full = RecognizerConfig::default().with_area_stride(1);
    let sparse = RecognizerConfig::default();
    let reference = ShapeMetrics::measure(&stroke, &full).unwrap().0.circularity;
    let downsampled = ShapeMetrics::measure(&stroke, &sparse).unwrap().0.circularity;
    reference - downsampled
}

#[test]
fn area_downsampling_underestimates_circularity() {
    let coarse = circularity_skew(60);
    let medium = circularity_skew(100);
    let fine = circularity_skew(200);
    // a 60 point circle loses ~0.16 of circularity when its area uses every 10th point
    assert!(coarse > 0.1 && coarse < 0.25, "skew {coarse}");
    assert!(medium < coarse);
    assert!(fine < medium);
    assert!(fine < 0.03, "skew {fine}");
}

#[test]
fn matching_strides_remove_the_skew() {
    let stroke = circle(60, 0.0, 0.0, 100.0);
    let skewed = ShapeMetrics::measure(&stroke, &RecognizerConfig::default()).unwrap().0;
    let matched = RecognizerConfig::default().with_perimeter_stride(10);
    let metrics = ShapeMetrics::measure(&stroke, &matched).unwrap().0;
    assert_eq!(metrics.area, skewed.area);
    assert!(metrics.circularity > skewed.circularity + 0.05, "{metrics:?}");
    assert!(metrics.circularity > 0.88, "{metrics:?}");
}

// ============================================================================
// Recognizer and sinks
// ============================================================================

#[test]
fn recognizer_matches_free_function() {
    let config = RecognizerConfig::default().with_epsilon(10.0);
    let recognizer = Recognizer::new(config.clone()).unwrap();
    let stroke = circle(80, 50.0, 50.0, 40.0);
    assert_eq!(recognizer.recognize(&stroke), recognize(&stroke, &config));
    assert_eq!(recognizer.config(), &config);
}

/// Caller-owned corner markers, replaced on every recognized stroke
#[derive(Default)]
struct MarkerLayer {
    markers: Vec<Point>,
    label: String,
}

impl shape_recognizer::RecognitionSink for MarkerLayer {
    fn on_result(&mut self, result: &RecognitionResult) {
        self.markers.clear();
        self.markers.extend_from_slice(&result.corners);
        self.label = result.summary();
    }
}

#[test]
fn sink_replaces_markers_between_strokes() {
    let recognizer = Recognizer::default();
    let mut layer = MarkerLayer::default();

    let square = trace(
        &[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0), (0.0, 0.0)],
        25,
    );
    recognizer.recognize_into(&square, &mut layer).unwrap();
    assert_eq!(layer.markers.len(), 5);
    assert_eq!(layer.label, "Shape: Square");

    let triangle = trace(&[(0.0, 0.0), (200.0, 0.0), (0.0, 200.0), (0.0, 0.0)], 20);
    recognizer.recognize_into(&triangle, &mut layer).unwrap();
    assert_eq!(layer.markers.len(), 4);
    assert_eq!(layer.label, "Shape: Triangle");
}

#[test]
fn stroke_builder_feeds_the_recognizer() {
    let mut stroke = Stroke::with_capacity(100);
    for p in circle(100, 0.0, 0.0, 90.0) {
        stroke.push(p);
    }
    assert_eq!(label_of(stroke.points()), ShapeLabel::Circle);
}

proptest! {
    #[test]
    fn recognition_is_deterministic(
        v in prop::collection::vec((0.0f32..640.0, 0.0f32..480.0), 1..200)
    ) {
        let stroke: Vec<Point> = v.into_iter().map(Point::from).collect();
        let config = RecognizerConfig::default();
        let first = recognize(&stroke, &config);
        let second = recognize(&stroke, &config);
        prop_assert!(first.is_ok());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn corners_are_drawn_from_the_stroke(
        v in prop::collection::vec((0.0f32..640.0, 0.0f32..480.0), 10..200)
    ) {
        let stroke: Vec<Point> = v.into_iter().map(Point::from).collect();
        let result = recognize(&stroke, &RecognizerConfig::default()).unwrap().unwrap();
        prop_assert_eq!(result.corners.len(), result.metrics.corner_count + 1);
        prop_assert!(result.corners.iter().all(|c| stroke.contains(c)));
        prop_assert_eq!(result.corners.first(), stroke.first());
    }
}
