//! Classifies a single freehand stroke as a triangle, square, rectangle or circle
//! using geometric heuristics only: no templates and no training data.
//!
//! The stroke is measured (bounding box, perimeter, shoelace area, circularity),
//! simplified with Douglas-Peucker to count its corners, and the measurements are
//! mapped to a [`ShapeLabel`] by a fixed rule list.
//!
//! ```
//! use shape_recognizer::{recognize, Point, RecognizerConfig, ShapeLabel};
//!
//! let mut stroke = Vec::new();
//! for i in 0..100 {
//!     let a = i as f32 / 100.0 * std::f32::consts::TAU;
//!     stroke.push(Point::new(200.0 + 80.0 * a.cos(), 200.0 + 80.0 * a.sin()));
//! }
//! let result = recognize(&stroke, &RecognizerConfig::default())?.expect("long enough");
//! assert_eq!(result.label, ShapeLabel::Circle);
//! # Ok::<(), shape_recognizer::RecognitionError>(())
//! ```

#![forbid(unsafe_code)]

pub mod classifier;
pub mod config;
pub mod error;
pub mod geometry;
pub mod metrics;
pub mod point;
pub mod recognizer;
pub mod simplify;
pub mod stroke;

pub use classifier::{classify, ShapeLabel};
pub use config::RecognizerConfig;
pub use error::RecognitionError;
pub use metrics::{BoundingBox, ShapeMetrics};
pub use point::Point;
pub use recognizer::{recognize, RecognitionResult, RecognitionSink, Recognizer};
pub use stroke::Stroke;
