/**
 * Shape recognizer: geometric classification of hand-drawn strokes.
 *
 * Copyright (c) 2024, Ferran Pujol Camins. All rights reserved.
 *
 * This software is distributed under the "New BSD License" agreement:
 *
 * Redistribution and use in source and binary forms, with or without
 * modification, are permitted provided that the following conditions are met:
 *    * Redistributions of source code must retain the above copyright
 *      notice, this list of conditions and the following disclaimer.
 *    * Redistributions in binary form must reproduce the above copyright
 *      notice, this list of conditions and the following disclaimer in the
 *      documentation and/or other materials provided with the distribution.
 *    * Neither the name of the copyright holder nor the names of its
 *      contributors may be used to endorse or promote products derived from
 *      this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS
 * IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO,
 * THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR
 * PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL Ferran Pujol Camins BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT
 * LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY
 * OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF
 * SUCH DAMAGE.
**/

use crate::{
    config::RecognizerConfig,
    error::{RecognitionError, Result},
    geometry,
    point::Point,
    simplify,
};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};
use std::f32::consts::PI;
use tracing::debug;

/// Axis-aligned bounds of a stroke. Width and height are zero for flat strokes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    pub min_x: f32,
    pub min_y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn max_x(&self) -> f32 {
        self.min_x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.min_y + self.height
    }

    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.min_x
            && p.y >= self.min_y
            && p.x - self.min_x <= self.width
            && p.y - self.min_y <= self.height
    }

    /// Width over height, or `None` when either side is zero and the ratio carries no shape information
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.width > 0.0 && self.height > 0.0 {
            Some(self.width / self.height).filter(|r| r.is_finite())
        } else {
            None
        }
    }
}

/// Computes the bounding box of a non-empty set of points
pub fn bounding_box(points: &[Point]) -> Result<BoundingBox> {
    let first = points.first().ok_or(RecognitionError::EmptyStroke)?;
    let (mut min_x, mut min_y) = (first.x, first.y);
    let (mut max_x, mut max_y) = (first.x, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Ok(BoundingBox {
        min_x,
        min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    })
}

/// `4π·area / perimeter²`: 1.0 for a perfect circle, lower for angular or elongated shapes.
/// A zero perimeter yields 0 instead of a division error.
pub fn circularity(area: f32, perimeter: f32) -> f32 {
    if perimeter > 0.0 {
        4.0 * PI * area / (perimeter * perimeter)
    } else {
        0.0
    }
}

/// Vertices that survive polyline simplification, endpoints included.
/// Strokes shorter than `min_points_for_corner_detection` have no corners.
pub fn corner_polyline(points: &[Point], config: &RecognizerConfig) -> Vec<Point> {
    if points.len() < config.min_points_for_corner_detection {
        return Vec::new();
    }
    let simplified = simplify::douglas_peucker(points, config.epsilon);
    debug!(
        corners = corner_count(&simplified),
        vertices = simplified.len(),
        "detected corners using shape simplification"
    );
    simplified
}

/// Number of corners represented by a simplified polyline: its vertex count minus one
pub fn corner_count(polyline: &[Point]) -> usize {
    polyline.len().saturating_sub(1)
}

/// Geometric summary of a single stroke
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShapeMetrics {
    pub bounding_box: BoundingBox,
    /// `None` when the bounding box is flat in either direction
    pub aspect_ratio: Option<f32>,
    pub perimeter: f32,
    pub area: f32,
    pub circularity: f32,
    pub corner_count: usize,
}

impl ShapeMetrics {
    /// Measures a stroke and returns the metrics along with the detected corner positions.
    ///
    /// The perimeter and the area are computed on independently downsampled copies of the stroke,
    /// using `perimeter_stride` and `area_stride` respectively.
    pub fn measure(points: &[Point], config: &RecognizerConfig) -> Result<(ShapeMetrics, Vec<Point>)> {
        let bounding_box = bounding_box(points)?;
        let perimeter = if config.perimeter_stride > 1 {
            geometry::perimeter(&geometry::downsample(points, config.perimeter_stride))?
        } else {
            geometry::perimeter(points)?
        };
        let area = geometry::shoelace_area(&geometry::downsample(points, config.area_stride))?;
        let corners = corner_polyline(points, config);

        let metrics = ShapeMetrics {
            bounding_box,
            aspect_ratio: bounding_box.aspect_ratio(),
            perimeter,
            area,
            circularity: circularity(area, perimeter),
            corner_count: corner_count(&corners),
        };
        Ok((metrics, corners))
    }
}
