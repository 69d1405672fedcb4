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

use crate::error::{RecognitionError, Result};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};
use tracing::warn;

/// Simplification tolerance, in the units of the stroke (screen pixels by default)
pub const DEFAULT_EPSILON: f32 = 15.0;
/// Every n-th point is used to compute the enclosed area
pub const DEFAULT_AREA_STRIDE: usize = 10;
/// Every n-th point is used to compute the perimeter
pub const DEFAULT_PERIMETER_STRIDE: usize = 1;
/// Strokes with fewer points are not classified
pub const DEFAULT_MIN_POINTS_FOR_CLASSIFICATION: usize = 5;
/// Strokes with fewer points report no corners
pub const DEFAULT_MIN_POINTS_FOR_CORNER_DETECTION: usize = 10;
/// Upper bound on the stroke length, which bounds the quadratic worst case of the simplifier
pub const DEFAULT_MAX_STROKE_POINTS: usize = 10_000;

/// Tunable parameters of the recognizer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RecognizerConfig {
    // Douglas-Peucker tolerance. Scale dependent: tune it to the coordinate space of the strokes.
    pub epsilon: f32,
    pub area_stride: usize,
    // 1 keeps full resolution for the perimeter while the area is downsampled
    pub perimeter_stride: usize,
    pub min_points_for_classification: usize,
    pub min_points_for_corner_detection: usize,
    pub max_stroke_points: usize,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        RecognizerConfig {
            epsilon: DEFAULT_EPSILON,
            area_stride: DEFAULT_AREA_STRIDE,
            perimeter_stride: DEFAULT_PERIMETER_STRIDE,
            min_points_for_classification: DEFAULT_MIN_POINTS_FOR_CLASSIFICATION,
            min_points_for_corner_detection: DEFAULT_MIN_POINTS_FOR_CORNER_DETECTION,
            max_stroke_points: DEFAULT_MAX_STROKE_POINTS,
        }
    }
}

impl RecognizerConfig {
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_area_stride(mut self, stride: usize) -> Self {
        self.area_stride = stride;
        self
    }

    pub fn with_perimeter_stride(mut self, stride: usize) -> Self {
        self.perimeter_stride = stride;
        self
    }

    pub fn with_min_points_for_classification(mut self, min_points: usize) -> Self {
        self.min_points_for_classification = min_points;
        self
    }

    pub fn with_min_points_for_corner_detection(mut self, min_points: usize) -> Self {
        self.min_points_for_corner_detection = min_points;
        self
    }

    pub fn with_max_stroke_points(mut self, max_points: usize) -> Self {
        self.max_stroke_points = max_points;
        self
    }

    /// Checks that every parameter is usable, naming the first offending field otherwise
    pub fn validate(&self) -> Result<()> {
        let problem = if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            Some(format!("epsilon must be a positive number, got {}", self.epsilon))
        } else if self.area_stride == 0 {
            Some("area_stride must be at least 1".to_string())
        } else if self.perimeter_stride == 0 {
            Some("perimeter_stride must be at least 1".to_string())
        } else if self.min_points_for_classification == 0 {
            Some("min_points_for_classification must be at least 1".to_string())
        } else if self.max_stroke_points < self.min_points_for_classification {
            Some(format!(
                "max_stroke_points ({}) is below min_points_for_classification ({})",
                self.max_stroke_points, self.min_points_for_classification
            ))
        } else {
            None
        };

        match problem {
            Some(reason) => {
                warn!(%reason, "rejecting recognizer configuration");
                Err(RecognitionError::InvalidConfig(reason))
            }
            None => Ok(()),
        }
    }
}
