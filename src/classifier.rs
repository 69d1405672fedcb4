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

use crate::metrics::ShapeMetrics;
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Below this circularity a shape with 2 to 4 corners is taken as a triangle
const TRIANGLE_MAX_CIRCULARITY: f32 = 0.6;
/// Above this circularity a shape without a polygonal corner count is taken as a circle
const CIRCLE_MIN_CIRCULARITY: f32 = 0.7;
/// Open interval of aspect ratios considered square
const SQUARE_ASPECT_RATIO: (f32, f32) = (0.8, 1.2);

/// Shapes the recognizer can tell apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShapeLabel {
    Triangle,
    Square,
    Rectangle,
    Circle,
    Unknown,
}

impl ShapeLabel {
    pub const ALL: [ShapeLabel; 5] = [
        ShapeLabel::Triangle,
        ShapeLabel::Square,
        ShapeLabel::Rectangle,
        ShapeLabel::Circle,
        ShapeLabel::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeLabel::Triangle => "Triangle",
            ShapeLabel::Square => "Square",
            ShapeLabel::Rectangle => "Rectangle",
            ShapeLabel::Circle => "Circle",
            ShapeLabel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ShapeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeLabel::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown shape label '{s}'"))
    }
}

/// Maps the metrics of a stroke to a label. Rules are evaluated in order and the first match wins:
/// 1. exactly 3 corners, or 2 to 4 corners with low circularity: triangle
/// 2. 3 to 5 corners: square when the bounding box is roughly as wide as tall, rectangle otherwise.
///    Flat bounding boxes never match this rule.
/// 3. high circularity: circle
/// 4. anything else is unknown
pub fn classify(metrics: &ShapeMetrics) -> ShapeLabel {
    let corners = metrics.corner_count;

    if corners == 3 || ((2..=4).contains(&corners) && metrics.circularity < TRIANGLE_MAX_CIRCULARITY) {
        return ShapeLabel::Triangle;
    }

    if corners == 4 || (3..=5).contains(&corners) {
        if let Some(ratio) = metrics.aspect_ratio {
            let (low, high) = SQUARE_ASPECT_RATIO;
            return if ratio > low && ratio < high {
                ShapeLabel::Square
            } else {
                ShapeLabel::Rectangle
            };
        }
    }

    if metrics.circularity > CIRCLE_MIN_CIRCULARITY {
        return ShapeLabel::Circle;
    }

    ShapeLabel::Unknown
}
