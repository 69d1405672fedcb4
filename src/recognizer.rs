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
    classifier::{self, ShapeLabel},
    config::RecognizerConfig,
    error::{RecognitionError, Result},
    metrics::ShapeMetrics,
    point::Point,
};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};
use tracing::{debug, info};

/// Outcome of recognizing one stroke
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecognitionResult {
    pub label: ShapeLabel,
    pub metrics: ShapeMetrics,
    /// Vertices retained by the simplifier, for drawing corner markers
    pub corners: Vec<Point>,
}

impl RecognitionResult {
    /// One-line status text for display, e.g. `Shape: Square`
    pub fn summary(&self) -> String {
        format!("Shape: {}", self.label)
    }
}

/// Receives the outcome of each recognized stroke.
/// This is where callers clear the markers of the previous stroke, place new ones and update their labels.
pub trait RecognitionSink {
    fn on_result(&mut self, result: &RecognitionResult);

    /// Called instead of `on_result` when the stroke was too short to classify
    fn on_skipped(&mut self, _points: usize) {}
}

impl<F: FnMut(&RecognitionResult)> RecognitionSink for F {
    fn on_result(&mut self, result: &RecognitionResult) {
        self(result)
    }
}

/// Classifies a finished stroke.
///
/// Returns `Ok(None)` when the stroke has fewer than `min_points_for_classification` points:
/// there is nothing to classify, which is not an error. Empty strokes, strokes above
/// `max_stroke_points` and invalid configurations are rejected.
pub fn recognize(points: &[Point], config: &RecognizerConfig) -> Result<Option<RecognitionResult>> {
    config.validate()?;
    recognize_unchecked(points, config)
}

fn recognize_unchecked(points: &[Point], config: &RecognizerConfig) -> Result<Option<RecognitionResult>> {
    if points.is_empty() {
        return Err(RecognitionError::EmptyStroke);
    }
    if points.len() > config.max_stroke_points {
        return Err(RecognitionError::StrokeTooLong {
            len: points.len(),
            max: config.max_stroke_points,
        });
    }
    if points.len() < config.min_points_for_classification {
        debug!(
            points = points.len(),
            required = config.min_points_for_classification,
            "stroke too short to classify"
        );
        return Ok(None);
    }

    let (metrics, corners) = ShapeMetrics::measure(points, config)?;
    let label = classifier::classify(&metrics);
    info!(
        shape = %label,
        corners = metrics.corner_count,
        circularity = metrics.circularity,
        "recognized shape"
    );

    Ok(Some(RecognitionResult {
        label,
        metrics,
        corners,
    }))
}

/// A recognizer bound to a configuration that was validated once, up front.
#[derive(Debug, Clone, Default)]
pub struct Recognizer {
    config: RecognizerConfig,
}

impl Recognizer {
    pub fn new(config: RecognizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    pub fn recognize(&self, points: &[Point]) -> Result<Option<RecognitionResult>> {
        recognize_unchecked(points, &self.config)
    }

    /// Recognizes a stroke and hands the outcome to `sink`. The result is also returned to the caller.
    pub fn recognize_into<S: RecognitionSink + ?Sized>(
        &self,
        points: &[Point],
        sink: &mut S,
    ) -> Result<Option<RecognitionResult>> {
        let result = self.recognize(points)?;
        match &result {
            Some(r) => sink.on_result(r),
            None => sink.on_skipped(points.len()),
        }
        Ok(result)
    }
}
