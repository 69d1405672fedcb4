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
    error::{RecognitionError, Result},
    point::Point,
};

/// Euclidean distance between two points
pub fn distance(a: &Point, b: &Point) -> f32 {
    sqr_distance(a, b).sqrt()
}

/// Squared Euclidean distance between two points
pub fn sqr_distance(a: &Point, b: &Point) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Distance from `p` to the infinite line through `line_start` and `line_end`,
/// computed as twice the area of the triangle they form divided by the base length.
/// When both line points coincide the line is undefined and the point-to-point distance is returned.
pub fn perpendicular_distance(p: &Point, line_start: &Point, line_end: &Point) -> f32 {
    if line_start == line_end {
        return distance(p, line_start);
    }
    let double_area = (line_start.x * (line_end.y - p.y)
        + line_end.x * (p.y - line_start.y)
        + p.x * (line_start.y - line_end.y))
        .abs();
    let base = distance(line_start, line_end);
    double_area / base
}

/// Unsigned polygon area via the shoelace formula.
/// The polygon is implicitly closed from the last point back to the first.
/// Self-intersecting strokes yield a heuristic value rather than a true area.
pub fn shoelace_area(points: &[Point]) -> Result<f32> {
    let Some(last) = points.last() else {
        return Err(RecognitionError::EmptyStroke);
    };
    let mut sum = 0.0;
    let mut prev = last;
    for p in points {
        sum += (prev.x + p.x) * (prev.y - p.y);
        prev = p;
    }
    Ok((sum / 2.0).abs())
}

/// Length of the closed loop through all points, including the segment from the last point back to the first
pub fn perimeter(points: &[Point]) -> Result<f32> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Err(RecognitionError::EmptyStroke);
    };
    let open: f32 = points.windows(2).map(|w| distance(&w[0], &w[1])).sum();
    Ok(open + distance(last, first))
}

/// Keeps every `stride`-th point starting with the first one, and always the last one.
/// A stride of 0 is treated as 1.
pub fn downsample(points: &[Point], stride: usize) -> Vec<Point> {
    let stride = stride.max(1);
    let mut result: Vec<Point> = points.iter().step_by(stride).copied().collect();
    if !points.is_empty() && (points.len() - 1) % stride != 0 {
        result.push(points[points.len() - 1]);
    }
    result
}
