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

use crate::{geometry, point::Point};

/// Reduces a dense stroke to its dominant vertices with the Douglas-Peucker algorithm.
///
/// The point farthest from the line through the ends of a range is kept when its perpendicular
/// distance exceeds `epsilon`, and both halves are processed the same way; otherwise the range
/// collapses to its two endpoints. The first and last points are always part of the output,
/// which preserves the input order. Inputs with fewer than two points are returned unchanged.
///
/// `epsilon` is expressed in the units of the stroke, so it has to be tuned to the coordinate
/// space the stroke was recorded in.
pub fn douglas_peucker(points: &[Point], epsilon: f32) -> Vec<Point> {
    if points.len() < 2 {
        return points.to_vec();
    }
    simplified_indices(points, epsilon)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Indices into `points` of the vertices retained by [`douglas_peucker`], in ascending order.
pub fn simplified_indices(points: &[Point], epsilon: f32) -> Vec<usize> {
    let n = points.len();
    if n < 2 {
        return (0..n).collect();
    }

    let mut kept = vec![false; n];
    kept[0] = true;
    kept[n - 1] = true;

    // explicit stack of (start, end) ranges, so adversarial input cannot exhaust the call stack
    let mut ranges = vec![(0, n - 1)];
    while let Some((start, end)) = ranges.pop() {
        if end <= start + 1 {
            continue;
        }
        let (max_dist, max_idx) = farthest_point(points, start, end);
        if max_dist > epsilon && max_idx > start {
            kept[max_idx] = true;
            ranges.push((max_idx, end));
            ranges.push((start, max_idx));
        }
    }

    kept.iter()
        .enumerate()
        .filter_map(|(i, &k)| k.then_some(i))
        .collect()
}

/// Finds the interior point of `start..=end` farthest from the line through both ends.
/// Ties keep the earliest point.
fn farthest_point(points: &[Point], start: usize, end: usize) -> (f32, usize) {
    let mut max_dist = 0.0;
    let mut max_idx = start;
    for i in (start + 1)..end {
        let d = geometry::perpendicular_distance(&points[i], &points[start], &points[end]);
        if d > max_dist {
            max_dist = d;
            max_idx = i;
        }
    }
    (max_dist, max_idx)
}
