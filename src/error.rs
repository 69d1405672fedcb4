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

use thiserror::Error;

/// Errors surfaced to the caller of the recognizer.
///
/// Degenerate geometry (flat strokes, zero perimeter, coincident endpoints)
/// is never an error: it falls back to defined values and classification
/// still terminates with a label.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RecognitionError {
    #[error("stroke has no points")]
    EmptyStroke,

    #[error("invalid recognizer configuration: {0}")]
    InvalidConfig(String),

    #[error("stroke has {len} points, more than the configured maximum of {max}")]
    StrokeTooLong { len: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, RecognitionError>;
