// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// A [`PanZoomConfig`](crate::PanZoomConfig) that cannot drive the engine.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A numeric field is NaN or infinite.
    #[error("`{field}` must be finite")]
    NotFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A zoom factor that must be strictly positive is not.
    #[error("`{field}` must be positive, got {value}")]
    NonPositiveZoom {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The zoom range is empty.
    #[error("`min_zoom` ({min}) is greater than `max_zoom` ({max})")]
    InvertedZoomRange {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// One of the pan bound paddings is negative.
    #[error("pan bound padding must not be negative")]
    NegativePadding,
    /// Wheel and pinch sensitivity is outside `(0, 1)`.
    ///
    /// A strength of one or more would drive zoom to zero or below.
    #[error("`zoom_strength` must be within (0, 1), got {0}")]
    StrengthOutOfRange(f64),
}
