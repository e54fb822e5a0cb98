// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized gesture records.
//!
//! Pointer capture and gesture recognition live outside this crate. Hosts
//! translate their native drag, wheel and pinch input into these records and
//! feed them to [`PanZoom`](crate::PanZoom).

use kurbo::{Point, Vec2};

/// A drag step: pointer movement since the previous drag event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEvent {
    /// Pointer movement in view pixels.
    pub delta: Vec2,
}

impl DragEvent {
    /// Creates a drag step from a pointer movement.
    #[must_use]
    pub fn new(delta: Vec2) -> Self {
        Self { delta }
    }
}

/// Units of the raw wheel deltas reported by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeltaMode {
    /// Pixel-precise deltas, typical of trackpads.
    #[default]
    Pixel,
    /// Line deltas, typical of notched mouse wheels.
    Line,
    /// Page deltas.
    Page,
}

/// The platform wheel fields the device classifier looks at.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RawWheel {
    /// Normalized vertical delta.
    pub delta_y: f64,
    /// Legacy hardware wheel delta, when the platform reports one.
    pub wheel_delta_y: Option<f64>,
    /// Unit of `delta_y`.
    pub delta_mode: DeltaMode,
}

/// A wheel step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    /// Scroll delta in view pixels.
    pub delta: Vec2,
    /// Pointer position in client coordinates.
    pub client: Point,
    /// Raw platform fields used for device classification.
    pub raw: RawWheel,
}

impl WheelEvent {
    /// Creates a wheel step whose raw fields mirror `delta` in pixel mode.
    #[must_use]
    pub fn new(delta: Vec2, client: Point) -> Self {
        Self {
            delta,
            client,
            raw: RawWheel {
                delta_y: delta.y,
                wheel_delta_y: None,
                delta_mode: DeltaMode::Pixel,
            },
        }
    }

    /// Replaces the raw platform fields.
    #[must_use]
    pub fn with_raw(mut self, raw: RawWheel) -> Self {
        self.raw = raw;
        self
    }
}

/// A pinch update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchEvent {
    /// Sign of the pinch motion: positive while the fingers spread apart.
    pub direction: f64,
    /// Accumulated distance the pinch has covered.
    pub distance: f64,
    /// Midpoint between the touches, in client coordinates.
    pub origin: Point,
}
