// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The kind of pointing device driving the engine.
///
/// Wheel input means different things per device: a mouse wheel zooms, a
/// trackpad two-finger scroll pans. See [`crate::DeviceClassifier`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MouseType {
    /// A wheel mouse. Wheel zooms about the pointer, drag pans.
    #[default]
    Mouse,
    /// A trackpad. Wheel pans, drag is ignored.
    Trackpad,
    /// A touch screen.
    ///
    /// Decided once at construction from the host's pointer capability and
    /// never reclassified afterwards.
    Touchscreen,
}

/// Where the interaction state machine currently sits.
///
/// This is derived from the engine flags; it is reported by
/// [`crate::PanZoom::state`] for inspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// Accepting gestures.
    #[default]
    Idle,
    /// Between pinch start and pinch end. Wheel input is suppressed.
    Pinching,
    /// A transition is running. Gesture pan/zoom is ignored until it ends.
    Bounding,
}
