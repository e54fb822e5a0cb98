// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration.
//!
//! Configuration is fixed for the lifetime of a [`PanZoom`](crate::PanZoom).
//! Build one from [`PanZoomConfig::default`] and the `with_*` methods:
//!
//! ```
//! use kurbo::Insets;
//! use understory_pan_zoom::PanZoomConfig;
//!
//! let config = PanZoomConfig::default()
//!     .with_zoom_limits(0.25, 4.0)
//!     .with_pan_bound_padding(Insets::uniform(128.0));
//! assert!(config.validate().is_ok());
//! ```

use kurbo::{Insets, Vec2};

use crate::error::ConfigError;
use crate::modes::MouseType;

/// Recognized engine options.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanZoomConfig {
    /// Skip device classification and always use this type.
    pub force_mouse_type: Option<MouseType>,
    /// Zoom at mount and the target of [`reset_zoom`](crate::PanZoom::reset_zoom).
    pub initial_zoom: f64,
    /// Pan at mount and the target of [`reset_pan`](crate::PanZoom::reset_pan).
    ///
    /// `None` behaves as zero and allows centering on mount.
    pub initial_pan: Option<Vec2>,
    /// Keep content within [`pan_bound_padding`](Self::pan_bound_padding) of
    /// the container edges.
    pub is_pan_bounded: bool,
    /// Unscaled insets reserved around the content.
    pub pan_bound_padding: Insets,
    /// Milliseconds of quiet before an out-of-bounds zoom snaps back.
    pub pan_bound_delay: u64,
    /// Center undersized content once, during the mount pass.
    pub center_on_mount: bool,
    /// Milliseconds between mount and the first bounds pass.
    pub center_on_mount_delay: u64,
    /// Clamp zoom into `[min_zoom, max_zoom]`.
    pub is_zoom_bounded: bool,
    /// Smallest zoom factor.
    pub min_zoom: f64,
    /// Largest zoom factor.
    pub max_zoom: f64,
    /// Relative zoom change per wheel notch or pinch update.
    pub zoom_strength: f64,
    /// Length of a snap-back or imperative pan transition, in milliseconds.
    pub transition_duration: u64,
}

impl Default for PanZoomConfig {
    fn default() -> Self {
        Self {
            force_mouse_type: None,
            initial_zoom: 1.0,
            initial_pan: None,
            is_pan_bounded: true,
            pan_bound_padding: Insets::ZERO,
            pan_bound_delay: 300,
            center_on_mount: true,
            center_on_mount_delay: 16,
            is_zoom_bounded: true,
            min_zoom: 0.5,
            max_zoom: 2.0,
            zoom_strength: 0.05,
            transition_duration: 300,
        }
    }
}

impl PanZoomConfig {
    /// Sets [`force_mouse_type`](Self::force_mouse_type).
    #[must_use]
    pub fn with_force_mouse_type(mut self, mouse_type: MouseType) -> Self {
        self.force_mouse_type = Some(mouse_type);
        self
    }

    /// Sets [`initial_zoom`](Self::initial_zoom).
    #[must_use]
    pub fn with_initial_zoom(mut self, zoom: f64) -> Self {
        self.initial_zoom = zoom;
        self
    }

    /// Sets [`initial_pan`](Self::initial_pan).
    #[must_use]
    pub fn with_initial_pan(mut self, pan: Vec2) -> Self {
        self.initial_pan = Some(pan);
        self
    }

    /// Sets [`is_pan_bounded`](Self::is_pan_bounded).
    #[must_use]
    pub fn with_pan_bounded(mut self, bounded: bool) -> Self {
        self.is_pan_bounded = bounded;
        self
    }

    /// Sets [`pan_bound_padding`](Self::pan_bound_padding).
    #[must_use]
    pub fn with_pan_bound_padding(mut self, padding: Insets) -> Self {
        self.pan_bound_padding = padding;
        self
    }

    /// Sets [`pan_bound_delay`](Self::pan_bound_delay).
    #[must_use]
    pub fn with_pan_bound_delay(mut self, ms: u64) -> Self {
        self.pan_bound_delay = ms;
        self
    }

    /// Sets [`center_on_mount`](Self::center_on_mount).
    #[must_use]
    pub fn with_center_on_mount(mut self, center: bool) -> Self {
        self.center_on_mount = center;
        self
    }

    /// Sets [`center_on_mount_delay`](Self::center_on_mount_delay).
    #[must_use]
    pub fn with_center_on_mount_delay(mut self, ms: u64) -> Self {
        self.center_on_mount_delay = ms;
        self
    }

    /// Sets [`is_zoom_bounded`](Self::is_zoom_bounded).
    #[must_use]
    pub fn with_zoom_bounded(mut self, bounded: bool) -> Self {
        self.is_zoom_bounded = bounded;
        self
    }

    /// Sets both zoom limits.
    #[must_use]
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    /// Sets [`zoom_strength`](Self::zoom_strength).
    #[must_use]
    pub fn with_zoom_strength(mut self, strength: f64) -> Self {
        self.zoom_strength = strength;
        self
    }

    /// Sets [`transition_duration`](Self::transition_duration).
    #[must_use]
    pub fn with_transition_duration(mut self, ms: u64) -> Self {
        self.transition_duration = ms;
        self
    }

    /// The pan [`reset_pan`](crate::PanZoom::reset_pan) returns to.
    #[must_use]
    pub fn initial_pan_or_zero(&self) -> Vec2 {
        self.initial_pan.unwrap_or(Vec2::ZERO)
    }

    /// Clamps `zoom` into the configured range when zoom is bounded.
    ///
    /// # Panics
    ///
    /// Panics if the zoom limits are inverted or NaN, which
    /// [`validate`](Self::validate) rejects.
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        if self.is_zoom_bounded {
            zoom.clamp(self.min_zoom, self.max_zoom)
        } else {
            zoom
        }
    }

    /// Checks that the configuration describes a usable engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("initial_zoom", self.initial_zoom),
            ("min_zoom", self.min_zoom),
            ("max_zoom", self.max_zoom),
            ("zoom_strength", self.zoom_strength),
            ("pan_bound_padding", self.pan_bound_padding.x0),
            ("pan_bound_padding", self.pan_bound_padding.y0),
            ("pan_bound_padding", self.pan_bound_padding.x1),
            ("pan_bound_padding", self.pan_bound_padding.y1),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
        }
        if let Some(pan) = self.initial_pan {
            if !pan.is_finite() {
                return Err(ConfigError::NotFinite {
                    field: "initial_pan",
                });
            }
        }

        for (field, value) in [
            ("initial_zoom", self.initial_zoom),
            ("min_zoom", self.min_zoom),
            ("max_zoom", self.max_zoom),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveZoom { field, value });
            }
        }
        if self.min_zoom > self.max_zoom {
            return Err(ConfigError::InvertedZoomRange {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }

        let p = self.pan_bound_padding;
        if p.x0 < 0.0 || p.y0 < 0.0 || p.x1 < 0.0 || p.y1 < 0.0 {
            return Err(ConfigError::NegativePadding);
        }

        if self.zoom_strength <= 0.0 || self.zoom_strength >= 1.0 {
            return Err(ConfigError::StrengthOutOfRange(self.zoom_strength));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Insets, Vec2};

    use super::PanZoomConfig;
    use crate::error::ConfigError;

    #[test]
    fn defaults_are_valid() {
        let config = PanZoomConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.initial_pan_or_zero(), Vec2::ZERO);
        assert_eq!(config.pan_bound_delay, 300);
    }

    #[test]
    fn rejects_inverted_zoom_range() {
        let config = PanZoomConfig::default().with_zoom_limits(3.0, 1.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedZoomRange { min: 3.0, max: 1.0 })
        );
    }

    #[test]
    fn rejects_bad_zoom_and_padding() {
        let config = PanZoomConfig::default().with_initial_zoom(0.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveZoom {
                field: "initial_zoom",
                ..
            })
        ));

        let config = PanZoomConfig::default().with_pan_bound_padding(Insets::new(0.0, -1.0, 0.0, 0.0));
        assert_eq!(config.validate(), Err(ConfigError::NegativePadding));

        let config = PanZoomConfig::default().with_initial_pan(Vec2::new(f64::NAN, 0.0));
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotFinite {
                field: "initial_pan"
            })
        );

        let config = PanZoomConfig::default().with_zoom_strength(1.0);
        assert_eq!(config.validate(), Err(ConfigError::StrengthOutOfRange(1.0)));
    }

    #[test]
    fn clamp_zoom_respects_flag() {
        let bounded = PanZoomConfig::default().with_zoom_limits(0.5, 2.0);
        assert_eq!(bounded.clamp_zoom(5.0), 2.0);
        assert_eq!(bounded.clamp_zoom(0.1), 0.5);
        assert_eq!(bounded.with_zoom_bounded(false).clamp_zoom(5.0), 5.0);
    }
}
