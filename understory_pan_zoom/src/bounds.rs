// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rectangle of valid pan offsets.
//!
//! Pan is measured in view pixels: the content's top-left corner sits at `pan`
//! inside the container. Per axis, the two edges are
//!
//! - `near = padding.near * zoom`
//! - `far = container - content * zoom - padding.far * zoom`
//!
//! When content is larger than the container `far < near`, otherwise the
//! order flips. Clamping does not care, see [`clamp_point`].

use kurbo::{Insets, Rect, Size, Vec2};

use crate::element::ViewportMetrics;
use crate::geometry::clamp_point;

bitflags::bitflags! {
    /// A set of axes.
    ///
    /// Used to track which axes still owe their one-time centering pass.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Axes: u8 {
        /// The horizontal axis.
        const X = 0b0000_0001;
        /// The vertical axis.
        const Y = 0b0000_0010;
    }
}

/// Result of [`PanBounds::bound`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundedPan {
    /// The clamped, and possibly centered, pan.
    pub pan: Vec2,
    /// Axes on which centering was applied by this call.
    pub centered: Axes,
}

/// Pan limits for one zoom level and one set of measurements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanBounds {
    near: Vec2,
    far: Vec2,
    container: Size,
    rendered: Size,
}

impl PanBounds {
    /// Computes the limits at `zoom`.
    #[must_use]
    pub fn new(zoom: f64, metrics: &ViewportMetrics, padding: Insets) -> Self {
        let container = metrics.container_size();
        let rendered = metrics.content * zoom;
        let near = Vec2::new(padding.x0 * zoom, padding.y0 * zoom);
        let far = Vec2::new(
            -padding.x1 * zoom + container.width - rendered.width,
            -padding.y1 * zoom + container.height - rendered.height,
        );
        Self {
            near,
            far,
            container,
            rendered,
        }
    }

    /// The left/top edge: where the content's leading corner rests.
    #[must_use]
    pub fn near(&self) -> Vec2 {
        self.near
    }

    /// The right/bottom edge.
    #[must_use]
    pub fn far(&self) -> Vec2 {
        self.far
    }

    /// The valid pan rectangle with ordered corners.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_points(self.near.to_point(), self.far.to_point())
    }

    /// Clamps `pan` into the valid rectangle.
    #[must_use]
    pub fn clamp(&self, pan: Vec2) -> Vec2 {
        clamp_point(pan, self.near, self.far)
    }

    /// Clamps `candidate`, then centers undersized content on the axes in
    /// `center`.
    ///
    /// An axis is centered only when it came to rest exactly on the near edge
    /// and the rendered content is smaller than the container on that axis.
    /// Callers remove [`BoundedPan::centered`] from their pending set so that
    /// centering happens once.
    #[must_use]
    pub fn bound(&self, candidate: Vec2, center: Axes) -> BoundedPan {
        let mut pan = self.clamp(candidate);
        let mut centered = Axes::empty();

        if center.contains(Axes::X)
            && pan.x == self.near.x
            && self.rendered.width < self.container.width
        {
            pan.x += (self.container.width - self.rendered.width) / 2.0 - self.near.x;
            centered |= Axes::X;
        }
        if center.contains(Axes::Y)
            && pan.y == self.near.y
            && self.rendered.height < self.container.height
        {
            pan.y += (self.container.height - self.rendered.height) / 2.0 - self.near.y;
            centered |= Axes::Y;
        }

        BoundedPan { pan, centered }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Insets, Rect, Size, Vec2};

    use super::{Axes, PanBounds};
    use crate::element::ViewportMetrics;

    fn metrics(container: (f64, f64), content: (f64, f64)) -> ViewportMetrics {
        ViewportMetrics::new(Size::from(container), Size::from(content))
    }

    #[test]
    fn exact_fit_stays_at_origin() {
        let b = PanBounds::new(1.0, &metrics((800.0, 600.0), (800.0, 600.0)), Insets::ZERO);
        let out = b.bound(Vec2::ZERO, Axes::all());
        assert_eq!(out.pan, Vec2::ZERO);
        assert_eq!(out.centered, Axes::empty());
    }

    #[test]
    fn undersized_content_is_centered() {
        let b = PanBounds::new(1.0, &metrics((800.0, 600.0), (400.0, 300.0)), Insets::ZERO);
        let out = b.bound(Vec2::ZERO, Axes::all());
        assert_eq!(out.pan, Vec2::new(200.0, 150.0));
        assert_eq!(out.centered, Axes::all());
    }

    #[test]
    fn centering_only_on_requested_axes() {
        let b = PanBounds::new(1.0, &metrics((800.0, 600.0), (400.0, 300.0)), Insets::ZERO);
        let out = b.bound(Vec2::ZERO, Axes::Y);
        assert_eq!(out.pan, Vec2::new(0.0, 150.0));
        assert_eq!(out.centered, Axes::Y);

        let out = b.bound(Vec2::ZERO, Axes::empty());
        assert_eq!(out.pan, Vec2::ZERO);
    }

    #[test]
    fn centering_requires_resting_on_near_edge() {
        let b = PanBounds::new(1.0, &metrics((800.0, 600.0), (400.0, 300.0)), Insets::ZERO);
        let out = b.bound(Vec2::new(50.0, 0.0), Axes::all());
        assert_eq!(out.pan, Vec2::new(50.0, 150.0));
        assert_eq!(out.centered, Axes::Y);
    }

    #[test]
    fn oversized_content_clamps_between_flipped_edges() {
        // Content 2000 wide in an 800 container at zoom 1: pan in [-1200, 0].
        let b = PanBounds::new(1.0, &metrics((800.0, 600.0), (2000.0, 600.0)), Insets::ZERO);
        assert_eq!(b.far(), Vec2::new(-1200.0, 0.0));
        assert_eq!(b.rect(), Rect::new(-1200.0, 0.0, 0.0, 0.0));
        assert_eq!(b.clamp(Vec2::new(-5000.0, 10.0)), Vec2::new(-1200.0, 0.0));
        assert_eq!(b.clamp(Vec2::new(300.0, 0.0)), Vec2::ZERO);
        assert_eq!(b.clamp(Vec2::new(-600.0, 0.0)), Vec2::new(-600.0, 0.0));
    }

    #[test]
    fn padding_scales_with_zoom() {
        let padding = Insets::new(10.0, 20.0, 30.0, 40.0);
        let b = PanBounds::new(2.0, &metrics((800.0, 600.0), (1000.0, 1000.0)), padding);
        assert_eq!(b.near(), Vec2::new(20.0, 40.0));
        assert_eq!(b.far(), Vec2::new(-60.0 + 800.0 - 2000.0, -80.0 + 600.0 - 2000.0));
    }

    #[test]
    fn unmeasured_layout_collapses_to_padding() {
        let b = PanBounds::new(1.5, &ViewportMetrics::default(), Insets::ZERO);
        assert_eq!(b.clamp(Vec2::new(42.0, -42.0)), Vec2::ZERO);
        // Nothing to center when nothing is measured.
        assert_eq!(b.bound(Vec2::ZERO, Axes::all()).centered, Axes::empty());
    }
}
