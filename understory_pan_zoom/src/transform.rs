// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Affine, Point, Vec2};

/// Translation plus uniform scale applied to the content.
///
/// The content's top-left corner is drawn at `pan` (view pixels) and then
/// scaled by `zoom` about that corner.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    /// Offset of the content's top-left corner inside the container.
    pub pan: Vec2,
    /// Uniform scale factor, always positive.
    pub zoom: f64,
}

impl Transform {
    /// The untransformed state.
    pub const IDENTITY: Self = Self {
        pan: Vec2::ZERO,
        zoom: 1.0,
    };

    /// Creates a transform.
    #[must_use]
    pub fn new(pan: Vec2, zoom: f64) -> Self {
        Self { pan, zoom }
    }

    /// Content-to-view affine: `translate(pan) * scale(zoom)`.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.zoom)
    }

    /// Maps a content-local point into container coordinates.
    #[must_use]
    pub fn content_to_view(&self, pt: Point) -> Point {
        (self.pan + pt.to_vec2() * self.zoom).to_point()
    }

    /// Maps a container point back into content-local coordinates.
    #[must_use]
    pub fn view_to_content(&self, pt: Point) -> Point {
        ((pt.to_vec2() - self.pan) / self.zoom).to_point()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Formats as a CSS transform, `translate(Xpx, Ypx) scale(Z)`.
impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}px, {}px) scale({})",
            self.pan.x, self.pan.y, self.zoom
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use kurbo::{Point, Vec2};

    use super::Transform;

    #[test]
    fn affine_matches_point_mapping() {
        let t = Transform::new(Vec2::new(-100.0, 25.0), 2.0);
        let p = Point::new(40.0, 10.0);
        assert_eq!(t.to_affine() * p, t.content_to_view(p));
        assert_eq!(t.view_to_content(t.content_to_view(p)), p);
    }

    #[test]
    fn css_string() {
        let t = Transform::new(Vec2::new(200.0, 150.5), 1.25);
        assert_eq!(t.to_string(), "translate(200px, 150.5px) scale(1.25)");
        assert_eq!(Transform::default().to_string(), "translate(0px, 0px) scale(1)");
    }
}
