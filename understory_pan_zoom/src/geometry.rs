// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateless geometry helpers shared by the bounds and zoom code.

use kurbo::{Point, Vec2};

/// Clamps `value` into the axis-aligned box spanned by `a` and `b`.
///
/// Each axis is clamped independently into `[min(a, b), max(a, b)]`, so the
/// two corners may be passed in either order. Computed pan edges flip sign
/// when content is larger than the container, which is why the ordering is
/// not assumed.
#[must_use]
pub fn clamp_point(value: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(clamp_axis(value.x, a.x, b.x), clamp_axis(value.y, a.y, b.y))
}

/// Clamps a scalar into `[min(a, b), max(a, b)]`.
#[must_use]
pub fn clamp_axis(value: f64, a: f64, b: f64) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    value.max(lo).min(hi)
}

/// Returns the pan that keeps the content-local `origin` fixed on screen when
/// zoom changes from `old_zoom` to `new_zoom`.
///
/// This is `pan - origin * (new_zoom - old_zoom)` on each axis.
#[must_use]
pub fn zoom_adjusted_pan(pan: Vec2, origin: Point, old_zoom: f64, new_zoom: f64) -> Vec2 {
    pan - origin.to_vec2() * (new_zoom - old_zoom)
}

/// Sign of `v` as `-1.0`, `0.0` or `1.0`.
///
/// Unlike [`f64::signum`], zero (of either sign) maps to `0.0`, so a zero
/// wheel or pinch delta leaves zoom untouched.
#[must_use]
pub fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{clamp_point, sign, zoom_adjusted_pan};

    const SAMPLES: [f64; 7] = [-1000.0, -12.5, -1.0, 0.0, 0.5, 37.0, 4096.0];

    #[test]
    fn clamp_is_idempotent() {
        let a = Vec2::new(-50.0, 20.0);
        let b = Vec2::new(30.0, -80.0);
        for &x in &SAMPLES {
            for &y in &SAMPLES {
                let once = clamp_point(Vec2::new(x, y), a, b);
                let twice = clamp_point(once, a, b);
                assert_eq!(once, twice, "clamp should be idempotent for ({x}, {y})");
            }
        }
    }

    #[test]
    fn clamp_ignores_bound_ordering() {
        for &x in &SAMPLES {
            for &lo in &SAMPLES {
                for &hi in &SAMPLES {
                    let p = Vec2::new(x, -x);
                    let a = Vec2::new(lo, hi);
                    let b = Vec2::new(hi, lo);
                    assert_eq!(
                        clamp_point(p, a, b),
                        clamp_point(p, b, a),
                        "ordering of ({lo}, {hi}) must not matter"
                    );
                }
            }
        }
    }

    #[test]
    fn clamp_collapsed_range_pins_value() {
        let edge = Vec2::new(4.0, -4.0);
        assert_eq!(clamp_point(Vec2::new(100.0, 100.0), edge, edge), edge);
    }

    #[test]
    fn zoom_about_point_keeps_origin_on_screen() {
        let origins = [Point::new(0.0, 0.0), Point::new(100.0, 50.0), Point::new(-30.0, 812.5)];
        let zooms = [0.25, 0.5, 1.0, 1.05, 3.0];
        let pan = Vec2::new(-40.0, 12.0);
        for origin in origins {
            for &old in &zooms {
                for &new in &zooms {
                    let next = zoom_adjusted_pan(pan, origin, old, new);
                    let before = pan + origin.to_vec2() * old;
                    let after = next + origin.to_vec2() * new;
                    assert!(
                        (before - after).hypot() < 1e-9,
                        "origin {origin:?} moved on screen for {old} -> {new}"
                    );
                }
            }
        }
    }

    #[test]
    fn zoom_to_double_about_cursor() {
        let pan = zoom_adjusted_pan(Vec2::ZERO, Point::new(100.0, 50.0), 1.0, 2.0);
        assert_eq!(pan, Vec2::new(-100.0, -50.0));
    }

    #[test]
    fn sign_of_zero_is_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
        assert_eq!(sign(3.5), 1.0);
        assert_eq!(sign(-0.1), -1.0);
    }
}
