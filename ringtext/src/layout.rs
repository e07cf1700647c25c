// Copyright 2026 the Ringtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The circular layout engine.
//!
//! [`compute_layout`] converts a run of measured glyphs into per-glyph
//! placements on a circle. It is a pure function: no state survives between
//! calls and identical inputs produce identical output, so it can be invoked
//! from any thread and simply re-run whenever text or configuration changes.

use crate::align::{HorizontalAlign, UnitPoint, VerticalAlign};
use core::f64::consts::{PI, TAU};
use peniko::kurbo::{Affine, Point};

/// One measured grapheme cluster, ready for placement.
///
/// Width and height are in device-independent layout units and come from an
/// external measurement source (for example [`crate::measure::GlyphMeasurer`]);
/// the engine never measures text itself.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphSpec {
    /// The cluster's text content, a single user-perceived character.
    pub text: String,
    /// Measured advance width.
    pub width: f64,
    /// Measured height.
    ///
    /// Measurement sources usually report a uniform line height for the whole
    /// run; the engine nonetheless reads each glyph's own height when
    /// computing its baseline radius.
    pub height: f64,
}

impl GlyphSpec {
    /// Create a measured glyph.
    pub fn new(text: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            text: text.into(),
            width,
            height,
        }
    }
}

/// Immutable configuration for one layout pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Radius of the circle the baseline is computed against, typically half
    /// of the shorter side of the target canvas.
    pub radius: f64,
    /// Angle in radians at which the first glyph's leading edge begins.
    pub starting_angle: f64,
    /// Where along each glyph's height the circle baseline passes.
    pub vertical_align: VerticalAlign,
    /// Winding direction. Counter-clockwise layouts are the mirror image of
    /// clockwise ones around the same starting angle.
    pub clockwise: bool,
}

impl LayoutConfig {
    /// A clockwise, center-aligned configuration starting at angle zero.
    pub const fn new(radius: f64) -> Self {
        Self {
            radius,
            starting_angle: 0.0,
            vertical_align: VerticalAlign::Center,
            clockwise: true,
        }
    }
}

/// The computed placement for one glyph.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GlyphPlacement {
    /// Rotation about the circle center, in radians.
    pub rotation: f64,
    /// Anchor point relative to the circle center, before [`rotation`] is
    /// applied. Always `(0, -baseline_radius)` clockwise and
    /// `(0, +baseline_radius)` counter-clockwise.
    ///
    /// [`rotation`]: Self::rotation
    pub anchor: Point,
    /// Which point of the glyph's bounding box sits at [`anchor`].
    ///
    /// [`anchor`]: Self::anchor
    pub anchor_align: UnitPoint,
}

impl GlyphPlacement {
    /// The transform a renderer applies before drawing this glyph.
    ///
    /// Rotates by [`rotation`] about `center`; the glyph's anchor-aligned box
    /// point is then drawn at the local [`anchor`].
    ///
    /// [`rotation`]: Self::rotation
    /// [`anchor`]: Self::anchor
    pub fn transform(&self, center: Point) -> Affine {
        Affine::translate(center.to_vec2()) * Affine::rotate(self.rotation)
    }
}

/// Lay `glyphs` out along the circle described by `config`.
///
/// Returns one placement per glyph, in input order. Glyphs are spaced
/// edge-to-edge along the arc: the running position advances by half the
/// current glyph's width before placement (skipped for the first glyph) and
/// again after it. The first glyph therefore begins exactly at
/// `config.starting_angle`.
///
/// Degenerate baselines (`radius` no larger than the alignment-scaled glyph
/// height) fall back to the winding-adjusted starting angle instead of
/// dividing by zero. Negative widths, heights, or radius are a precondition
/// violation; they produce undefined geometry but never a panic.
pub fn compute_layout(glyphs: &[GlyphSpec], config: &LayoutConfig) -> Vec<GlyphPlacement> {
    let factor = config.vertical_align.factor();
    let winding = if config.clockwise { 1.0 } else { -1.0 };
    let anchor_align = UnitPoint::from_align(HorizontalAlign::Center, config.vertical_align);

    // Arc length travelled so far, in layout units.
    let mut circumference_x = 0.0;
    let mut placements = Vec::with_capacity(glyphs.len());
    for (i, glyph) in glyphs.iter().enumerate() {
        let baseline_radius = config.radius - glyph.height * factor;
        let circumference = TAU * baseline_radius;

        // Center this glyph against the previous one's trailing edge.
        if i > 0 {
            circumference_x += glyph.width * 0.5;
        }

        let normalized = if circumference > 0.0 {
            (circumference_x / circumference) * winding
        } else {
            0.0
        };
        let mut rotation = normalized * TAU + config.starting_angle;
        if !config.clockwise {
            rotation += PI;
        }

        placements.push(GlyphPlacement {
            rotation,
            anchor: Point::new(0.0, baseline_radius * -winding),
            anchor_align,
        });

        // Record this glyph's trailing edge.
        circumference_x += glyph.width * 0.5;
    }
    placements
}

#[cfg(test)]
mod tests {
    use super::{GlyphSpec, LayoutConfig, compute_layout};
    use crate::align::{UnitPoint, VerticalAlign};
    use core::f64::consts::{PI, TAU};
    use peniko::kurbo::Point;

    fn uniform_run(n: usize, width: f64, height: f64) -> Vec<GlyphSpec> {
        (0..n)
            .map(|i| GlyphSpec::new(format!("g{i}"), width, height))
            .collect()
    }

    fn assert_close(actual: f64, expected: f64, what: &str) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "{what}: {actual} != {expected}"
        );
    }

    #[test]
    fn empty_run_yields_empty_output() {
        let config = LayoutConfig::new(50.0);
        assert!(compute_layout(&[], &config).is_empty());
    }

    #[test]
    fn first_glyph_sits_at_starting_angle() {
        let glyphs = uniform_run(1, 12.0, 18.0);
        let config = LayoutConfig {
            starting_angle: 0.75,
            ..LayoutConfig::new(80.0)
        };
        let placements = compute_layout(&glyphs, &config);
        assert_eq!(placements[0].rotation, 0.75);

        let ccw = LayoutConfig {
            clockwise: false,
            ..config
        };
        let placements = compute_layout(&glyphs, &ccw);
        assert_eq!(placements[0].rotation, 0.75 + PI);
    }

    #[test]
    fn winding_mirrors_the_layout() {
        let glyphs = uniform_run(4, 9.0, 16.0);
        let cw = LayoutConfig::new(70.0);
        let ccw = LayoutConfig {
            clockwise: false,
            ..cw
        };
        for (p_cw, p_ccw) in compute_layout(&glyphs, &cw)
            .iter()
            .zip(&compute_layout(&glyphs, &ccw))
        {
            assert_close(p_ccw.anchor.y, -p_cw.anchor.y, "anchor y must be mirrored");
            // Clockwise advances from the starting angle by the same amount
            // counter-clockwise retreats from its 180-degree mirror.
            let cw_advance = p_cw.rotation - cw.starting_angle;
            let ccw_advance = p_ccw.rotation - ccw.starting_angle - PI;
            assert_close(ccw_advance, -cw_advance, "rotation must be mirrored");
        }
    }

    #[test]
    fn rotation_is_monotonic_clockwise() {
        let glyphs = [
            GlyphSpec::new("w", 14.0, 20.0),
            GlyphSpec::new("i", 4.0, 20.0),
            GlyphSpec::new("d", 11.0, 20.0),
            GlyphSpec::new("e", 10.0, 20.0),
        ];
        let placements = compute_layout(&glyphs, &LayoutConfig::new(60.0));
        for pair in placements.windows(2) {
            assert!(
                pair[1].rotation >= pair[0].rotation,
                "rotations must not decrease: {} then {}",
                pair[0].rotation,
                pair[1].rotation
            );
        }
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let glyphs = uniform_run(5, 7.5, 13.0);
        let config = LayoutConfig {
            starting_angle: 1.25,
            vertical_align: VerticalAlign::Bottom,
            ..LayoutConfig::new(42.0)
        };
        assert_eq!(
            compute_layout(&glyphs, &config),
            compute_layout(&glyphs, &config),
            "layout must be a pure function of its inputs"
        );
    }

    #[test]
    fn zero_radius_falls_back_to_starting_angle() {
        let glyphs = uniform_run(3, 10.0, 20.0);
        let config = LayoutConfig {
            radius: 0.0,
            starting_angle: 0.5,
            vertical_align: VerticalAlign::Top,
            clockwise: true,
        };
        for placement in compute_layout(&glyphs, &config) {
            assert_eq!(placement.rotation, 0.5, "no angular advance at radius 0");
            assert_eq!(placement.anchor, Point::new(0.0, 0.0));
            assert!(placement.rotation.is_finite());
        }
    }

    #[test]
    fn negative_baseline_also_avoids_division() {
        // Radius smaller than the alignment-scaled height.
        let glyphs = uniform_run(2, 8.0, 30.0);
        let config = LayoutConfig {
            vertical_align: VerticalAlign::Bottom,
            ..LayoutConfig::new(10.0)
        };
        for placement in compute_layout(&glyphs, &config) {
            assert_eq!(placement.rotation, 0.0);
            assert!(placement.anchor.y.is_finite());
        }
    }

    #[test]
    fn uniform_glyphs_match_reference_geometry() {
        // Three 10x20 glyphs on a radius-100 circle, center-aligned: the
        // baseline radius is 90 and glyph centers sit 10 units apart along
        // the arc, at arc positions 0, 10 and 20.
        let glyphs = uniform_run(3, 10.0, 20.0);
        let config = LayoutConfig::new(100.0);
        let placements = compute_layout(&glyphs, &config);

        assert_eq!(placements[0].rotation, 0.0);
        assert_eq!(placements[0].anchor, Point::new(0.0, -90.0));
        assert_eq!(placements[0].anchor_align, UnitPoint::CENTER);

        // An arc length of s on a radius-90 circle subtends s/90 radians.
        assert_close(placements[1].rotation, 10.0 / 90.0, "second glyph angle");
        assert_close(placements[2].rotation, 20.0 / 90.0, "third glyph angle");
        for placement in &placements {
            assert_eq!(placement.anchor, Point::new(0.0, -90.0));
        }
    }

    #[test]
    fn uneven_widths_advance_by_half_current_width_twice() {
        // The arc position advances by half the *current* glyph's width both
        // before and after placement, so consecutive centers are separated by
        // half the previous width plus half the current width. Widths 2, 10
        // and 4 put the centers at 0, 6 and 13.
        let glyphs = [
            GlyphSpec::new("m", 2.0, 0.0),
            GlyphSpec::new("i", 10.0, 0.0),
            GlyphSpec::new("n", 4.0, 0.0),
        ];
        let config = LayoutConfig {
            vertical_align: VerticalAlign::Top,
            ..LayoutConfig::new(90.0)
        };
        let placements = compute_layout(&glyphs, &config);
        // Height 0 and Top alignment keep the baseline radius at 90, so one
        // layout unit of arc is 1/90 radians.
        assert_close(placements[0].rotation, 0.0, "first center");
        assert_close(placements[1].rotation, 6.0 / 90.0, "second center");
        assert_close(placements[2].rotation, 13.0 / 90.0, "third center");
    }

    #[test]
    fn long_runs_may_pass_a_full_turn() {
        // No wraparound handling: the rotation keeps growing past 2*pi.
        let glyphs = uniform_run(80, 10.0, 0.0);
        let config = LayoutConfig {
            vertical_align: VerticalAlign::Top,
            ..LayoutConfig::new(20.0)
        };
        let placements = compute_layout(&glyphs, &config);
        let last = placements.last().expect("non-empty run");
        assert!(
            last.rotation > TAU,
            "expected rotation past a full turn, got {}",
            last.rotation
        );
    }
}
