// Copyright 2026 the Ringtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning laid-out runs into drawable glyph outlines.

use crate::align::UnitPoint;
use crate::layout::{self, GlyphPlacement, GlyphSpec, LayoutConfig};
use crate::measure::{GlyphMeasurer, MeasureError};
use peniko::FontData as Font;
use peniko::kurbo::{Affine, BezPath, Circle, Point, Rect, Vec2};
use skrifa::MetadataProvider;
use skrifa::instance::LocationRef;
use skrifa::outline::{DrawSettings, OutlinePen};

/// Diameter of the anchor markers in the debug overlay.
const ANCHOR_MARKER_DIAMETER: f64 = 6.0;

/// A string laid out along a circle, bound to a font.
///
/// This is the thin adapter between the pure layout engine and an
/// immediate-mode renderer: every call measures, lays out and outlines the
/// whole run from scratch, so there is no cache to invalidate when text or
/// configuration changes.
#[derive(Clone, Debug)]
pub struct ArcTextRun {
    /// Font for every glyph in the run.
    pub font: Font,
    /// Font size in pixels per em.
    pub font_size: f32,
    /// Center of the circle, in the renderer's coordinates.
    pub center: Point,
    /// Layout parameters.
    pub config: LayoutConfig,
}

/// One glyph outline with the transform that positions it on the circle.
///
/// The path is in a y-down frame with the glyph's left edge at x 0 and its
/// baseline at y 0; a renderer applies `transform` and fills `path`.
#[derive(Clone, Debug)]
pub struct PlacedOutline {
    /// The glyph's outline.
    pub path: BezPath,
    /// Transform from the outline's local frame to renderer coordinates.
    pub transform: Affine,
}

/// One shape of the debug visualization overlay.
#[derive(Clone, Debug)]
pub enum DebugShape {
    /// A marker at a glyph's anchor point, in renderer coordinates.
    Anchor(Circle),
    /// A glyph's bounding box.
    Bounds {
        /// The box in the glyph's pre-rotation local frame.
        rect: Rect,
        /// Transform from the local frame to renderer coordinates.
        transform: Affine,
    },
}

impl ArcTextRun {
    /// Lay out `text` and return one positioned outline per grapheme cluster.
    pub fn placed_outlines(&self, text: &str) -> Result<Vec<PlacedOutline>, MeasureError> {
        let measurer = GlyphMeasurer::new(&self.font, self.font_size)?;
        let glyphs = measurer.measure(text);
        let placements = layout::compute_layout(&glyphs, &self.config);

        let font_ref = measurer.font_ref();
        let outlines = font_ref.outline_glyphs();
        let size = measurer.size();
        let ascent = f64::from(font_ref.metrics(size, LocationRef::default()).ascent);

        let mut placed = Vec::with_capacity(glyphs.len());
        for (glyph, placement) in glyphs.iter().zip(&placements) {
            let gid = measurer.map_cluster(&glyph.text);
            let mut pen = OutlinePath(BezPath::new());
            if let Some(outline) = outlines.get(gid) {
                let settings = DrawSettings::unhinted(size, LocationRef::default());
                if outline.draw(settings, &mut pen).is_err() {
                    log::debug!("failed to outline glyph {gid:?} for cluster {:?}", glyph.text);
                }
            }
            // Position the glyph box, then drop the outline's baseline origin
            // onto the box's baseline.
            let origin = glyph_box_origin(glyph, placement) + Vec2::new(0.0, ascent);
            placed.push(PlacedOutline {
                path: pen.0,
                transform: placement.transform(self.center) * Affine::translate(origin),
            });
        }
        Ok(placed)
    }

    /// Anchor markers and bounding boxes for `text`, for debug drawing.
    pub fn debug_overlay(&self, text: &str) -> Result<Vec<DebugShape>, MeasureError> {
        let measurer = GlyphMeasurer::new(&self.font, self.font_size)?;
        let glyphs = measurer.measure(text);
        let placements = layout::compute_layout(&glyphs, &self.config);

        let mut shapes = Vec::with_capacity(glyphs.len() * 2);
        for (glyph, placement) in glyphs.iter().zip(&placements) {
            let transform = placement.transform(self.center);
            shapes.push(DebugShape::Anchor(Circle::new(
                transform * placement.anchor,
                ANCHOR_MARKER_DIAMETER / 2.0,
            )));
            shapes.push(DebugShape::Bounds {
                rect: Rect::from_origin_size(
                    glyph_box_origin(glyph, placement).to_point(),
                    (glyph.width, glyph.height),
                ),
                transform,
            });
        }
        Ok(shapes)
    }
}

/// Top-leading corner of a glyph's bounding box in the pre-rotation local
/// frame, placing the box's anchor-aligned point at the placement's anchor.
fn glyph_box_origin(glyph: &GlyphSpec, placement: &GlyphPlacement) -> Vec2 {
    let UnitPoint { x, y } = placement.anchor_align;
    placement.anchor.to_vec2() - Vec2::new(x * glyph.width, y * glyph.height)
}

struct OutlinePath(BezPath);

// Fonts are y-up, the layout frame is y-down.
impl OutlinePen for OutlinePath {
    #[inline]
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to((x, -y));
    }

    #[inline]
    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to((x, -y));
    }

    #[inline]
    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.0.curve_to((cx0, -cy0), (cx1, -cy1), (x, -y));
    }

    #[inline]
    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.0.quad_to((cx, -cy), (x, -y));
    }

    #[inline]
    fn close(&mut self) {
        self.0.close_path();
    }
}
