// Copyright 2026 the Ringtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measuring grapheme clusters against a font.

use crate::layout::GlyphSpec;
use core::fmt;
use peniko::FontData as Font;
use skrifa::instance::{LocationRef, Size};
use skrifa::{FontRef, GlyphId, MetadataProvider};
use unicode_segmentation::UnicodeSegmentation;

/// Failure to read font data.
#[derive(Debug, thiserror::Error)]
pub enum MeasureError {
    /// The font blob could not be parsed, or the face index is out of range.
    #[error("failed to read font data: {0}")]
    InvalidFont(#[from] skrifa::raw::ReadError),
}

/// Measures the grapheme clusters of a string against one font at one size.
///
/// Heights are taken from the font-wide metrics (ascent minus descent) and
/// are therefore uniform across a run; widths are per-glyph advance widths.
#[derive(Clone)]
pub struct GlyphMeasurer<'a> {
    font: FontRef<'a>,
    size: Size,
    height: f64,
}

impl fmt::Debug for GlyphMeasurer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlyphMeasurer")
            .field("size", &self.size)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl<'a> GlyphMeasurer<'a> {
    /// Wrap `font` at `font_size` pixels per em.
    pub fn new(font: &'a Font, font_size: f32) -> Result<Self, MeasureError> {
        let font_ref = FontRef::from_index(font.data.as_ref(), font.index)?;
        let size = Size::new(font_size);
        let metrics = font_ref.metrics(size, LocationRef::default());
        // Descent is negative in font metrics, so this is the full line box.
        let height = f64::from(metrics.ascent - metrics.descent);
        Ok(Self {
            font: font_ref,
            size,
            height,
        })
    }

    /// Measure every grapheme cluster of `text`, in input order.
    ///
    /// Clusters with no mapping in the font's character map are measured
    /// against the `.notdef` glyph.
    pub fn measure(&self, text: &str) -> Vec<GlyphSpec> {
        let glyph_metrics = self.font.glyph_metrics(self.size, LocationRef::default());
        text.graphemes(true)
            .map(|cluster| {
                let gid = self.map_cluster(cluster);
                let width = glyph_metrics.advance_width(gid).unwrap_or(0.0);
                GlyphSpec::new(cluster, f64::from(width), self.height)
            })
            .collect()
    }

    /// The glyph id for a cluster's leading scalar, falling back to `.notdef`.
    pub(crate) fn map_cluster(&self, cluster: &str) -> GlyphId {
        let mapped = cluster
            .chars()
            .next()
            .and_then(|ch| self.font.charmap().map(ch));
        match mapped {
            Some(gid) => gid,
            None => {
                log::debug!("no glyph for cluster {cluster:?}, measuring .notdef");
                GlyphId::new(0)
            }
        }
    }

    /// The uniform glyph height for this font and size.
    pub fn glyph_height(&self) -> f64 {
        self.height
    }

    /// The font size this measurer was created with.
    pub(crate) fn size(&self) -> Size {
        self.size
    }

    /// The underlying parsed font.
    pub(crate) fn font_ref(&self) -> &FontRef<'a> {
        &self.font
    }
}

#[cfg(test)]
mod tests {
    use super::{GlyphMeasurer, MeasureError};
    use peniko::{Blob, FontData as Font};
    use std::sync::Arc;

    #[test]
    fn garbage_font_data_is_rejected() {
        let font = Font::new(Blob::new(Arc::new([0_u8; 16])), 0);
        let result = GlyphMeasurer::new(&font, 16.0);
        assert!(
            matches!(result, Err(MeasureError::InvalidFont(_))),
            "expected an InvalidFont error"
        );
    }

    #[test]
    fn out_of_range_face_index_is_rejected() {
        let font = Font::new(Blob::new(Arc::new([0_u8; 16])), 7);
        assert!(GlyphMeasurer::new(&font, 16.0).is_err());
    }
}
