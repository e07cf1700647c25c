// Copyright 2026 the Ringtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alignment enums and the unit-square points they map to.

/// Where along a glyph's height the circle baseline passes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlign {
    /// The baseline passes through the top edge of the glyph box.
    Top,
    /// The baseline passes through the middle of the glyph box.
    #[default]
    Center,
    /// The baseline passes through the bottom edge of the glyph box.
    Bottom,
}

impl VerticalAlign {
    /// Fraction of the glyph height between the box's top edge and the
    /// baseline: 0.0 for top, 0.5 for center, 1.0 for bottom.
    pub const fn factor(self) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => 0.5,
            Self::Bottom => 1.0,
        }
    }
}

/// Horizontal alignment within a glyph's bounding box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlign {
    /// The leading (left, in left-to-right scripts) edge of the box.
    Leading,
    /// The horizontal center of the box.
    #[default]
    Center,
    /// The trailing edge of the box.
    Trailing,
}

/// A point in the unit square of a bounding box, y-down.
///
/// `(0, 0)` is the top-leading corner, `(1, 1)` the bottom-trailing one.
/// A placement's anchor alignment names the box point that sits exactly at
/// the computed anchor.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct UnitPoint {
    /// Horizontal position, 0.0 (leading) to 1.0 (trailing).
    pub x: f64,
    /// Vertical position, 0.0 (top) to 1.0 (bottom).
    pub y: f64,
}

impl UnitPoint {
    /// The top-leading corner.
    pub const TOP_LEADING: Self = Self::new(0.0, 0.0);
    /// The middle of the top edge.
    pub const TOP: Self = Self::new(0.5, 0.0);
    /// The top-trailing corner.
    pub const TOP_TRAILING: Self = Self::new(1.0, 0.0);
    /// The middle of the leading edge.
    pub const LEADING: Self = Self::new(0.0, 0.5);
    /// The center of the box.
    pub const CENTER: Self = Self::new(0.5, 0.5);
    /// The middle of the trailing edge.
    pub const TRAILING: Self = Self::new(1.0, 0.5);
    /// The bottom-leading corner.
    pub const BOTTOM_LEADING: Self = Self::new(0.0, 1.0);
    /// The middle of the bottom edge.
    pub const BOTTOM: Self = Self::new(0.5, 1.0);
    /// The bottom-trailing corner.
    pub const BOTTOM_TRAILING: Self = Self::new(1.0, 1.0);

    /// Create a unit point from raw coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The named point for a pair of alignments.
    pub const fn from_align(horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        match (vertical, horizontal) {
            (VerticalAlign::Top, HorizontalAlign::Leading) => Self::TOP_LEADING,
            (VerticalAlign::Top, HorizontalAlign::Center) => Self::TOP,
            (VerticalAlign::Top, HorizontalAlign::Trailing) => Self::TOP_TRAILING,
            (VerticalAlign::Center, HorizontalAlign::Leading) => Self::LEADING,
            (VerticalAlign::Center, HorizontalAlign::Center) => Self::CENTER,
            (VerticalAlign::Center, HorizontalAlign::Trailing) => Self::TRAILING,
            (VerticalAlign::Bottom, HorizontalAlign::Leading) => Self::BOTTOM_LEADING,
            (VerticalAlign::Bottom, HorizontalAlign::Center) => Self::BOTTOM,
            (VerticalAlign::Bottom, HorizontalAlign::Trailing) => Self::BOTTOM_TRAILING,
        }
    }
}
