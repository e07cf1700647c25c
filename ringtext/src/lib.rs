// Copyright 2026 the Ringtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout of single-line text along a circular arc.
//!
//! The core of this crate is [`compute_layout`]: given a sequence of measured
//! glyph bounding boxes and a [`LayoutConfig`], it produces one
//! [`GlyphPlacement`] per glyph describing the rotation and anchor point at
//! which that glyph sits on the circle. The function is pure and recomputes
//! the whole run on every call, so a caller can simply invoke it on each
//! redraw.
//!
//! Text measurement and outline extraction live behind the `text` feature
//! (enabled by default): [`measure::GlyphMeasurer`] turns a string plus a
//! [`peniko::Font`] into measured glyphs, and [`render::ArcTextRun`] goes all
//! the way from a string to positioned glyph outlines a renderer can fill.
//!
//! # Example
//!
//! ```
//! use ringtext::{GlyphSpec, LayoutConfig, VerticalAlign, compute_layout};
//!
//! let glyphs: Vec<_> = "arc"
//!     .chars()
//!     .map(|c| GlyphSpec::new(c.to_string(), 10.0, 20.0))
//!     .collect();
//! let config = LayoutConfig {
//!     radius: 100.0,
//!     starting_angle: 0.0,
//!     vertical_align: VerticalAlign::Center,
//!     clockwise: true,
//! };
//! let placements = compute_layout(&glyphs, &config);
//! assert_eq!(placements.len(), 3);
//! assert_eq!(placements[0].rotation, 0.0);
//! ```

pub mod align;
pub mod layout;
#[cfg(feature = "text")]
pub mod measure;
#[cfg(feature = "text")]
pub mod render;

pub use peniko;
pub use peniko::kurbo;

pub use align::{HorizontalAlign, UnitPoint, VerticalAlign};
pub use layout::{GlyphPlacement, GlyphSpec, LayoutConfig, compute_layout};
#[cfg(feature = "text")]
pub use measure::{GlyphMeasurer, MeasureError};
#[cfg(feature = "text")]
pub use render::{ArcTextRun, DebugShape, PlacedOutline};
