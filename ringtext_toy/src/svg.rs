// Copyright 2026 the Ringtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render a circular text layout to an SVG file.
//!
//! Example invocation:
//!
//! ```sh
//! cargo run --bin svg -- --font /usr/share/fonts/truetype/dejavu/DejaVuSans.ttf \
//!     --text "around we go" --radius 140 --starting-angle -90 --debug
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ringtext::kurbo::{Affine, Point};
use ringtext::peniko::{Blob, FontData as Font};
use ringtext::{ArcTextRun, DebugShape, LayoutConfig, VerticalAlign};
use std::path::PathBuf;
use std::sync::Arc;
use svg::Document;
use svg::node::element::{Circle, Path, Rectangle};

#[derive(Parser, Debug)]
#[command(about = "Render a circular text layout to an SVG file.")]
struct Args {
    /// Text to lay out around the circle.
    #[arg(long, default_value = "around we go")]
    text: String,
    /// Path to a TTF or OTF font file.
    #[arg(long)]
    font: PathBuf,
    /// Font size in pixels per em.
    #[arg(long, default_value_t = 32.0)]
    font_size: f32,
    /// Circle radius in pixels.
    #[arg(long, default_value_t = 160.0)]
    radius: f64,
    /// Angle of the first glyph's leading edge, in degrees.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    starting_angle: f64,
    /// Where the circle baseline passes through each glyph.
    #[arg(long, value_enum, default_value_t = Align::Center)]
    align: Align,
    /// Wind counter-clockwise instead of clockwise.
    #[arg(long)]
    ccw: bool,
    /// Draw anchor markers and glyph bounding boxes.
    #[arg(long)]
    debug: bool,
    /// Where to write the SVG document.
    #[arg(long, default_value = "ringtext.svg")]
    output: PathBuf,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Align {
    Top,
    Center,
    Bottom,
}

impl From<Align> for VerticalAlign {
    fn from(align: Align) -> Self {
        match align {
            Align::Top => Self::Top,
            Align::Center => Self::Center,
            Align::Bottom => Self::Bottom,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let data = std::fs::read(&args.font)
        .with_context(|| format!("reading font file {}", args.font.display()))?;
    let font = Font::new(Blob::new(Arc::new(data)), 0);

    // Leave a glyph-height margin around the circle.
    let size = 2.0 * (args.radius + f64::from(args.font_size));
    let run = ArcTextRun {
        font,
        font_size: args.font_size,
        center: Point::new(size / 2.0, size / 2.0),
        config: LayoutConfig {
            radius: args.radius,
            starting_angle: args.starting_angle.to_radians(),
            vertical_align: args.align.into(),
            clockwise: !args.ccw,
        },
    };

    let mut document = Document::new()
        .set("width", size)
        .set("height", size)
        .set("viewBox", (0.0, 0.0, size, size));

    for outline in run.placed_outlines(&args.text)? {
        document = document.add(
            Path::new()
                .set("d", outline.path.to_svg())
                .set("fill", "black")
                .set("transform", matrix(outline.transform)),
        );
    }

    if args.debug {
        for shape in run.debug_overlay(&args.text)? {
            document = match shape {
                DebugShape::Anchor(marker) => document.add(
                    Circle::new()
                        .set("cx", marker.center.x)
                        .set("cy", marker.center.y)
                        .set("r", marker.radius)
                        .set("fill", "red")
                        .set("fill-opacity", 0.5),
                ),
                DebugShape::Bounds { rect, transform } => document.add(
                    Rectangle::new()
                        .set("x", rect.x0)
                        .set("y", rect.y0)
                        .set("width", rect.width())
                        .set("height", rect.height())
                        .set("fill", "none")
                        .set("stroke", "royalblue")
                        .set("stroke-opacity", 0.7)
                        .set("transform", matrix(transform)),
                ),
            };
        }
    }

    svg::save(&args.output, &document)
        .with_context(|| format!("writing {}", args.output.display()))?;
    Ok(())
}

/// An affine transform as an SVG `matrix(..)` attribute value.
fn matrix(affine: Affine) -> String {
    let [a, b, c, d, e, f] = affine.as_coeffs();
    format!("matrix({a} {b} {c} {d} {e} {f})")
}
