use crate::glyphs::{GLYPH_SIZE, PieceSet};
use crate::ir::{Arrow, Board, Piece};
use crate::layout::{BoardLayout, Marker, SQUARE_SIZE, compute_layout};
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub flipped: bool,
    /// Playable squares of the last move to highlight.
    pub last_move: Vec<u32>,
    pub arrows: Vec<Arrow>,
    /// Explicit `width`/`height` of the document in pixels.
    pub size: Option<u32>,
    pub stylesheet: Option<String>,
    pub theme: Theme,
    pub pieces: PieceSet,
}

/// Renders a board (or an empty 10×10 board for `None`) to SVG markup.
pub fn render_board(board: Option<&Board>, options: &RenderOptions) -> String {
    let layout = compute_layout(board, options);
    render_svg(&layout, &options.theme, &options.pieces)
}

pub fn render_svg(layout: &BoardLayout, theme: &Theme, pieces: &PieceSet) -> String {
    let mut svg = String::new();
    svg.push_str(&svg_open(layout.width, layout.size));

    if let Some(style) = layout.stylesheet.as_deref().filter(|s| !s.is_empty()) {
        svg.push_str(&format!("<style>{}</style>", escape_xml(style)));
    }

    svg.push_str("<defs>");
    for piece in &layout.glyphs {
        svg.push_str(pieces.glyph(*piece));
    }
    svg.push_str("</defs>");

    for cell in &layout.cells {
        svg.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" class=\"{}\" stroke=\"none\" fill=\"{}\"/>",
            num(cell.px),
            num(cell.py),
            num(SQUARE_SIZE),
            num(SQUARE_SIZE),
            cell.class.css_class(),
            escape_xml(&cell.fill)
        ));
    }

    let scale = SQUARE_SIZE / GLYPH_SIZE;
    for placement in &layout.pieces {
        svg.push_str(&format!(
            "<use xlink:href=\"#{}\" transform=\"translate({}, {}) scale({scale:.6}, {scale:.6})\"/>",
            placement.piece.glyph_id(),
            num(placement.x),
            num(placement.y),
        ));
    }

    let color = escape_xml(&theme.arrow_color);
    let opacity = num(theme.arrow_opacity);
    for marker in &layout.markers {
        match marker {
            Marker::Circle {
                cx,
                cy,
                r,
                stroke_width,
            } => {
                svg.push_str(&format!(
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" stroke-width=\"{}\" stroke=\"{color}\" fill=\"none\" opacity=\"{opacity}\"/>",
                    num(*cx),
                    num(*cy),
                    num(*r),
                    num(*stroke_width),
                ));
            }
            Marker::Arrow {
                x1,
                y1,
                x2,
                y2,
                stroke_width,
                head,
            } => {
                svg.push_str(&format!(
                    "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{color}\" stroke-width=\"{}\" opacity=\"{opacity}\" stroke-linecap=\"butt\" class=\"arrow\"/>",
                    num(*x1),
                    num(*y1),
                    num(*x2),
                    num(*y2),
                    num(*stroke_width),
                ));
                let points = head
                    .iter()
                    .map(|(x, y)| format!("{},{}", num(*x), num(*y)))
                    .collect::<Vec<_>>()
                    .join(" ");
                svg.push_str(&format!(
                    "<polygon points=\"{points}\" fill=\"{color}\" opacity=\"{opacity}\" class=\"arrow\"/>"
                ));
            }
        }
    }

    svg.push_str("</svg>");
    svg
}

/// A standalone icon for one piece, one square in size.
pub fn render_piece(piece: Piece, size: Option<u32>, pieces: &PieceSet) -> String {
    let mut svg = svg_open(SQUARE_SIZE, size);
    svg.push_str(&format!(
        "<g transform=\"scale({:.6})\">{}</g>",
        SQUARE_SIZE / GLYPH_SIZE,
        pieces.glyph(piece)
    ));
    svg.push_str("</svg>");
    svg
}

fn svg_open(viewbox: f32, size: Option<u32>) -> String {
    let side = num(viewbox);
    let mut open = format!(
        "<svg xmlns=\"{SVG_NS}\" version=\"1.1\" xmlns:xlink=\"{XLINK_NS}\" viewBox=\"0 0 {side} {side}\""
    );
    if let Some(size) = size {
        open.push_str(&format!(" width=\"{size}\" height=\"{size}\""));
    }
    open.push('>');
    open
}

/// Shortest decimal form with at most three fractional digits.
fn num(value: f32) -> String {
    let text = format!("{value:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn svg_to_png(svg: &str) -> Result<Vec<u8>> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    tracing::debug!(width = size.width(), height = size.height(), "rasterized board");
    Ok(pixmap.encode_png()?)
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path) -> Result<()> {
    let png = svg_to_png(svg)?;
    std::fs::write(output, png)?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
