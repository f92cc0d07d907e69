//! Piece artwork. Each glyph is a `<g>` drawn in a 210×210 box and carries
//! its own `id` (`white-man`, `black-ghostking`, ...), which the board
//! markup references with `<use>`.
//!
//! Piece vector graphics are copyright (C) Colin M.L. Burnett and licensed
//! under the GNU General Public License, version 3 or later. That licence
//! covers this module and any build that embeds it; the crate's own code is
//! MIT.

use std::borrow::Cow;

use crate::ir::{Color, Piece, PieceKind};

/// Native edge length of every glyph.
pub const GLYPH_SIZE: f32 = 210.0;

const WHITE_MAN: &str = r##"<g id="white-man" class="white man" viewBox="0 0 210 210"><defs><linearGradient id="lgw1"><stop style="stop-color: #7f7f7f; stop-opacity: 1;" offset="0"/><stop style="stop-color: #ffffff; stop-opacity: 1;" offset="0.5"/><stop style="stop-color: #ffffff; stop-opacity: 1;" offset="1"/></linearGradient></defs><path d="M 10,140 c 0,60 190,60 190,0 l 0,-35 l -190,0 z" style="fill: url(#lgw1); stroke: rgb(0, 0, 0); stroke-width: 3; stroke-opacity: 0.65;"/><path d="M 10,105 c 0,60 190,60 190,0 c 0,-60 -190,-60 -190,0 z" style="fill: rgb(255, 255, 255); stroke: rgb(0, 0, 0); stroke-width: 3; stroke-opacity: 0.65;"/></g>"##;

const WHITE_KING: &str = r##"<g id="white-king" class="white king" viewBox="0 0 210 210"><defs><linearGradient id="lgw2"><stop style="stop-color: #7f7f7f; stop-opacity: 1;" offset="0"/><stop style="stop-color: #ffffff; stop-opacity: 1;" offset="0.5"/><stop style="stop-color: #ffffff; stop-opacity: 1;" offset="1"/></linearGradient></defs><path d="M 10,140 c 0,60 190,60 190,0 l 0,-35 l -190,0 z" style="fill: url(#lgw2); stroke: rgb(0, 0, 0); stroke-width: 3; stroke-opacity: 0.65;"/><path d="M 10,105 c 0,60 190,60 190,0 l 0,-35 l -190,0 z" style="fill: url(#lgw2) rgb(255, 255, 255); stroke: rgb(0, 0, 0); stroke-width: 3; stroke-opacity: 0.65;"/><path d="M 10,70 c 0,60 190,60 190,0 c 0,-60 -190,-60 -190,0 z" style="fill: rgb(255, 255, 255); stroke: rgb(0, 0, 0); stroke-width: 3; stroke-opacity: 0.65;"/><polygon points="58,45  71,85 139,85  152,45  127,70 105,35 83,70" fill="#bf8c16"/><polygon points="74,96 71.6,87  138.4,87 136,96" fill="#bf8c16"/><ellipse fill="#FFFFFF" cx="105" cy="68" rx="5" ry="10"/></g>"##;

const WHITE_GHOST_MAN: &str = r##"<g id="white-ghostman" class="white ghostman" viewBox="0 0 210 210" opacity="0.3"><defs><linearGradient id="lgw3"><stop style="stop-color: #7f7f7f; stop-opacity: 1;" offset="0"/><stop style="stop-color: #ffffff; stop-opacity: 1;" offset="0.5"/><stop style="stop-color: #ffffff; stop-opacity: 1;" offset="1"/></linearGradient></defs><path d="M 10,140 c 0,60 190,60 190,0 l 0,-35 l -190,0 z" style="fill: url(#lgw3); stroke: rgb(0, 0, 0); stroke-width: 3; stroke-opacity: 0.65;"/><path d="M 10,105 c 0,60 190,60 190,0 c 0,-60 -190,-60 -190,0 z" style="fill: rgb(255, 255, 255); stroke: rgb(0, 0, 0); stroke-width: 3; stroke-opacity: 0.65;"/></g>"##;

const WHITE_GHOST_KING: &str = r##"<g id="white-ghostking" class="white ghostking" viewBox="0 0 210 210" opacity="0.3"><defs><linearGradient id="lgw4"><stop style="stop-color: #7f7f7f; stop-opacity: 1;" offset="0"/><stop style="stop-color: #ffffff; stop-opacity: 1;" offset="0.5"/><stop style="stop-color: #ffffff; stop-opacity: 1;" offset="1"/></linearGradient></defs><path d="M 10,140 c 0,60 190,60 190,0 l 0,-35 l -190,0 z" style="fill: url(#lgw4); stroke: rgb(0, 0, 0); stroke-width: 3; stroke-opacity: 0.65;"/><path d="M 10,105 c 0,60 190,60 190,0 l 0,-35 l -190,0 z" style="fill: url(#lgw4) rgb(255, 255, 255); stroke: rgb(0, 0, 0); stroke-width: 3; stroke-opacity: 0.65;"/><path d="M 10,70 c 0,60 190,60 190,0 c 0,-60 -190,-60 -190,0 z" style="fill: rgb(255, 255, 255); stroke: rgb(0, 0, 0); stroke-width: 3; stroke-opacity: 0.65;"/><polygon points="58,45  71,85 139,85  152,45  127,70 105,35 83,70" fill="#bf8c16"/><polygon points="74,96 71.6,87  138.4,87 136,96" fill="#bf8c16"/><ellipse fill="#FFFFFF" cx="105" cy="68" rx="5" ry="10"/></g>"##;

const BLACK_MAN: &str = r##"<g id="black-man" class="black man" viewBox="0 0 210 210"><defs><linearGradient id="lgb1"><stop style="stop-color: #000000; stop-opacity: 1;" offset="0"/><stop style="stop-color: #000000; stop-opacity: 1;" offset="0.5"/><stop style="stop-color: #9f9f9f; stop-opacity: 1;" offset="1"/></linearGradient></defs><path d="M 10,140 c 0,60 190,60 190,0 l 0,-35 l -190,0 z" style="fill: url(#lgb1); stroke: #dfdfdf; stroke-width: 3; stroke-opacity: 0.5;"/><path d="M 10,105 c 0,60 190,60 190,0 c 0,-60 -190,-60 -190,0" style="fill: rgb(0, 0, 0); stroke: #dfdfdf; stroke-width: 3; stroke-opacity: 0.5;"/></g>"##;

const BLACK_KING: &str = r##"<g id="black-king" class="black king" viewBox="0 0 210 210"><defs><linearGradient id="lgb2"><stop style="stop-color: #000000; stop-opacity: 1;" offset="0"/><stop style="stop-color: #000000; stop-opacity: 1;" offset="0.5"/><stop style="stop-color: #9f9f9f; stop-opacity: 1;" offset="1"/></linearGradient></defs><path d="M 10,140 c 0,60 190,60 190,0 l 0,-35 l -190,0 z" style="fill: url(#lgb2); stroke: #dfdfdf; stroke-width: 3; stroke-opacity: 0.5;"/><path d="M 10,105 c 0,60 190,60 190,0 l 0,-35 l -190,0 z" style="fill: url(#lgb2) rgb(0, 0, 0); stroke: #dfdfdf; stroke-width: 3; stroke-opacity: 0.5;"/><path d="M 10,70 c 0,60 190,60 190,0 c 0,-60 -190,-60 -190,0 z" style="fill: rgb(0, 0, 0); stroke: #dfdfdf; stroke-width: 3; stroke-opacity: 0.5;"/><polygon points="58,45  71,85 139,85  152,45  127,70 105,35 83,70" fill="#bf8c16"/><polygon points="74,96 71.6,87  138.4,87 136,96" fill="#bf8c16"/><ellipse fill="#000000" cx="105" cy="68" rx="5" ry="10"/></g>"##;

const BLACK_GHOST_MAN: &str = r##"<g id="black-ghostman" class="black ghostman" viewBox="0 0 210 210" opacity="0.3"><defs><linearGradient id="lgb3"><stop style="stop-color: #000000; stop-opacity: 1;" offset="0"/><stop style="stop-color: #000000; stop-opacity: 1;" offset="0.5"/><stop style="stop-color: #9f9f9f; stop-opacity: 1;" offset="1"/></linearGradient></defs><path d="M 10,140 c 0,60 190,60 190,0 l 0,-35 l -190,0 z" style="fill: url(#lgb3); stroke: #dfdfdf; stroke-width: 3; stroke-opacity: 0.5;"/><path d="M 10,105 c 0,60 190,60 190,0 c 0,-60 -190,-60 -190,0" style="fill: rgb(0, 0, 0); stroke: #dfdfdf; stroke-width: 3; stroke-opacity: 0.5;"/></g>"##;

const BLACK_GHOST_KING: &str = r##"<g id="black-ghostking" class="black ghostking" viewBox="0 0 210 210" opacity="0.3"><defs><linearGradient id="lgb4"><stop style="stop-color: #000000; stop-opacity: 1;" offset="0"/><stop style="stop-color: #000000; stop-opacity: 1;" offset="0.5"/><stop style="stop-color: #9f9f9f; stop-opacity: 1;" offset="1"/></linearGradient></defs><path d="M 10,140 c 0,60 190,60 190,0 l 0,-35 l -190,0 z" style="fill: url(#lgb4); stroke: #dfdfdf; stroke-width: 3; stroke-opacity: 0.5;"/><path d="M 10,105 c 0,60 190,60 190,0 l 0,-35 l -190,0 z" style="fill: url(#lgb4) rgb(0, 0, 0); stroke: #dfdfdf; stroke-width: 3; stroke-opacity: 0.5;"/><path d="M 10,70 c 0,60 190,60 190,0 c 0,-60 -190,-60 -190,0 z" style="fill: rgb(0, 0, 0); stroke: #dfdfdf; stroke-width: 3; stroke-opacity: 0.5;"/><polygon points="58,45  71,85 139,85  152,45  127,70 105,35 83,70" fill="#bf8c16"/><polygon points="74,96 71.6,87  138.4,87 136,96" fill="#bf8c16"/><ellipse fill="#000000" cx="105" cy="68" rx="5" ry="10"/></g>"##;

/// Immutable glyph table keyed by piece.
#[derive(Debug, Clone)]
pub struct PieceSet {
    glyphs: [Cow<'static, str>; 8],
}

impl PieceSet {
    pub fn standard() -> Self {
        Self {
            glyphs: [
                Cow::Borrowed(WHITE_MAN),
                Cow::Borrowed(WHITE_KING),
                Cow::Borrowed(WHITE_GHOST_MAN),
                Cow::Borrowed(WHITE_GHOST_KING),
                Cow::Borrowed(BLACK_MAN),
                Cow::Borrowed(BLACK_KING),
                Cow::Borrowed(BLACK_GHOST_MAN),
                Cow::Borrowed(BLACK_GHOST_KING),
            ],
        }
    }

    /// Replaces the artwork for one piece. The markup must keep the
    /// `id` returned by [`Piece::glyph_id`] so board references resolve.
    pub fn with_glyph(mut self, piece: Piece, markup: impl Into<String>) -> Self {
        self.glyphs[slot(piece)] = Cow::Owned(markup.into());
        self
    }

    pub fn glyph(&self, piece: Piece) -> &str {
        &self.glyphs[slot(piece)]
    }
}

impl Default for PieceSet {
    fn default() -> Self {
        Self::standard()
    }
}

fn slot(piece: Piece) -> usize {
    let color = match piece.color {
        Color::White => 0,
        Color::Black => 4,
    };
    let kind = match piece.kind {
        PieceKind::Man => 0,
        PieceKind::King => 1,
        PieceKind::GhostMan => 2,
        PieceKind::GhostKing => 3,
    };
    color + kind
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_glyph_carries_its_reference_id() {
        let set = PieceSet::standard();
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, color);
                let id = format!("id=\"{}\"", piece.glyph_id());
                assert!(set.glyph(piece).contains(&id), "{piece} lacks {id}");
            }
        }
    }

    #[test]
    fn ghost_glyphs_are_translucent() {
        let set = PieceSet::standard();
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let glyph = set.glyph(Piece::new(kind, color));
                assert_eq!(glyph.contains("opacity=\"0.3\""), kind.is_ghost());
            }
        }
    }

    #[test]
    fn with_glyph_overrides_one_piece() {
        let piece = Piece::new(PieceKind::King, Color::Black);
        let set = PieceSet::standard().with_glyph(piece, "<g id=\"black-king\"/>");
        assert_eq!(set.glyph(piece), "<g id=\"black-king\"/>");
        assert!(set.glyph(Piece::new(PieceKind::King, Color::White)).contains("white-king"));
    }
}
