#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod glyphs;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod parser;
pub mod render;
pub mod request;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, load_config};
pub use error::{Error, FormatError, Result};
pub use glyphs::PieceSet;
pub use ir::{Arrow, Board, Color, Piece, PieceKind};
pub use layout::{BoardLayout, compute_layout};
pub use render::{RenderOptions, render_board, render_piece, render_svg};
pub use request::{BoardRequest, Orientation, RequestError};
pub use theme::Theme;

/// Decodes `fen` on a `board_size` board and renders it.
pub fn render_with_options(fen: &str, board_size: u32, options: &RenderOptions) -> Result<String> {
    let board = Board::from_fen(fen, board_size)?;
    Ok(render_board(Some(&board), options))
}
