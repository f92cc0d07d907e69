//! Board image requests as they arrive over HTTP-style query strings, e.g.
//! `fen=W:W31:B1&lastMove=3126&arrows=3126,17&orientation=black`.

use std::collections::HashMap;

use crate::config::{Config, clamp_size};
use crate::error::{Error, FormatError};
use crate::ir::{Arrow, Board, DEFAULT_BOARD_SIZE};
use crate::parser::{parse_arrows, parse_last_move};
use crate::render::{RenderOptions, render_board};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    White,
    Black,
}

impl Orientation {
    /// Anything but `black` keeps White at the bottom.
    pub fn from_param(value: &str) -> Self {
        if value == "black" {
            Self::Black
        } else {
            Self::White
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("invalid boardsize")]
    InvalidBoardSize,
    #[error("fen required")]
    MissingFen,
    #[error("invalid fen")]
    InvalidFen(#[source] Error),
    #[error("size is not a number")]
    InvalidSize,
    #[error("lastMove is not a valid move")]
    InvalidLastMove(#[source] FormatError),
    #[error("invalid arrow")]
    InvalidArrow(#[source] FormatError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardRequest {
    pub board: Board,
    /// Clamped output size; `None` falls back to the configured default.
    pub size: Option<u32>,
    pub last_move: Vec<u32>,
    pub arrows: Vec<Arrow>,
    pub orientation: Orientation,
}

impl BoardRequest {
    pub fn from_query(query: &str) -> Result<Self, RequestError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(
            url::form_urlencoded::parse(query.as_bytes())
                .map(|(key, value)| (key.into_owned(), value.into_owned())),
        )
    }

    /// Builds a request from decoded key/value pairs; the first occurrence of
    /// a key wins.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, RequestError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params: HashMap<String, String> = HashMap::new();
        for (key, value) in pairs {
            params.entry(key).or_insert(value);
        }
        let param = |keys: &[&str]| {
            keys.iter()
                .find_map(|key| params.get(*key))
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
        };

        let board_size = match param(&["boardSize", "boardsize"]) {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|_| RequestError::InvalidBoardSize)?,
            None => DEFAULT_BOARD_SIZE,
        };
        if !Board::is_valid_size(board_size) {
            return Err(RequestError::InvalidBoardSize);
        }

        let fen = params.get("fen").ok_or(RequestError::MissingFen)?;
        // Anything past the third segment (e.g. move counters) is dropped.
        let placement = fen.split(':').take(3).collect::<Vec<_>>().join(":");
        let board = Board::from_fen(&placement, board_size).map_err(RequestError::InvalidFen)?;

        let size = match param(&["size"]) {
            Some(raw) => {
                let size = raw.parse::<i64>().map_err(|_| RequestError::InvalidSize)?;
                Some(clamp_size(size.clamp(0, u32::MAX as i64) as u32))
            }
            None => None,
        };

        let fields = board.fields();
        let last_move = match param(&["lastMove", "lastmove"]) {
            Some(raw) => {
                let squares = parse_last_move(raw).map_err(RequestError::InvalidLastMove)?;
                for &square in &squares {
                    check_square(square, fields).map_err(RequestError::InvalidLastMove)?;
                }
                squares
            }
            None => Vec::new(),
        };

        let arrows = match param(&["arrows"]) {
            Some(raw) => {
                let arrows = parse_arrows(raw).map_err(RequestError::InvalidArrow)?;
                for arrow in &arrows {
                    check_square(arrow.tail, fields).map_err(RequestError::InvalidArrow)?;
                    check_square(arrow.head, fields).map_err(RequestError::InvalidArrow)?;
                }
                arrows
            }
            None => Vec::new(),
        };

        let orientation = param(&["orientation"])
            .map(Orientation::from_param)
            .unwrap_or_default();

        tracing::debug!(
            board_size,
            pieces = board.len(),
            ?size,
            arrows = arrows.len(),
            ?orientation,
            "parsed board request"
        );

        Ok(Self {
            board,
            size,
            last_move,
            arrows,
            orientation,
        })
    }

    pub fn render_options(&self, config: &Config) -> RenderOptions {
        RenderOptions {
            flipped: self.orientation == Orientation::Black,
            last_move: self.last_move.clone(),
            arrows: self.arrows.clone(),
            size: Some(self.size.unwrap_or(config.render.size)),
            stylesheet: config.stylesheet.clone(),
            theme: config.theme.clone(),
            ..RenderOptions::default()
        }
    }

    pub fn render_svg(&self, config: &Config) -> String {
        render_board(Some(&self.board), &self.render_options(config))
    }

    #[cfg(feature = "png")]
    pub fn render_png(&self, config: &Config) -> anyhow::Result<Vec<u8>> {
        crate::render::svg_to_png(&self.render_svg(config))
    }
}

fn check_square(square: u32, fields: u32) -> Result<(), FormatError> {
    if square == 0 || square > fields {
        return Err(FormatError::SquareOutOfRange { square, fields });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Color, Piece, PieceKind};

    #[test]
    fn defaults_for_minimal_query() {
        let request = BoardRequest::from_query("fen=W:WK3:B10").unwrap();
        assert_eq!(request.board.size(), 10);
        assert_eq!(
            request.board.piece_at(3),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(request.size, None);
        assert_eq!(request.orientation, Orientation::White);
        assert!(request.arrows.is_empty());
    }

    #[test]
    fn full_query_with_percent_encoding() {
        let request = BoardRequest::from_query(
            "?boardsize=8&fen=W%3AW21%2C22%3AB1&size=2000&lastMove=2218&arrows=2218%2C01&orientation=black",
        )
        .unwrap();
        assert_eq!(request.board.size(), 8);
        assert_eq!(request.board.len(), 3);
        assert_eq!(request.size, Some(1024));
        assert_eq!(request.last_move, vec![22, 18]);
        assert_eq!(request.arrows, vec![Arrow::new(22, 18), Arrow::new(1, 1)]);
        assert_eq!(request.orientation, Orientation::Black);
    }

    #[test]
    fn extra_fen_segments_are_dropped() {
        let request = BoardRequest::from_query("fen=W:W31:B1:H0:F1").unwrap();
        assert_eq!(request.board.len(), 2);
    }

    #[test]
    fn small_sizes_are_clamped() {
        let request = BoardRequest::from_query("fen=W&size=-4").unwrap();
        assert_eq!(request.size, Some(16));
    }

    #[test]
    fn rejections_match_service_messages() {
        let err = |query: &str| BoardRequest::from_query(query).unwrap_err().to_string();
        assert_eq!(err("boardSize=9&fen=W"), "invalid boardsize");
        assert_eq!(err("boardSize=ten&fen=W"), "invalid boardsize");
        assert_eq!(err("boardSize=65536&fen=W:W1"), "invalid boardsize");
        assert_eq!(err("boardSize=102&fen=W"), "invalid boardsize");
        assert_eq!(err("size=10"), "fen required");
        assert_eq!(err("fen=W:WX3"), "invalid fen");
        assert_eq!(err("fen=W:W99"), "invalid fen");
        assert_eq!(err("fen=W&size=big"), "size is not a number");
        assert_eq!(err("fen=W&arrows=123"), "invalid arrow");
        assert_eq!(err("fen=W&arrows=0199"), "invalid arrow");
        assert_eq!(err("fen=W&lastMove=3x"), "lastMove is not a valid move");
    }

    #[test]
    fn render_uses_configured_size_and_orientation() {
        let request = BoardRequest::from_query("fen=W:W31&orientation=black").unwrap();
        let options = request.render_options(&Config::default());
        assert!(options.flipped);
        assert_eq!(options.size, Some(360));
        let svg = request.render_svg(&Config::default());
        assert!(svg.contains("width=\"360\" height=\"360\""));
        assert!(svg.contains("id=\"white-man\""));
    }
}
