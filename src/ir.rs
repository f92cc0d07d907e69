use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::{Error, FormatError, Result};
use crate::parser::{parse_placement, write_placement};

pub const DEFAULT_BOARD_SIZE: u32 = 10;
/// Largest accepted board side.
pub const MAX_BOARD_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Man,
    King,
    GhostMan,
    GhostKing,
}

impl PieceKind {
    pub const ALL: [PieceKind; 4] = [Self::Man, Self::King, Self::GhostMan, Self::GhostKing];

    /// Lowercase symbol; White pieces use the uppercase form.
    pub fn symbol(self) -> char {
        match self {
            Self::Man => 'm',
            Self::King => 'k',
            Self::GhostMan => 'g',
            Self::GhostKing => 'p',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_lowercase() {
            'm' => Some(Self::Man),
            'k' => Some(Self::King),
            'g' => Some(Self::GhostMan),
            'p' => Some(Self::GhostKing),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Man => "man",
            Self::King => "king",
            Self::GhostMan => "ghostman",
            Self::GhostKing => "ghostking",
        }
    }

    pub fn is_ghost(self) -> bool {
        matches!(self, Self::GhostMan | Self::GhostKing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Self::White, Self::Black];

    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// `M`, `K`, `G` or `P` for White, lowercase for Black.
    pub fn symbol(self) -> char {
        let symbol = self.kind.symbol();
        match self.color {
            Color::White => symbol.to_ascii_uppercase(),
            Color::Black => symbol,
        }
    }

    pub fn from_symbol(symbol: char) -> std::result::Result<Self, FormatError> {
        let kind = PieceKind::from_symbol(symbol).ok_or(FormatError::UnknownPieceSymbol(symbol))?;
        let color = if symbol.is_ascii_lowercase() {
            Color::Black
        } else {
            Color::White
        };
        Ok(Self { kind, color })
    }

    /// Glyph id used in the rendered document, e.g. `white-king`.
    pub fn glyph_id(self) -> String {
        format!("{}-{}", self.color.name(), self.kind.name())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A marker between two playable squares; `tail == head` draws a circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Arrow {
    pub tail: u32,
    pub head: u32,
}

impl Arrow {
    pub fn new(tail: u32, head: u32) -> Self {
        Self { tail, head }
    }
}

/// A draughts position: which pieces stand on which playable squares.
///
/// Playable squares are numbered `1..=size²/2` in row-major order. The
/// placement is only ever replaced as a whole, by [`Board::set_fen`],
/// [`Board::reset`] or [`Board::clear`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u32,
    pieces: BTreeMap<u32, Piece>,
}

impl Board {
    /// Even sides from 2 up to [`MAX_BOARD_SIZE`].
    pub fn is_valid_size(size: u32) -> bool {
        (2..=MAX_BOARD_SIZE).contains(&size) && size % 2 == 0
    }

    /// An empty board.
    pub fn new(size: u32) -> Result<Self> {
        if !Self::is_valid_size(size) {
            return Err(Error::InvalidBoardSize(size));
        }
        Ok(Self {
            size,
            pieces: BTreeMap::new(),
        })
    }

    pub fn starting(size: u32) -> Result<Self> {
        let mut board = Self::new(size)?;
        board.reset();
        Ok(board)
    }

    /// Builds a board from placement notation. The canonical starting string
    /// for `size` decodes to the initializer's placement.
    pub fn from_fen(fen: &str, size: u32) -> Result<Self> {
        let mut board = Self::new(size)?;
        board.set_fen(fen)?;
        Ok(board)
    }

    /// The placement string of the starting position for `size`.
    pub fn starting_fen(size: u32) -> Result<String> {
        Ok(Self::starting(size)?.fen())
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of playable squares.
    pub fn fields(&self) -> u32 {
        self.size * self.size / 2
    }

    pub fn piece_at(&self, square: u32) -> Option<Piece> {
        self.pieces.get(&square).copied()
    }

    pub fn contains_piece(&self, kind: PieceKind, color: Color) -> bool {
        self.pieces
            .values()
            .any(|piece| piece.kind == kind && piece.color == color)
    }

    /// Occupied squares in ascending order.
    pub fn pieces(&self) -> impl Iterator<Item = (u32, Piece)> + '_ {
        self.pieces.iter().map(|(square, piece)| (*square, *piece))
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn clear(&mut self) {
        self.pieces.clear();
    }

    pub fn reset(&mut self) {
        self.pieces.clear();
        let fields = self.fields();
        let half = self.size / 2;
        let men_per_side = (half - 1) * half;
        for square in 1..=men_per_side {
            self.pieces
                .insert(square, Piece::new(PieceKind::Man, Color::Black));
        }
        for square in (fields - men_per_side + 1)..=fields {
            self.pieces
                .insert(square, Piece::new(PieceKind::Man, Color::White));
        }
    }

    /// Replaces the placement with the decoded `fen`. On error the board is
    /// left untouched.
    pub fn set_fen(&mut self, fen: &str) -> Result<()> {
        let pieces = parse_placement(fen, self.fields())?;
        tracing::debug!(pieces = pieces.len(), size = self.size, "decoded placement");
        self.pieces = pieces;
        Ok(())
    }

    pub fn fen(&self) -> String {
        write_placement(self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fen())
    }
}
