//! Board geometry: cell indices, playable-square numbers and pixel positions,
//! square classes and arrow markers. Everything here is pure; the result is an
//! immutable [`BoardLayout`] that `render` serializes.

use serde::Serialize;

use crate::ir::{Arrow, Board, Color, DEFAULT_BOARD_SIZE, Piece, PieceKind};
use crate::render::RenderOptions;

/// Edge length of one square in viewBox units.
pub const SQUARE_SIZE: f32 = 45.0;

const CIRCLE_RADIUS: f32 = 0.45 * SQUARE_SIZE;
const CIRCLE_STROKE_WIDTH: f32 = 0.1 * SQUARE_SIZE;
const ARROW_STROKE_WIDTH: f32 = 0.2 * SQUARE_SIZE;
const ARROW_HEAD_LENGTH: f32 = 0.75 * SQUARE_SIZE;
const ARROW_TIP_MARGIN: f32 = 0.1 * SQUARE_SIZE;

/// Maps between linear cell indices, grid coordinates, playable-square
/// numbers and pixels for one board size and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateMapper {
    board_size: u32,
    flipped: bool,
}

impl CoordinateMapper {
    pub fn new(board_size: u32, flipped: bool) -> Self {
        Self {
            board_size,
            flipped,
        }
    }

    pub fn cell_count(&self) -> u32 {
        self.board_size * self.board_size
    }

    pub fn fields(&self) -> u32 {
        self.cell_count() / 2
    }

    pub fn cell_to_grid(&self, index: u32) -> (u32, u32) {
        let n = self.board_size;
        let x = index % n;
        let y = (index + (n - x)) / n - 1;
        (x, y)
    }

    pub fn is_playable(x: u32, y: u32) -> bool {
        x % 2 != y % 2
    }

    pub fn playable_number(index: u32, x: u32, y: u32) -> Option<u32> {
        Self::is_playable(x, y).then_some(index / 2 + 1)
    }

    /// Top-left corner of a cell.
    pub fn grid_to_pixel(&self, x: u32, y: u32) -> (f32, f32) {
        (self.axis(x) as f32 * SQUARE_SIZE, self.axis(y) as f32 * SQUARE_SIZE)
    }

    /// Inverse of [`CoordinateMapper::playable_number`]; `square` must lie in
    /// `1..=fields`.
    pub fn square_to_grid(&self, square: u32) -> (u32, u32) {
        let n = self.board_size;
        let cell = 2 * square - 1;
        let y = (cell + (n - cell % n)) / n - 1;
        let x = cell % n - y % 2;
        (x, y)
    }

    pub fn square_center(&self, square: u32) -> (f32, f32) {
        let (x, y) = self.square_to_grid(square);
        let n = self.board_size as f32;
        let center = |v: u32| {
            if self.flipped {
                n - 0.5 - v as f32
            } else {
                v as f32 + 0.5
            }
        };
        (center(x) * SQUARE_SIZE, center(y) * SQUARE_SIZE)
    }

    fn axis(&self, v: u32) -> u32 {
        if self.flipped {
            self.board_size - 1 - v
        } else {
            v
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SquareClass {
    pub dark: bool,
    pub last_move: bool,
}

impl SquareClass {
    /// Light cells have matching column and row parity. Only playable cells
    /// can be part of the last move.
    pub fn classify(x: u32, y: u32, square: Option<u32>, last_move: &[u32]) -> Self {
        Self {
            dark: x % 2 != y % 2,
            last_move: square.is_some_and(|sq| last_move.contains(&sq)),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match (self.dark, self.last_move) {
            (false, false) => "square light",
            (true, false) => "square dark",
            (false, true) => "square light lastmove",
            (true, true) => "square dark lastmove",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellLayout {
    pub index: u32,
    pub x: u32,
    pub y: u32,
    pub px: f32,
    pub py: f32,
    pub square: Option<u32>,
    pub class: SquareClass,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PiecePlacement {
    pub square: u32,
    pub piece: Piece,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Marker {
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        stroke_width: f32,
    },
    Arrow {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke_width: f32,
        /// Tip first, then the two base corners.
        head: [(f32, f32); 3],
    },
}

/// Circle for coinciding centers, otherwise a shaft plus triangular head
/// whose tip stops short of the head square's center.
pub fn arrow_marker(tail: (f32, f32), head: (f32, f32)) -> Marker {
    if tail == head {
        return Marker::Circle {
            cx: head.0,
            cy: head.1,
            r: CIRCLE_RADIUS,
            stroke_width: CIRCLE_STROKE_WIDTH,
        };
    }

    let (dx, dy) = (head.0 - tail.0, head.1 - tail.1);
    let hypot = dx.hypot(dy);
    let back = |distance: f32| {
        (
            head.0 - dx * distance / hypot,
            head.1 - dy * distance / hypot,
        )
    };
    let shaft = back(ARROW_HEAD_LENGTH + ARROW_TIP_MARGIN);
    let tip = back(ARROW_TIP_MARGIN);
    let half = 0.5 * ARROW_HEAD_LENGTH / hypot;

    Marker::Arrow {
        x1: tail.0,
        y1: tail.1,
        x2: shaft.0,
        y2: shaft.1,
        stroke_width: ARROW_STROKE_WIDTH,
        head: [
            tip,
            (shaft.0 + dy * half, shaft.1 - dx * half),
            (shaft.0 - dy * half, shaft.1 + dx * half),
        ],
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardLayout {
    pub board_size: u32,
    pub flipped: bool,
    /// Side of the square viewBox.
    pub width: f32,
    pub size: Option<u32>,
    pub stylesheet: Option<String>,
    /// Distinct pieces present on the board, White first.
    pub glyphs: Vec<Piece>,
    pub cells: Vec<CellLayout>,
    pub pieces: Vec<PiecePlacement>,
    pub markers: Vec<Marker>,
}

pub fn compute_layout(board: Option<&Board>, options: &RenderOptions) -> BoardLayout {
    let board_size = board.map_or(DEFAULT_BOARD_SIZE, Board::size);
    let mapper = CoordinateMapper::new(board_size, options.flipped);

    let mut glyphs = Vec::new();
    if let Some(board) = board {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                if board.contains_piece(kind, color) {
                    glyphs.push(Piece::new(kind, color));
                }
            }
        }
    }

    let mut cells = Vec::with_capacity(mapper.cell_count() as usize);
    let mut pieces = Vec::new();
    for index in 0..mapper.cell_count() {
        let (x, y) = mapper.cell_to_grid(index);
        let (px, py) = mapper.grid_to_pixel(x, y);
        let square = CoordinateMapper::playable_number(index, x, y);
        let class = SquareClass::classify(x, y, square, &options.last_move);

        if let (Some(square), Some(board)) = (square, board) {
            if let Some(piece) = board.piece_at(square) {
                pieces.push(PiecePlacement {
                    square,
                    piece,
                    x: px,
                    y: py,
                });
            }
        }

        cells.push(CellLayout {
            index,
            x,
            y,
            px,
            py,
            square,
            class,
            fill: options.theme.square_fill(class).to_string(),
        });
    }

    let fields = mapper.fields();
    let mut markers = Vec::with_capacity(options.arrows.len());
    for arrow in &options.arrows {
        if !on_board(arrow, fields) {
            tracing::warn!(tail = arrow.tail, head = arrow.head, fields, "skipping arrow off the board");
            continue;
        }
        markers.push(arrow_marker(
            mapper.square_center(arrow.tail),
            mapper.square_center(arrow.head),
        ));
    }

    tracing::debug!(
        board_size,
        flipped = options.flipped,
        glyphs = glyphs.len(),
        pieces = pieces.len(),
        markers = markers.len(),
        "computed board layout"
    );

    BoardLayout {
        board_size,
        flipped: options.flipped,
        width: board_size as f32 * SQUARE_SIZE,
        size: options.size,
        stylesheet: options.stylesheet.clone(),
        glyphs,
        cells,
        pieces,
        markers,
    }
}

fn on_board(arrow: &Arrow, fields: u32) -> bool {
    (1..=fields).contains(&arrow.tail) && (1..=fields).contains(&arrow.head)
}
