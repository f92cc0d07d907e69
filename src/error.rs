pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid board size {0}: expected an even number of at least 2")]
    InvalidBoardSize(u32),

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Malformed caller input: placement strings, piece symbols and request tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("expected at most 3 placement segments, got {count}: {fen}")]
    TooManySegments { count: usize, fen: String },

    #[error("invalid square reference {token:?}")]
    InvalidSquare { token: String },

    #[error("square {square} is outside 1..={fields}")]
    SquareOutOfRange { square: u32, fields: u32 },

    #[error("unknown piece symbol {0:?}")]
    UnknownPieceSymbol(char),

    #[error("invalid arrow {0:?}: expected 2 or 4 digits")]
    InvalidArrow(String),

    #[error("invalid last move {0:?}: expected pairs of digits")]
    InvalidLastMove(String),
}
