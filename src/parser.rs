use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::FormatError;
use crate::ir::{Arrow, Board, Color, Piece, PieceKind};

static ENTRY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([KkGgPp])?([0-9]+)$").unwrap());
static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

const MAX_SEGMENTS: usize = 3;

/// Decodes placement notation such as `W:W31,K32:B1,2` into a square → piece
/// map.
///
/// The string is split on `:` into at most three segments. Each segment opens
/// with a color marker (`B` for Black, anything else for White) followed by
/// comma-separated entries: an optional kind marker (`K`, `G`, `P`) and a
/// square number. A leading turn indicator (`W` or `B` alone) is just a
/// segment without entries.
pub fn parse_placement(fen: &str, fields: u32) -> Result<BTreeMap<u32, Piece>, FormatError> {
    let fen = fen.trim();
    let segments: Vec<&str> = fen.split(':').collect();
    if segments.len() > MAX_SEGMENTS {
        return Err(FormatError::TooManySegments {
            count: segments.len(),
            fen: fen.to_string(),
        });
    }

    let mut pieces = BTreeMap::new();
    for segment in segments {
        let mut chars = segment.chars();
        let color = match chars.next() {
            Some('B') | Some('b') => Color::Black,
            _ => Color::White,
        };
        for entry in chars.as_str().split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            let (square, kind) = parse_entry(entry)?;
            if square == 0 || square > fields {
                return Err(FormatError::SquareOutOfRange { square, fields });
            }
            pieces.insert(square, Piece::new(kind, color));
        }
    }
    Ok(pieces)
}

fn parse_entry(entry: &str) -> Result<(u32, PieceKind), FormatError> {
    let Some(caps) = ENTRY_RE.captures(entry) else {
        // Valid piece symbols that are not kind markers (`m`) fall through to
        // a bad square.
        let unknown_marker = entry
            .chars()
            .next()
            .filter(|ch| ch.is_alphabetic() && PieceKind::from_symbol(*ch).is_none());
        if let Some(first) = unknown_marker {
            return Err(FormatError::UnknownPieceSymbol(first));
        }
        return Err(FormatError::InvalidSquare {
            token: entry.to_string(),
        });
    };
    let kind = match caps.get(1).and_then(|m| m.as_str().chars().next()) {
        Some(marker) => {
            PieceKind::from_symbol(marker).ok_or(FormatError::UnknownPieceSymbol(marker))?
        }
        None => PieceKind::Man,
    };
    let square = caps[2].parse::<u32>().map_err(|_| FormatError::InvalidSquare {
        token: entry.to_string(),
    })?;
    Ok((square, kind))
}

/// Encodes a board as `W:W<white entries>:B<black entries>`.
pub fn write_placement(board: &Board) -> String {
    let mut white = Vec::new();
    let mut black = Vec::new();
    for (square, piece) in board.pieces() {
        let marker = match piece.kind {
            PieceKind::Man => None,
            kind => Some(kind.symbol()),
        };
        let entry = match (marker, piece.color) {
            (Some(marker), Color::White) => format!("{}{square}", marker.to_ascii_uppercase()),
            (Some(marker), Color::Black) => format!("{marker}{square}"),
            (None, _) => square.to_string(),
        };
        match piece.color {
            Color::White => white.push(entry),
            Color::Black => black.push(entry),
        }
    }
    format!("W:W{}:B{}", white.join(","), black.join(","))
}

/// Splits a last-move digit string into two-digit square numbers, e.g.
/// `"3228"` → `[32, 28]`. A trailing single digit is read on its own.
pub fn parse_last_move(input: &str) -> Result<Vec<u32>, FormatError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Vec::new());
    }
    if !DIGITS_RE.is_match(input) {
        return Err(FormatError::InvalidLastMove(input.to_string()));
    }
    input
        .as_bytes()
        .chunks(2)
        .map(|chunk| {
            std::str::from_utf8(chunk)
                .ok()
                .and_then(|digits| digits.parse::<u32>().ok())
                .ok_or_else(|| FormatError::InvalidLastMove(input.to_string()))
        })
        .collect()
}

/// Parses one arrow token: `SS` marks a single square, `TTHH` runs from `TT`
/// to `HH`.
pub fn parse_arrow(token: &str) -> Result<Arrow, FormatError> {
    let token = token.trim();
    if !DIGITS_RE.is_match(token) || !matches!(token.len(), 2 | 4) {
        return Err(FormatError::InvalidArrow(token.to_string()));
    }
    let invalid = || FormatError::InvalidArrow(token.to_string());
    let tail = token[..2].parse::<u32>().map_err(|_| invalid())?;
    let head = if token.len() == 4 {
        token[2..].parse::<u32>().map_err(|_| invalid())?
    } else {
        tail
    };
    Ok(Arrow::new(tail, head))
}

/// Parses a comma-separated arrow list, skipping blank tokens.
pub fn parse_arrows(input: &str) -> Result<Vec<Arrow>, FormatError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(parse_arrow)
        .collect()
}
