use crate::ir::Board;
use crate::layout::{BoardLayout, Marker};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub fen: Option<String>,
    pub board_size: u32,
    pub flipped: bool,
    pub width: f32,
    pub glyphs: Vec<String>,
    pub squares: Vec<SquareDump>,
    pub markers: Vec<Marker>,
}

/// One playable square; light cells never hold pieces and are left out.
#[derive(Debug, Serialize)]
pub struct SquareDump {
    pub square: u32,
    pub x: u32,
    pub y: u32,
    pub px: f32,
    pub py: f32,
    pub class: &'static str,
    pub fill: String,
    pub piece: Option<char>,
}

impl LayoutDump {
    pub fn from_layout(layout: &BoardLayout, board: Option<&Board>) -> Self {
        let squares = layout
            .cells
            .iter()
            .filter_map(|cell| {
                let square = cell.square?;
                let piece = layout
                    .pieces
                    .iter()
                    .find(|placement| placement.square == square)
                    .map(|placement| placement.piece.symbol());
                Some(SquareDump {
                    square,
                    x: cell.x,
                    y: cell.y,
                    px: cell.px,
                    py: cell.py,
                    class: cell.class.css_class(),
                    fill: cell.fill.clone(),
                    piece,
                })
            })
            .collect();

        LayoutDump {
            fen: board.map(Board::fen),
            board_size: layout.board_size,
            flipped: layout.flipped,
            width: layout.width,
            glyphs: layout.glyphs.iter().map(|piece| piece.glyph_id()).collect(),
            squares,
            markers: layout.markers.clone(),
        }
    }
}

pub fn write_layout_dump(path: &Path, layout: &BoardLayout, board: Option<&Board>) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout, board);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
