use crate::config::{clamp_size, load_config};
use crate::glyphs::PieceSet;
use crate::ir::Piece;
use crate::layout::compute_layout;
use crate::layout_dump::write_layout_dump;
use crate::render::{render_piece, write_output_png, write_output_svg};
use crate::request::BoardRequest;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dbr", version, about = "Draughts board renderer (placement notation to SVG/PNG)")]
pub struct Args {
    /// Full request query string, e.g. "fen=W:W31:B1&orientation=black"
    #[arg(short = 'q', long = "query", conflicts_with_all = ["fen", "piece"])]
    pub query: Option<String>,

    /// Placement notation, e.g. "W:W31,32:B1,K2"
    #[arg(short = 'f', long = "fen")]
    pub fen: Option<String>,

    /// Squares per side (even, 2 to 100)
    #[arg(short = 'b', long = "boardSize")]
    pub board_size: Option<u32>,

    /// Output size in pixels (clamped to 16..=1024)
    #[arg(short = 's', long = "size")]
    pub size: Option<u32>,

    /// Last move as two-digit squares, e.g. 3228
    #[arg(long = "lastMove")]
    pub last_move: Option<String>,

    /// Comma-separated arrows: SS for a circle, TTHH for an arrow
    #[arg(short = 'a', long = "arrows")]
    pub arrows: Option<String>,

    /// Side shown at the bottom
    #[arg(long = "orientation", value_enum)]
    pub orientation: Option<Side>,

    /// Render a single piece icon instead of a board (m, k, g, p; uppercase for White)
    #[arg(short = 'p', long = "piece", conflicts_with = "fen")]
    pub piece: Option<char>,

    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme, themeVariables, size, stylesheet)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// CSS file embedded into the board
    #[arg(long = "css")]
    pub css: Option<PathBuf>,

    /// Write the computed layout as JSON
    #[arg(long = "dumpLayout")]
    pub dump_layout: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = load_config(args.config.as_deref())?;
    if let Some(css) = args.css.as_deref() {
        config.stylesheet = Some(std::fs::read_to_string(css)?);
    }

    if let Some(symbol) = args.piece {
        let piece = Piece::from_symbol(symbol)?;
        let size = clamp_size(args.size.unwrap_or(config.render.size));
        let svg = render_piece(piece, Some(size), &PieceSet::standard());
        return write_output(&svg, &args);
    }

    let request = match args.query.as_deref() {
        Some(query) => BoardRequest::from_query(query)?,
        None => BoardRequest::from_pairs(request_pairs(&args))?,
    };
    let svg = request.render_svg(&config);

    if let Some(path) = args.dump_layout.as_deref() {
        let layout = compute_layout(Some(&request.board), &request.render_options(&config));
        write_layout_dump(path, &layout, Some(&request.board))?;
    }

    write_output(&svg, &args)
}

fn write_output(svg: &str, args: &Args) -> Result<()> {
    match args.output_format {
        OutputFormat::Svg => write_output_svg(svg, args.output.as_deref()),
        OutputFormat::Png => {
            let output = ensure_output(args.output.as_deref(), "png")?;
            write_output_png(svg, output)
        }
    }
}

fn ensure_output<'a>(output: Option<&'a Path>, ext: &str) -> Result<&'a Path> {
    output.ok_or_else(|| anyhow::anyhow!("Output path required for {} output", ext))
}

/// Individual flags expressed as the query parameters a request would carry.
fn request_pairs(args: &Args) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    let mut push = |key: &str, value: Option<String>| {
        if let Some(value) = value {
            pairs.push((key.to_string(), value));
        }
    };
    push("fen", args.fen.clone());
    push("boardSize", args.board_size.map(|v| v.to_string()));
    push("size", args.size.map(|v| v.to_string()));
    push("lastMove", args.last_move.clone());
    push("arrows", args.arrows.clone());
    push(
        "orientation",
        args.orientation.map(|side| match side {
            Side::White => "white".to_string(),
            Side::Black => "black".to_string(),
        }),
    );
    pairs
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
