use draughts_board_renderer::parser::{parse_arrows, parse_last_move};
use draughts_board_renderer::{RenderOptions, Theme, render_with_options};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoardRenderOptions {
    board_size: Option<u32>,
    theme: Option<String>,
    orientation: Option<String>,
    last_move: Option<String>,
    arrows: Option<String>,
    size: Option<u32>,
    stylesheet: Option<String>,
}

fn build_render_options(options: BoardRenderOptions) -> Result<RenderOptions, String> {
    let mut render_options = RenderOptions::default();

    if let Some(theme) = options.theme.as_deref().and_then(Theme::by_name) {
        render_options.theme = theme;
    }
    render_options.flipped = options.orientation.as_deref() == Some("black");
    if let Some(last_move) = options.last_move.as_deref() {
        render_options.last_move = parse_last_move(last_move).map_err(|error| error.to_string())?;
    }
    if let Some(arrows) = options.arrows.as_deref() {
        render_options.arrows = parse_arrows(arrows).map_err(|error| error.to_string())?;
    }
    render_options.size = options.size;
    render_options.stylesheet = options.stylesheet;

    Ok(render_options)
}

#[wasm_bindgen]
pub fn render_board_svg(fen: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<BoardRenderOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        BoardRenderOptions::default()
    };

    let board_size = options.board_size.unwrap_or(10);
    let render_options = build_render_options(options).map_err(|error| JsValue::from_str(&error))?;
    render_with_options(fen, board_size, &render_options)
        .map_err(|error| JsValue::from_str(&error.to_string()))
}
