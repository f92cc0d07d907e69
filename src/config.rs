use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SIZE: u32 = 360;
pub const MIN_SIZE: u32 = 16;
pub const MAX_SIZE: u32 = 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Output edge length in pixels, used when a request does not give one.
    pub size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { size: DEFAULT_SIZE }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub render: RenderConfig,
    /// CSS embedded into every rendered board.
    pub stylesheet: Option<String>,
}

pub fn clamp_size(size: u32) -> u32 {
    size.clamp(MIN_SIZE, MAX_SIZE)
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    square_light: Option<String>,
    square_dark: Option<String>,
    square_light_last_move: Option<String>,
    square_dark_last_move: Option<String>,
    arrow_color: Option<String>,
    arrow_opacity: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    size: Option<u32>,
    stylesheet: Option<String>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parses a JSON config; JSON5 (comments, trailing commas) is accepted too.
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let parsed: ConfigFile = match serde_json::from_str(contents) {
        Ok(parsed) => parsed,
        Err(json_err) => json5::from_str(contents)
            .map_err(|_| anyhow::anyhow!("Invalid config file: {json_err}"))?,
    };

    let mut config = Config::default();
    if let Some(theme_name) = parsed.theme.as_deref() {
        match Theme::by_name(theme_name) {
            Some(theme) => config.theme = theme,
            None => tracing::warn!(theme = theme_name, "unknown theme, keeping classic"),
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.square_light {
            config.theme.square_light = v;
        }
        if let Some(v) = vars.square_dark {
            config.theme.square_dark = v;
        }
        if let Some(v) = vars.square_light_last_move {
            config.theme.square_light_last_move = v;
        }
        if let Some(v) = vars.square_dark_last_move {
            config.theme.square_dark_last_move = v;
        }
        if let Some(v) = vars.arrow_color {
            config.theme.arrow_color = v;
        }
        if let Some(v) = vars.arrow_opacity {
            config.theme.arrow_opacity = v.clamp(0.0, 1.0);
        }
    }

    if let Some(size) = parsed.size {
        config.render.size = clamp_size(size);
    }
    config.stylesheet = parsed.stylesheet;

    Ok(config)
}
