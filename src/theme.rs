use serde::{Deserialize, Serialize};

use crate::layout::SquareClass;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub square_light: String,
    pub square_dark: String,
    pub square_light_last_move: String,
    pub square_dark_last_move: String,
    pub arrow_color: String,
    pub arrow_opacity: f32,
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            square_light: "#ffce9e".to_string(),
            square_dark: "#d18b47".to_string(),
            square_light_last_move: "#cdd16a".to_string(),
            square_dark_last_move: "#aaa23b".to_string(),
            arrow_color: "#888".to_string(),
            arrow_opacity: 0.5,
        }
    }

    pub fn blue() -> Self {
        Self {
            square_light: "#dee3e6".to_string(),
            square_dark: "#8ca2ad".to_string(),
            square_light_last_move: "#c3d887".to_string(),
            square_dark_last_move: "#92b166".to_string(),
            arrow_color: "#15781b".to_string(),
            arrow_opacity: 0.5,
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "classic" | "default" | "brown" => Some(Self::classic()),
            "blue" => Some(Self::blue()),
            _ => None,
        }
    }

    pub fn square_fill(&self, class: SquareClass) -> &str {
        match (class.dark, class.last_move) {
            (false, false) => &self.square_light,
            (true, false) => &self.square_dark,
            (false, true) => &self.square_light_last_move,
            (true, true) => &self.square_dark_last_move,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_palette_resolves_all_four_classes() {
        let theme = Theme::classic();
        let fill = |dark, last_move| theme.square_fill(SquareClass { dark, last_move }).to_string();
        assert_eq!(fill(false, false), "#ffce9e");
        assert_eq!(fill(true, false), "#d18b47");
        assert_eq!(fill(false, true), "#cdd16a");
        assert_eq!(fill(true, true), "#aaa23b");
    }

    #[test]
    fn by_name_knows_builtin_themes() {
        assert_eq!(Theme::by_name("default"), Some(Theme::classic()));
        assert_eq!(Theme::by_name("blue"), Some(Theme::blue()));
        assert_eq!(Theme::by_name("neon"), None);
    }
}
