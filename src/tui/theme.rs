use ratatui::style::Color;

use crate::model::config::UiConfig;
use crate::model::task::Category;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub accent: Color,
    pub red: Color,
    pub selection_bg: Color,
    pub progress_fill: Color,
    pub progress_empty: Color,
    pub study: Color,
    pub work: Color,
    pub personal: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x0E, 0x1C),
            text: Color::Rgb(0xC8, 0xC4, 0xE0),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x6E, 0x6A, 0x8A),
            accent: Color::Rgb(0x8F, 0x6F, 0xE0),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            selection_bg: Color::Rgb(0x2E, 0x22, 0x50),
            progress_fill: Color::Rgb(0x8F, 0x6F, 0xE0),
            progress_empty: Color::Rgb(0x2A, 0x26, 0x40),
            study: Color::Rgb(0x44, 0x88, 0xFF),
            work: Color::Rgb(0xFF, 0x66, 0xC4),
            personal: Color::Rgb(0x44, 0xDD, 0x88),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults.
    /// Unknown keys and bad hex values are ignored.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "accent" => theme.accent = color,
                    "red" => theme.red = color,
                    "selection_bg" => theme.selection_bg = color,
                    "progress_fill" => theme.progress_fill = color,
                    "progress_empty" => theme.progress_empty = color,
                    _ => {}
                }
            }
        }

        for (key, value) in &ui.category_colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "study" => theme.study = color,
                    "work" => theme.work = color,
                    "personal" => theme.personal = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Color for a category tag
    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Study => self.study,
            Category::Work => self.work,
            Category::Personal => self.personal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_color_handles_malformed_input() {
        assert_eq!(parse_hex_color("#FF4444"), Some(Color::Rgb(0xFF, 0x44, 0x44)));
        assert_eq!(parse_hex_color("FF4444"), None);
        assert_eq!(parse_hex_color("#FF44"), None);
        assert_eq!(parse_hex_color("#ZZZZZZ"), None);
    }

    #[test]
    fn from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("background".into(), "#000000".into());
        ui.colors.insert("unknown_key".into(), "#111111".into());
        ui.category_colors.insert("study".into(), "#112233".into());
        ui.category_colors.insert("work".into(), "bad".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        assert_eq!(theme.study, Color::Rgb(0x11, 0x22, 0x33));
        // Bad hex ignored, default stands
        assert_eq!(theme.work, Theme::default().work);
    }

    #[test]
    fn category_colors_are_distinct_by_default() {
        let theme = Theme::default();
        assert_ne!(theme.category_color(Category::Study), theme.category_color(Category::Work));
        assert_ne!(theme.category_color(Category::Work), theme.category_color(Category::Personal));
    }
}
