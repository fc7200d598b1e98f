use crossterm::style::Color;
use tries_core::config::{NamedColor, ThemeColor};

pub struct Theme {
    pub accent: Color,
    pub muted: Color,
    pub highlight_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&tries_core::config::ThemeConfig::default())
    }
}

impl Theme {
    pub fn from_config(config: &tries_core::config::ThemeConfig) -> Self {
        Self {
            accent: to_crossterm_color(&config.accent),
            muted: to_crossterm_color(&config.muted),
            highlight_fg: to_crossterm_color(&config.highlight_fg),
        }
    }
}

fn to_crossterm_color(color: &ThemeColor) -> Color {
    match color {
        ThemeColor::Rgb(r, g, b) => Color::Rgb {
            r: *r,
            g: *g,
            b: *b,
        },
        ThemeColor::Named(named) => match named {
            NamedColor::Black => Color::Black,
            NamedColor::Red => Color::Red,
            NamedColor::Green => Color::Green,
            NamedColor::Yellow => Color::Yellow,
            NamedColor::Blue => Color::Blue,
            NamedColor::Magenta => Color::Magenta,
            NamedColor::Cyan => Color::Cyan,
            NamedColor::White => Color::White,
            NamedColor::Gray => Color::DarkGrey,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tries_core::config::ThemeConfig;

    #[test]
    fn test_theme_defaults() {
        let theme = Theme::from_config(&ThemeConfig::default());
        assert_eq!(theme.accent, Color::Yellow);
        assert_eq!(theme.muted, Color::DarkGrey);
        assert_eq!(theme.highlight_fg, Color::White);
    }

    #[test]
    fn test_theme_custom() {
        let config = ThemeConfig {
            accent: ThemeColor::Named(NamedColor::Blue),
            muted: ThemeColor::Rgb(255, 0, 255),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.accent, Color::Blue);
        assert_eq!(theme.muted, Color::Rgb { r: 255, g: 0, b: 255 });
        assert_eq!(theme.highlight_fg, Color::White); // default
    }
}
