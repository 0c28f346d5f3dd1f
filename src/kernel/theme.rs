//! 主题：当前主题与行号区配色。
//!
//! `ThemeManager` is an ordinary value owned by `AppState`. Panes read
//! `line_number_colors()` once, when their surface is created; a later theme
//! change only reaches existing panes through an explicit `apply_theme` refresh.

use crate::kernel::services::ports::ThemeSettings;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Reset,
    Rgb(u8, u8, u8),
    Indexed(u8),
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Reset => write!(f, "reset"),
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Color::Indexed(i) => write!(f, "ansi({})", i),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Dark, Theme::Light];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match name.as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    fn line_number_colors(self) -> LineNumberColors {
        match self {
            Theme::Dark => LineNumberColors {
                bg: Color::Rgb(0x1e, 0x1e, 0x1e),
                text: Color::Rgb(0x85, 0x85, 0x85),
                current_line: Color::Rgb(0xc6, 0xc6, 0xc6),
                current_line_bg: Color::Rgb(0x28, 0x28, 0x28),
            },
            Theme::Light => LineNumberColors {
                bg: Color::Rgb(0xff, 0xff, 0xff),
                text: Color::Rgb(0x23, 0x78, 0x93),
                current_line: Color::Rgb(0x0b, 0x21, 0x6f),
                current_line_bg: Color::Rgb(0xf3, 0xf3, 0xf3),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

/// Gutter palette handed to an `EditorSurface`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineNumberColors {
    pub bg: Color,
    pub text: Color,
    pub current_line: Color,
    pub current_line_bg: Color,
}

impl Default for LineNumberColors {
    fn default() -> Self {
        Theme::default().line_number_colors()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ThemeManager {
    current: Theme,
    overrides: ThemeOverrides,
}

/// User overrides from `setting.json`; applied on top of every theme.
#[derive(Debug, Clone, Default)]
struct ThemeOverrides {
    bg: Option<Color>,
    text: Option<Color>,
    current_line: Option<Color>,
    current_line_bg: Option<Color>,
}

impl ThemeManager {
    pub fn new(theme: Theme) -> Self {
        Self {
            current: theme,
            overrides: ThemeOverrides::default(),
        }
    }

    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let theme = settings
            .name
            .as_deref()
            .and_then(Theme::from_name)
            .unwrap_or_default();
        let mut manager = Self::new(theme);
        manager.apply_settings(settings);
        manager
    }

    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let parse = |v: &Option<String>| v.as_deref().and_then(parse_color);
        self.overrides = ThemeOverrides {
            bg: parse(&settings.line_number_bg),
            text: parse(&settings.line_number_fg),
            current_line: parse(&settings.current_line_fg),
            current_line_bg: parse(&settings.current_line_bg),
        };
    }

    pub fn current_theme(&self) -> Theme {
        self.current
    }

    pub fn apply_theme(&mut self, theme: Theme) {
        if self.current != theme {
            tracing::info!(theme = theme.name(), "theme applied");
        }
        self.current = theme;
    }

    /// Dark and light swap.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = match self.current {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.apply_theme(next);
        next
    }

    pub fn line_number_colors(&self) -> LineNumberColors {
        let base = self.current.line_number_colors();
        LineNumberColors {
            bg: self.overrides.bg.unwrap_or(base.bg),
            text: self.overrides.text.unwrap_or(base.text),
            current_line: self.overrides.current_line.unwrap_or(base.current_line),
            current_line_bg: self.overrides.current_line_bg.unwrap_or(base.current_line_bg),
        }
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let v = v.to_ascii_lowercase();
    let c = match v.as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" => Color::Indexed(8),
        "white" => Color::Indexed(15),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/theme.rs"]
mod tests;
