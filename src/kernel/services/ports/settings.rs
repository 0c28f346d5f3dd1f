use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: ThemeSettings,
    #[serde(default)]
    pub editor: EditorSettings,
}

/// Startup theme plus optional gutter color overrides (`#rrggbb` or a color name).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_line_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_line_bg: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            name: Some("dark".to_string()),
            line_number_bg: None,
            line_number_fg: None,
            current_line_fg: None,
            current_line_bg: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSettings {
    #[serde(default = "default_tab_size")]
    pub tab_size: u8,
    #[serde(default = "default_true")]
    pub show_line_numbers: bool,
}

fn default_tab_size() -> u8 {
    4
}

fn default_true() -> bool {
    true
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            tab_size: default_tab_size(),
            show_line_numbers: true,
        }
    }
}
