use super::settings::EditorSettings;

#[derive(Clone, Debug)]
pub struct EditorConfig {
    pub tab_size: u8,
    pub show_line_numbers: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_size: 4,
            show_line_numbers: true,
        }
    }
}

impl EditorConfig {
    pub fn from_settings(settings: &EditorSettings) -> Self {
        Self {
            tab_size: settings.tab_size.clamp(1, 16),
            show_line_numbers: settings.show_line_numbers,
        }
    }

    /// Text inserted for a tab key press.
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.tab_size as usize)
    }
}
