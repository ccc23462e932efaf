use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub label_font_size: f32,
    /// width of orbit guides and rings, pixels
    pub line_thickness: f32,
    pub show_labels: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            label_font_size: 18.0,
            line_thickness: 1.0,
            show_labels: true,
        }
    }
}

pub fn load_settings_from_file(filename: &Path) -> Result<Settings, Box<dyn Error>> {
    let s = std::fs::read_to_string(filename)?;
    Ok(serde_yaml::from_str(&s)?)
}
