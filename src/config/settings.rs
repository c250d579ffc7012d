use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::reconstructor::RenderStyle;
use crate::sampler::SamplerConfig;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Typeface used for every replacement glyph. `None` falls back to a
    /// monospace face resolved from the system font database.
    pub font_path: Option<PathBuf>,
    pub shift: i32,
    pub kernel_size_fac: f32,
    pub pixel_thresh: u8,
    pub downsample_fac: u8,
    pub render_style: RenderStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            font_path: None,
            shift: 0,
            kernel_size_fac: 0.05,
            pixel_thresh: 16,
            downsample_fac: 96,
            render_style: RenderStyle::Outlined,
        }
    }
}

impl Settings {
    pub fn from_yaml(yaml: &str) -> crate::error::Result<Self> {
        serde_yml::from_str(yaml).map_err(|e| {
            crate::error::OcrCipherError::config(format!("Failed to parse settings YAML: {e}"))
        })
    }

    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn sampler_config(&self) -> SamplerConfig {
        SamplerConfig {
            kernel_size_fac: self.kernel_size_fac,
            pixel_thresh: self.pixel_thresh,
            downsample_fac: self.downsample_fac,
        }
    }
}
