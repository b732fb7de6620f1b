//! Theme colour palette.
//!
//! Process-wide configuration for the "modern" theme colours. Loaded once at
//! startup from a JSON file, written back on every change, and shared
//! through `AppState`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};

pub struct ColorVariable {
    pub name: &'static str,
    pub label: &'static str,
    pub default: &'static str,
}

pub const COLOR_VARIABLES: [ColorVariable; 7] = [
    ColorVariable {
        name: "--color-background",
        label: "Background",
        default: "#1a1a1a",
    },
    ColorVariable {
        name: "--color-surface",
        label: "Surface",
        default: "#242424",
    },
    ColorVariable {
        name: "--color-surface-hover",
        label: "Item",
        default: "#333333",
    },
    ColorVariable {
        name: "--color-primary",
        label: "Primary",
        default: "#c5b41e",
    },
    ColorVariable {
        name: "--color-primary-hover",
        label: "Primary hover",
        default: "#fbbf24",
    },
    ColorVariable {
        name: "--color-text",
        label: "Text",
        default: "#e5e7eb",
    },
    ColorVariable {
        name: "--color-text-secondary",
        label: "Secondary text",
        default: "#9ca3af",
    },
];

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("unknown colour variable '{0}'")]
    UnknownVariable(String),

    #[error("'{0}' is not a hex colour")]
    InvalidColor(String),

    #[error("palette file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("palette encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: HashMap<String, String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: COLOR_VARIABLES
                .iter()
                .map(|v| (v.name.to_string(), v.default.to_string()))
                .collect(),
        }
    }
}

impl Palette {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: &str, value: &str) -> Result<(), PaletteError> {
        if !COLOR_VARIABLES.iter().any(|v| v.name == name) {
            return Err(PaletteError::UnknownVariable(name.to_string()));
        }
        if !is_hex_color(value) {
            return Err(PaletteError::InvalidColor(value.to_string()));
        }
        self.colors.insert(name.to_string(), value.to_lowercase());
        Ok(())
    }

    pub fn entries(&self) -> Vec<PaletteEntry> {
        COLOR_VARIABLES
            .iter()
            .map(|v| PaletteEntry {
                name: v.name,
                label: v.label,
                value: self.get(v.name).unwrap_or(v.default).to_string(),
            })
            .collect()
    }

    /// CSS custom-property block, ready to paste into a stylesheet.
    pub fn css_block(&self) -> String {
        let mut css = String::from(":root {\n");
        for entry in self.entries() {
            css.push_str(&format!("  {}: {};\n", entry.name, entry.value));
        }
        css.push('}');
        css
    }

    /// Keeps known variables with valid values; everything else falls back
    /// to the default.
    fn sanitized(self) -> Self {
        let mut palette = Palette::default();
        for (name, value) in self.colors {
            if palette.set(&name, &value).is_err() {
                warn!("Ignoring palette entry {name}={value}");
            }
        }
        palette
    }
}

fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// File-backed palette shared by all requests.
pub struct PaletteStore {
    path: PathBuf,
    palette: RwLock<Palette>,
}

impl PaletteStore {
    /// Reads the palette file; a missing or unreadable file yields defaults.
    pub async fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let palette = match tokio::fs::read_to_string(&path).await {
            Ok(text) => match serde_json::from_str::<Palette>(&text) {
                Ok(palette) => {
                    info!("Loaded palette from {}", path.display());
                    palette.sanitized()
                }
                Err(e) => {
                    warn!("Palette file {} is invalid ({e}); using defaults", path.display());
                    Palette::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Palette::default(),
            Err(e) => {
                warn!("Could not read palette file {}: {e}", path.display());
                Palette::default()
            }
        };
        Self {
            path,
            palette: RwLock::new(palette),
        }
    }

    pub async fn snapshot(&self) -> Palette {
        self.palette.read().await.clone()
    }

    pub async fn set(&self, name: &str, value: &str) -> Result<Palette, PaletteError> {
        let mut palette = self.palette.write().await;
        let mut next = palette.clone();
        next.set(name, value)?;
        self.save(&next).await?;
        *palette = next.clone();
        Ok(next)
    }

    pub async fn reset(&self) -> Result<Palette, PaletteError> {
        let mut palette = self.palette.write().await;
        let next = Palette::default();
        self.save(&next).await?;
        *palette = next.clone();
        Ok(next)
    }

    async fn save(&self, palette: &Palette) -> Result<(), PaletteError> {
        let text = serde_json::to_string_pretty(palette)?;
        tokio::fs::write(&self.path, text).await?;
        Ok(())
    }
}
