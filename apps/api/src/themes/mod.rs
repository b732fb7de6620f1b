// Theme renderers: pure functions from a CV document to an HTML page.
// The set of themes is closed; names resolve through THEME_NAMES.

pub mod console;
pub mod html;
pub mod modern;
pub mod recipe;
pub mod retro;

use serde::Serialize;

use crate::models::cv::CvDocument;
use crate::palette::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Console,
    Retro,
    Modern,
    Recipe,
}

/// Accepted route names, including the legacy component names.
const THEME_NAMES: &[(&str, Theme)] = &[
    ("console", Theme::Console),
    ("consolecv", Theme::Console),
    ("retro", Theme::Retro),
    ("retrocv", Theme::Retro),
    ("mb", Theme::Retro),
    ("modern", Theme::Modern),
    ("recipe", Theme::Recipe),
];

impl Theme {
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        THEME_NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, theme)| *theme)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Console => "console",
            Theme::Retro => "retro",
            Theme::Modern => "modern",
            Theme::Recipe => "recipe",
        }
    }

    pub fn render(&self, doc: &CvDocument, palette: &Palette) -> String {
        match self {
            Theme::Console => console::render(doc),
            Theme::Retro => retro::render(doc),
            Theme::Modern => modern::render(doc, palette),
            Theme::Recipe => recipe::render(doc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(Theme::from_name("ConsoleCV"), Some(Theme::Console));
        assert_eq!(Theme::from_name("RetroCV"), Some(Theme::Retro));
        assert_eq!(Theme::from_name("modern"), Some(Theme::Modern));
        assert_eq!(Theme::from_name("../etc"), None);
    }

    #[test]
    fn test_every_theme_renders_an_empty_document() {
        let doc = CvDocument::default();
        for theme in [Theme::Console, Theme::Retro, Theme::Modern, Theme::Recipe] {
            let html = theme.render(&doc, &Palette::default());
            assert!(html.starts_with("<!DOCTYPE html>"), "{}", theme.as_str());
        }
    }
}
