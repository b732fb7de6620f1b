use serde::Serialize;
use thiserror::Error;

use crate::editor::controller::DocumentController;
use crate::models::cv::CvDocument;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JsonViewError {
    #[error("buffer is not valid JSON: {0}")]
    Syntax(String),

    #[error("JSON does not match the CV shape: {0}")]
    Shape(String),
}

/// What the JSON tab shows: the buffer and whether it parses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonViewState {
    pub text: String,
    pub valid: bool,
    pub error: Option<String>,
    pub dirty: bool,
}

/// Free-text JSON buffer over a [`DocumentController`].
///
/// Typing only re-validates the buffer. The document changes only on
/// [`JsonView::apply`], and then wholesale.
#[derive(Debug, Clone, Default)]
pub struct JsonView {
    text: String,
    error: Option<String>,
    dirty: bool,
    seeded_revision: Option<u64>,
}

impl JsonView {
    pub fn new(controller: &DocumentController) -> Self {
        let mut view = Self::default();
        view.reseed(controller);
        view
    }

    /// Refills the buffer from the document, discarding unapplied text.
    pub fn reseed(&mut self, controller: &DocumentController) {
        self.text = serialize(controller.document());
        self.error = None;
        self.dirty = false;
        self.seeded_revision = Some(controller.revision());
    }

    /// Reseeds when the document moved on and the buffer holds no edits.
    pub fn refresh(&mut self, controller: &DocumentController) {
        if !self.dirty && self.seeded_revision != Some(controller.revision()) {
            self.reseed(controller);
        }
    }

    pub fn edit(&mut self, text: String) -> JsonViewState {
        self.error = serde_json::from_str::<serde_json::Value>(&text)
            .err()
            .map(|e| e.to_string());
        self.text = text;
        self.dirty = true;
        self.state()
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn state(&self) -> JsonViewState {
        JsonViewState {
            text: self.text.clone(),
            valid: self.is_valid(),
            error: self.error.clone(),
            dirty: self.dirty,
        }
    }

    /// Replaces the whole document with the parsed buffer.
    ///
    /// A buffer without edits is first brought up to date, so applying it
    /// never rolls back section edits made since it was seeded. Refused
    /// while the buffer is invalid; the document is untouched on any error.
    pub fn apply(&mut self, controller: &mut DocumentController) -> Result<(), JsonViewError> {
        self.refresh(controller);
        if let Some(error) = &self.error {
            return Err(JsonViewError::Syntax(error.clone()));
        }
        let document = parse_document(&self.text)?;
        controller.replace_document(document);
        self.reseed(controller);
        Ok(())
    }
}

pub fn serialize(document: &CvDocument) -> String {
    // Plain owned data: serialization cannot fail.
    serde_json::to_string_pretty(document).unwrap_or_default()
}

/// Parses pasted text into a document, defaulting missing sections.
pub fn parse_document(text: &str) -> Result<CvDocument, JsonViewError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| JsonViewError::Syntax(e.to_string()))?;
    serde_json::from_value(value).map_err(|e| JsonViewError::Shape(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::{Section, WorkItem};

    #[test]
    fn test_seeded_from_document() {
        let controller = DocumentController::default();
        let view = JsonView::new(&controller);
        let state = view.state();
        assert!(state.valid);
        assert!(!state.dirty);
        assert_eq!(state.text, serialize(&CvDocument::default()));
        assert!(state.text.starts_with("{\n  \"basics\""));
    }

    #[test]
    fn test_invalid_text_flags_error_without_touching_document() {
        let mut controller = DocumentController::default();
        let mut view = JsonView::new(&controller);
        let state = view.edit("{\"basics\": ".to_string());
        assert!(!state.valid);
        assert!(state.error.is_some());
        assert!(matches!(
            view.apply(&mut controller),
            Err(JsonViewError::Syntax(_))
        ));
        assert_eq!(controller.revision(), 0);
    }

    #[test]
    fn test_partial_document_applies_with_empty_sections() {
        let mut controller = DocumentController::default();
        controller.replace_section(Section::Work(vec![WorkItem::default()]));
        let mut view = JsonView::new(&controller);
        assert!(view.edit(r#"{"basics":{"name":"X"}}"#.to_string()).valid);
        view.apply(&mut controller).unwrap();
        assert_eq!(controller.document().basics.name, "X");
        assert!(controller.document().work.is_empty());
        assert!(!view.state().dirty);
    }

    #[test]
    fn test_wrong_shape_is_refused() {
        let mut controller = DocumentController::default();
        let mut view = JsonView::new(&controller);
        assert!(view.edit(r#"{"work": "none"}"#.to_string()).valid);
        assert!(matches!(
            view.apply(&mut controller),
            Err(JsonViewError::Shape(_))
        ));
        assert_eq!(controller.document(), &CvDocument::default());
    }

    #[test]
    fn test_refresh_respects_unapplied_edits() {
        let mut controller = DocumentController::default();
        let mut view = JsonView::new(&controller);
        view.edit("{}".to_string());
        controller.replace_section(Section::Work(vec![WorkItem::default()]));
        view.refresh(&controller);
        assert_eq!(view.state().text, "{}");

        view.reseed(&controller);
        controller.replace_section(Section::Work(Vec::new()));
        view.refresh(&controller);
        assert_eq!(view.state().text, serialize(controller.document()));
    }

    #[test]
    fn test_clean_buffer_applies_current_document() {
        let mut controller = DocumentController::default();
        let mut view = JsonView::new(&controller);
        let work = vec![WorkItem {
            company: "Acme".into(),
            ..Default::default()
        }];
        controller.replace_section(Section::Work(work.clone()));

        view.apply(&mut controller).unwrap();
        assert_eq!(controller.document().work, work);
        assert_eq!(view.state().text, serialize(controller.document()));
    }
}
