//! Editing sessions.
//!
//! A session bundles one document controller with the editor-side state
//! that is not part of the document: panel visibility per section, the JSON
//! tab buffer and the active view. Sessions live only in memory.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::editor::basics::{apply_basics, BasicsEdit};
use crate::editor::section::EditFor;
use crate::editor::{
    DocumentController, EditError, JsonView, JsonViewError, JsonViewState, SectionEditor,
};
use crate::models::cv::{
    CvDocument, EducationItem, LanguageItem, PortfolioItem, Section, SectionKey, SkillItem,
    WorkItem,
};

/// Which editor panel the user is looking at. Independent of the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveView {
    #[default]
    Basics,
    Work,
    Education,
    Skills,
    Languages,
    Portfolio,
    Json,
}

/// One client interaction, addressed to a section.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "section", content = "edit", rename_all = "snake_case")]
pub enum SectionEdit {
    Basics(BasicsEdit),
    Work(EditFor<WorkItem>),
    Education(EditFor<EducationItem>),
    Skills(EditFor<SkillItem>),
    Languages(EditFor<LanguageItem>),
    Portfolio(EditFor<PortfolioItem>),
}

#[derive(Debug, Clone)]
struct Editors {
    work: SectionEditor<WorkItem>,
    education: SectionEditor<EducationItem>,
    skills: SectionEditor<SkillItem>,
    languages: SectionEditor<LanguageItem>,
    portfolio: SectionEditor<PortfolioItem>,
}

impl Editors {
    fn for_document(doc: &CvDocument) -> Self {
        Self {
            work: SectionEditor::new(doc.work.len()),
            education: SectionEditor::new(doc.education.len()),
            skills: SectionEditor::new(doc.skills.len()),
            languages: SectionEditor::new(doc.languages.len()),
            portfolio: SectionEditor::new(doc.portfolio.len()),
        }
    }

    fn reset(&mut self, key: SectionKey, len: usize) {
        match key {
            SectionKey::Basics => {}
            SectionKey::Work => self.work.reset(len),
            SectionKey::Education => self.education.reset(len),
            SectionKey::Skills => self.skills.reset(len),
            SectionKey::Languages => self.languages.reset(len),
            SectionKey::Portfolio => self.portfolio.reset(len),
        }
    }

    fn on_item_added(&mut self, key: SectionKey, len: usize) {
        match key {
            SectionKey::Basics => {}
            SectionKey::Work => self.work.on_item_added(len),
            SectionKey::Education => self.education.on_item_added(len),
            SectionKey::Skills => self.skills.on_item_added(len),
            SectionKey::Languages => self.languages.on_item_added(len),
            SectionKey::Portfolio => self.portfolio.on_item_added(len),
        }
    }

    fn view(&self) -> PanelsView {
        PanelsView {
            work: self.work.panels().as_slice().to_vec(),
            education: self.education.panels().as_slice().to_vec(),
            skills: self.skills.panels().as_slice().to_vec(),
            languages: self.languages.panels().as_slice().to_vec(),
            portfolio: self.portfolio.panels().as_slice().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelsView {
    pub work: Vec<bool>,
    pub education: Vec<bool>,
    pub skills: Vec<bool>,
    pub languages: Vec<bool>,
    pub portfolio: Vec<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub revision: u64,
    pub active_view: ActiveView,
    pub document: CvDocument,
    pub panels: PanelsView,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    id: Uuid,
    controller: DocumentController,
    editors: Editors,
    json: JsonView,
    active: ActiveView,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl EditorSession {
    pub fn new(document: CvDocument) -> Self {
        let now = Utc::now();
        let editors = Editors::for_document(&document);
        let controller = DocumentController::new(document);
        let json = JsonView::new(&controller);
        Self {
            id: Uuid::new_v4(),
            controller,
            editors,
            json,
            active: ActiveView::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn document(&self) -> &CvDocument {
        self.controller.document()
    }

    #[cfg(test)]
    pub fn revision(&self) -> u64 {
        self.controller.revision()
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn set_active(&mut self, view: ActiveView) {
        self.active = view;
        self.touch();
    }

    /// Routes an edit to its section editor and commits the result.
    pub fn apply(&mut self, edit: SectionEdit) -> Result<(), EditError> {
        self.touch();
        let doc = self.controller.document();
        let replacement = match edit {
            SectionEdit::Basics(edit) => Some(Section::Basics(apply_basics(&doc.basics, edit)?)),
            SectionEdit::Work(edit) => self.editors.work.apply(&doc.work, edit)?.map(Section::Work),
            SectionEdit::Education(edit) => self
                .editors
                .education
                .apply(&doc.education, edit)?
                .map(Section::Education),
            SectionEdit::Skills(edit) => self
                .editors
                .skills
                .apply(&doc.skills, edit)?
                .map(Section::Skills),
            SectionEdit::Languages(edit) => self
                .editors
                .languages
                .apply(&doc.languages, edit)?
                .map(Section::Languages),
            SectionEdit::Portfolio(edit) => self
                .editors
                .portfolio
                .apply(&doc.portfolio, edit)?
                .map(Section::Portfolio),
        };
        if let Some(section) = replacement {
            self.controller.replace_section(section);
        }
        Ok(())
    }

    /// Replaces a section wholesale; its panels return to their defaults.
    pub fn replace_section(&mut self, section: Section) {
        self.touch();
        let key = section.key();
        self.controller.replace_section(section);
        let len = self.controller.document().section_len(key).unwrap_or_default();
        self.editors.reset(key, len);
    }

    pub fn add_item(&mut self, key: SectionKey) -> Result<usize, EditError> {
        self.touch();
        let len = self.controller.add_empty_item(key)?;
        self.editors.on_item_added(key, len);
        Ok(len)
    }

    /// Replaces the whole document and reseeds every view of it.
    pub fn replace_document(&mut self, document: CvDocument) {
        self.touch();
        self.controller.replace_document(document);
        self.editors = Editors::for_document(self.controller.document());
        self.json.reseed(&self.controller);
    }

    pub fn json_state(&mut self) -> JsonViewState {
        self.json.refresh(&self.controller);
        self.json.state()
    }

    pub fn edit_json(&mut self, text: String) -> JsonViewState {
        self.touch();
        self.json.refresh(&self.controller);
        self.json.edit(text)
    }

    pub fn apply_json(&mut self) -> Result<(), JsonViewError> {
        self.touch();
        self.json.apply(&mut self.controller)?;
        self.editors = Editors::for_document(self.controller.document());
        Ok(())
    }

    pub fn export(&self) -> serde_json::Result<String> {
        self.controller.export()
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            id: self.id,
            revision: self.controller.revision(),
            active_view: self.active,
            document: self.controller.document().clone(),
            panels: self.editors.view(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// In-memory registry of editing sessions.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, EditorSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, document: CvDocument) -> SessionView {
        let session = EditorSession::new(document);
        let view = session.view();
        self.sessions.write().await.insert(session.id(), session);
        info!("Created editor session {}", view.id);
        view
    }

    /// Runs `f` on the session under the store's write lock.
    /// Returns `None` when the session does not exist.
    pub async fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut EditorSession) -> R,
    ) -> Option<R> {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(&id).map(f)
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!("Dropped editor session {id}");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops sessions idle for longer than `ttl`. Returns how many went.
    pub async fn sweep(&self, ttl: Duration) -> usize {
        let cutoff = Utc::now() - ttl;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.updated_at() >= cutoff);
        before - sessions.len()
    }
}
