use tracing::debug;

use crate::editor::section::{EditError, SectionItem};
use crate::models::cv::{
    CvDocument, EducationItem, LanguageItem, PortfolioItem, Section, SectionKey, SkillItem,
    WorkItem,
};

/// Owns the in-memory document for one editing session.
///
/// Mutation happens one section at a time. Each replacement bumps
/// `revision`, which callers use as a change signal.
#[derive(Debug, Clone, Default)]
pub struct DocumentController {
    document: CvDocument,
    revision: u64,
}

impl DocumentController {
    pub fn new(document: CvDocument) -> Self {
        Self {
            document,
            revision: 0,
        }
    }

    pub fn document(&self) -> &CvDocument {
        &self.document
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces exactly one section; every other section is left as is.
    pub fn replace_section(&mut self, section: Section) {
        let key = section.key();
        match section {
            Section::Basics(basics) => self.document.basics = basics,
            Section::Work(items) => self.document.work = items,
            Section::Education(items) => self.document.education = items,
            Section::Skills(items) => self.document.skills = items,
            Section::Languages(items) => self.document.languages = items,
            Section::Portfolio(items) => self.document.portfolio = items,
        }
        self.revision += 1;
        debug!(section = key.as_str(), revision = self.revision, "section replaced");
    }

    /// Appends the empty item of a repeating section. Returns the new length.
    pub fn add_empty_item(&mut self, key: SectionKey) -> Result<usize, EditError> {
        let doc = &self.document;
        let section = match key {
            SectionKey::Basics => return Err(EditError::NotACollection("basics")),
            SectionKey::Work => Section::Work(appended(&doc.work, WorkItem::empty())),
            SectionKey::Education => {
                Section::Education(appended(&doc.education, EducationItem::empty()))
            }
            SectionKey::Skills => Section::Skills(appended(&doc.skills, SkillItem::empty())),
            SectionKey::Languages => {
                Section::Languages(appended(&doc.languages, LanguageItem::empty()))
            }
            SectionKey::Portfolio => {
                Section::Portfolio(appended(&doc.portfolio, PortfolioItem::empty()))
            }
        };
        self.replace_section(section);
        Ok(self
            .document
            .section_len(key)
            .unwrap_or_default())
    }

    /// Swaps the whole document (JSON apply, remote import).
    pub fn replace_document(&mut self, document: CvDocument) {
        self.document = document;
        self.revision += 1;
        debug!(revision = self.revision, "document replaced");
    }

    /// Pretty JSON with two-space indentation.
    pub fn export(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.document)
    }
}

fn appended<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = items.to_vec();
    next.push(item);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::{Basics, Profile};
    use serde_json::json;

    fn populated() -> CvDocument {
        CvDocument {
            basics: Basics {
                name: "Grace".into(),
                profiles: vec![Profile {
                    network: "GitHub".into(),
                    url: "https://github.com/grace".into(),
                }],
                ..Default::default()
            },
            work: vec![WorkItem {
                company: "Navy".into(),
                ..WorkItem::empty()
            }],
            skills: vec![SkillItem {
                name: "COBOL".into(),
                ..SkillItem::empty()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_add_empty_item_touches_only_its_section() {
        for key in SectionKey::ALL.into_iter().filter(SectionKey::is_collection) {
            let mut controller = DocumentController::new(populated());
            let before = controller.document().clone();
            let len = controller.add_empty_item(key).unwrap();
            let after = controller.document();
            assert_eq!(Some(len), before.section_len(key).map(|n| n + 1));
            for other in SectionKey::ALL.into_iter().filter(|k| *k != key) {
                match other {
                    SectionKey::Basics => assert_eq!(after.basics, before.basics),
                    SectionKey::Work => assert_eq!(after.work, before.work),
                    SectionKey::Education => assert_eq!(after.education, before.education),
                    SectionKey::Skills => assert_eq!(after.skills, before.skills),
                    SectionKey::Languages => assert_eq!(after.languages, before.languages),
                    SectionKey::Portfolio => assert_eq!(after.portfolio, before.portfolio),
                }
            }
        }
    }

    #[test]
    fn test_empty_skill_item_is_exact() {
        let mut controller = DocumentController::default();
        controller.add_empty_item(SectionKey::Skills).unwrap();
        assert_eq!(
            serde_json::to_value(&controller.document().skills[0]).unwrap(),
            json!({"name": "", "level": "", "keywords": []})
        );
    }

    #[test]
    fn test_empty_work_item_omits_end_date() {
        let mut controller = DocumentController::default();
        controller.add_empty_item(SectionKey::Work).unwrap();
        assert_eq!(
            serde_json::to_value(&controller.document().work[0]).unwrap(),
            json!({"company":"","position":"","startDate":"","summary":"","highlights":[]})
        );
    }

    #[test]
    fn test_basics_is_not_a_collection() {
        let mut controller = DocumentController::default();
        assert_eq!(
            controller.add_empty_item(SectionKey::Basics),
            Err(EditError::NotACollection("basics"))
        );
        assert_eq!(controller.revision(), 0);
    }

    #[test]
    fn test_replace_section_leaves_siblings() {
        let mut controller = DocumentController::new(populated());
        let before = controller.document().clone();
        controller.replace_section(Section::Work(Vec::new()));
        let after = controller.document();
        assert!(after.work.is_empty());
        assert_eq!(after.basics, before.basics);
        assert_eq!(after.skills, before.skills);
        assert_eq!(after.education, before.education);
        assert_eq!(after.languages, before.languages);
        assert_eq!(after.portfolio, before.portfolio);
        assert_eq!(controller.revision(), 1);
    }

    #[test]
    fn test_export_round_trips() {
        let controller = DocumentController::new(populated());
        let text = controller.export().unwrap();
        assert!(text.contains("\n  \"basics\": {"));
        let back: CvDocument = serde_json::from_str(&text).unwrap();
        assert_eq!(&back, controller.document());
    }
}
