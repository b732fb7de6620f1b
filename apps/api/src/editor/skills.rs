use serde::Deserialize;

use crate::editor::section::{apply_nested, EditError, FieldValue, NestedEdit, SectionItem};
use crate::models::cv::SkillItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillField {
    Name,
    Level,
    /// Whole comma-separated keyword text.
    Keywords,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillList {
    Keywords,
}

impl SectionItem for SkillItem {
    type Field = SkillField;
    type List = SkillList;

    const SECTION: &'static str = "skills";
    const DRAGGABLE: bool = false;

    fn empty() -> Self {
        SkillItem {
            name: String::new(),
            level: String::new(),
            keywords: Vec::new(),
        }
    }

    fn set_field(&mut self, field: SkillField, value: FieldValue) -> Result<(), EditError> {
        match field {
            SkillField::Name => self.name = value.into_text("name")?,
            SkillField::Level => self.level = value.into_text("level")?,
            SkillField::Keywords => self.keywords = value.into_list("keywords")?,
        }
        Ok(())
    }

    fn edit_list(&mut self, list: SkillList, edit: NestedEdit) -> Result<(), EditError> {
        match list {
            SkillList::Keywords => {
                self.keywords = apply_nested("keywords", &self.keywords, edit)?;
            }
        }
        Ok(())
    }
}
