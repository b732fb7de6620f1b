use serde::Deserialize;

use crate::editor::section::{EditError, FieldValue, NestedEdit, NoList, SectionItem};
use crate::models::cv::LanguageItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LanguageField {
    Language,
    Fluency,
}

impl SectionItem for LanguageItem {
    type Field = LanguageField;
    type List = NoList;

    const SECTION: &'static str = "languages";
    const DRAGGABLE: bool = false;

    fn empty() -> Self {
        LanguageItem {
            language: String::new(),
            fluency: String::new(),
        }
    }

    fn set_field(&mut self, field: LanguageField, value: FieldValue) -> Result<(), EditError> {
        match field {
            LanguageField::Language => self.language = value.into_text("language")?,
            LanguageField::Fluency => self.fluency = value.into_text("fluency")?,
        }
        Ok(())
    }

    fn edit_list(&mut self, list: NoList, _edit: NestedEdit) -> Result<(), EditError> {
        match list {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::section::{ItemEdit, SectionEditor};

    fn lang(name: &str) -> LanguageItem {
        LanguageItem {
            language: name.to_string(),
            fluency: "Native".to_string(),
        }
    }

    #[test]
    fn test_remove_keeps_other_languages_in_order() {
        let items = vec![lang("Spanish"), lang("English"), lang("French")];
        let mut editor = SectionEditor::<LanguageItem>::new(3);
        let next = editor
            .apply(&items, ItemEdit::Remove { index: 1 })
            .unwrap()
            .unwrap();
        let names: Vec<_> = next.iter().map(|l| l.language.as_str()).collect();
        assert_eq!(names, ["Spanish", "French"]);
        assert_eq!(editor.panels().len(), 2);
    }

    #[test]
    fn test_flag_is_not_text() {
        let mut item = lang("Spanish");
        assert!(item
            .set_field(LanguageField::Fluency, FieldValue::Flag(true))
            .is_err());
        assert_eq!(item.fluency, "Native");
    }
}
