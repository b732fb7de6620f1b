use serde::Deserialize;

use crate::editor::section::{EditError, FieldValue, NestedEdit, NoList, SectionItem};
use crate::models::cv::EducationItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    Institution,
    Area,
    StudyType,
    StartDate,
    EndDate,
}

impl SectionItem for EducationItem {
    type Field = EducationField;
    type List = NoList;

    const SECTION: &'static str = "education";
    const DRAGGABLE: bool = false;

    fn empty() -> Self {
        EducationItem {
            institution: String::new(),
            area: String::new(),
            study_type: String::new(),
            start_date: String::new(),
            end_date: None,
        }
    }

    fn set_field(&mut self, field: EducationField, value: FieldValue) -> Result<(), EditError> {
        match field {
            EducationField::Institution => self.institution = value.into_text("institution")?,
            EducationField::Area => self.area = value.into_text("area")?,
            EducationField::StudyType => self.study_type = value.into_text("studyType")?,
            EducationField::StartDate => self.start_date = value.into_text("startDate")?,
            EducationField::EndDate => self.end_date = value.into_optional_text("endDate")?,
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
    use serde_json::json;

    #[test]
    fn test_empty_item_shape() {
        assert_eq!(
            serde_json::to_value(EducationItem::empty()).unwrap(),
            json!({"institution":"","area":"","studyType":"","startDate":""})
        );
    }

    #[test]
    fn test_drag_reorder_is_unsupported() {
        let items = vec![EducationItem::empty(), EducationItem::empty()];
        let mut editor = SectionEditor::<EducationItem>::new(2);
        assert_eq!(
            editor.apply(&items, ItemEdit::Reorder { from: 0, to: 1 }),
            Err(EditError::ReorderUnsupported("education"))
        );
    }

    #[test]
    fn test_set_study_type() {
        let items = vec![EducationItem::empty()];
        let mut editor = SectionEditor::<EducationItem>::new(1);
        let next = editor
            .apply(
                &items,
                ItemEdit::SetField {
                    index: 0,
                    field: EducationField::StudyType,
                    value: FieldValue::text("BSc"),
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(next[0].study_type, "BSc");
    }

    #[test]
    fn test_nested_edit_has_no_list_to_name() {
        let decoded = serde_json::from_value::<ItemEdit<EducationField, NoList>>(
            json!({"op":"nested","index":0,"list":"highlights","edit":{"op":"add"}}),
        );
        assert!(decoded.is_err());
    }
}
