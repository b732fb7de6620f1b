use serde::Deserialize;

use crate::editor::section::{apply_nested, EditError, FieldValue, NestedEdit, SectionItem};
use crate::models::cv::WorkItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkField {
    Company,
    Position,
    StartDate,
    EndDate,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkList {
    Highlights,
}

impl SectionItem for WorkItem {
    type Field = WorkField;
    type List = WorkList;

    const SECTION: &'static str = "work";
    const DRAGGABLE: bool = true;

    fn empty() -> Self {
        WorkItem {
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: None,
            summary: String::new(),
            highlights: Vec::new(),
        }
    }

    fn set_field(&mut self, field: WorkField, value: FieldValue) -> Result<(), EditError> {
        match field {
            WorkField::Company => self.company = value.into_text("company")?,
            WorkField::Position => self.position = value.into_text("position")?,
            WorkField::StartDate => self.start_date = value.into_text("startDate")?,
            WorkField::EndDate => self.end_date = value.into_optional_text("endDate")?,
            WorkField::Summary => self.summary = value.into_text("summary")?,
        }
        Ok(())
    }

    fn edit_list(&mut self, list: WorkList, edit: NestedEdit) -> Result<(), EditError> {
        match list {
            WorkList::Highlights => {
                self.highlights = apply_nested("highlights", &self.highlights, edit)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::section::{ItemEdit, SectionEditor};

    fn job(company: &str) -> WorkItem {
        WorkItem {
            company: company.to_string(),
            ..WorkItem::empty()
        }
    }

    fn companies(items: &[WorkItem]) -> Vec<&str> {
        items.iter().map(|w| w.company.as_str()).collect()
    }

    #[test]
    fn test_move_down_then_up_restores_order() {
        let items = vec![job("A"), job("B"), job("C")];
        let mut editor = SectionEditor::<WorkItem>::new(items.len());

        let down = editor
            .apply(&items, ItemEdit::MoveDown { index: 0 })
            .unwrap()
            .unwrap();
        assert_eq!(companies(&down), ["B", "A", "C"]);

        let up = editor
            .apply(&down, ItemEdit::MoveUp { index: 0 })
            .unwrap()
            .unwrap();
        assert_eq!(companies(&up), ["B", "A", "C"]);

        let back = editor
            .apply(&down, ItemEdit::MoveUp { index: 1 })
            .unwrap()
            .unwrap();
        assert_eq!(companies(&back), ["A", "B", "C"]);
    }

    #[test]
    fn test_set_field_is_copy_on_write() {
        let items = vec![job("A")];
        let mut editor = SectionEditor::<WorkItem>::new(1);
        let next = editor
            .apply(
                &items,
                ItemEdit::SetField {
                    index: 0,
                    field: WorkField::Company,
                    value: FieldValue::text("Acme"),
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(next[0].company, "Acme");
        assert_eq!(items[0].company, "A");
    }

    #[test]
    fn test_clearing_end_date_marks_ongoing() {
        let mut item = job("A");
        item.set_field(WorkField::EndDate, FieldValue::text("2023-07"))
            .unwrap();
        assert_eq!(item.end_date.as_deref(), Some("2023-07"));
        item.set_field(WorkField::EndDate, FieldValue::text("")).unwrap();
        assert_eq!(item.end_date, None);
    }

    #[test]
    fn test_highlight_edits_replace_the_item() {
        let items = vec![job("A")];
        let mut editor = SectionEditor::<WorkItem>::new(1);
        let added = editor
            .apply(
                &items,
                ItemEdit::Nested {
                    index: 0,
                    list: WorkList::Highlights,
                    edit: NestedEdit::Add,
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(added[0].highlights, vec![String::new()]);
        assert!(items[0].highlights.is_empty());
    }

    #[test]
    fn test_drag_reorder_carries_panel_state() {
        let items = vec![job("A"), job("B"), job("C")];
        let mut editor = SectionEditor::<WorkItem>::new(3);
        editor
            .apply(&items, ItemEdit::TogglePanel { index: 0 })
            .unwrap();
        assert_eq!(editor.panels().as_slice(), &[false, true, true]);

        let moved = editor
            .apply(&items, ItemEdit::Reorder { from: 0, to: 2 })
            .unwrap()
            .unwrap();
        assert_eq!(companies(&moved), ["B", "C", "A"]);
        assert_eq!(editor.panels().as_slice(), &[true, true, false]);
    }

    #[test]
    fn test_toggle_returns_no_replacement() {
        let items = vec![job("A")];
        let mut editor = SectionEditor::<WorkItem>::new(1);
        assert_eq!(
            editor.apply(&items, ItemEdit::TogglePanel { index: 0 }),
            Ok(None)
        );
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let items = vec![job("A")];
        let mut editor = SectionEditor::<WorkItem>::new(1);
        let err = editor
            .apply(&items, ItemEdit::Remove { index: 3 })
            .unwrap_err();
        assert!(matches!(err, EditError::IndexOutOfRange { index: 3, .. }));
    }
}
