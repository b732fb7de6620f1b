//! Generic section editor.
//!
//! A section editor turns one client interaction into a whole new item list
//! for its section. It never mutates the list it was given: the slice is
//! cloned, the clone is edited, and the clone is handed back for the
//! document controller to swap in.

use std::fmt;
use std::marker::PhantomData;

use serde::Deserialize;
use thiserror::Error;

use crate::editor::list_ops;
use crate::editor::panels::PanelState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("index {index} out of range for {what} (length {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("unknown field '{field}' in {what}")]
    UnknownField { what: &'static str, field: String },

    #[error("section '{0}' is not a collection")]
    NotACollection(&'static str),

    #[error("section '{0}' does not support drag reordering")]
    ReorderUnsupported(&'static str),
}

impl EditError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        EditError::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub fn check_index(what: &'static str, index: usize, len: usize) -> Result<(), EditError> {
    if index < len {
        Ok(())
    } else {
        Err(EditError::IndexOutOfRange { what, index, len })
    }
}

/// Raw value sent for a field edit. `null` decodes as [`FieldValue::Clear`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Clear,
    Flag(bool),
    Count(u64),
    Text(String),
}

impl FieldValue {
    #[cfg(test)]
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Any text is accepted; counts are stringified.
    pub fn into_text(self, field: &str) -> Result<String, EditError> {
        match self {
            FieldValue::Text(s) => Ok(s),
            FieldValue::Clear => Ok(String::new()),
            FieldValue::Count(n) => Ok(n.to_string()),
            FieldValue::Flag(_) => Err(EditError::invalid(field, "expected text")),
        }
    }

    /// Empty text removes an optional field.
    pub fn into_optional_text(self, field: &str) -> Result<Option<String>, EditError> {
        let text = self.into_text(field)?;
        Ok(if text.is_empty() { None } else { Some(text) })
    }

    pub fn into_flag(self, field: &str) -> Result<bool, EditError> {
        match self {
            FieldValue::Flag(b) => Ok(b),
            FieldValue::Clear => Ok(false),
            _ => Err(EditError::invalid(field, "expected a boolean")),
        }
    }

    /// Zero, `null` and non-numeric text clear the count.
    pub fn into_count(self, field: &str) -> Result<Option<u64>, EditError> {
        match self {
            FieldValue::Count(n) => Ok(Some(n).filter(|n| *n > 0)),
            FieldValue::Text(s) => Ok(s.trim().parse::<u64>().ok().filter(|n| *n > 0)),
            FieldValue::Clear => Ok(None),
            FieldValue::Flag(_) => Err(EditError::invalid(field, "expected a number")),
        }
    }

    /// Comma-separated text becomes a trimmed list.
    pub fn into_list(self, field: &str) -> Result<Vec<String>, EditError> {
        let text = self.into_text(field)?;
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(text.split(',').map(|part| part.trim().to_string()).collect())
    }
}

/// An edit to a list nested one level inside an item (highlights, links, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum NestedEdit {
    Add,
    Set {
        index: usize,
        #[serde(default)]
        field: Option<String>,
        value: FieldValue,
    },
    MoveUp {
        index: usize,
    },
    MoveDown {
        index: usize,
    },
    Remove {
        index: usize,
    },
}

/// An element of a nested list.
pub trait NestedRecord: Clone {
    fn blank() -> Self;

    /// Replaces one field. Plain string lists take `field == None`.
    fn set(&mut self, field: Option<&str>, value: FieldValue) -> Result<(), EditError>;
}

impl NestedRecord for String {
    fn blank() -> Self {
        String::new()
    }

    fn set(&mut self, field: Option<&str>, value: FieldValue) -> Result<(), EditError> {
        if let Some(field) = field {
            return Err(EditError::UnknownField {
                what: "string entry",
                field: field.to_string(),
            });
        }
        *self = value.into_text("entry")?;
        Ok(())
    }
}

/// Applies a nested edit to `list`, returning the new list.
pub fn apply_nested<T: NestedRecord>(
    what: &'static str,
    list: &[T],
    edit: NestedEdit,
) -> Result<Vec<T>, EditError> {
    match edit {
        NestedEdit::Add => {
            let mut next = list.to_vec();
            next.push(T::blank());
            Ok(next)
        }
        NestedEdit::Set {
            index,
            field,
            value,
        } => {
            check_index(what, index, list.len())?;
            let mut next = list.to_vec();
            next[index].set(field.as_deref(), value)?;
            Ok(next)
        }
        NestedEdit::MoveUp { index } => {
            check_index(what, index, list.len())?;
            Ok(list_ops::move_item_up(list, index))
        }
        NestedEdit::MoveDown { index } => {
            check_index(what, index, list.len())?;
            Ok(list_ops::move_item_down(list, index))
        }
        NestedEdit::Remove { index } => {
            check_index(what, index, list.len())?;
            Ok(list_ops::remove_item(list, index))
        }
    }
}

/// Same as [`apply_nested`] for lists that are absent until first used.
pub fn apply_nested_optional<T: NestedRecord>(
    what: &'static str,
    list: Option<&[T]>,
    edit: NestedEdit,
) -> Result<Option<Vec<T>>, EditError> {
    let next = apply_nested(what, list.unwrap_or_default(), edit)?;
    Ok(Some(next))
}

/// Placeholder for sections whose items carry no nested lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum NoList {}

/// An item of a repeating section.
pub trait SectionItem: Clone {
    type Field: Copy + fmt::Debug;
    type List: Copy + fmt::Debug;

    const SECTION: &'static str;
    /// Whether drag-and-drop reordering is offered.
    const DRAGGABLE: bool;
    const PANELS_START_OPEN: bool = true;

    /// The fixed shape appended by "add item".
    fn empty() -> Self;

    fn set_field(&mut self, field: Self::Field, value: FieldValue) -> Result<(), EditError>;

    fn edit_list(&mut self, list: Self::List, edit: NestedEdit) -> Result<(), EditError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ItemEdit<F, L> {
    MoveUp {
        index: usize,
    },
    MoveDown {
        index: usize,
    },
    Remove {
        index: usize,
    },
    /// Drop of a dragged item: `to` is its final position.
    Reorder {
        from: usize,
        to: usize,
    },
    TogglePanel {
        index: usize,
    },
    SetField {
        index: usize,
        field: F,
        value: FieldValue,
    },
    Nested {
        index: usize,
        list: L,
        edit: NestedEdit,
    },
}

pub type EditFor<T> = ItemEdit<<T as SectionItem>::Field, <T as SectionItem>::List>;

/// Editor state for one repeating section.
#[derive(Debug, Clone)]
pub struct SectionEditor<T> {
    panels: PanelState,
    _item: PhantomData<fn() -> T>,
}

impl<T: SectionItem> SectionEditor<T> {
    pub fn new(len: usize) -> Self {
        Self {
            panels: PanelState::new(len, T::PANELS_START_OPEN),
            _item: PhantomData,
        }
    }

    pub fn panels(&self) -> &PanelState {
        &self.panels
    }

    /// Called after the whole section was replaced from outside the editor.
    pub fn reset(&mut self, len: usize) {
        self.panels.reset(len, T::PANELS_START_OPEN);
    }

    /// Called after the controller appended an empty item.
    pub fn on_item_added(&mut self, len: usize) {
        self.panels.sync(len.saturating_sub(1), T::PANELS_START_OPEN);
        self.panels.push(true);
    }

    /// Applies `edit` to `items`.
    ///
    /// Returns the replacement list, or `None` when only editor state
    /// (panel visibility) changed.
    pub fn apply(&mut self, items: &[T], edit: EditFor<T>) -> Result<Option<Vec<T>>, EditError> {
        self.panels.sync(items.len(), T::PANELS_START_OPEN);
        let len = items.len();

        match edit {
            ItemEdit::MoveUp { index } => {
                check_index(T::SECTION, index, len)?;
                self.panels.move_up(index);
                Ok(Some(list_ops::move_item_up(items, index)))
            }
            ItemEdit::MoveDown { index } => {
                check_index(T::SECTION, index, len)?;
                self.panels.move_down(index);
                Ok(Some(list_ops::move_item_down(items, index)))
            }
            ItemEdit::Remove { index } => {
                check_index(T::SECTION, index, len)?;
                self.panels.remove(index);
                Ok(Some(list_ops::remove_item(items, index)))
            }
            ItemEdit::Reorder { from, to } => {
                if !T::DRAGGABLE {
                    return Err(EditError::ReorderUnsupported(T::SECTION));
                }
                check_index(T::SECTION, from, len)?;
                check_index(T::SECTION, to, len)?;
                self.panels.reorder(from, to);
                Ok(Some(list_ops::array_move(items, from, to)))
            }
            ItemEdit::TogglePanel { index } => {
                check_index(T::SECTION, index, len)?;
                self.panels.toggle(index);
                Ok(None)
            }
            ItemEdit::SetField {
                index,
                field,
                value,
            } => {
                check_index(T::SECTION, index, len)?;
                let mut next = items.to_vec();
                next[index].set_field(field, value)?;
                Ok(Some(next))
            }
            ItemEdit::Nested { index, list, edit } => {
                check_index(T::SECTION, index, len)?;
                let mut next = items.to_vec();
                next[index].edit_list(list, edit)?;
                Ok(Some(next))
            }
        }
    }
}
