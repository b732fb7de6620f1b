use serde::Serialize;

use crate::editor::list_ops;

/// Collapse/expand state for the item panels of one section editor.
///
/// Kept parallel to the item list: every reorder applied to the items is
/// mirrored here, so a panel's open state travels with its item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PanelState {
    open: Vec<bool>,
}

impl PanelState {
    pub fn new(len: usize, open: bool) -> Self {
        Self {
            open: vec![open; len],
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    #[cfg(test)]
    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.open
    }

    pub fn reset(&mut self, len: usize, open: bool) {
        self.open = vec![open; len];
    }

    /// Pads or truncates to `len` without disturbing existing entries.
    pub fn sync(&mut self, len: usize, open: bool) {
        self.open.resize(len, open);
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(slot) = self.open.get_mut(index) {
            *slot = !*slot;
        }
    }

    pub fn push(&mut self, open: bool) {
        self.open.push(open);
    }

    pub fn move_up(&mut self, index: usize) {
        self.open = list_ops::move_item_up(&self.open, index);
    }

    pub fn move_down(&mut self, index: usize) {
        self.open = list_ops::move_item_down(&self.open, index);
    }

    pub fn remove(&mut self, index: usize) {
        self.open = list_ops::remove_item(&self.open, index);
    }

    pub fn reorder(&mut self, from: usize, to: usize) {
        self.open = list_ops::array_move(&self.open, from, to);
    }
}
