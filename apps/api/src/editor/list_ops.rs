//! Ordered-list primitives shared by every section editor.
//!
//! All functions take a slice and return a fresh `Vec`; the input is never
//! touched. Index preconditions are asserted: indices always come from the
//! current rendering of the same list, so a bad one is a caller bug.

pub fn move_item<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    assert!(
        from < items.len(),
        "move_item: from index {from} out of range for length {}",
        items.len()
    );
    let mut next = items.to_vec();
    let moved = next.remove(from);
    let to = to.min(next.len());
    next.insert(to, moved);
    next
}

pub fn remove_item<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    assert!(
        index < items.len(),
        "remove_item: index {index} out of range for length {}",
        items.len()
    );
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect()
}

/// No-op at the top of the list.
pub fn move_item_up<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    if index == 0 {
        return items.to_vec();
    }
    move_item(items, index, index - 1)
}

/// No-op at the bottom of the list.
pub fn move_item_down<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    if index + 1 == items.len() {
        return items.to_vec();
    }
    move_item(items, index, index + 1)
}

/// Drag-and-drop move: `to` is the final index of the dragged element.
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    move_item(items, from, to)
}
