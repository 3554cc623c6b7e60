//! To-Do List
//!
//! Ordered item collection and the mutations the widget performs on it.
//! Pure Rust: the reactive layer in `store` wraps it, nothing here touches the DOM.

use crate::error::{ListError, ListResult};
use crate::models::{Item, ItemId};

/// Ordered list of items, in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct TodoList {
    items: Vec<Item>,
    /// Next id to hand out; ids are never reused
    next_id: u32,
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// Whether the empty-state placeholder row should be shown.
    ///
    /// Derived from the item count on every call, never stored.
    pub fn placeholder_visible(&self) -> bool {
        self.is_empty()
    }

    /// Append a new item with the trimmed `text`.
    ///
    /// Blank or whitespace-only text is rejected with [`ListError::BlankText`]
    /// and leaves the list untouched.
    pub fn add_item(&mut self, text: &str) -> ListResult<ItemId> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ListError::BlankText);
        }

        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push(Item::new(id, text));
        log::debug!("added item {} ({} total)", id, self.items.len());
        Ok(id)
    }

    /// Flip the completion flag of `id`, returning the new value
    pub fn toggle_completion(&mut self, id: ItemId) -> ListResult<bool> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ListError::NotFound(id))?;
        item.completed = !item.completed;
        Ok(item.completed)
    }

    /// Remove `id` from the list, keeping the order of the remaining items
    pub fn delete_item(&mut self, id: ItemId) -> ListResult<Item> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(ListError::NotFound(id))?;
        let removed = self.items.remove(index);
        log::debug!("deleted item {} ({} left)", id, self.items.len());
        Ok(removed)
    }

    /// Remove every item at once, returning how many were removed
    pub fn delete_all(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        log::debug!("deleted all {} items", removed);
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(list: &TodoList) -> Vec<&str> {
        list.items().iter().map(|i| i.text.as_str()).collect()
    }

    /// Two items "A" and "B", both open
    fn list_ab() -> (TodoList, ItemId, ItemId) {
        let mut list = TodoList::new();
        let a = list.add_item("A").unwrap();
        let b = list.add_item("B").unwrap();
        (list, a, b)
    }

    #[test]
    fn test_new_list_shows_placeholder() {
        let list = TodoList::new();
        assert!(list.is_empty());
        assert!(list.placeholder_visible());
    }

    #[test]
    fn test_add_item_hides_placeholder() {
        let mut list = TodoList::new();
        let id = list.add_item("Buy milk").unwrap();

        assert_eq!(list.len(), 1);
        let item = list.get(id).unwrap();
        assert_eq!(item.text, "Buy milk");
        assert!(!item.completed);
        assert!(!list.placeholder_visible());
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let mut list = TodoList::new();
        for blank in ["", "  ", "\t", " \n "] {
            assert_eq!(list.add_item(blank), Err(ListError::BlankText));
        }
        assert_eq!(list.len(), 0);
        assert!(list.placeholder_visible());

        let (mut list, _, _) = list_ab();
        assert_eq!(list.add_item("   "), Err(ListError::BlankText));
        assert_eq!(texts(&list), vec!["A", "B"]);
        assert!(!list.placeholder_visible());
    }

    #[test]
    fn test_text_is_trimmed() {
        let mut list = TodoList::new();
        let id = list.add_item("  walk the dog \n").unwrap();
        assert_eq!(list.get(id).unwrap().text, "walk the dog");
    }

    #[test]
    fn test_insertion_order_and_duplicates() {
        let mut list = TodoList::new();
        list.add_item("A").unwrap();
        list.add_item("B").unwrap();
        list.add_item("A").unwrap();
        assert_eq!(texts(&list), vec!["A", "B", "A"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_toggle_only_affects_target() {
        let (mut list, a, b) = list_ab();

        assert_eq!(list.toggle_completion(a), Ok(true));
        assert!(list.get(a).unwrap().completed);
        assert!(!list.get(b).unwrap().completed);
        assert_eq!(texts(&list), vec!["A", "B"]);
        assert_eq!(list.completed_count(), 1);
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let (mut list, a, _) = list_ab();
        let before = list.clone();

        list.toggle_completion(a).unwrap();
        assert_eq!(list.toggle_completion(a), Ok(false));
        assert_eq!(list, before);
    }

    #[test]
    fn test_delete_removes_that_item() {
        let (mut list, a, b) = list_ab();

        let removed = list.delete_item(a).unwrap();
        assert_eq!(removed.text, "A");
        assert_eq!(list.len(), 1);
        assert!(list.get(a).is_none());
        assert!(list.get(b).is_some());
        assert!(!list.placeholder_visible());
    }

    #[test]
    fn test_delete_picks_the_right_duplicate() {
        let mut list = TodoList::new();
        let first = list.add_item("same").unwrap();
        let second = list.add_item("same").unwrap();
        list.toggle_completion(second).unwrap();

        list.delete_item(first).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].id, second);
        assert!(list.items()[0].completed);
    }

    #[test]
    fn test_delete_last_item_shows_placeholder() {
        let mut list = TodoList::new();
        let id = list.add_item("only").unwrap();
        list.delete_item(id).unwrap();
        assert!(list.placeholder_visible());
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let (mut list, a, _) = list_ab();
        list.delete_item(a).unwrap();

        assert_eq!(list.delete_item(a), Err(ListError::NotFound(a)));
        assert_eq!(list.toggle_completion(a), Err(ListError::NotFound(a)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_delete_all_empties_any_list() {
        let mut empty = TodoList::new();
        assert_eq!(empty.delete_all(), 0);
        assert!(empty.placeholder_visible());

        let mut one = TodoList::new();
        one.add_item("x").unwrap();
        assert_eq!(one.delete_all(), 1);
        assert!(one.is_empty());

        let (mut many, _, _) = list_ab();
        many.add_item("C").unwrap();
        assert_eq!(many.delete_all(), 3);
        assert_eq!(many.len(), 0);
        assert!(many.placeholder_visible());
    }

    #[test]
    fn test_ids_not_reused_after_delete_all() {
        let (mut list, _, b) = list_ab();
        list.delete_all();
        let c = list.add_item("C").unwrap();
        assert!(c > b);
    }

    #[test]
    fn test_placeholder_tracks_emptiness_over_sequence() {
        let mut list = TodoList::new();
        let mut ids = Vec::new();

        for step in 0..12u32 {
            match step % 4 {
                0 | 1 => ids.push(list.add_item(&format!("task {}", step)).unwrap()),
                2 => {
                    if let Some(id) = ids.pop() {
                        list.delete_item(id).unwrap();
                    }
                }
                _ => {
                    let _ = list.add_item(" ");
                    if step % 8 == 7 {
                        list.delete_all();
                        ids.clear();
                    }
                }
            }
            assert_eq!(list.placeholder_visible(), list.len() == 0, "step {}", step);
            assert_eq!(list.len(), ids.len(), "step {}", step);
        }
    }
}
