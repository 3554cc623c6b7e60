//! Application State Store
//!
//! Uses Leptos reactive_stores so views subscribe to the list field only.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::ListResult;
use crate::list::TodoList;
use crate::models::{Item, ItemId};

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The to-do items, owned exclusively by the list controller
    pub list: TodoList,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================
//
// Each helper takes one write guard, so a mutation notifies subscribers once
// and the placeholder is recomputed after the whole operation.

pub fn store_add_item(store: &AppStore, text: &str) -> ListResult<ItemId> {
    store.list().write().add_item(text)
}

pub fn store_toggle_item(store: &AppStore, id: ItemId) -> ListResult<bool> {
    store.list().write().toggle_completion(id)
}

pub fn store_remove_item(store: &AppStore, id: ItemId) -> ListResult<Item> {
    store.list().write().delete_item(id)
}

pub fn store_clear(store: &AppStore) -> usize {
    store.list().write().delete_all()
}
