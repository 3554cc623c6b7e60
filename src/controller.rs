//! List Controller
//!
//! Owns the item store, the text in the input field and a reference to the
//! input element. Constructed once in `App` and provided via Leptos context;
//! components address items by `ItemId` only.

use leptos::html;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::WidgetConfig;
use crate::error::ListError;
use crate::models::{Item, ItemId};
use crate::store::{self, AppState, AppStore, AppStateStoreFields};

#[derive(Clone, Copy)]
pub struct ListController {
    store: AppStore,
    /// Current input field text - read
    pub draft: ReadSignal<String>,
    /// Current input field text - write
    set_draft: WriteSignal<String>,
    /// The text input, focused again after every successful add
    pub input_ref: NodeRef<html::Input>,
    submit_key: StoredValue<String>,
}

impl ListController {
    pub fn new(config: &WidgetConfig) -> Self {
        let (draft, set_draft) = signal(String::new());
        Self {
            store: Store::new(AppState::default()),
            draft,
            set_draft,
            input_ref: NodeRef::new(),
            submit_key: StoredValue::new(config.submit_key.clone()),
        }
    }

    // ========================
    // Reads (tracked)
    // ========================

    pub fn items(&self) -> Vec<Item> {
        self.store.list().read().items().to_vec()
    }

    pub fn item(&self, id: ItemId) -> Option<Item> {
        self.store.list().read().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.store.list().read().len()
    }

    pub fn completed_count(&self) -> usize {
        self.store.list().read().completed_count()
    }

    pub fn placeholder_visible(&self) -> bool {
        self.store.list().read().placeholder_visible()
    }

    // ========================
    // Mutations
    // ========================

    pub fn set_draft(&self, text: String) {
        self.set_draft.set(text);
    }

    /// Add an item from `text`. Blank text is ignored without any feedback.
    ///
    /// On success the input field is cleared and focused for the next entry.
    pub fn add_item(&self, text: &str) -> Option<ItemId> {
        match store::store_add_item(&self.store, text) {
            Ok(id) => {
                self.set_draft.set(String::new());
                self.focus_input();
                Some(id)
            }
            Err(ListError::BlankText) => {
                log::debug!("ignoring blank input");
                None
            }
            Err(e) => {
                log::warn!("add failed: {}", e);
                None
            }
        }
    }

    /// Add an item from the current input field text
    pub fn submit_draft(&self) -> Option<ItemId> {
        let text = self.draft.get_untracked();
        self.add_item(&text)
    }

    /// Key press inside the input field; the submit key adds the draft
    pub fn on_key(&self, key: &str) {
        if self.submit_key.with_value(|submit| submit == key) {
            self.submit_draft();
        }
    }

    pub fn toggle(&self, id: ItemId) {
        match store::store_toggle_item(&self.store, id) {
            Ok(completed) => log::debug!("item {} completed={}", id, completed),
            Err(e) => log::warn!("toggle failed: {}", e),
        }
    }

    pub fn delete(&self, id: ItemId) {
        if let Err(e) = store::store_remove_item(&self.store, id) {
            log::warn!("delete failed: {}", e);
        }
    }

    pub fn delete_all(&self) {
        let removed = store::store_clear(&self.store);
        log::info!("cleared {} items", removed);
    }

    fn focus_input(&self) {
        let Some(input) = self.input_ref.get_untracked() else {
            return;
        };
        if let Err(e) = input.focus() {
            log::warn!("could not focus input: {:?}", e);
        }
    }
}

/// Get the list controller from context
pub fn use_list_controller() -> ListController {
    expect_context::<ListController>()
}
