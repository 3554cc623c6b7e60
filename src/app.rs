//! To-Do List App
//!
//! Root component: builds the list controller once and lays out the widget.

use leptos::prelude::*;

use crate::components::{DeleteAllButton, ItemCount, NewItemForm, TodoListView};
use crate::config::WidgetConfig;
use crate::controller::ListController;

#[component]
pub fn App() -> impl IntoView {
    let config = WidgetConfig::load();
    let controller = ListController::new(&config);

    // Provide context to all children
    provide_context(controller);
    provide_context(config.clone());

    view! {
        <main class="todo-app">
            <h1>{config.title}</h1>

            <NewItemForm />

            <TodoListView />

            <div class="list-actions">
                <DeleteAllButton />
                <ItemCount />
            </div>
        </main>
    }
}
