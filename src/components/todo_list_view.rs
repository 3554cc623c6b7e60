//! Todo List View Component
//!
//! The list container with its placeholder row and item rows.

use leptos::prelude::*;

use crate::components::TodoItemRow;
use crate::config::WidgetConfig;
use crate::controller::use_list_controller;

/// Item list. The placeholder row stays in the DOM and is only shown while
/// the list is empty.
#[component]
pub fn TodoListView() -> impl IntoView {
    let ctrl = use_list_controller();
    let config = expect_context::<WidgetConfig>();

    let placeholder_display = move || {
        if ctrl.placeholder_visible() { "list-item" } else { "none" }
    };

    view! {
        <ul class="todo-list">
            <li class="default" style:display=placeholder_display>
                {config.empty_message}
            </li>
            <For
                each=move || ctrl.items()
                key=|item| item.id
                children=move |item| view! { <TodoItemRow item=item /> }
            />
        </ul>
    }
}
