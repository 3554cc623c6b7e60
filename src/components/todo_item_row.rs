//! Todo Item Row Component
//!
//! Text, completion checkbox and delete button for one item.

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::controller::use_list_controller;
use crate::models::Item;
use crate::style::ItemStyle;

/// A single item row in the list
#[component]
pub fn TodoItemRow(item: Item) -> impl IntoView {
    let ctrl = use_list_controller();
    let config = expect_context::<WidgetConfig>();

    let id = item.id;
    let theme = config.theme;
    let completed = move || ctrl.item(id).is_some_and(|i| i.completed);

    view! {
        <li
            class=move || if completed() { "todo-item completed" } else { "todo-item" }
            style=move || ItemStyle::for_item(completed(), &theme).to_css()
        >
            {item.text}
            <input
                type="checkbox"
                class="check"
                prop:checked=completed
                on:change=move |_| ctrl.toggle(id)
            />
            <button class="del-btn" on:click=move |_| ctrl.delete(id)>
                {config.delete_label}
            </button>
        </li>
    }
}
