//! Item Count Component

use leptos::prelude::*;

use crate::controller::use_list_controller;

/// Footer line: "3 items, 1 done"
#[component]
pub fn ItemCount() -> impl IntoView {
    let ctrl = use_list_controller();

    view! {
        <p class="item-count">
            {move || format!("{} items, {} done", ctrl.len(), ctrl.completed_count())}
        </p>
    }
}
