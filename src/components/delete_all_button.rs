//! Delete All Button Component

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::controller::use_list_controller;

/// Removes every item at once, without confirmation
#[component]
pub fn DeleteAllButton() -> impl IntoView {
    let ctrl = use_list_controller();
    let config = expect_context::<WidgetConfig>();

    view! {
        <button class="del-all" on:click=move |_| ctrl.delete_all()>
            {config.delete_all_label}
        </button>
    }
}
