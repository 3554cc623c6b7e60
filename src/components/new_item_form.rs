//! New Item Form Component
//!
//! Text input plus "Add" button. The submit key adds the item as well.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::WidgetConfig;
use crate::controller::use_list_controller;

/// Input row for creating new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctrl = use_list_controller();
    let config = expect_context::<WidgetConfig>();

    view! {
        <div class="new-item-row">
            <input
                type="text"
                placeholder=config.input_placeholder
                node_ref=ctrl.input_ref
                prop:value=move || ctrl.draft.get()
                on:input=move |ev| {
                    let input = ev
                        .target()
                        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok());
                    if let Some(input) = input {
                        ctrl.set_draft(input.value());
                    }
                }
                on:keypress=move |ev: web_sys::KeyboardEvent| ctrl.on_key(&ev.key())
            />
            <button class="add-btn" on:click=move |_| {
                ctrl.submit_draft();
            }>
                {config.add_label}
            </button>
        </div>
    }
}
