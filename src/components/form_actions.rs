//! Form Actions Component
//!
//! Submit button whose label follows the edit cursor, plus Cancel while editing.

use leptos::prelude::*;

#[component]
pub fn FormActions(
    #[prop(into)] editing: Signal<bool>,
    add_label: &'static str,
    update_label: &'static str,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <button class="action edit" type="submit">
            {move || if editing.get() { update_label } else { add_label }}
        </button>
        <Show when=move || editing.get()>
            <button type="button" on:click=move |_| on_cancel.run(())>
                "Cancel"
            </button>
        </Show>
    }
}
