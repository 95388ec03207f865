//! Row Actions Component

use leptos::prelude::*;

/// Edit / Delete buttons for one table row
#[component]
pub fn RowActions(
    #[prop(into)] on_edit: Callback<()>,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <td>
            <button class="action edit" on:click=move |_| on_edit.run(())>
                "Edit"
            </button>
            <button class="action delete" on:click=move |_| on_delete.run(())>
                "Delete"
            </button>
        </td>
    }
}
