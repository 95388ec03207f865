//! Patients Screen
//!
//! Patient form and table.

use leptos::prelude::*;

use crate::components::{use_screen, FormActions, RowActions};
use crate::models::Patient;

#[component]
pub fn PatientsScreen() -> impl IntoView {
    let screen = use_screen::<Patient>();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        screen.submit();
    };

    view! {
        <div class="container">
            <h2>"Patients"</h2>

            <form on:submit=on_submit>
                <input
                    placeholder="Name"
                    required=true
                    prop:value=move || screen.draft(|d| d.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        screen.edit_draft(|d| d.name = value);
                    }
                />
                <input
                    type="date"
                    required=true
                    prop:value=move || screen.draft(|d| d.birth_date.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        screen.edit_draft(|d| d.birth_date = value);
                    }
                />
                <input
                    type="email"
                    placeholder="Email"
                    required=true
                    prop:value=move || screen.draft(|d| d.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        screen.edit_draft(|d| d.email = value);
                    }
                />
                <input
                    placeholder="Phone"
                    required=true
                    prop:value=move || screen.draft(|d| d.phone.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        screen.edit_draft(|d| d.phone = value);
                    }
                />
                <FormActions
                    editing=Signal::derive(move || screen.is_editing())
                    add_label="Add Patient"
                    update_label="Update Patient"
                    on_cancel=Callback::new(move |_: ()| screen.cancel_edit())
                />
            </form>

            <Show
                when=move || !screen.is_loading()
                fallback=|| view! { <p>"Loading patients..."</p> }
            >
                <table>
                    <thead>
                        <tr><th>"Name"</th><th>"Email"</th><th>"Phone"</th><th>"Actions"</th></tr>
                    </thead>
                    <tbody>
                        // Keyed on the whole record so an edited row re-renders.
                        <For
                            each=move || screen.items()
                            key=|patient: &Patient| patient.clone()
                            children=move |patient: Patient| {
                                let id = patient.id.clone();
                                let row = patient.clone();
                                view! {
                                    <tr>
                                        <td>{patient.name}</td>
                                        <td>{patient.email}</td>
                                        <td>{patient.phone}</td>
                                        <RowActions
                                            on_edit=Callback::new(move |_: ()| screen.begin_edit(row.clone()))
                                            on_delete=Callback::new(move |_: ()| screen.remove(id.clone()))
                                        />
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
