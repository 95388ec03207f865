//! Doctors Screen

use leptos::prelude::*;

use crate::components::{use_screen, FormActions, RowActions};
use crate::models::Doctor;

#[component]
pub fn DoctorsScreen() -> impl IntoView {
    let screen = use_screen::<Doctor>();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        screen.submit();
    };

    view! {
        <div class="container">
            <h2>"Doctors"</h2>

            <form on:submit=on_submit>
                <input
                    placeholder="Doctor Name"
                    required=true
                    prop:value=move || screen.draft(|d| d.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        screen.edit_draft(|d| d.name = value);
                    }
                />
                <input
                    placeholder="Specialty"
                    required=true
                    prop:value=move || screen.draft(|d| d.specialty.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        screen.edit_draft(|d| d.specialty = value);
                    }
                />
                <FormActions
                    editing=Signal::derive(move || screen.is_editing())
                    add_label="Add Doctor"
                    update_label="Update Doctor"
                    on_cancel=Callback::new(move |_: ()| screen.cancel_edit())
                />
            </form>

            <Show
                when=move || !screen.is_loading()
                fallback=|| view! { <p>"Loading doctors..."</p> }
            >
                <table>
                    <thead>
                        <tr><th>"Name"</th><th>"Specialty"</th><th>"Actions"</th></tr>
                    </thead>
                    <tbody>
                        // Keyed on the whole record so an edited row re-renders.
                        <For
                            each=move || screen.items()
                            key=|doctor: &Doctor| doctor.clone()
                            children=move |doctor: Doctor| {
                                let id = doctor.id.clone();
                                let row = doctor.clone();
                                view! {
                                    <tr>
                                        <td>{doctor.name}</td>
                                        <td>{doctor.specialty}</td>
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
