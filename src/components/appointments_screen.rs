//! Appointments Screen
//!
//! Appointment form with patient/doctor pickers, and the schedule table.
//! Loads appointments, patients and doctors together.

use leptos::prelude::*;

use crate::components::{use_screen, FormActions, RowActions};
use crate::datetime;
use crate::models::{Appointment, Doctor, Patient};

#[component]
pub fn AppointmentsScreen() -> impl IntoView {
    let screen = use_screen::<Appointment>();
    let offset = datetime::viewer_offset();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        screen.submit();
    };

    view! {
        <div class="container">
            <h2>"Appointments"</h2>

            <form on:submit=on_submit>
                <select
                    required=true
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        screen.edit_draft(|d| d.patient_id = value);
                    }
                >
                    <option value="">"Select Patient"</option>
                    <For
                        each=move || screen.related().patients
                        key=|p: &Patient| p.clone()
                        children=move |p: Patient| {
                            let id = p.id.clone();
                            view! {
                                <option
                                    value=p.id
                                    prop:selected=move || screen.draft(|d| d.patient_id == id)
                                >
                                    {p.name}
                                </option>
                            }
                        }
                    />
                </select>

                <select
                    required=true
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        screen.edit_draft(|d| d.doctor_id = value);
                    }
                >
                    <option value="">"Select Doctor"</option>
                    <For
                        each=move || screen.related().doctors
                        key=|d: &Doctor| d.clone()
                        children=move |d: Doctor| {
                            let id = d.id.clone();
                            view! {
                                <option
                                    value=d.id
                                    prop:selected=move || screen.draft(|draft| draft.doctor_id == id)
                                >
                                    {d.name}
                                </option>
                            }
                        }
                    />
                </select>

                <input
                    type="datetime-local"
                    required=true
                    prop:value=move || screen.draft(|d| d.start_at.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        screen.edit_draft(|d| d.start_at = value);
                    }
                />
                <input
                    type="datetime-local"
                    required=true
                    prop:value=move || screen.draft(|d| d.end_at.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        screen.edit_draft(|d| d.end_at = value);
                    }
                />
                <input
                    placeholder="Notes (optional)"
                    prop:value=move || screen.draft(|d| d.notes.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        screen.edit_draft(|d| d.notes = value);
                    }
                />
                <FormActions
                    editing=Signal::derive(move || screen.is_editing())
                    add_label="Schedule Appointment"
                    update_label="Update Appointment"
                    on_cancel=Callback::new(move |_: ()| screen.cancel_edit())
                />
            </form>

            <Show
                when=move || !screen.is_loading()
                fallback=|| view! { <p>"Loading appointments..."</p> }
            >
                <table>
                    <thead>
                        <tr>
                            <th>"Patient"</th><th>"Doctor"</th><th>"Start"</th><th>"End"</th><th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        // Keyed on the whole record so an edited row re-renders.
                        <For
                            each=move || screen.items()
                            key=|appt: &Appointment| appt.clone()
                            children=move |appt: Appointment| {
                                let patient_ref = appt.patient.clone();
                                let doctor_ref = appt.doctor.clone();
                                let start = datetime::format_display(appt.start_at.as_deref(), offset);
                                let end = datetime::format_display(appt.end_at.as_deref(), offset);
                                let id = appt.id.clone();
                                view! {
                                    <tr>
                                        <td>{move || screen.related().patient_name(&patient_ref)}</td>
                                        <td>{move || screen.related().doctor_name(&doctor_ref)}</td>
                                        <td>{start}</td>
                                        <td>{end}</td>
                                        <RowActions
                                            on_edit=Callback::new(move |_: ()| screen.begin_edit(appt.clone()))
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
