//! Clinic Frontend App
//!
//! Root component: navigation plus whichever screen is selected.

use leptos::prelude::*;

use crate::components::{AppointmentsScreen, DoctorsScreen, NavBar, PatientsScreen};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::router::View;

#[component]
pub fn App() -> impl IntoView {
    let current_view = RwSignal::new(View::default());

    provide_context(AppContext::new(&ApiConfig::from_build_env()));

    view! {
        <div class="App">
            <h1>"Clinic Appointment System"</h1>

            <NavBar current_view=current_view />

            // Each switch mounts a fresh screen, which loads on mount
            {move || match current_view.get() {
                View::Patients => view! { <PatientsScreen /> }.into_any(),
                View::Doctors => view! { <DoctorsScreen /> }.into_any(),
                View::Appointments => view! { <AppointmentsScreen /> }.into_any(),
            }}
        </div>
    }
}
