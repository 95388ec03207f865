//! Navigation Bar Component
//!
//! Buttons for switching between the three screens.

use leptos::prelude::*;

use crate::router::View;

#[component]
pub fn NavBar(current_view: RwSignal<View>) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            {View::ALL.into_iter().map(|target| {
                let is_active = move || current_view.get() == target;
                view! {
                    <button
                        class=move || if is_active() { "nav-btn active" } else { "nav-btn" }
                        on:click=move |_| current_view.set(target)
                    >
                        {target.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
