//! UI Components
//!
//! Leptos components for the three entity screens.

mod screen_handle;
mod nav_bar;
mod form_actions;
mod row_actions;
mod patients_screen;
mod doctors_screen;
mod appointments_screen;

pub use screen_handle::use_screen;
pub use nav_bar::NavBar;
pub use form_actions::FormActions;
pub use row_actions::RowActions;
pub use patients_screen::PatientsScreen;
pub use doctors_screen::DoctorsScreen;
pub use appointments_screen::AppointmentsScreen;
