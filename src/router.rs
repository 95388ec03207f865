//! View Router
//!
//! Which of the three screens is showing. Pure selection state.

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Patients,
    Doctors,
    Appointments,
}

impl View {
    /// Navigation order
    pub const ALL: [View; 3] = [View::Patients, View::Doctors, View::Appointments];

    pub fn label(self) -> &'static str {
        match self {
            View::Patients => "Patients",
            View::Doctors => "Doctors",
            View::Appointments => "Appointments",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_patients() {
        assert_eq!(View::default(), View::Patients);
    }

    #[test]
    fn test_nav_labels_in_order() {
        let labels: Vec<&str> = View::ALL.iter().map(|v| v.label()).collect();
        assert_eq!(labels, vec!["Patients", "Doctors", "Appointments"]);
    }
}
