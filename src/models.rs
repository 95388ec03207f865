//! Frontend Models
//!
//! Records as the clinic backend returns them, and the drafts the forms
//! send back. All identities are the backend's opaque `_id` strings.

use std::fmt::Debug;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::commands::{self, RemoteApi};
use crate::datetime;
use crate::error::ApiResult;

/// Shown when an appointment reference cannot be resolved to a name
pub const UNKNOWN_NAME: &str = "Unknown";

/// String field the backend may send as `null`; reads as empty.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A server-owned record kind with its own collection endpoint
#[async_trait(?Send)]
pub trait Entity: Clone + PartialEq + Debug + DeserializeOwned + Send + Sync + 'static {
    /// Form-side representation sent on create/update
    type Draft: Clone + Default + PartialEq + Debug + Serialize + Send + Sync + 'static;
    /// Other collections the screen needs alongside its own list
    type Related: Clone + Default + PartialEq + Debug + Send + Sync + 'static;

    /// Path segment of the collection, e.g. `patients`
    const COLLECTION: &'static str;
    /// Singular noun used in prompts and alerts
    const NOUN: &'static str;

    fn id(&self) -> &str;

    /// Copy this record into form encoding
    fn to_draft(&self) -> Self::Draft;

    /// Fetch whatever `Related` holds. Runs after the screen's own list.
    async fn fetch_related(api: &dyn RemoteApi) -> ApiResult<Self::Related>;
}

// ========================
// Patient
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub birth_date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDraft {
    pub name: String,
    /// `YYYY-MM-DD`
    pub birth_date: String,
    pub email: String,
    pub phone: String,
}

#[async_trait(?Send)]
impl Entity for Patient {
    type Draft = PatientDraft;
    type Related = ();

    const COLLECTION: &'static str = "patients";
    const NOUN: &'static str = "patient";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> PatientDraft {
        PatientDraft {
            name: self.name.clone(),
            birth_date: datetime::to_date_input(&self.birth_date),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }

    async fn fetch_related(_api: &dyn RemoteApi) -> ApiResult<()> {
        Ok(())
    }
}

// ========================
// Doctor
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Doctor {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub specialty: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DoctorDraft {
    pub name: String,
    pub specialty: String,
}

#[async_trait(?Send)]
impl Entity for Doctor {
    type Draft = DoctorDraft;
    type Related = ();

    const COLLECTION: &'static str = "doctors";
    const NOUN: &'static str = "doctor";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> DoctorDraft {
        DoctorDraft {
            name: self.name.clone(),
            specialty: self.specialty.clone(),
        }
    }

    async fn fetch_related(_api: &dyn RemoteApi) -> ApiResult<()> {
        Ok(())
    }
}

// ========================
// Appointment
// ========================

/// Reference from an appointment to a patient or doctor.
///
/// The backend sends either the bare id or the joined record; both decode
/// into this shape, with the joined record's name kept for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RefWire")]
pub struct EntityRef {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RefWire {
    Id(String),
    Embedded {
        #[serde(rename = "_id", default, deserialize_with = "null_as_empty")]
        id: String,
        #[serde(default)]
        name: Option<String>,
    },
    Missing,
}

impl From<RefWire> for EntityRef {
    fn from(wire: RefWire) -> Self {
        match wire {
            RefWire::Id(id) => EntityRef { id, name: None },
            RefWire::Embedded { id, name } => EntityRef { id, name },
            RefWire::Missing => EntityRef::default(),
        }
    }
}

impl EntityRef {
    pub fn bare(id: impl Into<String>) -> Self {
        Self { id: id.into(), name: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "patientId", default)]
    pub patient: EntityRef,
    #[serde(rename = "doctorId", default)]
    pub doctor: EntityRef,
    #[serde(default)]
    pub start_at: Option<String>,
    #[serde(default)]
    pub end_at: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDraft {
    pub patient_id: String,
    pub doctor_id: String,
    /// `YYYY-MM-DDTHH:MM`
    pub start_at: String,
    /// `YYYY-MM-DDTHH:MM`
    pub end_at: String,
    pub notes: String,
}

/// Patients and doctors offered by the appointment form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentOptions {
    pub patients: Vec<Patient>,
    pub doctors: Vec<Doctor>,
}

impl AppointmentOptions {
    pub fn patient_name(&self, reference: &EntityRef) -> String {
        resolve_name(reference, self.patients.iter().map(|p| (p.id.as_str(), p.name.as_str())))
    }

    pub fn doctor_name(&self, reference: &EntityRef) -> String {
        resolve_name(reference, self.doctors.iter().map(|d| (d.id.as_str(), d.name.as_str())))
    }
}

/// Embedded name first, then the loaded list, then `Unknown`.
fn resolve_name<'a>(reference: &EntityRef, mut known: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    if let Some(name) = reference.name.as_deref().filter(|n| !n.is_empty()) {
        return name.to_string();
    }
    known
        .find(|(id, _)| !reference.id.is_empty() && *id == reference.id)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

#[async_trait(?Send)]
impl Entity for Appointment {
    type Draft = AppointmentDraft;
    type Related = AppointmentOptions;

    const COLLECTION: &'static str = "appointments";
    const NOUN: &'static str = "appointment";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_draft(&self) -> AppointmentDraft {
        AppointmentDraft {
            patient_id: self.patient.id.clone(),
            doctor_id: self.doctor.id.clone(),
            start_at: datetime::to_datetime_input(self.start_at.as_deref()),
            end_at: datetime::to_datetime_input(self.end_at.as_deref()),
            notes: self.notes.clone().unwrap_or_default(),
        }
    }

    async fn fetch_related(api: &dyn RemoteApi) -> ApiResult<AppointmentOptions> {
        let patients = commands::fetch_all::<Patient>(api).await?;
        let doctors = commands::fetch_all::<Doctor>(api).await?;
        Ok(AppointmentOptions { patients, doctors })
    }
}
