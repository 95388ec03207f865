//! Entity List Screen
//!
//! Per-screen state for one entity kind: the last full fetch, the form
//! draft and the edit cursor. State only changes through [`reduce`]; the
//! async flows below talk to the backend and feed events back in.
//!
//! Cycle: load -> render -> edit draft -> submit -> mutate -> load.

use crate::commands::{self, Mutation, RemoteApi};
use crate::error::ApiResult;
use crate::models::Entity;

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState<E: Entity> {
    /// Records from the last full fetch, in server order
    pub items: Vec<E>,
    /// Lists the form needs from other collections
    pub related: E::Related,
    pub draft: E::Draft,
    /// Record being edited; `None` while creating
    pub editing_id: Option<String>,
    pub loading: bool,
}

impl<E: Entity> Default for ScreenState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            related: E::Related::default(),
            draft: E::Draft::default(),
            editing_id: None,
            loading: false,
        }
    }
}

impl<E: Entity> ScreenState<E> {
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenEvent<E: Entity> {
    LoadStarted,
    Loaded { items: Vec<E>, related: E::Related },
    LoadFailed,
    BeginEdit(E),
    CancelEdit,
    DraftChanged(E::Draft),
    Saved,
    SaveFailed,
}

/// Apply one event.
pub fn reduce<E: Entity>(state: ScreenState<E>, event: ScreenEvent<E>) -> ScreenState<E> {
    match event {
        ScreenEvent::LoadStarted => ScreenState { loading: true, ..state },
        ScreenEvent::Loaded { items, related } => ScreenState {
            items,
            related,
            loading: false,
            ..state
        },
        ScreenEvent::LoadFailed => ScreenState {
            items: Vec::new(),
            related: E::Related::default(),
            loading: false,
            ..state
        },
        ScreenEvent::BeginEdit(entity) => ScreenState {
            draft: entity.to_draft(),
            editing_id: Some(entity.id().to_string()),
            ..state
        },
        ScreenEvent::CancelEdit | ScreenEvent::Saved => ScreenState {
            draft: E::Draft::default(),
            editing_id: None,
            ..state
        },
        ScreenEvent::DraftChanged(draft) => ScreenState { draft, ..state },
        // Draft and cursor stay so the user can retry
        ScreenEvent::SaveFailed => state,
    }
}

/// Update when an edit cursor is set, create otherwise.
pub fn plan_submit<E: Entity>(state: &ScreenState<E>) -> Mutation<E::Draft> {
    match &state.editing_id {
        Some(id) => Mutation::Update {
            id: id.clone(),
            draft: state.draft.clone(),
        },
        None => Mutation::Create(state.draft.clone()),
    }
}

/// Where a screen's state lives: a signal in the UI, a cell in tests.
pub trait StateHandle<E: Entity> {
    fn snapshot(&self) -> ScreenState<E>;
    fn dispatch(&self, event: ScreenEvent<E>);
}

/// Replace the cached list with a full fetch. Failures empty the list.
pub async fn load<E: Entity>(api: &dyn RemoteApi, state: &impl StateHandle<E>) {
    state.dispatch(ScreenEvent::LoadStarted);
    log::debug!("Loading /{}", E::COLLECTION);
    match fetch_screen::<E>(api).await {
        Ok((items, related)) => {
            log::info!("Loaded {} {}", items.len(), E::COLLECTION);
            state.dispatch(ScreenEvent::Loaded { items, related });
        }
        Err(e) => {
            log::error!("Failed to fetch {}: {}", E::COLLECTION, e);
            state.dispatch(ScreenEvent::LoadFailed);
        }
    }
}

async fn fetch_screen<E: Entity>(api: &dyn RemoteApi) -> ApiResult<(Vec<E>, E::Related)> {
    let items = commands::fetch_all::<E>(api).await?;
    let related = E::fetch_related(api).await?;
    Ok((items, related))
}

/// Create or update from the current draft, then reload.
///
/// The draft is cleared only on success. The error is returned for the
/// caller to show.
pub async fn submit<E: Entity>(api: &dyn RemoteApi, state: &impl StateHandle<E>) -> ApiResult<()> {
    let mutation = plan_submit(&state.snapshot());
    let result = commands::save::<E>(api, &mutation).await;
    match &result {
        Ok(()) => state.dispatch(ScreenEvent::Saved),
        Err(e) => {
            log::error!("Error saving {}: {}", E::NOUN, e);
            state.dispatch(ScreenEvent::SaveFailed);
        }
    }
    load(api, state).await;
    result
}

/// Delete after `confirm` approves, then reload.
///
/// Returns `Ok(false)` without any request when the user declines.
pub async fn remove<E: Entity>(
    api: &dyn RemoteApi,
    state: &impl StateHandle<E>,
    id: &str,
    confirm: impl FnOnce(&str) -> bool,
) -> ApiResult<bool> {
    if !confirm(&confirm_message::<E>()) {
        return Ok(false);
    }
    let result = commands::delete::<E>(api, id).await;
    if let Err(e) = &result {
        log::error!("Error deleting {}: {}", E::NOUN, e);
    }
    load(api, state).await;
    result.map(|()| true)
}

pub fn confirm_message<E: Entity>() -> String {
    format!("Delete this {}?", E::NOUN)
}

pub fn save_failed_message<E: Entity>(err: &impl std::fmt::Display) -> String {
    format!("Failed to save {}: {}", E::NOUN, err)
}

pub fn delete_failed_message<E: Entity>(err: &impl std::fmt::Display) -> String {
    format!("Failed to delete {}: {}", E::NOUN, err)
}
