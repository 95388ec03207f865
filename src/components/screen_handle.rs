//! Screen Handle
//!
//! Binds a [`ScreenState`] signal to the async screen flows so components
//! can fire them from event handlers.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, AppContext};
use crate::dialog;
use crate::models::Entity;
use crate::screen::{self, reduce, ScreenEvent, ScreenState, StateHandle};

impl<E: Entity> StateHandle<E> for RwSignal<ScreenState<E>> {
    fn snapshot(&self) -> ScreenState<E> {
        self.get_untracked()
    }

    fn dispatch(&self, event: ScreenEvent<E>) {
        self.update(|state| {
            let current = std::mem::take(state);
            *state = reduce(current, event);
        });
    }
}

/// Field-level views of one screen's state.
///
/// Each memo notifies only when its own field changes, so typing into the
/// form does not re-run the table.
pub struct ScreenView<E: Entity> {
    pub items: Memo<Vec<E>>,
    pub related: Memo<E::Related>,
    pub draft: Memo<E::Draft>,
    pub editing: Memo<bool>,
    pub loading: Memo<bool>,
}

impl<E: Entity> Clone for ScreenView<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Entity> Copy for ScreenView<E> {}

impl<E: Entity> ScreenView<E> {
    pub fn new(state: RwSignal<ScreenState<E>>) -> Self {
        Self {
            items: Memo::new(move |_| state.with(|s| s.items.clone())),
            related: Memo::new(move |_| state.with(|s| s.related.clone())),
            draft: Memo::new(move |_| state.with(|s| s.draft.clone())),
            editing: Memo::new(move |_| state.with(|s| s.is_editing())),
            loading: Memo::new(move |_| state.with(|s| s.loading)),
        }
    }
}

/// Copyable handle to one screen's state
pub struct ScreenHandle<E: Entity> {
    pub state: RwSignal<ScreenState<E>>,
    view: ScreenView<E>,
    ctx: AppContext,
}

impl<E: Entity> Clone for ScreenHandle<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Entity> Copy for ScreenHandle<E> {}

/// Create the state for a screen and load it on mount.
pub fn use_screen<E: Entity>() -> ScreenHandle<E> {
    let state = RwSignal::new(ScreenState::default());
    let handle = ScreenHandle {
        state,
        view: ScreenView::new(state),
        ctx: use_app_context(),
    };
    Effect::new(move |_| handle.load());
    handle
}

impl<E: Entity> ScreenHandle<E> {
    pub fn load(self) {
        spawn_local(async move {
            let api = self.ctx.api();
            screen::load(&api, &self.state).await;
        });
    }

    pub fn submit(self) {
        spawn_local(async move {
            let api = self.ctx.api();
            if let Err(e) = screen::submit(&api, &self.state).await {
                dialog::alert(&screen::save_failed_message::<E>(&e));
            }
        });
    }

    pub fn remove(self, id: String) {
        spawn_local(async move {
            let api = self.ctx.api();
            if let Err(e) = screen::remove(&api, &self.state, &id, dialog::confirm).await {
                dialog::alert(&screen::delete_failed_message::<E>(&e));
            }
        });
    }

    pub fn begin_edit(self, entity: E) {
        self.state.dispatch(ScreenEvent::BeginEdit(entity));
    }

    pub fn cancel_edit(self) {
        self.state.dispatch(ScreenEvent::CancelEdit);
    }

    /// Change one draft field from an input handler
    pub fn edit_draft(self, change: impl FnOnce(&mut E::Draft)) {
        let mut draft = self.view.draft.get_untracked();
        change(&mut draft);
        self.state.dispatch(ScreenEvent::DraftChanged(draft));
    }

    /// Read from the draft (tracked)
    pub fn draft<T>(self, read: impl FnOnce(&E::Draft) -> T) -> T {
        self.view.draft.with(read)
    }

    pub fn items(self) -> Vec<E> {
        self.view.items.get()
    }

    pub fn related(self) -> E::Related {
        self.view.related.get()
    }

    pub fn is_editing(self) -> bool {
        self.view.editing.get()
    }

    pub fn is_loading(self) -> bool {
        self.view.loading.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::models::{Doctor, DoctorDraft};

    fn doctor(id: &str) -> Doctor {
        Doctor { id: id.into(), name: format!("Dr. {}", id), specialty: "GP".into() }
    }

    #[test]
    fn test_draft_edits_leave_item_view_quiet() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(ScreenState::<Doctor> {
                items: vec![doctor("d1"), doctor("d2")],
                ..ScreenState::default()
            });
            let view = ScreenView::new(state);

            let runs = Arc::new(AtomicUsize::new(0));
            let row_count = {
                let runs = Arc::clone(&runs);
                Memo::new(move |_| {
                    runs.fetch_add(1, Ordering::SeqCst);
                    view.items.with(|items| items.len())
                })
            };
            assert_eq!(row_count.get_untracked(), 2);

            state.dispatch(ScreenEvent::DraftChanged(DoctorDraft {
                name: "Dr. N".into(),
                specialty: String::new(),
            }));
            assert_eq!(row_count.get_untracked(), 2);
            assert_eq!(runs.load(Ordering::SeqCst), 1);
            assert_eq!(view.draft.get_untracked().name, "Dr. N");
            assert!(!view.editing.get_untracked());

            state.dispatch(ScreenEvent::Loaded { items: vec![doctor("d3")], related: () });
            assert_eq!(row_count.get_untracked(), 1);
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn test_begin_edit_updates_editing_view() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(ScreenState::<Doctor>::default());
            let view = ScreenView::new(state);

            state.dispatch(ScreenEvent::BeginEdit(doctor("d1")));
            assert!(view.editing.get_untracked());
            assert_eq!(view.draft.get_untracked().name, "Dr. d1");

            state.dispatch(ScreenEvent::CancelEdit);
            assert!(!view.editing.get_untracked());
            assert_eq!(view.draft.get_untracked(), DoctorDraft::default());
        });
    }
}
