//! Entity Store Slices
//!
//! Client-side state for each entity type: the fetched collection, the current
//! selection, and the lifecycle of the request in flight. All transitions go
//! through a single reducer over an explicit action enum.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError, ListQuery};
use crate::models::Entity;

// ========================
// State & Actions
// ========================

/// Per-entity slice of application state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityState<T> {
    /// Collection as of the last completed list request.
    pub entities: Vec<T>,
    /// Current selection; an empty entity until a get or mutation completes.
    pub entity: T,
    /// A list/get request is outstanding.
    pub loading: bool,
    /// A create/update/partial-update/delete request is outstanding.
    pub updating: bool,
    /// The most recent mutating request completed successfully.
    pub update_success: bool,
    /// Error carried by the most recent rejected request, if any.
    pub error: Option<ApiError>,
    /// Bumped by `Reset`; results captured under an older generation are
    /// discarded instead of committed.
    pub generation: u64,
}

/// Everything that can happen to a slice.
#[derive(Debug, Clone, PartialEq)]
pub enum Action<T> {
    ListPending,
    GetPending,
    MutatePending,
    ListFulfilled(Vec<T>),
    GetFulfilled(T),
    MutateFulfilled(T),
    DeleteFulfilled,
    Rejected(ApiError),
    Reset,
}

/// The slice state machine. Adding an action without a transition is a compile
/// error.
pub fn reduce<T: Entity>(state: &mut EntityState<T>, action: Action<T>) {
    match action {
        Action::ListPending | Action::GetPending => {
            state.loading = true;
            state.updating = false;
            state.update_success = false;
            state.error = None;
        }
        Action::MutatePending => {
            state.updating = true;
            state.loading = false;
            state.update_success = false;
            state.error = None;
        }
        Action::ListFulfilled(entities) => {
            state.entities = entities;
            state.loading = false;
        }
        Action::GetFulfilled(entity) => {
            state.entity = entity;
            state.loading = false;
        }
        Action::MutateFulfilled(entity) => {
            state.entity = entity;
            state.updating = false;
            state.update_success = true;
        }
        Action::DeleteFulfilled => {
            state.entity = T::default();
            state.updating = false;
            state.update_success = true;
        }
        Action::Rejected(error) => {
            state.loading = false;
            state.updating = false;
            state.error = Some(error);
        }
        Action::Reset => {
            *state = EntityState {
                generation: state.generation + 1,
                ..EntityState::default()
            };
        }
    }
}

// ========================
// Store Handle
// ========================

/// Copyable handle to one entity's slice. Dispatch methods are fire-and-forget:
/// they transition the slice to pending synchronously and commit the outcome
/// when the request resolves.
pub struct EntityStore<T: 'static> {
    state: RwSignal<EntityState<T>>,
}

impl<T: Entity> Clone for EntityStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Entity> Copy for EntityStore<T> {}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(EntityState::default()),
        }
    }

    // ---- reactive accessors ----

    pub fn entities(&self) -> Vec<T> {
        self.state.with(|s| s.entities.clone())
    }

    pub fn entity(&self) -> T {
        self.state.with(|s| s.entity.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn updating(&self) -> bool {
        self.state.with(|s| s.updating)
    }

    pub fn update_success(&self) -> bool {
        self.state.with(|s| s.update_success)
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.with(|s| s.error.as_ref().map(|e| e.to_string()))
    }

    // ---- dispatch ----

    /// Fetch the collection.
    pub fn list(&self, query: ListQuery) {
        let store = *self;
        let generation = self.dispatch(Action::ListPending);
        spawn_local(async move {
            match api::list::<T>(&query).await {
                Ok(entities) => {
                    store.commit(generation, Action::ListFulfilled(entities));
                }
                Err(err) => store.reject(generation, err),
            }
        });
    }

    /// Fetch a single entity into the selection.
    pub fn get(&self, id: i64) {
        let store = *self;
        let generation = self.dispatch(Action::GetPending);
        spawn_local(async move {
            match api::get::<T>(id).await {
                Ok(entity) => {
                    store.commit(generation, Action::GetFulfilled(entity));
                }
                Err(err) => store.reject(generation, err),
            }
        });
    }

    /// POST a new entity; the server assigns its id.
    pub fn create(&self, entity: T) {
        self.mutate(async move { api::create(&entity).await });
    }

    /// PUT a full replacement of an existing entity.
    pub fn update(&self, entity: T) {
        self.mutate(async move { api::update(&entity).await });
    }

    /// PATCH the set fields of an existing entity. No screen dispatches this
    /// today; the operation mirrors the remote contract.
    #[allow(dead_code)]
    pub fn partial_update(&self, entity: T) {
        self.mutate(async move { api::partial_update(&entity).await });
    }

    /// DELETE by id, then clear the selection.
    pub fn delete(&self, id: i64) {
        let store = *self;
        let generation = self.dispatch(Action::MutatePending);
        spawn_local(async move {
            match api::delete::<T>(id).await {
                Ok(()) => {
                    if store.commit(generation, Action::DeleteFulfilled) {
                        store.refresh(generation);
                    }
                }
                Err(err) => store.reject(generation, err),
            }
        });
    }

    /// Return the slice to its initial state and invalidate every in-flight
    /// request.
    pub fn reset(&self) {
        self.state.update(|s| reduce(s, Action::Reset));
    }

    // ---- internals ----

    fn mutate(&self, op: impl Future<Output = Result<T, ApiError>> + 'static) {
        let store = *self;
        let generation = self.dispatch(Action::MutatePending);
        spawn_local(async move {
            match op.await {
                Ok(entity) => {
                    if store.commit(generation, Action::MutateFulfilled(entity)) {
                        store.refresh(generation);
                    }
                }
                Err(err) => store.reject(generation, err),
            }
        });
    }

    /// Reduce a pending action now and return the generation its outcome must
    /// commit against.
    fn dispatch(&self, action: Action<T>) -> u64 {
        self.state.update(|s| reduce(s, action));
        self.state.with_untracked(|s| s.generation)
    }

    /// Reduce `action` unless the slice was reset since `generation` was
    /// captured. Returns whether the commit happened.
    fn commit(&self, generation: u64, action: Action<T>) -> bool {
        let live = self
            .state
            .with_untracked(|s| s.generation == generation);
        if live {
            self.state.update(|s| reduce(s, action));
        }
        live
    }

    fn reject(&self, generation: u64, err: ApiError) {
        web_sys::console::error_1(&format!("[{}] request rejected: {}", T::NAME, err).into());
        self.commit(generation, Action::Rejected(err));
    }

    /// Resynchronize the collection after a committed mutation. Runs as its own
    /// task so observers of `update_success` see the commit before the refresh
    /// transitions the slice again.
    fn refresh(&self, generation: u64) {
        let store = *self;
        spawn_local(async move {
            if !store.commit(generation, Action::ListPending) {
                return;
            }
            web_sys::console::log_1(
                &format!("[{}] resynchronizing collection after mutation", T::NAME).into(),
            );
            match api::list::<T>(&ListQuery::default()).await {
                Ok(entities) => {
                    store.commit(generation, Action::ListFulfilled(entities));
                }
                Err(err) => store.reject(generation, err),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Car, Dealer};
    use serde_json::json;

    fn car(id: i64, make: &str) -> Car {
        Car {
            id: Some(id),
            make: Some(make.to_string()),
            ..Default::default()
        }
    }

    fn assert_initial<T: Entity>(state: &EntityState<T>) {
        assert!(state.entities.is_empty());
        assert_eq!(state.entity, T::default());
        assert!(!state.loading);
        assert!(!state.updating);
        assert!(!state.update_success);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_list_lifecycle() {
        let mut state = EntityState::<Car>::default();

        reduce(&mut state, Action::ListPending);
        assert!(state.loading);
        assert!(!state.updating);
        assert!(!state.update_success);

        let cars: Vec<Car> = serde_json::from_value(json!([
            {"id": 1, "make": "Toyota", "model": "Corolla", "price": "20000"}
        ]))
        .unwrap();
        reduce(&mut state, Action::ListFulfilled(cars));
        assert_eq!(state.entities.len(), 1);
        assert_eq!(state.entities[0].make.as_deref(), Some("Toyota"));
        assert!(!state.loading);
    }

    #[test]
    fn test_get_fulfilled_selects_entity() {
        let mut state = EntityState::<Dealer>::default();

        reduce(&mut state, Action::GetPending);
        let dealer: Dealer = serde_json::from_value(json!(
            {"id": 1, "name": "Acme Motors", "address": "1 Main St"}
        ))
        .unwrap();
        reduce(&mut state, Action::GetFulfilled(dealer.clone()));
        assert_eq!(state.entity, dealer);
        assert!(!state.loading);
    }

    #[test]
    fn test_create_lifecycle() {
        let mut state = EntityState::<Car>::default();

        reduce(&mut state, Action::MutatePending);
        assert!(state.updating);
        assert!(!state.loading);
        assert!(!state.update_success);

        reduce(&mut state, Action::MutateFulfilled(car(5, "Honda")));
        assert_eq!(state.entity.id, Some(5));
        assert!(state.update_success);
        assert!(!state.updating);
    }

    #[test]
    fn test_delete_fulfilled_clears_selection() {
        let mut state = EntityState::<Car>::default();
        state.entity = car(3, "Audi");

        reduce(&mut state, Action::MutatePending);
        reduce(&mut state, Action::DeleteFulfilled);
        assert_eq!(state.entity, Car::default());
        assert!(state.update_success);
        assert!(!state.updating);
    }

    #[test]
    fn test_rejection_leaves_data_in_place() {
        let mut state = EntityState::<Car>::default();
        reduce(&mut state, Action::GetPending);
        reduce(&mut state, Action::GetFulfilled(car(1, "Toyota")));
        let before = state.clone();

        reduce(&mut state, Action::GetPending);
        reduce(
            &mut state,
            Action::Rejected(ApiError::Status {
                status: 404,
                message: "Not Found".to_string(),
            }),
        );
        assert_eq!(state.entity, before.entity);
        assert_eq!(state.entities, before.entities);
        assert!(matches!(
            state.error,
            Some(ApiError::Status { status: 404, .. })
        ));
        assert!(!state.loading);
        assert!(!state.updating);
    }

    #[test]
    fn test_pending_clears_previous_error() {
        let mut state = EntityState::<Car>::default();
        reduce(&mut state, Action::Rejected(ApiError::Transport("offline".to_string())));
        assert!(state.error.is_some());

        reduce(&mut state, Action::ListPending);
        assert_eq!(state.error, None);

        reduce(&mut state, Action::Rejected(ApiError::Transport("offline".to_string())));
        reduce(&mut state, Action::MutatePending);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = EntityState::<Car>::default();
        reduce(&mut state, Action::ListPending);
        reduce(&mut state, Action::ListFulfilled(vec![car(1, "Toyota"), car(2, "Honda")]));
        reduce(&mut state, Action::MutatePending);
        reduce(&mut state, Action::Rejected(ApiError::Transport("offline".to_string())));

        reduce(&mut state, Action::Reset);
        assert_initial(&state);
    }

    #[test]
    fn test_reset_invalidates_in_flight_generations() {
        let mut state = EntityState::<Car>::default();
        reduce(&mut state, Action::GetPending);
        let captured = state.generation;

        reduce(&mut state, Action::Reset);
        // A guarded commit compares generations and discards the stale result.
        assert_ne!(state.generation, captured);
        assert_initial(&state);
    }

    #[test]
    fn test_flags_never_overlap() {
        let mut state = EntityState::<Car>::default();
        let sequence = vec![
            Action::ListPending,
            Action::MutatePending,
            Action::GetPending,
            Action::GetFulfilled(car(1, "Toyota")),
            Action::MutatePending,
            Action::MutateFulfilled(car(1, "Toyota")),
            Action::ListPending,
            Action::Rejected(ApiError::Transport("offline".to_string())),
            Action::MutatePending,
            Action::DeleteFulfilled,
            Action::Reset,
        ];
        for action in sequence {
            reduce(&mut state, action);
            assert!(
                !(state.loading && state.updating),
                "loading and updating both set"
            );
        }
    }

    #[test]
    fn test_mutation_success_survives_refresh_completion() {
        let mut state = EntityState::<Car>::default();
        reduce(&mut state, Action::MutatePending);
        reduce(&mut state, Action::MutateFulfilled(car(5, "Honda")));

        // The follow-up list transitions the slice; once it completes the
        // selection still carries the committed payload.
        reduce(&mut state, Action::ListPending);
        reduce(&mut state, Action::ListFulfilled(vec![car(5, "Honda")]));
        assert_eq!(state.entity.id, Some(5));
        assert_eq!(state.entities.len(), 1);
        assert!(!state.loading);
        assert!(!state.updating);
    }
}
