//! Dealer Form Component
//!
//! Create/edit screen for a dealer. "New" vs "edit" is decided by the presence
//! of the id route parameter.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::context::use_dealer_store;
use crate::models::Dealer;

/// Dealer create/edit screen
#[component]
pub fn DealerForm() -> impl IntoView {
    let dealer = use_dealer_store();
    let params = use_params_map();
    let navigate = use_navigate();

    let route_id = move || {
        params
            .with(|p| p.get("id"))
            .and_then(|id| id.parse::<i64>().ok())
    };
    let is_new = move || route_id().is_none();

    let (name, set_name) = signal(String::new());
    let (address, set_address) = signal(String::new());

    // Reset for a create flow, load for an edit flow.
    Effect::new(move |_| match route_id() {
        None => dealer.reset(),
        Some(id) => dealer.get(id),
    });

    // Sync the fields whenever a different entity arrives from the store.
    Effect::new(move |prev: Option<Option<i64>>| {
        let entity = dealer.entity();
        if prev != Some(entity.id) {
            set_name.set(entity.name.clone().unwrap_or_default());
            set_address.set(entity.address.clone().unwrap_or_default());
        }
        entity.id
    });

    // Navigate back to the list once a save committed.
    Effect::new(move |_| {
        if dealer.update_success() {
            navigate("/dealer", Default::default());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let entity = Dealer {
            id: dealer.entity().id,
            name: nonempty(name.get()),
            address: nonempty(address.get()),
        };
        if is_new() {
            dealer.create(entity);
        } else {
            dealer.update(entity);
        }
    };

    view! {
        <div class="entity-page">
            <h2 id="dealer-form-heading">"Create or edit a Dealer"</h2>
            <Show
                when=move || !dealer.loading()
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <form class="entity-form" on:submit=on_submit>
                    <Show when=move || !is_new()>
                        <div class="form-group">
                            <label for="dealer-id">"ID"</label>
                            <input
                                id="dealer-id"
                                type="text"
                                readonly
                                prop:value=move || {
                                    route_id().map(|id| id.to_string()).unwrap_or_default()
                                }
                            />
                        </div>
                    </Show>
                    <div class="form-group">
                        <label for="dealer-name">"Name"</label>
                        <input
                            id="dealer-name"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="dealer-address">"Address"</label>
                        <input
                            id="dealer-address"
                            type="text"
                            prop:value=move || address.get()
                            on:input=move |ev| set_address.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-actions">
                        <A href="/dealer" attr:class="back-link">"Back"</A>
                        <button type="submit" class="save-btn" disabled=move || dealer.updating()>
                            "Save"
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

fn nonempty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
