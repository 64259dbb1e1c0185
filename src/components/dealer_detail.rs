//! Dealer Detail Component
//!
//! Read-only screen for a single dealer.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::context::use_dealer_store;

/// Dealer detail screen
#[component]
pub fn DealerDetail() -> impl IntoView {
    let dealer = use_dealer_store();
    let params = use_params_map();

    Effect::new(move |_| {
        let id = params.with(|p| p.get("id")).and_then(|id| id.parse::<i64>().ok());
        if let Some(id) = id {
            dealer.get(id);
        }
    });

    let entity = move || dealer.entity();

    view! {
        <div class="entity-page">
            <h2 id="dealer-details-heading">"Dealer"</h2>
            <dl class="entity-details">
                <dt>"ID"</dt>
                <dd>{move || entity().id.unwrap_or_default()}</dd>
                <dt>"Name"</dt>
                <dd>{move || entity().name.unwrap_or_default()}</dd>
                <dt>"Address"</dt>
                <dd>{move || entity().address.unwrap_or_default()}</dd>
            </dl>
            <div class="detail-actions">
                <A href="/dealer" attr:class="back-link">"Back"</A>
                <A
                    href=move || format!("/dealer/{}/edit", entity().id.unwrap_or_default())
                    attr:class="edit-link"
                >
                    "Edit"
                </A>
            </div>
        </div>
    }
}
