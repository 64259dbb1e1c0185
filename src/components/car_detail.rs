//! Car Detail Component
//!
//! Read-only screen for a single car.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::context::use_car_store;

/// Car detail screen
#[component]
pub fn CarDetail() -> impl IntoView {
    let car = use_car_store();
    let params = use_params_map();

    Effect::new(move |_| {
        let id = params.with(|p| p.get("id")).and_then(|id| id.parse::<i64>().ok());
        if let Some(id) = id {
            car.get(id);
        }
    });

    let entity = move || car.entity();

    view! {
        <div class="entity-page">
            <h2 id="car-details-heading">"Car"</h2>
            <dl class="entity-details">
                <dt>"ID"</dt>
                <dd>{move || entity().id.unwrap_or_default()}</dd>
                <dt>"Make"</dt>
                <dd>{move || entity().make.unwrap_or_default()}</dd>
                <dt>"Model"</dt>
                <dd>{move || entity().model.unwrap_or_default()}</dd>
                <dt>"Price"</dt>
                <dd>{move || entity().price.unwrap_or_default()}</dd>
            </dl>
            <div class="detail-actions">
                <A href="/car" attr:class="back-link">"Back"</A>
                <A
                    href=move || format!("/car/{}/edit", entity().id.unwrap_or_default())
                    attr:class="edit-link"
                >
                    "Edit"
                </A>
            </div>
        </div>
    }
}
