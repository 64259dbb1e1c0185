//! Car Form Component
//!
//! Create/edit screen for a car. "New" vs "edit" is decided by the presence of
//! the id route parameter.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::context::use_car_store;
use crate::models::Car;

/// Car create/edit screen
#[component]
pub fn CarForm() -> impl IntoView {
    let car = use_car_store();
    let params = use_params_map();
    let navigate = use_navigate();

    let route_id = move || {
        params
            .with(|p| p.get("id"))
            .and_then(|id| id.parse::<i64>().ok())
    };
    let is_new = move || route_id().is_none();

    let (make, set_make) = signal(String::new());
    let (model, set_model) = signal(String::new());
    let (price, set_price) = signal(String::new());

    // Reset for a create flow, load for an edit flow.
    Effect::new(move |_| match route_id() {
        None => car.reset(),
        Some(id) => car.get(id),
    });

    // Sync the fields whenever a different entity arrives from the store.
    Effect::new(move |prev: Option<Option<i64>>| {
        let entity = car.entity();
        if prev != Some(entity.id) {
            set_make.set(entity.make.clone().unwrap_or_default());
            set_model.set(entity.model.clone().unwrap_or_default());
            set_price.set(entity.price.clone().unwrap_or_default());
        }
        entity.id
    });

    // Navigate back to the list once a save committed.
    Effect::new(move |_| {
        if car.update_success() {
            navigate("/car", Default::default());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let entity = Car {
            id: car.entity().id,
            make: nonempty(make.get()),
            model: nonempty(model.get()),
            price: nonempty(price.get()),
        };
        if is_new() {
            car.create(entity);
        } else {
            car.update(entity);
        }
    };

    view! {
        <div class="entity-page">
            <h2 id="car-form-heading">"Create or edit a Car"</h2>
            <Show
                when=move || !car.loading()
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <form class="entity-form" on:submit=on_submit>
                    <Show when=move || !is_new()>
                        <div class="form-group">
                            <label for="car-id">"ID"</label>
                            <input
                                id="car-id"
                                type="text"
                                readonly
                                prop:value=move || {
                                    route_id().map(|id| id.to_string()).unwrap_or_default()
                                }
                            />
                        </div>
                    </Show>
                    <div class="form-group">
                        <label for="car-make">"Make"</label>
                        <input
                            id="car-make"
                            type="text"
                            prop:value=move || make.get()
                            on:input=move |ev| set_make.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="car-model">"Model"</label>
                        <input
                            id="car-model"
                            type="text"
                            prop:value=move || model.get()
                            on:input=move |ev| set_model.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="car-price">"Price"</label>
                        <input
                            id="car-price"
                            type="text"
                            prop:value=move || price.get()
                            on:input=move |ev| set_price.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-actions">
                        <A href="/car" attr:class="back-link">"Back"</A>
                        <button type="submit" class="save-btn" disabled=move || car.updating()>
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
