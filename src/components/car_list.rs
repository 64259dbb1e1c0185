//! Car List Component
//!
//! Collection screen for cars: refresh, create, and per-row navigation.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::api::ListQuery;
use crate::components::DeleteConfirmButton;
use crate::context::use_car_store;

/// Car collection screen
#[component]
pub fn CarList() -> impl IntoView {
    let car = use_car_store();

    Effect::new(move |_| {
        car.list(ListQuery::default());
    });

    let empty = move || !car.loading() && car.entities().is_empty();

    view! {
        <div class="entity-page">
            <div class="entity-heading">
                <h2 id="car-heading">"Cars"</h2>
                <div class="entity-actions">
                    <button
                        class="refresh-btn"
                        disabled=move || car.loading()
                        on:click=move |_| car.list(ListQuery::default())
                    >
                        "Refresh List"
                    </button>
                    <A href="/car/new" attr:class="create-link">"Create new Car"</A>
                </div>
            </div>

            <Show when=move || !car.entities().is_empty()>
                <table class="entity-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Make"</th>
                            <th>"Model"</th>
                            <th>"Price"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || car.entities()
                            key=|c| c.id
                            children=move |c| {
                                let id = c.id.unwrap_or_default();
                                view! {
                                    <tr>
                                        <td>
                                            <A href=format!("/car/{id}")>{id}</A>
                                        </td>
                                        <td>{c.make.unwrap_or_default()}</td>
                                        <td>{c.model.unwrap_or_default()}</td>
                                        <td>{c.price.unwrap_or_default()}</td>
                                        <td class="row-actions">
                                            <A href=format!("/car/{id}")>"View"</A>
                                            <A href=format!("/car/{id}/edit")>"Edit"</A>
                                            <DeleteConfirmButton
                                                disabled=Signal::derive(move || car.updating())
                                                on_confirm=Callback::new(move |_| car.delete(id))
                                            />
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>

            <Show when=empty>
                <div class="empty-state">"No Cars found"</div>
            </Show>
        </div>
    }
}
