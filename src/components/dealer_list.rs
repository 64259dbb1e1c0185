//! Dealer List Component
//!
//! Collection screen for dealers: refresh, create, and per-row navigation.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::api::ListQuery;
use crate::components::DeleteConfirmButton;
use crate::context::use_dealer_store;

/// Dealer collection screen
#[component]
pub fn DealerList() -> impl IntoView {
    let dealer = use_dealer_store();

    Effect::new(move |_| {
        dealer.list(ListQuery::default());
    });

    let empty = move || !dealer.loading() && dealer.entities().is_empty();

    view! {
        <div class="entity-page">
            <div class="entity-heading">
                <h2 id="dealer-heading">"Dealers"</h2>
                <div class="entity-actions">
                    <button
                        class="refresh-btn"
                        disabled=move || dealer.loading()
                        on:click=move |_| dealer.list(ListQuery::default())
                    >
                        "Refresh List"
                    </button>
                    <A href="/dealer/new" attr:class="create-link">"Create new Dealer"</A>
                </div>
            </div>

            <Show when=move || !dealer.entities().is_empty()>
                <table class="entity-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Name"</th>
                            <th>"Address"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || dealer.entities()
                            key=|d| d.id
                            children=move |d| {
                                let id = d.id.unwrap_or_default();
                                view! {
                                    <tr>
                                        <td>
                                            <A href=format!("/dealer/{id}")>{id}</A>
                                        </td>
                                        <td>{d.name.unwrap_or_default()}</td>
                                        <td>{d.address.unwrap_or_default()}</td>
                                        <td class="row-actions">
                                            <A href=format!("/dealer/{id}")>"View"</A>
                                            <A href=format!("/dealer/{id}/edit")>"Edit"</A>
                                            <DeleteConfirmButton
                                                disabled=Signal::derive(move || dealer.updating())
                                                on_confirm=Callback::new(move |_| dealer.delete(id))
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
                <div class="empty-state">"No Dealers found"</div>
            </Show>
        </div>
    }
}
