//! Home Component
//!
//! Landing screen linking to the entity collections.

use leptos::prelude::*;
use leptos_router::components::A;

/// Landing screen
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="home">
            <h1>"Welcome!"</h1>
            <p>"Manage the gateway entities:"</p>
            <ul class="entity-menu">
                <li>
                    <A href="/car">"Cars"</A>
                </li>
                <li>
                    <A href="/dealer">"Dealers"</A>
                </li>
            </ul>
        </div>
    }
}
