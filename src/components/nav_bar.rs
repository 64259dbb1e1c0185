//! Navigation Bar Component
//!
//! Top navigation between the entity screens.

use leptos::prelude::*;
use leptos_router::components::A;

/// Top navigation bar
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="nav-bar">
            <A href="/" attr:class="brand">"Gateway"</A>
            <nav class="nav-links">
                <A href="/car">"Cars"</A>
                <A href="/dealer">"Dealers"</A>
            </nav>
        </header>
    }
}
