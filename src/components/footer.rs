//! Footer Component

use leptos::prelude::*;

/// Page footer
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span class="footer-badge">"Built with \u{2764} by the gateway team"</span>
        </footer>
    }
}
