//! Error Banner Component
//!
//! Global notification strip surfacing the most recent request failure from
//! any entity store. The CRUD screens never render errors themselves.

use leptos::prelude::*;

use crate::context::{use_car_store, use_dealer_store};

/// Global error notification strip
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let car = use_car_store();
    let dealer = use_dealer_store();

    let message = move || car.error_message().or_else(|| dealer.error_message());

    view! {
        {move || {
            message().map(|msg| {
                view! { <div class="error-banner">{msg}</div> }
            })
        }}
    }
}
