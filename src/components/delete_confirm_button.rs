//! Delete Confirm Button Component
//!
//! Reusable inline delete confirmation used by the list screens.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a Delete button initially. When clicked, asks "Delete?" with
/// confirm/cancel buttons before running the callback.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                class="delete-btn"
                disabled=move || disabled.get()
                on:click=move |_| set_confirming.set(true)
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    disabled=move || disabled.get()
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                    "No"
                </button>
            </span>
        </Show>
    }
}
