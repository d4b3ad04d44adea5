//! Error Banner Component
//!
//! Shows the last failed action until dismissed.

use leptos::prelude::*;

use crate::context::use_dashboard;
use crate::store::DashboardStateStoreFields;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_dashboard().store;

    move || {
        store.last_error().get().map(|message| {
            view! {
                <div class="error-banner" role="alert">
                    <span class="error-text">{message}</span>
                    <button
                        type="button"
                        class="dismiss-btn"
                        title="Dismiss"
                        on:click=move |_| store.update(|s| s.dismiss_error())
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
