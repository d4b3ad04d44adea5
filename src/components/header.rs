//! Dashboard Header Component
//!
//! Title bar with the button that opens the add-food modal.

use leptos::prelude::*;

#[component]
pub fn Header(#[prop(into)] on_open_modal: Callback<()>) -> impl IntoView {
    view! {
        <header class="dashboard-header">
            <div class="header-brand">
                <span class="header-logo">"🍽"</span>
                <span class="header-title">"GoRestaurant"</span>
            </div>
            <nav>
                <button
                    type="button"
                    class="add-food-btn"
                    data-testid="add-food-button"
                    on:click=move |_| on_open_modal.run(())
                >
                    <span class="text">"New plate"</span>
                    <span class="icon">"＋"</span>
                </button>
            </nav>
        </header>
    }
}
