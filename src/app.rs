//! Food Dashboard App
//!
//! The dashboard page: header, add/edit modals and the food list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpFoodApi;
use crate::components::{ErrorBanner, FoodCard, Header, ModalAddFood, ModalEditFood};
use crate::config::AppConfig;
use crate::context::DashboardContext;
use crate::models::{FoodDraft, FoodPlate};
use crate::store::{DashboardState, DashboardStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(DashboardState::default());
    let ctx = DashboardContext::new(store, HttpFoodApi::new(config.api_base_url.clone()));

    // Provide context to all children
    provide_context(ctx);

    // Load foods on mount
    Effect::new(move |_| {
        log::info!("[APP] Dashboard mounted, backend={}", config.api_base_url);
        ctx.load();
    });

    let toggle_modal = move |_: ()| store.update(|s| s.toggle_add_modal());
    let toggle_edit_modal = move |_: ()| store.update(|s| s.toggle_edit_modal());

    view! {
        <Header on_open_modal=toggle_modal />

        <ModalAddFood
            is_open=Signal::derive(move || store.add_modal_open().get())
            on_close=toggle_modal
            on_add_food=move |draft: FoodDraft| ctx.add(draft)
        />
        <ModalEditFood
            is_open=Signal::derive(move || store.edit_modal_open().get())
            on_close=toggle_edit_modal
            editing_food=Signal::derive(move || store.editing_food().get())
            on_update_food=move |draft: FoodDraft| ctx.update(draft)
        />

        <ErrorBanner />

        <main class="foods-container" data-testid="foods-list">
            <For
                each=move || store.foods().get()
                key=|food: &FoodPlate| {
                    // Every field, so in-place updates re-render the card
                    (
                        food.id,
                        food.name.clone(),
                        food.image.clone(),
                        food.price.clone(),
                        food.description.clone(),
                        food.available,
                    )
                }
                children=move |food: FoodPlate| {
                    view! {
                        <FoodCard
                            food=food
                            on_edit=move |food: FoodPlate| store.update(|s| s.begin_edit(food))
                            on_delete=move |id: u32| ctx.delete(id)
                            on_toggle_available=move |id: u32| ctx.toggle_available(id)
                        />
                    }
                }
            />
        </main>
    }
}
