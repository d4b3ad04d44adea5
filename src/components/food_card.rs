//! Food Card Component
//!
//! Displays one food plate with edit, delete and availability controls.

use leptos::prelude::*;

use crate::components::DeleteFoodButton;
use crate::models::FoodPlate;

#[component]
pub fn FoodCard(
    food: FoodPlate,
    #[prop(into)] on_edit: Callback<FoodPlate>,
    #[prop(into)] on_delete: Callback<u32>,
    #[prop(into)] on_toggle_available: Callback<u32>,
) -> impl IntoView {
    let id = food.id;
    let available = food.available;
    let price = food.display_price();
    let alt = food.name.clone();
    let snapshot = food.clone();
    let FoodPlate { name, image, description, .. } = food;

    view! {
        <div
            class=if available { "food-card" } else { "food-card unavailable" }
            data-testid=format!("food-{}", id)
        >
            <header class="food-image">
                <img src=image alt=alt.clone() />
            </header>
            <section class="food-body">
                <h2>{name}</h2>
                <p>{description}</p>
                <p class="price">
                    <b>{price}</b>
                </p>
            </section>
            <section class="food-footer">
                <div class="icon-container">
                    <button
                        type="button"
                        class="icon"
                        title="Edit"
                        data-testid=format!("edit-food-{}", id)
                        on:click=move |_| on_edit.run(snapshot.clone())
                    >
                        "✎"
                    </button>
                    <DeleteFoodButton food_id=id food_name=alt.clone() on_confirm=on_delete />
                </div>
                <div class="availability-container">
                    <p>{if available { "Available" } else { "Unavailable" }}</p>
                    <label class="switch">
                        <input
                            type="checkbox"
                            data-testid=format!("change-status-food-{}", id)
                            prop:checked=available
                            on:change=move |_| on_toggle_available.run(id)
                        />
                        <span class="slider"></span>
                    </label>
                </div>
            </section>
        </div>
    }
}
