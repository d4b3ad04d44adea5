//! Delete Food Button
//!
//! Trash icon on a food card that asks for confirmation, naming the plate,
//! before the deletion is requested.

use leptos::prelude::*;

/// Confirmation text for deleting the plate called `name`
fn delete_prompt(name: &str) -> String {
    match name.trim() {
        "" => "Delete this plate?".to_string(),
        name => format!("Delete {}?", name),
    }
}

/// Runs `on_confirm` with `food_id` once the user confirms
#[component]
pub fn DeleteFoodButton(
    food_id: u32,
    #[prop(into)] food_name: String,
    #[prop(into)] on_confirm: Callback<u32>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);
    let prompt = delete_prompt(&food_name);

    let trash = move || {
        view! {
            <button
                type="button"
                class="icon"
                title="Delete"
                data-testid=format!("remove-food-{}", food_id)
                on:click=move |_| set_confirming.set(true)
            >
                "🗑"
            </button>
        }
    };

    view! {
        <Show when=move || confirming.get() fallback=trash>
            <span class="delete-food">
                <span class="delete-food-prompt" title=prompt.clone()>{prompt.clone()}</span>
                <button
                    type="button"
                    class="confirm-btn"
                    data-testid=format!("confirm-remove-food-{}", food_id)
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_confirm.run(food_id);
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |_| set_confirming.set(false)
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_the_plate() {
        assert_eq!(delete_prompt("Ao molho"), "Delete Ao molho?");
        assert_eq!(delete_prompt("  Veggie  "), "Delete Veggie?");
    }

    #[test]
    fn test_prompt_without_name() {
        assert_eq!(delete_prompt("   "), "Delete this plate?");
    }
}
