//! Food Form Component
//!
//! Shared form body for the add and edit modals.

use leptos::prelude::*;

use crate::models::FoodDraft;

/// Image, name, price and description fields.
///
/// The fields are refilled whenever `initial` changes, so the edit modal
/// follows the selected food. A draft with an invalid price is held back and
/// the reason is shown under the form.
#[component]
pub fn FoodForm(
    #[prop(into)] initial: Signal<FoodDraft>,
    #[prop(into)] title: String,
    #[prop(into)] submit_label: String,
    #[prop(into)] on_submit: Callback<FoodDraft>,
) -> impl IntoView {
    let (image, set_image) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (invalid, set_invalid) = signal(None::<String>);

    Effect::new(move |_| {
        let draft = initial.get();
        set_image.set(draft.image);
        set_name.set(draft.name);
        set_price.set(draft.price);
        set_description.set(draft.description);
        set_invalid.set(None);
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = FoodDraft {
            name: name.get_untracked(),
            image: image.get_untracked(),
            price: price.get_untracked(),
            description: description.get_untracked(),
        };
        match draft.validate() {
            Ok(()) => {
                set_invalid.set(None);
                on_submit.run(draft);
            }
            Err(reason) => set_invalid.set(Some(reason)),
        }
    };

    view! {
        <form class="food-form" on:submit=submit>
            <h1>{title}</h1>
            <input
                name="image"
                placeholder="Image URL"
                prop:value=move || image.get()
                on:input=move |ev| set_image.set(event_target_value(&ev))
            />
            <input
                name="name"
                placeholder="Ex: Moda Italiana"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                name="price"
                placeholder="Ex: 19.90"
                inputmode="decimal"
                prop:value=move || price.get()
                on:input=move |ev| set_price.set(event_target_value(&ev))
            />
            <textarea
                name="description"
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            {move || invalid.get().map(|reason| view! {
                <p class="form-error" data-testid="food-form-error">{reason}</p>
            })}
            <button type="submit" class="submit-btn" data-testid="food-form-submit">
                <span class="text">{submit_label}</span>
                <span class="icon">"✓"</span>
            </button>
        </form>
    }
}
