//! Edit Food Modal
//!
//! Pre-filled from the food being edited; submits the changed fields as a draft.

use leptos::prelude::*;

use crate::components::{FoodForm, Modal};
use crate::models::{FoodDraft, FoodPlate};

#[component]
pub fn ModalEditFood(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] editing_food: Signal<Option<FoodPlate>>,
    #[prop(into)] on_update_food: Callback<FoodDraft>,
) -> impl IntoView {
    let initial = Signal::derive(move || {
        editing_food
            .get()
            .as_ref()
            .map(FoodDraft::from)
            .unwrap_or_default()
    });

    view! {
        <Modal is_open=is_open on_close=on_close>
            <FoodForm
                initial=initial
                title="Edit plate"
                submit_label="Save changes"
                on_submit=move |draft: FoodDraft| {
                    on_update_food.run(draft);
                    on_close.run(());
                }
            />
        </Modal>
    }
}
