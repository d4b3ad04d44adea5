//! Add Food Modal
//!
//! Collects a draft for a new plate. The modal closes after submitting.

use leptos::prelude::*;

use crate::components::{FoodForm, Modal};
use crate::models::FoodDraft;

#[component]
pub fn ModalAddFood(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_add_food: Callback<FoodDraft>,
) -> impl IntoView {
    view! {
        <Modal is_open=is_open on_close=on_close>
            <FoodForm
                initial=Signal::derive(FoodDraft::default)
                title="New plate"
                submit_label="Add plate"
                on_submit=move |draft: FoodDraft| {
                    on_add_food.run(draft);
                    on_close.run(());
                }
            />
        </Modal>
    }
}
