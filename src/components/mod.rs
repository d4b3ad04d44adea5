//! UI Components
//!
//! Leptos components composed by the dashboard page.

mod delete_food_button;
mod error_banner;
mod food_card;
mod food_form;
mod header;
mod modal;
mod modal_add_food;
mod modal_edit_food;

pub use delete_food_button::DeleteFoodButton;
pub use error_banner::ErrorBanner;
pub use food_card::FoodCard;
pub use food_form::FoodForm;
pub use header::Header;
pub use modal::Modal;
pub use modal_add_food::ModalAddFood;
pub use modal_edit_food::ModalEditFood;
