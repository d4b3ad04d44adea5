//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The plain
//! [`DashboardState`] methods hold all list bookkeeping so they can be used
//! without a reactive runtime.

use reactive_stores::Store;

use crate::models::FoodPlate;

/// Dashboard page state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct DashboardState {
    /// Cached food plates, in server order plus appended creations
    pub foods: Vec<FoodPlate>,
    /// Snapshot of the record being edited (None = nothing selected)
    pub editing_food: Option<FoodPlate>,
    pub add_modal_open: bool,
    pub edit_modal_open: bool,
    /// Last failure surfaced to the user, cleared on dismiss
    pub last_error: Option<String>,
}

impl DashboardState {
    /// Replace the whole list with a server response
    pub fn set_foods(&mut self, foods: Vec<FoodPlate>) {
        self.foods = foods;
    }

    pub fn push_food(&mut self, food: FoodPlate) {
        self.foods.push(food);
    }

    pub fn find_food(&self, id: u32) -> Option<&FoodPlate> {
        self.foods.iter().find(|food| food.id == id)
    }

    /// Replace the entry with `id` in place; false if it is gone
    pub fn replace_food(&mut self, id: u32, updated: FoodPlate) -> bool {
        match self.foods.iter_mut().find(|food| food.id == id) {
            Some(food) => {
                *food = updated;
                true
            }
            None => false,
        }
    }

    /// Remove the entry with `id`; false if it was not cached
    pub fn remove_food(&mut self, id: u32) -> bool {
        let before = self.foods.len();
        self.foods.retain(|food| food.id != id);
        self.foods.len() != before
    }

    pub fn toggle_add_modal(&mut self) {
        self.add_modal_open = !self.add_modal_open;
    }

    pub fn toggle_edit_modal(&mut self) {
        self.edit_modal_open = !self.edit_modal_open;
    }

    /// Open the edit modal on a snapshot of `food`
    pub fn begin_edit(&mut self, food: FoodPlate) {
        self.edit_modal_open = true;
        self.editing_food = Some(food);
    }

    pub fn report_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

#[cfg(test)]
mod tests {
    use super::*;

    fn plate(id: u32, name: &str) -> FoodPlate {
        FoodPlate {
            id,
            name: name.to_string(),
            image: String::new(),
            price: "1.00".to_string(),
            description: String::new(),
            available: true,
        }
    }

    fn state_with(ids: &[u32]) -> DashboardState {
        DashboardState {
            foods: ids.iter().map(|id| plate(*id, "x")).collect(),
            ..Default::default()
        }
    }

    fn ids(state: &DashboardState) -> Vec<u32> {
        state.foods.iter().map(|f| f.id).collect()
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut state = state_with(&[1, 2, 3]);
        assert!(state.replace_food(2, plate(2, "renamed")));
        assert_eq!(ids(&state), vec![1, 2, 3]);
        assert_eq!(state.foods[1].name, "renamed");

        assert!(!state.replace_food(9, plate(9, "ghost")));
        assert_eq!(ids(&state), vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut state = state_with(&[1, 2, 3]);
        assert!(state.remove_food(2));
        assert_eq!(ids(&state), vec![1, 3]);
        assert!(!state.remove_food(2));
    }

    #[test]
    fn test_modal_flags_are_independent() {
        let mut state = DashboardState::default();
        state.toggle_add_modal();
        state.toggle_edit_modal();
        assert!(state.add_modal_open && state.edit_modal_open);
        state.toggle_add_modal();
        assert!(!state.add_modal_open);
        assert!(state.edit_modal_open);
    }

    #[test]
    fn test_begin_edit_opens_modal() {
        let mut state = state_with(&[1]);
        state.begin_edit(plate(1, "x"));
        assert!(state.edit_modal_open);
        assert_eq!(state.editing_food.as_ref().map(|f| f.id), Some(1));

        // Opening again does not flip it closed
        state.begin_edit(plate(1, "x"));
        assert!(state.edit_modal_open);
    }

    #[test]
    fn test_error_banner() {
        let mut state = DashboardState::default();
        state.report_error("boom");
        assert_eq!(state.last_error.as_deref(), Some("boom"));
        state.dismiss_error();
        assert!(state.last_error.is_none());
    }
}
