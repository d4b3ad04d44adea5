//! Dashboard Session
//!
//! Action flows (load/add/update/delete/toggle) that call the API and then
//! reconcile the local [`DashboardState`]. The state is reached through
//! [`DashboardHandle`] so the same flows drive the reactive store in the
//! browser and a plain `RefCell` in tests.

mod actions;

use std::cell::RefCell;

use leptos::prelude::*;
use thiserror::Error;

use crate::api::ApiError;
use crate::store::{DashboardState, DashboardStore};

pub use actions::{
    add_food, delete_food, load_foods, report_failure, toggle_available, update_food,
};

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// Update requested while no food is selected for editing
    #[error("Food not found: no food is being edited")]
    NotEditing,

    #[error("Food not found: {0}")]
    FoodNotFound(u32),

    /// Draft rejected before sending
    #[error("Invalid food: {0}")]
    InvalidDraft(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Read/write access to the dashboard state
pub trait DashboardHandle {
    fn with_state<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R;
    fn update_state(&self, f: impl FnOnce(&mut DashboardState));
}

impl DashboardHandle for DashboardStore {
    fn with_state<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        self.with_untracked(f)
    }

    fn update_state(&self, f: impl FnOnce(&mut DashboardState)) {
        self.update(f);
    }
}

impl DashboardHandle for RefCell<DashboardState> {
    fn with_state<R>(&self, f: impl FnOnce(&DashboardState) -> R) -> R {
        f(&self.borrow())
    }

    fn update_state(&self, f: impl FnOnce(&mut DashboardState)) {
        f(&mut self.borrow_mut());
    }
}
