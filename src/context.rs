//! Dashboard Context
//!
//! Store and API client provided via Leptos Context API, plus the glue that
//! spawns dashboard actions on the local executor.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpFoodApi;
use crate::dashboard;
use crate::models::FoodDraft;
use crate::store::DashboardStore;

#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub store: DashboardStore,
    api: StoredValue<HttpFoodApi>,
}

impl DashboardContext {
    pub fn new(store: DashboardStore, api: HttpFoodApi) -> Self {
        Self {
            store,
            api: StoredValue::new(api),
        }
    }

    fn api(&self) -> HttpFoodApi {
        self.api.get_value()
    }

    /// Fetch the full list from the backend
    pub fn load(&self) {
        let (api, store) = (self.api(), self.store);
        spawn_local(async move {
            if let Err(err) = dashboard::load_foods(&api, &store).await {
                dashboard::report_failure(&store, "load foods", &err);
            }
        });
    }

    pub fn add(&self, draft: FoodDraft) {
        let (api, store) = (self.api(), self.store);
        spawn_local(async move {
            // Failures are logged inside the action
            if let Some(created) = dashboard::add_food(&api, &store, draft).await {
                log::debug!("[DASHBOARD] Food {} is now listed", created.id);
            }
        });
    }

    pub fn update(&self, draft: FoodDraft) {
        let (api, store) = (self.api(), self.store);
        spawn_local(async move {
            if let Err(err) = dashboard::update_food(&api, &store, draft).await {
                dashboard::report_failure(&store, "update food", &err);
            }
        });
    }

    pub fn delete(&self, id: u32) {
        let (api, store) = (self.api(), self.store);
        spawn_local(async move {
            if let Err(err) = dashboard::delete_food(&api, &store, id).await {
                dashboard::report_failure(&store, "delete food", &err);
            }
        });
    }

    pub fn toggle_available(&self, id: u32) {
        let (api, store) = (self.api(), self.store);
        spawn_local(async move {
            if let Err(err) = dashboard::toggle_available(&api, &store, id).await {
                dashboard::report_failure(&store, "change availability", &err);
            }
        });
    }
}

/// Get the dashboard context
pub fn use_dashboard() -> DashboardContext {
    expect_context::<DashboardContext>()
}
