//! Dashboard Actions
//!
//! Each action performs one API call and reconciles the cached list with the
//! server's answer. Nothing is changed locally before the server confirms.

use crate::api::{ApiError, FoodApi};
use crate::models::{FoodDraft, FoodPlate, NewFood};

use super::{DashboardError, DashboardHandle, DashboardResult};

/// Fetch all foods and replace the cached list, keeping server order
pub async fn load_foods<A, H>(api: &A, state: &H) -> DashboardResult<usize>
where
    A: FoodApi + ?Sized,
    H: DashboardHandle,
{
    log::info!("[DASHBOARD] Loading foods");
    let foods = api.list_foods().await?;
    let count = foods.len();
    state.update_state(|s| s.set_foods(foods));
    log::info!("[DASHBOARD] Loaded {} foods", count);
    Ok(count)
}

/// Create a food from `draft` (always available) and append it.
///
/// Failures are only logged: the list stays as it was and nothing is
/// reported to the user. An invalid draft is never sent, and a created
/// record whose id is already cached is dropped.
pub async fn add_food<A, H>(api: &A, state: &H, draft: FoodDraft) -> Option<FoodPlate>
where
    A: FoodApi + ?Sized,
    H: DashboardHandle,
{
    if let Err(reason) = draft.validate() {
        log::error!("[DASHBOARD] Failed to add food '{}': {}", draft.name, reason);
        return None;
    }
    let new_food = NewFood::from(draft);
    let created = match api.create_food(&new_food).await {
        Ok(created) => created,
        Err(err) => {
            log::error!("[DASHBOARD] Failed to add food '{}': {}", new_food.name, err);
            return None;
        }
    };

    let mut appended = false;
    state.update_state(|s| {
        if s.find_food(created.id).is_none() {
            s.push_food(created.clone());
            appended = true;
        }
    });
    if !appended {
        log::error!(
            "[DASHBOARD] Failed to add food '{}': server returned cached id {}",
            new_food.name,
            created.id
        );
        return None;
    }
    log::info!("[DASHBOARD] Added food {} ({})", created.id, created.name);
    Some(created)
}

/// Merge `draft` into the food being edited and save it.
///
/// The draft must be valid and the target still cached; otherwise this fails
/// before any request is sent. The server copy replaces the entry in place.
pub async fn update_food<A, H>(api: &A, state: &H, draft: FoodDraft) -> DashboardResult<FoodPlate>
where
    A: FoodApi + ?Sized,
    H: DashboardHandle,
{
    draft.validate().map_err(DashboardError::InvalidDraft)?;
    let merged = state.with_state(|s| {
        let id = s
            .editing_food
            .as_ref()
            .map(|food| food.id)
            .ok_or(DashboardError::NotEditing)?;
        let mut food = s
            .find_food(id)
            .cloned()
            .ok_or(DashboardError::FoodNotFound(id))?;
        food.apply_draft(&draft);
        Ok::<_, DashboardError>(food)
    })?;

    let updated = api.update_food(&merged).await?;
    check_reply_id(merged.id, &updated)?;
    log::info!("[DASHBOARD] Updated food {}", merged.id);
    apply_server_copy(state, merged.id, updated.clone());
    Ok(updated)
}

/// Delete on the server, then drop the cached entry
pub async fn delete_food<A, H>(api: &A, state: &H, id: u32) -> DashboardResult<()>
where
    A: FoodApi + ?Sized,
    H: DashboardHandle,
{
    api.delete_food(id).await?;
    let mut removed = false;
    state.update_state(|s| removed = s.remove_food(id));
    if removed {
        log::info!("[DASHBOARD] Deleted food {}", id);
    } else {
        log::warn!("[DASHBOARD] Deleted food {} was not cached", id);
    }
    Ok(())
}

/// Flip `available` on the server and replace the entry in place
pub async fn toggle_available<A, H>(api: &A, state: &H, id: u32) -> DashboardResult<FoodPlate>
where
    A: FoodApi + ?Sized,
    H: DashboardHandle,
{
    let mut food = state
        .with_state(|s| s.find_food(id).cloned())
        .ok_or(DashboardError::FoodNotFound(id))?;
    food.available = !food.available;

    let updated = api.update_food(&food).await?;
    check_reply_id(id, &updated)?;
    log::info!("[DASHBOARD] Food {} available={}", id, updated.available);
    apply_server_copy(state, id, updated.clone());
    Ok(updated)
}

/// A `PUT /foods/{id}` reply must describe the same food
fn check_reply_id(requested: u32, reply: &FoodPlate) -> DashboardResult<()> {
    if reply.id != requested {
        return Err(ApiError::InvalidPayload(format!(
            "update of food {} answered with food {}",
            requested, reply.id
        ))
        .into());
    }
    Ok(())
}

/// Responses are matched by id at arrival time; a record deleted while the
/// request was in flight stays deleted.
fn apply_server_copy<H: DashboardHandle>(state: &H, id: u32, food: FoodPlate) {
    let mut applied = false;
    state.update_state(|s| applied = s.replace_food(id, food));
    if !applied {
        log::warn!("[DASHBOARD] Dropping response for food {}: no longer cached", id);
    }
}

/// Log a failed action and surface it in the error banner
pub fn report_failure<H: DashboardHandle>(state: &H, action: &str, err: &DashboardError) {
    log::error!("[DASHBOARD] {} failed: {}", action, err);
    let message = format!("Could not {}: {}", action, err);
    state.update_state(|s| s.report_error(message));
}
