//! REST API Bindings
//!
//! Frontend access to the `/foods` resource, organized behind a trait so the
//! dashboard actions can run against the real backend or a test fake.

mod client;
mod error;

use async_trait::async_trait;

use crate::models::{FoodPlate, NewFood};

pub use client::HttpFoodApi;
pub use error::ApiError;

pub type ApiResult<T> = Result<T, ApiError>;

/// CRUD operations over the foods resource
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait FoodApi {
    /// `GET /foods`
    async fn list_foods(&self) -> ApiResult<Vec<FoodPlate>>;

    /// `POST /foods`
    async fn create_food(&self, food: &NewFood) -> ApiResult<FoodPlate>;

    /// `PUT /foods/{id}` with the full record
    async fn update_food(&self, food: &FoodPlate) -> ApiResult<FoodPlate>;

    /// `DELETE /foods/{id}`
    async fn delete_food(&self, id: u32) -> ApiResult<()>;
}
