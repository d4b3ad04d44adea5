//! HTTP Food API Client
//!
//! `reqwest`-based implementation of [`FoodApi`]. On wasm32 reqwest goes
//! through the browser's `fetch`.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, FoodApi};
use crate::models::{validate_food_list, FoodPlate, NewFood};

const FOODS_ENDPOINT: &str = "foods";

#[derive(Debug, Clone)]
pub struct HttpFoodApi {
    client: Client,
    base_url: Url,
}

impl HttpFoodApi {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn build_url(&self, endpoint: &str) -> ApiResult<Url> {
        self.base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{}{}: {}", self.base_url, endpoint, e)))
    }

    fn food_url(&self, id: u32) -> ApiResult<Url> {
        self.build_url(&format!("{}/{}", FOODS_ENDPOINT, id))
    }

    async fn handle_response_status(response: Response) -> ApiResult<Response> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn read_body(response: Response) -> ApiResult<String> {
        let response = Self::handle_response_status(response).await?;
        Ok(response.text().await?)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    Ok(serde_json::from_str(body)?)
}

/// Decode and validate a single record
pub(crate) fn decode_food(body: &str) -> ApiResult<FoodPlate> {
    let food: FoodPlate = decode(body)?;
    food.validate().map_err(ApiError::InvalidPayload)?;
    Ok(food)
}

/// Decode and validate a record list (ids must be unique)
pub(crate) fn decode_food_list(body: &str) -> ApiResult<Vec<FoodPlate>> {
    let foods: Vec<FoodPlate> = decode(body)?;
    validate_food_list(&foods).map_err(ApiError::InvalidPayload)?;
    Ok(foods)
}

#[async_trait(?Send)]
impl FoodApi for HttpFoodApi {
    async fn list_foods(&self) -> ApiResult<Vec<FoodPlate>> {
        let url = self.build_url(FOODS_ENDPOINT)?;
        log::debug!("[API] GET {}", url);
        let response = self.client.get(url).send().await?;
        decode_food_list(&Self::read_body(response).await?)
    }

    async fn create_food(&self, food: &NewFood) -> ApiResult<FoodPlate> {
        let url = self.build_url(FOODS_ENDPOINT)?;
        log::debug!("[API] POST {}", url);
        let response = self.client.post(url).json(food).send().await?;
        decode_food(&Self::read_body(response).await?)
    }

    async fn update_food(&self, food: &FoodPlate) -> ApiResult<FoodPlate> {
        let url = self.food_url(food.id)?;
        log::debug!("[API] PUT {}", url);
        let response = self.client.put(url).json(food).send().await?;
        decode_food(&Self::read_body(response).await?)
    }

    async fn delete_food(&self, id: u32) -> ApiResult<()> {
        let url = self.food_url(id)?;
        log::debug!("[API] DELETE {}", url);
        let response = self.client.delete(url).send().await?;
        // Delete responses carry no meaningful body
        Self::handle_response_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> HttpFoodApi {
        HttpFoodApi::new(Url::parse(base).unwrap())
    }

    #[test]
    fn test_build_urls() {
        let api = api("http://localhost:3333/");
        assert_eq!(api.build_url(FOODS_ENDPOINT).unwrap().as_str(), "http://localhost:3333/foods");
        assert_eq!(api.food_url(42).unwrap().as_str(), "http://localhost:3333/foods/42");
    }

    #[test]
    fn test_build_urls_keep_prefix() {
        let api = api("https://example.com/api/");
        assert_eq!(api.food_url(1).unwrap().as_str(), "https://example.com/api/foods/1");
        assert_eq!(api.build_url("/foods").unwrap().as_str(), "https://example.com/api/foods");
    }

    #[test]
    fn test_decode_food_list_keeps_server_order() {
        let body = r#"[
            {"id":3,"name":"C","image":"c.png","price":"3.00","description":"","available":true},
            {"id":1,"name":"A","image":"a.png","price":"1.00","description":"","available":false}
        ]"#;
        let foods = decode_food_list(body).unwrap();
        let ids: Vec<u32> = foods.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert!(!foods[1].available);
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        let err = decode_food(r#"{"id":"one","name":"A"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_decode_rejects_invalid_records() {
        let bad_price = r#"{"id":1,"name":"A","image":"","price":"cheap","description":"","available":true}"#;
        assert!(matches!(decode_food(bad_price), Err(ApiError::InvalidPayload(_))));

        let duplicated = r#"[
            {"id":1,"name":"A","image":"","price":"1","description":"","available":true},
            {"id":1,"name":"B","image":"","price":"2","description":"","available":true}
        ]"#;
        assert!(matches!(decode_food_list(duplicated), Err(ApiError::InvalidPayload(_))));
    }
}
