//! Frontend Models
//!
//! Data structures matching the `/foods` REST resource.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Food plate record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodPlate {
    pub id: u32,
    pub name: String,
    pub image: String,
    /// Decimal amount kept as text, e.g. "19.90"
    pub price: String,
    pub description: String,
    pub available: bool,
}

/// User-entered fields, without the server-assigned ones
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodDraft {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}

/// POST body for creating a food plate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFood {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}

impl From<FoodDraft> for NewFood {
    fn from(draft: FoodDraft) -> Self {
        Self {
            name: draft.name,
            image: draft.image,
            price: draft.price,
            description: draft.description,
            available: true,
        }
    }
}

impl FoodDraft {
    /// Checks applied before a draft is sent; mirrors what the server echo
    /// must pass in [`FoodPlate::validate`]
    pub fn validate(&self) -> Result<(), String> {
        if !is_decimal_text(&self.price) {
            return Err(format!("price {:?} is not a decimal amount", self.price));
        }
        Ok(())
    }
}

impl From<&FoodPlate> for FoodDraft {
    fn from(food: &FoodPlate) -> Self {
        Self {
            name: food.name.clone(),
            image: food.image.clone(),
            price: food.price.clone(),
            description: food.description.clone(),
        }
    }
}

impl FoodPlate {
    /// Overwrite the editable fields; id and availability are untouched
    pub fn apply_draft(&mut self, draft: &FoodDraft) {
        self.description = draft.description.clone();
        self.image = draft.image.clone();
        self.name = draft.name.clone();
        self.price = draft.price.clone();
    }

    /// Semantic checks on top of the serde schema
    pub fn validate(&self) -> Result<(), String> {
        if self.id == 0 {
            return Err(format!("food '{}' has id 0", self.name));
        }
        if !is_decimal_text(&self.price) {
            return Err(format!("food {} has non-decimal price {:?}", self.id, self.price));
        }
        Ok(())
    }

    /// Price for display, e.g. "R$ 19,90"
    pub fn display_price(&self) -> String {
        format!("R$ {}", self.price.replace('.', ","))
    }
}

/// Validate every record and reject duplicate ids
pub fn validate_food_list(foods: &[FoodPlate]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(foods.len());
    for food in foods {
        food.validate()?;
        if !seen.insert(food.id) {
            return Err(format!("duplicate food id {}", food.id));
        }
    }
    Ok(())
}

/// Digits with an optional `.` or `,` fraction
fn is_decimal_text(text: &str) -> bool {
    let text = text.trim();
    let (whole, fraction) = match text.find(['.', ',']) {
        Some(pos) => (&text[..pos], Some(&text[pos + 1..])),
        None => (text, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    all_digits(whole) && fraction.map_or(true, all_digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plate(id: u32, price: &str) -> FoodPlate {
        FoodPlate {
            id,
            name: format!("Plate {}", id),
            image: "https://example.com/plate.png".to_string(),
            price: price.to_string(),
            description: "Tasty".to_string(),
            available: true,
        }
    }

    #[test]
    fn test_new_food_is_available() {
        let draft = FoodDraft {
            name: "Ao molho".to_string(),
            image: "img".to_string(),
            price: "19.90".to_string(),
            description: "Macarrão".to_string(),
        };
        let new_food = NewFood::from(draft.clone());
        assert!(new_food.available);
        assert_eq!(new_food.name, draft.name);
        assert_eq!(new_food.price, draft.price);

        let body = serde_json::to_value(&new_food).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["available"], true);
    }

    #[test]
    fn test_apply_draft_keeps_identity() {
        let mut food = plate(7, "10.00");
        food.available = false;
        let draft = FoodDraft {
            name: "New".to_string(),
            image: "new.png".to_string(),
            price: "12.50".to_string(),
            description: "Changed".to_string(),
        };
        food.apply_draft(&draft);

        assert_eq!(food.id, 7);
        assert!(!food.available);
        assert_eq!(FoodDraft::from(&food), draft);
    }

    #[test]
    fn test_price_validation() {
        assert!(plate(1, "10").validate().is_ok());
        assert!(plate(1, "10.00").validate().is_ok());
        assert!(plate(1, "19,90").validate().is_ok());
        assert!(plate(1, "").validate().is_err());
        assert!(plate(1, "ten").validate().is_err());
        assert!(plate(1, "1.").validate().is_err());
        assert!(plate(1, "1.2.3").validate().is_err());
        assert!(plate(0, "1.00").validate().is_err());
    }

    #[test]
    fn test_draft_price_validation() {
        let draft = |price: &str| FoodDraft { price: price.to_string(), ..Default::default() };
        assert!(draft("19.90").validate().is_ok());
        assert!(draft("19,90").validate().is_ok());
        assert!(draft(" 7 ").validate().is_ok());
        assert!(draft("R$ 20").validate().is_err());
        assert!(draft("1.").validate().is_err());
        assert!(draft("").validate().is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        assert!(validate_food_list(&[plate(1, "1"), plate(2, "2")]).is_ok());
        let err = validate_food_list(&[plate(1, "1"), plate(1, "2")]).unwrap_err();
        assert!(err.contains("duplicate"));
    }

    #[test]
    fn test_deserialize_server_record() {
        let json = r#"{"id":1,"name":"A","image":"a.png","price":"10.00","description":"d","available":true}"#;
        let food: FoodPlate = serde_json::from_str(json).unwrap();
        assert_eq!(food, FoodPlate { name: "A".into(), image: "a.png".into(), description: "d".into(), ..plate(1, "10.00") });
    }

    #[test]
    fn test_display_price() {
        assert_eq!(plate(1, "19.90").display_price(), "R$ 19,90");
    }
}
