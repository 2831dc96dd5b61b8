//! Meal Model

use serde::{Deserialize, Serialize};

/// Catalog meal entity as returned by `GET /meals` and `POST /search`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub id: String,
    pub name: String,
    /// Price joined from the price table; may be missing for a new meal
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fats: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Meal {
    /// Freeze this catalog entry into a cart snapshot.
    ///
    /// Returns `None` when the server sent no price row; a meal without a
    /// price cannot be added to a cart.
    pub fn to_snapshot(&self) -> Option<MealSnapshot> {
        let price = self.price?;
        Some(MealSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            price,
            cuisine: self.cuisine.clone(),
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fats: self.fats,
            image_url: self.image_url.clone(),
        })
    }
}

/// Meal snapshot - immutable copy captured at add-to-cart time
///
/// Decoupled from later catalog edits: price and identity are frozen at
/// selection time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSnapshot {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fats: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Create/update meal payload (sent as multipart form fields)
#[derive(Debug, Clone)]
pub struct MealForm {
    pub name: String,
    pub ingredients: String,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
    pub price: f64,
    pub cuisine: Option<String>,
    /// Replacement image; `None` leaves any existing image unchanged
    pub image: Option<ImageAsset>,
}

/// Binary image attachment for a meal form
#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Server confirmation for a meal create/update
#[derive(Debug, Clone, Deserialize)]
pub struct MealMutation {
    pub message: String,
    #[serde(default)]
    pub meal: Option<Meal>,
    #[serde(default)]
    pub image_url: Option<String>,
}
