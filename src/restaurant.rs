use serde::{Deserialize, Serialize};

/// Join key for every collection operation.
pub type RestaurantId = i64;

/// Text shown on a card when a restaurant has no reviews.
pub const NO_REVIEWS: &str = "No reviews yet";

/// One restaurant record as served by the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub country: String,
    pub city: String,
    pub cuisine_type: String,
    pub rating: f64,
    #[serde(default)]
    pub reviews: Vec<String>,
    #[serde(default)]
    pub favorite: bool,
}

impl Restaurant {
    /// `"<city>, <country>"`
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    /// `"<cuisineType> Cuisine"`
    pub fn cuisine_label(&self) -> String {
        format!("{} Cuisine", self.cuisine_type)
    }

    /// First review, or the "No reviews yet" fallback.
    pub fn review_preview(&self) -> &str {
        self.reviews.first().map(String::as_str).unwrap_or(NO_REVIEWS)
    }
}

/// Drops every record whose id was already seen, keeping the first one.
///
/// Returns the number of dropped records.
pub fn dedup_by_id(restaurants: &mut Vec<Restaurant>) -> usize {
    let before = restaurants.len();
    let mut seen = std::collections::HashSet::new();
    restaurants.retain(|restaurant| seen.insert(restaurant.id));
    before - restaurants.len()
}
