use crate::restaurant::{Restaurant, RestaurantId};
use crate::ui::mvi::Intent;

/// Intents a card emits upward.
#[derive(Debug, Clone, PartialEq)]
pub enum CardIntent {
    ToggleFavorite { id: RestaurantId },
    Delete { id: RestaurantId },
    /// Carries the full record so the list can pre-fill its edit form
    /// without a lookup.
    Edit { restaurant: Restaurant },
}

impl Intent for CardIntent {}

impl CardIntent {
    /// Id of the restaurant this intent targets.
    pub fn id(&self) -> RestaurantId {
        match self {
            CardIntent::ToggleFavorite { id } | CardIntent::Delete { id } => *id,
            CardIntent::Edit { restaurant } => restaurant.id,
        }
    }
}
