//! One restaurant rendered as a card.
//!
//! A card never changes data. It renders its restaurant and turns control
//! activations into [`CardIntent`]s for the list to reduce.

mod intent;
mod widget;

pub use intent::CardIntent;
pub use widget::{CardControl, RestaurantCard, CARD_HEIGHT};
