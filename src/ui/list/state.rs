use crate::restaurant::{Restaurant, RestaurantId};
use crate::ui::list::edit::EditMode;
use crate::ui::list::filter::{distinct_values, FilterCriteria};
use crate::ui::mvi::UiState;

/// Progress of the one-time fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed { message: String },
}

/// Everything the restaurant list owns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListState {
    pub load: LoadState,
    /// Owned collection; ids are unique.
    pub restaurants: Vec<Restaurant>,
    pub filter: FilterCriteria,
    pub edit: EditMode,
    /// Index into [`ListState::visible`].
    pub selected: usize,
}

impl UiState for ListState {}

impl ListState {
    pub fn new(min_rating: f64) -> Self {
        Self {
            filter: FilterCriteria::with_min_rating(min_rating),
            ..Self::default()
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.load, LoadState::Loaded)
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_editing()
    }

    /// Filtered view, recomputed on every call.
    pub fn visible(&self) -> Vec<&Restaurant> {
        self.filter.apply(&self.restaurants)
    }

    pub fn selected_restaurant(&self) -> Option<&Restaurant> {
        self.visible().get(self.selected).copied()
    }

    pub fn find(&self, id: RestaurantId) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    pub fn city_options(&self) -> Vec<String> {
        distinct_values(&self.restaurants, |r| r.city.as_str())
    }

    pub fn cuisine_options(&self) -> Vec<String> {
        distinct_values(&self.restaurants, |r| r.cuisine_type.as_str())
    }
}
