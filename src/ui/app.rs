use crate::config::UiConfig;
use crate::restaurant::Restaurant;
use crate::ui::card::{CardControl, RestaurantCard};
use crate::ui::list::{ListIntent, ListReducer, ListState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Restaurant list state (MVI pattern).
    list: ListState,
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            should_quit: false,
            list: ListState::new(config.min_rating),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    /// Dispatch an intent to the list reducer.
    pub fn dispatch(&mut self, intent: ListIntent) {
        tracing::debug!(?intent, "dispatching list intent");
        dispatch_mvi!(self, list, ListReducer, intent);
    }

    /// Result of the initial fetch, delivered from the runtime.
    pub fn on_restaurants_loaded(&mut self, result: Result<Vec<Restaurant>, String>) {
        match result {
            Ok(restaurants) => self.dispatch(ListIntent::Loaded { restaurants }),
            Err(message) => {
                tracing::error!(error = %message, "restaurant fetch failed");
                self.dispatch(ListIntent::LoadFailed { message });
            }
        }
    }

    /// Activates `control` on the selected card and bubbles its intent up.
    ///
    /// Returns false when no card is selected.
    pub fn activate_selected(&mut self, control: CardControl) -> bool {
        let Some(intent) = self
            .list
            .selected_restaurant()
            .map(|restaurant| RestaurantCard::new(restaurant).activate(control))
        else {
            return false;
        };
        self.dispatch(intent.into());
        true
    }
}
