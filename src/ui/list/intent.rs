use crate::restaurant::Restaurant;
use crate::ui::card::CardIntent;
use crate::ui::list::edit::EditField;
use crate::ui::list::filter::Selection;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ListIntent {
    /// Initial fetch succeeded.
    Loaded { restaurants: Vec<Restaurant> },
    /// Initial fetch failed; the list stays empty.
    LoadFailed { message: String },

    SetCity(Selection),
    SetCuisine(Selection),
    /// Advance the city select to its next option.
    CycleCity,
    CycleCuisine,
    SetTopRated(bool),
    ToggleTopRated,

    SelectNext,
    SelectPrevious,

    /// Intent bubbled up from a card.
    Card(CardIntent),

    EditInput(char),
    EditBackspace,
    EditFocusNext,
    EditFocusPrevious,
    EditSetField { field: EditField, value: String },
    SubmitEdit,
    CancelEdit,
}

impl Intent for ListIntent {}

impl From<CardIntent> for ListIntent {
    fn from(intent: CardIntent) -> Self {
        ListIntent::Card(intent)
    }
}
