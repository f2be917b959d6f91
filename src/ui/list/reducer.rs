use crate::restaurant::dedup_by_id;
use crate::ui::card::CardIntent;
use crate::ui::list::edit::{EditForm, EditMode};
use crate::ui::list::intent::ListIntent;
use crate::ui::list::state::{ListState, LoadState};
use crate::ui::mvi::Reducer;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListState;
    type Intent = ListIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::Loaded { mut restaurants } => {
                if state.load != LoadState::Loading {
                    return state;
                }
                dedup_by_id(&mut restaurants);
                state.restaurants = restaurants;
                state.load = LoadState::Loaded;
                state.selected = 0;
            }
            ListIntent::LoadFailed { message } => {
                if state.load == LoadState::Loading {
                    state.load = LoadState::Failed { message };
                }
            }

            ListIntent::SetCity(selection) => state.filter.city = selection,
            ListIntent::SetCuisine(selection) => state.filter.cuisine = selection,
            ListIntent::CycleCity => {
                state.filter.city = state.filter.city.cycle(&state.city_options());
            }
            ListIntent::CycleCuisine => {
                state.filter.cuisine = state.filter.cuisine.cycle(&state.cuisine_options());
            }
            ListIntent::SetTopRated(enabled) => state.filter.top_rated_only = enabled,
            ListIntent::ToggleTopRated => {
                state.filter.top_rated_only = !state.filter.top_rated_only;
            }

            ListIntent::SelectNext => {
                let len = state.visible().len();
                state.selected = if state.selected + 1 >= len {
                    0
                } else {
                    state.selected + 1
                };
            }
            ListIntent::SelectPrevious => {
                let len = state.visible().len();
                state.selected = if state.selected == 0 {
                    len.saturating_sub(1)
                } else {
                    state.selected - 1
                };
            }

            ListIntent::Card(card) => {
                if state.is_editing() {
                    return state;
                }
                apply_card_intent(&mut state, card);
            }

            ListIntent::EditInput(ch) => {
                if let EditMode::Editing { form } = &mut state.edit {
                    form.insert_char(ch);
                }
            }
            ListIntent::EditBackspace => {
                if let EditMode::Editing { form } = &mut state.edit {
                    form.backspace();
                }
            }
            ListIntent::EditFocusNext => {
                if let EditMode::Editing { form } = &mut state.edit {
                    form.focus_next();
                }
            }
            ListIntent::EditFocusPrevious => {
                if let EditMode::Editing { form } = &mut state.edit {
                    form.focus_previous();
                }
            }
            ListIntent::EditSetField { field, value } => {
                if let EditMode::Editing { form } = &mut state.edit {
                    form.set_value(field, value);
                }
            }
            ListIntent::SubmitEdit => {
                if let EditMode::Editing { form } = std::mem::take(&mut state.edit) {
                    let updated = form.to_restaurant();
                    let id = updated.id;
                    if let Some(slot) = state.restaurants.iter_mut().find(|r| r.id == id) {
                        *slot = updated;
                    }
                }
            }
            ListIntent::CancelEdit => state.edit = EditMode::Browsing,
        }

        clamp_selection(&mut state);
        state
    }
}

fn apply_card_intent(state: &mut ListState, intent: CardIntent) {
    match intent {
        CardIntent::ToggleFavorite { id } => {
            if let Some(restaurant) = state.restaurants.iter_mut().find(|r| r.id == id) {
                restaurant.favorite = !restaurant.favorite;
            }
        }
        CardIntent::Delete { id } => state.restaurants.retain(|r| r.id != id),
        CardIntent::Edit { restaurant } => {
            if state.find(restaurant.id).is_some() {
                state.edit = EditMode::Editing {
                    form: EditForm::from_restaurant(restaurant),
                };
            }
        }
    }
}

fn clamp_selection(state: &mut ListState) {
    let len = state.visible().len();
    if state.selected >= len {
        state.selected = len.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restaurant::Restaurant;

    fn make(id: i64, rating: f64) -> Restaurant {
        Restaurant {
            id,
            name: format!("R{id}"),
            country: "X".to_string(),
            city: "Y".to_string(),
            cuisine_type: "Z".to_string(),
            rating,
            reviews: vec![],
            favorite: false,
        }
    }

    fn loaded(restaurants: Vec<Restaurant>) -> ListState {
        ListReducer::reduce(ListState::default(), ListIntent::Loaded { restaurants })
    }

    #[test]
    fn loaded_dedups_ids() {
        let state = loaded(vec![make(1, 1.0), make(1, 2.0)]);
        assert_eq!(state.restaurants.len(), 1);
        assert_eq!(state.restaurants[0].rating, 1.0);
    }

    #[test]
    fn selection_clamped_after_filtering() {
        let mut state = loaded(vec![make(1, 1.0), make(2, 5.0), make(3, 1.0)]);
        state = ListReducer::reduce(state, ListIntent::SelectNext);
        state = ListReducer::reduce(state, ListIntent::SelectNext);
        assert_eq!(state.selected, 2);
        state = ListReducer::reduce(state, ListIntent::ToggleTopRated);
        assert_eq!(state.selected, 0);
        assert_eq!(state.selected_restaurant().map(|r| r.id), Some(2));
    }

    #[test]
    fn select_previous_wraps_to_last() {
        let state = loaded(vec![make(1, 1.0), make(2, 1.0)]);
        let state = ListReducer::reduce(state, ListIntent::SelectPrevious);
        assert_eq!(state.selected, 1);
    }
}
