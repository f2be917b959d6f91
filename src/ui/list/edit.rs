use crate::restaurant::{Restaurant, RestaurantId};

/// Fields exposed by the edit form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Country,
    City,
    CuisineType,
    Rating,
    Review,
}

impl EditField {
    pub const ALL: [EditField; 6] = [
        EditField::Name,
        EditField::Country,
        EditField::City,
        EditField::CuisineType,
        EditField::Rating,
        EditField::Review,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EditField::Name => "Name",
            EditField::Country => "Country",
            EditField::City => "City",
            EditField::CuisineType => "Cuisine",
            EditField::Rating => "Rating",
            EditField::Review => "Review",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> EditField {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> EditField {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

/// Working copy of one restaurant, bound to the edit form.
///
/// Text fields are held as typed; they are folded back into a
/// [`Restaurant`] only on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    original: Restaurant,
    name: String,
    country: String,
    city: String,
    cuisine_type: String,
    rating: String,
    review: String,
    focused: EditField,
}

impl EditForm {
    pub fn from_restaurant(restaurant: Restaurant) -> Self {
        Self {
            name: restaurant.name.clone(),
            country: restaurant.country.clone(),
            city: restaurant.city.clone(),
            cuisine_type: restaurant.cuisine_type.clone(),
            rating: restaurant.rating.to_string(),
            review: restaurant.reviews.first().cloned().unwrap_or_default(),
            focused: EditField::Name,
            original: restaurant,
        }
    }

    pub fn id(&self) -> RestaurantId {
        self.original.id
    }

    pub fn original(&self) -> &Restaurant {
        &self.original
    }

    pub fn focused(&self) -> EditField {
        self.focused
    }

    pub fn value(&self, field: EditField) -> &str {
        match field {
            EditField::Name => &self.name,
            EditField::Country => &self.country,
            EditField::City => &self.city,
            EditField::CuisineType => &self.cuisine_type,
            EditField::Rating => &self.rating,
            EditField::Review => &self.review,
        }
    }

    fn value_mut(&mut self, field: EditField) -> &mut String {
        match field {
            EditField::Name => &mut self.name,
            EditField::Country => &mut self.country,
            EditField::City => &mut self.city,
            EditField::CuisineType => &mut self.cuisine_type,
            EditField::Rating => &mut self.rating,
            EditField::Review => &mut self.review,
        }
    }

    pub fn set_value(&mut self, field: EditField, value: String) {
        *self.value_mut(field) = value;
    }

    pub fn insert_char(&mut self, ch: char) {
        let field = self.focused;
        self.value_mut(field).push(ch);
    }

    pub fn backspace(&mut self) {
        let field = self.focused;
        self.value_mut(field).pop();
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.previous();
    }

    /// The record the form currently describes.
    ///
    /// An unparsable rating keeps the original one. The review field maps to
    /// the first review; clearing it removes that review, later reviews are
    /// kept as they were.
    pub fn to_restaurant(&self) -> Restaurant {
        let rating = self
            .rating
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .unwrap_or(self.original.rating);

        let mut reviews = self.original.reviews.clone();
        match (reviews.is_empty(), self.review.is_empty()) {
            (true, true) => {}
            (true, false) => reviews.push(self.review.clone()),
            (false, true) => {
                reviews.remove(0);
            }
            (false, false) => reviews[0] = self.review.clone(),
        }

        Restaurant {
            id: self.original.id,
            name: self.name.clone(),
            country: self.country.clone(),
            city: self.city.clone(),
            cuisine_type: self.cuisine_type.clone(),
            rating,
            reviews,
            favorite: self.original.favorite,
        }
    }
}

/// Edit-mode state machine: `Browsing ⇄ Editing(id)`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditMode {
    #[default]
    Browsing,
    Editing { form: EditForm },
}

impl EditMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditMode::Editing { .. })
    }

    pub fn editing_id(&self) -> Option<RestaurantId> {
        self.form().map(EditForm::id)
    }

    pub fn form(&self) -> Option<&EditForm> {
        match self {
            EditMode::Editing { form } => Some(form),
            EditMode::Browsing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(reviews: &[&str]) -> Restaurant {
        Restaurant {
            id: 1,
            name: "Pizza Place".to_string(),
            country: "Italy".to_string(),
            city: "Rome".to_string(),
            cuisine_type: "Italian".to_string(),
            rating: 4.8,
            reviews: reviews.iter().map(|r| r.to_string()).collect(),
            favorite: true,
        }
    }

    #[test]
    fn untouched_form_reproduces_record() {
        let original = restaurant(&["Great", "Loud"]);
        let form = EditForm::from_restaurant(original.clone());
        assert_eq!(form.to_restaurant(), original);
    }

    #[test]
    fn focus_wraps_both_ways() {
        assert_eq!(EditField::Review.next(), EditField::Name);
        assert_eq!(EditField::Name.previous(), EditField::Review);
        assert_eq!(EditField::City.next(), EditField::CuisineType);
    }

    #[test]
    fn typing_edits_focused_field() {
        let mut form = EditForm::from_restaurant(restaurant(&[]));
        form.backspace();
        form.backspace();
        form.backspace();
        form.backspace();
        form.backspace();
        form.insert_char('a');
        assert_eq!(form.value(EditField::Name), "Pizza a");
        form.focus_next();
        assert_eq!(form.focused(), EditField::Country);
    }

    #[test]
    fn invalid_rating_keeps_original() {
        let mut form = EditForm::from_restaurant(restaurant(&[]));
        form.set_value(EditField::Rating, "great".to_string());
        assert_eq!(form.to_restaurant().rating, 4.8);
        form.set_value(EditField::Rating, " 3.5 ".to_string());
        assert_eq!(form.to_restaurant().rating, 3.5);
        form.set_value(EditField::Rating, "NaN".to_string());
        assert_eq!(form.to_restaurant().rating, 4.8);
    }

    #[test]
    fn review_field_maps_to_first_review() {
        let mut form = EditForm::from_restaurant(restaurant(&["Great", "Loud"]));
        form.set_value(EditField::Review, "Superb".to_string());
        assert_eq!(form.to_restaurant().reviews, vec!["Superb", "Loud"]);

        form.set_value(EditField::Review, String::new());
        assert_eq!(form.to_restaurant().reviews, vec!["Loud"]);

        let mut empty = EditForm::from_restaurant(restaurant(&[]));
        assert!(empty.to_restaurant().reviews.is_empty());
        empty.set_value(EditField::Review, "First!".to_string());
        assert_eq!(empty.to_restaurant().reviews, vec!["First!"]);
    }

    #[test]
    fn edit_mode_accessors() {
        assert!(!EditMode::default().is_editing());
        let mode = EditMode::Editing {
            form: EditForm::from_restaurant(restaurant(&[])),
        };
        assert!(mode.is_editing());
        assert_eq!(mode.editing_id(), Some(1));
    }
}
