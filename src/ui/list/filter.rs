use crate::restaurant::Restaurant;

/// Default threshold of the "top rated" checkbox.
pub const DEFAULT_MIN_RATING: f64 = 4.5;

/// Value of a select control: either no constraint or one exact value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Any,
    Only(String),
}

impl Selection {
    pub fn only(value: impl Into<String>) -> Self {
        Selection::Only(value.into())
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::Any => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Selection::Any => "Any",
            Selection::Only(value) => value,
        }
    }

    /// Next option in `Any, options[0], .., options[n-1], Any` order.
    ///
    /// A selection that is no longer among `options` restarts at `Any`.
    pub fn cycle(&self, options: &[String]) -> Selection {
        match self {
            Selection::Any => options
                .first()
                .map(|first| Selection::Only(first.clone()))
                .unwrap_or(Selection::Any),
            Selection::Only(current) => {
                match options.iter().position(|option| option == current) {
                    Some(idx) if idx + 1 < options.len() => {
                        Selection::Only(options[idx + 1].clone())
                    }
                    _ => Selection::Any,
                }
            }
        }
    }
}

/// Filter bar state. All predicates are ANDed.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub city: Selection,
    pub cuisine: Selection,
    pub top_rated_only: bool,
    pub min_rating: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::with_min_rating(DEFAULT_MIN_RATING)
    }
}

impl FilterCriteria {
    pub fn with_min_rating(min_rating: f64) -> Self {
        Self {
            city: Selection::Any,
            cuisine: Selection::Any,
            top_rated_only: false,
            min_rating,
        }
    }

    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        self.city.matches(&restaurant.city)
            && self.cuisine.matches(&restaurant.cuisine_type)
            && (!self.top_rated_only || restaurant.rating >= self.min_rating)
    }

    pub fn apply<'a>(&self, restaurants: &'a [Restaurant]) -> Vec<&'a Restaurant> {
        restaurants.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Sorted distinct values of one field, used as select options.
pub fn distinct_values<F>(restaurants: &[Restaurant], field: F) -> Vec<String>
where
    F: Fn(&Restaurant) -> &str,
{
    let mut values: Vec<String> = restaurants.iter().map(|r| field(r).to_string()).collect();
    values.sort();
    values.dedup();
    values
}
