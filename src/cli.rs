//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;

use crate::restaurant::Restaurant;
use crate::ui::card::RestaurantCard;
use crate::ui::list::{ListIntent, ListReducer, ListState, Selection};
use crate::ui::mvi::Reducer;

#[derive(Debug, Parser)]
#[command(name = "restaurant-list", version, about = "Browse, filter and edit restaurants")]
pub struct Cli {
    /// Config file (default: ~/.config/restaurant-list/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the data source (HTTP URL or JSON file)
    #[arg(long, value_name = "URL|PATH")]
    pub source: Option<String>,

    /// Fetch once, print the filtered cards and exit
    #[arg(long)]
    pub print: bool,

    /// Only restaurants in this city (with --print)
    #[arg(long, requires = "print")]
    pub city: Option<String>,

    /// Only restaurants with this cuisine (with --print)
    #[arg(long, requires = "print")]
    pub cuisine: Option<String>,

    /// Only top rated restaurants (with --print)
    #[arg(long, requires = "print")]
    pub top_rated: bool,
}

impl Cli {
    /// List intents equivalent to the filter flags.
    pub fn filter_intents(&self) -> Vec<ListIntent> {
        let mut intents = Vec::new();
        if let Some(city) = &self.city {
            intents.push(ListIntent::SetCity(Selection::only(city.clone())));
        }
        if let Some(cuisine) = &self.cuisine {
            intents.push(ListIntent::SetCuisine(Selection::only(cuisine.clone())));
        }
        if self.top_rated {
            intents.push(ListIntent::SetTopRated(true));
        }
        intents
    }

    /// Runs the fetched collection through the same reducer the TUI uses and
    /// renders the visible cards as plain text.
    pub fn render_plain(&self, min_rating: f64, restaurants: Vec<Restaurant>) -> String {
        let mut state = ListReducer::reduce(
            ListState::new(min_rating),
            ListIntent::Loaded { restaurants },
        );
        for intent in self.filter_intents() {
            state = ListReducer::reduce(state, intent);
        }
        render_cards(&state)
    }
}

fn render_cards(state: &ListState) -> String {
    let mut out = String::new();
    for restaurant in state.visible() {
        let card = RestaurantCard::new(restaurant);
        out.push_str(&card.title());
        out.push('\n');
        for line in card.text_lines() {
            out.push_str("  ");
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }
    if out.is_empty() {
        out.push_str("No restaurants match the current filters.\n");
    }
    out
}
