//! Shared fixtures and helpers.

#![allow(dead_code)]

pub mod mock_source;

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use restaurant_list::config::UiConfig;
use restaurant_list::restaurant::Restaurant;
use restaurant_list::ui::app::App;
use restaurant_list::ui::list::{ListIntent, ListReducer, ListState};
use restaurant_list::ui::mvi::Reducer;
use restaurant_list::ui::render::draw;

pub fn pizza_place() -> Restaurant {
    Restaurant {
        id: 1,
        name: "Pizza Place".to_string(),
        country: "Italy".to_string(),
        city: "Rome".to_string(),
        cuisine_type: "Italian".to_string(),
        rating: 4.8,
        reviews: vec!["Great".to_string()],
        favorite: false,
    }
}

pub fn sushi_bar() -> Restaurant {
    Restaurant {
        id: 2,
        name: "Sushi Bar".to_string(),
        country: "Japan".to_string(),
        city: "Tokyo".to_string(),
        cuisine_type: "Japanese".to_string(),
        rating: 4.2,
        reviews: vec!["Fresh".to_string()],
        favorite: true,
    }
}

pub fn mock_restaurants() -> Vec<Restaurant> {
    vec![pizza_place(), sushi_bar()]
}

/// Same records in the wire format served by the data source.
pub fn mock_restaurants_json() -> String {
    serde_json::to_string(&mock_restaurants()).expect("serialize fixtures")
}

pub fn loaded_state() -> ListState {
    ListReducer::reduce(
        ListState::default(),
        ListIntent::Loaded {
            restaurants: mock_restaurants(),
        },
    )
}

pub fn reduce_all(state: ListState, intents: Vec<ListIntent>) -> ListState {
    intents
        .into_iter()
        .fold(state, |state, intent| ListReducer::reduce(state, intent))
}

pub fn visible_ids(state: &ListState) -> Vec<i64> {
    state.visible().iter().map(|r| r.id).collect()
}

pub fn make_app() -> App {
    App::new(&UiConfig::default())
}

pub fn loaded_app() -> App {
    let mut app = make_app();
    app.on_restaurants_loaded(Ok(mock_restaurants()));
    app
}

/// Draws one frame of `app` into an off-screen buffer and returns its text.
pub fn render(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw frame");
    buffer_text(terminal.backend().buffer())
}

pub fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width.max(1) as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
