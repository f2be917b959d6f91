pub mod app;
pub mod card;
pub mod events;
pub mod filter_bar;
pub mod footer;
pub mod input;
pub mod layout;
pub mod list;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
