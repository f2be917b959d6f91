pub mod cli;
pub mod config;
pub mod logging;
pub mod restaurant;
pub mod source;
pub mod ui;
