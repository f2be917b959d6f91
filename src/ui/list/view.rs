use crate::ui::card::{RestaurantCard, CARD_HEIGHT};
use crate::ui::list::state::{ListState, LoadState};
use crate::ui::theme::{MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

pub const LOADING_TEXT: &str = "Loading restaurants...";
const EMPTY_TEXT: &str = "No restaurants match the current filters.";

/// Renders one card per visible restaurant, scrolled so the selected card
/// stays on screen.
pub fn render_list(frame: &mut Frame<'_>, area: Rect, state: &ListState) {
    frame.render_widget(Clear, area);
    if area.width == 0 || area.height == 0 {
        return;
    }

    match &state.load {
        LoadState::Loading => {
            render_message(frame, area, LOADING_TEXT.to_string(), MUTED_TEXT);
        }
        LoadState::Failed { message } => {
            render_message(
                frame,
                area,
                format!("Failed to load restaurants: {message}"),
                STATUS_ERROR,
            );
        }
        LoadState::Loaded => {
            let visible = state.visible();
            if visible.is_empty() {
                render_message(frame, area, EMPTY_TEXT.to_string(), MUTED_TEXT);
                return;
            }

            let capacity = (area.height / CARD_HEIGHT).max(1) as usize;
            let first = first_visible_index(state.selected, capacity);
            for (slot, (idx, restaurant)) in visible
                .iter()
                .enumerate()
                .skip(first)
                .take(capacity)
                .enumerate()
            {
                let y = area.y + slot as u16 * CARD_HEIGHT;
                let height = CARD_HEIGHT.min(area.y + area.height - y);
                let card_area = Rect {
                    x: area.x,
                    y,
                    width: area.width,
                    height,
                };
                let card = RestaurantCard::new(restaurant).selected(idx == state.selected);
                frame.render_widget(card.widget(), card_area);
            }
        }
    }
}

fn first_visible_index(selected: usize, capacity: usize) -> usize {
    (selected + 1).saturating_sub(capacity)
}

fn render_message(frame: &mut Frame<'_>, area: Rect, text: String, color: ratatui::style::Color) {
    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(text)])
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
