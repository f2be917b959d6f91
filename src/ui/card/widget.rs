use crate::restaurant::Restaurant;
use crate::ui::card::intent::CardIntent;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, CARD_BORDER, FAVORITE, MUTED_TEXT, SELECTED_BORDER, TEXT,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Rows a rendered card occupies, borders included.
pub const CARD_HEIGHT: u16 = 6;

const FAVORITE_ON: &str = "★";
const FAVORITE_OFF: &str = "☆";

/// Buttons a card exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardControl {
    Favorite,
    Delete,
    Edit,
}

pub struct RestaurantCard<'a> {
    restaurant: &'a Restaurant,
    selected: bool,
}

impl<'a> RestaurantCard<'a> {
    pub fn new(restaurant: &'a Restaurant) -> Self {
        Self {
            restaurant,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Intent emitted when `control` is activated. One activation, one intent.
    pub fn activate(&self, control: CardControl) -> CardIntent {
        match control {
            CardControl::Favorite => CardIntent::ToggleFavorite {
                id: self.restaurant.id,
            },
            CardControl::Delete => CardIntent::Delete {
                id: self.restaurant.id,
            },
            CardControl::Edit => CardIntent::Edit {
                restaurant: self.restaurant.clone(),
            },
        }
    }

    pub fn title(&self) -> String {
        let marker = if self.restaurant.favorite {
            FAVORITE_ON
        } else {
            FAVORITE_OFF
        };
        format!("{} {}", marker, self.restaurant.name)
    }

    /// Body rows without styling, in display order.
    pub fn text_lines(&self) -> Vec<String> {
        vec![
            self.restaurant.location(),
            self.restaurant.cuisine_label(),
            format!("Rating: {}", self.restaurant.rating),
            self.restaurant.review_preview().to_string(),
        ]
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(TEXT);
        let muted_style = Style::default().fg(MUTED_TEXT);
        let title_style = if self.restaurant.favorite {
            Style::default().fg(FAVORITE).add_modifier(Modifier::BOLD)
        } else {
            text_style.add_modifier(Modifier::BOLD)
        };

        let rows = self.text_lines();
        let mut lines: Vec<Line<'static>> = Vec::with_capacity(rows.len());
        for (idx, row) in rows.into_iter().enumerate() {
            let style = match idx {
                3 if self.restaurant.reviews.is_empty() => {
                    muted_style.add_modifier(Modifier::ITALIC)
                }
                3 => muted_style,
                _ => text_style,
            };
            lines.push(Line::from(Span::styled(row, style)));
        }

        let (border, background) = if self.selected {
            (SELECTED_BORDER, Style::default().bg(ACTIVE_HIGHLIGHT))
        } else {
            (CARD_BORDER, Style::default())
        };

        Paragraph::new(lines).style(background).block(
            Block::default()
                .title(Span::styled(format!(" {} ", self.title()), title_style))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
    }
}
