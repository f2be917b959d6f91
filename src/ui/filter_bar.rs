use crate::ui::list::FilterCriteria;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, SEPARATOR, TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const FILTER_BAR_TITLE: &str = " Filters ";

/// City select, cuisine select and the top-rated checkbox.
pub struct FilterBar<'a> {
    criteria: &'a FilterCriteria,
}

impl<'a> FilterBar<'a> {
    pub fn new(criteria: &'a FilterCriteria) -> Self {
        Self { criteria }
    }

    pub fn line(&self) -> Line<'static> {
        let text_style = Style::default().fg(TEXT);
        let value_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(SEPARATOR);
        let checkbox = if self.criteria.top_rated_only {
            "[x]"
        } else {
            "[ ]"
        };

        Line::from(vec![
            Span::styled(" City: ", text_style),
            Span::styled(self.criteria.city.label().to_string(), value_style),
            Span::styled("  │  ", separator_style),
            Span::styled("Cuisine: ", text_style),
            Span::styled(self.criteria.cuisine.label().to_string(), value_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{checkbox} "), value_style),
            Span::styled(
                format!("Top rated (>= {})", self.criteria.min_rating),
                text_style,
            ),
        ])
    }

    pub fn widget(&self) -> Paragraph<'static> {
        Paragraph::new(self.line()).block(
            Block::default()
                .title(FILTER_BAR_TITLE)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
