use crate::ui::theme::{GLOBAL_BORDER, TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const BROWSE_HINTS: &str =
    " ↑/↓: Select │ f: Favorite │ e: Edit │ d: Delete │ c: City │ k: Cuisine │ r: Top rated │ q: Quit";
const EDIT_HINTS: &str = " Tab: Next field │ Enter: Save │ Esc: Cancel";

pub struct Footer {
    editing: bool,
}

impl Footer {
    pub fn new(editing: bool) -> Self {
        Self { editing }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = if self.editing { EDIT_HINTS } else { BROWSE_HINTS };
        let version = format!("v{} ", VERSION);

        // char count, not bytes: hints contain box-drawing characters
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
