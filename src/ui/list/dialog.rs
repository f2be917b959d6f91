//! Edit form overlay, shown only while in edit mode.

use crate::ui::layout::centered_rect_by_size;
use crate::ui::list::edit::{EditField, EditMode};
use crate::ui::theme::{ACTIVE_HIGHLIGHT, MUTED_TEXT, POPUP_BORDER, TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub const EDIT_DIALOG_TITLE: &str = " Edit Restaurant ";

const DIALOG_WIDTH: u16 = 60;
const LABEL_WIDTH: usize = 9;

pub fn render_edit_dialog(frame: &mut Frame<'_>, edit: &EditMode) {
    let EditMode::Editing { form } = edit else {
        return;
    };

    let mut lines = Vec::with_capacity(EditField::ALL.len() + 2);
    lines.push(Line::from(""));
    for field in EditField::ALL {
        let focused = field == form.focused();
        let cursor = if focused { "_" } else { "" };
        let mut line = Line::from(vec![
            Span::styled(
                format!(" {:<width$}", format!("{}:", field.label()), width = LABEL_WIDTH),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::styled(
                format!("{}{}", form.value(field), cursor),
                Style::default().fg(TEXT),
            ),
        ]);
        if focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD));
        }
        lines.push(line);
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Enter: Save   Esc: Cancel",
        Style::default().fg(MUTED_TEXT),
    )));

    let height = lines.len() as u16 + 2;
    let area = centered_rect_by_size(DIALOG_WIDTH, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(EDIT_DIALOG_TITLE)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
