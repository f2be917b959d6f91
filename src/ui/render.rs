use crate::ui::app::App;
use crate::ui::filter_bar::FilterBar;
use crate::ui::footer::Footer;
use crate::ui::layout::layout_regions;
use crate::ui::list::{render_edit_dialog, render_list};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const APP_TITLE: &str = " Restaurants ";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let list = app.list();

    // The filter bar only exists once data has loaded.
    if list.is_loaded() {
        frame.render_widget(FilterBar::new(&list.filter).widget(), header);
    } else {
        let title = Paragraph::new(Line::from(Span::styled(
            APP_TITLE,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
        frame.render_widget(title, header);
    }

    render_list(frame, body, list);
    frame.render_widget(Footer::new(list.is_editing()).widget(footer), footer);

    render_edit_dialog(frame, &list.edit);
}
