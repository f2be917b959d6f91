use crate::ui::app::App;
use crate::ui::card::CardControl;
use crate::ui::list::ListIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.list().is_editing() {
        handle_edit_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up => app.dispatch(ListIntent::SelectPrevious),
        KeyCode::Down => app.dispatch(ListIntent::SelectNext),
        KeyCode::Char('c') => app.dispatch(ListIntent::CycleCity),
        KeyCode::Char('k') => app.dispatch(ListIntent::CycleCuisine),
        KeyCode::Char('r') => app.dispatch(ListIntent::ToggleTopRated),
        KeyCode::Char('f') => {
            app.activate_selected(CardControl::Favorite);
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            app.activate_selected(CardControl::Delete);
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            app.activate_selected(CardControl::Edit);
        }
        _ => {}
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Esc => ListIntent::CancelEdit,
        KeyCode::Enter => ListIntent::SubmitEdit,
        KeyCode::Tab | KeyCode::Down => ListIntent::EditFocusNext,
        KeyCode::BackTab | KeyCode::Up => ListIntent::EditFocusPrevious,
        KeyCode::Backspace => ListIntent::EditBackspace,
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            ListIntent::EditInput(ch)
        }
        _ => return,
    };
    app.dispatch(intent);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use crate::restaurant::Restaurant;
    use crate::ui::list::EditField;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new(&UiConfig::default());
        app.on_restaurants_loaded(Ok(vec![Restaurant {
            id: 1,
            name: "Pizza Place".to_string(),
            country: "Italy".to_string(),
            city: "Rome".to_string(),
            cuisine_type: "Italian".to_string(),
            rating: 4.8,
            reviews: vec![],
            favorite: false,
        }]));
        app
    }

    #[test]
    fn q_quits_while_browsing() {
        let mut app = loaded_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn q_is_text_while_editing() {
        let mut app = loaded_app();
        handle_key(&mut app, press(KeyCode::Char('e')));
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        let form = app.list().edit.form().unwrap();
        assert_eq!(form.value(EditField::Name), "Pizza Placeq");
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut app = loaded_app();
        handle_key(&mut app, press(KeyCode::Char('e')));
        let mut key = press(KeyCode::Char('c'));
        key.modifiers = KeyModifiers::CONTROL;
        handle_key(&mut app, key);
        assert!(app.should_quit());
    }

    #[test]
    fn esc_cancels_edit_without_quitting() {
        let mut app = loaded_app();
        handle_key(&mut app, press(KeyCode::Char('e')));
        handle_key(&mut app, press(KeyCode::Char('x')));
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.list().is_editing());
        assert!(!app.should_quit());
        assert_eq!(app.list().restaurants[0].name, "Pizza Place");
    }

    #[test]
    fn esc_does_not_quit_while_browsing() {
        let mut app = loaded_app();
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.should_quit());
    }

    #[test]
    fn filter_keys_drive_filter_bar() {
        let mut app = loaded_app();
        handle_key(&mut app, press(KeyCode::Char('c')));
        handle_key(&mut app, press(KeyCode::Char('r')));
        assert_eq!(app.list().filter.city.label(), "Rome");
        assert!(app.list().filter.top_rated_only);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = loaded_app();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.should_quit());
    }
}
