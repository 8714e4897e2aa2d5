use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::create::{CreateIntent, FormField};
use crate::ui::nav::Page;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.create_form().is_visible() {
        handle_form_key(app, key);
        return;
    }

    if app.detail().confirm_delete {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Esc => app.cancel_delete(),
            _ => {}
        }
        return;
    }

    if let KeyCode::Char(ch) = key.code {
        if let Some(page) = ch.to_digit(10).and_then(|d| Page::from_index(d as usize)) {
            app.navigate(page);
            return;
        }
    }

    if app.nav().page != Page::Home {
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Enter => app.open_highlighted(),
        KeyCode::Char('f') => app.cycle_filter(),
        KeyCode::Char('c') => app.clear_filter(),
        KeyCode::Char('r') => app.retry(),
        KeyCode::Char('s') => app.share(),
        KeyCode::Char('d') => app.request_delete(),
        KeyCode::Char('n') => app.open_create(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.submit_create();
        return;
    }

    let focus = app.create_form().form().map(|form| form.focus);
    match key.code {
        KeyCode::Esc => app.close_create(),
        KeyCode::Tab => app.form_input(CreateIntent::FocusNext),
        KeyCode::BackTab => app.form_input(CreateIntent::FocusPrev),
        KeyCode::Backspace => app.form_input(CreateIntent::Backspace),
        KeyCode::Left if focus == Some(FormField::Categories) => {
            app.form_input(CreateIntent::MoveCategory(-1))
        }
        KeyCode::Right if focus == Some(FormField::Categories) => {
            app.form_input(CreateIntent::MoveCategory(1))
        }
        KeyCode::Char(' ') | KeyCode::Enter if focus == Some(FormField::Categories) => {
            app.form_input(CreateIntent::ToggleCategory)
        }
        KeyCode::Enter if focus == Some(FormField::Content) => {
            app.form_input(CreateIntent::Input('\n'))
        }
        KeyCode::Enter => app.form_input(CreateIntent::FocusNext),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form_input(CreateIntent::Input(ch))
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_detection_ignores_shift() {
        let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        let plain_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let ctrl_shift_q = KeyEvent::new(
            KeyCode::Char('Q'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        );
        assert!(is_ctrl_char(ctrl_q, 'q'));
        assert!(!is_ctrl_char(plain_q, 'q'));
        assert!(!is_ctrl_char(ctrl_shift_q, 'q'));
    }
}
