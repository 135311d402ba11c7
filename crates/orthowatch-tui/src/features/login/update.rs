//! Login screen key handling.
//!
//! Mutates the form and reports what the reducer should do next; task ids
//! and effects stay with the reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use orthowatch_core::session::Credentials;

use super::state::{LoginFormState, LoginPhase};
#[cfg(test)]
use super::state::LoginField;

/// Outcome of a key press on the login screen.
#[derive(Debug)]
pub enum LoginAction {
    None,
    /// The form validated; the reducer should spawn the login request.
    Submit(Credentials),
    /// Esc while a request is in flight; the reducer should cancel it.
    CancelSubmit,
}

pub fn handle_key(form: &mut LoginFormState, key: KeyEvent) -> LoginAction {
    // While submitting the form is frozen; only Esc is honored.
    if form.phase == LoginPhase::Submitting {
        if key.code == KeyCode::Esc {
            return LoginAction::CancelSubmit;
        }
        return LoginAction::None;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.focus = form.focus.next();
            LoginAction::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus = form.focus.prev();
            LoginAction::None
        }
        KeyCode::Enter => submit(form),
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.show_password = !form.show_password;
            LoginAction::None
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(field) = form.focused_field_mut() {
                field.insert_char(ch);
            }
            LoginAction::None
        }
        KeyCode::Backspace => {
            if let Some(field) = form.focused_field_mut() {
                field.backspace();
            }
            LoginAction::None
        }
        KeyCode::Delete => {
            if let Some(field) = form.focused_field_mut() {
                field.delete();
            }
            LoginAction::None
        }
        KeyCode::Left => {
            if let Some(field) = form.focused_field_mut() {
                field.move_left();
            }
            LoginAction::None
        }
        KeyCode::Right => {
            if let Some(field) = form.focused_field_mut() {
                field.move_right();
            }
            LoginAction::None
        }
        KeyCode::Home => {
            if let Some(field) = form.focused_field_mut() {
                field.move_home();
            }
            LoginAction::None
        }
        KeyCode::End => {
            if let Some(field) = form.focused_field_mut() {
                field.move_end();
            }
            LoginAction::None
        }
        _ => LoginAction::None,
    }
}

/// Pastes text into the focused field.
pub fn handle_paste(form: &mut LoginFormState, text: &str) {
    if form.phase == LoginPhase::Submitting {
        return;
    }
    if let Some(field) = form.focused_field_mut() {
        field.insert_str(text);
    }
}

fn submit(form: &mut LoginFormState) -> LoginAction {
    form.form_error = None;
    match form.validate() {
        Some(credentials) => LoginAction::Submit(credentials),
        None => LoginAction::None,
    }
}
