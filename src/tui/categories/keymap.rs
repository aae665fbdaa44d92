//! Key-to-action mapping for the category screen
//!
//! Pure function over a small snapshot of the screen's mode so each key
//! press resolves to at most one action and can be tested without a
//! terminal.

use iocraft::prelude::{KeyCode, KeyModifiers};

use super::model::{CategoryScreen, Dialog, FormField, ScreenAction};

/// Which mode owns the keyboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyMode {
    #[default]
    List,
    Search,
    Form,
    Detail,
    Confirm,
}

/// Read-only view of what `key_to_action` needs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeymapSnapshot {
    pub mode: KeyMode,
    pub form_field: FormField,
    pub has_toast: bool,
}

impl CategoryScreen {
    pub fn keymap_snapshot(&self) -> KeymapSnapshot {
        let mode = match &self.dialog {
            Dialog::Composing | Dialog::Editing(_) => KeyMode::Form,
            Dialog::Viewing(_) => KeyMode::Detail,
            Dialog::ConfirmingDelete(_) => KeyMode::Confirm,
            Dialog::Idle if self.search.focused => KeyMode::Search,
            Dialog::Idle => KeyMode::List,
        };
        KeymapSnapshot {
            mode,
            form_field: self.form_field,
            has_toast: self.toast.is_some(),
        }
    }
}

/// Map a key press to a screen action. `None` means the key is ignored.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &KeymapSnapshot,
) -> Option<ScreenAction> {
    // Ctrl-q quits from anywhere
    if code == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(ScreenAction::Quit);
    }

    match state.mode {
        KeyMode::Confirm => confirm_key(code),
        KeyMode::Form => form_key(code, modifiers, state.form_field),
        KeyMode::Detail => detail_key(code),
        KeyMode::Search => search_key(code, modifiers),
        KeyMode::List => list_key(code, modifiers, state.has_toast),
    }
}

fn confirm_key(code: KeyCode) -> Option<ScreenAction> {
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            Some(ScreenAction::ConfirmDelete)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(ScreenAction::CloseDialog),
        _ => None,
    }
}

fn form_key(code: KeyCode, modifiers: KeyModifiers, field: FormField) -> Option<ScreenAction> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('s') => Some(ScreenAction::Submit),
            _ => None,
        };
    }

    match code {
        KeyCode::Esc => Some(ScreenAction::CloseDialog),
        KeyCode::Enter => Some(ScreenAction::Submit),
        KeyCode::Tab => Some(ScreenAction::NextField),
        KeyCode::BackTab => Some(ScreenAction::PrevField),
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if field == FormField::Kind => {
            Some(ScreenAction::CycleKind)
        }
        KeyCode::Backspace => Some(ScreenAction::FormBackspace),
        KeyCode::Char(c) if field != FormField::Kind => Some(ScreenAction::FormInput(c)),
        _ => None,
    }
}

fn detail_key(code: KeyCode) -> Option<ScreenAction> {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => Some(ScreenAction::CloseDialog),
        KeyCode::Char('e') => Some(ScreenAction::OpenEdit),
        KeyCode::Char('d') => Some(ScreenAction::OpenDelete),
        _ => None,
    }
}

fn search_key(code: KeyCode, modifiers: KeyModifiers) -> Option<ScreenAction> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match code {
        KeyCode::Esc => Some(ScreenAction::ClearSearchAndExit),
        KeyCode::Enter | KeyCode::Tab => Some(ScreenAction::ExitSearch),
        KeyCode::Backspace => Some(ScreenAction::SearchBackspace),
        KeyCode::Char(c) => Some(ScreenAction::SearchInput(c)),
        _ => None,
    }
}

fn list_key(code: KeyCode, modifiers: KeyModifiers, has_toast: bool) -> Option<ScreenAction> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(ScreenAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(ScreenAction::MoveUp),
        KeyCode::Char('g') | KeyCode::Home => Some(ScreenAction::GoToTop),
        KeyCode::Char('G') | KeyCode::End => Some(ScreenAction::GoToBottom),
        KeyCode::Char('/') => Some(ScreenAction::FocusSearch),
        KeyCode::Char('n') => Some(ScreenAction::OpenAdd),
        KeyCode::Char('e') => Some(ScreenAction::OpenEdit),
        KeyCode::Enter | KeyCode::Char('v') => Some(ScreenAction::OpenView),
        KeyCode::Char('d') => Some(ScreenAction::OpenDelete),
        KeyCode::Char('r') => Some(ScreenAction::Refresh),
        KeyCode::Char('q') => Some(ScreenAction::Quit),
        KeyCode::Esc if has_toast => Some(ScreenAction::DismissToast),
        _ => None,
    }
}
