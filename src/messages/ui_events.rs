//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which modal currently owns the keyboard, highest priority first
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Modal {
    Notice,
    DeletePrompt,
    AddForm,
    Detail,
    Help,
    #[default]
    None,
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    // Dashboard navigation
    NextTile,
    PrevTile,
    /// Enter on the selected slot: tile details, or the add form on the add control
    Activate,
    OpenForm,
    /// Delete trigger on the selected tile; never activates it
    DeleteSelected,
    Refresh,

    // Add form
    FormChar(char),
    FormBackspace,
    FormNextField,
    FormPrevField,
    /// Enter inside the form: next field, or submit on the last one
    FormEnter,
    FormSubmit,
    CloseForm,

    // Delete prompt
    PromptChar(char),
    PromptBackspace,
    PromptConfirm,
    PromptCancel,

    // Popups
    DismissNotice,
    CloseDetail,
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on the active modal
pub fn key_to_ui_event(key: KeyEvent, modal: Modal) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    match modal {
        Modal::Notice => Some(UiEvent::DismissNotice),
        Modal::Help => Some(UiEvent::CloseHelp),
        Modal::Detail => match key.code {
            KeyCode::Char('d') | KeyCode::Delete => Some(UiEvent::DeleteSelected),
            _ => Some(UiEvent::CloseDetail),
        },
        Modal::DeletePrompt => match key.code {
            KeyCode::Esc => Some(UiEvent::PromptCancel),
            KeyCode::Enter => Some(UiEvent::PromptConfirm),
            KeyCode::Backspace => Some(UiEvent::PromptBackspace),
            KeyCode::Char(c) => Some(UiEvent::PromptChar(c)),
            _ => None,
        },
        Modal::AddForm => match key.code {
            KeyCode::Char('s') if ctrl => Some(UiEvent::FormSubmit),
            KeyCode::Esc => Some(UiEvent::CloseForm),
            KeyCode::Enter => Some(UiEvent::FormEnter),
            KeyCode::Tab | KeyCode::Down => Some(UiEvent::FormNextField),
            KeyCode::BackTab | KeyCode::Up => Some(UiEvent::FormPrevField),
            KeyCode::Backspace => Some(UiEvent::FormBackspace),
            KeyCode::Char(c) => Some(UiEvent::FormChar(c)),
            _ => None,
        },
        Modal::None => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Char('r') => Some(UiEvent::Refresh),
            KeyCode::Char('a') => Some(UiEvent::OpenForm),
            KeyCode::Char('d') | KeyCode::Delete => Some(UiEvent::DeleteSelected),
            KeyCode::Enter => Some(UiEvent::Activate),
            KeyCode::Down | KeyCode::Right | KeyCode::Tab | KeyCode::Char('j') => {
                Some(UiEvent::NextTile)
            }
            KeyCode::Up | KeyCode::Left | KeyCode::BackTab | KeyCode::Char('k') => {
                Some(UiEvent::PrevTile)
            }
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_in_form_never_triggers_dashboard_keys() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('d')), Modal::AddForm),
            Some(UiEvent::FormChar('d'))
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('q')), Modal::DeletePrompt),
            Some(UiEvent::PromptChar('q'))
        );
    }

    #[test]
    fn test_delete_and_activate_are_distinct() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('d')), Modal::None),
            Some(UiEvent::DeleteSelected)
        );
        assert_eq!(
            key_to_ui_event(press(KeyCode::Enter), Modal::None),
            Some(UiEvent::Activate)
        );
    }

    #[test]
    fn test_notice_swallows_any_key() {
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('d')), Modal::Notice),
            Some(UiEvent::DismissNotice)
        );
    }

    #[test]
    fn test_ctrl_s_submits_form() {
        let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(key, Modal::AddForm), Some(UiEvent::FormSubmit));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(key, Modal::DeletePrompt), Some(UiEvent::Quit));
    }
}
