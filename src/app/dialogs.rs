//! Modal state: the add form, the delete password prompt and notices

use crate::models::{Credential, Tile};

/// Add form visibility. Toggles indefinitely, starts hidden.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FormVisibility {
    #[default]
    Hidden,
    Visible,
}

/// Add form input field, in tab order
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FormField {
    #[default]
    Name,
    Url,
    Icon,
    Description,
    Password,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Url,
        FormField::Icon,
        FormField::Description,
        FormField::Password,
    ];

    pub fn next(&self) -> FormField {
        match self {
            FormField::Name => FormField::Url,
            FormField::Url => FormField::Icon,
            FormField::Icon => FormField::Description,
            FormField::Description => FormField::Password,
            FormField::Password => FormField::Name,
        }
    }

    pub fn prev(&self) -> FormField {
        match self {
            FormField::Name => FormField::Password,
            FormField::Url => FormField::Name,
            FormField::Icon => FormField::Url,
            FormField::Description => FormField::Icon,
            FormField::Password => FormField::Description,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Url => "URL",
            FormField::Icon => "Icon URL",
            FormField::Description => "Description",
            FormField::Password => "Admin Password",
        }
    }

    pub fn is_last(&self) -> bool {
        *self == FormField::Password
    }
}

/// Submission rejected before any request was sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingFields;

/// The add-tile form. No `Debug`: it may hold a password.
#[derive(Clone, Default)]
pub struct AddForm {
    visibility: FormVisibility,
    pub active: FormField,
    name: String,
    url: String,
    icon: String,
    description: String,
    password: String,
}

impl AddForm {
    pub fn is_visible(&self) -> bool {
        self.visibility == FormVisibility::Visible
    }

    pub fn open(&mut self) {
        self.visibility = FormVisibility::Visible;
        self.active = FormField::Name;
    }

    /// Hide the form. Typed display fields survive, the password does not.
    pub fn close(&mut self) {
        self.visibility = FormVisibility::Hidden;
        self.password.clear();
    }

    /// Hide the form and forget everything typed
    pub fn reset(&mut self) {
        *self = AddForm::default();
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Url => &self.url,
            FormField::Icon => &self.icon,
            FormField::Description => &self.description,
            FormField::Password => &self.password,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Url => &mut self.url,
            FormField::Icon => &mut self.icon,
            FormField::Description => &mut self.description,
            FormField::Password => &mut self.password,
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let field = self.active;
        self.value_mut(field).push(c);
    }

    pub fn backspace(&mut self) {
        let field = self.active;
        self.value_mut(field).pop();
    }

    pub fn next_field(&mut self) {
        self.active = self.active.next();
    }

    pub fn prev_field(&mut self) {
        self.active = self.active.prev();
    }

    /// Read the fields verbatim for submission.
    ///
    /// Only presence is checked. On success the password buffer is emptied
    /// and its value moves into the returned credential.
    pub fn take_submission(&mut self) -> Result<(Tile, Credential), MissingFields> {
        if FormField::ALL.iter().any(|f| self.value(*f).is_empty()) {
            return Err(MissingFields);
        }
        let tile = Tile::new(
            self.name.clone(),
            self.url.clone(),
            self.icon.clone(),
            self.description.clone(),
        );
        let credential = Credential::new(std::mem::take(&mut self.password));
        Ok((tile, credential))
    }
}

/// Password prompt for deleting one tile
#[derive(Clone)]
pub struct DeletePrompt {
    target: String,
    buffer: String,
}

impl DeletePrompt {
    pub fn new(target: impl Into<String>) -> Self {
        DeletePrompt {
            target: target.into(),
            buffer: String::new(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn entered_len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn enter_char(&mut self, c: char) {
        self.buffer.push(c);
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Consume the prompt. An empty entry is still a value.
    pub fn into_request(self) -> (String, Credential) {
        (self.target, Credential::new(self.buffer))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A modal outcome message, dismissed by any key
#[derive(Clone, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub timestamp: chrono::DateTime<chrono::Local>,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            text: text.into(),
            timestamp: chrono::Local::now(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Error,
            text: text.into(),
            timestamp: chrono::Local::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(form: &mut AddForm, values: [&str; 5]) {
        for value in values {
            for c in value.chars() {
                form.enter_char(c);
            }
            form.next_field();
        }
    }

    #[test]
    fn test_form_starts_hidden_and_toggles() {
        let mut form = AddForm::default();
        assert!(!form.is_visible());
        form.open();
        assert!(form.is_visible());
        form.close();
        assert!(!form.is_visible());
        form.open();
        assert!(form.is_visible());
    }

    #[test]
    fn test_submission_reads_fields_verbatim() {
        let mut form = AddForm::default();
        form.open();
        fill(&mut form, [" X ", "not a url", "i.png", "d", "pw"]);

        let (tile, credential) = form.take_submission().unwrap();
        assert_eq!(tile, Tile::new(" X ", "not a url", "i.png", "d"));
        assert_eq!(credential.expose(), "pw");
        assert_eq!(form.value(FormField::Password), "");
    }

    #[test]
    fn test_missing_field_keeps_everything() {
        let mut form = AddForm::default();
        form.open();
        fill(&mut form, ["X", "u", "", "d", "pw"]);

        assert_eq!(form.take_submission().unwrap_err(), MissingFields);
        assert_eq!(form.value(FormField::Password), "pw");
    }

    #[test]
    fn test_close_drops_password_only() {
        let mut form = AddForm::default();
        form.open();
        fill(&mut form, ["X", "u", "i", "d", "pw"]);
        form.close();
        assert_eq!(form.value(FormField::Name), "X");
        assert_eq!(form.value(FormField::Password), "");
    }

    #[test]
    fn test_backspace_edits_active_field() {
        let mut form = AddForm::default();
        form.enter_char('a');
        form.enter_char('b');
        form.backspace();
        assert_eq!(form.value(FormField::Name), "a");
        form.prev_field();
        assert_eq!(form.active, FormField::Password);
    }

    #[test]
    fn test_prompt_empty_entry_is_a_value() {
        let prompt = DeletePrompt::new("Wiki");
        let (name, credential) = prompt.into_request();
        assert_eq!(name, "Wiki");
        assert_eq!(credential.expose(), "");
    }
}
