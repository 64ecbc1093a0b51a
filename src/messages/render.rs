//! Render state - data structure sent from App layer to UI for rendering

use crate::app::dialogs::{FormField, Notice};
use crate::messages::ui_events::Modal;
use crate::models::Tile;

/// Add form as the UI sees it. The password is only a length.
#[derive(Debug, Clone, Default)]
pub struct FormView {
    pub active: FormField,
    pub name: String,
    pub url: String,
    pub icon: String,
    pub description: String,
    pub password_len: usize,
}

impl FormView {
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Name => self.name.clone(),
            FormField::Url => self.url.clone(),
            FormField::Icon => self.icon.clone(),
            FormField::Description => self.description.clone(),
            FormField::Password => "*".repeat(self.password_len),
        }
    }
}

/// Delete prompt as the UI sees it
#[derive(Debug, Clone)]
pub struct PromptView {
    pub target: String,
    pub entered_len: usize,
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub title: String,
    pub base_url: String,

    // Dashboard; the add control is implied after the last tile
    pub tiles: Vec<Tile>,
    pub selected: usize,

    pub modal: Modal,
    pub form: Option<FormView>,
    pub prompt: Option<PromptView>,
    pub notice: Option<Notice>,

    pub status_line: Option<String>,
    pub in_flight: usize,
    pub loaded: bool,
}

impl RenderState {
    pub fn selected_tile(&self) -> Option<&Tile> {
        self.tiles.get(self.selected)
    }
}
