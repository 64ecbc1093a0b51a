//! App state - pure data structure with no I/O logic

use crate::app::dialogs::{AddForm, DeletePrompt, FormField, Notice};
use crate::app::tiles::TileListView;
use crate::messages::render::{FormView, PromptView};
use crate::messages::{Modal, RenderState};

/// Main application state - pure data, no I/O
pub struct AppState {
    pub title: String,
    pub base_url: String,

    // Dashboard
    pub view: TileListView,
    pub loaded: bool,

    // Requests
    pub next_request_id: u64,
    /// Only the newest list request may repopulate the view
    pub latest_list_id: Option<u64>,
    pub in_flight: usize,

    // Modals
    pub form: AddForm,
    pub prompt: Option<DeletePrompt>,
    pub notice: Option<Notice>,
    pub show_detail: bool,
    pub show_help: bool,

    pub status_line: Option<String>,
}

impl AppState {
    pub fn new(title: impl Into<String>, base_url: impl Into<String>) -> Self {
        AppState {
            title: title.into(),
            base_url: base_url.into(),
            view: TileListView::new(),
            loaded: false,
            next_request_id: 1,
            latest_list_id: None,
            in_flight: 0,
            form: AddForm::default(),
            prompt: None,
            notice: None,
            show_detail: false,
            show_help: false,
            status_line: None,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// The modal that owns the keyboard right now
    pub fn modal(&self) -> Modal {
        if self.notice.is_some() {
            Modal::Notice
        } else if self.prompt.is_some() {
            Modal::DeletePrompt
        } else if self.form.is_visible() {
            Modal::AddForm
        } else if self.show_detail {
            Modal::Detail
        } else if self.show_help {
            Modal::Help
        } else {
            Modal::None
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let form = self.form.is_visible().then(|| FormView {
            active: self.form.active,
            name: self.form.value(FormField::Name).to_string(),
            url: self.form.value(FormField::Url).to_string(),
            icon: self.form.value(FormField::Icon).to_string(),
            description: self.form.value(FormField::Description).to_string(),
            password_len: self.form.value(FormField::Password).chars().count(),
        });
        let prompt = self.prompt.as_ref().map(|p| PromptView {
            target: p.target().to_string(),
            entered_len: p.entered_len(),
        });

        RenderState {
            title: self.title.clone(),
            base_url: self.base_url.clone(),
            tiles: self.view.tiles().to_vec(),
            selected: self.view.selected(),
            modal: self.modal(),
            form,
            prompt,
            notice: self.notice.clone(),
            status_line: self.status_line.clone(),
            in_flight: self.in_flight,
            loaded: self.loaded,
        }
    }
}
