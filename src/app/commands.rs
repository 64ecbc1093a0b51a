//! Command handlers - business logic for processing UI events and outcomes

use crate::app::dialogs::{DeletePrompt, Notice};
use crate::app::tiles::Slot;
use crate::app::AppState;
use crate::constants::{
    ADD_NETWORK_ERROR, ADD_SUCCESS, DELETE_FALLBACK, DELETE_NETWORK_ERROR, DELETE_SUCCESS,
    MISSING_FIELDS, UNAUTHORIZED_PREFIX,
};
use crate::error::ApiError;
use crate::messages::{NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_tile(&mut self) {
        self.view.select_next();
    }

    pub fn prev_tile(&mut self) {
        self.view.select_prev();
    }

    /// Enter on the selected slot
    pub fn activate(&mut self) {
        if matches!(self.view.selected_slot(), Slot::Tile(_)) {
            self.show_detail = true;
        } else {
            self.open_form();
        }
    }

    pub fn close_detail(&mut self) {
        self.show_detail = false;
    }

    // ========================
    // Listing
    // ========================

    pub fn refresh(&mut self) -> Option<NetworkCommand> {
        let id = self.next_id();
        self.latest_list_id = Some(id);
        self.in_flight += 1;
        self.status_line = Some(String::from("Loading apps..."));
        Some(NetworkCommand::ListApps { id })
    }

    // ========================
    // Add form
    // ========================

    pub fn open_form(&mut self) {
        self.show_detail = false;
        self.form.open();
    }

    pub fn close_form(&mut self) {
        self.form.close();
    }

    pub fn form_char(&mut self, c: char) {
        self.form.enter_char(c);
    }

    pub fn form_backspace(&mut self) {
        self.form.backspace();
    }

    pub fn form_next_field(&mut self) {
        self.form.next_field();
    }

    pub fn form_prev_field(&mut self) {
        self.form.prev_field();
    }

    /// Enter inside the form: advance, or submit from the last field
    pub fn form_enter(&mut self) -> Option<NetworkCommand> {
        if self.form.active.is_last() {
            self.submit_form()
        } else {
            self.form.next_field();
            None
        }
    }

    /// Send the form. The form stays open until the server confirms.
    pub fn submit_form(&mut self) -> Option<NetworkCommand> {
        match self.form.take_submission() {
            Ok((tile, credential)) => {
                let id = self.next_id();
                self.in_flight += 1;
                Some(NetworkCommand::AddApp { id, tile, credential })
            }
            Err(_) => {
                self.notice = Some(Notice::error(MISSING_FIELDS));
                None
            }
        }
    }

    // ========================
    // Delete prompt
    // ========================

    /// Open the password prompt for the selected tile
    pub fn request_delete(&mut self) {
        if let Slot::Tile(tile) = self.view.selected_slot() {
            let prompt = DeletePrompt::new(tile.name.clone());
            self.show_detail = false;
            self.prompt = Some(prompt);
        }
    }

    pub fn prompt_char(&mut self, c: char) {
        if let Some(prompt) = self.prompt.as_mut() {
            prompt.enter_char(c);
        }
    }

    pub fn prompt_backspace(&mut self) {
        if let Some(prompt) = self.prompt.as_mut() {
            prompt.backspace();
        }
    }

    /// Cancelling is a no-op, not an error
    pub fn cancel_delete(&mut self) {
        self.prompt = None;
    }

    pub fn confirm_delete(&mut self) -> Option<NetworkCommand> {
        let (name, credential) = self.prompt.take()?.into_request();
        let id = self.next_id();
        self.in_flight += 1;
        Some(NetworkCommand::DeleteApp { id, name, credential })
    }

    // ========================
    // Popups
    // ========================

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match response {
            NetworkResponse::AppsListed { id, result } => {
                if self.latest_list_id != Some(id) {
                    tracing::debug!(id, "Dropping stale app list");
                    return;
                }
                self.latest_list_id = None;
                match result {
                    Ok(tiles) => {
                        self.view.render_all(tiles);
                        self.loaded = true;
                        self.status_line = None;
                    }
                    Err(e) => {
                        self.status_line = Some(format!("Error fetching apps: {}", e));
                    }
                }
            }
            NetworkResponse::AppAdded { tile, result, .. } => match result {
                Ok(()) => {
                    self.view.append_one(tile);
                    self.form.reset();
                    self.notice = Some(Notice::success(ADD_SUCCESS));
                }
                Err(e) => self.notice = Some(Notice::error(add_failure_text(&e))),
            },
            NetworkResponse::AppDeleted { name, result, .. } => match result {
                Ok(()) => {
                    self.view.remove_one(&name);
                    self.notice = Some(Notice::success(DELETE_SUCCESS));
                }
                Err(e) => self.notice = Some(Notice::error(delete_failure_text(&e))),
            },
        }
    }
}

/// User-facing text for a failed add
pub fn add_failure_text(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) => String::from(ADD_NETWORK_ERROR),
        ApiError::Unauthorized { message } => format!("{}: {}", UNAUTHORIZED_PREFIX, message),
        ApiError::Generic { message, .. } => message.clone(),
    }
}

/// User-facing text for a failed delete
pub fn delete_failure_text(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) => String::from(DELETE_NETWORK_ERROR),
        ApiError::Unauthorized { message } => format!("{}: {}", UNAUTHORIZED_PREFIX, message),
        ApiError::Generic { message, .. } if message == DELETE_FALLBACK => message.clone(),
        ApiError::Generic { message, .. } => format!("{}: {}", DELETE_FALLBACK, message),
    }
}
