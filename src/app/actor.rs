//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        state: AppState,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state,
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Initial load
        let initial = self.state.refresh();
        self.dispatch(initial);
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    fn dispatch(&self, cmd: Option<NetworkCommand>) {
        if let Some(cmd) = cmd {
            let _ = self.network_tx.send(cmd);
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Dashboard
            UiEvent::NextTile => self.state.next_tile(),
            UiEvent::PrevTile => self.state.prev_tile(),
            UiEvent::Activate => self.state.activate(),
            UiEvent::OpenForm => self.state.open_form(),
            UiEvent::DeleteSelected => self.state.request_delete(),
            UiEvent::Refresh => {
                let cmd = self.state.refresh();
                self.dispatch(cmd);
            }

            // Add form
            UiEvent::FormChar(c) => self.state.form_char(c),
            UiEvent::FormBackspace => self.state.form_backspace(),
            UiEvent::FormNextField => self.state.form_next_field(),
            UiEvent::FormPrevField => self.state.form_prev_field(),
            UiEvent::FormEnter => {
                let cmd = self.state.form_enter();
                self.dispatch(cmd);
            }
            UiEvent::FormSubmit => {
                let cmd = self.state.submit_form();
                self.dispatch(cmd);
            }
            UiEvent::CloseForm => self.state.close_form(),

            // Delete prompt
            UiEvent::PromptChar(c) => self.state.prompt_char(c),
            UiEvent::PromptBackspace => self.state.prompt_backspace(),
            UiEvent::PromptConfirm => {
                let cmd = self.state.confirm_delete();
                self.dispatch(cmd);
            }
            UiEvent::PromptCancel => self.state.cancel_delete(),

            // Popups
            UiEvent::DismissNotice => self.state.dismiss_notice(),
            UiEvent::CloseDetail => self.state.close_detail(),
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
