//! tiledash - terminal app dashboard
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async tile store calls

use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;

use tiledash::config::Settings;
use tiledash::constants::{APP_NAME, APP_VERSION};
use tiledash::messages::ui_events::key_to_ui_event;
use tiledash::messages::{Modal, NetworkCommand, NetworkResponse, RenderState, UiEvent};
use tiledash::ui::{centered_rect, form_lines, notice_color, tile_detail, tile_items};
use tiledash::{AppActor, AppState, NetworkActor, TileStoreClient};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load(std::env::args().nth(1))?;

    // Initialize logging to file
    let log_dir = settings
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."))
        .to_path_buf();
    let log_name = settings
        .log_file
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "tiledash.log".into());
    let file_appender = tracing_appender::rolling::never(log_dir, log_name);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    tracing::info!(version = APP_VERSION, base_url = %settings.base_url, "Starting {}", APP_NAME);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let client = TileStoreClient::new(settings.base_url.clone(), settings.request_timeout());
    let network_actor = NetworkActor::new(client, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let state = AppState::new(settings.dashboard_title.clone(), settings.base_url.clone());
    let app_actor = AppActor::new(state, net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    tracing::info!("Shutting down");
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, current_state.modal) {
                    let quit = event == UiEvent::Quit;
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Title bar
            Constraint::Min(0),     // Dashboard
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    draw_title_bar(f, state, main_chunks[0]);
    draw_dashboard(f, state, main_chunks[1]);
    draw_status_bar(f, state, main_chunks[2]);

    match state.modal {
        Modal::Help => draw_help_popup(f, area),
        Modal::Detail => draw_detail_popup(f, state, area),
        Modal::AddForm => draw_form_popup(f, state, area),
        Modal::DeletePrompt => draw_prompt_popup(f, state, area),
        Modal::Notice => {
            // Notices stack on top of whatever raised them
            if state.prompt.is_some() {
                draw_prompt_popup(f, state, area);
            } else if state.form.is_some() {
                draw_form_popup(f, state, area);
            }
            draw_notice_popup(f, state, area);
        }
        Modal::None => {}
    }
}

fn draw_title_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", state.title),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::styled(format!("  {}", state.base_url), Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_dashboard(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let title = if state.loaded {
        format!(" Apps ({}) ", state.tiles.len())
    } else {
        String::from(" Apps ")
    };

    let list = List::new(tile_items(&state.tiles))
        .block(Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    f.render_stateful_widget(list, chunks[0], &mut list_state);

    let detail_block = Block::default().borders(Borders::ALL).title(" Details ");
    let detail = match state.selected_tile() {
        Some(tile) => Paragraph::new(tile_detail(tile)),
        None => Paragraph::new("Press Enter or 'a' to add a new application.")
            .style(Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(detail.block(detail_block).wrap(Wrap { trim: false }), chunks[1]);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let text = if let Some(line) = &state.status_line {
        format!(" {} ", line)
    } else if state.in_flight > 0 {
        format!(" {} request(s) pending... ", state.in_flight)
    } else {
        String::from(" ↑/↓:select | Enter:open | a:add | d:delete | r:refresh | ?:help | q:quit ")
    };

    let style = if state.status_line.as_deref().is_some_and(|s| s.starts_with("Error")) {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    f.render_widget(Paragraph::new(text).style(style), area);
}

fn draw_detail_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    let Some(tile) = state.selected_tile() else {
        return;
    };
    let popup_area = centered_rect(60, 40, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" App (d:delete, any key to close) ")
        .style(Style::default().bg(Color::Black));

    let detail = Paragraph::new(tile_detail(tile))
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(detail, popup_area);
}

fn draw_form_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    let Some(form) = &state.form else {
        return;
    };
    let popup_area = centered_rect(70, 40, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Add New Application (Tab:next, Ctrl+S:submit, Esc:close) ")
        .style(Style::default().bg(Color::Black));

    let body = Paragraph::new(form_lines(form))
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(body, popup_area);
}

fn draw_prompt_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    let Some(prompt) = &state.prompt else {
        return;
    };
    let popup_area = centered_rect(60, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(format!(" Remove '{}' (Enter:confirm, Esc:cancel) ", prompt.target))
        .style(Style::default().bg(Color::Black));

    let text = format!(
        "Enter admin password to remove this app:\n\n{}",
        "*".repeat(prompt.entered_len)
    );
    let body = Paragraph::new(text).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(body, popup_area);
}

fn draw_notice_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    let Some(notice) = &state.notice else {
        return;
    };
    let popup_area = centered_rect(50, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(notice_color(notice.kind)))
        .title(format!(" {} ", notice.timestamp.format("%H:%M:%S")))
        .title_bottom(Line::from(" any key to dismiss ").right_aligned())
        .style(Style::default().bg(Color::Black));

    let body = Paragraph::new(notice.text.as_str())
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(body, popup_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 TILEDASH - Keyboard Shortcuts

 DASHBOARD
   ↑ / ↓ / j / k      Select tile
   Enter              Show tile / open add form
   a                  Add new application
   d / Delete         Remove selected application
   r                  Reload from server

 ADD FORM
   Tab / Shift+Tab    Next / previous field
   Enter              Next field, submit on last
   Ctrl+S             Submit
   Esc                Close

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}
