use ratatui::{prelude::*, widgets::*};

use crate::app::dialogs::{FormField, NoticeKind};
use crate::messages::render::FormView;
use crate::models::Tile;

/// Label of the trailing add control
pub const ADD_CONTROL_LABEL: &str = "+ Add New Application";

/// List items for every tile followed by the add control
pub fn tile_items(tiles: &[Tile]) -> Vec<ListItem<'static>> {
    tiles
        .iter()
        .map(|tile| {
            ListItem::new(Line::from(vec![
                Span::styled(tile.name.clone(), Style::default().bold()),
                Span::styled(
                    format!("  {}", tile.description),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .chain(std::iter::once(
            ListItem::new(ADD_CONTROL_LABEL).style(Style::default().fg(Color::Green)),
        ))
        .collect()
}

/// Detail lines for one tile
pub fn tile_detail(tile: &Tile) -> Vec<Line<'static>> {
    let row = |label: &'static str, value: &str| {
        Line::from(vec![
            Span::styled(format!("{:<12}", label), Style::default().fg(Color::Cyan)),
            Span::raw(value.to_string()),
        ])
    };
    vec![
        Line::from(Span::styled(tile.name.clone(), Style::default().bold())),
        Line::raw(""),
        row("URL", &tile.url),
        row("Icon", &tile.icon),
        row("Description", &tile.description),
    ]
}

/// One line per form field, the active one highlighted
pub fn form_lines(form: &FormView) -> Vec<Line<'static>> {
    FormField::ALL
        .iter()
        .map(|field| {
            let active = *field == form.active;
            let marker = if active { "> " } else { "  " };
            let label_style = if active {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::Cyan)
            };
            Line::from(vec![
                Span::styled(format!("{}{:<16}", marker, field.label()), label_style),
                Span::raw(form.value(*field)),
            ])
        })
        .collect()
}

/// Notice border color
pub fn notice_color(kind: NoticeKind) -> Color {
    match kind {
        NoticeKind::Success => Color::Green,
        NoticeKind::Error => Color::Red,
    }
}

/// Rect of `percent_x` by `percent_y` centered in `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
