//! Small widgets drawn around the ranked table: status line, help line and
//! the confirm popup.

use crate::app::{HelpEntry, ViewModel};
use crate::config::Theme;
use crate::core::human_readable;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

/// `selected/total | N files, SIZE | message`
pub fn draw_status_line(frame: &mut Frame, area: Rect, view: &ViewModel, theme: &Theme) {
    let position = match view.selected {
        Some(idx) => format!("{}/{}", idx + 1, view.rows.len()),
        None => format!("0/{}", view.rows.len()),
    };

    let mut spans = vec![Span::styled(
        format!(
            " {}  {} files, {}",
            position,
            view.summary.files,
            human_readable(view.summary.bytes)
        ),
        theme.status_line_style(),
    )];

    if let Some(status) = view.status {
        let style = if status.is_error() {
            theme.error_style()
        } else {
            theme.status_line_style()
        };
        spans.push(Span::styled("  ", theme.status_line_style()));
        spans.push(Span::styled(status.text().to_string(), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn draw_help_line(frame: &mut Frame, area: Rect, help: &[HelpEntry], theme: &Theme) {
    let text = help
        .iter()
        .map(|h| format!("{} {}", h.keys, h.description))
        .collect::<Vec<_>>()
        .join("  ");
    frame.render_widget(
        Paragraph::new(format!(" {}", text)).style(theme.help_style()),
        area,
    );
}

pub fn draw_confirm_popup(
    frame: &mut Frame,
    area: Rect,
    prompt: &str,
    style: Style,
    border_type: BorderType,
) {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Min(5),
            Constraint::Percentage(40),
        ])
        .split(area);

    let popup_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1])[1];

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Confirm ")
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(style);

    let text = Paragraph::new(format!("\n{}", prompt))
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    frame.render_widget(text, popup_area);
}
