//! UI renderer implementation.
//!
//! Contains the top-level `render` entry point used by the terminal viewer and
//! the layout helper that splits the screen into path, table, status and help rows.
//!
//! This module stays “pure rendering”: it reads a [ViewModel] and the config and
//! produces widgets, without owning any app state.

use crate::app::ViewModel;
use crate::config::Config;
use crate::core::sanitize_to_exact_width;
use crate::ui::widgets;
use crate::utils::shorten_home_path;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

const HEADERS: [&str; 4] = ["#", "Filename", "Directory", "Size"];

/// The rows the screen is split into, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub path: Rect,
    pub table: Rect,
    pub status: Rect,
    /// Zero height when the help line is disabled.
    pub help: Rect,
}

/// Render function which draws the whole heft screen for one frame.
///
/// With `prompt` set, the confirm popup is drawn over the table.
pub fn render(frame: &mut Frame, view: &ViewModel, config: &Config, prompt: Option<&str>) {
    let areas = layout_areas(frame.area(), config);
    let theme = config.theme();

    let path_line = Line::from(vec![
        Span::styled("Scanning ", theme.entry_style()),
        Span::styled(shorten_home_path(view.root), theme.path_style()),
    ]);
    frame.render_widget(Paragraph::new(path_line), areas.path);

    draw_table(frame, areas.table, view, config);
    widgets::draw_status_line(frame, areas.status, view, theme);

    if config.display().help_line() {
        widgets::draw_help_line(frame, areas.help, view.help, theme);
    }

    if let Some(prompt) = prompt {
        widgets::draw_confirm_popup(
            frame,
            frame.area(),
            prompt,
            theme.dialog_style(),
            config.display().border_shape().as_border_type(),
        );
    }
}

/// Splits `size` into the screen rows.
///
/// The table is sized to hold `general.limit` rows plus its header (and the
/// border when enabled); it shrinks first when the terminal is too short.
pub fn layout_areas(size: Rect, config: &Config) -> ScreenAreas {
    let border_rows = if config.display().borders() { 2 } else { 0 };
    let limit = u16::try_from(config.general().limit()).unwrap_or(u16::MAX);
    let table_height = limit.saturating_add(1).saturating_add(border_rows);
    let help_height = u16::from(config.display().help_line());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(table_height),
            Constraint::Length(1),
            Constraint::Length(help_height),
            Constraint::Min(0),
        ])
        .split(size);

    ScreenAreas {
        path: chunks[0],
        table: chunks[1],
        status: chunks[2],
        help: chunks[3],
    }
}

fn draw_table(frame: &mut Frame, area: Rect, view: &ViewModel, config: &Config) {
    let display = config.display();
    let theme = config.theme();
    let widths = display.column_widths();

    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h))).style(theme.header_style());

    let rows = view.rows.iter().map(|row| {
        let [index_w, name_w, dir_w, size_w] = widths.map(usize::from);
        Row::new([
            Cell::from(sanitize_to_exact_width(&row.index().to_string(), index_w)),
            Cell::from(sanitize_to_exact_width(row.filename(), name_w)),
            Cell::from(sanitize_to_exact_width(row.directory(), dir_w)),
            Cell::from(sanitize_to_exact_width(row.size(), size_w)),
        ])
        .style(theme.entry_style())
    });

    let mut block = Block::default();
    if display.borders() {
        block = block
            .borders(Borders::ALL)
            .border_type(display.border_shape().as_border_type())
            .border_style(theme.border_style());
    }

    let table = Table::new(rows, widths.map(Constraint::Length))
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(theme.selection_style());

    let mut state = TableState::default();
    state.select(view.selected);
    frame.render_stateful_widget(table, area, &mut state);
}
