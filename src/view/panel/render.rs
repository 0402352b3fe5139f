//! Panel rendering
//!
//! The panel is a vertical list of entries: group headers, setting rows (a
//! title line with the control in a fixed right column, then a description
//! line) and the footer link. The bottom line shows the last status message or
//! key hints.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::{truncate_to_width, FocusTarget, PanelColors, PanelState, RowControl, StatusMessage};
use crate::view::controls::dropdown::{render_dropdown, render_dropdown_menu};
use crate::view::controls::number_input::render_number_input;
use crate::view::controls::toggle::render_toggle;

/// Width of the right-hand control column
pub const CONTROL_WIDTH: u16 = 20;

const ROW_INDENT: u16 = 2;
const DESCRIPTION_INDENT: u16 = 4;
const KEY_HINTS: &str = "↑/↓ move  Enter select  Esc cancel  o open settings.json  r refresh  q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Header(usize),
    Row(usize, usize),
    Spacer,
    Footer,
}

/// Entries in display order with their first line and height
fn layout(state: &PanelState) -> Vec<(Entry, usize, usize)> {
    let mut entries = Vec::new();
    let mut line = 0;
    let mut push = |entry: Entry, height: usize, line: &mut usize| {
        entries.push((entry, *line, height));
        *line += height;
    };

    for (g, group) in state.groups.iter().enumerate() {
        push(Entry::Header(g), 1, &mut line);
        if state.collapse.is_collapsed(g) {
            continue;
        }
        for (r, row) in group.rows.iter().enumerate() {
            push(Entry::Row(g, r), 2 + row.control.menu_height(), &mut line);
        }
    }
    push(Entry::Spacer, 1, &mut line);
    push(Entry::Footer, 1, &mut line);
    entries
}

fn entry_for(target: FocusTarget) -> Entry {
    match target {
        FocusTarget::Group(g) => Entry::Header(g),
        FocusTarget::Row(g, r) => Entry::Row(g, r),
        FocusTarget::Footer => Entry::Footer,
    }
}

/// Scroll so the focused entry is fully visible when it fits
fn adjust_scroll(state: &mut PanelState, entries: &[(Entry, usize, usize)], height: usize) {
    let total = entries.last().map(|(_, top, h)| top + h).unwrap_or(0);
    let focused = entry_for(state.focus());
    if let Some((_, top, h)) = entries.iter().find(|(entry, _, _)| *entry == focused) {
        if *top < state.scroll_offset {
            state.scroll_offset = *top;
        } else if top + h > state.scroll_offset + height {
            state.scroll_offset = (top + h).saturating_sub(height).min(*top);
        }
    }
    state.scroll_offset = state.scroll_offset.min(total.saturating_sub(height));
}

/// Render the whole panel into `area`
pub fn render_panel(frame: &mut Frame, area: Rect, state: &mut PanelState, colors: &PanelColors) {
    if area.height < 2 || area.width < 10 {
        return;
    }

    let body = Rect::new(area.x, area.y, area.width, area.height - 1);
    let status_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);

    let entries = layout(state);
    adjust_scroll(state, &entries, body.height as usize);
    let first = state.scroll_offset;
    let last = first + body.height as usize;

    // Screen row of a panel line, if visible
    let screen_y = |line: usize| -> Option<u16> {
        (line >= first && line < last).then(|| body.y + (line - first) as u16)
    };

    for (entry, top, height) in &entries {
        if top + height <= first || *top >= last {
            continue;
        }
        match *entry {
            Entry::Header(g) => {
                if let Some(y) = screen_y(*top) {
                    render_header(frame, Rect::new(body.x, y, body.width, 1), state, g, colors);
                }
            }
            Entry::Row(g, r) => render_row(frame, body, *top, &screen_y, state, (g, r), colors),
            Entry::Spacer => {}
            Entry::Footer => {
                if let Some(y) = screen_y(*top) {
                    render_footer(frame, Rect::new(body.x, y, body.width, 1), state, colors);
                }
            }
        }
    }

    render_status(frame, status_area, state, colors);
}

fn focused_line(frame: &mut Frame, area: Rect, colors: &PanelColors) {
    frame.render_widget(Block::default().style(Style::default().bg(colors.focused_bg)), area);
}

fn render_header(
    frame: &mut Frame,
    area: Rect,
    state: &PanelState,
    group: usize,
    colors: &PanelColors,
) {
    let focused = state.focus() == FocusTarget::Group(group);
    if focused {
        focused_line(frame, area, colors);
    }

    let collapsed = state.collapse.is_collapsed(group);
    let marker = if collapsed { "▶ " } else { "▼ " };
    let title = &state.groups[group].title;
    let count = format!(" ({})", state.groups[group].rows.len());

    let mut style = Style::default().fg(colors.header).add_modifier(Modifier::BOLD);
    if focused {
        style = style.bg(colors.focused_bg);
    }
    let text = truncate_to_width(&format!("{marker}{title}"), area.width as usize);
    let line = Line::from(vec![
        Span::styled(text, style),
        Span::styled(count, Style::default().fg(colors.description)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_row(
    frame: &mut Frame,
    body: Rect,
    top: usize,
    screen_y: &dyn Fn(usize) -> Option<u16>,
    state: &PanelState,
    (g, r): (usize, usize),
    colors: &PanelColors,
) {
    let row = &state.groups[g].rows[r];
    let focused = state.focus() == FocusTarget::Row(g, r);

    let control_width = CONTROL_WIDTH.min(body.width / 2);
    let control_x = body.x + body.width - control_width;
    let title_width = control_x.saturating_sub(body.x + ROW_INDENT + 1) as usize;

    if let Some(y) = screen_y(top) {
        if focused {
            focused_line(frame, Rect::new(body.x, y, body.width, 1), colors);
        }
        let mut style = Style::default().fg(colors.title);
        if focused {
            style = style.bg(colors.focused_bg).add_modifier(Modifier::BOLD);
        }
        frame.render_widget(
            Paragraph::new(Span::styled(truncate_to_width(&row.title, title_width), style)),
            Rect::new(body.x + ROW_INDENT, y, title_width as u16, 1),
        );

        let control_area = Rect::new(control_x, y, control_width, 1);
        match &row.control {
            RowControl::Toggle(toggle) => render_toggle(frame, control_area, toggle, &colors.toggle),
            RowControl::Number(number) => {
                render_number_input(frame, control_area, number, &colors.number)
            }
            RowControl::Dropdown(dropdown) => {
                render_dropdown(frame, control_area, dropdown, &colors.dropdown)
            }
            RowControl::Empty => {}
        }
    }

    if let Some(y) = screen_y(top + 1) {
        let width = body.width.saturating_sub(DESCRIPTION_INDENT) as usize;
        frame.render_widget(
            Paragraph::new(Span::styled(
                truncate_to_width(&row.description, width),
                Style::default()
                    .fg(colors.description)
                    .add_modifier(Modifier::DIM),
            )),
            Rect::new(body.x + DESCRIPTION_INDENT, y, width as u16, 1),
        );
    }

    if let RowControl::Dropdown(dropdown) = &row.control {
        let menu_height = dropdown.menu_height();
        if menu_height == 0 {
            return;
        }
        // Only draw the menu when all of it is on screen
        let (Some(menu_y), Some(_)) = (screen_y(top + 2), screen_y(top + 1 + menu_height)) else {
            return;
        };
        render_dropdown_menu(
            frame,
            Rect::new(control_x, menu_y, control_width, menu_height as u16),
            dropdown,
            &colors.dropdown,
        );
    }
}

fn render_footer(frame: &mut Frame, area: Rect, state: &PanelState, colors: &PanelColors) {
    let focused = state.focus() == FocusTarget::Footer;
    if focused {
        focused_line(frame, area, colors);
    }
    let mut style = Style::default()
        .fg(colors.link)
        .add_modifier(Modifier::UNDERLINED);
    if focused {
        style = style.bg(colors.focused_bg).add_modifier(Modifier::BOLD);
    }
    frame.render_widget(
        Paragraph::new(Span::styled("Open settings.json", style)),
        Rect::new(area.x + ROW_INDENT, area.y, area.width.saturating_sub(ROW_INDENT), 1),
    );
}

fn render_status(frame: &mut Frame, area: Rect, state: &PanelState, colors: &PanelColors) {
    let span = match &state.status {
        Some(StatusMessage::Info(text)) => Span::styled(
            truncate_to_width(text, area.width as usize),
            Style::default().fg(colors.info),
        ),
        Some(StatusMessage::Error(text)) => Span::styled(
            truncate_to_width(text, area.width as usize),
            Style::default().fg(colors.error).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(
            truncate_to_width(KEY_HINTS, area.width as usize),
            Style::default().fg(colors.description),
        ),
    };
    frame.render_widget(Paragraph::new(Line::from(span)), area);
}
