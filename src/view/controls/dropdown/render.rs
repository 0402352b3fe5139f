//! Dropdown rendering

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::{DropdownColors, DropdownState, FocusState};
use crate::view::panel::truncate_to_width;

/// Render the closed button `[Selected ▼]` filling `area`'s width
pub fn render_dropdown(
    frame: &mut Frame,
    area: Rect,
    state: &DropdownState,
    colors: &DropdownColors,
) {
    if area.height == 0 || area.width < 5 {
        return;
    }

    let focused = state.focus == FocusState::Focused;
    let border = if focused {
        Style::default().fg(colors.focused).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.border)
    };

    // "[" + text + " " + arrow + "]"
    let text_width = area.width as usize - 4;
    let (text, text_style) = match state.selected_option() {
        Some(option) => (
            option,
            Style::default().fg(if focused { colors.focused } else { colors.selected }),
        ),
        None if state.options.is_empty() => ("", Style::default()),
        None => ("-", Style::default().fg(colors.placeholder)),
    };
    let text = truncate_to_width(text, text_width);
    let padding = text_width.saturating_sub(text.width());

    let arrow = if state.open { "▲" } else { "▼" };
    let line = Line::from(vec![
        Span::styled("[", border),
        Span::styled(text, text_style),
        Span::raw(" ".repeat(padding + 1)),
        Span::styled(arrow, Style::default().fg(colors.arrow)),
        Span::styled("]", border),
    ]);
    frame.render_widget(Paragraph::new(line), Rect::new(area.x, area.y, area.width, 1));
}

/// Render the open option list, one option per row of `area`
pub fn render_dropdown_menu(
    frame: &mut Frame,
    area: Rect,
    state: &DropdownState,
    colors: &DropdownColors,
) {
    if !state.open || area.width < 3 {
        return;
    }

    let rows = (area.height as usize).min(state.menu_height());
    let scroll_offset = state
        .scroll_offset
        .min(state.options.len().saturating_sub(rows));

    for (i, option) in state
        .options
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(rows)
    {
        let highlighted = state.selected == Some(i);
        let style = if highlighted {
            Style::default()
                .fg(colors.selected)
                .bg(colors.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.option).bg(Color::Reset)
        };

        let width = area.width as usize - 2;
        let text = truncate_to_width(option, width);
        let padded = format!(" {}{} ", text, " ".repeat(width.saturating_sub(text.width())));
        let row_area = Rect::new(area.x, area.y + (i - scroll_offset) as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(Span::styled(padded, style))), row_area);
    }
}
