//! Number input rendering

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::{FocusState, NumberInputColors, NumberInputState};
use crate::view::panel::truncate_to_width;

/// Render `[ value ]` filling `area`'s width; a cursor is shown while editing
pub fn render_number_input(
    frame: &mut Frame,
    area: Rect,
    state: &NumberInputState,
    colors: &NumberInputColors,
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
    let mut value_style = Style::default().fg(colors.value);
    if state.editing() {
        value_style = value_style.bg(colors.editing_bg);
    }

    // "[ " + value + cursor + "]"
    let inner = area.width as usize - 3;
    let mut text = state.display_text().to_string();
    if state.editing() {
        text.push('_');
    }
    // Keep the end of the buffer visible while typing
    let text = if text.width() > inner {
        let skip = text.chars().count() - inner;
        text.chars().skip(skip).collect()
    } else {
        truncate_to_width(&text, inner)
    };
    let padding = inner.saturating_sub(text.width());

    let line = Line::from(vec![
        Span::styled("[ ", border),
        Span::styled(text, value_style),
        Span::styled(" ".repeat(padding), value_style),
        Span::styled("]", border),
    ]);
    frame.render_widget(Paragraph::new(line), Rect::new(area.x, area.y, area.width, 1));
}
