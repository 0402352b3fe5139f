//! Toggle rendering

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{FocusState, ToggleColors, ToggleState};

/// Render the checkbox at the left edge of `area`
pub fn render_toggle(frame: &mut Frame, area: Rect, state: &ToggleState, colors: &ToggleColors) {
    if area.height == 0 || area.width < 3 {
        return;
    }

    let (bracket, mark) = match state.focus {
        FocusState::Normal => (
            Style::default().fg(colors.bracket),
            Style::default().fg(colors.checkmark),
        ),
        FocusState::Focused => (
            Style::default().fg(colors.focused).add_modifier(Modifier::BOLD),
            Style::default().fg(colors.focused).add_modifier(Modifier::BOLD),
        ),
    };

    let line = Line::from(vec![
        Span::styled("[", bracket),
        Span::styled(if state.checked { "x" } else { " " }, mark),
        Span::styled("]", bracket),
    ]);
    frame.render_widget(Paragraph::new(line), Rect::new(area.x, area.y, 3, 1));
}
