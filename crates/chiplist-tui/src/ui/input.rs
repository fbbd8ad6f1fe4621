use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;

/// Draw the text field. Returns its full area for click detection.
pub fn render(frame: &mut Frame, app: &App, area: Rect) -> Rect {
    let border = if app.input_focused {
        app.theme.focused_border()
    } else {
        app.theme.border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);

    let text = app.input_text();
    let content = if text.is_empty() {
        Span::styled(
            app.config.ui.placeholder.as_str(),
            Style::default().fg(app.theme.placeholder()),
        )
    } else {
        Span::styled(text, Style::default().fg(app.theme.fg_white()))
    };
    let typed_width = if text.is_empty() {
        0
    } else {
        content.width() as u16
    };

    // Keep the end of long input visible.
    let scroll = typed_width.saturating_sub(inner.width.saturating_sub(1));
    frame.render_widget(Paragraph::new(content).block(block).scroll((0, scroll)), area);

    if app.input_focused && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position(Position::new(inner.x + typed_width - scroll, inner.y));
    }
    area
}
