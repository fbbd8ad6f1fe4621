use chiplist_core::Item;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

use crate::app::App;

/// Draw the suggestion list at the top of `area`, showing at most
/// `ui.dropdown_max_rows` rows starting at the app's scroll offset.
/// Returns the dropdown's area and one hit box per drawn row.
pub fn render(frame: &mut Frame, app: &App, area: Rect) -> (Rect, Vec<(Rect, Item)>) {
    let suggestions = app.state.display();
    let max_rows = app.config.ui.dropdown_max_rows;
    let rows = suggestions.len().clamp(1, usize::from(max_rows.max(1))) as u16;
    let height = (rows + 2).min(area.height);
    if height < 3 || area.width < 3 {
        return (Rect::default(), Vec::new());
    }

    let dropdown_area = Rect { height, ..area };
    frame.render_widget(Clear, dropdown_area);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border()))
        .style(Style::default().bg(app.theme.bg_secondary()));
    let inner = block.inner(dropdown_area);

    if suggestions.is_empty() {
        let empty = Span::styled(" no matches", Style::default().fg(app.theme.muted()));
        frame.render_widget(Paragraph::new(empty).block(block), dropdown_area);
        return (dropdown_area, Vec::new());
    }

    let visible = usize::from(inner.height);
    let start = app.dropdown_offset.min(suggestions.len().saturating_sub(visible));
    let shown = &suggestions[start..(start + visible).min(suggestions.len())];

    if shown.len() < suggestions.len() {
        block = block.title(Span::styled(
            format!(" {}-{} of {} ", start + 1, start + shown.len(), suggestions.len()),
            Style::default().fg(app.theme.muted()),
        ));
    }

    let items: Vec<ListItem> = shown
        .iter()
        .map(|item| {
            let label = super::truncate(&item.name, usize::from(inner.width.saturating_sub(2)));
            ListItem::new(Span::styled(
                format!(" {label}"),
                Style::default().fg(app.theme.fg()),
            ))
        })
        .collect();
    frame.render_widget(List::new(items).block(block), dropdown_area);

    let rows = shown
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let row = Rect {
                x: inner.x,
                y: inner.y + i as u16,
                width: inner.width,
                height: 1,
            };
            (row, item.clone())
        })
        .collect();
    (dropdown_area, rows)
}
