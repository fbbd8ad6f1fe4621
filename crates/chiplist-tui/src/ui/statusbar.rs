use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, LoadStatus};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // counts
            Constraint::Min(10),        // load indicator + hint
        ])
        .split(area);

    let counts = Line::from(vec![
        Span::styled(
            format!(" {} available", app.state.available().len()),
            Style::default().fg(app.theme.counts()),
        ),
        Span::styled(" · ", Style::default().fg(app.theme.muted())),
        Span::styled(
            format!("{} selected", app.chips().len()),
            Style::default()
                .fg(app.theme.counts())
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(counts).style(Style::default().bg(app.theme.bg_secondary())),
        chunks[0],
    );

    let mut spans = Vec::new();
    if app.load_status == LoadStatus::Loading {
        spans.push(Span::styled(
            " loading… ",
            Style::default().fg(app.theme.loading()),
        ));
    }
    spans.push(Span::styled(" Esc quit ", Style::default().fg(app.theme.muted())));
    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(app.theme.bg_secondary()))
            .alignment(Alignment::Right),
        chunks[1],
    );
}
