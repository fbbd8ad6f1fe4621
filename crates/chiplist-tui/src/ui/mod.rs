pub(crate) mod chips;
pub(crate) mod dropdown;
pub(crate) mod input;
pub(crate) mod statusbar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, HitMap};

/// Render the entire UI and return the clickable regions it produced.
pub fn render(frame: &mut Frame, app: &App) -> HitMap {
    let size = frame.area();
    let mut hits = HitMap::default();

    // Main vertical layout: body + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(size);

    let block = Block::default()
        .title(Span::styled(
            " chiplist ",
            Style::default()
                .fg(app.theme.title())
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border()))
        .style(Style::default().bg(app.theme.bg()));
    let body = block.inner(main_layout[0]);
    frame.render_widget(block, main_layout[0]);

    let slots = chips::layout_chips(app.chips(), body.width);
    let chip_rows = slots.last().map_or(0, |s| s.row + 1);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(chip_rows), // chips
            Constraint::Length(3),         // input
            Constraint::Min(0),            // dropdown
        ])
        .split(body);

    hits.chip_closes = chips::render(frame, app, &slots, sections[0]);
    hits.input = input::render(frame, app, sections[1]);
    if app.state.dropdown_visible() {
        (hits.dropdown, hits.dropdown_rows) = dropdown::render(frame, app, sections[2]);
    }

    statusbar::render(frame, app, main_layout[1]);
    hits
}

// ─── Helpers ───────────────────────────────────────────────

/// Cut `s` to at most `max` terminal cells, marking the cut with an ellipsis.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let budget = max - 1;
    let mut used = 0;
    let mut truncated = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        truncated.push(c);
    }
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use chiplist_core::{AppConfig, Command, Item};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(app: &App, width: u16, height: u16) -> (String, HitMap) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut hits = HitMap::default();
        terminal.draw(|frame| hits = render(frame, app)).unwrap();
        (buffer_text(terminal.backend().buffer()), hits)
    }

    fn loaded_app() -> App {
        let mut app = App::new(AppConfig::default());
        app.on_items_loaded(Ok(vec![
            Item::new(1, "Apple"),
            Item::new(2, "Banana"),
            Item::new(3, "Grape"),
        ]));
        app
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Banana", 10), "Banana");
        assert_eq!(truncate("Banana", 4), "Ban…");
        assert_eq!(truncate("Banana", 0), "");
        assert_eq!(truncate("Banana", 1), "…");
    }

    #[test]
    fn test_truncate_counts_cells_not_chars() {
        // Each of these takes two cells.
        let cut = truncate("日本語の名前", 6);
        assert_eq!(cut, "日本…");
        assert!(cut.width() <= 6);
        assert_eq!(truncate("日本", 4), "日本");
        assert_eq!(truncate("日本語", 2), "…");
    }

    #[test]
    fn test_initial_screen_shows_placeholder_and_no_dropdown() {
        let app = loaded_app();
        let (text, hits) = draw(&app, 60, 16);
        assert!(text.contains("Type to search..."));
        assert!(!text.contains("Banana"));
        assert!(hits.dropdown_rows.is_empty());
        assert!(hits.chip_closes.is_empty());
        assert!(hits.input.height > 0);
    }

    #[test]
    fn test_typing_shows_filtered_dropdown() {
        let mut app = loaded_app();
        app.type_char('a');
        app.type_char('p');
        let (text, hits) = draw(&app, 60, 16);
        assert!(text.contains("Apple"));
        assert!(text.contains("Grape"));
        assert!(!text.contains("Banana"));
        let rows: Vec<i64> = hits.dropdown_rows.iter().map(|(_, i)| i.id).collect();
        assert_eq!(rows, vec![1, 3]);
    }

    #[test]
    fn test_click_on_rendered_row_selects_it() {
        let mut app = loaded_app();
        app.type_char('a');
        let (_, hits) = draw(&app, 60, 16);
        let (rect, item) = hits.dropdown_rows[1].clone();
        assert_eq!(item, Item::new(2, "Banana"));

        app.hits = hits;
        app.click(rect.x + 1, rect.y);
        assert_eq!(app.chips(), &[Item::new(2, "Banana")]);

        let (text, hits) = draw(&app, 60, 16);
        assert!(text.contains("Banana") && text.contains("×"));
        assert!(hits.dropdown_rows.is_empty());
        assert_eq!(hits.chip_closes.len(), 1);
    }

    #[test]
    fn test_click_on_rendered_chip_close_removes_it() {
        let mut app = loaded_app();
        app.dispatch(Command::Select(Item::new(3, "Grape")));
        let (_, hits) = draw(&app, 60, 16);
        let (rect, chip) = hits.chip_closes[0].clone();
        assert_eq!(chip, Item::new(3, "Grape"));

        app.hits = hits;
        app.click(rect.x + 1, rect.y);
        assert!(app.chips().is_empty());
        assert_eq!(app.state.available().last(), Some(&Item::new(3, "Grape")));
    }

    #[test]
    fn test_wide_character_chip_can_be_removed() {
        let name = "日本語の長い項目名前".repeat(3);
        let mut app = App::new(AppConfig::default());
        app.on_items_loaded(Ok(vec![Item::new(1, name.clone()), Item::new(2, "Banana")]));
        app.dispatch(Command::Select(Item::new(1, "")));

        let (text, hits) = draw(&app, 40, 16);
        assert!(text.contains("×"));
        assert_eq!(hits.chip_closes.len(), 1);

        let (rect, chip) = hits.chip_closes[0].clone();
        assert_eq!(chip, Item::new(1, name));
        app.hits = hits;
        app.click(rect.x + 1, rect.y);
        assert!(app.chips().is_empty());
    }

    #[test]
    fn test_dropdown_capped_by_config() {
        let mut app = App::new(AppConfig::default());
        app.config.ui.dropdown_max_rows = 3;
        app.on_items_loaded(Ok((0..10).map(|i| Item::new(i, format!("item {i}"))).collect()));
        app.type_char('i');
        let (_, hits) = draw(&app, 60, 30);
        assert_eq!(hits.dropdown_rows.len(), 3);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = loaded_app();
        for id in 1..=3 {
            app.dispatch(Command::Select(Item::new(id, "")));
        }
        app.type_char('z');
        let _ = draw(&app, 8, 4);
    }

    #[test]
    fn test_scrolled_dropdown_row_can_be_selected() {
        use crate::keys::handle_mouse;
        use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

        let mouse = |kind, column, row| MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        let mut app = App::new(AppConfig::default());
        let items = (1..=12).map(|i| Item::new(i, format!("item {i}"))).collect();
        app.on_items_loaded(Ok(items));
        app.type_char('i');

        let (text, hits) = draw(&app, 60, 40);
        app.hits = hits;
        assert_eq!(app.hits.dropdown_rows.len(), 8);
        assert!(!app.hits.dropdown_rows.iter().any(|(_, item)| item.id == 10));
        assert!(text.contains("1-8 of 12"));

        let (x, y) = (app.hits.dropdown.x + 2, app.hits.dropdown.y + 2);
        for _ in 0..6 {
            handle_mouse(&mut app, mouse(MouseEventKind::ScrollDown, x, y));
        }
        assert_eq!(app.dropdown_offset, 4);

        let (text, hits) = draw(&app, 60, 40);
        app.hits = hits;
        assert!(text.contains("5-12 of 12"));
        assert!(text.contains("item 12"));
        let row = app
            .hits
            .dropdown_rows
            .iter()
            .find(|(_, item)| item.id == 10)
            .map(|(rect, _)| *rect)
            .unwrap();

        let click = mouse(MouseEventKind::Down(MouseButton::Left), row.x + 1, row.y);
        handle_mouse(&mut app, click);
        assert_eq!(app.chips(), &[Item::new(10, "item 10")]);
        assert_eq!(app.dropdown_offset, 0);
    }
}
