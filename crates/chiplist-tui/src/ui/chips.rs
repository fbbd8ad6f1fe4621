use chiplist_core::Item;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Cells taken by the padding around the name plus the " × " control.
const CHIP_CHROME: u16 = 5;
const CLOSE_WIDTH: u16 = 3;
const CHIP_GAP: u16 = 1;

/// Position of one chip relative to the chip area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChipSlot {
    pub item: Item,
    pub label: String,
    pub row: u16,
    pub col: u16,
    pub width: u16,
}

impl ChipSlot {
    fn close_offset(&self) -> u16 {
        if self.width < CHIP_CHROME {
            0
        } else {
            self.width - CLOSE_WIDTH
        }
    }

    fn close_width(&self) -> u16 {
        self.width.min(CLOSE_WIDTH)
    }
}

/// Flow chips left to right, wrapping to a new row when the next one does not fit.
/// A chip never gets wider than `width`; its name is cut to make room for the
/// remove control.
pub(crate) fn layout_chips(chips: &[Item], width: u16) -> Vec<ChipSlot> {
    let mut slots = Vec::with_capacity(chips.len());
    let max_label = usize::from(width.saturating_sub(CHIP_CHROME));
    let (mut row, mut col) = (0u16, 0u16);

    for item in chips {
        let label = super::truncate(&item.name, max_label);
        let label_width = u16::try_from(label.width()).unwrap_or(u16::MAX);
        let chip_width = label_width
            .saturating_add(CHIP_CHROME)
            .min(width.max(CLOSE_WIDTH));
        if col > 0 && col + chip_width > width {
            row += 1;
            col = 0;
        }
        slots.push(ChipSlot {
            item: item.clone(),
            label,
            row,
            col,
            width: chip_width,
        });
        col += chip_width + CHIP_GAP;
    }
    slots
}

/// Draw the chips that fit into `area`; returns the hit boxes of their remove controls.
pub(crate) fn render(frame: &mut Frame, app: &App, slots: &[ChipSlot], area: Rect) -> Vec<(Rect, Item)> {
    let mut closes = Vec::new();
    let chip_style = Style::default().bg(app.theme.chip_bg()).fg(app.theme.chip_fg());
    let close_style = Style::default()
        .bg(app.theme.chip_bg())
        .fg(app.theme.chip_close())
        .add_modifier(Modifier::BOLD);

    for slot in slots {
        if slot.row >= area.height {
            continue;
        }
        let chip_area = Rect {
            x: area.x + slot.col,
            y: area.y + slot.row,
            width: slot.width,
            height: 1,
        }
        .intersection(area);
        if chip_area.width == 0 {
            continue;
        }

        let mut spans = Vec::with_capacity(2);
        if slot.width >= CHIP_CHROME {
            spans.push(Span::styled(format!(" {} ", slot.label), chip_style));
        }
        spans.push(Span::styled(" × ", close_style));
        frame.render_widget(Paragraph::new(Line::from(spans)), chip_area);

        let close = Rect {
            x: chip_area.x + slot.close_offset().min(chip_area.width.saturating_sub(1)),
            y: chip_area.y,
            width: slot.close_width(),
            height: 1,
        }
        .intersection(area);
        closes.push((close, slot.item.clone()));
    }
    closes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chips_flow_and_wrap() {
        let chips = vec![
            Item::new(1, "Apple"),
            Item::new(2, "Banana"),
            Item::new(3, "Grape"),
        ];
        // " Apple  × " = 10, " Banana  × " = 11, " Grape  × " = 10
        let slots = layout_chips(&chips, 24);
        assert_eq!((slots[0].row, slots[0].col, slots[0].width), (0, 0, 10));
        assert_eq!((slots[1].row, slots[1].col, slots[1].width), (0, 11, 11));
        assert_eq!((slots[2].row, slots[2].col), (1, 0));
    }

    #[test]
    fn test_long_name_truncated_to_width() {
        let slots = layout_chips(&[Item::new(1, "An extremely long item name")], 15);
        assert!(slots[0].width <= 15);
        assert!(slots[0].label.ends_with('…'));
    }

    #[test]
    fn test_wide_characters_stay_inside_the_area() {
        let name = "日本語の長い項目名前".repeat(3);
        let slots = layout_chips(&[Item::new(1, name)], 38);
        assert_eq!(slots.len(), 1);
        assert!(slots[0].width <= 38);
        assert!(slots[0].label.width() + 5 <= 38);
        assert!(slots[0].label.ends_with('…'));
    }

    #[test]
    fn test_area_narrower_than_chrome_keeps_close_control() {
        let slots = layout_chips(&[Item::new(1, "Apple")], 4);
        assert_eq!(slots[0].width, 4);
        assert_eq!(slots[0].label, "");
        assert_eq!(slots[0].close_offset(), 0);
        assert_eq!(slots[0].close_width(), 3);
    }

    #[test]
    fn test_no_chips_no_slots() {
        assert!(layout_chips(&[], 40).is_empty());
    }
}
