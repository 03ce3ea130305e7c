use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, MenuEntry};
use crate::document::NAVBAR_HEIGHT;
use crate::widgets::navbar::{CONTACT_LABEL, RESUME_LABEL};
use crate::widgets::text::truncate_str;

/// Mobile navigation menu, dropped down under the navbar
pub struct MenuWidget;

impl MenuWidget {
    pub fn render(frame: &mut Frame, page_area: Rect, app: &App) {
        let theme = &app.theme;
        let entries = app.menu_entries();
        let area = menu_rect(page_area, entries.len() as u16 + 2);
        if area.height < 3 || area.width < 6 {
            return;
        }

        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.bg2))
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let max = inner.width.saturating_sub(2) as usize;
        let lines: Vec<Line> = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let label = match entry {
                    MenuEntry::Nav(i) => app
                        .portfolio
                        .nav
                        .get(*i)
                        .map(|n| n.name.as_str())
                        .unwrap_or_default(),
                    MenuEntry::Resume => RESUME_LABEL,
                    MenuEntry::Contact => CONTACT_LABEL,
                };
                let style = if index == app.menu_selected {
                    Style::default()
                        .fg(theme.accent)
                        .bg(theme.bg2)
                        .add_modifier(Modifier::BOLD)
                } else if matches!(entry, MenuEntry::Nav(_)) {
                    Style::default().fg(theme.fg1)
                } else {
                    Style::default().fg(theme.fg0)
                };
                Line::from(Span::styled(format!(" {} ", truncate_str(label, max)), style))
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Full-width panel directly below the navbar, clipped to the page
fn menu_rect(page_area: Rect, height: u16) -> Rect {
    let top = page_area.y + NAVBAR_HEIGHT.min(page_area.height);
    let available = page_area.bottom().saturating_sub(top);
    Rect::new(
        page_area.x + 1,
        top,
        page_area.width.saturating_sub(2),
        height.min(available),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_menu_rect_below_navbar() {
        let rect = menu_rect(Rect::new(0, 0, 40, 20), 7);
        assert_eq!(rect, Rect::new(1, NAVBAR_HEIGHT, 38, 7));
        let clipped = menu_rect(Rect::new(0, 0, 40, 6), 7);
        assert_eq!(clipped.height, 3);
    }

    #[test]
    fn test_menu_lists_items_and_buttons() {
        let now = Instant::now();
        let mut app = App::for_tests();
        app.resize(60, 20, now);
        app.toggle_menu();
        app.menu_down();

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| MenuWidget::render(frame, frame.area(), &app))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let rows: Vec<String> = (0..20)
            .map(|y| (0..60).map(|x| buffer[(x, y)].symbol().to_string()).collect())
            .collect();

        let top = NAVBAR_HEIGHT as usize;
        assert!(rows[top + 1].contains("About"));
        assert!(rows[top + 2].contains("Projects"));
        assert!(rows[top + 4].contains(RESUME_LABEL));
        assert!(rows[top + 5].contains(CONTACT_LABEL));
        // Second entry is highlighted
        assert_eq!(buffer[(3, NAVBAR_HEIGHT + 2)].fg, app.theme.accent);
    }
}
