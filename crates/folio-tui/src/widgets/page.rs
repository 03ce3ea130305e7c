use std::time::Instant;

use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

use crate::app::App;
use crate::document::PageDocument;

/// The scrolled page body
pub struct PageWidget;

impl PageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let document = PageDocument::build(app, area.width, now);
        let paragraph = Paragraph::new(document.lines)
            .style(Style::default().fg(app.theme.fg0).bg(app.theme.bg0))
            .scroll((app.scroller.offset(), 0));
        frame.render_widget(paragraph, area);
    }
}
