use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::widgets::text::truncate_str;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let bar = Style::default().fg(theme.fg1).bg(theme.bg1);

        let page = format!(" {} ", app.page.title().to_uppercase());
        let message = match (&app.status_message, app.focused_url()) {
            (Some(msg), _) => format!(" {}", msg),
            (None, Some(url)) => format!(" ↗ {}", url),
            (None, None) => String::new(),
        };

        let max = app.scroller.max_offset();
        let percent = if max == 0 {
            100
        } else {
            (app.scroller.offset() as u32 * 100 / max as u32).min(100)
        };
        let hint = format!(" {:>3}%  j/k:scroll tab:links 1-3:nav r:replay q:quit ", percent);

        let used = page.width() + hint.width();
        let room = (area.width as usize).saturating_sub(used);
        let message = truncate_str(&message, room);
        let padding = room.saturating_sub(message.width());

        let line = Line::from(vec![
            Span::styled(
                page,
                Style::default()
                    .fg(theme.bg0)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(message, bar),
            Span::styled(" ".repeat(padding), bar),
            Span::styled(hint, Style::default().fg(theme.muted).bg(theme.bg1)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
