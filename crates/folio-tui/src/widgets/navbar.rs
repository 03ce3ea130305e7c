use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Page};
use crate::document::NAVBAR_HEIGHT;
use folio_core::content::NavTarget;

pub const RESUME_LABEL: &str = "Resume";
pub const CONTACT_LABEL: &str = "Get in touch";

/// Sticky navigation bar
///
/// Wide terminals get logo, nav items and the two buttons in one row. Past
/// the compact threshold the bar shrinks to a centered, raised pill. Narrow
/// terminals show the logo and a menu toggle instead.
pub struct NavbarWidget;

impl NavbarWidget {
    /// Area the navbar covers at the top of `page_area`
    pub fn area(page_area: Rect) -> Rect {
        Rect {
            height: NAVBAR_HEIGHT.min(page_area.height),
            ..page_area
        }
    }

    pub fn render(frame: &mut Frame, page_area: Rect, app: &App) {
        let area = Self::area(page_area);
        let theme = &app.theme;
        let compact = app.is_compact();

        let bar = if compact {
            let percent = if app.is_mobile() { 90 } else { 70 };
            let width = (area.width as u32 * percent / 100) as u16;
            Rect {
                x: area.x + (area.width - width) / 2,
                width,
                ..area
            }
        } else {
            area
        };

        frame.render_widget(Clear, bar);
        let block = if compact {
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.bg2))
                .style(Style::default().bg(theme.bg1))
        } else {
            Block::default().style(Style::default().bg(theme.bg0))
        };
        let inner = block.inner(bar);
        frame.render_widget(block, bar);

        let row = Rect {
            y: inner.y + inner.height.saturating_sub(1) / 2,
            height: inner.height.min(1),
            ..inner
        };
        if app.is_mobile() {
            Self::render_mobile(frame, row, app);
        } else {
            Self::render_desktop(frame, row, app);
        }
    }

    fn render_desktop(frame: &mut Frame, row: Rect, app: &App) {
        let theme = &app.theme;
        let logo = logo_line(app);
        let buttons = Line::from(vec![
            Span::styled(
                format!(" {} ", RESUME_LABEL),
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Span::raw(" "),
            Span::styled(
                format!(" {} ", CONTACT_LABEL),
                Style::default()
                    .fg(theme.bg0)
                    .bg(theme.fg0)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ]);

        let mut items = Vec::new();
        for (index, item) in app.portfolio.nav.iter().enumerate() {
            if index > 0 {
                items.push(Span::raw("   "));
            }
            let active = matches!(
                (item.resolve(), app.page),
                (Some(NavTarget::Story), Page::Story) | (Some(NavTarget::Home), Page::Home)
            );
            let mut style = Style::default().fg(theme.fg1);
            if active {
                style = style.fg(theme.fg0).add_modifier(Modifier::BOLD);
            }
            items.push(Span::styled(item.name.clone(), style));
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(logo.width() as u16),
                Constraint::Min(0),
                Constraint::Length(buttons.width() as u16),
            ])
            .split(row);

        frame.render_widget(Paragraph::new(logo), columns[0]);
        frame.render_widget(
            Paragraph::new(Line::from(items)).alignment(Alignment::Center),
            columns[1],
        );
        frame.render_widget(Paragraph::new(buttons), columns[2]);
    }

    fn render_mobile(frame: &mut Frame, row: Rect, app: &App) {
        let theme = &app.theme;
        let glyph = if app.menu_open { "✕ " } else { "☰ " };
        let toggle = Line::from(Span::styled(
            glyph,
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        ));

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(toggle.width() as u16)])
            .split(row);
        frame.render_widget(Paragraph::new(logo_line(app)), columns[0]);
        frame.render_widget(Paragraph::new(toggle), columns[1]);
    }
}

fn logo_line(app: &App) -> Line<'static> {
    let logo = app.portfolio.profile.logo().to_string();
    let width = logo.width();
    Line::from(vec![
        Span::raw(" "),
        Span::styled(
            logo,
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(if width > 0 { " " } else { "" }),
    ])
}
