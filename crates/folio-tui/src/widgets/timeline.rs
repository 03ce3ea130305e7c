use std::time::Instant;

use folio_core::content::TimelineEntry;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::app::App;
use crate::document::{DocBuilder, RowSpan};
use crate::theme::{blend, Theme};
use crate::widgets::hero::reveal_words;
use crate::widgets::projects::link_line;
use crate::widgets::text::{indent, wrap_plain, wrap_words};

/// Columns left of the entries, holding the rail and the entry dots
pub const RAIL_GUTTER: u16 = 4;
/// Rail column inside the gutter
const RAIL_COLUMN: u16 = 1;

/// Story page: animated heading, intro and the timeline entries
pub struct StorySection;

impl StorySection {
    pub fn compose(doc: &mut DocBuilder, app: &App, now: Instant) {
        let theme = &app.theme;
        let story = &app.portfolio.story;
        let width = doc.content_width();

        doc.mark_about();
        doc.blank(1);
        let heading: Vec<_> =
            reveal_words(&app.story_heading, &story.heading, theme.fg0, theme, &app.config.reveal, now)
                .into_iter()
                .map(|mut w| {
                    w.style = w.style.add_modifier(Modifier::BOLD);
                    w
                })
                .collect();
        doc.extend(wrap_words(&heading, width));
        if !story.intro.trim().is_empty() {
            doc.blank(1);
            doc.extend(wrap_plain(&story.intro, Style::default().fg(theme.muted), width));
        }
        doc.blank(2);

        let top = doc.row();
        for (index, entry) in story.entries.iter().enumerate() {
            if index > 0 {
                doc.blank(2);
            }
            compose_entry(doc, entry, width, theme);
        }
        let height = doc.row().saturating_sub(top);
        doc.set_timeline(RowSpan { top, height });
    }
}

fn compose_entry(doc: &mut DocBuilder, entry: &TimelineEntry, width: u16, theme: &Theme) {
    let inner = width.saturating_sub(RAIL_GUTTER).max(1);
    doc.mark_entry();

    let title = Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD);
    let dot = Style::default().fg(theme.accent);
    for (i, line) in wrap_plain(&entry.title, title, inner).into_iter().enumerate() {
        let gutter = if i == 0 {
            Span::styled(" ●  ", dot)
        } else {
            Span::raw("    ")
        };
        let mut spans = vec![gutter];
        spans.extend(line.spans);
        doc.push(Line::from(spans));
    }

    let subtitle = Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC);
    doc.extend(indent(wrap_plain(&entry.subtitle, subtitle, inner), RAIL_GUTTER));
    doc.blank(1);
    doc.extend(indent(
        wrap_plain(&entry.content, Style::default().fg(theme.fg1), inner),
        RAIL_GUTTER,
    ));

    if !entry.highlights.is_empty() {
        doc.blank(1);
        let bullet = Style::default().fg(theme.fg1);
        for highlight in &entry.highlights {
            let wrapped = wrap_plain(highlight, bullet, inner.saturating_sub(2).max(1));
            for (i, line) in wrapped.into_iter().enumerate() {
                let marker = if i == 0 {
                    Span::styled("• ", Style::default().fg(theme.accent))
                } else {
                    Span::raw("  ")
                };
                let mut spans = vec![Span::raw(" ".repeat(RAIL_GUTTER as usize)), marker];
                spans.extend(line.spans);
                doc.push(Line::from(spans));
            }
        }
    }

    let links = entry.links.labelled();
    if !links.is_empty() {
        doc.blank(1);
        for (label, url) in links {
            let focused = doc.link(label, url);
            let line = link_line(&format!("↗ {}", label), inner as usize, focused, theme);
            doc.extend(indent(vec![line], RAIL_GUTTER));
        }
    }
}

/// Scroll-linked progress bar beside the timeline
///
/// The unfilled track is drawn dim; the filled part grows with the tracker's
/// progress and fades in over the start of the range. Cells already used by
/// the page (entry dots) are left alone.
pub struct TimelineRail;

impl TimelineRail {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let Some(span) = app.layout.timeline else {
            return;
        };
        let x = area.x + app.layout.content_left + RAIL_COLUMN;
        if x >= area.right() {
            return;
        }

        let progress = app.tracker.last().timeline;
        let units_per_row = app.config.navbar.units_per_row.max(f64::EPSILON);
        let fill_rows = (progress.fill / units_per_row).round() as u32;

        let track = Style::default().fg(app.theme.bg2);
        let fill = Style::default().fg(blend(app.theme.bg0, app.theme.progress, progress.opacity));
        let offset = app.scroller.offset();

        let buf = frame.buffer_mut();
        for y in area.top()..area.bottom() {
            let row = offset.saturating_add(y - area.y);
            if !span.contains(row) {
                continue;
            }
            let Some(cell) = buf.cell_mut((x, y)) else {
                continue;
            };
            if cell.symbol() != " " {
                continue;
            }
            if ((row - span.top) as u32) < fill_rows && progress.opacity > 0.0 {
                cell.set_symbol("┃").set_style(fill);
            } else {
                cell.set_symbol("│").set_style(track);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Page;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_entry_has_dot_and_links() {
        let theme = Theme::default();
        let entry = TimelineEntry {
            title: "Started".to_string(),
            subtitle: "August 2024".to_string(),
            content: "Something happened".to_string(),
            highlights: vec!["first".to_string()],
            links: folio_core::content::TimelineLinks {
                github: Some("https://github.com/x".to_string()),
                ..Default::default()
            },
        };
        let mut doc = DocBuilder::new(0, 60, None);
        compose_entry(&mut doc, &entry, 60, &theme);
        let page = doc.finish();
        let text: Vec<String> = page.lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(text[0], " ●  Started");
        assert_eq!(text[1], "    August 2024");
        assert!(text.iter().any(|l| l == "    • first"));
        let slot = &page.layout.links[0];
        assert_eq!(slot.label, "GitHub");
        assert_eq!(text[slot.row as usize], "    ↗ GitHub");
    }

    #[test]
    fn test_rail_fills_with_progress() {
        let now = Instant::now();
        let mut app = App::for_tests();
        app.resize(100, 40, now);
        app.mount_page(Page::Story, now);
        let span = app.layout.timeline.unwrap();

        // Scroll deep into the timeline
        let target = span.top + span.height / 2;
        app.scroller.set_offset(target);
        app.update_scroll(now);
        let snapshot = app.tracker.last();
        assert!(snapshot.progress > 0.0);

        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                crate::widgets::PageWidget::render(frame, area, &app, now);
                TimelineRail::render(frame, area, &app);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let x = app.layout.content_left + RAIL_COLUMN;
        let column: String = (0..40).map(|y| buffer[(x, y)].symbol().to_string()).collect();
        assert!(column.contains('┃'));
    }
}
