//! The scrollable page as a column of styled lines
//!
//! Every page is composed top to bottom into lines of the current terminal
//! width. Composition also records where sections, the timeline and links
//! ended up, which is what navigation and the scroll tracker work from.
//! Reveal phases only change styles, never line breaks, so the recorded rows
//! stay valid while text animates.

use std::time::Instant;

use ratatui::text::Line;

use crate::app::{App, Page};
use crate::widgets::{HeroSection, ProjectsSection, StorySection};

/// Rows reserved at the top of every page for the sticky navbar
pub const NAVBAR_HEIGHT: u16 = 3;

/// Widest the text column gets on large terminals
const MAX_CONTENT_WIDTH: u16 = 100;

/// A vertical stretch of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowSpan {
    pub top: u16,
    pub height: u16,
}

impl RowSpan {
    pub fn contains(&self, row: u16) -> bool {
        row >= self.top && row < self.top.saturating_add(self.height)
    }
}

/// A focusable external link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSlot {
    pub row: u16,
    pub label: String,
    pub url: String,
}

/// Where things landed on the composed page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    /// Total page height in rows
    pub height: u16,
    /// Column the content block starts at
    pub content_left: u16,
    pub content_width: u16,
    pub about_row: u16,
    pub projects_row: Option<u16>,
    /// Rows covered by the timeline entries
    pub timeline: Option<RowSpan>,
    /// First row of each timeline entry
    pub entry_rows: Vec<u16>,
    /// Focusable links in reading order
    pub links: Vec<LinkSlot>,
}

/// Composed page: lines plus the layout they produce
#[derive(Debug, Clone, Default)]
pub struct PageDocument {
    pub lines: Vec<Line<'static>>,
    pub layout: PageLayout,
}

impl PageDocument {
    /// Compose the current page of `app` at `width` columns
    pub fn build(app: &App, width: u16, now: Instant) -> Self {
        let content_width = width.saturating_sub(4).clamp(1, MAX_CONTENT_WIDTH);
        let content_left = width.saturating_sub(content_width) / 2;
        let mut doc = DocBuilder::new(content_left, content_width, app.focused_link);

        doc.blank(NAVBAR_HEIGHT);
        match app.page {
            Page::Home => {
                HeroSection::compose(&mut doc, app, now);
                ProjectsSection::compose(&mut doc, app);
            }
            Page::Story => StorySection::compose(&mut doc, app, now),
        }
        doc.blank(2);

        doc.finish()
    }
}

/// Accumulates lines and layout while sections compose themselves
pub struct DocBuilder {
    lines: Vec<Line<'static>>,
    layout: PageLayout,
    focused_link: Option<usize>,
}

impl DocBuilder {
    pub fn new(content_left: u16, content_width: u16, focused_link: Option<usize>) -> Self {
        Self {
            lines: Vec::new(),
            layout: PageLayout {
                content_left,
                content_width,
                ..Default::default()
            },
            focused_link,
        }
    }

    /// Row the next pushed line lands on
    pub fn row(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    pub fn content_width(&self) -> u16 {
        self.layout.content_width
    }

    /// Push a line, shifted right to the content column
    pub fn push(&mut self, line: Line<'static>) {
        let mut spans = Vec::with_capacity(line.spans.len() + 1);
        if self.layout.content_left > 0 {
            spans.push(ratatui::text::Span::raw(" ".repeat(self.layout.content_left as usize)));
        }
        spans.extend(line.spans);
        self.lines.push(Line::from(spans));
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = Line<'static>>) {
        for line in lines {
            self.push(line);
        }
    }

    pub fn blank(&mut self, rows: u16) {
        for _ in 0..rows {
            self.lines.push(Line::default());
        }
    }

    /// Register a link on the next row; returns whether it holds focus
    pub fn link(&mut self, label: impl Into<String>, url: impl Into<String>) -> bool {
        let row = self.row();
        self.link_at(row, label, url)
    }

    /// Register a link on a row that is composed ahead of time
    pub fn link_at(&mut self, row: u16, label: impl Into<String>, url: impl Into<String>) -> bool {
        let index = self.layout.links.len();
        self.layout.links.push(LinkSlot {
            row,
            label: label.into(),
            url: url.into(),
        });
        self.focused_link == Some(index)
    }

    pub fn mark_about(&mut self) {
        self.layout.about_row = self.row();
    }

    pub fn mark_projects(&mut self) {
        self.layout.projects_row = Some(self.row());
    }

    pub fn mark_entry(&mut self) {
        self.layout.entry_rows.push(self.row());
    }

    pub fn set_timeline(&mut self, span: RowSpan) {
        self.layout.timeline = Some(span);
    }

    pub fn finish(mut self) -> PageDocument {
        self.layout.height = self.row();
        PageDocument {
            lines: self.lines,
            layout: self.layout,
        }
    }
}
