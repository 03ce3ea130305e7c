use std::sync::Arc;
use std::time::Instant;

use folio_core::content::NavTarget;
use folio_core::scroll::Container;
use folio_core::{AppConfig, Portfolio, RevealEvent, RevealSequencer, ScrollRange, ScrollTracker};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::document::{PageDocument, PageLayout, NAVBAR_HEIGHT};
use crate::scroll::PageScroller;
use crate::theme::Theme;

/// Which page is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Story,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Story => "My Story",
        }
    }
}

/// One line of the mobile menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    /// Index into the portfolio's nav items
    Nav(usize),
    Resume,
    Contact,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Content being presented
    pub portfolio: Arc<Portfolio>,
    pub theme: Theme,
    /// Currently mounted page
    pub page: Page,
    /// Viewport offset into the page, in rows
    pub scroller: PageScroller,
    /// Navbar compaction and timeline progress
    pub tracker: ScrollTracker,
    /// Hero headline reveal
    pub hero: RevealSequencer,
    /// About line under the headline
    pub about: RevealSequencer,
    /// Story page heading reveal
    pub story_heading: RevealSequencer,
    reveal_rx: mpsc::UnboundedReceiver<RevealEvent>,
    /// Layout of the mounted page at the current width
    pub layout: PageLayout,
    /// Terminal size
    pub width: u16,
    pub height: u16,
    /// Mobile menu overlay is open
    pub menu_open: bool,
    /// Highlighted menu entry
    pub menu_selected: usize,
    /// Index into `layout.links` holding keyboard focus
    pub focused_link: Option<usize>,
    /// Reveal sequences that ran to completion
    pub reveals_completed: u32,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
}

const HERO_LABEL: &str = "hero";
const ABOUT_LABEL: &str = "about";
const STORY_HEADING_LABEL: &str = "story-heading";

/// Rows left visible under a link that is scrolled up into view
const LINK_SCROLL_MARGIN: u16 = 2;

impl App {
    pub fn new(config: Arc<AppConfig>, portfolio: Arc<Portfolio>, theme: Theme) -> Self {
        let (reveal_tx, reveal_rx) = mpsc::unbounded_channel();
        let timing = config.reveal.timing();
        let sequencer = |label: &str| {
            RevealSequencer::new(timing)
                .with_label(label)
                .with_event_sender(reveal_tx.clone())
        };

        let range = config.timeline.range().unwrap_or_else(|e| {
            warn!("Invalid timeline range, using defaults: {}", e);
            ScrollRange::default()
        });
        let tracker = ScrollTracker::new(config.navbar.compact_threshold, range);

        Self {
            scroller: PageScroller::new(config.ui.scroll.clone()),
            tracker,
            hero: sequencer(HERO_LABEL),
            about: sequencer(ABOUT_LABEL),
            story_heading: sequencer(STORY_HEADING_LABEL),
            reveal_rx,
            config,
            portfolio,
            theme,
            page: Page::Home,
            layout: PageLayout::default(),
            width: 0,
            height: 0,
            menu_open: false,
            menu_selected: 0,
            focused_link: None,
            reveals_completed: 0,
            should_quit: false,
            status_message: None,
            pending_key: None,
        }
    }

    /// Rows available to the page, below the navbar's row budget and above the status bar
    pub fn page_height(&self) -> u16 {
        self.height.saturating_sub(1)
    }

    /// Narrow terminals get the mobile navigation and a stacked grid
    pub fn is_mobile(&self) -> bool {
        self.width < self.config.ui.mobile_breakpoint
    }

    fn units_per_row(&self) -> f64 {
        self.config.navbar.units_per_row
    }

    /// Terminal resized: recompose at the new width
    pub fn resize(&mut self, width: u16, height: u16, now: Instant) {
        self.width = width;
        self.height = height;
        if !self.is_mobile() {
            self.menu_open = false;
        }
        self.relayout(now);
        self.update_scroll(now);
    }

    /// Recompute the page layout and everything derived from it
    pub fn relayout(&mut self, now: Instant) {
        self.layout = PageDocument::build(self, self.width, now).layout;
        self.scroller
            .set_max_offset(self.layout.height.saturating_sub(self.page_height()));

        let container = match self.layout.timeline {
            Some(span) => Container::new(
                span.top as f64 * self.units_per_row(),
                span.height as f64 * self.units_per_row(),
            ),
            None => Container::default(),
        };
        self.tracker.set_container(container);

        if matches!(self.focused_link, Some(i) if i >= self.layout.links.len()) {
            self.focused_link = None;
        }
    }

    /// Switch to `page`, cancelling every reveal of the page being left
    pub fn mount_page(&mut self, page: Page, now: Instant) {
        self.hero.cancel();
        self.about.cancel();
        self.story_heading.cancel();

        self.page = page;
        self.menu_open = false;
        self.focused_link = None;
        self.scroller.reset();
        self.start_reveals(now);
        self.relayout(now);
        self.update_scroll(now);
        debug!(page = page.title(), "page mounted");
    }

    /// Restart the mounted page's text animations from hidden
    pub fn replay(&mut self, now: Instant) {
        self.start_reveals(now);
        self.set_status("Replaying");
    }

    fn start_reveals(&mut self, now: Instant) {
        let portfolio = Arc::clone(&self.portfolio);
        match self.page {
            Page::Home => {
                let headline = &portfolio.profile.headline;
                self.hero.start(headline, now);
                // The about line waits for the headline to finish revealing
                let about_at = now
                    .checked_add(self.hero.timing().full_reveal_after(headline.len()))
                    .unwrap_or(now);
                self.about.start(&portfolio.about_words(), about_at);
            }
            Page::Story => self.story_heading.start(&portfolio.story.heading, now),
        }
    }

    /// Advance animations to `now`
    pub fn tick(&mut self, now: Instant) {
        self.hero.advance(now);
        self.about.advance(now);
        self.story_heading.advance(now);

        while let Ok(event) = self.reveal_rx.try_recv() {
            match event {
                RevealEvent::FullyRevealed { label } => {
                    debug!(label = %label, "text fully revealed");
                }
                RevealEvent::Completed { label } => {
                    self.reveals_completed += 1;
                    debug!(label = %label, "text reveal completed");
                    if self.status_message.as_deref() == Some("Replaying") {
                        self.clear_status();
                    }
                }
            }
        }

        self.update_scroll(now);
    }

    /// Move the scroll glide forward and resample the tracker
    pub fn update_scroll(&mut self, now: Instant) {
        let offset = self.scroller.update(now);
        let upr = self.units_per_row();
        self.tracker
            .sample(offset as f64 * upr, self.page_height() as f64 * upr);
    }

    /// Something on screen is moving and wants the fast frame rate
    pub fn needs_fast_update(&self) -> bool {
        self.scroller.needs_update()
            || self.hero.is_active()
            || self.about.is_active()
            || self.story_heading.is_active()
    }

    pub fn is_compact(&self) -> bool {
        self.tracker.last().compact
    }

    pub fn move_down(&mut self) {
        self.scroller.line_down();
    }

    pub fn move_up(&mut self) {
        self.scroller.line_up();
    }

    /// Mouse wheel; positive is down
    pub fn scroll_lines(&mut self, delta: i32) {
        self.scroller.scroll_by(delta);
    }

    pub fn scroll_half_page_down(&mut self) {
        self.scroller.half_page_down(self.page_height());
    }

    pub fn scroll_half_page_up(&mut self) {
        self.scroller.half_page_up(self.page_height());
    }

    pub fn scroll_page_down(&mut self) {
        self.scroller.page_down(self.page_height());
    }

    pub fn scroll_page_up(&mut self) {
        self.scroller.page_up(self.page_height());
    }

    pub fn jump_to_top(&mut self, now: Instant) {
        self.scroller.scroll_to(0, now);
    }

    pub fn jump_to_bottom(&mut self, now: Instant) {
        self.scroller.scroll_to(self.scroller.max_offset(), now);
    }

    /// Bring `row` of the page just below the navbar
    pub fn scroll_to_row(&mut self, row: u16, now: Instant) {
        self.scroller.scroll_to(row.saturating_sub(NAVBAR_HEIGHT), now);
    }

    /// Follow the nav item at `index`
    pub fn navigate(&mut self, index: usize, now: Instant) {
        self.menu_open = false;
        let Some(item) = self.portfolio.nav.get(index) else {
            return;
        };
        let Some(target) = item.resolve() else {
            warn!(target = %item.target, "nav item has no destination");
            return;
        };
        debug!(name = %item.name, ?target, "navigate");

        match target {
            NavTarget::Story => {
                if self.page != Page::Story {
                    self.mount_page(Page::Story, now);
                }
            }
            NavTarget::Home => {
                if self.page != Page::Home {
                    self.mount_page(Page::Home, now);
                } else {
                    self.jump_to_top(now);
                }
            }
            NavTarget::About | NavTarget::Projects => {
                if self.page != Page::Home {
                    self.mount_page(Page::Home, now);
                }
                let row = match target {
                    NavTarget::Projects => self.layout.projects_row,
                    _ => Some(self.layout.about_row),
                };
                if let Some(row) = row {
                    self.scroll_to_row(row, now);
                }
            }
        }
    }

    /// Entries of the mobile menu in display order
    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        (0..self.portfolio.nav.len())
            .map(MenuEntry::Nav)
            .chain([MenuEntry::Resume, MenuEntry::Contact])
            .collect()
    }

    pub fn toggle_menu(&mut self) {
        if self.menu_open {
            self.close_menu();
        } else if self.is_mobile() {
            self.menu_open = true;
            self.menu_selected = 0;
        } else {
            self.set_status("The menu is part of the narrow layout; use 1-3 to navigate");
        }
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn menu_down(&mut self) {
        let len = self.menu_entries().len();
        if len > 0 {
            self.menu_selected = (self.menu_selected + 1) % len;
        }
    }

    pub fn menu_up(&mut self) {
        let len = self.menu_entries().len();
        if len > 0 {
            self.menu_selected = (self.menu_selected + len - 1) % len;
        }
    }

    /// Choose the highlighted menu entry; returns a URL to open, if any
    pub fn menu_select(&mut self, now: Instant) -> Option<String> {
        let entry = self.menu_entries().get(self.menu_selected).copied();
        self.close_menu();
        match entry? {
            MenuEntry::Nav(index) => {
                self.navigate(index, now);
                None
            }
            MenuEntry::Resume => self.resume_url(),
            MenuEntry::Contact => self.contact_url(),
        }
    }

    pub fn next_link(&mut self, now: Instant) {
        let len = self.layout.links.len();
        if len == 0 {
            self.set_status("No links on this page");
            return;
        }
        let next = match self.focused_link {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.focus_link(next, now);
    }

    pub fn prev_link(&mut self, now: Instant) {
        let len = self.layout.links.len();
        if len == 0 {
            self.set_status("No links on this page");
            return;
        }
        let prev = match self.focused_link {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        };
        self.focus_link(prev, now);
    }

    fn focus_link(&mut self, index: usize, now: Instant) {
        self.focused_link = Some(index);
        let Some(row) = self.layout.links.get(index).map(|l| l.row) else {
            return;
        };

        let top = self.scroller.target().saturating_add(NAVBAR_HEIGHT);
        let bottom = self.scroller.target().saturating_add(self.page_height());
        if row < top {
            self.scroll_to_row(row, now);
        } else if row >= bottom {
            let target = row
                .saturating_add(1 + LINK_SCROLL_MARGIN)
                .saturating_sub(self.page_height());
            self.scroller.scroll_to(target, now);
        }
    }

    /// URL of the focused link
    pub fn focused_url(&self) -> Option<&str> {
        self.focused_link
            .and_then(|i| self.layout.links.get(i))
            .map(|l| l.url.as_str())
    }

    /// URL to open for the focused link, or a hint in the status bar
    pub fn open_focused(&mut self) -> Option<String> {
        match self.focused_url() {
            Some(url) => Some(url.to_string()),
            None => {
                self.set_status("No link focused, press Tab to pick one");
                None
            }
        }
    }

    pub fn resume_url(&mut self) -> Option<String> {
        let url = self.config.links.resume.clone();
        if url.is_none() {
            self.set_status("No resume link configured ([links] resume)");
        }
        url
    }

    pub fn contact_url(&mut self) -> Option<String> {
        let url = self.config.links.contact.clone();
        if url.is_none() {
            self.set_status("No contact link configured ([links] contact)");
        }
        url
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Clear the pending key
    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }

    /// App over the bundled content at 100x40, home page mounted
    #[cfg(test)]
    pub fn for_tests() -> Self {
        let portfolio = Portfolio::bundled().expect("bundled content parses");
        let now = Instant::now();
        let mut app = Self::new(
            Arc::new(AppConfig::default()),
            Arc::new(portfolio),
            Theme::default(),
        );
        app.width = 100;
        app.height = 40;
        app.mount_page(Page::Home, now);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use folio_core::RevealPhase;

    #[test]
    fn test_mount_home_starts_hero() {
        let app = App::for_tests();
        assert!(app.hero.is_started());
        assert!(app.hero.is_active());
        assert!(!app.story_heading.is_started());
        assert!(app.layout.projects_row.is_some());
    }

    #[test]
    fn test_page_switch_cancels_pending_reveals() {
        let now = Instant::now();
        let mut app = App::for_tests();
        app.mount_page(Page::Story, now);
        assert!(!app.hero.is_active());
        assert!(!app.about.is_active());
        assert!(app.story_heading.is_active());

        // Nothing left over from the home page fires later
        app.tick(now + Duration::from_secs(60));
        assert!(!app.hero.is_complete());
        assert!(app.story_heading.is_complete());
    }

    #[test]
    fn test_about_waits_for_headline() {
        let start = Instant::now();
        let mut app = App::for_tests();
        app.mount_page(Page::Home, start);
        let reveal = app
            .hero
            .timing()
            .full_reveal_after(app.portfolio.profile.headline.len());

        app.tick(start + reveal - Duration::from_millis(1));
        assert!(app.about.phases().iter().all(|p| *p == RevealPhase::Hidden));

        app.tick(start + reveal);
        assert_eq!(app.about.phase(0), Some(RevealPhase::Revealing));
    }

    #[test]
    fn test_completion_events_are_counted() {
        let start = Instant::now();
        let mut app = App::for_tests();
        app.mount_page(Page::Home, start);
        app.tick(start + Duration::from_secs(120));
        // Hero and about each complete once
        assert_eq!(app.reveals_completed, 2);
        assert_eq!(app.hero.completion_count(), 1);
        assert!(!app.needs_fast_update());
    }

    #[test]
    fn test_replay_restarts_hero() {
        let start = Instant::now();
        let mut app = App::for_tests();
        app.mount_page(Page::Home, start);
        app.tick(start + Duration::from_secs(60));
        assert!(app.hero.is_complete());

        let again = start + Duration::from_secs(61);
        app.replay(again);
        assert!(!app.hero.is_complete());
        assert!(app.hero.phases().iter().all(|p| *p == RevealPhase::Hidden));
        app.tick(again + Duration::from_secs(60));
        assert!(app.hero.is_complete());
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn test_navigate_to_projects_and_story() {
        let now = Instant::now();
        let mut app = App::for_tests();
        let projects = app
            .portfolio
            .nav
            .iter()
            .position(|n| n.target == "#projects")
            .unwrap();
        app.navigate(projects, now);
        let expected = app.layout.projects_row.unwrap() - NAVBAR_HEIGHT;
        assert_eq!(app.scroller.target(), expected.min(app.scroller.max_offset()));

        let story = app.portfolio.nav.iter().position(|n| n.target == "/story").unwrap();
        app.navigate(story, now);
        assert_eq!(app.page, Page::Story);
        assert_eq!(app.scroller.offset(), 0);
    }

    #[test]
    fn test_compact_after_threshold() {
        let now = Instant::now();
        let mut app = App::for_tests();
        app.resize(100, 20, now);
        // 100 units at 20 units per row is 5 rows
        app.scroller.set_offset(5);
        app.update_scroll(now);
        assert!(!app.is_compact());
        app.scroller.set_offset(6);
        app.update_scroll(now);
        assert!(app.is_compact());
    }

    #[test]
    fn test_link_cycling_wraps() {
        let now = Instant::now();
        let mut app = App::for_tests();
        app.mount_page(Page::Story, now);
        let count = app.layout.links.len();
        assert!(count > 1);

        app.prev_link(now);
        assert_eq!(app.focused_link, Some(count - 1));
        app.next_link(now);
        assert_eq!(app.focused_link, Some(0));
        assert!(app.focused_url().unwrap().starts_with("http"));
    }

    #[test]
    fn test_focusing_link_scrolls_it_into_view() {
        let now = Instant::now();
        let mut app = App::for_tests();
        app.mount_page(Page::Story, now);
        app.prev_link(now);
        let row = app.layout.links[app.focused_link.unwrap()].row;
        let target = app.scroller.target();
        assert!(row >= target + NAVBAR_HEIGHT);
        assert!(row < target + app.page_height());
    }

    #[test]
    fn test_link_below_view_keeps_margin() {
        let now = Instant::now();
        let mut app = App::for_tests();
        app.mount_page(Page::Story, now);
        let page_height = app.page_height();
        let max_offset = app.scroller.max_offset();

        // A link below the first screen whose target is not clamped
        let index = app
            .layout
            .links
            .iter()
            .position(|l| {
                l.row >= page_height
                    && l.row + 1 + LINK_SCROLL_MARGIN - page_height <= max_offset
            })
            .unwrap();
        app.focus_link(index, now);

        let row = app.layout.links[index].row;
        assert_eq!(app.scroller.target() + page_height, row + 1 + LINK_SCROLL_MARGIN);
    }

    #[test]
    fn test_menu_only_in_narrow_terminals() {
        let now = Instant::now();
        let mut app = App::for_tests();
        app.toggle_menu();
        assert!(!app.menu_open);
        assert!(app.status_message.is_some());

        app.resize(60, 30, now);
        app.toggle_menu();
        assert!(app.menu_open);
        let entries = app.menu_entries();
        assert_eq!(entries.len(), app.portfolio.nav.len() + 2);

        app.menu_up();
        assert_eq!(entries[app.menu_selected], MenuEntry::Contact);
        // No contact configured: nothing to open, menu closes
        assert_eq!(app.menu_select(now), None);
        assert!(!app.menu_open);
    }

    #[test]
    fn test_menu_navigation_closes_menu() {
        let now = Instant::now();
        let mut app = App::for_tests();
        app.resize(60, 30, now);
        app.toggle_menu();
        let story = app.portfolio.nav.iter().position(|n| n.target == "/story").unwrap();
        app.menu_selected = story;
        assert_eq!(app.menu_select(now), None);
        assert_eq!(app.page, Page::Story);
        assert!(!app.menu_open);
    }

    #[test]
    fn test_open_focused_without_focus() {
        let mut app = App::for_tests();
        assert_eq!(app.open_focused(), None);
        assert!(app.status_message.is_some());
    }
}
