mod hero;
mod menu;
mod navbar;
mod page;
mod projects;
mod status_bar;
pub mod text;
mod timeline;

use std::time::Instant;

use ratatui::{layout::Rect, Frame};

use crate::app::App;

pub use hero::{reveal_words, HeroSection};
pub use menu::MenuWidget;
pub use navbar::{NavbarWidget, CONTACT_LABEL, RESUME_LABEL};
pub use page::PageWidget;
pub use projects::ProjectsSection;
pub use status_bar::StatusBarWidget;
pub use timeline::{StorySection, TimelineRail};

/// Draw one full frame: page, rail, navbar, menu overlay and status bar
pub fn render_app(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    let page_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let status_area = Rect {
        y: area.y + page_area.height,
        height: area.height.min(1),
        ..area
    };

    PageWidget::render(frame, page_area, app, now);
    TimelineRail::render(frame, page_area, app);
    NavbarWidget::render(frame, page_area, app);
    if app.menu_open {
        MenuWidget::render(frame, page_area, app);
    }
    StatusBarWidget::render(frame, status_area, app);
}
