//! Viewport offset into the page with eased movement between targets

use std::time::{Duration, Instant};

use folio_core::config::ScrollConfig;
use folio_core::EasingType;

use super::config::ScrollConfigExt;
use super::easing::EasingTypeExt;
use super::timing::{is_complete, lerp_u16, progress};

/// One eased move from `from` to `to`
#[derive(Debug, Clone)]
struct Glide {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

/// Scroll state of the current page
///
/// Key presses queue deltas with [`scroll_by`](Self::scroll_by); the next
/// [`update`](Self::update) folds everything queued so far into one glide.
/// Jumps to a section use [`scroll_to`](Self::scroll_to).
#[derive(Debug, Clone)]
pub struct PageScroller {
    config: ScrollConfig,
    glide: Option<Glide>,
    offset: u16,
    max_offset: u16,
    pending_delta: i32,
}

impl Default for PageScroller {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl PageScroller {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            glide: None,
            offset: 0,
            max_offset: 0,
            pending_delta: 0,
        }
    }

    /// Current, possibly mid-glide, offset in rows
    #[inline]
    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn max_offset(&self) -> u16 {
        self.max_offset
    }

    /// Where the page ends up once the current glide finishes
    pub fn target(&self) -> u16 {
        self.glide.as_ref().map(|g| g.to).unwrap_or(self.offset)
    }

    /// A glide or queued delta still has to be applied
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.glide.is_some() || self.pending_delta != 0
    }

    /// Page height changed; keep the offset inside it
    pub fn set_max_offset(&mut self, max_offset: u16) {
        self.max_offset = max_offset;
        self.offset = self.offset.min(max_offset);
        if let Some(ref mut glide) = self.glide {
            glide.to = glide.to.min(max_offset);
        }
    }

    /// Jump without animation
    pub fn set_offset(&mut self, offset: u16) {
        self.glide = None;
        self.pending_delta = 0;
        self.offset = offset.min(self.max_offset);
    }

    /// Back to the top of a freshly mounted page
    pub fn reset(&mut self) {
        self.glide = None;
        self.pending_delta = 0;
        self.offset = 0;
    }

    /// Queue a relative move, positive is down
    pub fn scroll_by(&mut self, delta: i32) {
        if self.config.is_smooth() {
            self.pending_delta = self.pending_delta.saturating_add(delta);
        } else {
            self.offset = self.clamp(self.offset as i32 + delta);
            self.glide = None;
        }
    }

    /// Glide to an absolute offset
    pub fn scroll_to(&mut self, target: u16, now: Instant) {
        let target = target.min(self.max_offset);
        self.pending_delta = 0;
        if !self.config.is_smooth() || target == self.offset {
            self.glide = None;
            self.offset = target;
            return;
        }
        self.start_glide(target, now);
    }

    pub fn line_down(&mut self) {
        self.scroll_by(self.config.line_step());
    }

    pub fn line_up(&mut self) {
        self.scroll_by(-self.config.line_step());
    }

    pub fn half_page_down(&mut self, viewport_height: u16) {
        self.scroll_by((viewport_height / 2).max(1) as i32);
    }

    pub fn half_page_up(&mut self, viewport_height: u16) {
        self.scroll_by(-((viewport_height / 2).max(1) as i32));
    }

    pub fn page_down(&mut self, viewport_height: u16) {
        self.scroll_by(viewport_height.max(1) as i32);
    }

    pub fn page_up(&mut self, viewport_height: u16) {
        self.scroll_by(-(viewport_height.max(1) as i32));
    }

    /// Advance the glide to `now` and return the offset to draw with
    pub fn update(&mut self, now: Instant) -> u16 {
        if self.pending_delta != 0 {
            let target = self.clamp(self.target() as i32 + self.pending_delta);
            self.pending_delta = 0;
            if target != self.offset {
                self.start_glide(target, now);
            } else {
                self.glide = None;
            }
        }

        if let Some(ref glide) = self.glide {
            if is_complete(glide.start, now, glide.duration) {
                self.offset = glide.to.min(self.max_offset);
                self.glide = None;
            } else {
                let t = glide.easing.apply(progress(glide.start, now, glide.duration));
                self.offset = lerp_u16(glide.from, glide.to, t).min(self.max_offset);
            }
        }

        self.offset
    }

    fn start_glide(&mut self, to: u16, now: Instant) {
        self.glide = Some(Glide {
            start: now,
            from: self.offset,
            to,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    fn clamp(&self, offset: i32) -> u16 {
        offset.clamp(0, self.max_offset as i32) as u16
    }
}
