use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEventKind};

/// Polls the terminal for input
///
/// Idle pages poll at the configured tick rate; while a reveal or a scroll
/// glide is running the loop asks for the faster animation tick instead.
pub struct EventHandler {
    tick_rate: Duration,
    animation_tick: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms.max(1)),
            animation_tick: Duration::from_millis(16),
        }
    }

    pub fn with_animation_tick(mut self, animation_tick: Duration) -> Self {
        self.animation_tick = animation_tick.max(Duration::from_millis(1));
        self
    }

    /// Wait up to one idle tick for an event
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Wait up to one animation frame for an event
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.animation_tick)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if !event::poll(timeout)? {
            return Ok(Some(AppEvent::Tick));
        }
        Ok(translate(event::read()?))
    }
}

/// Map a raw terminal event onto the events the app cares about
fn translate(event: Event) -> Option<AppEvent> {
    match event {
        // Some terminals also report releases; only presses count
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollDown => Some(AppEvent::Scroll(3)),
            MouseEventKind::ScrollUp => Some(AppEvent::Scroll(-3)),
            _ => None,
        },
        _ => None,
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Mouse wheel, in rows; positive is down
    Scroll(i32),
    /// Nothing happened within the poll timeout
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers, MouseEvent};

    #[test]
    fn test_key_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(translate(Event::Key(release)).is_none());
        let press = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert!(matches!(translate(Event::Key(press)), Some(AppEvent::Key(_))));
    }

    #[test]
    fn test_mouse_wheel() {
        let wheel = |kind| MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert!(matches!(
            translate(Event::Mouse(wheel(MouseEventKind::ScrollDown))),
            Some(AppEvent::Scroll(3))
        ));
        assert!(matches!(
            translate(Event::Mouse(wheel(MouseEventKind::ScrollUp))),
            Some(AppEvent::Scroll(-3))
        ));
        assert!(translate(Event::Mouse(wheel(MouseEventKind::Moved))).is_none());
        assert!(matches!(translate(Event::Resize(80, 24)), Some(AppEvent::Resize(80, 24))));
    }
}
