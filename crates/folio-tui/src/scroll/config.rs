//! Duration helpers on top of the `[ui.scroll]` config section

use std::time::Duration;

use folio_core::config::ScrollConfig;

/// Extension trait for ScrollConfig with utility methods
pub trait ScrollConfigExt {
    /// Length of one glide between two offsets
    fn animation_duration(&self) -> Duration;

    /// Frame interval while something on screen is moving
    fn animation_tick_duration(&self) -> Duration;

    /// Smooth scrolling is on and actually takes time
    fn is_smooth(&self) -> bool;

    /// Rows moved by one line step
    fn line_step(&self) -> i32;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        match self.animation_fps {
            0 => Duration::from_millis(16),
            fps => Duration::from_millis((1000 / fps as u64).max(1)),
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }

    #[inline]
    fn line_step(&self) -> i32 {
        if self.is_smooth() {
            1
        } else {
            self.scroll_lines.max(1) as i32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let config = ScrollConfig::default();
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));

        let config = ScrollConfig {
            animation_fps: 0,
            ..Default::default()
        };
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(16));

        let config = ScrollConfig {
            animation_fps: 5000,
            ..Default::default()
        };
        assert_eq!(config.animation_tick_duration(), Duration::from_millis(1));
    }

    #[test]
    fn test_is_smooth() {
        let mut config = ScrollConfig::default();
        assert!(config.is_smooth());

        config.animation_duration_ms = 0;
        assert!(!config.is_smooth());
    }

    #[test]
    fn test_line_step() {
        let mut config = ScrollConfig {
            scroll_lines: 3,
            ..Default::default()
        };
        assert_eq!(config.line_step(), 1);
        config.smooth_enabled = false;
        assert_eq!(config.line_step(), 3);
    }
}
