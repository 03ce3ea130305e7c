use tracing::trace;

use super::anchor::ScrollRange;
use super::progress::{is_compact, scroll_progress, Container, TimelineProgress};

/// Values derived from one scroll sample
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSnapshot {
    pub offset: f64,
    /// Navbar should use its compact presentation
    pub compact: bool,
    /// Progress through the tracked container's scroll range
    pub progress: f64,
    pub timeline: TimelineProgress,
}

/// Turns scroll samples into presentation values
///
/// Holds only its configuration, the measured container and the latest
/// snapshot. Samples may arrive in any number; the last one wins.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    compact_threshold: f64,
    range: ScrollRange,
    container: Container,
    last: ScrollSnapshot,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(100.0, ScrollRange::default())
    }
}

impl ScrollTracker {
    pub fn new(compact_threshold: f64, range: ScrollRange) -> Self {
        Self {
            compact_threshold,
            range,
            container: Container::default(),
            last: ScrollSnapshot::default(),
        }
    }

    /// Record the tracked container's placement after layout
    pub fn set_container(&mut self, container: Container) {
        self.container = container;
    }

    /// Derive presentation values for a new scroll offset
    pub fn sample(&mut self, offset: f64, viewport_height: f64) -> ScrollSnapshot {
        let progress = scroll_progress(offset, self.container, viewport_height, &self.range);
        let snapshot = ScrollSnapshot {
            offset,
            compact: is_compact(offset, self.compact_threshold),
            progress,
            timeline: TimelineProgress::from_progress(progress, self.container.height),
        };
        if snapshot.compact != self.last.compact {
            trace!(offset, compact = snapshot.compact, "navbar compact flag changed");
        }
        self.last = snapshot;
        snapshot
    }

    /// Latest snapshot
    pub fn last(&self) -> ScrollSnapshot {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_derives_all_values() {
        let mut tracker = ScrollTracker::default();
        tracker.set_container(Container::new(1000.0, 2000.0));

        let top = tracker.sample(0.0, 800.0);
        assert!(!top.compact);
        assert_eq!(top.progress, 0.0);
        assert_eq!(top.timeline.opacity, 0.0);

        let mid = tracker.sample(1760.0, 800.0);
        assert!(mid.compact);
        assert!((mid.progress - 0.5).abs() < 1e-9);
        assert!((mid.timeline.fill - 1000.0).abs() < 1e-9);
        assert_eq!(mid.timeline.opacity, 1.0);
    }

    #[test]
    fn test_last_sample_wins() {
        let mut tracker = ScrollTracker::default();
        tracker.sample(500.0, 800.0);
        tracker.sample(50.0, 800.0);
        assert_eq!(tracker.last().offset, 50.0);
        assert!(!tracker.last().compact);
    }

    #[test]
    fn test_compact_flips_without_hysteresis() {
        let mut tracker = ScrollTracker::default();
        assert!(!tracker.sample(99.0, 800.0).compact);
        assert!(tracker.sample(101.0, 800.0).compact);
        assert!(!tracker.sample(99.0, 800.0).compact);
        assert!(tracker.sample(101.0, 800.0).compact);
    }

    #[test]
    fn test_zero_height_container() {
        let mut tracker = ScrollTracker::default();
        let snapshot = tracker.sample(10_000.0, 800.0);
        assert_eq!(snapshot.timeline.fill, 0.0);
    }
}
