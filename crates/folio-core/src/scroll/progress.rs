use super::anchor::ScrollRange;

/// Vertical placement of the tracked container, in page units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Container {
    /// Distance from the top of the page to the container's top edge
    pub top: f64,
    pub height: f64,
}

impl Container {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// Map `value` from `input` onto `output`, clamping outside the input span
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_lo, in_hi) = input;
    let (out_lo, out_hi) = output;
    if in_hi == in_lo {
        return if value >= in_hi { out_hi } else { out_lo };
    }
    let t = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + (out_hi - out_lo) * t
}

/// Normalized progress of `offset` through `range`, clamped to [0, 1]
///
/// A range whose end does not lie after its start behaves as a step at the
/// later of the two anchors.
pub fn scroll_progress(
    offset: f64,
    container: Container,
    viewport_height: f64,
    range: &ScrollRange,
) -> f64 {
    let start = range
        .start
        .resolve(container.top, container.height, viewport_height);
    let end = range
        .end
        .resolve(container.top, container.height, viewport_height);

    if end <= start {
        return if offset >= start { 1.0 } else { 0.0 };
    }
    map_range(offset, (start, end), (0.0, 1.0))
}

/// Navbar compact flag: strictly past the threshold, no hysteresis
#[inline]
pub fn is_compact(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Timeline progress bar derived from scroll progress
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimelineProgress {
    /// Filled length of the bar, 0 to the container height
    pub fill: f64,
    /// Bar opacity, reaching 1 over the first tenth of the range
    pub opacity: f64,
}

impl TimelineProgress {
    /// Share of the scroll range over which the bar fades in
    pub const FADE_IN_SPAN: f64 = 0.1;

    pub fn from_progress(progress: f64, container_height: f64) -> Self {
        Self {
            fill: map_range(progress, (0.0, 1.0), (0.0, container_height.max(0.0))),
            opacity: map_range(progress, (0.0, Self::FADE_IN_SPAN), (0.0, 1.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;

    fn container() -> Container {
        Container::new(1000.0, 2000.0)
    }

    #[test]
    fn test_map_range_clamps() {
        assert_eq!(map_range(-5.0, (0.0, 10.0), (0.0, 1.0)), 0.0);
        assert_eq!(map_range(5.0, (0.0, 10.0), (0.0, 1.0)), 0.5);
        assert_eq!(map_range(50.0, (0.0, 10.0), (0.0, 1.0)), 1.0);
        assert_eq!(map_range(0.05, (0.0, 0.1), (0.0, 1.0)), 0.5);
    }

    #[test]
    fn test_map_range_degenerate_input() {
        assert_eq!(map_range(1.0, (2.0, 2.0), (0.0, 1.0)), 0.0);
        assert_eq!(map_range(2.0, (2.0, 2.0), (0.0, 1.0)), 1.0);
    }

    #[test]
    fn test_progress_clamps_at_anchors() {
        let range = ScrollRange::default();
        // start anchor at 920, end anchor at 2600
        assert_eq!(scroll_progress(0.0, container(), VIEWPORT, &range), 0.0);
        assert_eq!(scroll_progress(920.0, container(), VIEWPORT, &range), 0.0);
        assert_eq!(scroll_progress(2600.0, container(), VIEWPORT, &range), 1.0);
        assert_eq!(scroll_progress(10_000.0, container(), VIEWPORT, &range), 1.0);
        assert!((scroll_progress(1760.0, container(), VIEWPORT, &range) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_progress_monotonic() {
        let range = ScrollRange::default();
        let mut previous = 0.0;
        for step in 0..400 {
            let p = scroll_progress(step as f64 * 10.0, container(), VIEWPORT, &range);
            assert!((0.0..=1.0).contains(&p));
            assert!(p >= previous);
            previous = p;
        }
    }

    #[test]
    fn test_degenerate_range_steps() {
        let range = ScrollRange {
            start: "end 50%".parse().unwrap(),
            end: "start 10%".parse().unwrap(),
        };
        assert_eq!(scroll_progress(2599.0, container(), VIEWPORT, &range), 0.0);
        assert_eq!(scroll_progress(2600.0, container(), VIEWPORT, &range), 1.0);
    }

    #[test]
    fn test_navbar_threshold() {
        assert!(!is_compact(0.0, 100.0));
        assert!(!is_compact(99.0, 100.0));
        assert!(!is_compact(100.0, 100.0));
        assert!(is_compact(101.0, 100.0));
    }

    #[test]
    fn test_timeline_progress() {
        let start = TimelineProgress::from_progress(0.0, 2000.0);
        assert_eq!(start.fill, 0.0);
        assert_eq!(start.opacity, 0.0);

        let early = TimelineProgress::from_progress(0.05, 2000.0);
        assert!((early.fill - 100.0).abs() < 1e-9);
        assert!((early.opacity - 0.5).abs() < 1e-9);

        let late = TimelineProgress::from_progress(0.5, 2000.0);
        assert_eq!(late.fill, 1000.0);
        assert_eq!(late.opacity, 1.0);

        let done = TimelineProgress::from_progress(1.0, 2000.0);
        assert_eq!(done.fill, 2000.0);
    }
}
