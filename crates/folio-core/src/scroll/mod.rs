//! Scroll-linked presentation values
//!
//! Pure derivations from a scroll offset: the navbar compact flag and the
//! timeline progress bar. Observing the scroll position is the caller's job;
//! everything here is recomputed from the latest sample.

pub mod anchor;
pub mod progress;
pub mod tracker;

pub use anchor::{ScrollAnchor, ScrollRange, ViewportPosition};
pub use progress::{is_compact, map_range, scroll_progress, Container, TimelineProgress};
pub use tracker::{ScrollSnapshot, ScrollTracker};
