//! Smooth page scrolling
//!
//! The page is one tall column of rows; [`PageScroller`] owns the offset of
//! the viewport into it and eases between targets. The easing and timing
//! helpers are shared with the word reveal rendering.

pub mod config;
pub mod easing;
pub mod page;
pub mod timing;

pub use config::ScrollConfigExt;
pub use easing::EasingTypeExt;
pub use page::PageScroller;
