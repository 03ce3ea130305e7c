//! Staggered word reveal followed by a delayed highlight
//!
//! A text block goes through two phases. First every run fades in, each one
//! offset from the previous by the stagger delay. Once the last run has had
//! time to settle and a further highlight delay has passed, all highlighted
//! runs switch to their decorated presentation together.
//!
//! The sequencer owns its pending transitions. It never reads the clock:
//! callers pass `now` to `start` and `advance`, which keeps it deterministic
//! under test and independent of the render loop driving it.

pub mod phase;
pub mod sequencer;

pub use phase::RevealPhase;
pub use sequencer::{RevealEvent, RevealSequencer, RevealTiming};
