pub mod config;
pub mod content;
pub mod error;
pub mod reveal;
pub mod scroll;
pub mod text;

pub use config::{AppConfig, EasingType, RevealConfig, ScrollConfig};
pub use content::Portfolio;
pub use error::{Error, Result};
pub use reveal::{RevealEvent, RevealPhase, RevealSequencer, RevealTiming};
pub use scroll::{ScrollAnchor, ScrollRange, ScrollSnapshot, ScrollTracker};
pub use text::{group_words, WordRun, WordToken};
