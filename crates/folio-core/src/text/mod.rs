//! Word tokens and grouping for animated text blocks

pub mod grouper;
pub mod token;

pub use grouper::{group_words, WordRun};
pub use token::WordToken;
