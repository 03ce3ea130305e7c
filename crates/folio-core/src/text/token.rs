use serde::{Deserialize, Serialize};

/// One word of an animated text block
///
/// `style` is an opaque tag handed through to the renderer, which maps it to a
/// theme color role. Tokens keep reading order and are never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordToken {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default)]
    pub highlight: bool,
}

impl WordToken {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
            highlight: false,
        }
    }

    pub fn highlighted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
            highlight: true,
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Split a sentence on whitespace into plain tokens
    pub fn from_sentence(sentence: &str) -> Vec<Self> {
        sentence.split_whitespace().map(Self::plain).collect()
    }
}
