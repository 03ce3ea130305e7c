//! Word wrapping for styled text
//!
//! Lines are built from whole words so animated text never reflows: a word
//! keeps its cell width whether it is drawn or still hidden.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// One word plus the style of the space in front of it
#[derive(Debug, Clone)]
pub struct StyledWord {
    pub text: String,
    pub style: Style,
    /// Style of the separating space, so a highlight can span a whole run
    pub gap: Style,
}

impl StyledWord {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            gap: Style::default(),
        }
    }

    pub fn with_gap(mut self, gap: Style) -> Self {
        self.gap = gap;
        self
    }
}

/// Greedy wrap of `words` into lines at most `width` cells wide
///
/// Words wider than a full line are split at character boundaries.
pub fn wrap_words(words: &[StyledWord], width: u16) -> Vec<Line<'static>> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;

    for word in words {
        let word_width = word.text.width();

        if used > 0 && used + 1 + word_width > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }

        if word_width > width {
            for piece in split_to_width(&word.text, width) {
                if used > 0 {
                    lines.push(Line::from(std::mem::take(&mut spans)));
                }
                used = piece.width();
                spans.push(Span::styled(piece, word.style));
            }
            continue;
        }

        if used > 0 {
            spans.push(Span::styled(" ", word.gap));
            used += 1;
        }
        spans.push(Span::styled(word.text.clone(), word.style));
        used += word_width;
    }

    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

/// Wrap a plain sentence in one style
pub fn wrap_plain(text: &str, style: Style, width: u16) -> Vec<Line<'static>> {
    let words: Vec<StyledWord> = text
        .split_whitespace()
        .map(|w| StyledWord::new(w, style).with_gap(style))
        .collect();
    wrap_words(&words, width)
}

/// Prefix every line with `indent` spaces
pub fn indent(lines: Vec<Line<'static>>, indent: u16) -> Vec<Line<'static>> {
    let pad = " ".repeat(indent as usize);
    lines
        .into_iter()
        .map(|line| {
            let mut spans = vec![Span::raw(pad.clone())];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect()
}

/// Right-pad a line with spaces in `style` until it is `width` cells wide
pub fn pad_line(mut line: Line<'static>, width: usize, style: Style) -> Line<'static> {
    let used = line.width();
    if used < width {
        line.spans.push(Span::styled(" ".repeat(width - used), style));
    }
    line
}

/// Truncate a string to `max_width` cells, ending with an ellipsis when cut
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

fn split_to_width(text: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(ch);
        used += w;
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}
