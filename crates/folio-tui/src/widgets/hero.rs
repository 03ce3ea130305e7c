use std::time::Instant;

use folio_core::config::RevealConfig;
use folio_core::{RevealPhase, RevealSequencer, WordRun, WordToken};
use ratatui::style::{Color, Modifier, Style};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::document::DocBuilder;
use crate::scroll::EasingTypeExt;
use crate::theme::{blend, Theme};
use crate::widgets::text::{wrap_plain, wrap_words, StyledWord};

/// Home page hero: animated headline and the about line
pub struct HeroSection;

impl HeroSection {
    pub fn compose(doc: &mut DocBuilder, app: &App, now: Instant) {
        let theme = &app.theme;
        let width = doc.content_width();
        let profile = &app.portfolio.profile;

        doc.mark_about();
        doc.blank(2);

        let headline = reveal_words(&app.hero, &profile.headline, theme.fg0, theme, &app.config.reveal, now)
            .into_iter()
            .map(|w| StyledWord {
                style: w.style.add_modifier(Modifier::BOLD),
                ..w
            })
            .collect::<Vec<_>>();
        doc.extend(wrap_words(&headline, width));
        doc.blank(1);

        if !profile.about.trim().is_empty() {
            let about_tokens = app.portfolio.about_words();
            let about = reveal_words(&app.about, &about_tokens, theme.fg1, theme, &app.config.reveal, now);
            doc.extend(wrap_words(&about, width));
        }
        doc.blank(2);

        let hint = Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC);
        doc.extend(wrap_plain("scroll with j/k, jump with 1-3", hint, width));
        doc.blank(2);
    }
}

/// Style every word of an animated block for the moment `now`
///
/// Words without a style tag are drawn in `base`.
/// Before the sequencer has been started the `fallback` tokens are laid out
/// hidden, so the block already takes its final space.
pub fn reveal_words(
    sequencer: &RevealSequencer,
    fallback: &[WordToken],
    base: Color,
    theme: &Theme,
    config: &RevealConfig,
    now: Instant,
) -> Vec<StyledWord> {
    if !sequencer.is_started() {
        return fallback.iter().map(|t| hidden_word(&t.text)).collect();
    }

    let mut words = Vec::with_capacity(sequencer.word_count());
    for (index, run) in sequencer.runs().iter().enumerate() {
        let phase = sequencer.phase(index).unwrap_or_default();
        let mut t = config.easing.apply(sequencer.run_progress(index, now));
        if !config.blur {
            t = t.max(0.5);
        }
        for (position, token) in run.tokens().iter().enumerate() {
            let joined = position > 0;
            words.push(paint_word(token, run, phase, t, joined, base, theme));
        }
    }
    words
}

fn paint_word(
    token: &WordToken,
    run: &WordRun,
    phase: RevealPhase,
    t: f64,
    joined: bool,
    base: Color,
    theme: &Theme,
) -> StyledWord {
    let color = token
        .style
        .as_deref()
        .or(run.style())
        .and_then(|tag| theme.role(tag))
        .unwrap_or(base);
    match phase {
        RevealPhase::Hidden => hidden_word(&token.text),
        RevealPhase::Revealing => {
            let mut style = Style::default().fg(blend(theme.bg0, color, t));
            if t < 0.5 {
                style = style.add_modifier(Modifier::DIM);
            }
            StyledWord::new(token.text.clone(), style)
        }
        RevealPhase::Revealed => StyledWord::new(token.text.clone(), Style::default().fg(color)),
        RevealPhase::Highlighted => {
            let style = Style::default()
                .fg(color)
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            let word = StyledWord::new(token.text.clone(), style);
            // Words inside one highlighted run share a single background
            if joined {
                word.with_gap(Style::default().bg(theme.highlight))
            } else {
                word
            }
        }
    }
}

/// Blank cells as wide as the word
fn hidden_word(text: &str) -> StyledWord {
    StyledWord::new(" ".repeat(text.width()), Style::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use folio_core::RevealTiming;

    fn tokens() -> Vec<WordToken> {
        vec![
            WordToken::plain("Hi"),
            WordToken::highlighted("Henry").with_style("accent"),
            WordToken::highlighted("Allen").with_style("accent"),
        ]
    }

    #[test]
    fn test_unstarted_block_is_blank_but_sized() {
        let sequencer = RevealSequencer::new(RevealTiming::default());
        let words = reveal_words(
            &sequencer,
            &tokens(),
            Color::White,
            &Theme::default(),
            &RevealConfig::default(),
            Instant::now(),
        );
        assert_eq!(words.len(), 3);
        assert_eq!(words[1].text, "     ");
    }

    #[test]
    fn test_highlight_shares_background() {
        let theme = Theme::default();
        let start = Instant::now();
        let mut sequencer = RevealSequencer::new(RevealTiming::default());
        sequencer.start(&tokens(), start);
        let later = start + Duration::from_secs(10);
        sequencer.advance(later);

        let words = reveal_words(&sequencer, &tokens(), theme.fg0, &theme, &RevealConfig::default(), later);
        assert_eq!(words[0].style.bg, None);
        assert_eq!(words[1].style.bg, Some(theme.highlight));
        assert_eq!(words[1].style.fg, Some(theme.accent));
        assert_eq!(words[1].gap.bg, None);
        assert_eq!(words[2].gap.bg, Some(theme.highlight));
    }

    #[test]
    fn test_revealing_word_fades_from_background() {
        let theme = Theme::default();
        let config = RevealConfig {
            easing: folio_core::EasingType::Linear,
            ..Default::default()
        };
        let start = Instant::now();
        let mut sequencer = RevealSequencer::new(RevealTiming::default());
        sequencer.start(&tokens(), start);
        sequencer.advance(start);

        let words = reveal_words(&sequencer, &tokens(), theme.fg0, &theme, &config, start);
        assert_eq!(words[0].style.fg, Some(theme.bg0));
        assert!(words[0].style.add_modifier.contains(Modifier::DIM));

        let mid = start + Duration::from_millis(250);
        let words = reveal_words(&sequencer, &tokens(), theme.fg0, &theme, &config, mid);
        assert_ne!(words[0].style.fg, Some(theme.bg0));
        assert_ne!(words[0].style.fg, Some(theme.fg0));
        assert!(matches!(words[0].style.fg, Some(Color::Rgb(..))));
    }
}
