//! Partition of word tokens into plain words and highlighted runs

use super::token::WordToken;

/// A renderable unit of an animated text block
///
/// Adjacent highlighted tokens always share one `Highlight` run, so the
/// decoration drawn around them later is a single box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordRun {
    Plain(WordToken),
    /// Never empty
    Highlight(Vec<WordToken>),
}

impl WordRun {
    pub fn is_highlight(&self) -> bool {
        matches!(self, WordRun::Highlight(_))
    }

    pub fn tokens(&self) -> &[WordToken] {
        match self {
            WordRun::Plain(token) => std::slice::from_ref(token),
            WordRun::Highlight(tokens) => tokens,
        }
    }

    /// Words of the run joined by single spaces
    pub fn text(&self) -> String {
        self.tokens()
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Style tag of the run; a highlighted run takes its first token's tag
    pub fn style(&self) -> Option<&str> {
        self.tokens().first().and_then(|t| t.style.as_deref())
    }
}

/// Group tokens into runs in a single left-to-right pass
pub fn group_words(words: &[WordToken]) -> Vec<WordRun> {
    let mut runs = Vec::with_capacity(words.len());
    let mut pending: Vec<WordToken> = Vec::new();

    for (index, word) in words.iter().enumerate() {
        if word.highlight {
            pending.push(word.clone());
            let next_is_highlight = words.get(index + 1).is_some_and(|w| w.highlight);
            if !next_is_highlight {
                runs.push(WordRun::Highlight(std::mem::take(&mut pending)));
            }
        } else {
            if !pending.is_empty() {
                runs.push(WordRun::Highlight(std::mem::take(&mut pending)));
            }
            runs.push(WordRun::Plain(word.clone()));
        }
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn flatten(runs: &[WordRun]) -> Vec<WordToken> {
        runs.iter().flat_map(|r| r.tokens().iter().cloned()).collect()
    }

    #[test]
    fn test_merges_adjacent_highlights() {
        let words = vec![
            WordToken::plain("I'm"),
            WordToken::highlighted("Henry"),
            WordToken::highlighted("Allen"),
            WordToken::plain("and"),
        ];
        let runs = group_words(&words);
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0], WordRun::Plain(WordToken::plain("I'm")));
        assert_eq!(
            runs[1],
            WordRun::Highlight(vec![
                WordToken::highlighted("Henry"),
                WordToken::highlighted("Allen"),
            ])
        );
        assert_eq!(runs[1].text(), "Henry Allen");
        assert_eq!(runs[2], WordRun::Plain(WordToken::plain("and")));
    }

    #[test]
    fn test_trailing_highlight_flushed() {
        let words = vec![WordToken::plain("meet"), WordToken::highlighted("Folio")];
        let runs = group_words(&words);
        assert_eq!(runs.len(), 2);
        assert!(runs[1].is_highlight());
    }

    #[test]
    fn test_separated_highlights_stay_apart() {
        let words = vec![
            WordToken::highlighted("AI"),
            WordToken::plain("and"),
            WordToken::highlighted("founder"),
        ];
        let runs = group_words(&words);
        assert_eq!(runs.iter().filter(|r| r.is_highlight()).count(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_words(&[]).is_empty());
    }

    #[test]
    fn test_run_style_from_first_token() {
        let words = vec![
            WordToken::highlighted("Henry").with_style("accent"),
            WordToken::highlighted("Allen").with_style("blue"),
        ];
        let runs = group_words(&words);
        assert_eq!(runs[0].style(), Some("accent"));
    }

    fn token_strategy() -> impl Strategy<Value = WordToken> {
        ("[a-z]{1,6}", any::<bool>()).prop_map(|(text, highlight)| WordToken {
            text,
            style: None,
            highlight,
        })
    }

    proptest! {
        #[test]
        fn prop_partition_is_lossless(words in prop::collection::vec(token_strategy(), 0..40)) {
            let runs = group_words(&words);
            prop_assert_eq!(flatten(&runs), words);
        }

        #[test]
        fn prop_no_adjacent_highlight_runs(words in prop::collection::vec(token_strategy(), 0..40)) {
            let runs = group_words(&words);
            for pair in runs.windows(2) {
                prop_assert!(!(pair[0].is_highlight() && pair[1].is_highlight()));
            }
            for run in &runs {
                match run {
                    WordRun::Plain(token) => prop_assert!(!token.highlight),
                    WordRun::Highlight(tokens) => {
                        prop_assert!(!tokens.is_empty());
                        prop_assert!(tokens.iter().all(|t| t.highlight));
                    }
                }
            }
        }

        #[test]
        fn prop_grouping_is_deterministic(words in prop::collection::vec(token_strategy(), 0..40)) {
            prop_assert_eq!(group_words(&words), group_words(&words));
        }
    }
}
