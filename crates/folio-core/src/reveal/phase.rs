use std::fmt;

/// Presentation phase of one word run
///
/// Ordered: a run only ever moves to a later phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Revealing,
    Revealed,
    /// Only reachable by highlighted runs
    Highlighted,
}

impl RevealPhase {
    pub fn is_visible(self) -> bool {
        self >= RevealPhase::Revealing
    }
}

impl fmt::Display for RevealPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RevealPhase::Hidden => "hidden",
            RevealPhase::Revealing => "revealing",
            RevealPhase::Revealed => "revealed",
            RevealPhase::Highlighted => "highlighted",
        };
        f.write_str(name)
    }
}
