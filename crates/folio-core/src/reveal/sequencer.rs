use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tracing::debug;

use super::phase::RevealPhase;
use crate::text::{group_words, WordRun, WordToken};

/// Timing of a reveal sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    /// Offset between consecutive runs starting to reveal
    pub stagger: Duration,
    /// Wait after the full reveal before highlighted runs are decorated
    pub highlight_delay: Duration,
    /// Margin after `word_count * stagger` before the block counts as revealed
    pub settle: Duration,
    /// Time one run spends in `Revealing`
    pub word_duration: Duration,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            stagger: Duration::from_millis(150),
            highlight_delay: Duration::from_millis(1000),
            settle: Duration::from_millis(500),
            word_duration: Duration::from_millis(500),
        }
    }
}

impl RevealTiming {
    /// Start offset of the run at `index`
    pub fn run_offset(&self, index: usize) -> Duration {
        self.stagger.saturating_mul(saturating_u32(index))
    }

    /// Time from activation until the whole block counts as revealed
    pub fn full_reveal_after(&self, word_count: usize) -> Duration {
        self.stagger
            .saturating_mul(saturating_u32(word_count))
            .saturating_add(self.settle)
    }

    /// Time from activation until highlighted runs are decorated
    pub fn highlight_after(&self, word_count: usize) -> Duration {
        self.full_reveal_after(word_count)
            .saturating_add(self.highlight_delay)
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Notifications emitted by a sequencer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealEvent {
    /// Every run has finished its base reveal
    FullyRevealed { label: String },
    /// Highlighted runs are decorated; sent once per sequence
    Completed { label: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    RunStart(usize),
    RunSettle(usize),
    FullReveal,
    Highlight,
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due: Instant,
    transition: Transition,
}

/// Phase state machine for one animated text block
///
/// `start` schedules every transition up front; `advance` applies the ones
/// that are due; `cancel` drops whatever is still pending. Phases only move
/// forward, so a late or duplicate transition can never undo an earlier one.
#[derive(Debug)]
pub struct RevealSequencer {
    label: String,
    timing: RevealTiming,
    /// Replacement timing, swapped in by the next `start`
    next_timing: Option<RevealTiming>,
    runs: Vec<WordRun>,
    phases: Vec<RevealPhase>,
    word_count: usize,
    started_at: Option<Instant>,
    /// Sorted by due time; equal deadlines keep scheduling order
    pending: VecDeque<Scheduled>,
    fully_revealed: bool,
    completed: bool,
    completions: u32,
    event_tx: Option<mpsc::UnboundedSender<RevealEvent>>,
}

impl RevealSequencer {
    pub fn new(timing: RevealTiming) -> Self {
        Self {
            label: String::new(),
            timing,
            next_timing: None,
            runs: Vec::new(),
            phases: Vec::new(),
            word_count: 0,
            started_at: None,
            pending: VecDeque::new(),
            fully_revealed: false,
            completed: false,
            completions: 0,
            event_tx: None,
        }
    }

    /// Name used in logs and events
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the channel that receives reveal notifications
    pub fn with_event_sender(mut self, tx: mpsc::UnboundedSender<RevealEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    pub fn timing(&self) -> RevealTiming {
        self.timing
    }

    /// Replace the timing; takes effect on the next `start`
    ///
    /// A sequence already running keeps the timing it was scheduled with.
    pub fn set_timing(&mut self, timing: RevealTiming) {
        self.next_timing = Some(timing);
    }

    /// Begin a new sequence for `words`, cancelling any sequence in flight
    pub fn start(&mut self, words: &[WordToken], now: Instant) {
        self.cancel();
        if let Some(timing) = self.next_timing.take() {
            self.timing = timing;
        }

        self.runs = group_words(words);
        self.phases = vec![RevealPhase::Hidden; self.runs.len()];
        self.word_count = words.len();
        self.started_at = Some(now);
        self.fully_revealed = false;
        self.completed = false;
        self.completions = 0;

        let mut schedule = Vec::with_capacity(self.runs.len() * 2 + 2);
        for index in 0..self.runs.len() {
            let offset = self.timing.run_offset(index);
            push_at(&mut schedule, now, offset, Transition::RunStart(index));
            push_at(
                &mut schedule,
                now,
                offset.saturating_add(self.timing.word_duration),
                Transition::RunSettle(index),
            );
        }
        push_at(
            &mut schedule,
            now,
            self.timing.full_reveal_after(self.word_count),
            Transition::FullReveal,
        );
        push_at(
            &mut schedule,
            now,
            self.timing.highlight_after(self.word_count),
            Transition::Highlight,
        );
        // Stable: a run's start stays ahead of its settle, the full reveal ahead of the highlight
        schedule.sort_by_key(|s| s.due);
        self.pending = schedule.into();

        debug!(
            label = %self.label,
            words = self.word_count,
            runs = self.runs.len(),
            "reveal sequence started"
        );
    }

    /// Apply every transition due at or before `now`
    ///
    /// Returns true when any phase changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(next) = self.pending.front() {
            if next.due > now {
                break;
            }
            let transition = next.transition;
            self.pending.pop_front();
            changed |= self.apply(transition);
        }
        changed
    }

    /// Drop all pending transitions; phases stay where they are
    pub fn cancel(&mut self) {
        if !self.pending.is_empty() {
            debug!(
                label = %self.label,
                pending = self.pending.len(),
                "reveal sequence cancelled"
            );
        }
        self.pending.clear();
    }

    fn apply(&mut self, transition: Transition) -> bool {
        match transition {
            Transition::RunStart(index) => self.promote(index, RevealPhase::Revealing),
            Transition::RunSettle(index) => self.promote(index, RevealPhase::Revealed),
            Transition::FullReveal => {
                let mut changed = false;
                for index in 0..self.phases.len() {
                    changed |= self.promote(index, RevealPhase::Revealed);
                }
                self.fully_revealed = true;
                debug!(label = %self.label, "reveal sequence fully revealed");
                self.notify(RevealEvent::FullyRevealed {
                    label: self.label.clone(),
                });
                changed
            }
            Transition::Highlight => {
                let mut changed = false;
                for index in 0..self.runs.len() {
                    if self.runs[index].is_highlight() {
                        changed |= self.promote(index, RevealPhase::Highlighted);
                    }
                }
                if !self.completed {
                    self.completed = true;
                    self.completions += 1;
                    debug!(label = %self.label, "reveal sequence completed");
                    self.notify(RevealEvent::Completed {
                        label: self.label.clone(),
                    });
                }
                changed
            }
        }
    }

    fn promote(&mut self, index: usize, target: RevealPhase) -> bool {
        match self.phases.get_mut(index) {
            Some(phase) if *phase < target => {
                *phase = target;
                true
            }
            _ => false,
        }
    }

    fn notify(&self, event: RevealEvent) {
        if let Some(ref tx) = self.event_tx {
            // Receiver gone means nobody is listening any more
            let _ = tx.send(event);
        }
    }

    pub fn runs(&self) -> &[WordRun] {
        &self.runs
    }

    pub fn phases(&self) -> &[RevealPhase] {
        &self.phases
    }

    pub fn phase(&self, index: usize) -> Option<RevealPhase> {
        self.phases.get(index).copied()
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// True while transitions are still scheduled
    pub fn is_active(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.fully_revealed
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// How many times completion fired for the current sequence (0 or 1)
    pub fn completion_count(&self) -> u32 {
        self.completions
    }

    /// Deadline of the next pending transition
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.front().map(|s| s.due)
    }

    /// Linear reveal fraction of the run at `index`, for opacity and blur
    pub fn run_progress(&self, index: usize, now: Instant) -> f64 {
        let Some(phase) = self.phase(index) else {
            return 0.0;
        };
        match phase {
            RevealPhase::Hidden => 0.0,
            RevealPhase::Revealed | RevealPhase::Highlighted => 1.0,
            RevealPhase::Revealing => {
                let Some(started) = self.started_at else {
                    return 1.0;
                };
                let duration = self.timing.word_duration;
                if duration.is_zero() {
                    return 1.0;
                }
                let run_start = started
                    .checked_add(self.timing.run_offset(index))
                    .unwrap_or(started);
                let elapsed = now.saturating_duration_since(run_start);
                (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
            }
        }
    }
}

fn push_at(schedule: &mut Vec<Scheduled>, base: Instant, offset: Duration, transition: Transition) {
    // An offset past the clock's range never fires
    if let Some(due) = base.checked_add(offset) {
        schedule.push(Scheduled { due, transition });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn hero_words() -> Vec<WordToken> {
        vec![
            WordToken::plain("Hi,"),
            WordToken::plain("I'm"),
            WordToken::highlighted("Henry"),
            WordToken::highlighted("Allen"),
            WordToken::plain("and"),
            WordToken::plain("I"),
            WordToken::plain("build"),
            WordToken::highlighted("AI"),
        ]
    }

    fn scenario_timing() -> RevealTiming {
        RevealTiming {
            stagger: ms(300),
            highlight_delay: ms(1200),
            settle: ms(500),
            word_duration: ms(500),
        }
    }

    #[test]
    fn test_new_timing_applies_on_next_start() {
        let t0 = Instant::now();
        let mut seq = RevealSequencer::new(RevealTiming::default());
        seq.start(&hero_words(), t0);
        seq.set_timing(scenario_timing());
        assert_eq!(seq.timing(), RevealTiming::default());

        // The running sequence keeps its 150ms stagger and 500ms fade
        seq.advance(t0 + ms(150));
        assert_eq!(seq.phase(1), Some(RevealPhase::Revealing));
        assert!((seq.run_progress(1, t0 + ms(400)) - 0.5).abs() < 1e-9);

        seq.start(&hero_words(), t0);
        assert_eq!(seq.timing(), scenario_timing());
        // Run 1 starts one 300ms stagger in
        seq.advance(t0 + ms(299));
        assert_eq!(seq.phase(1), Some(RevealPhase::Hidden));
        seq.advance(t0 + ms(300));
        assert_eq!(seq.phase(1), Some(RevealPhase::Revealing));
    }

    #[test]
    fn test_starts_hidden() {
        let t0 = Instant::now();
        let mut seq = RevealSequencer::new(scenario_timing());
        seq.start(&hero_words(), t0);
        assert!(seq.phases().iter().all(|p| *p == RevealPhase::Hidden));
        assert_eq!(seq.runs().len(), 7);
        assert_eq!(seq.word_count(), 8);
        assert!(seq.is_active());
    }

    #[test]
    fn test_runs_stagger_left_to_right() {
        let t0 = Instant::now();
        let mut seq = RevealSequencer::new(scenario_timing());
        seq.start(&hero_words(), t0);

        seq.advance(t0);
        assert_eq!(seq.phase(0), Some(RevealPhase::Revealing));
        assert_eq!(seq.phase(1), Some(RevealPhase::Hidden));

        seq.advance(t0 + ms(300));
        assert_eq!(seq.phase(1), Some(RevealPhase::Revealing));
        assert_eq!(seq.phase(2), Some(RevealPhase::Hidden));

        seq.advance(t0 + ms(500));
        assert_eq!(seq.phase(0), Some(RevealPhase::Revealed));
    }

    #[test]
    fn test_timing_scenario_completes_once() {
        let t0 = Instant::now();
        let mut seq = RevealSequencer::new(scenario_timing());
        seq.start(&hero_words(), t0);

        // 8 * 300ms + 500ms settle + 1200ms highlight delay
        let done = t0 + ms(4100);
        seq.advance(done - ms(1));
        assert!(seq.is_fully_revealed());
        assert!(!seq.is_complete());
        assert!(!seq.phases().contains(&RevealPhase::Highlighted));

        seq.advance(done);
        assert!(seq.is_complete());
        assert_eq!(seq.completion_count(), 1);

        seq.advance(done + ms(10_000));
        assert_eq!(seq.completion_count(), 1);
        assert!(!seq.is_active());
    }

    #[test]
    fn test_full_reveal_deadline() {
        let t0 = Instant::now();
        let mut seq = RevealSequencer::new(scenario_timing());
        seq.start(&hero_words(), t0);

        seq.advance(t0 + ms(2899));
        assert!(!seq.is_fully_revealed());
        seq.advance(t0 + ms(2900));
        assert!(seq.is_fully_revealed());
        assert!(seq.phases().iter().all(|p| *p == RevealPhase::Revealed));
    }

    #[test]
    fn test_phases_never_regress() {
        let t0 = Instant::now();
        let mut seq = RevealSequencer::new(scenario_timing());
        seq.start(&hero_words(), t0);

        let mut previous = seq.phases().to_vec();
        for step in 0..120 {
            seq.advance(t0 + ms(step * 50));
            for (before, after) in previous.iter().zip(seq.phases()) {
                assert!(after >= before, "phase regressed at step {}", step);
            }
            previous = seq.phases().to_vec();
        }
    }

    #[test]
    fn test_highlight_is_atomic_and_late() {
        let t0 = Instant::now();
        let mut seq = RevealSequencer::new(scenario_timing());
        seq.start(&hero_words(), t0);

        for step in 0..120 {
            seq.advance(t0 + ms(step * 50));
            let highlighted: Vec<bool> = seq
                .runs()
                .iter()
                .zip(seq.phases())
                .filter(|(run, _)| run.is_highlight())
                .map(|(_, phase)| *phase == RevealPhase::Highlighted)
                .collect();
            // Either none or all highlighted runs are decorated
            assert!(highlighted.iter().all(|h| *h) || highlighted.iter().all(|h| !*h));
            if highlighted.iter().any(|h| *h) {
                assert!(seq.phases().iter().all(|p| *p >= RevealPhase::Revealed));
            }
        }
        assert!(seq.is_complete());
    }

    #[test]
    fn test_plain_runs_stay_revealed() {
        let t0 = Instant::now();
        let mut seq = RevealSequencer::new(scenario_timing());
        seq.start(&hero_words(), t0);
        seq.advance(t0 + ms(60_000));

        for (run, phase) in seq.runs().iter().zip(seq.phases()) {
            if run.is_highlight() {
                assert_eq!(*phase, RevealPhase::Highlighted);
            } else {
                assert_eq!(*phase, RevealPhase::Revealed);
            }
        }
    }

    #[test]
    fn test_cancel_stops_all_mutation() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let t0 = Instant::now();
        let mut seq = RevealSequencer::new(scenario_timing())
            .with_label("hero")
            .with_event_sender(tx);
        seq.start(&hero_words(), t0);
        seq.advance(t0 + ms(700));

        seq.cancel();
        let frozen = seq.phases().to_vec();
        assert!(!seq.advance(t0 + ms(60_000)));
        assert_eq!(seq.phases(), frozen.as_slice());
        assert!(!seq.is_complete());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_restart_discards_previous_schedule() {
        let t0 = Instant::now();
        let mut seq = RevealSequencer::new(scenario_timing());
        seq.start(&hero_words(), t0);
        seq.advance(t0 + ms(1000));

        let t1 = t0 + ms(1000);
        let words = vec![WordToken::plain("Hello"), WordToken::highlighted("world")];
        seq.start(&words, t1);
        assert_eq!(seq.runs().len(), 2);
        assert!(seq.phases().iter().all(|p| *p == RevealPhase::Hidden));

        // The first sequence would have completed at t0 + 4100ms
        seq.advance(t0 + ms(4100));
        assert_eq!(seq.completion_count(), 1);

        // The new one completes at t1 + 2 * 300 + 500 + 1200
        let mut fresh = RevealSequencer::new(scenario_timing());
        fresh.start(&words, t1);
        fresh.advance(t1 + ms(2299));
        assert!(!fresh.is_complete());
        fresh.advance(t1 + ms(2300));
        assert!(fresh.is_complete());
    }

    #[test]
    fn test_zero_stagger_reveals_together() {
        let t0 = Instant::now();
        let timing = RevealTiming {
            stagger: Duration::ZERO,
            ..scenario_timing()
        };
        let mut seq = RevealSequencer::new(timing);
        seq.start(&hero_words(), t0);
        seq.advance(t0);
        assert!(seq.phases().iter().all(|p| *p == RevealPhase::Revealing));
    }

    #[test]
    fn test_empty_words_still_complete() {
        let t0 = Instant::now();
        let mut seq = RevealSequencer::new(scenario_timing());
        seq.start(&[], t0);
        assert!(seq.runs().is_empty());

        seq.advance(t0 + ms(1700));
        assert!(seq.is_complete());
        assert_eq!(seq.completion_count(), 1);
    }

    #[test]
    fn test_events_in_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let t0 = Instant::now();
        let mut seq = RevealSequencer::new(scenario_timing())
            .with_label("hero")
            .with_event_sender(tx);
        seq.start(&hero_words(), t0);
        seq.advance(t0 + ms(60_000));

        assert_eq!(
            rx.try_recv().ok(),
            Some(RevealEvent::FullyRevealed { label: "hero".into() })
        );
        assert_eq!(
            rx.try_recv().ok(),
            Some(RevealEvent::Completed { label: "hero".into() })
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_run_progress() {
        let t0 = Instant::now();
        let mut seq = RevealSequencer::new(scenario_timing());
        seq.start(&hero_words(), t0);
        assert_eq!(seq.run_progress(0, t0), 0.0);

        seq.advance(t0 + ms(250));
        assert!((seq.run_progress(0, t0 + ms(250)) - 0.5).abs() < 1e-9);
        assert_eq!(seq.run_progress(1, t0 + ms(250)), 0.0);

        seq.advance(t0 + ms(600));
        assert_eq!(seq.run_progress(0, t0 + ms(600)), 1.0);
        assert_eq!(seq.run_progress(99, t0), 0.0);
    }

    #[test]
    fn test_next_deadline() {
        let t0 = Instant::now();
        let mut seq = RevealSequencer::new(scenario_timing());
        assert_eq!(seq.next_deadline(), None);
        seq.start(&hero_words(), t0);
        assert_eq!(seq.next_deadline(), Some(t0));
        seq.advance(t0);
        assert_eq!(seq.next_deadline(), Some(t0 + ms(300)));
    }
}
