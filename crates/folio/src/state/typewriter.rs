//! Typewriter headline state
//!
//! The headline is revealed a few characters at a time with a jittered
//! delay between steps, starting shortly after launch. Whitespace runs
//! collapse to one space so the typed text lines up with the wrapped rows.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Delay before the first characters appear
pub const START_DELAY: Duration = Duration::from_millis(400);

/// Shortest pause between two steps
const MIN_STEP_DELAY_MS: f64 = 26.0;

/// Random extra pause on top of the minimum
const STEP_JITTER_MS: f64 = 50.0;

#[derive(Debug, Clone)]
pub struct TypewriterState {
    full: Vec<char>,
    shown: usize,
    next_step_at: Option<Instant>,
    rng: StdRng,
}

impl Default for TypewriterState {
    fn default() -> Self {
        Self::new("", Instant::now(), StdRng::seed_from_u64(0))
    }
}

impl TypewriterState {
    pub fn new(text: &str, started_at: Instant, rng: StdRng) -> Self {
        let full: Vec<char> = text
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .chars()
            .collect();
        let next_step_at = (!full.is_empty()).then(|| started_at + START_DELAY);
        Self {
            full,
            shown: 0,
            next_step_at,
            rng,
        }
    }

    /// The part of the headline typed so far
    pub fn visible_text(&self) -> String {
        self.full[..self.shown].iter().collect()
    }

    /// Number of characters typed so far
    pub fn typed_len(&self) -> usize {
        self.shown
    }

    pub fn is_complete(&self) -> bool {
        self.shown >= self.full.len()
    }

    /// Run every step that is due at `now`
    pub fn advance(&mut self, now: Instant) {
        while let Some(due) = self.next_step_at {
            if now < due {
                break;
            }
            let chars = (self.rng.gen::<f64>() * 2.0).round().max(1.0) as usize;
            self.shown = (self.shown + chars).min(self.full.len());

            self.next_step_at = if self.is_complete() {
                None
            } else {
                let delay = MIN_STEP_DELAY_MS + self.rng.gen::<f64>() * STEP_JITTER_MS;
                Some(due + Duration::from_secs_f64(delay / 1000.0))
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typewriter(text: &str, start: Instant) -> TypewriterState {
        TypewriterState::new(text, start, StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_nothing_before_start_delay() {
        let start = Instant::now();
        let mut tw = typewriter("Hello world", start);
        tw.advance(start + Duration::from_millis(399));
        assert_eq!(tw.visible_text(), "");
        assert!(!tw.is_complete());
    }

    #[test]
    fn test_first_step_types_one_or_two_chars() {
        let start = Instant::now();
        let mut tw = typewriter("Hello world", start);
        tw.advance(start + START_DELAY);
        let shown = tw.visible_text();
        assert!(shown == "H" || shown == "He", "got {shown:?}");
    }

    #[test]
    fn test_steps_never_exceed_max_delay() {
        let start = Instant::now();
        let text = "Hello world";
        let mut tw = typewriter(text, start);

        // Each step types at least one char and waits at most 76ms
        let mut now = start + START_DELAY;
        let mut previous = 0;
        for _ in 0..text.len() {
            tw.advance(now);
            let shown = tw.visible_text().chars().count();
            assert!(shown > previous || tw.is_complete());
            previous = shown;
            now += Duration::from_millis(76);
        }
        assert!(tw.is_complete());
        assert_eq!(tw.visible_text(), text);
    }

    #[test]
    fn test_catches_up_after_long_pause() {
        let start = Instant::now();
        let mut tw = typewriter("abc", start);
        tw.advance(start + Duration::from_secs(10));
        assert!(tw.is_complete());
        assert_eq!(tw.visible_text(), "abc");
    }

    #[test]
    fn test_whitespace_collapses() {
        let start = Instant::now();
        let mut tw = typewriter("  fast,\n   quiet  ", start);
        tw.advance(start + Duration::from_secs(5));
        assert_eq!(tw.visible_text(), "fast, quiet");
        assert_eq!(tw.typed_len(), 11);
    }

    #[test]
    fn test_empty_headline_is_complete() {
        let tw = typewriter("   ", Instant::now());
        assert!(tw.is_complete());
        assert_eq!(tw.visible_text(), "");
    }

    #[test]
    fn test_multibyte_text() {
        let start = Instant::now();
        let mut tw = typewriter("héllo wörld", start);
        tw.advance(start + Duration::from_secs(5));
        assert_eq!(tw.visible_text(), "héllo wörld");
    }
}
