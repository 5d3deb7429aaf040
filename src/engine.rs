//! The typing engine: paces text out word by word and occasionally types
//! and erases a filler snippet first, the way a hesitant typist would.
//!
//! The engine owns its random generator. Seeding it makes the whole action
//! stream reproducible, which the tests rely on.

use crate::config::Config;
use crate::error::Result;
use crate::injector::{Key, KeyInjector};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Pause after each backspace of a noise snippet. Independent of `--cps`.
pub const ERASE_PAUSE: Duration = Duration::from_millis(20);

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingOutcome {
    Completed,
    /// The cancel flag was raised; whatever was already typed stays.
    Interrupted,
}

impl TypingOutcome {
    /// Process exit status for this outcome.
    pub fn exit_status(self) -> u8 {
        match self {
            TypingOutcome::Completed => 0,
            TypingOutcome::Interrupted => 1,
        }
    }

    /// Message for stderr, if the outcome warrants one.
    pub fn message(self) -> Option<&'static str> {
        match self {
            TypingOutcome::Completed => None,
            TypingOutcome::Interrupted => Some("Interrupted before completion."),
        }
    }
}

pub struct TypingEngine<R = ChaCha8Rng> {
    interval: Duration,
    start_delay: Duration,
    noise_probability: f64,
    rng: R,
}

impl TypingEngine<ChaCha8Rng> {
    /// Build an engine seeded from `config.random_seed`, or from OS entropy
    /// when no seed is set.
    pub fn new(config: &Config) -> Self {
        let rng = match config.random_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> TypingEngine<R> {
    pub fn with_rng(config: &Config, rng: R) -> Self {
        Self {
            interval: config.interval(),
            start_delay: config.start_delay(),
            noise_probability: config.noise_probability,
            rng,
        }
    }

    /// Wait out the start delay, then type `text`.
    pub fn run<I>(
        &mut self,
        text: &str,
        injector: &mut I,
        cancel: &AtomicBool,
    ) -> Result<TypingOutcome>
    where
        I: KeyInjector + ?Sized,
    {
        if !injector.wait(self.start_delay, cancel) {
            warn!("interrupted during start delay");
            return Ok(TypingOutcome::Interrupted);
        }
        self.type_text(text, injector, cancel)
    }

    /// Type every paragraph of `text`, each followed by an enter press.
    ///
    /// The cancel flag is checked before each word and before each
    /// paragraph's closing enter.
    pub fn type_text<I>(
        &mut self,
        text: &str,
        injector: &mut I,
        cancel: &AtomicBool,
    ) -> Result<TypingOutcome>
    where
        I: KeyInjector + ?Sized,
    {
        info!(
            chars = text.chars().count(),
            interval_ms = self.interval.as_millis() as u64,
            "typing started"
        );

        for (index, paragraph) in text.split('\n').enumerate() {
            let words: Vec<&str> = paragraph.split_whitespace().collect();
            debug!(paragraph = index, words = words.len(), "typing paragraph");

            for word in &words {
                if is_cancelled(cancel) {
                    warn!(paragraph = index, "interrupted");
                    return Ok(TypingOutcome::Interrupted);
                }
                self.maybe_type_noise(&words, injector)?;
                self.type_word(word, injector)?;
            }

            if is_cancelled(cancel) {
                warn!(paragraph = index, "interrupted");
                return Ok(TypingOutcome::Interrupted);
            }
            injector.press_key(Key::Enter)?;
        }

        info!("typing finished");
        Ok(TypingOutcome::Completed)
    }

    /// Roll for noise; on a hit, type a prefix of a random word from the
    /// same paragraph and backspace over it.
    fn maybe_type_noise<I>(&mut self, words: &[&str], injector: &mut I) -> Result<()>
    where
        I: KeyInjector + ?Sized,
    {
        let roll: f64 = self.rng.gen();
        if roll >= self.noise_probability || words.is_empty() {
            return Ok(());
        }
        let Some(filler) = words.choose(&mut self.rng) else {
            return Ok(());
        };

        let fraction: f64 = self.rng.gen();
        let filler_len = filler.chars().count();
        let glitch_len = ((filler_len as f64 * fraction) as usize).max(1);
        let glitch: String = filler.chars().take(glitch_len).collect();
        debug!(filler, glitch = glitch.as_str(), "noise");

        injector.inject_text(&glitch, self.interval)?;
        injector.pause(self.interval);
        for _ in 0..glitch_len {
            injector.press_key(Key::Backspace)?;
            injector.pause(ERASE_PAUSE);
        }
        Ok(())
    }

    fn type_word<I>(&mut self, word: &str, injector: &mut I) -> Result<()>
    where
        I: KeyInjector + ?Sized,
    {
        injector.inject_text(word, self.interval)?;
        injector.pause(self.interval);
        injector.press_key(Key::Space)?;
        injector.pause(self.interval);
        Ok(())
    }
}

fn is_cancelled(cancel: &AtomicBool) -> bool {
    cancel.load(Ordering::SeqCst)
}
