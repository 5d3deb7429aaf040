//! Run configuration: defaults, validation and JSON config files.
//!
//! A [`Config`] is built from defaults, optionally overlaid with a JSON
//! file, then overlaid with command-line flags (see [`crate::cli`]). It must
//! pass [`Config::validate`] before anything is typed.

use crate::error::{Result, TyperError};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::time::Duration;

pub const DEFAULT_START_DELAY: f64 = 5.0;
pub const DEFAULT_CHARS_PER_SECOND: f64 = 10.0;
pub const DEFAULT_NOISE_PROBABILITY: f64 = 0.2;

/// Everything a single typing run needs to know.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Text to type; the clipboard is used when this is absent or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal_text: Option<String>,

    /// Seconds to wait before the first keystroke.
    #[serde(default = "default_start_delay", deserialize_with = "deserialize_delay")]
    pub start_delay: f64,

    #[serde(default = "default_chars_per_second")]
    pub chars_per_second: f64,

    /// Chance, per word, of typing and erasing a filler snippet first.
    #[serde(default = "default_noise_probability")]
    pub noise_probability: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u64>,

    #[serde(default)]
    pub verbose: bool,
}

fn default_start_delay() -> f64 {
    DEFAULT_START_DELAY
}

fn default_chars_per_second() -> f64 {
    DEFAULT_CHARS_PER_SECOND
}

fn default_noise_probability() -> f64 {
    DEFAULT_NOISE_PROBABILITY
}

impl Default for Config {
    fn default() -> Self {
        Self {
            literal_text: None,
            start_delay: DEFAULT_START_DELAY,
            chars_per_second: DEFAULT_CHARS_PER_SECOND,
            noise_probability: DEFAULT_NOISE_PROBABILITY,
            random_seed: None,
            verbose: false,
        }
    }
}

impl Config {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_file(path: &str) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| TyperError::config_load(path, e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| TyperError::config_load(path, e.to_string()))
    }

    /// Write this configuration to `path` as pretty-printed JSON.
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| TyperError::config_save(path, e.to_string()))
    }

    /// Check the numeric ranges. The first violated rule is reported.
    pub fn validate(&self) -> Result<()> {
        if self.chars_per_second.is_nan() || self.chars_per_second <= 0.0 {
            return Err(TyperError::config_validation(
                "--cps must be greater than zero.",
            ));
        }

        if !self.start_delay.is_finite() || self.start_delay < 0.0 {
            return Err(TyperError::config_validation(
                "--delay must be zero or positive.",
            ));
        }

        if !(0.0..=1.0).contains(&self.noise_probability) {
            return Err(TyperError::config_validation(
                "--noise-prob must be between 0 and 1.",
            ));
        }

        Ok(())
    }

    /// Per-character pacing, `1 / chars_per_second`.
    pub fn interval(&self) -> Duration {
        Duration::try_from_secs_f64(1.0 / self.chars_per_second).unwrap_or(Duration::MAX)
    }

    pub fn start_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.start_delay).unwrap_or(Duration::MAX)
    }

    /// The one-line announcement printed before typing starts.
    pub fn summary_line(&self, char_count: usize) -> String {
        format!(
            "Typing {} characters at ~{:.1} chars/sec after {:.1}s delay. Noise prob: {:.2}.",
            char_count, self.chars_per_second, self.start_delay, self.noise_probability
        )
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DelayValue {
    Seconds(f64),
    Text(String),
}

fn deserialize_delay<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match DelayValue::deserialize(deserializer)? {
        DelayValue::Seconds(secs) => Ok(secs),
        DelayValue::Text(text) => parse_duration(&text)
            .map(|d| d.as_secs_f64())
            .map_err(serde::de::Error::custom),
    }
}

/// Parse a human duration such as `500ms`, `1.5s` or `2m`.
///
/// A bare number is read as milliseconds. Units are case-insensitive and
/// surrounding whitespace is ignored.
pub fn parse_duration(value: &str) -> Result<Duration> {
    let normalized = value.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(TyperError::invalid_duration(value, "empty duration"));
    }
    if normalized.starts_with('-') {
        return Err(TyperError::invalid_duration(
            value,
            "negative durations are not allowed",
        ));
    }

    let split = normalized
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(normalized.len());
    let (number, unit) = normalized.split_at(split);

    if number.is_empty() {
        return Err(TyperError::invalid_duration(value, "missing number"));
    }
    let amount: f64 = number
        .parse()
        .map_err(|_| TyperError::invalid_duration(value, "not a number"))?;

    let seconds = match unit.trim() {
        "" | "ms" => amount / 1000.0,
        "s" => amount,
        "m" => amount * 60.0,
        other => {
            return Err(TyperError::invalid_duration(
                value,
                format!("unknown unit '{other}' (use ms, s or m)"),
            ))
        }
    };

    Duration::try_from_secs_f64(seconds)
        .map_err(|e| TyperError::invalid_duration(value, e.to_string()))
}
