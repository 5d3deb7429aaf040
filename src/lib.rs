//! # Noisy Typer
//!
//! Types a block of text into whatever window has focus, at a steady pace,
//! occasionally typing and erasing a short filler snippet before a word so
//! the input looks less mechanical.
//!
//! ## Features
//!
//! - Text from `--text` or, failing that, the clipboard
//! - Configurable start delay, speed and noise probability
//! - Reproducible runs with `--seed`
//! - JSON configuration file support
//! - `--dry-run` to print the keystrokes instead of sending them
//! - Clean abort on Ctrl-C
//!
//! ## Example
//!
//! ```
//! use noisy_typer::{Config, RecordingInjector, TypingEngine, TypingOutcome};
//! use std::sync::atomic::AtomicBool;
//!
//! let config = Config {
//!     start_delay: 0.0,
//!     noise_probability: 0.0,
//!     random_seed: Some(42),
//!     ..Config::default()
//! };
//! let mut injector = RecordingInjector::new();
//! let outcome = TypingEngine::new(&config)
//!     .run("hi there", &mut injector, &AtomicBool::new(false))
//!     .unwrap();
//!
//! assert_eq!(outcome, TypingOutcome::Completed);
//! assert_eq!(injector.typed(), vec!["hi", "there"]);
//! ```
//!
//! ## Configuration
//!
//! ```json
//! {
//!   "start_delay": "1500ms",
//!   "chars_per_second": 12.5,
//!   "noise_probability": 0.1,
//!   "random_seed": 7
//! }
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod injector;
pub mod text_source;

pub use cli::Cli;
pub use config::Config;
pub use engine::{TypingEngine, TypingOutcome};
pub use error::{Result, TyperError};
pub use injector::{Action, EnigoInjector, Key, KeyInjector, RecordingInjector};
pub use text_source::{resolve_text, ClipboardSource, SystemClipboard};
