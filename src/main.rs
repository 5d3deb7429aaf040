use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use noisy_typer::{
    resolve_text, Cli, Config, EnigoInjector, RecordingInjector, SystemClipboard, TyperError,
    TypingEngine, TypingOutcome,
};
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(TyperError::ConfigValidation(message)) => Cli::usage_error(message).exit(),
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(config.verbose);

    match run(&cli, &config) {
        Ok(outcome) => {
            if let Some(message) = outcome.message() {
                eprintln!("{message}");
            }
            ExitCode::from(outcome.exit_status())
        }
        Err(e) => {
            if let Some(TyperError::NoText) = e.downcast_ref::<TyperError>() {
                eprintln!("{e}");
            } else {
                eprintln!("{} {:#}", "error:".red().bold(), e);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "noisy_typer=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli, config: &Config) -> Result<TypingOutcome> {
    if let Some(path) = &cli.save_config {
        config.save_to_file(path)?;
        println!("{} Configuration saved to {}", "✔".green(), path);
        return Ok(TypingOutcome::Completed);
    }

    let cancel = Arc::new(AtomicBool::new(false));
    let flag = cancel.clone();
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
        .context("failed to install Ctrl-C handler")?;

    let text = resolve_text(config.literal_text.as_deref(), &mut SystemClipboard)?;

    println!("{}", config.summary_line(text.chars().count()).bold());

    let mut engine = TypingEngine::new(config);

    if cli.dry_run {
        let mut injector = RecordingInjector::new();
        let outcome = engine.run(&text, &mut injector, &cancel)?;
        for action in injector.actions() {
            println!("{action}");
        }
        return Ok(outcome);
    }

    let mut injector = EnigoInjector::new().context("keyboard injection is unavailable")?;
    Ok(engine.run(&text, &mut injector, &cancel)?)
}
