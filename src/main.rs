//! shard-input - keycode and cursor diagnostics
//!
//! Entry point for the diagnostic binary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

use shard_input::bridge::GameLog;
use shard_input::config::{Config, LoggingConfig};
use shard_input::cursor::{self, CursorRegistry};
use shard_input::input::{
    classify_error, sender_for, ChannelSink, ErrorType, InputEvent, InputSink, KeyDispatcher,
    KeycodeTable, LoggingSink, SourceKeyEvent,
};

/// Command-line arguments for shard-input
#[derive(Parser, Debug)]
#[command(name = "shard-input")]
#[command(version, about = "Shard launcher input and cursor diagnostics", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, env = "SHARD_INPUT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbose logging (can be specified multiple times)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log format (json|pretty|compact)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Write daily-rotated logs to this directory (in addition to stdout)
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Game log file written by `replay`
    #[arg(long, env = "SHARD_INPUT_GAME_LOG")]
    pub game_log: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Diagnostic commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dump the keycode table as JSON
    Table,

    /// Translate an Android keycode
    Lookup {
        /// Android keycode
        #[arg(allow_negative_numbers = true)]
        source: i32,
    },

    /// Find the Android keycode for a GLFW key
    Reverse {
        /// GLFW key code
        #[arg(allow_negative_numbers = true)]
        target: i16,
    },

    /// Register cursor shapes and print their handles
    Cursor {
        /// Shape names (arrow, hand, crosshair, ...) or raw values
        shapes: Vec<String>,
    },

    /// Press and release Android keys through the dispatcher
    Replay {
        /// Android keycodes
        #[arg(allow_negative_numbers = true)]
        sources: Vec<i32>,

        /// Also type this text through the configured character sender
        #[arg(long)]
        text: Option<String>,

        /// Meta state applied to every key (Android META_* bits)
        #[arg(long, default_value_t = 0)]
        meta_state: u32,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (config, load_error) = match &args.config {
        Some(path) => match Config::load(path) {
            Ok(config) => (config, None),
            Err(e) => (Config::default_config()?, Some(e)),
        },
        None => (Config::default_config()?, None),
    };

    let mut config =
        config.with_overrides(args.verbose, args.log_format.clone(), args.game_log.clone());
    if let Some(dir) = &args.log_dir {
        config.logging.log_dir = Some(dir.clone());
    }
    config.validate().context("Invalid configuration after CLI overrides")?;

    // Flushes the file appender on drop
    let _guard = init_logging(&config.logging)?;

    if let Some(e) = load_error {
        warn!("Failed to load config: {:#}, using defaults", e);
    }

    info!("════════════════════════════════════════════════════════");
    info!("  shard-input v{}", env!("CARGO_PKG_VERSION"));
    info!("  Built: {}", env!("BUILD_DATE"));
    info!("  Commit: {}", env!("GIT_HASH"));
    info!("  Profile: {}", if cfg!(debug_assertions) { "debug" } else { "release" });
    info!("════════════════════════════════════════════════════════");
    tracing::debug!("Config: {:?}", config);

    match args.command {
        Command::Table => print_table(),
        Command::Lookup { source } => lookup(source),
        Command::Reverse { target } => reverse(target),
        Command::Cursor { shapes } => register_cursors(&shapes),
        Command::Replay {
            sources,
            text,
            meta_state,
        } => replay(&config, &sources, text.as_deref(), meta_state),
    }
}

fn print_table() -> Result<()> {
    let entries: Vec<_> = KeycodeTable::global().iter().collect();
    let json = serde_json::to_string_pretty(&entries).context("Failed to serialize keycode table")?;
    println!("{json}");
    Ok(())
}

fn lookup(source: i32) -> Result<()> {
    let table = KeycodeTable::global();
    let index = table
        .index_of(source)
        .with_context(|| format!("Android keycode {source} has no GLFW mapping"))?;
    println!(
        "android {} -> glfw {} (index {})",
        source,
        table.target_code_at(index),
        index
    );
    Ok(())
}

fn reverse(target: i16) -> Result<()> {
    let table = KeycodeTable::global();
    let source = table.try_reverse_translate(target)?;
    let index = table
        .index_of_target_code(target)
        .with_context(|| format!("GLFW key {target} is not in the table"))?;
    println!("glfw {} -> android {} (index {})", target, source, index);
    Ok(())
}

fn register_cursors(names: &[String]) -> Result<()> {
    let registry = CursorRegistry::global();
    println!("default -> {}", registry.get_default_cursor());

    for name in names {
        let shape = cursor::shape_from_name(name)
            .with_context(|| format!("Unknown cursor shape: {name}"))?;
        let handle = registry.register_cursor(shape);
        println!(
            "{} (0x{:X}) -> {}",
            cursor::shape_name(shape).unwrap_or(name.as_str()),
            shape,
            handle
        );
    }

    info!("{} cursor shapes registered", registry.len());
    Ok(())
}

fn replay(config: &Config, sources: &[i32], text: Option<&str>, meta_state: u32) -> Result<()> {
    let game_log = GameLog::global();
    game_log.configure(&config.game_log)?;

    let (sink, rx) = if config.input.queue_capacity == 0 {
        ChannelSink::new()
    } else {
        ChannelSink::bounded(config.input.queue_capacity)
    };

    let table = KeycodeTable::global();
    let mut dispatcher = KeyDispatcher::new(sink.clone());

    game_log.append_title("Replay");
    for &source in sources {
        let down = SourceKeyEvent::down(source, 0).with_meta_state(meta_state);
        let up = SourceKeyEvent::up(source, 0).with_meta_state(meta_state);

        let handled = match dispatcher.handle_source_event(&down) {
            Ok(handled) => handled,
            Err(e) if classify_error(&e) == ErrorType::Translation => {
                warn!("Skipping key {}: {}", source, e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if handled.is_none() {
            if config.input.log_unmapped_keys {
                warn!("Android keycode {} has no GLFW mapping", source);
            }
            continue;
        }
        dispatcher.handle_source_event(&up)?;
    }

    if let Some(text) = text {
        let sender = sender_for(config.input.sender, sink.clone(), table);
        for ch in text.chars() {
            match ch {
                '\n' => sender.send_enter(),
                '\t' => sender.send_tab(),
                '\u{8}' => sender.send_backspace(),
                _ => sender.send_char(ch),
            }
        }
    }

    let logging_sink = LoggingSink;
    let mut delivered = 0usize;
    for event in rx.try_iter() {
        let raw = event.to_raw();
        game_log.append(&raw.to_string());
        if let InputEvent::Key { .. } = event {
            println!("{raw}");
        }
        logging_sink.deliver(event);
        delivered += 1;
    }

    info!("Replayed {} records", delivered);
    Ok(())
}

fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "shard_input={level},game={level},warn",
            level = config.level
        ))
    });

    let stdout_layer = match config.format.as_str() {
        "json" => tracing_subscriber::fmt::layer().json().boxed(),
        "compact" => tracing_subscriber::fmt::layer().compact().boxed(),
        _ => tracing_subscriber::fmt::layer().pretty().boxed(),
    };
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = vec![stdout_layer];

    let mut guard = None;
    if let Some(dir) = &config.log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
        let appender = tracing_appender::rolling::daily(dir, "shard-input.log");
        let (writer, worker_guard) = tracing_appender::non_blocking(appender);
        guard = Some(worker_guard);

        let file_layer = match config.format.as_str() {
            "json" => tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .boxed(),
            _ => tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .boxed(),
        };
        layers.push(file_layer);
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()
        .context("Failed to initialize logging")?;

    if let Some(dir) = &config.log_dir {
        info!("Logging to directory: {}", dir.display());
    }

    Ok(guard)
}
