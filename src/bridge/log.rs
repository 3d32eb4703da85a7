//! Game Log Sink
//!
//! Receives the game's stdout/stderr lines from the native bridge, appends
//! them to a per-launch log file, mirrors them to tracing and hands each
//! line to an optional listener (the in-app log viewer).
//!
//! Appending never fails from the caller's point of view: write errors are
//! logged and the line is still forwarded to the listener.

use anyhow::{Context, Result};
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use tracing::{error, info, warn};

use crate::config::GameLogConfig;

/// Listener invoked with every appended line
pub type LogListener = Arc<dyn Fn(&str) + Send + Sync>;

const TITLE_RULE: &str = "====================";

/// Title line as written by [`GameLog::append_title`]
pub fn format_title(title: &str) -> String {
    format!("{TITLE_RULE} {title} {TITLE_RULE}")
}

#[derive(Default)]
struct LogState {
    path: Option<PathBuf>,
    file: Option<File>,
    listener: Option<LogListener>,
}

/// Game log file and listener fan-out
pub struct GameLog {
    state: Mutex<LogState>,
    mirror_to_tracing: AtomicBool,
}

impl GameLog {
    /// Log with no file and no listener
    pub fn new() -> Self {
        Self {
            state: Mutex::new(LogState::default()),
            mirror_to_tracing: AtomicBool::new(true),
        }
    }

    /// Whether appended lines are also emitted as tracing events
    pub fn with_mirror(self, mirror_to_tracing: bool) -> Self {
        self.set_mirror(mirror_to_tracing);
        self
    }

    /// Change tracing mirroring on a shared log
    pub fn set_mirror(&self, mirror_to_tracing: bool) {
        self.mirror_to_tracing.store(mirror_to_tracing, Ordering::Relaxed);
    }

    /// Whether appended lines are emitted as tracing events
    pub fn mirrors_to_tracing(&self) -> bool {
        self.mirror_to_tracing.load(Ordering::Relaxed)
    }

    /// Apply a `[game_log]` section
    ///
    /// Sets mirroring and, when a path is configured, starts a fresh file.
    pub fn configure(&self, config: &GameLogConfig) -> Result<()> {
        self.set_mirror(config.mirror_to_tracing);
        if let Some(path) = &config.path {
            self.start(path)?;
        }
        Ok(())
    }

    /// Process-wide log
    pub fn global() -> &'static GameLog {
        static GLOBAL: OnceLock<GameLog> = OnceLock::new();
        GLOBAL.get_or_init(GameLog::new)
    }

    /// Start a fresh log file at `path`
    ///
    /// Creates missing parent directories and erases any previous content.
    /// On failure the previous file, if any, stays closed.
    pub fn start(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut state = self.state.lock();
        state.file = None;
        state.path = None;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("Failed to create game log: {}", path.display()))?;

        state.file = Some(file);
        state.path = Some(path.to_path_buf());
        info!("Game log started: {}", path.display());
        Ok(())
    }

    /// Append one line
    pub fn append(&self, line: &str) {
        let listener = {
            let mut state = self.state.lock();
            if let Some(file) = state.file.as_mut() {
                if let Err(e) = writeln!(file, "{line}").and_then(|()| file.flush()) {
                    error!("Failed to append to game log: {}", e);
                }
            }
            state.listener.clone()
        };

        if self.mirrors_to_tracing() {
            info!(target: "game", "[Bridge] {}", line);
        }

        // Called outside the lock so listeners may append themselves
        if let Some(listener) = listener {
            listener(line);
        }
    }

    /// Append a `==== title ====` separator line
    pub fn append_title(&self, title: &str) {
        self.append(&format_title(title));
    }

    /// Replace the listener
    pub fn set_listener<F>(&self, listener: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let mut state = self.state.lock();
        if state.listener.is_some() {
            warn!("Replacing existing game log listener");
        }
        state.listener = Some(Arc::new(listener));
    }

    /// Remove the listener
    pub fn clear_listener(&self) {
        self.state.lock().listener = None;
    }

    /// Current log file path, if started
    pub fn path(&self) -> Option<PathBuf> {
        self.state.lock().path.clone()
    }
}

impl Default for GameLog {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("GameLog")
            .field("path", &state.path)
            .field("has_listener", &state.listener.is_some())
            .field("mirror_to_tracing", &self.mirrors_to_tracing())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    #[test]
    fn test_format_title() {
        assert_eq!(
            format_title("Launch"),
            "==================== Launch ===================="
        );
    }

    #[test]
    fn test_append_without_file_reaches_listener() {
        let log = GameLog::new().with_mirror(false);
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        log.set_listener(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        log.append("one");
        log.append("two");
        assert_eq!(count.load(Ordering::SeqCst), 2);

        log.clear_listener();
        log.append("three");
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_start_creates_dirs_and_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/logs/latest.log");

        let log = GameLog::new().with_mirror(false);
        log.start(&path).unwrap();
        log.append("old line");

        log.start(&path).unwrap();
        log.append("new line");

        assert_eq!(fs::read_to_string(&path).unwrap(), "new line\n");
        assert_eq!(log.path(), Some(path));
    }

    #[test]
    fn test_start_failure_closes_previous_file() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("game.log");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();

        let log = GameLog::new().with_mirror(false);
        log.start(&good).unwrap();
        assert!(log.start(blocker.join("game.log")).is_err());

        log.append("dropped");
        assert_eq!(fs::read_to_string(&good).unwrap(), "");
        assert_eq!(log.path(), None);
    }

    #[test]
    fn test_configure_applies_game_log_section() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs/latest.log");
        let toml = format!(
            "[game_log]\npath = {:?}\nmirror_to_tracing = false\n",
            path.to_string_lossy()
        );
        let config: crate::config::Config = toml::from_str(&toml).unwrap();

        let log = GameLog::new();
        assert!(log.mirrors_to_tracing());
        log.configure(&config.game_log).unwrap();

        assert!(!log.mirrors_to_tracing());
        assert_eq!(log.path(), Some(path.clone()));
        log.append("configured");
        assert_eq!(fs::read_to_string(&path).unwrap(), "configured\n");
    }

    #[test]
    fn test_set_mirror_on_shared_log() {
        let log = Arc::new(GameLog::new());
        log.set_mirror(false);
        assert!(!log.mirrors_to_tracing());

        log.configure(&GameLogConfig::default()).unwrap();
        assert!(log.mirrors_to_tracing());
        assert_eq!(log.path(), None);
    }

    #[test]
    fn test_listener_may_append() {
        let log = Arc::new(GameLog::new().with_mirror(false));
        let inner = Arc::clone(&log);
        let depth = Arc::new(AtomicUsize::new(0));
        let d = Arc::clone(&depth);
        log.set_listener(move |line| {
            if d.fetch_add(1, Ordering::SeqCst) == 0 {
                inner.append(&format!("echo: {line}"));
            }
        });

        log.append("ping");
        assert_eq!(depth.load(Ordering::SeqCst), 2);
        log.clear_listener();
    }
}
