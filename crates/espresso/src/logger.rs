//! File logger for Espresso runs.
//!
//! Each run writes to `~/.espresso/logs/{timestamp}_{uuid}/log` and echoes
//! every record to stderr.

use anyhow::{Context, Result};
use chrono::Local;
use dirs::home_dir;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use uuid::Uuid;

static CURRENT_RUN: OnceLock<(String, PathBuf)> = OnceLock::new();

pub struct EspressoLogger {
    level: LevelFilter,
    file: Mutex<File>,
    run_id: String,
    log_path: PathBuf,
    echo: bool,
}

impl EspressoLogger {
    /// Creates a logger writing under `~/.espresso/logs`.
    pub fn new(level: LevelFilter) -> Result<Self> {
        Self::in_directory(level, Self::logs_root()?)
    }

    /// Creates a logger writing to `{root}/{timestamp}_{uuid}/log`.
    pub fn in_directory(level: LevelFilter, root: impl AsRef<Path>) -> Result<Self> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let uuid = Uuid::new_v4().simple().to_string();
        let run_id = format!("{timestamp}_{}", &uuid[..8]);

        let log_dir = root.as_ref().join(&run_id);
        create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        let log_path = log_dir.join("log");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

        Ok(Self {
            level,
            file: Mutex::new(file),
            run_id,
            log_path,
            echo: true,
        })
    }

    /// Disables the stderr echo.
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    pub fn logs_root() -> Result<PathBuf> {
        let home = home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".espresso").join("logs"))
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Installs a new logger as the global `log` backend and returns its file.
    pub fn init(level: LevelFilter) -> Result<PathBuf> {
        Self::new(level)?.install()
    }

    /// Installs this logger as the global `log` backend. Fails if a global
    /// logger is already set.
    pub fn install(self) -> Result<PathBuf> {
        let level = self.level;
        let run_id = self.run_id.clone();
        let log_path = self.log_path.clone();

        log::set_boxed_logger(Box::new(self))
            .map(|()| log::set_max_level(level))
            .map_err(|e| anyhow::anyhow!("Failed to set logger: {}", e))?;
        let _ = CURRENT_RUN.set((run_id.clone(), log_path.clone()));

        log::info!("Espresso logger initialized. Run ID: {}", run_id);
        log::info!("Log file: {}", log_path.display());
        Ok(log_path)
    }

    /// The run ID of the installed logger, if [`EspressoLogger::init`] succeeded.
    pub fn current_run_id() -> Option<&'static str> {
        CURRENT_RUN.get().map(|(run_id, _)| run_id.as_str())
    }

    pub fn current_log_path() -> Option<&'static Path> {
        CURRENT_RUN.get().map(|(_, path)| path.as_path())
    }
}

impl Log for EspressoLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let message = format!(
            "{} {} [{}] {}",
            timestamp,
            record.level(),
            record.target(),
            record.args()
        );

        if let Ok(mut file) = self.file.lock() {
            // A failed write must not take the render loop down with it.
            let _ = writeln!(file, "{}", message);
            let _ = file.flush();
        }

        if self.echo {
            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Writes a banner line marking the start of a named phase.
pub fn log_section(name: &str) {
    let separator = "=".repeat(50);
    log::info!("{}", separator);
    log::info!("SECTION: {}", name);
    log::info!("{}", separator);
}
