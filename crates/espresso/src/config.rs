//! Window configuration, loaded from JSON.
//!
//! Every field is optional in the file; missing fields take the defaults
//! below.
//!
//! ```json
//! {
//!   "title": "Drawing",
//!   "size": { "x": 800, "y": 800 },
//!   "fill": "black",
//!   "close_operation": "Close",
//!   "log_level": "debug"
//! }
//! ```

use anyhow::{Context, Result};
use espresso_core::{Color, Vector2};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strum_macros::Display;

/// What a window does when the backend asks it to close.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum CloseOperation {
    /// Ignore close requests.
    None,
    /// Stop the render loop.
    #[default]
    Close,
    /// Reserved for a confirmation prompt; currently stops like `Close`.
    Confirm,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub size: Vector2<i32>,
    pub position: Vector2<i32>,
    pub fill: Color,
    /// Upper bound on how long the loop waits for an event between frames.
    pub frame_interval_ms: u64,
    pub close_operation: CloseOperation,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Espresso v1.0.0".to_string(),
            size: Vector2::new(800, 600),
            position: Vector2::zero(),
            fill: Color::white(),
            frame_interval_ms: 16,
            close_operation: CloseOperation::default(),
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid window configuration")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}
