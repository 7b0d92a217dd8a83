//! Prompt history.
//!
//! Keeps the most recent submitted prompts and persists them to
//! `~/.groundline_history` between runs.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// The default history file name, relative to the home directory.
const HISTORY_FILE: &str = ".groundline_history";

/// Maximum number of history entries to keep.
pub const MAX_HISTORY_SIZE: usize = 10;

/// Submitted prompts, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputHistory {
    entries: Vec<String>,
}

impl InputHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the path to the history file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(HISTORY_FILE))
    }

    /// Load history from the default location.
    ///
    /// A missing home directory or unreadable file yields an empty history.
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Self::new(),
        }
    }

    /// Load history from `path`.
    pub fn load_from(path: &Path) -> Self {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(_) => return Self::new(),
        };

        let mut history = Self::new();
        BufReader::new(file)
            .lines()
            .map_while(Result::ok)
            .for_each(|line| history.add(line.replace("\\n", "\n")));
        history
    }

    /// Persist history to the default location. Failures are logged and
    /// otherwise ignored.
    pub fn save(&self) {
        if let Some(path) = Self::default_path() {
            if let Err(e) = self.save_to(&path) {
                tracing::debug!("Could not save history to {}: {}", path.display(), e);
            }
        }
    }

    /// Persist history to `path`, one entry per line.
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;

        let mut writer = std::io::BufWriter::new(file);
        for entry in &self.entries {
            // Multi-line entries are stored escaped
            writeln!(writer, "{}", entry.replace('\n', "\\n"))?;
        }
        writer.flush()
    }

    /// Add a new entry to history (at the end).
    ///
    /// Skips empty entries and duplicates of the last entry.
    /// Trims to MAX_HISTORY_SIZE if necessary.
    pub fn add(&mut self, entry: String) {
        if entry.trim().is_empty() {
            return;
        }
        if self.entries.last() == Some(&entry) {
            return;
        }

        self.entries.push(entry);
        if self.entries.len() > MAX_HISTORY_SIZE {
            let excess = self.entries.len() - MAX_HISTORY_SIZE;
            self.entries.drain(..excess);
        }
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
