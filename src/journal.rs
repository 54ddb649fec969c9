//! Journal persistence: one file per calendar day.
//!
//! Each day's review lands in the journal root, named by the local date:
//!
//! ```text
//! <root>/
//!   2026-10-14.md     # Markdown log: every review of the day, oldest first
//!   2026-10-14.json   # Structured snapshot: the latest review of the day only
//! ```
//!
//! The two formats merge differently on purpose. Markdown appends, so the
//! file is a running history of the day. Structured replaces, so readers
//! always see exactly one entry: the most recent one.

pub mod markdown;
pub mod structured;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use jiff::Zoned;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::model::{AnswerRecord, JournalEntry};

/// Errors that can occur while writing the journal.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// On-disk representation of a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Human-readable block, appended.
    #[default]
    #[serde(alias = "md")]
    Markdown,

    /// Indented JSON object, replaced.
    #[serde(alias = "json")]
    Structured,
}

impl Format {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Structured => "json",
        }
    }

    /// How a new entry combines with an existing file for the same day.
    pub fn merge_policy(self) -> MergePolicy {
        match self {
            Self::Markdown => MergePolicy::Append,
            Self::Structured => MergePolicy::Replace,
        }
    }

    fn render(self, entry: &JournalEntry) -> Result<String> {
        match self {
            Self::Markdown => Ok(markdown::format(entry)),
            Self::Structured => Ok(structured::format(entry)?),
        }
    }
}

/// Error returned when a format name is not recognized.
#[derive(Debug, thiserror::Error)]
#[error("unknown format '{0}' (expected md or json)")]
pub struct UnknownFormat(String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md" | "markdown" => Ok(Self::Markdown),
            "json" | "structured" => Ok(Self::Structured),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// How a write treats a file that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Keep existing content byte-for-byte; add the new block after a blank line.
    Append,

    /// Discard existing content; the file holds only the new entry.
    Replace,
}

impl MergePolicy {
    /// Commits `contents` to `path` under this policy and syncs it to disk.
    pub fn commit(self, path: &Path, contents: &str) -> Result<()> {
        match self {
            Self::Append => append(path, contents),
            Self::Replace => replace(path, contents),
        }
    }
}

fn append(path: &Path, block: &str) -> Result<()> {
    let existing = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
        Err(source) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    let separator = markdown::separator(&existing);
    debug!(path = %path.display(), existing_bytes = existing.len(), "appending entry");

    let write = || -> io::Result<()> {
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        file.write_all(format!("{separator}{block}").as_bytes())?;
        file.sync_all()
    };
    write().map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn replace(path: &Path, contents: &str) -> Result<()> {
    debug!(path = %path.display(), "replacing entry");

    let write = || -> io::Result<()> {
        let mut file = fs::File::create(path)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()
    };
    write().map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Date-keyed journal files under a root directory.
///
/// Holds no state between writes; every write re-reads what it needs.
pub struct Journal {
    root: PathBuf,
}

impl Journal {
    /// Creates a journal rooted at the given directory.
    ///
    /// The directory is created on first write, not here.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The file holding entries of `format` for `date`.
    pub fn path_for(&self, format: Format, date: Date) -> PathBuf {
        self.root.join(format!("{date}.{}", format.extension()))
    }

    /// Writes a record under today's date on the local clock.
    ///
    /// The date is read now, at write time, so a session that started before
    /// midnight lands in the file for the day it finished.
    pub fn write(&self, record: AnswerRecord, format: Format) -> Result<PathBuf> {
        self.write_at(record, format, &Zoned::now())
    }

    /// Writes a record as if the clock read `now`. Returns the file written.
    pub fn write_at(&self, record: AnswerRecord, format: Format, now: &Zoned) -> Result<PathBuf> {
        let entry = JournalEntry::capture(record, now);
        let contents = format.render(&entry)?;

        fs::create_dir_all(&self.root).map_err(|source| StorageError::CreateDir {
            path: self.root.clone(),
            source,
        })?;

        let path = self.path_for(format, entry.date);
        format.merge_policy().commit(&path, &contents)?;
        info!(path = %path.display(), ?format, "review saved");
        Ok(path)
    }
}
