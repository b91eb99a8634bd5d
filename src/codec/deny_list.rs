//! Action ids forced unavailable regardless of enumeration.
//!
//! The list is plain text, one non-negative integer per line. It is loaded
//! once when a game is configured and shared read-only between copies of
//! that game.

use rustc_hash::FxHashSet;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::{ActionId, ACTION_SPACE};

/// Deny-list loading errors.
#[derive(Error, Debug)]
pub enum DenyListError {
    #[error("failed to read deny-list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read deny-list: {0}")]
    Read(#[from] std::io::Error),
    #[error("line {line}: {text:?} is not a non-negative integer")]
    Parse { line: usize, text: String },
    #[error("line {line}: action id {id} is outside the action space (0..{})", ACTION_SPACE)]
    OutOfRange { line: usize, id: usize },
}

/// Set of denied action ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DenyList {
    ids: FxHashSet<ActionId>,
}

impl DenyList {
    /// An empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the plain-text format. Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, DenyListError> {
        Self::from_lines(text.lines().map(|l| Ok(l.to_string())))
    }

    /// Read the plain-text format from any buffered reader.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, DenyListError> {
        Self::from_lines(reader.lines())
    }

    /// Load from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DenyListError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| DenyListError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    fn from_lines(
        lines: impl Iterator<Item = std::io::Result<String>>,
    ) -> Result<Self, DenyListError> {
        let mut ids = FxHashSet::default();
        for (index, line) in lines.enumerate() {
            let line = line?;
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            let raw: usize = text.parse().map_err(|_| DenyListError::Parse {
                line: index + 1,
                text: text.to_string(),
            })?;
            let id = ActionId::new(raw).ok_or(DenyListError::OutOfRange {
                line: index + 1,
                id: raw,
            })?;
            ids.insert(id);
        }
        Ok(Self { ids })
    }

    #[must_use]
    pub fn contains(&self, action: ActionId) -> bool {
        self.ids.contains(&action)
    }

    pub fn insert(&mut self, action: ActionId) -> bool {
        self.ids.insert(action)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Denied ids in ascending order.
    #[must_use]
    pub fn sorted(&self) -> Vec<ActionId> {
        let mut ids: Vec<_> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl FromIterator<ActionId> for DenyList {
    fn from_iter<I: IntoIterator<Item = ActionId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
