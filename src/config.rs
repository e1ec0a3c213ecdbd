//! Loadable settings for fold-aware columns.
//!
//! Settings are read from JSON. Every field is optional:
//!
//! ```json
//! {
//!   "fold_padding": { "top": 8.0, "bottom": 8.0 },
//!   "missing_position": "assume_origin",
//!   "log_filter": "foldkit=debug"
//! }
//! ```

use std::{fs::File, io::Read, path::Path};

use foldkit_layout::{FoldPadding, MissingPosition};
use serde::{Deserialize, Serialize};

use crate::{FoldAwareColumn, Result};

/// Default `tracing` filter when neither the config nor `RUST_LOG` sets one.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Settings shared by every fold-aware column in an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoldConfig {
    /// Padding added around the fold, in dp.
    pub fold_padding: FoldPadding,
    /// What to do when the window position is missing at placement time.
    pub missing_position: MissingPosition,
    /// Filter directive passed to [`crate::logging::install_tracing`].
    pub log_filter: String,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self {
            fold_padding: FoldPadding::default(),
            missing_position: MissingPosition::default(),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl FoldConfig {
    /// Parses settings from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] if the document is not valid JSON or
    /// has fields of the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses settings from a reader.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] on malformed JSON.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be opened and
    /// [`crate::Error::Config`] if it cannot be parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let config = Self::from_reader(std::io::BufReader::new(file))?;
        tracing::debug!(path = %path.display(), "loaded fold configuration");
        Ok(config)
    }

    /// Applies these settings to a column.
    #[must_use]
    pub fn apply<'a, M>(&self, column: FoldAwareColumn<'a, M>) -> FoldAwareColumn<'a, M> {
        column
            .fold_padding(self.fold_padding)
            .missing_position(self.missing_position)
    }
}
