//! Category rules used by the presenter.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SessionGenError};

/// Categories that are schedule filler rather than talks.
pub const DEFAULT_EXCLUDED_CATEGORIES: [&str; 4] = ["break", "products", "exhibit hall", "bohconf"];

/// Category marking a featured talk.
pub const DEFAULT_KEYNOTE_CATEGORY: &str = "keynote";

/// Appended to the title of keynote sessions.
pub const DEFAULT_KEYNOTE_SUFFIX: &str = " Keynote";

/// Presenter configuration.
///
/// The defaults reproduce the built-in rules; a config file only needs to
/// list the keys it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenterConfig {
    /// Category value (case-insensitive) that marks a keynote
    pub keynote_category: String,
    /// Literal suffix appended to keynote titles
    pub keynote_suffix: String,
    /// Categories (case-insensitive) that never produce a document
    pub excluded_categories: Vec<String>,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            keynote_category: DEFAULT_KEYNOTE_CATEGORY.to_string(),
            keynote_suffix: DEFAULT_KEYNOTE_SUFFIX.to_string(),
            excluded_categories: DEFAULT_EXCLUDED_CATEGORIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl PresenterConfig {
    /// Validate the config and return an error if it cannot be used.
    pub fn validate(&self) -> Result<()> {
        if self.keynote_category.trim().is_empty() {
            return Err(SessionGenError::config(
                "keynote_category is required and cannot be empty",
            ));
        }
        Ok(())
    }
}
