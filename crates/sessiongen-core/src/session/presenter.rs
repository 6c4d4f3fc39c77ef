//! Display-ready view over a single session record.

use serde::Serialize;

use super::category::{is_excluded, is_keynote};
use super::filename::sanitize_filename;
use super::record::SessionRecord;
use super::schedule::{format_date, format_time, parse_timestamp};
use super::text::{clean_text, is_present, quote_paragraphs};
use crate::config::PresenterConfig;
use crate::error::Result;

/// Derived, read-only presentation of a [`SessionRecord`].
///
/// Every value is computed once at construction. Serializes with camelCase
/// keys (`startTime`, `hasAbstract`, ...) for use as a template context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPresenter {
    name: String,
    room: String,
    start_time: String,
    start_date: String,
    end_time: String,
    #[serde(rename = "abstract")]
    abstract_text: String,
    has_abstract: bool,
    bio: String,
    has_bio: bool,
    title: String,
    filename: String,
    is_keynote: bool,
    exclude: bool,
}

impl SessionPresenter {
    /// Presents a record using the built-in category rules.
    pub fn new(record: &SessionRecord) -> Result<Self> {
        Self::with_config(record, &PresenterConfig::default())
    }

    /// Presents a record using the given category rules.
    ///
    /// Fails if the config does not validate or either timestamp cannot be
    /// parsed.
    pub fn with_config(record: &SessionRecord, config: &PresenterConfig) -> Result<Self> {
        config.validate()?;
        let starts_at = parse_timestamp("starts_at", &record.starts_at)?;
        let ends_at = parse_timestamp("ends_at", &record.ends_at)?;

        let cleaned_abstract = clean_text(&record.abstract_text);
        let has_abstract = is_present(&cleaned_abstract);
        let abstract_text = if has_abstract {
            quote_paragraphs(&cleaned_abstract)
        } else {
            cleaned_abstract.clone()
        };

        let bio = clean_text(&record.bio);
        // A bio repeating the abstract adds nothing to the page.
        let has_bio = is_present(&bio) && bio != cleaned_abstract;

        let keynote = is_keynote(&record.category, config);
        let title = derive_title(record, keynote, config);
        let filename = sanitize_filename(&title);
        let exclude = is_excluded(&record.category, config);

        tracing::debug!(
            filename = %filename,
            is_keynote = keynote,
            exclude,
            "Presented session"
        );

        Ok(Self {
            name: record.name.clone(),
            room: record.room.clone(),
            start_time: format_time(&starts_at),
            start_date: format_date(&starts_at),
            end_time: format_time(&ends_at),
            abstract_text,
            has_abstract,
            bio,
            has_bio,
            title,
            filename,
            is_keynote: keynote,
            exclude,
        })
    }

    /// Speaker name, verbatim.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    /// Start time such as `5:30 pm`.
    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    /// Start date such as `Monday 2012-04-23`.
    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    /// End time, same format as [`start_time`](Self::start_time).
    pub fn end_time(&self) -> &str {
        &self.end_time
    }

    /// Cleaned abstract; paragraphs after the first are block-quoted.
    pub fn abstract_text(&self) -> &str {
        &self.abstract_text
    }

    pub fn has_abstract(&self) -> bool {
        self.has_abstract
    }

    /// Cleaned bio. Returned even when [`has_bio`](Self::has_bio) is false.
    pub fn bio(&self) -> &str {
        &self.bio
    }

    pub fn has_bio(&self) -> bool {
        self.has_bio
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Document filename ending in `.md`.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn is_keynote(&self) -> bool {
        self.is_keynote
    }

    /// Whether the session should not produce a document.
    pub fn exclude(&self) -> bool {
        self.exclude
    }
}

/// Title, or the speaker name when the title is blank, plus the keynote suffix.
fn derive_title(record: &SessionRecord, is_keynote: bool, config: &PresenterConfig) -> String {
    let base = if record.title.trim().is_empty() {
        record.name.as_str()
    } else {
        record.title.as_str()
    };

    if is_keynote {
        format!("{}{}", base, config.keynote_suffix)
    } else {
        base.to_string()
    }
}
