//! Category rules: keynote detection and document exclusion.
//!
//! Both compare the literal category string ignoring ASCII case; no
//! trimming or partial matching is applied.

use crate::config::PresenterConfig;

/// Whether the category marks a keynote session.
pub fn is_keynote(category: &str, config: &PresenterConfig) -> bool {
    category.eq_ignore_ascii_case(&config.keynote_category)
}

/// Whether the category belongs to the exclusion set.
pub fn is_excluded(category: &str, config: &PresenterConfig) -> bool {
    config
        .excluded_categories
        .iter()
        .any(|excluded| category.eq_ignore_ascii_case(excluded))
}
