//! Presentation rules for conference session records.
//!
//! A [`SessionRecord`] is turned into a [`SessionPresenter`], a read-only view
//! holding every derived value a document generator needs: display title,
//! filesystem-safe filename, formatted start date/time and cleaned text blocks.

pub mod config;
pub mod error;
pub mod session;

pub use config::PresenterConfig;
pub use error::{Result, SessionGenError};
pub use session::{SessionPresenter, SessionRecord};
