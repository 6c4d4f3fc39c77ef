//! Conference session records and their display-ready presentation.

pub mod category;
pub mod filename;
pub mod presenter;
pub mod record;
pub mod schedule;
pub mod text;

pub use presenter::SessionPresenter;
pub use record::SessionRecord;
