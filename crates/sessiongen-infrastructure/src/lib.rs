//! File-backed infrastructure for sessiongen.

pub mod config_storage;

pub use config_storage::{load_config, load_config_from_path, save_config_to_path};
