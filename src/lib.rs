//! Core library for QuiltKeeper, a desktop quilt project tracker.
//! Provides the record model, the JSON-file store, view filters, and the
//! backup import/export codec; the GUI shell lives in `gui`.

pub mod backup;
pub mod filter;
mod gui;
mod record;
pub mod statics;
mod store;

pub use gui::run_gui;
pub use record::{Category, ProjectRecord, new_record_id, parse_date};
pub use store::{QuiltStore, UpsertOutcome};
