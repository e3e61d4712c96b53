//! Render module
//!
//! Pure HTML rendering of a [`crate::report::ChatReport`]. Output depends
//! only on the report record and the static localized string tables, so the
//! same record always renders to byte-identical markup.

pub mod format;
pub mod html;
pub mod i18n;

pub use format::format_file_size;
pub use html::render_html;
pub use i18n::Language;
