// region:    --- Modules

mod case;
mod error;
mod host;
mod line_editor;
mod matcher;
mod options;
mod word_entry;
mod word_table;

pub mod word_bounds;

pub use case::*;
pub use error::*;
pub use host::*;
pub use line_editor::*;
pub use matcher::*;
pub use options::*;
pub use word_entry::*;
pub use word_table::*;

// endregion: --- Modules
