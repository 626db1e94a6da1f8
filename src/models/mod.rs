//! Document-internal data: body text, properties, session log, file format.

pub mod document_file;
pub mod properties;
pub mod session_log;
pub mod text_buffer;

pub use document_file::{DocumentFile, DocumentFileError, FORMAT_VERSION};
pub use properties::{DocumentProperties, PropertyField};
pub use session_log::{PauseChange, PauseRecord, PauseTracker, SessionRecord};
pub use text_buffer::{slice_to_cow, word_spans, TextBuffer};
