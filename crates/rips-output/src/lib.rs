//! Export writer for accepted RIPS records.
//!
//! - [`ExportWriter`]: the collaborator contract used by the processor
//! - [`JsonExportWriter`]: one pretty-printed JSON document per record
//! - [`NoExport`]: validation-only runs

mod error;
mod json;
mod writer;

pub use error::ExportError;
pub use json::JsonExportWriter;
pub use writer::{ExportWriter, NoExport, export_file_name};
