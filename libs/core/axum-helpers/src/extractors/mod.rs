//! Extractors that reject with the JSON envelope instead of plain text.

pub mod uuid_path;
pub mod validated_json;

pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
