pub mod field_path;
pub mod issues;
pub mod stable_hash;
pub mod stable_json;

pub use field_path::{FieldPath, FieldPathSegment};
pub use issues::{render_issues, IssueSeverity, StructuredIssue};
pub use stable_hash::fingerprint_hex;
pub use stable_json::canonical_json_bytes;
