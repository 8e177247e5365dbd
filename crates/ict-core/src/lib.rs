pub mod field_path;
pub mod issues;
pub mod semver;

pub use field_path::{FieldPath, FieldPathSegment};
pub use issues::{Diagnostic, DiagnosticSeverity};
pub use semver::{Version, VersionError};
