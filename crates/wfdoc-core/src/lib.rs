pub mod field_path;
pub mod value_kind;
pub mod violation;

pub use field_path::{FieldPath, FieldPathParseError, FieldPathSegment};
pub use value_kind::{describe_kinds, is_integral, ValueKind};
pub use violation::{IssueSeverity, Violation, ViolationKind};
