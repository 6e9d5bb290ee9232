//! Error types for layout binding and inspection.
//!
//! Only runtime failures live here. Ill-formed declarations (duplicate field
//! identifiers, duplicate groups in a frame, unknown identifiers, mismatched
//! value types) never become values of this type: they are rejected by the
//! compiler through const assertions, trait coherence and trait bounds.
//!
//! ## Error Categories
//!
//! - **Buffer Errors**: a caller-supplied buffer cannot hold the layout
//! - **Bounds Errors**: a raw access would run past the end of a buffer
//! - **Lookup Errors**: a by-name lookup in a [`LayoutSchema`](crate::LayoutSchema) failed
//! - **Type Conversion Errors**: a dynamic read asked for the wrong value type
//! - **Schema Errors**: a schema is inconsistent or could not be parsed
//!
//! ```rust
//! use flatframe::LayoutError;
//!
//! let error = LayoutError::buffer_too_small("Telemetry", 20, 16);
//! assert!(error.to_string().contains("20"));
//! for suggestion in error.recovery_suggestions() {
//!     println!("  - {}", suggestion);
//! }
//! ```

use thiserror::Error;

/// Result type alias for layout operations.
pub type Result<T, E = LayoutError> = std::result::Result<T, E>;

/// Main error type for layout operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LayoutError {
    #[error("Buffer of {actual} bytes is too small for layout `{layout}` ({required} bytes)")]
    BufferTooSmall { layout: String, required: usize, actual: usize },

    #[error("Access of {size} bytes at offset {offset:#x} exceeds buffer of {buffer_len} bytes")]
    OutOfBounds { offset: usize, size: usize, buffer_len: usize },

    #[error("Field '{field}' not found in layout")]
    FieldNotFound { field: String },

    #[error("Type conversion error: {details}")]
    TypeConversion { details: String },

    #[error("Schema validation failed: {reason}")]
    SchemaValidation { reason: String },

    #[error("Parse error in {context}: {details}")]
    Parse { context: String, details: String },
}

impl LayoutError {
    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            LayoutError::BufferTooSmall { .. } => vec![
                "Allocate at least the layout's SIZE bytes",
                "Use from_array to reject undersized arrays at compile time",
            ],
            LayoutError::OutOfBounds { .. } => vec![
                "Check the base offset passed to the raw group accessors",
                "Bind the buffer through Packet or Frame to validate it once",
            ],
            LayoutError::FieldNotFound { .. } => vec![
                "Check field name spelling",
                "Qualify the field with its group as `Group.Field`",
            ],
            LayoutError::TypeConversion { .. } => vec![
                "Check the value type declared for the field",
                "Read the field as a dynamic Value instead",
            ],
            LayoutError::SchemaValidation { .. } => vec![
                "Regenerate the schema from the layout declaration",
                "Verify fields are contiguous and in declaration order",
            ],
            LayoutError::Parse { .. } => vec![
                "Check the schema document is valid YAML",
                "Verify the document was produced by LayoutSchema::to_yaml",
            ],
        }
    }

    /// Helper constructor for undersized buffers.
    pub fn buffer_too_small(layout: impl Into<String>, required: usize, actual: usize) -> Self {
        LayoutError::BufferTooSmall { layout: layout.into(), required, actual }
    }

    /// Helper constructor for raw accesses past the end of a buffer.
    pub fn out_of_bounds(offset: usize, size: usize, buffer_len: usize) -> Self {
        LayoutError::OutOfBounds { offset, size, buffer_len }
    }

    /// Helper constructor for failed lookups.
    pub fn field_not_found(field: impl Into<String>) -> Self {
        LayoutError::FieldNotFound { field: field.into() }
    }

    /// Helper constructor for schema validation errors.
    pub fn schema_validation_error(reason: impl Into<String>) -> Self {
        LayoutError::SchemaValidation { reason: reason.into() }
    }
}

impl From<serde_yaml_ng::Error> for LayoutError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        LayoutError::Parse { context: "Layout schema YAML".to_string(), details: err.to_string() }
    }
}
