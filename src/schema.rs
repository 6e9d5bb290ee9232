//! Runtime layout schemas.
//!
//! A [`LayoutSchema`] is the flattened, serializable description of a group or
//! frame: every field with its owning group, value type, element count,
//! offset and size, in physical order. Schemas are derived from declarations
//! with [`Group::schema`] and [`FrameLayout::schema`], and can be exported to
//! YAML for external tooling and loaded back for dynamic inspection through
//! [`DynamicView`](crate::DynamicView).
//!
//! ```rust
//! use flatframe::{FrameLayout, LayoutSchema};
//!
//! flatframe::group! {
//!     pub group Engine(engine) {
//!         Rpm: u16,
//!         Temperature: i16,
//!     }
//! }
//!
//! flatframe::frame! {
//!     pub frame Telemetry {
//!         Engine,
//!     }
//! }
//!
//! let schema = Telemetry::schema();
//! let yaml = schema.to_yaml()?;
//! let reloaded = LayoutSchema::from_yaml(&yaml)?;
//! assert_eq!(reloaded, schema);
//! assert_eq!(reloaded.field("Engine.Temperature")?.offset, 2);
//! # Ok::<(), flatframe::LayoutError>(())
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::types::ValueType;
use crate::{FrameLayout, Group, LayoutError, Result};

/// Flattened description of a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSchema {
    /// Name of the described group or frame
    pub name: String,
    /// Total size of the layout in bytes
    pub size: usize,
    /// Fields in physical order
    pub fields: Vec<FieldInfo>,
}

/// Information about a single field of a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    /// Field name as declared
    pub name: String,
    /// Name of the owning group
    pub group: String,
    /// Scalar type of the stored value
    pub value_type: ValueType,
    /// Number of scalar elements (1 for scalars)
    pub count: usize,
    /// Byte offset from the start of the layout
    pub offset: usize,
    /// Byte size of the field
    pub size: usize,
}

impl FieldInfo {
    /// `Group.Field` name, unique within a frame.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.group, self.name)
    }

    fn matches(&self, path: &str) -> bool {
        match path.split_once('.') {
            Some((group, name)) => self.group == group && self.name == name,
            None => self.name == path,
        }
    }
}

impl LayoutSchema {
    /// Create a new LayoutSchema with validation.
    pub fn new(name: impl Into<String>, size: usize, fields: Vec<FieldInfo>) -> Result<Self> {
        let schema = Self { name: name.into(), size, fields };
        schema.validate()?;
        Ok(schema)
    }

    /// Schema of a single group, with group-relative offsets.
    pub fn from_group<G: Group>() -> Self {
        let fields = Self::group_fields(G::NAME, G::FIELDS, 0).collect();
        debug!(group = G::NAME, size = G::SIZE, fields = G::FIELDS.len(), "Built group schema");
        Self { name: G::NAME.to_string(), size: G::SIZE, fields }
    }

    /// Schema of a frame, with frame-relative offsets.
    pub fn from_frame<L: FrameLayout>() -> Self {
        let fields: Vec<_> = L::GROUPS
            .iter()
            .flat_map(|group| Self::group_fields(group.name, group.fields, group.base_offset))
            .collect();
        debug!(frame = L::NAME, size = L::SIZE, fields = fields.len(), "Built frame schema");
        Self { name: L::NAME.to_string(), size: L::SIZE, fields }
    }

    fn group_fields(
        group: &'static str,
        fields: &'static [crate::FieldDescriptor],
        base_offset: usize,
    ) -> impl Iterator<Item = FieldInfo> {
        fields.iter().map(move |field| FieldInfo {
            name: field.name.to_string(),
            group: group.to_string(),
            value_type: field.value_type,
            count: field.count,
            offset: base_offset + field.offset,
            size: field.size,
        })
    }

    /// Validate the schema for consistency.
    ///
    /// Fields must match their value type's size, follow each other without
    /// gaps or overlap in listed order, fill the layout exactly, and carry
    /// unique qualified names.
    pub fn validate(&self) -> Result<()> {
        let mut cursor = 0usize;
        let mut seen = HashSet::with_capacity(self.fields.len());

        for field in &self.fields {
            let qualified = field.qualified_name();

            let expected = field.value_type.size().checked_mul(field.count).ok_or_else(|| {
                LayoutError::schema_validation_error(format!(
                    "Field '{}' declares {} x {:?}, which overflows the address space",
                    qualified, field.count, field.value_type
                ))
            })?;

            if expected != field.size {
                return Err(LayoutError::schema_validation_error(format!(
                    "Field '{}' is {} bytes but {} x {:?} needs {}",
                    qualified, field.size, field.count, field.value_type, expected
                )));
            }

            if field.offset != cursor {
                return Err(LayoutError::schema_validation_error(format!(
                    "Field '{}' starts at offset {} but the previous field ends at {}",
                    qualified, field.offset, cursor
                )));
            }

            if !seen.insert(qualified.clone()) {
                return Err(LayoutError::schema_validation_error(format!(
                    "Duplicate field '{}'",
                    qualified
                )));
            }

            cursor = cursor.checked_add(field.size).ok_or_else(|| {
                LayoutError::schema_validation_error(format!(
                    "Field '{}' ends past the addressable range",
                    qualified
                ))
            })?;
        }

        if cursor != self.size {
            return Err(LayoutError::schema_validation_error(format!(
                "Fields cover {} bytes but layout '{}' is {} bytes",
                cursor, self.name, self.size
            )));
        }

        debug!(layout = %self.name, fields = self.fields.len(), "Schema validated");
        Ok(())
    }

    /// Look up a field by `Group.Field`, or by bare field name when unambiguous.
    pub fn field(&self, path: &str) -> Result<&FieldInfo> {
        trace!(layout = %self.name, path, "Looking up field");

        let mut matches = self.fields.iter().filter(|field| field.matches(path));
        match (matches.next(), matches.next()) {
            (Some(field), None) => Ok(field),
            (Some(_), Some(_)) => Err(LayoutError::field_not_found(format!(
                "{path} (ambiguous, qualify it as Group.Field)"
            ))),
            (None, _) => Err(LayoutError::field_not_found(path)),
        }
    }

    /// Check if a field exists.
    pub fn has_field(&self, path: &str) -> bool {
        self.fields.iter().any(|field| field.matches(path))
    }

    /// Get the number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Serialize the schema as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Parse and validate a schema from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let schema: Self = serde_yaml_ng::from_str(yaml)?;
        schema.validate()?;
        Ok(schema)
    }
}
