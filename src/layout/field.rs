//! Field identifiers and descriptors

use std::fmt;
use std::hash::Hash;

use super::{Group, prefix_sum};
use crate::types::{FieldValue, ValueType};

/// Identifier type naming the fields of exactly one [`Group`].
///
/// Implemented by the `Id` enum that [`group!`](crate::group!) generates. Its
/// variants are the group's fields in declaration order.
pub trait Identifier: Copy + Eq + Hash + fmt::Debug + 'static {
    /// The group whose fields this identifier names.
    type Group: Group<Id = Self>;

    /// Every identifier value, in declaration order.
    const ALL: &'static [Self];

    /// Name of the identifier type, unique within a crate.
    const TAG: &'static str;

    /// Declaration index of this identifier within its group.
    fn index(self) -> usize;

    /// Field name of this identifier.
    fn name(self) -> &'static str;
}

/// Type-level field: an identifier bound to a value type.
///
/// Each field of a [`group!`](crate::group!) declaration gets a zero-sized
/// marker type implementing `Field`. Every property is an associated constant,
/// so offsets resolve at compile time and inject/extract need no lookup.
pub trait Field: Copy + fmt::Debug + 'static {
    /// Identifier type of the owning group.
    type Id: Identifier;

    /// Declared value type. Inject and extract accept exactly this type.
    type Value: FieldValue;

    /// Identifier value naming this field.
    const ID: Self::Id;

    /// Declaration index within the owning group.
    const INDEX: usize;

    /// Byte size of the field.
    const SIZE: usize = <Self::Value as FieldValue>::SIZE;

    /// Byte offset from the start of the owning group.
    const OFFSET: usize =
        prefix_sum(<<Self::Id as Identifier>::Group as Group>::SIZES, Self::INDEX);
}

/// Runtime description of one field of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// Field name as declared
    pub name: &'static str,
    /// Scalar type of the stored value
    pub value_type: ValueType,
    /// Number of scalar elements (1 for scalars)
    pub count: usize,
    /// Byte size of the field
    pub size: usize,
    /// Byte offset from the start of the owning group
    pub offset: usize,
}

impl FieldDescriptor {
    /// Offset one past the field's last byte.
    pub const fn end(&self) -> usize {
        self.offset + self.size
    }
}
