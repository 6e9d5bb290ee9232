//! Value types stored in layout fields.
//!
//! - [`FieldValue`] is the per-type encoding contract: a fixed byte size and
//!   a raw, host-native copy in each direction
//! - [`ValueType`] tags the scalar kind of a field for descriptors and schemas
//! - [`Value`] holds a decoded field of any type for dynamic inspection
//!
//! ```rust
//! use flatframe::types::{FieldValue, ValueType};
//!
//! assert_eq!(<u16 as FieldValue>::SIZE, 2);
//! assert_eq!(<[u32; 3] as FieldValue>::SIZE, 12);
//! assert_eq!(<[u32; 3] as FieldValue>::VALUE_TYPE, ValueType::UInt32);
//!
//! let mut raw = [0u8; 4];
//! 0x2222_2222u32.write_to(&mut raw);
//! assert_eq!(u32::read_from(&raw), 0x2222_2222);
//! ```

mod field_value;
mod value_type;

pub use field_value::FieldValue;
pub use value_type::{Value, ValueType};
