//! Scalar value type definitions

use serde::{Deserialize, Serialize};

use crate::{LayoutError, Result};

/// Scalar types a field may hold.
///
/// Arrays are described by a scalar `ValueType` plus an element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// 8-bit signed integer
    Int8,
    /// 8-bit unsigned integer
    UInt8,
    /// 16-bit signed integer
    Int16,
    /// 16-bit unsigned integer
    UInt16,
    /// 32-bit signed integer
    Int32,
    /// 32-bit unsigned integer
    UInt32,
    /// 64-bit signed integer
    Int64,
    /// 64-bit unsigned integer
    UInt64,
    /// 32-bit floating point
    Float32,
    /// 64-bit floating point
    Float64,
    /// Boolean stored as a single byte
    Bool,
}

impl ValueType {
    /// Returns the size in bytes of one element of this type.
    pub const fn size(&self) -> usize {
        match self {
            ValueType::Int8 | ValueType::UInt8 | ValueType::Bool => 1,
            ValueType::Int16 | ValueType::UInt16 => 2,
            ValueType::Int32 | ValueType::UInt32 | ValueType::Float32 => 4,
            ValueType::Int64 | ValueType::UInt64 | ValueType::Float64 => 8,
        }
    }
}

/// Runtime value type that can hold any field's contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// 8-bit signed integer
    Int8(i8),
    /// 8-bit unsigned integer
    UInt8(u8),
    /// 16-bit signed integer
    Int16(i16),
    /// 16-bit unsigned integer
    UInt16(u16),
    /// 32-bit signed integer
    Int32(i32),
    /// 32-bit unsigned integer
    UInt32(u32),
    /// 64-bit signed integer
    Int64(i64),
    /// 64-bit unsigned integer
    UInt64(u64),
    /// 32-bit floating point
    Float32(f32),
    /// 64-bit floating point
    Float64(f64),
    /// Boolean decoded from a single byte
    Bool(bool),
    /// Elements of an array field, in memory order
    Array(Vec<Value>),
}

impl Value {
    /// Decode `count` elements of `value_type` from the front of `bytes`.
    ///
    /// A count of 1 decodes to a scalar; any other count decodes to [`Value::Array`].
    pub fn read(bytes: &[u8], value_type: ValueType, count: usize) -> Result<Self> {
        let element = value_type.size();
        let needed = element
            .checked_mul(count)
            .filter(|needed| *needed <= bytes.len())
            .ok_or_else(|| LayoutError::out_of_bounds(0, element.saturating_mul(count), bytes.len()))?;

        if count == 1 {
            return Ok(Self::read_scalar(&bytes[..element], value_type));
        }

        Ok(Value::Array(
            bytes[..needed]
                .chunks_exact(element)
                .map(|chunk| Self::read_scalar(chunk, value_type))
                .collect(),
        ))
    }

    /// Returns the scalar type of this value, or of its first element for arrays.
    pub fn value_type(&self) -> Option<ValueType> {
        Some(match self {
            Value::Int8(_) => ValueType::Int8,
            Value::UInt8(_) => ValueType::UInt8,
            Value::Int16(_) => ValueType::Int16,
            Value::UInt16(_) => ValueType::UInt16,
            Value::Int32(_) => ValueType::Int32,
            Value::UInt32(_) => ValueType::UInt32,
            Value::Int64(_) => ValueType::Int64,
            Value::UInt64(_) => ValueType::UInt64,
            Value::Float32(_) => ValueType::Float32,
            Value::Float64(_) => ValueType::Float64,
            Value::Bool(_) => ValueType::Bool,
            Value::Array(items) => return items.first().and_then(Value::value_type),
        })
    }

    // `chunk` is exactly `value_type.size()` bytes long.
    fn read_scalar(chunk: &[u8], value_type: ValueType) -> Self {
        use super::FieldValue;

        match value_type {
            ValueType::Int8 => Value::Int8(i8::read_from(chunk)),
            ValueType::UInt8 => Value::UInt8(u8::read_from(chunk)),
            ValueType::Int16 => Value::Int16(i16::read_from(chunk)),
            ValueType::UInt16 => Value::UInt16(u16::read_from(chunk)),
            ValueType::Int32 => Value::Int32(i32::read_from(chunk)),
            ValueType::UInt32 => Value::UInt32(u32::read_from(chunk)),
            ValueType::Int64 => Value::Int64(i64::read_from(chunk)),
            ValueType::UInt64 => Value::UInt64(u64::read_from(chunk)),
            ValueType::Float32 => Value::Float32(f32::read_from(chunk)),
            ValueType::Float64 => Value::Float64(f64::read_from(chunk)),
            ValueType::Bool => Value::Bool(bool::read_from(chunk)),
        }
    }
}
