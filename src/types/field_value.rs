//! Fixed-width value encoding trait and implementations

use super::ValueType;

/// Trait for types that can be stored in a field.
///
/// Implementations copy their host-native byte representation, so a stored
/// value is byte-for-byte what a raw memory copy of it would produce. No
/// byte-order normalization happens here.
///
/// `write_to` and `read_from` are always handed slices of exactly
/// [`SIZE`](FieldValue::SIZE) bytes. A type may reserve more bytes than its
/// scalar elements need by overriding `SIZE`.
pub trait FieldValue: Copy + 'static {
    /// Scalar type of the value (or of its elements, for arrays).
    const VALUE_TYPE: ValueType;
    /// Number of scalar elements.
    const COUNT: usize = 1;
    /// Exact byte footprint of the value.
    const SIZE: usize = Self::VALUE_TYPE.size() * Self::COUNT;

    /// Write the raw bytes of this value into `out`.
    fn write_to(&self, out: &mut [u8]);

    /// Read a value back from its raw bytes.
    fn read_from(bytes: &[u8]) -> Self;
}

macro_rules! impl_native_field_value {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl FieldValue for $ty {
                const VALUE_TYPE: ValueType = ValueType::$variant;

                fn write_to(&self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_ne_bytes());
                }

                fn read_from(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$ty>()];
                    raw.copy_from_slice(bytes);
                    <$ty>::from_ne_bytes(raw)
                }
            }
        )+
    };
}

impl_native_field_value! {
    i8 => Int8,
    u8 => UInt8,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
}

impl FieldValue for bool {
    const VALUE_TYPE: ValueType = ValueType::Bool;

    fn write_to(&self, out: &mut [u8]) {
        out[0] = u8::from(*self);
    }

    fn read_from(bytes: &[u8]) -> Self {
        bytes[0] != 0
    }
}

// Arrays flatten into a run of scalar elements
impl<T: FieldValue, const N: usize> FieldValue for [T; N] {
    const VALUE_TYPE: ValueType = T::VALUE_TYPE;
    const COUNT: usize = T::COUNT * N;
    const SIZE: usize = T::SIZE * N;

    fn write_to(&self, out: &mut [u8]) {
        if T::SIZE == 0 {
            return;
        }
        for (item, chunk) in self.iter().zip(out.chunks_exact_mut(T::SIZE)) {
            item.write_to(chunk);
        }
    }

    fn read_from(bytes: &[u8]) -> Self {
        std::array::from_fn(|i| T::read_from(&bytes[i * T::SIZE..(i + 1) * T::SIZE]))
    }
}
