//! Groups: fixed-size records of fields, and buffers bound to them

use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, trace};

use super::bounds::{check_capacity, field_range, has_valid_buffer_size};
use super::{Field, FieldDescriptor, Identifier, total_size};
use crate::types::FieldValue;
use crate::{LayoutSchema, Result};

/// An ordered, fixed collection of fields laid out back to back.
///
/// Implemented by [`group!`](crate::group!). Field order is physical order:
/// the first declared field sits at offset 0 and there is no padding.
pub trait Group: Sized + 'static {
    /// Identifier type naming this group's fields.
    type Id: Identifier<Group = Self>;

    /// Group name as declared.
    const NAME: &'static str;

    /// Field sizes in declaration order.
    const SIZES: &'static [usize];

    /// Total byte footprint of the group.
    const SIZE: usize = total_size(Self::SIZES);

    /// Field descriptors in declaration order, indexed by [`Identifier::index`].
    const FIELDS: &'static [FieldDescriptor];

    /// Offset of `field` relative to the group's start.
    fn offset<F: Field<Id = Self::Id>>(_field: F) -> usize {
        F::OFFSET
    }

    /// Offset of the field named by `id` relative to the group's start.
    fn offset_of(id: Self::Id) -> usize {
        Self::descriptor(id).offset
    }

    /// Descriptor of the field named by `id`.
    fn descriptor(id: Self::Id) -> &'static FieldDescriptor {
        &Self::FIELDS[id.index()]
    }

    /// Whether a buffer of `capacity` bytes can hold the group.
    fn fits(capacity: usize) -> bool {
        has_valid_buffer_size(capacity, Self::SIZE)
    }

    /// Write `value` into `buffer` at `base_offset` plus the field's offset.
    ///
    /// This raw form checks the single access against the slice length. Bind
    /// the buffer with [`Packet`] to validate it once and skip per-call checks.
    fn inject<F: Field<Id = Self::Id>>(
        buffer: &mut [u8],
        _field: F,
        value: F::Value,
        base_offset: usize,
    ) -> Result<()> {
        let range = field_range(base_offset, F::OFFSET, F::SIZE, buffer.len())?;
        trace!(group = Self::NAME, field = ?F::ID, offset = range.start, "Injecting field");
        value.write_to(&mut buffer[range]);
        Ok(())
    }

    /// Read the field at `base_offset` plus the field's offset out of `buffer`.
    fn extract<F: Field<Id = Self::Id>>(
        buffer: &[u8],
        _field: F,
        base_offset: usize,
    ) -> Result<F::Value> {
        let range = field_range(base_offset, F::OFFSET, F::SIZE, buffer.len())?;
        trace!(group = Self::NAME, field = ?F::ID, offset = range.start, "Extracting field");
        Ok(F::Value::read_from(&buffer[range]))
    }

    /// Runtime schema of the group, with group-relative offsets.
    fn schema() -> LayoutSchema {
        LayoutSchema::from_group::<Self>()
    }
}

// Unchecked copies for buffers already validated against the enclosing layout.
pub(crate) fn store<F: Field>(buffer: &mut [u8], base_offset: usize, value: F::Value) {
    let start = base_offset + F::OFFSET;
    value.write_to(&mut buffer[start..start + F::SIZE]);
}

pub(crate) fn load<F: Field>(buffer: &[u8], base_offset: usize) -> F::Value {
    let start = base_offset + F::OFFSET;
    F::Value::read_from(&buffer[start..start + F::SIZE])
}

/// A caller-supplied buffer bound to a single [`Group`].
///
/// The packet never allocates. It borrows (or holds) the buffer it was built
/// from and hands it back through [`into_inner`](Packet::into_inner).
/// Construction rejects buffers smaller than the group, so `inject` and
/// `extract` are plain fixed-offset copies.
///
/// ```rust
/// flatframe::group! {
///     pub group Sample(sample) {
///         A: u16,
///         B: u32,
///     }
/// }
///
/// let mut buffer = [0u8; 6];
/// let mut packet = flatframe::Packet::<Sample, _>::new(&mut buffer[..])?;
/// packet.inject(sample::A, 0x1111);
/// packet.inject(sample::B, 0x2222_2222);
/// assert_eq!(packet.extract(sample::B), 0x2222_2222);
/// # Ok::<(), flatframe::LayoutError>(())
/// ```
pub struct Packet<G, B> {
    buffer: B,
    _group: PhantomData<fn() -> G>,
}

impl<G: Group, B: AsRef<[u8]>> Packet<G, B> {
    /// Total byte footprint of the group.
    pub const SIZE: usize = G::SIZE;

    /// Bind `buffer` to the group, rejecting it if it is smaller than the group.
    pub fn new(buffer: B) -> Result<Self> {
        let capacity = buffer.as_ref().len();
        check_capacity(G::NAME, capacity, G::SIZE)?;
        debug!(group = G::NAME, size = G::SIZE, capacity, "Bound group to buffer");
        Ok(Self { buffer, _group: PhantomData })
    }

    /// Whether the bound buffer can hold the group.
    pub fn has_valid_buffer_size(&self) -> bool {
        G::fits(self.capacity())
    }

    /// Capacity of the bound buffer in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.as_ref().len()
    }

    /// The group's bytes, without any trailing spare capacity.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer.as_ref()[..G::SIZE]
    }

    /// Release the bound buffer.
    pub fn into_inner(self) -> B {
        self.buffer
    }

    /// Read a field's value.
    pub fn extract<F: Field<Id = G::Id>>(&self, _field: F) -> F::Value {
        load::<F>(self.buffer.as_ref(), 0)
    }

    /// Read a field's value into `out`.
    pub fn extract_into<F: Field<Id = G::Id>>(&self, field: F, out: &mut F::Value) {
        *out = self.extract(field);
    }
}

impl<G: Group, B: AsRef<[u8]> + AsMut<[u8]>> Packet<G, B> {
    /// Write a field's value.
    pub fn inject<F: Field<Id = G::Id>>(&mut self, _field: F, value: F::Value) {
        store::<F>(self.buffer.as_mut(), 0, value);
    }
}

impl<'buf, G: Group, const N: usize> Packet<G, &'buf mut [u8; N]> {
    /// Bind a fixed-size array. An array smaller than the group fails to compile.
    pub fn from_array(buffer: &'buf mut [u8; N]) -> Self {
        const { assert!(N >= G::SIZE, "array is smaller than the group layout") };
        Self { buffer, _group: PhantomData }
    }
}

impl<G: Group, B: AsRef<[u8]>> fmt::Debug for Packet<G, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Packet")
            .field("group", &G::NAME)
            .field("size", &G::SIZE)
            .field("capacity", &self.capacity())
            .finish()
    }
}
