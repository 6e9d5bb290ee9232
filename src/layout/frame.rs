//! Frames: ordered concatenations of groups, and buffers bound to them

use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use super::bounds::{check_capacity, has_valid_buffer_size};
use super::group::{load, store};
use super::{Field, FieldDescriptor, Group, Identifier, total_size};
use crate::{LayoutSchema, Result};

/// An ordered, fixed collection of groups laid out back to back.
///
/// Implemented by [`frame!`](crate::frame!). Every member group has a distinct
/// identifier type, and [`Contains`] maps that type to the group's base offset.
pub trait FrameLayout: Sized + 'static {
    /// Frame name as declared.
    const NAME: &'static str;

    /// Group sizes in declaration order.
    const GROUP_SIZES: &'static [usize];

    /// Total byte footprint of the frame.
    const SIZE: usize = total_size(Self::GROUP_SIZES);

    /// Group descriptors in declaration order.
    const GROUPS: &'static [GroupDescriptor];

    /// Frame-relative offset of `field`.
    fn offset<F: Field>(_field: F) -> usize
    where
        Self: Contains<F::Id>,
    {
        <Self as Contains<F::Id>>::BASE + F::OFFSET
    }

    /// Frame-relative offset of the field named by `id`.
    fn offset_of<I: Identifier>(id: I) -> usize
    where
        Self: Contains<I>,
    {
        <Self as Contains<I>>::BASE + <I::Group as Group>::FIELDS[id.index()].offset
    }

    /// Whether a buffer of `capacity` bytes can hold the frame.
    fn fits(capacity: usize) -> bool {
        has_valid_buffer_size(capacity, Self::SIZE)
    }

    /// Runtime schema of the frame, with frame-relative offsets.
    fn schema() -> LayoutSchema {
        LayoutSchema::from_frame::<Self>()
    }
}

/// Membership of the group named by identifier type `I` in a frame.
///
/// `frame!` emits exactly one impl per member group. Declaring a group twice
/// yields conflicting impls and fails to compile.
pub trait Contains<I: Identifier>: FrameLayout {
    /// Offset of the owning group from the start of the frame.
    const BASE: usize;
}

/// Runtime description of one group of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupDescriptor {
    /// Group name as declared
    pub name: &'static str,
    /// Tag of the group's identifier type
    pub tag: &'static str,
    /// Offset of the group from the start of the frame
    pub base_offset: usize,
    /// Byte size of the group
    pub size: usize,
    /// Field descriptors with group-relative offsets
    pub fields: &'static [FieldDescriptor],
}

/// A caller-supplied buffer bound to a [`FrameLayout`].
///
/// `inject` and `extract` find the owning group from the field's identifier
/// type at compile time and copy at `group base + field offset`.
///
/// ```rust
/// flatframe::group! {
///     pub group Engine(engine) {
///         Rpm: u16,
///         Temperature: i16,
///     }
/// }
///
/// flatframe::group! {
///     pub group Chassis(chassis) {
///         Speed: f32,
///     }
/// }
///
/// flatframe::frame! {
///     pub frame Telemetry {
///         Engine,
///         Chassis,
///     }
/// }
///
/// let mut buffer = [0u8; 8];
/// let mut frame = flatframe::Frame::<Telemetry, _>::from_array(&mut buffer);
/// frame.inject(chassis::Speed, 27.5);
/// frame.inject(engine::Rpm, 4200);
/// assert_eq!(frame.extract(chassis::Speed), 27.5);
/// ```
pub struct Frame<L, B> {
    buffer: B,
    _layout: PhantomData<fn() -> L>,
}

impl<L: FrameLayout, B: AsRef<[u8]>> Frame<L, B> {
    /// Total byte footprint of the frame.
    pub const SIZE: usize = L::SIZE;

    /// Bind `buffer` to the frame, rejecting it if it is smaller than the frame.
    pub fn new(buffer: B) -> Result<Self> {
        let capacity = buffer.as_ref().len();
        check_capacity(L::NAME, capacity, L::SIZE)?;
        debug!(
            frame = L::NAME,
            groups = L::GROUPS.len(),
            size = L::SIZE,
            capacity,
            "Bound frame to buffer"
        );
        Ok(Self { buffer, _layout: PhantomData })
    }

    /// Whether the bound buffer can hold the frame.
    pub fn has_valid_buffer_size(&self) -> bool {
        L::fits(self.capacity())
    }

    /// Capacity of the bound buffer in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.as_ref().len()
    }

    /// The frame's bytes, without any trailing spare capacity.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer.as_ref()[..L::SIZE]
    }

    /// Release the bound buffer.
    pub fn into_inner(self) -> B {
        self.buffer
    }

    /// Read a field's value.
    pub fn extract<F>(&self, _field: F) -> F::Value
    where
        F: Field,
        L: Contains<F::Id>,
    {
        load::<F>(self.buffer.as_ref(), <L as Contains<F::Id>>::BASE)
    }

    /// Read a field's value into `out`.
    pub fn extract_into<F>(&self, field: F, out: &mut F::Value)
    where
        F: Field,
        L: Contains<F::Id>,
    {
        *out = self.extract(field);
    }
}

impl<L: FrameLayout, B: AsRef<[u8]> + AsMut<[u8]>> Frame<L, B> {
    /// Write a field's value.
    pub fn inject<F>(&mut self, _field: F, value: F::Value)
    where
        F: Field,
        L: Contains<F::Id>,
    {
        store::<F>(self.buffer.as_mut(), <L as Contains<F::Id>>::BASE, value);
    }
}

impl<'buf, L: FrameLayout, const N: usize> Frame<L, &'buf mut [u8; N]> {
    /// Bind a fixed-size array. An array smaller than the frame fails to compile.
    pub fn from_array(buffer: &'buf mut [u8; N]) -> Self {
        const { assert!(N >= L::SIZE, "array is smaller than the frame layout") };
        Self { buffer, _layout: PhantomData }
    }
}

impl<L: FrameLayout, B: AsRef<[u8]>> fmt::Debug for Frame<L, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("layout", &L::NAME)
            .field("size", &L::SIZE)
            .field("capacity", &self.capacity())
            .finish()
    }
}
