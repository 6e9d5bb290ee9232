//! Static layout engine: fields, groups and frames.
//!
//! A layout is declared once with [`group!`](crate::group!) and
//! [`frame!`](crate::frame!) and never changes afterwards. Every size and
//! offset is an associated constant derived from the declaration:
//!
//! - a field's size is its value type's size
//! - a group's size is the sum of its field sizes, and a field's offset is the
//!   sum of the sizes declared before it
//! - a frame's size is the sum of its group sizes, and a field's frame offset
//!   is its group's base offset plus its offset within the group
//!
//! Declaration order is physical order. Nothing is reordered, aligned or padded.
//!
//! ## Architecture
//!
//! - [`Field`] and [`Identifier`] name fields at the type level
//! - [`Group`] describes one record; [`Packet`] binds a buffer to it
//! - [`FrameLayout`] and [`Contains`] describe a frame; [`Frame`] binds a buffer to it
//! - [`bounds`] holds the buffer capacity policy shared by all of them

pub mod bounds;
mod field;
mod frame;
mod group;

pub use field::{Field, FieldDescriptor, Identifier};
pub use frame::{Contains, Frame, FrameLayout, GroupDescriptor};
pub use group::{Group, Packet};

/// Sum of the first `index` entries of `sizes`.
pub const fn prefix_sum(sizes: &[usize], index: usize) -> usize {
    let mut sum = 0;
    let mut i = 0;
    while i < index && i < sizes.len() {
        sum += sizes[i];
        i += 1;
    }
    sum
}

/// Sum of all entries of `sizes`.
pub const fn total_size(sizes: &[usize]) -> usize {
    prefix_sum(sizes, sizes.len())
}
