//! Static binary layouts for fixed-size records.
//!
//! Flatframe describes how typed values are packed into a caller-supplied byte
//! buffer. A layout is declared once, every offset is computed at compile
//! time, and reading or writing a field is a fixed-offset copy with no lookup.
//!
//! # Features
//!
//! - **Compile-Time Offsets**: field, group and frame sizes and offsets are associated constants
//! - **Declaration Checks**: duplicate identifiers, duplicate groups, unknown
//!   fields and mismatched value types fail to compile
//! - **No Allocation**: layouts bind to borrowed or owned buffers without copying
//! - **Schemas**: every layout exports a [`LayoutSchema`] (YAML via `serde`) for
//!   tooling and by-name inspection through [`DynamicView`]
//!
//! # Quick Start
//!
//! ```rust
//! use flatframe::{Frame, FrameLayout};
//!
//! flatframe::group! {
//!     pub group Header(header) {
//!         Sequence: u32,
//!         Flags: u8,
//!     }
//! }
//!
//! flatframe::group! {
//!     pub group Position(position) {
//!         Coordinates: [f64; 3],
//!         Valid: bool,
//!     }
//! }
//!
//! flatframe::frame! {
//!     pub frame Report {
//!         Header,
//!         Position,
//!     }
//! }
//!
//! assert_eq!(Report::SIZE, 30);
//! assert_eq!(Report::offset(position::Valid), 29);
//!
//! let mut buffer = vec![0u8; 64];
//! let mut frame = Frame::<Report, _>::new(&mut buffer)?;
//! frame.inject(header::Sequence, 7);
//! frame.inject(position::Coordinates, [1.0, 2.0, 3.0]);
//! frame.inject(position::Valid, true);
//!
//! assert_eq!(frame.extract(header::Sequence), 7);
//! assert!(frame.extract(position::Valid));
//! # Ok::<(), flatframe::LayoutError>(())
//! ```
//!
//! # Rejected Declarations
//!
//! Duplicate field names, groups listed twice in a frame, values of the wrong
//! type and fields of groups outside the frame fail to compile. Fixed-size
//! arrays must also be large enough for the layout:
//!
//! ```compile_fail
//! flatframe::group! {
//!     pub group Wide(wide) {
//!         A: u64,
//!     }
//! }
//!
//! let mut buffer = [0u8; 4];
//! let _packet = flatframe::Packet::<Wide, _>::from_array(&mut buffer);
//! ```

// Declaration macros
mod macros;

// Core layout engine
pub mod layout;
pub mod types;
pub mod unique;

// Runtime inspection
mod dynamic_view;
mod error;
mod schema;

#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;

// Core exports
pub use error::*;
pub use layout::bounds::{check_capacity, field_range, has_valid_buffer_size};
pub use layout::{
    Contains, Field, FieldDescriptor, Frame, FrameLayout, Group, GroupDescriptor, Identifier,
    Packet,
};
pub use types::{FieldValue, Value, ValueType};
pub use unique::{are_names_unique, are_types_unique, are_values_unique};

// Inspection exports
pub use dynamic_view::DynamicView;
pub use schema::{FieldInfo, LayoutSchema};
