//! Buffer-bounds validation.
//!
//! Capacity policy: a buffer is valid for a layout when its capacity is at
//! least the layout's size. Larger buffers are accepted; the bytes past the
//! layout are never touched.

use std::ops::Range;

use tracing::warn;

use crate::{LayoutError, Result};

/// Returns whether a buffer of `capacity` bytes can hold `required` bytes.
pub const fn has_valid_buffer_size(capacity: usize, required: usize) -> bool {
    capacity >= required
}

/// Fails with [`LayoutError::BufferTooSmall`] unless `capacity >= required`.
pub fn check_capacity(layout: &str, capacity: usize, required: usize) -> Result<()> {
    if has_valid_buffer_size(capacity, required) {
        return Ok(());
    }

    warn!(layout, capacity, required, "Buffer too small for layout");
    Err(LayoutError::buffer_too_small(layout, required, capacity))
}

/// Byte range of a field at `base_offset + offset`, checked against `buffer_len`.
///
/// Overflowing offsets are reported as out of bounds rather than wrapping.
pub fn field_range(
    base_offset: usize,
    offset: usize,
    size: usize,
    buffer_len: usize,
) -> Result<Range<usize>> {
    let start = base_offset
        .checked_add(offset)
        .ok_or_else(|| LayoutError::out_of_bounds(base_offset, size, buffer_len))?;

    let end = start
        .checked_add(size)
        .filter(|end| *end <= buffer_len)
        .ok_or_else(|| LayoutError::out_of_bounds(start, size, buffer_len))?;

    Ok(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn capacity_must_be_at_least_size() {
        assert!(has_valid_buffer_size(6, 6));
        assert!(has_valid_buffer_size(20, 6));
        assert!(!has_valid_buffer_size(5, 6));
        assert!(has_valid_buffer_size(0, 0));
    }

    #[test]
    fn check_capacity_reports_layout_and_sizes() {
        let _ = tracing_subscriber::fmt::try_init();

        assert!(check_capacity("Group", 6, 6).is_ok());
        let err = check_capacity("Group", 5, 6).unwrap_err();
        assert_eq!(err, LayoutError::buffer_too_small("Group", 6, 5));
    }

    #[test]
    fn field_range_rejects_overflow() {
        assert_eq!(field_range(6, 2, 4, 12).unwrap(), 8..12);
        assert!(field_range(6, 2, 4, 11).is_err());
        assert!(field_range(usize::MAX, 1, 1, usize::MAX).is_err());
        assert!(field_range(usize::MAX - 1, 0, 4, usize::MAX).is_err());
    }

    proptest! {
        #[test]
        fn prop_field_range_stays_inside_buffer(
            base in 0usize..64,
            offset in 0usize..64,
            size in 0usize..16,
            buffer_len in 0usize..160
        ) {
            match field_range(base, offset, size, buffer_len) {
                Ok(range) => {
                    prop_assert_eq!(range.start, base + offset);
                    prop_assert_eq!(range.len(), size);
                    prop_assert!(range.end <= buffer_len);
                }
                Err(_) => prop_assert!(base + offset + size > buffer_len),
            }
        }
    }
}
