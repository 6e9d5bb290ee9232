//! Uniqueness predicates used to gate layout declarations.
//!
//! `are_values_unique` and `are_names_unique` are `const fn`s so the
//! declaration macros can evaluate them inside `const` assertions; a failing
//! predicate becomes a compile error at the declaration site.

use std::any::TypeId;

/// Returns true iff no two elements of `values` are equal.
pub const fn are_values_unique(values: &[u64]) -> bool {
    let mut i = 0;
    while i < values.len() {
        let mut j = i + 1;
        while j < values.len() {
            if values[i] == values[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// Returns true iff no two names in `names` are byte-for-byte equal.
pub const fn are_names_unique(names: &[&str]) -> bool {
    let mut i = 0;
    while i < names.len() {
        let mut j = i + 1;
        while j < names.len() {
            if str_eq(names[i], names[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// Returns true iff no two type ids in `types` are identical.
///
/// See [`are_types_unique!`](crate::are_types_unique!) for the type-list form.
pub fn are_types_unique(types: &[TypeId]) -> bool {
    types.iter().enumerate().all(|(i, ty)| !types[i + 1..].contains(ty))
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Checks that a list of types contains no duplicates.
///
/// ```rust
/// assert!(flatframe::are_types_unique!(u8, u16, u32, u64));
/// assert!(!flatframe::are_types_unique!(u8, u16, u32, u16));
/// ```
#[macro_export]
macro_rules! are_types_unique {
    ($($ty:ty),* $(,)?) => {
        $crate::unique::are_types_unique(&[$(::std::any::TypeId::of::<$ty>()),*])
    };
}
