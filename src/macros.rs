//! Declaration macros for groups and frames.

/// Declares a [`Group`](crate::Group): an ordered record of typed fields.
///
/// ```rust
/// flatframe::group! {
///     /// Engine readings.
///     pub group Engine(engine) {
///         /// Crankshaft speed.
///         Rpm: u16,
///         Temperature: i16,
///         Cylinders: [f32; 4],
///     }
/// }
///
/// use flatframe::{Field, Group};
///
/// assert_eq!(Engine::SIZE, 20);
/// assert_eq!(<engine::Temperature as Field>::OFFSET, 2);
/// assert_eq!(Engine::offset_of(engine::Id::Cylinders), 4);
/// ```
///
/// The invocation above expands to:
///
/// - `mod engine` holding `enum Engine {}` (the uninhabited group type
///   implementing `Group`), `enum Id { Rpm, Temperature, Cylinders }` (the
///   group's identifier type) and one zero-sized marker struct per field
///   (`engine::Rpm`, ...), which is what `inject`/`extract` are keyed on
/// - `use engine::Engine`, carrying the declared visibility
///
/// Items inside the module are `pub`; the declared visibility of the group
/// decides how far the module and the re-export reach.
///
/// Fields are laid out in the order written. Field names must be unique
/// within the group and must differ from the group name and from `Id`.
#[macro_export]
macro_rules! group {
    (
        $(#[$meta:meta])*
        $vis:vis group $name:ident ( $module:ident ) {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty
            ),+ $(,)?
        }
    ) => {
        #[doc = concat!("Type and field identifiers of the `", stringify!($name), "` group.")]
        $vis mod $module {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy)]
            pub enum $name {}

            #[doc = concat!("Identifier type of the `", stringify!($name), "` group's fields, in layout order.")]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub enum Id {
                $($field),+
            }

            $(
                $(#[$field_meta])*
                #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
                pub struct $field;
            )+
        }

        $vis use $module::$name;

        const _: () = assert!(
            $crate::are_names_unique(&[$(stringify!($field)),+]),
            concat!("duplicate field identifier in group `", stringify!($name), "`"),
        );

        impl $crate::Identifier for $module::Id {
            type Group = $module::$name;

            const ALL: &'static [Self] = &[$($module::Id::$field),+];
            const TAG: &'static str = concat!(module_path!(), "::", stringify!($module), "::Id");

            fn index(self) -> usize {
                self as usize
            }

            fn name(self) -> &'static str {
                match self {
                    $($module::Id::$field => stringify!($field)),+
                }
            }
        }

        impl $crate::Group for $module::$name {
            type Id = $module::Id;

            const NAME: &'static str = stringify!($name);
            const SIZES: &'static [usize] = &[$(<$ty as $crate::FieldValue>::SIZE),+];
            const FIELDS: &'static [$crate::FieldDescriptor] = &[$(
                $crate::FieldDescriptor {
                    name: stringify!($field),
                    value_type: <$ty as $crate::FieldValue>::VALUE_TYPE,
                    count: <$ty as $crate::FieldValue>::COUNT,
                    size: <$module::$field as $crate::Field>::SIZE,
                    offset: <$module::$field as $crate::Field>::OFFSET,
                }
            ),+];
        }

        $(
            impl $crate::Field for $module::$field {
                type Id = $module::Id;
                type Value = $ty;

                const ID: $module::Id = $module::Id::$field;
                const INDEX: usize = $module::Id::$field as usize;
            }
        )+
    };
}

/// Declares a [`FrameLayout`](crate::FrameLayout): an ordered concatenation of groups.
///
/// ```rust
/// flatframe::group! {
///     pub group Header(header) {
///         Sequence: u32,
///     }
/// }
///
/// flatframe::group! {
///     pub group Body(body) {
///         Flags: u8,
///         Payload: [u8; 3],
///     }
/// }
///
/// flatframe::frame! {
///     /// Header followed by body.
///     pub frame Message {
///         Header,
///         Body,
///     }
/// }
///
/// use flatframe::FrameLayout;
///
/// assert_eq!(Message::SIZE, 8);
/// assert_eq!(Message::offset(body::Payload), 5);
/// ```
///
/// Each group may appear once. Fields are resolved to their group through the
/// group's identifier type, so a frame can never hold two groups sharing one.
#[macro_export]
macro_rules! frame {
    (@contains $name:ident; [$($prev:ty),*];) => {};
    (@contains $name:ident; [$($prev:ty),*]; $group:ty $(, $rest:ty)*) => {
        impl $crate::Contains<<$group as $crate::Group>::Id> for $name {
            const BASE: usize = 0 $(+ <$prev as $crate::Group>::SIZE)*;
        }

        $crate::frame!(@contains $name; [$($prev,)* $group]; $($rest),*);
    };
    (
        $(#[$meta:meta])*
        $vis:vis frame $name:ident {
            $($group:ty),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        $vis enum $name {}

        const _: () = assert!(
            $crate::are_names_unique(&[
                $(<<$group as $crate::Group>::Id as $crate::Identifier>::TAG),+
            ]),
            concat!("duplicate group identifier type in frame `", stringify!($name), "`"),
        );

        impl $crate::FrameLayout for $name {
            const NAME: &'static str = stringify!($name);
            const GROUP_SIZES: &'static [usize] = &[$(<$group as $crate::Group>::SIZE),+];
            const GROUPS: &'static [$crate::GroupDescriptor] = &[$(
                $crate::GroupDescriptor {
                    name: <$group as $crate::Group>::NAME,
                    tag: <<$group as $crate::Group>::Id as $crate::Identifier>::TAG,
                    base_offset: <$name as $crate::Contains<<$group as $crate::Group>::Id>>::BASE,
                    size: <$group as $crate::Group>::SIZE,
                    fields: <$group as $crate::Group>::FIELDS,
                }
            ),+];
        }

        $crate::frame!(@contains $name; []; $($group),+);
    };
}
