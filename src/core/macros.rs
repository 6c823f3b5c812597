/******************************************\
|==========================================|
|          Macro: impl_enum_index          |
|==========================================|
\******************************************/

/// Generates an `ALL` table and an `index` method for a fieldless enum.
///
/// It provides:
/// - `pub const ALL: [Self; Self::NUM]`: every variant in declaration order.
/// - `const fn index(&self) -> usize`: the variant's discriminant as `usize`.
///
/// The enum must declare a `NUM` constant matching the number of listed variants.
#[macro_export]
macro_rules! impl_enum_index {
    ($enum_name:ident, [$($variant:ident),+ $(,)?]) => {
        impl $enum_name {
            #[doc=concat!("Every ", stringify!($enum_name), " in declaration order")]
            pub const ALL: [Self; Self::NUM] = [$($enum_name::$variant),+];

            #[doc=concat!("Converts ", stringify!($enum_name), " to primitive type usize")]
            #[inline]
            pub const fn index(&self) -> usize {
                *self as usize
            }
        }
    };
}

/******************************************\
|==========================================|
|          Macro: impl_enum_iter           |
|==========================================|
\******************************************/

/// Generates an `iter()` method for an enum that has an `ALL` table
/// (see [`impl_enum_index`]).
/// The `iter()` method returns a `DoubleEndedIterator` over all variants of the enum.
#[macro_export]
macro_rules! impl_enum_iter {
    ($enum_name:ident) => {
        impl $enum_name {
            #[doc=concat!("Returns iterator for all the elements in ", stringify!($enum_name))]
            pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
                Self::ALL.into_iter()
            }
        }
    };
}
