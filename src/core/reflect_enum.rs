//! Value <-> name tables for fieldless enums.
//!
//! ```
//! use kl_toolkit::reflect_enum;
//! use kl_toolkit::core::reflect_enum::{from_string, reflect, to_string};
//!
//! reflect_enum! {
//!     #[derive(Debug)]
//!     pub enum Shape {
//!         Circle,
//!         Square => "square",
//!         Triangle,
//!     }
//! }
//!
//! assert_eq!(to_string(Shape::Square), "square");
//! assert_eq!(from_string::<Shape>("Circle"), Some(Shape::Circle));
//! assert_eq!(reflect::<Shape>().count(), 3);
//! ```

use std::fmt;
use std::marker::PhantomData;

/// Returned by [`EnumReflector::to_string`] for values without a table entry.
pub const UNKNOWN_NAME: &str = "(unknown)";

/// One entry of a reflection table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValueName<E: 'static> {
    pub value: E,
    pub name: &'static str,
}

/// An enum with a static reflection table, in declaration order.
///
/// Implemented by [`reflect_enum!`](crate::reflect_enum).
pub trait ReflectEnum: Copy + PartialEq + 'static {
    /// Unqualified type name.
    const NAME: &'static str;
    const VALUE_NAMES: &'static [EnumValueName<Self>];
}

pub struct EnumReflector<E> {
    _enum: PhantomData<fn() -> E>,
}

impl<E> Clone for EnumReflector<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EnumReflector<E> {}

impl<E> Default for EnumReflector<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for EnumReflector<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EnumReflector")
            .field(&std::any::type_name::<E>())
            .finish()
    }
}

impl<E> EnumReflector<E> {
    pub const fn new() -> Self {
        Self {
            _enum: PhantomData,
        }
    }
}

impl<E: ReflectEnum> EnumReflector<E> {
    pub fn name(&self) -> &'static str {
        E::NAME
    }

    /// Module-qualified type name.
    pub fn full_name(&self) -> &'static str {
        std::any::type_name::<E>()
    }

    pub const fn count(&self) -> usize {
        E::VALUE_NAMES.len()
    }

    pub fn value_names(&self) -> &'static [EnumValueName<E>] {
        E::VALUE_NAMES
    }

    pub fn to_string(&self, value: E) -> &'static str {
        E::VALUE_NAMES
            .iter()
            .find(|vn| vn.value == value)
            .map(|vn| vn.name)
            .unwrap_or(UNKNOWN_NAME)
    }

    /// Exact, case-sensitive lookup by name.
    pub fn from_string(&self, name: &str) -> Option<E> {
        E::VALUE_NAMES
            .iter()
            .find(|vn| vn.name == name)
            .map(|vn| vn.value)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = E> + DoubleEndedIterator + 'static {
        E::VALUE_NAMES.iter().map(|vn| vn.value)
    }
}

pub const fn reflect<E: ReflectEnum>() -> EnumReflector<E> {
    EnumReflector::new()
}

pub fn to_string<E: ReflectEnum>(value: E) -> &'static str {
    reflect::<E>().to_string(value)
}

pub fn from_string<E: ReflectEnum>(name: &str) -> Option<E> {
    reflect::<E>().from_string(name)
}

/// Declares a fieldless enum together with its reflection table.
///
/// A variant may carry a discriminant (`Rgb = 2`) and an alternative name
/// (`ReadWrite => "read_write"`). The macro derives `Clone, Copy, PartialEq,
/// Eq, Hash`, so those must not be derived again. It also implements
/// `Display`, `FromStr` and serde's `Serialize`/`Deserialize` by name.
#[macro_export]
macro_rules! reflect_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident $(= $disc:expr)? $(=> $rename:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant $(= $disc)?,
            )*
        }

        impl $crate::core::reflect_enum::ReflectEnum for $name {
            const NAME: &'static str = ::std::stringify!($name);
            const VALUE_NAMES: &'static [$crate::core::reflect_enum::EnumValueName<Self>] = &[
                $(
                    $crate::core::reflect_enum::EnumValueName {
                        value: $name::$variant,
                        name: $crate::__reflect_enum_name!($variant $(, $rename)?),
                    },
                )*
            ];
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::reflect_enum::to_string(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::KlError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $crate::core::reflect_enum::from_string(s).ok_or_else(|| {
                    $crate::KlError::InvalidEnumValue {
                        enum_name: ::std::stringify!($name),
                        value: s.to_string(),
                    }
                })
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str($crate::core::reflect_enum::to_string(*self))
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let name: ::std::string::String =
                    $crate::__private::serde::Deserialize::deserialize(deserializer)?;
                $crate::core::reflect_enum::from_string(&name).ok_or_else(|| {
                    <D::Error as $crate::__private::serde::de::Error>::custom(::std::format!(
                        "invalid enum value: {}",
                        name
                    ))
                })
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __reflect_enum_name {
    ($variant:ident) => {
        ::std::stringify!($variant)
    };
    ($variant:ident, $rename:literal) => {
        $rename
    };
}
