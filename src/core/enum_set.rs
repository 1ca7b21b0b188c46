use std::fmt;
use std::marker::PhantomData;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::reflect_enum::{self, ReflectEnum};

/// A flag-valued enum: each value maps to a bit pattern.
pub trait EnumFlag: Copy {
    /// Bits covered by the enum's underlying type.
    const MASK: u64;

    fn bits(self) -> u64;
}

/// Implements [`EnumFlag`] for fieldless enums through their discriminants.
///
/// Each enum is paired with its `#[repr]` type: `impl_enum_flag!(Mode: u32)`.
#[macro_export]
macro_rules! impl_enum_flag {
    ($($ty:ty : $repr:ty),+ $(,)?) => {
        $(
            impl $crate::core::enum_set::EnumFlag for $ty {
                const MASK: u64 = u64::MAX >> (64 - 8 * ::std::mem::size_of::<$repr>());

                fn bits(self) -> u64 {
                    (self as u64) & <Self as $crate::core::enum_set::EnumFlag>::MASK
                }
            }
        )+
    };
}

/// A set of flags of enum `E`, stored as the union of their bits.
pub struct EnumSet<E> {
    bits: u64,
    _enum: PhantomData<fn() -> E>,
}

impl<E> EnumSet<E> {
    pub const fn new() -> Self {
        Self {
            bits: 0,
            _enum: PhantomData,
        }
    }

    pub const fn bits(&self) -> u64 {
        self.bits
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl<E: EnumFlag> EnumSet<E> {
    /// Bits outside the underlying type of `E` are dropped.
    pub const fn from_bits(bits: u64) -> Self {
        Self {
            bits: bits & E::MASK,
            _enum: PhantomData,
        }
    }

    /// Same as [`has_all`](Self::has_all) for a single flag.
    pub fn test(&self, flag: E) -> bool {
        self.has_all(flag)
    }

    pub fn has_any(&self, other: impl Into<EnumSet<E>>) -> bool {
        (self.bits & other.into().bits) != 0
    }

    pub fn has_all(&self, other: impl Into<EnumSet<E>>) -> bool {
        let other = other.into();
        (self.bits & other.bits) == other.bits
    }

    pub fn insert(&mut self, other: impl Into<EnumSet<E>>) {
        self.bits |= other.into().bits;
    }

    pub fn remove(&mut self, other: impl Into<EnumSet<E>>) {
        self.bits &= !other.into().bits;
    }
}

impl<E: EnumFlag + ReflectEnum> EnumSet<E> {
    /// Declared, non-zero flags fully contained in the set, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = E> + '_ {
        reflect_enum::reflect::<E>()
            .values()
            .filter(move |flag| flag.bits() != 0 && self.test(*flag))
    }
}

impl<E> Clone for EnumSet<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EnumSet<E> {}

impl<E> Default for EnumSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> PartialEq for EnumSet<E> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<E> Eq for EnumSet<E> {}

impl<E> std::hash::Hash for EnumSet<E> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<E: EnumFlag> PartialEq<E> for EnumSet<E> {
    fn eq(&self, other: &E) -> bool {
        self.bits == other.bits()
    }
}

impl<E> fmt::Debug for EnumSet<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnumSet({:#x})", self.bits)
    }
}

impl<E: EnumFlag> From<E> for EnumSet<E> {
    fn from(flag: E) -> Self {
        Self::from_bits(flag.bits())
    }
}

impl<E: EnumFlag> FromIterator<E> for EnumSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = Self::new();
        for flag in iter {
            set.insert(flag);
        }
        set
    }
}

impl<E: EnumFlag> Not for EnumSet<E> {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_bits(!self.bits)
    }
}

macro_rules! set_operator {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $tok:tt) => {
        impl<E: EnumFlag, R: Into<EnumSet<E>>> $op<R> for EnumSet<E> {
            type Output = Self;

            fn $method(self, rhs: R) -> Self {
                Self::from_bits(self.bits $tok rhs.into().bits)
            }
        }

        impl<E: EnumFlag, R: Into<EnumSet<E>>> $assign_op<R> for EnumSet<E> {
            fn $assign_method(&mut self, rhs: R) {
                *self = *self $tok rhs;
            }
        }
    };
}

set_operator!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
set_operator!(BitOr, bitor, BitOrAssign, bitor_assign, |);
set_operator!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl<E: EnumFlag + ReflectEnum> Serialize for EnumSet<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let names: Vec<&'static str> = self.iter().map(reflect_enum::to_string).collect();
        let mut seq = serializer.serialize_seq(Some(names.len()))?;
        for name in names {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

struct EnumSetVisitor<E>(PhantomData<fn() -> E>);

impl<'de, E: EnumFlag + ReflectEnum> Visitor<'de> for EnumSetVisitor<E> {
    type Value = EnumSet<E>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an array of {} names", E::NAME)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut set = EnumSet::new();
        while let Some(name) = seq.next_element::<String>()? {
            let flag = reflect_enum::from_string::<E>(&name)
                .ok_or_else(|| de::Error::custom(format!("invalid enum value: {}", name)))?;
            set |= flag;
        }
        Ok(set)
    }
}

impl<'de, E: EnumFlag + ReflectEnum> Deserialize<'de> for EnumSet<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(EnumSetVisitor(PhantomData))
    }
}
