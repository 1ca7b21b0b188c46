//! Compile-time type lists.
//!
//! A type pack is built from [`Nil`] and [`Cons`], usually through
//! [`type_pack!`](crate::type_pack). Operations are traits resolved by the
//! compiler and have no runtime footprint.
//!
//! ```
//! use kl_toolkit::type_pack;
//! use kl_toolkit::core::meta::{FilterT, False, Predicate, True, TypeList};
//!
//! struct IsInteger;
//! impl Predicate<i32> for IsInteger { type Holds = True; }
//! impl Predicate<u8> for IsInteger { type Holds = True; }
//! impl Predicate<f64> for IsInteger { type Holds = False; }
//!
//! type Integers = FilterT<IsInteger, type_pack![i32, f64, u8]>;
//! assert_eq!(<Integers as TypeList>::LEN, 2);
//! assert_eq!(<Integers as TypeList>::type_names(), vec!["i32", "u8"]);
//! ```

use std::marker::PhantomData;

/// The empty type pack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nil;

/// A type pack with head `H` and tail `T`.
pub struct Cons<H, T>(PhantomData<fn() -> (H, T)>);

pub trait TypeList {
    const LEN: usize;

    /// `std::any::type_name` of every element, in order.
    fn type_names() -> Vec<&'static str> {
        let mut names = Vec::with_capacity(Self::LEN);
        Self::collect_names(&mut names);
        names
    }

    #[doc(hidden)]
    fn collect_names(out: &mut Vec<&'static str>);
}

impl TypeList for Nil {
    const LEN: usize = 0;

    fn collect_names(_out: &mut Vec<&'static str>) {}
}

impl<H, T: TypeList> TypeList for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;

    fn collect_names(out: &mut Vec<&'static str>) {
        out.push(std::any::type_name::<H>());
        T::collect_names(out);
    }
}

/// Builds a type pack: `type_pack![A, B, C]` is `Cons<A, Cons<B, Cons<C, Nil>>>`.
#[macro_export]
macro_rules! type_pack {
    () => { $crate::core::meta::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::core::meta::Cons<$head, $crate::type_pack![$($tail),*]>
    };
}

/// Adds `T` to the front of a pack.
pub trait PushFront<T> {
    type Output: TypeList;
}

impl<T, L: TypeList> PushFront<T> for L {
    type Output = Cons<T, L>;
}

pub type PushFrontT<T, L> = <L as PushFront<T>>::Output;

/// Type-level boolean.
pub trait Bool {
    const VALUE: bool;
}

pub struct True;
pub struct False;

impl Bool for True {
    const VALUE: bool = true;
}

impl Bool for False {
    const VALUE: bool = false;
}

/// Picks `Then` or `Else` depending on the implementing [`Bool`].
pub trait Branch<Then: TypeList, Else: TypeList> {
    type Output: TypeList;
}

impl<Then: TypeList, Else: TypeList> Branch<Then, Else> for True {
    type Output = Then;
}

impl<Then: TypeList, Else: TypeList> Branch<Then, Else> for False {
    type Output = Else;
}

/// A compile-time predicate over types, implemented once per accepted
/// element type.
pub trait Predicate<T> {
    type Holds: Bool;
}

/// Keeps the elements whose predicate holds, preserving their order.
pub trait Filter<P> {
    type Output: TypeList;
}

impl<P> Filter<P> for Nil {
    type Output = Nil;
}

impl<P, H, T> Filter<P> for Cons<H, T>
where
    P: Predicate<H>,
    T: Filter<P>,
    <P as Predicate<H>>::Holds: Branch<Cons<H, <T as Filter<P>>::Output>, <T as Filter<P>>::Output>,
{
    type Output = <<P as Predicate<H>>::Holds as Branch<
        Cons<H, <T as Filter<P>>::Output>,
        <T as Filter<P>>::Output,
    >>::Output;
}

pub type FilterT<P, L> = <L as Filter<P>>::Output;

/// Fully qualified name of `T`.
pub fn type_name<T: ?Sized>() -> &'static str {
    std::any::type_name::<T>()
}

/// Name of `T` without its module path; generic arguments are kept as is.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    match base.rfind("::") {
        Some(pos) => &full[pos + 2..],
        None => full,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    fn type_ids<L: TypeIds>() -> Vec<TypeId> {
        let mut out = Vec::new();
        L::push_ids(&mut out);
        out
    }

    trait TypeIds {
        fn push_ids(out: &mut Vec<TypeId>);
    }

    impl TypeIds for Nil {
        fn push_ids(_out: &mut Vec<TypeId>) {}
    }

    impl<H: 'static, T: TypeIds> TypeIds for Cons<H, T> {
        fn push_ids(out: &mut Vec<TypeId>) {
            out.push(TypeId::of::<H>());
            T::push_ids(out);
        }
    }

    struct IsFloat;
    impl Predicate<f32> for IsFloat {
        type Holds = True;
    }
    impl Predicate<f64> for IsFloat {
        type Holds = True;
    }
    impl Predicate<i32> for IsFloat {
        type Holds = False;
    }
    impl Predicate<u8> for IsFloat {
        type Holds = False;
    }
    impl Predicate<String> for IsFloat {
        type Holds = False;
    }

    #[test]
    fn test_len() {
        assert_eq!(<Nil as TypeList>::LEN, 0);
        assert_eq!(<type_pack![i32] as TypeList>::LEN, 1);
        assert_eq!(<type_pack![i32, u8, String] as TypeList>::LEN, 3);
    }

    #[test]
    fn test_push_front() {
        type Pack = PushFrontT<f32, type_pack![i32, u8]>;
        assert_eq!(
            type_ids::<Pack>(),
            vec![TypeId::of::<f32>(), TypeId::of::<i32>(), TypeId::of::<u8>()]
        );
    }

    #[test]
    fn test_filter_preserves_order() {
        type Pack = type_pack![f64, i32, String, f32, u8];
        type Floats = FilterT<IsFloat, Pack>;
        assert_eq!(<Floats as TypeList>::LEN, 2);
        assert_eq!(type_ids::<Floats>(), vec![TypeId::of::<f64>(), TypeId::of::<f32>()]);
    }

    #[test]
    fn test_filter_nothing_matches() {
        type Empty = FilterT<IsFloat, type_pack![i32, u8]>;
        assert_eq!(<Empty as TypeList>::LEN, 0);
        assert_eq!(TypeId::of::<Empty>(), TypeId::of::<Nil>());
    }

    #[test]
    fn test_filter_empty_pack() {
        assert_eq!(<FilterT<IsFloat, Nil> as TypeList>::LEN, 0);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(<type_pack![i32, u8] as TypeList>::type_names(), vec!["i32", "u8"]);
        assert_eq!(short_type_name::<Nil>(), "Nil");
        assert_eq!(short_type_name::<Vec<u8>>(), "Vec<u8>");
        assert_eq!(short_type_name::<u8>(), "u8");
        assert!(type_name::<Nil>().ends_with("meta::Nil"));
    }
}
