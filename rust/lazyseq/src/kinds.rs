//! Kind-named entry points for the four element kinds.
//!
//! Elements are either generic ("obj") or one of the unboxed primitives
//! `i32` ("int"), `i64` ("long") and `f64` ("double"). The adaptors
//! themselves are generic; the functions here pin the element kinds so that
//! call sites read as the transformation they perform and the compiler
//! rejects a cursor of the wrong kind.
//!
//! Mapping covers all sixteen ordered kind pairs as `map_<from>_to_<to>`.

use lazyseq_common::Result;
use lazyseq_membership::{
    DedupeOptions, DoubleMembership, IntMembership, LongMembership, Membership,
};
use paste::paste;

use crate::{
    cursor::Cursor,
    dedupe::{Dedupe, DedupeSequence},
    filtering::{ByValue, Filtering},
    mapping::Mapping,
    sequence::Sequence,
};

pub trait IntCursor: Cursor<Item = i32> {}
impl<C: Cursor<Item = i32> + ?Sized> IntCursor for C {}

pub trait LongCursor: Cursor<Item = i64> {}
impl<C: Cursor<Item = i64> + ?Sized> LongCursor for C {}

pub trait DoubleCursor: Cursor<Item = f64> {}
impl<C: Cursor<Item = f64> + ?Sized> DoubleCursor for C {}

pub trait IntSequence: Sequence<Item = i32> {}
impl<S: Sequence<Item = i32>> IntSequence for S {}

pub trait LongSequence: Sequence<Item = i64> {}
impl<S: Sequence<Item = i64>> LongSequence for S {}

pub trait DoubleSequence: Sequence<Item = f64> {}
impl<S: Sequence<Item = f64>> DoubleSequence for S {}

macro_rules! primitive_kind {
    ($kind:ident: $T:ty, $membership:ident) => {
        paste! {
            /// Keeps the elements accepted by the by-value `predicate`.
            pub fn [<filter_ $kind>]<C, F>(cursor: C, predicate: F) -> Result<Filtering<C, ByValue<F>>>
            where
                C: Cursor<Item = $T>,
                F: FnMut($T) -> bool,
            {
                Filtering::new(cursor, ByValue(predicate))
            }

            /// Drops repeated elements, using the membership structure selected by
            /// `options`.
            pub fn [<dedupe_ $kind>]<C>(cursor: C, options: DedupeOptions) -> Result<Filtering<C, Dedupe<$membership>>>
            where
                C: Cursor<Item = $T>,
            {
                Filtering::dedupe(cursor, $membership::from_options(options))
            }

            /// Sequence of the distinct elements of `source`, with fresh membership
            /// per cursor.
            pub fn [<dedupe_ $kind _sequence>]<S>(
                source: S,
                options: DedupeOptions,
            ) -> DedupeSequence<S, impl Fn() -> $membership + Clone>
            where
                S: Sequence<Item = $T>,
            {
                DedupeSequence::new(source, move || $membership::from_options(options))
            }
        }
    };
}

/// Construction of a primitive membership structure from [`DedupeOptions`].
trait FromOptions {
    fn from_options(options: DedupeOptions) -> Self;
}

impl FromOptions for IntMembership {
    fn from_options(options: DedupeOptions) -> Self {
        IntMembership::new(options.int_set)
    }
}

impl FromOptions for LongMembership {
    fn from_options(options: DedupeOptions) -> Self {
        LongMembership::new(options.int_set)
    }
}

impl FromOptions for DoubleMembership {
    fn from_options(options: DedupeOptions) -> Self {
        DoubleMembership::new(options.float_equality)
    }
}

primitive_kind!(int: i32, IntMembership);
primitive_kind!(long: i64, LongMembership);
primitive_kind!(double: f64, DoubleMembership);

macro_rules! map_primitive_to_primitive {
    ($from:ident: $src:ty => $($to:ident: $dst:ty),+) => {
        paste! {
            $(
                /// Maps between two primitive element kinds.
                #[inline]
                pub fn [<map_ $from _to_ $to>]<C, F>(cursor: C, f: F) -> Mapping<C, F>
                where
                    C: Cursor<Item = $src>,
                    F: FnMut($src) -> $dst,
                {
                    Mapping::new(cursor, f)
                }
            )+
        }
    };
}

map_primitive_to_primitive!(int: i32 => int: i32, long: i64, double: f64);
map_primitive_to_primitive!(long: i64 => int: i32, long: i64, double: f64);
map_primitive_to_primitive!(double: f64 => int: i32, long: i64, double: f64);

macro_rules! map_with_obj {
    ($($kind:ident: $T:ty),+) => {
        paste! {
            $(
                /// Maps primitive elements to a generic element type.
                #[inline]
                pub fn [<map_ $kind _to_obj>]<C, F, B>(cursor: C, f: F) -> Mapping<C, F>
                where
                    C: Cursor<Item = $T>,
                    F: FnMut($T) -> B,
                {
                    Mapping::new(cursor, f)
                }

                /// Maps generic elements to a primitive kind.
                #[inline]
                pub fn [<map_obj_to_ $kind>]<C, F>(cursor: C, f: F) -> Mapping<C, F>
                where
                    C: Cursor,
                    F: FnMut(C::Item) -> $T,
                {
                    Mapping::new(cursor, f)
                }

                /// Unboxes generic elements convertible to the primitive kind.
                #[inline]
                pub fn [<as_ $kind>]<C>(cursor: C) -> Mapping<C, fn(C::Item) -> $T>
                where
                    C: Cursor,
                    C::Item: Into<$T>,
                {
                    Mapping::new(cursor, <C::Item as Into<$T>>::into as fn(C::Item) -> $T)
                }
            )+
        }
    };
}

map_with_obj!(int: i32, long: i64, double: f64);

/// Maps generic elements to another generic element type.
#[inline]
pub fn map_obj_to_obj<C, F, B>(cursor: C, f: F) -> Mapping<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> B,
{
    Mapping::new(cursor, f)
}

/// Number of distinct values a dedupe cursor has let through so far.
pub fn distinct_count<C, M, T>(cursor: &Filtering<C, Dedupe<M>>) -> usize
where
    C: Cursor<Item = T>,
    M: Membership<T>,
{
    cursor.predicate().membership().len()
}
