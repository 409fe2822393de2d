//! Lazy, single-pass sequence adaptors over generic and unboxed numeric
//! elements.
//!
//! This crate provides composable views over pull-based sequences:
//!
//! - **Filtering**: Lookahead filtering with stateless predicates, deduplication
//!   and suppression of absent elements
//! - **Mapping**: Element-wise transformation between any two element kinds
//! - **Ranges**: Closed, directional integer intervals that are safe at the
//!   representable extremes
//!
//! # Key Types
//!
//! - [`Cursor`] - The consumer protocol: `has_next` / `next` / `remove`
//! - [`Sequence`] - A restartable descriptor that hands out fresh cursors
//! - [`Filtering`] - Lookahead filtering cursor, shared by every element kind
//! - [`Mapping`] - Transforming cursor without buffering
//! - [`RangeSequence`] - Ascending or descending closed integer interval
//!
//! Element kinds are `i32`, `i64`, `f64` and any other type. The adaptors are
//! generic and monomorphized per kind, so the numeric instances never box.
//! [`kinds`] offers kind-named constructors for all of them.

pub mod bridge;
pub mod cursor;
pub mod dedupe;
pub mod filtering;
pub mod kinds;
mod lookahead;
pub mod mapping;
pub mod non_null;
pub mod range;
pub mod sequence;

pub use bridge::{IterCursor, VecCursor};
pub use cursor::{Cursor, CursorExt, CursorIter};
pub use dedupe::{Dedupe, DedupeSequence};
pub use filtering::{ByValue, Filtering, FilteringSequence, Predicate};
pub use mapping::{Mapping, MappingSequence, TryMapping, TryMappingSequence};
pub use non_null::{NonNull, NonNullSequence, Nullable};
pub use range::{IntRange, LongRange, RangeCursor, RangeSequence};
pub use sequence::{Sequence, SequenceExt};

pub use lazyseq_common::{Error, ErrorKind, Result};
pub use lazyseq_membership::{DedupeOptions, FloatEquality, IntSetKind, Membership};
