//! "Test-and-insert" membership structures used for deduplicating sequences.
//!
//! A membership structure answers a single question per element: was this
//! value seen before? [`Membership::insert_new`] records the value and returns
//! `true` only on its first occurrence. The filtering adaptors of `lazyseq`
//! accept any implementation of this trait, so callers can plug in their own
//! set type.
//!
//! # Key Types
//!
//! - [`HashMembership`] - Generic membership for `Eq + Hash` elements
//! - [`IntMembership`] / [`LongMembership`] - Integer membership, hashed or bitmap-backed
//! - [`DoubleMembership`] - `f64` membership with a selectable equality convention
//! - [`DedupeOptions`] - Configuration selecting the structures above

pub mod config;
pub mod float;
pub mod int;
pub mod membership;

pub use config::{DedupeOptions, FloatEquality, IntSetKind};
pub use float::DoubleMembership;
pub use int::{IntMembership, LongMembership};
pub use membership::{HashMembership, Membership};
