//! Core data structures of the crate.
//!
//! - [`coords`]: genomic intervals ([`Interval`]) and the classification of
//!   user-supplied interval tokens ([`IntervalToken`]).
//! - [`events`]: haplotype alignments against a reference window and the
//!   variant events decoded from them ([`VariantEvent`], [`EventMap`]).
//! - Enumerations of set operators, merging rules and variant shapes.
//! - [`typedef`]: aliases for positions, offsets and sequence names.
//!
//! [`Interval`]: coords::Interval
//! [`IntervalToken`]: coords::IntervalToken
//! [`VariantEvent`]: events::VariantEvent
//! [`EventMap`]: events::EventMap

pub mod coords;
mod enums;
pub mod events;
pub mod typedef;

#[cfg(test)]
mod tests;

pub use enums::{
    IntervalMergingRule,
    IntervalSetRule,
    VariantType,
};
