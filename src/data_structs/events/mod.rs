//! Variant events decoded from haplotype alignments.
//!
//! A haplotype is aligned against a [`ReferenceWindow`]; walking its
//! alignment operations produces one [`VariantEvent`] per difference, which
//! are collected into an [`EventMap`] keyed by start position. Events that
//! collide on a start are merged, and dense chains of events can be collapsed
//! into block substitutions (see
//! [`EventMap::replace_clumped_events_with_block_substitutions`]).
//!
//! [`build_event_maps_for_haplotypes`] does this for a whole set of
//! haplotypes on the crate thread pool.

mod alignment;
mod config;
mod event_map;
mod haplotype;
mod variant;

pub use alignment::{
    HaplotypeAlignment,
    ReferenceWindow,
};
pub use config::{
    ComplexityPolicy,
    EventMapConfig,
    MaxIndelsPolicy,
    NeverTooComplex,
    DEFAULT_MAX_GAP_BETWEEN_EVENTS,
    MIN_EVENTS_FOR_BLOCK_SUBSTITUTION,
};
pub use event_map::EventMap;
pub use haplotype::{
    all_variant_events,
    build_event_maps_for_haplotypes,
    Haplotype,
};
pub use variant::VariantEvent;
