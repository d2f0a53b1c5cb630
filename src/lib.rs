//! # locuskit
//!
//! `locuskit` is a Rust library for the coordinate bookkeeping that sits
//! under variant calling: manipulating lists of genomic intervals and
//! decoding candidate haplotypes into the variant events they carry.
//!
//! ## Key Features
//!
//! * **Interval algebra**: union and intersection of interval lists, sorting
//!   with merging of overlapping or abutting intervals, and an exact coverage
//!   check between two lists ([`equate`]).
//! * **Partitioning**: splitting an interval list into a fixed number of
//!   parts, either by whole intervals balanced on covered length
//!   ([`split_fixed_intervals`]) or by cutting intervals into equal numbers
//!   of bases ([`split_locus_intervals`]), plus scatter helpers that name the
//!   intervals of each output.
//! * **Flanks**: padded intervals and the flanking regions around them.
//! * **Event maps**: decoding a haplotype alignment against a reference
//!   window into SNPs, insertions, deletions and block substitutions, merging
//!   events that share a start and optionally collapsing dense clusters of
//!   events into a single block ([`EventMap`]).
//! * **Parallel processing**: event maps of a haplotype set are built on a
//!   Rayon pool ([`build_event_maps_for_haplotypes`]).
//!
//! Number of threads to be used can be configured with setting
//! `LOCUSKIT_NUM_THREADS` environment variable.
//!
//! ## Structure
//!
//! * [`data_structs`]: intervals, interval tokens, variant events, haplotype
//!   alignments and event maps.
//! * [`tools`]: interval algebra, partitioning and flanks.
//! * [`error`]: the [`LocusError`] taxonomy carried inside
//!   [`anyhow::Error`].
//! * [`utils`]: the thread pool, builder macros and base predicates.
//!
//! ## Usage
//!
//! ### Intersecting two interval lists
//!
//! ```
//! use locuskit::prelude::*;
//!
//! let a = vec![Interval::new("chr1", 0, 1, 100)];
//! let b = vec![Interval::new("chr1", 0, 50, 150)];
//! let both = merge_by_set_operator(&a, &b, IntervalSetRule::Intersection).unwrap();
//! assert_eq!(both, vec![Interval::new("chr1", 0, 50, 100)]);
//! ```
//!
//! ### Decoding a haplotype
//!
//! ```
//! use locuskit::prelude::*;
//! use noodles::sam::alignment::record::cigar::op::Kind;
//! use noodles::sam::alignment::record::cigar::Op;
//!
//! let window = ReferenceWindow::new(b"ACGTACGT".to_vec(), Interval::new("chr1", 0, 101, 108));
//! let alignment = HaplotypeAlignment::new(b"ACGAACGT".to_vec(), [Op::new(Kind::Match, 8)], 0);
//! let events = EventMap::from_alignment(&alignment, window, "hap0", &EventMapConfig::default());
//! assert_eq!(events.start_positions().collect::<Vec<_>>(), vec![104]);
//! ```
//!
//! [`equate`]: tools::intervals::equate
//! [`split_fixed_intervals`]: tools::intervals::split_fixed_intervals
//! [`split_locus_intervals`]: tools::intervals::split_locus_intervals
//! [`EventMap`]: data_structs::events::EventMap
//! [`build_event_maps_for_haplotypes`]: data_structs::events::build_event_maps_for_haplotypes
//! [`LocusError`]: error::LocusError

pub mod data_structs;
pub mod error;
pub mod prelude;
pub mod tools;
pub mod utils;
