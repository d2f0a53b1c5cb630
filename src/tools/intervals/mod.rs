//! Operations on interval lists.
//!
//! - Set algebra: [`merge_by_set_operator`], [`sort_and_merge`] and the
//!   coverage check [`equate`].
//! - Partitioning: [`split_fixed_intervals`] keeps intervals whole and
//!   balances covered length across parts, [`split_locus_intervals`] cuts
//!   intervals to give every part the same number of bases. The `scatter_*`
//!   functions turn a partition into named intervals per output.
//! - Flanks: [`intervals_with_flanks`] and [`flanking_intervals`].
//!
//! All functions take their input by reference and return new lists.

mod algebra;
mod flanks;
mod partition;

pub use algebra::{
    equate,
    interval_size,
    merge_by_set_operator,
    merge_interval_locations,
    sort_and_merge,
    IntervalDifference,
};
pub use flanks::{
    flanking_intervals,
    intervals_with_flanks,
    ContigLengths,
};
pub use partition::{
    flatten_split_intervals,
    scatter_contig_intervals,
    scatter_fixed_intervals,
    split_fixed_intervals,
    split_intervals_to_sublists,
    split_locus_intervals,
    ScatterInterval,
};
