pub use crate::data_structs::coords::{
    Interval,
    IntervalToken,
};
pub use crate::data_structs::events::{
    all_variant_events,
    build_event_maps_for_haplotypes,
    ComplexityPolicy,
    EventMap,
    EventMapConfig,
    Haplotype,
    HaplotypeAlignment,
    MaxIndelsPolicy,
    NeverTooComplex,
    ReferenceWindow,
    VariantEvent,
};
pub use crate::data_structs::typedef::{
    OffsetType,
    PosType,
    SeqNameStr,
};
pub use crate::data_structs::{
    IntervalMergingRule,
    IntervalSetRule,
    VariantType,
};
pub use crate::error::LocusError;
pub use crate::tools::intervals::{
    equate,
    flanking_intervals,
    flatten_split_intervals,
    interval_size,
    intervals_with_flanks,
    merge_by_set_operator,
    merge_interval_locations,
    scatter_contig_intervals,
    scatter_fixed_intervals,
    sort_and_merge,
    split_fixed_intervals,
    split_intervals_to_sublists,
    split_locus_intervals,
    ContigLengths,
    IntervalDifference,
    ScatterInterval,
};
