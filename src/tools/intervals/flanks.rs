use anyhow::anyhow;
use hashbrown::HashMap;
use itertools::Itertools;

use super::sort_and_merge;
use crate::data_structs::coords::Interval;
use crate::data_structs::IntervalMergingRule;
use crate::data_structs::typedef::{
    PosType,
    SeqNameStr,
};
use crate::error::LocusError;

/// Contig lengths by contig name.
pub type ContigLengths = HashMap<SeqNameStr, PosType>;

fn contig_length(
    contig_lengths: &ContigLengths,
    loc: &Interval,
) -> anyhow::Result<PosType> {
    let length = contig_lengths.get(loc.contig()).copied().ok_or_else(|| {
        anyhow!(LocusError::malformed(
            loc.to_string(),
            format!("contig {} has no known length", loc.contig())
        ))
    })?;
    if loc.stop() > length {
        return Err(LocusError::malformed(
            loc.to_string(),
            format!("interval ends past the contig length {}", length),
        )
        .into());
    }
    Ok(length)
}

/// Every interval widened by `base_pairs` on both sides, sorted and merged.
pub fn intervals_with_flanks(
    locs: &[Interval],
    base_pairs: PosType,
    contig_lengths: &ContigLengths,
) -> anyhow::Result<Vec<Interval>> {
    let padded: Vec<Interval> = locs
        .iter()
        .map(|loc| -> anyhow::Result<Interval> {
            Ok(loc.padded(base_pairs, contig_length(contig_lengths, loc)?))
        })
        .collect::<anyhow::Result<_>>()?;
    Ok(sort_and_merge(&padded, IntervalMergingRule::All))
}

/// Up to `base_pairs` bases directly before `loc`.
fn flank_at_start(
    loc: &Interval,
    base_pairs: PosType,
) -> Option<Interval> {
    if loc.start() == 1 || base_pairs == 0 {
        return None;
    }
    Some(loc.with_bounds(
        loc.start().saturating_sub(base_pairs).max(1),
        loc.start() - 1,
    ))
}

/// Up to `base_pairs` bases directly after `loc`.
fn flank_at_stop(
    loc: &Interval,
    base_pairs: PosType,
    contig_length: PosType,
) -> Option<Interval> {
    if loc.stop() >= contig_length || base_pairs == 0 {
        return None;
    }
    Some(loc.with_bounds(
        loc.stop() + 1,
        (loc.stop() + base_pairs).min(contig_length),
    ))
}

/// The regions of `base_pairs` bases around the merged intervals, excluding
/// the intervals themselves.
///
/// Flanks of neighbouring intervals that touch or overlap are combined into
/// one interval running from the left flank's start to the right flank's
/// stop.
pub fn flanking_intervals(
    locs: &[Interval],
    base_pairs: PosType,
    contig_lengths: &ContigLengths,
) -> anyhow::Result<Vec<Interval>> {
    let sorted = sort_and_merge(locs, IntervalMergingRule::All);
    let mut expanded = Vec::new();

    for (_, contig_locs) in &sorted.iter().chunk_by(|loc| loc.contig_index()) {
        let contig_locs = contig_locs.collect_vec();
        let (Some(first), Some(last)) = (contig_locs.first(), contig_locs.last()) else {
            continue;
        };
        let length = contig_length(contig_lengths, last)?;

        expanded.extend(flank_at_start(first, base_pairs));
        for (left, right) in contig_locs.iter().tuple_windows() {
            let stop_flank = flank_at_stop(left, base_pairs, length);
            let start_flank = flank_at_start(right, base_pairs);
            match (stop_flank, start_flank) {
                (Some(stop_flank), Some(start_flank))
                    if stop_flank.stop() + 1 >= start_flank.start() =>
                {
                    expanded.push(stop_flank.with_bounds(stop_flank.start(), start_flank.stop()));
                },
                (stop_flank, start_flank) => {
                    expanded.extend(stop_flank);
                    expanded.extend(start_flank);
                },
            }
        }
        expanded.extend(flank_at_stop(last, base_pairs, length));
    }
    Ok(expanded)
}
