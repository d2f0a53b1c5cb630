use std::collections::VecDeque;

use itertools::Itertools;
use log::{
    debug,
    trace,
};
use serde::{
    Deserialize,
    Serialize,
};

use super::interval_size;
use crate::bail_config;
use crate::data_structs::coords::Interval;
use crate::data_structs::typedef::PosType;

/// Splits `locs` into exactly `num_parts` runs of consecutive intervals with
/// roughly equal covered length.
///
/// Intervals are never cut. Concatenating the parts gives back `locs`.
pub fn split_fixed_intervals(
    locs: &[Interval],
    num_parts: usize,
) -> anyhow::Result<Vec<Vec<Interval>>> {
    if num_parts == 0 {
        bail_config!("Cannot scatter {} locs into 0 parts", locs.len());
    }
    if locs.len() < num_parts {
        bail_config!("Cannot scatter {} locs into {} parts", locs.len(), num_parts);
    }

    let locs_size = interval_size(locs);
    let mut split_points = Vec::with_capacity(num_parts);
    add_fixed_split(&mut split_points, locs, locs_size, 0, locs.len(), num_parts);
    split_points.sort_unstable();
    split_points.push(locs.len());
    trace!("Fixed split points {:?}", split_points);

    Ok(split_intervals_to_sublists(locs, &split_points))
}

fn add_fixed_split(
    split_points: &mut Vec<usize>,
    locs: &[Interval],
    locs_size: PosType,
    start_index: usize,
    stop_index: usize,
    num_parts: usize,
) {
    if num_parts < 2 {
        return;
    }
    let half_parts = num_parts.div_ceil(2);
    let (split_index, split_size) = fixed_split(
        locs,
        locs_size,
        start_index,
        stop_index,
        half_parts,
        num_parts - half_parts,
    );
    split_points.push(split_index);
    add_fixed_split(
        split_points,
        locs,
        split_size,
        start_index,
        split_index,
        half_parts,
    );
    add_fixed_split(
        split_points,
        locs,
        locs_size - split_size,
        split_index,
        stop_index,
        num_parts - half_parts,
    );
}

/// Boundary of the left half: at least `min_locs` intervals on the left, at
/// least `max_locs` on the right, otherwise as close to half the covered
/// length as possible.
fn fixed_split(
    locs: &[Interval],
    locs_size: PosType,
    start_index: usize,
    stop_index: usize,
    min_locs: usize,
    max_locs: usize,
) -> (usize, PosType) {
    let mut split_index = start_index + min_locs;
    let mut split_size = interval_size(&locs[start_index..split_index]);
    let half_size = locs_size / 2;
    while split_index < stop_index - max_locs && split_size < half_size {
        split_size += locs[split_index].size();
        split_index += 1;
    }
    (split_index, split_size)
}

/// Cuts `locs` at the given stop indices. Each stop closes one sublist.
pub fn split_intervals_to_sublists(
    locs: &[Interval],
    splits: &[usize],
) -> Vec<Vec<Interval>> {
    let mut start = 0;
    splits
        .iter()
        .map(|&stop| {
            let sublist = locs[start..stop].to_vec();
            start = stop;
            sublist
        })
        .collect()
}

pub fn flatten_split_intervals(splits: &[Vec<Interval>]) -> Vec<Interval> {
    splits.iter().flatten().cloned().collect()
}

/// Splits `locs` into `num_parts` parts of equal covered length, cutting
/// intervals where needed.
///
/// Every part but the last covers `max(total / num_parts, 1)` bases; the last
/// one takes whatever is left. Fewer parts are returned when the input runs
/// out first.
pub fn split_locus_intervals(
    locs: &[Interval],
    num_parts: usize,
) -> anyhow::Result<Vec<Vec<Interval>>> {
    if num_parts == 0 {
        bail_config!("Cannot split {} locs into 0 parts", locs.len());
    }

    let total = interval_size(locs);
    let ideal_split_size = (total / num_parts as PosType).max(1);
    debug!(
        "Splitting {} bp into {} parts of {} bp",
        total, num_parts, ideal_split_size
    );

    let mut remaining: VecDeque<Interval> = locs.iter().cloned().collect();
    let mut splits = Vec::with_capacity(num_parts);
    while !remaining.is_empty() {
        if splits.len() + 1 == num_parts {
            splits.push(remaining.drain(..).collect_vec());
        }
        else {
            splits.push(take_split(&mut remaining, ideal_split_size));
        }
    }
    Ok(splits)
}

/// Pops intervals off the queue until they cover exactly `ideal_split_size`
/// bases, cutting the last one if it overshoots.
fn take_split(
    remaining: &mut VecDeque<Interval>,
    ideal_split_size: PosType,
) -> Vec<Interval> {
    let mut split = Vec::new();
    let mut size = 0;
    while let Some(head) = remaining.pop_front() {
        let new_size = size + head.size();
        if new_size == ideal_split_size {
            split.push(head);
            break;
        }
        else if new_size > ideal_split_size {
            let cut_point = head.start() + (ideal_split_size - size);
            let (left, right) = head.split_at(cut_point);
            remaining.push_front(right);
            remaining.push_front(left);
        }
        else {
            split.push(head);
            size = new_size;
        }
    }
    split
}

/// Interval assigned to a scatter output, with the name it is written under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScatterInterval {
    pub interval: Interval,
    pub name:     String,
}

impl ScatterInterval {
    /// Names follow the `interval_<k>` scheme, `k` counting from 1 across all
    /// outputs.
    fn numbered(
        interval: Interval,
        index: usize,
    ) -> Self {
        Self {
            interval,
            name: format!("interval_{}", index),
        }
    }
}

/// Distributes `locs` over `n_outputs` outputs so that a contig is never
/// shared by two outputs, opening a new output at every contig change while
/// outputs remain. The last output collects the remaining contigs.
///
/// Fails if there are fewer contigs than outputs.
pub fn scatter_contig_intervals(
    locs: &[Interval],
    n_outputs: usize,
) -> anyhow::Result<Vec<Vec<ScatterInterval>>> {
    let mut outputs: Vec<Vec<ScatterInterval>> = Vec::with_capacity(n_outputs);
    let mut contig: Option<usize> = None;
    for (index, loc) in locs.iter().enumerate() {
        let contig_changed = contig != Some(loc.contig_index());
        if outputs.len() < n_outputs && contig_changed {
            outputs.push(Vec::new());
            contig = Some(loc.contig_index());
        }
        let Some(current) = outputs.last_mut() else {
            bail_config!("Cannot scatter intervals into 0 outputs");
        };
        current.push(ScatterInterval::numbered(loc.clone(), index + 1));
    }

    if outputs.len() != n_outputs {
        bail_config!(
            "Only able to write contigs into {} of {} outputs",
            outputs.len(),
            n_outputs
        );
    }
    Ok(outputs)
}

/// One output per precomputed part, see [`split_fixed_intervals`].
pub fn scatter_fixed_intervals(
    splits: &[Vec<Interval>],
    n_outputs: usize,
) -> anyhow::Result<Vec<Vec<ScatterInterval>>> {
    if splits.len() != n_outputs {
        bail_config!(
            "Split points {} does not equal the number of scatter parts {}",
            splits.len(),
            n_outputs
        );
    }

    let mut loc_index = 0;
    Ok(splits
        .iter()
        .map(|split| {
            split
                .iter()
                .map(|loc| {
                    loc_index += 1;
                    ScatterInterval::numbered(loc.clone(), loc_index)
                })
                .collect_vec()
        })
        .collect())
}
