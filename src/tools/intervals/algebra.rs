use std::collections::VecDeque;

use log::debug;
use thiserror::Error;

use crate::bail_config;
use crate::data_structs::coords::Interval;
use crate::data_structs::{
    IntervalMergingRule,
    IntervalSetRule,
};
use crate::data_structs::typedef::PosType;

/// Combines two interval lists with a set operator.
///
/// If either list is empty the other one is returned as is, without sorting
/// or merging. [`IntervalSetRule::Union`] concatenates the lists.
/// [`IntervalSetRule::Intersection`] expects both lists sorted and internally
/// non-overlapping, and fails when no base is shared.
pub fn merge_by_set_operator(
    set_one: &[Interval],
    set_two: &[Interval],
    rule: IntervalSetRule,
) -> anyhow::Result<Vec<Interval>> {
    if set_one.is_empty() || set_two.is_empty() {
        let other = if set_one.is_empty() { set_two } else { set_one };
        return Ok(other.to_vec());
    }

    match rule {
        IntervalSetRule::Union => Ok(set_one.iter().chain(set_two).cloned().collect()),
        IntervalSetRule::Intersection => {
            let (mut i_one, mut i_two) = (0, 0);
            let mut result = Vec::new();
            while i_one < set_one.len() && i_two < set_two.len() {
                let (one, two) = (&set_one[i_one], &set_two[i_two]);
                if two.is_before(one) {
                    i_two += 1;
                }
                else if one.is_before(two) {
                    i_one += 1;
                }
                else {
                    result.push(one.intersect(two));
                    if one.stop() < two.stop() {
                        i_one += 1;
                    }
                    else {
                        i_two += 1;
                    }
                }
            }

            if result.is_empty() {
                bail_config!("The {} of the interval lists produced no intervals", rule);
            }
            Ok(result)
        },
    }
}

/// Sorted copy of `intervals` with overlapping (and, for
/// [`IntervalMergingRule::All`], abutting) intervals combined.
pub fn sort_and_merge(
    intervals: &[Interval],
    rule: IntervalMergingRule,
) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort();
    merge_interval_locations(&sorted, rule)
}

/// Merge scan of [`sort_and_merge`] over an already sorted list.
pub fn merge_interval_locations(
    raw: &[Interval],
    rule: IntervalMergingRule,
) -> Vec<Interval> {
    let mut iter = raw.iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut merged = Vec::with_capacity(raw.len());
    let mut prev = first.clone();
    for curr in iter {
        let abutting_allowed = rule == IntervalMergingRule::All && prev.is_contiguous(curr);
        if prev.overlaps(curr) || abutting_allowed {
            prev = prev.merge(curr);
        }
        else {
            merged.push(std::mem::replace(&mut prev, curr.clone()));
        }
    }
    merged.push(prev);
    merged
}

/// Total number of bases covered by the intervals, counting overlaps twice.
pub fn interval_size(locs: &[Interval]) -> PosType {
    locs.iter().map(Interval::size).sum()
}

/// First difference found by [`equate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalDifference {
    #[error("Incompatible locs detected master={master}, test={test}")]
    Incompatible { master: Interval, test: Interval },
    #[error("Remaining elements found in test: first={0}")]
    RemainingInTest(Interval),
    #[error("Remaining elements found in master: first={0}")]
    RemainingInMaster(Interval),
}

/// Checks that `test` covers every base of `master` exactly once.
///
/// Both lists must be sorted and `master` must not contain overlapping or
/// abutting intervals (merge it with [`IntervalMergingRule::All`] first).
pub fn equate(
    master: &[Interval],
    test: &[Interval],
) -> Result<(), IntervalDifference> {
    let mut master: VecDeque<Interval> = master.iter().cloned().collect();
    let mut test: VecDeque<Interval> = test.iter().cloned().collect();

    while let Some(master_head) = master.pop_front() {
        let Some(test_head) = test.pop_front() else {
            return Err(IntervalDifference::RemainingInMaster(master_head));
        };
        if !test_head.overlaps(&master_head) {
            debug!("{} is not covered by {}", master_head, test_head);
            return Err(IntervalDifference::Incompatible {
                master: master_head,
                test:   test_head,
            });
        }
        for part in master_head.subtract(&test_head).into_iter().rev() {
            master.push_front(part);
        }
    }

    match test.pop_front() {
        None => Ok(()),
        Some(first) => Err(IntervalDifference::RemainingInTest(first)),
    }
}
