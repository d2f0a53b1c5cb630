use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::ops::Bound;

use itertools::Itertools;
use log::{
    debug,
    info,
    trace,
};
use noodles::sam::alignment::record::cigar::op::Kind;

use super::{
    EventMapConfig,
    HaplotypeAlignment,
    ReferenceWindow,
    VariantEvent,
};
use crate::data_structs::VariantType;
use crate::data_structs::typedef::{
    PosType,
    SeqNameStr,
};
use crate::utils::{
    is_all_regular_bases,
    is_regular_base,
    prefix_match_len,
    suffix_match_len,
};

/// Variant events of a single haplotype, keyed by start position.
///
/// At most one event exists per start: an event landing on an occupied start
/// is merged with the one already there (see [`EventMap::make_block`]).
/// The map keeps the reference window it was decoded against, but never the
/// haplotype itself; passes that need the alignment take it as an argument.
#[derive(Debug, Clone, Default)]
pub struct EventMap {
    events: BTreeMap<PosType, VariantEvent>,
    window: Option<ReferenceWindow>,
    source: SeqNameStr,
}

impl EventMap {
    /// Decodes the alignment of one haplotype into variant events.
    ///
    /// A failed alignment (negative start) yields an empty map.
    ///
    /// # Panics
    ///
    /// On alignment operators other than M/=/X/I/D/S, when the alignment
    /// runs past the end of the reference window, or when it consumes more
    /// bases than the haplotype has.
    pub fn from_alignment(
        alignment: &HaplotypeAlignment,
        window: ReferenceWindow,
        source: impl Into<SeqNameStr>,
        config: &EventMapConfig,
    ) -> Self {
        let mut map = Self {
            events: BTreeMap::new(),
            window: None,
            source: source.into(),
        };
        if !alignment.is_aligned() {
            debug!(
                "Haplotype {} failed to align (start {}), no events extracted",
                map.source,
                alignment.alignment_start()
            );
            map.window = Some(window);
            return map;
        }

        map.process_cigar_for_initial_events(alignment, &window, config);
        map.window = Some(window);
        if config.clump_events {
            map.replace_clumped_events_with_block_substitutions(
                alignment,
                config.max_gap,
                config.min_block_events,
            );
        }
        map
    }

    /// Builds a map from already decoded events, merging colliding starts.
    pub fn from_events<I: IntoIterator<Item = VariantEvent>>(events: I) -> Self {
        let mut map = Self::default();
        for event in events {
            map.insert(event);
        }
        map
    }

    fn process_cigar_for_initial_events(
        &mut self,
        alignment: &HaplotypeAlignment,
        window: &ReferenceWindow,
        config: &EventMapConfig,
    ) {
        let proposed = propose_events(alignment, window, &self.source);

        if config.complexity_policy.is_too_complex(&proposed) {
            debug!(
                "Haplotype {} is too complex ({} events), collapsing into one block",
                self.source,
                proposed.len()
            );
            if let Some(block) = complex_event(alignment, window, &self.source) {
                self.insert(block);
            }
        }
        else {
            for event in proposed {
                self.insert(event);
            }
        }
    }

    /// Adds an event, merging it with the event already bound to its start.
    pub fn insert(
        &mut self,
        event: VariantEvent,
    ) {
        self.add_event(event, true)
    }

    /// Adds an event that must not collide with an existing one.
    ///
    /// # Panics
    ///
    /// If an event is already bound to the same start.
    pub fn insert_unmerged(
        &mut self,
        event: VariantEvent,
    ) {
        self.add_event(event, false)
    }

    fn add_event(
        &mut self,
        event: VariantEvent,
        merge: bool,
    ) {
        match self.events.entry(event.start()) {
            Entry::Vacant(entry) => {
                entry.insert(event);
            },
            Entry::Occupied(mut entry) => {
                assert!(
                    merge,
                    "Will not merge previously bound events as merge is false at {}",
                    event
                );
                let block = Self::make_block(entry.get(), &event);
                trace!("Merged {} and {} into {}", entry.get(), event, block);
                entry.insert(block);
            },
        }
    }

    /// Removes the event starting at `start`.
    pub fn remove(
        &mut self,
        start: PosType,
    ) -> Option<VariantEvent> {
        self.events.remove(&start)
    }

    /// Combines two events sharing a start into one block substitution.
    ///
    /// Only a SNP with an insertion, a SNP with a deletion, or an insertion
    /// with a deletion can be combined.
    ///
    /// # Panics
    ///
    /// If the starts differ or the pair is not one of the above.
    pub fn make_block(
        first: &VariantEvent,
        second: &VariantEvent,
    ) -> VariantEvent {
        assert_eq!(
            first.start(),
            second.start(),
            "Events must share their start to be merged but got {} and {}",
            first,
            second
        );

        match (first.variant_type(), second.variant_type()) {
            (VariantType::Snp, VariantType::Insertion) => snp_with_insertion(first, second),
            (VariantType::Insertion, VariantType::Snp) => snp_with_insertion(second, first),
            (VariantType::Snp, VariantType::Deletion) => snp_with_deletion(first, second),
            (VariantType::Deletion, VariantType::Snp) => snp_with_deletion(second, first),
            (VariantType::Insertion, VariantType::Deletion) => {
                insertion_with_deletion(first, second)
            },
            (VariantType::Deletion, VariantType::Insertion) => {
                insertion_with_deletion(second, first)
            },
            (a, b) => {
                panic!(
                    "Can only merge a SNP with an indel or an insertion with a deletion, but got {} {} and {} {}",
                    a, first, b, second
                )
            },
        }
    }

    /// Replaces every chain of nearby events with one block substitution.
    ///
    /// Starting from each not yet examined event, the neighborhood collects
    /// the following events whose start is less than `max_gap` bases after
    /// the end of the previously collected one. Neighborhoods of at least
    /// `min_events` are replaced by a block covering the reference from the
    /// first start to the last end, with the haplotype bases aligned to that
    /// span as alternate allele. The scan restarts after each replacement.
    ///
    /// # Panics
    ///
    /// If the map has no reference window.
    pub fn replace_clumped_events_with_block_substitutions(
        &mut self,
        alignment: &HaplotypeAlignment,
        max_gap: PosType,
        min_events: usize,
    ) {
        if self.events.len() < min_events {
            return;
        }

        let mut last_start: Option<PosType> = None;
        loop {
            let mut found_one = false;
            let starts = self.start_positions().collect_vec();
            for start in starts {
                if last_start.is_some_and(|last| start <= last) {
                    continue;
                }
                last_start = Some(start);
                let neighborhood = self.neighborhood(start, max_gap);
                if self.update_to_block_substitution(&neighborhood, alignment, min_events) {
                    found_one = true;
                    break;
                }
            }
            if !found_one {
                break;
            }
        }
    }

    /// Starts of the chained neighborhood anchored at `left_most`.
    fn neighborhood(
        &self,
        left_most: PosType,
        max_gap: PosType,
    ) -> Vec<PosType> {
        let anchor = &self.events[&left_most];
        let mut left_end = anchor.end();
        let mut neighbors = vec![left_most];
        for (start, event) in self
            .events
            .range((Bound::Excluded(left_most), Bound::Unbounded))
        {
            if (*start as i128) - (left_end as i128) < max_gap as i128 {
                neighbors.push(*start);
                left_end = event.end();
            }
        }
        neighbors
    }

    fn update_to_block_substitution(
        &mut self,
        neighbors: &[PosType],
        alignment: &HaplotypeAlignment,
        min_events: usize,
    ) -> bool {
        if neighbors.len() < min_events {
            return false;
        }
        let window = self
            .window
            .as_ref()
            .expect("Clumping requires the reference window the events were decoded from");
        let (Some(first_start), Some(last_start)) = (neighbors.first(), neighbors.last())
        else {
            return false;
        };
        let first = &self.events[first_start];
        let last = &self.events[last_start];

        let ref_start = window.offset_of(first.start());
        let ref_end = window.offset_of(last.end());
        let ref_bases = window.bases()[ref_start..=ref_end].to_vec();
        let Some(hap_bases) = alignment.bases_covering_ref_interval(ref_start, ref_end)
        else {
            debug!(
                "Neighborhood {}-{} starts or ends inside a deletion, keeping {} events",
                first.start(),
                last.end(),
                neighbors.len()
            );
            return false;
        };

        let block = VariantEvent::new(
            first.contig().clone(),
            first.start(),
            first.start() + ref_bases.len() as PosType - 1,
            first.source().clone(),
            ref_bases,
            hap_bases.to_vec(),
        );

        for start in neighbors {
            assert!(
                self.events.remove(start).is_some(),
                "Expected to remove event at {} from the event map but there wasn't any",
                start
            );
        }

        info!("Transforming into block substitution at {}", block);
        self.insert_unmerged(block);
        true
    }

    pub fn get(
        &self,
        start: PosType,
    ) -> Option<&VariantEvent> {
        self.events.get(&start)
    }

    /// Starts of all events, ascending.
    pub fn start_positions(&self) -> impl Iterator<Item = PosType> + '_ {
        self.events.keys().copied()
    }

    /// Events in ascending start order.
    pub fn events(&self) -> impl Iterator<Item = &VariantEvent> {
        self.events.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PosType, &VariantEvent)> {
        self.events.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn source(&self) -> &SeqNameStr {
        &self.source
    }

    pub fn window(&self) -> Option<&ReferenceWindow> {
        self.window.as_ref()
    }
}

impl Display for EventMap {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "EventMap{{")?;
        for event in self.events() {
            write!(f, "{},", event)?;
        }
        write!(f, "}}")
    }
}

/// Walks the alignment and emits one event per difference from the
/// reference.
fn propose_events(
    alignment: &HaplotypeAlignment,
    window: &ReferenceWindow,
    source: &SeqNameStr,
) -> Vec<VariantEvent> {
    let reference = window.bases();
    let bases = alignment.bases();
    let contig = window.loc().contig();
    let cigar = alignment.cigar();

    let mut ref_pos = alignment.alignment_start() as usize;
    let mut hap_pos = 0usize;
    assert!(
        ref_pos + alignment.reference_length() <= reference.len(),
        "Haplotype alignment runs past the end of the reference window {}",
        window.loc()
    );
    assert!(
        alignment.read_length() <= bases.len(),
        "Haplotype alignment consumes {} bases but the haplotype has only {}",
        alignment.read_length(),
        bases.len()
    );

    let mut proposed = Vec::new();
    for (op_index, op) in cigar.iter().enumerate() {
        let len = op.len();
        match op.kind() {
            Kind::Insertion => {
                // Insertions at either end of the haplotype are not anchored
                // on both sides and are dropped.
                let anchored = op_index != 0 && op_index != cigar.len() - 1;
                if ref_pos > 0 && anchored {
                    let padding = reference[ref_pos - 1];
                    let mut alt = Vec::with_capacity(len + 1);
                    alt.push(padding);
                    alt.extend_from_slice(&bases[hap_pos..hap_pos + len]);
                    if is_regular_base(padding) && is_all_regular_bases(&alt) {
                        let start = window.position_of(ref_pos - 1);
                        proposed.push(VariantEvent::new(
                            contig.clone(),
                            start,
                            start,
                            source.clone(),
                            vec![padding],
                            alt,
                        ));
                    }
                }
                hap_pos += len;
            },
            Kind::SoftClip => hap_pos += len,
            Kind::Deletion => {
                if ref_pos > 0 {
                    let deleted = &reference[ref_pos - 1..ref_pos + len];
                    if is_all_regular_bases(deleted) {
                        let start = window.position_of(ref_pos - 1);
                        proposed.push(VariantEvent::new(
                            contig.clone(),
                            start,
                            start + len as PosType,
                            source.clone(),
                            deleted.to_vec(),
                            vec![deleted[0]],
                        ));
                    }
                }
                ref_pos += len;
            },
            Kind::Match | Kind::SequenceMatch | Kind::SequenceMismatch => {
                for _ in 0..len {
                    let ref_base = reference[ref_pos];
                    let hap_base = bases[hap_pos];
                    if ref_base != hap_base
                        && is_regular_base(ref_base)
                        && is_regular_base(hap_base)
                    {
                        let start = window.position_of(ref_pos);
                        proposed.push(VariantEvent::new(
                            contig.clone(),
                            start,
                            start,
                            source.clone(),
                            vec![ref_base],
                            vec![hap_base],
                        ));
                    }
                    ref_pos += 1;
                    hap_pos += 1;
                }
            },
            other => {
                panic!(
                    "Unsupported cigar operator created during alignment: {:?}",
                    other
                )
            },
        }
    }
    proposed
}

/// One block substitution for the whole haplotype, with the bases shared by
/// reference and haplotype at both ends trimmed off.
fn complex_event(
    alignment: &HaplotypeAlignment,
    window: &ReferenceWindow,
    source: &SeqNameStr,
) -> Option<VariantEvent> {
    let reference = window.bases();
    let haplotype = alignment.bases();
    let ref_pos = alignment.alignment_start() as usize;
    let ref_len = alignment.reference_length();
    if haplotype.is_empty() || ref_len == 0 {
        return None;
    }

    let matching_prefix = prefix_match_len(reference, haplotype, ref_pos, 0);
    let matching_suffix = suffix_match_len(
        reference,
        haplotype,
        ref_pos + ref_len - 1,
        haplotype.len() - 1,
    );

    let total_match = matching_prefix + matching_suffix;
    if total_match >= haplotype.len() || total_match >= reference.len() || total_match >= ref_len
    {
        return None;
    }

    let ref_bases = reference[ref_pos + matching_prefix..ref_pos + ref_len - matching_suffix].to_vec();
    let alt_bases = haplotype[matching_prefix..haplotype.len() - matching_suffix].to_vec();
    let start = window.position_of(ref_pos + matching_prefix);
    Some(VariantEvent::new(
        window.loc().contig().clone(),
        start,
        start + ref_bases.len() as PosType - 1,
        source.clone(),
        ref_bases,
        alt_bases,
    ))
}

fn snp_with_insertion(
    snp: &VariantEvent,
    insertion: &VariantEvent,
) -> VariantEvent {
    let mut alternate = snp.alternate().to_vec();
    alternate.extend_from_slice(&insertion.alternate()[1..]);
    snp.with_alleles(snp.end(), snp.reference().to_vec(), alternate)
}

fn snp_with_deletion(
    snp: &VariantEvent,
    deletion: &VariantEvent,
) -> VariantEvent {
    snp.with_alleles(
        deletion.end(),
        deletion.reference().to_vec(),
        snp.alternate().to_vec(),
    )
}

fn insertion_with_deletion(
    insertion: &VariantEvent,
    deletion: &VariantEvent,
) -> VariantEvent {
    insertion.with_alleles(
        deletion.end(),
        deletion.reference().to_vec(),
        insertion.alternate().to_vec(),
    )
}
