use std::collections::BTreeSet;

use hashbrown::HashSet;
use log::debug;
use rayon::prelude::*;

use super::{
    EventMap,
    EventMapConfig,
    HaplotypeAlignment,
    ReferenceWindow,
    VariantEvent,
};
use crate::data_structs::typedef::{
    PosType,
    SeqNameStr,
};
use crate::getter_fn;
use crate::utils::{
    n_threads,
    THREAD_POOL,
};

/// A candidate haplotype and, once built, its event map.
#[derive(Debug, Clone)]
pub struct Haplotype {
    alignment: HaplotypeAlignment,
    event_map: Option<EventMap>,
}

impl Haplotype {
    getter_fn!(alignment, HaplotypeAlignment);

    pub fn new(alignment: HaplotypeAlignment) -> Self {
        Self {
            alignment,
            event_map: None,
        }
    }

    pub fn event_map(&self) -> Option<&EventMap> {
        self.event_map.as_ref()
    }

    /// Decodes the alignment into a fresh event map, replacing any previous
    /// one.
    pub fn build_event_map(
        &mut self,
        window: &ReferenceWindow,
        source: impl Into<SeqNameStr>,
        config: &EventMapConfig,
    ) -> &EventMap {
        self.event_map.insert(EventMap::from_alignment(
            &self.alignment,
            window.clone(),
            source,
            config,
        ))
    }

    /// Runs the clumping pass over an already built event map.
    ///
    /// # Panics
    ///
    /// If the event map was not built yet.
    pub fn clump_events(
        &mut self,
        config: &EventMapConfig,
    ) {
        let event_map = self
            .event_map
            .as_mut()
            .expect("Event map must be built before clumping its events");
        event_map.replace_clumped_events_with_block_substitutions(
            &self.alignment,
            config.max_gap,
            config.min_block_events,
        );
    }
}

/// Builds the event map of every haplotype in parallel and returns the union
/// of their event starts.
///
/// The `i`-th haplotype is tagged with `config.source_name(i)`. With `debug`
/// set, every haplotype and its events are logged in input order.
pub fn build_event_maps_for_haplotypes(
    haplotypes: &mut [Haplotype],
    window: &ReferenceWindow,
    config: &EventMapConfig,
    debug: bool,
) -> BTreeSet<PosType> {
    debug!(
        "Building {} event maps over {} on {} threads",
        haplotypes.len(),
        window.loc(),
        n_threads()
    );
    THREAD_POOL.install(|| {
        haplotypes
            .par_iter_mut()
            .enumerate()
            .for_each(|(index, haplotype)| {
                haplotype.build_event_map(window, config.source_name(index), config);
            })
    });

    let mut starts = BTreeSet::new();
    for (index, haplotype) in haplotypes.iter().enumerate() {
        let Some(event_map) = haplotype.event_map() else {
            continue;
        };
        if debug {
            debug!(
                "{} > {}",
                config.source_name(index),
                String::from_utf8_lossy(haplotype.alignment().bases())
            );
            debug!("{}", event_map);
        }
        starts.extend(event_map.start_positions());
    }
    starts
}

/// Every distinct event across the haplotypes, sorted by start.
///
/// Events sharing a start across haplotypes are deduplicated, the one from
/// the earliest haplotype wins.
pub fn all_variant_events(haplotypes: &[Haplotype]) -> Vec<VariantEvent> {
    let mut seen_starts = HashSet::new();
    let mut events = haplotypes
        .iter()
        .filter_map(Haplotype::event_map)
        .flat_map(EventMap::events)
        .filter(|event| seen_starts.insert(event.start()))
        .cloned()
        .collect::<Vec<_>>();
    events.sort_by_key(VariantEvent::start);
    events
}
