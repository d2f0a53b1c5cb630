use std::fmt::Debug;
use std::sync::Arc;

use crate::data_structs::events::VariantEvent;
use crate::data_structs::typedef::PosType;
use crate::with_field_fn;

/// Events closer than this to the end of the previous event join its
/// neighborhood.
pub const DEFAULT_MAX_GAP_BETWEEN_EVENTS: PosType = 10;
/// Smallest neighborhood replaced by a block substitution.
pub const MIN_EVENTS_FOR_BLOCK_SUBSTITUTION: usize = 3;

/// Decides whether the itemized events of a haplotype should be replaced by a
/// single block substitution spanning the whole alignment.
pub trait ComplexityPolicy: Debug + Send + Sync {
    fn is_too_complex(
        &self,
        events: &[VariantEvent],
    ) -> bool;
}

/// Keeps every haplotype itemized.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverTooComplex;

impl ComplexityPolicy for NeverTooComplex {
    fn is_too_complex(
        &self,
        _events: &[VariantEvent],
    ) -> bool {
        false
    }
}

/// Collapses haplotypes carrying more than `max_indels` indel events.
#[derive(Debug, Clone, Copy)]
pub struct MaxIndelsPolicy {
    pub max_indels: usize,
}

impl ComplexityPolicy for MaxIndelsPolicy {
    fn is_too_complex(
        &self,
        events: &[VariantEvent],
    ) -> bool {
        events.iter().filter(|e| e.is_indel()).count() > self.max_indels
    }
}

/// Settings of event map construction.
#[derive(Debug, Clone)]
pub struct EventMapConfig {
    pub source_prefix:     String,
    pub max_gap:           PosType,
    pub min_block_events:  usize,
    pub clump_events:      bool,
    pub complexity_policy: Arc<dyn ComplexityPolicy>,
}

impl Default for EventMapConfig {
    fn default() -> Self {
        Self {
            source_prefix:     "hap".to_string(),
            max_gap:           DEFAULT_MAX_GAP_BETWEEN_EVENTS,
            min_block_events:  MIN_EVENTS_FOR_BLOCK_SUBSTITUTION,
            clump_events:      false,
            complexity_policy: Arc::new(NeverTooComplex),
        }
    }
}

impl EventMapConfig {
    with_field_fn!(source_prefix, String);
    with_field_fn!(max_gap, PosType);
    with_field_fn!(min_block_events, usize);
    with_field_fn!(clump_events, bool);
    with_field_fn!(complexity_policy, Arc<dyn ComplexityPolicy>);

    /// Source tag of the `index`-th haplotype of a collection.
    pub fn source_name(
        &self,
        index: usize,
    ) -> String {
        format!("{}{}", self.source_prefix, index)
    }
}
