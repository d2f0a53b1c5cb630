use std::cmp::Ordering;
use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::typedef::{
    PosType,
    SeqNameStr,
};
use crate::error::LocusError;

/// Closed, 1-based genomic interval on a named contig.
///
/// The contig is identified by its name and its rank in the caller's sequence
/// dictionary. Intervals are ordered by contig rank, then start, then stop.
#[derive(Debug, Clone, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    contig:       SeqNameStr,
    contig_index: usize,
    start:        PosType,
    stop:         PosType,
}

/// Deserialized fields, checked by [`Interval::try_new`] before use.
#[derive(Deserialize)]
struct RawInterval {
    contig:       SeqNameStr,
    contig_index: usize,
    start:        PosType,
    stop:         PosType,
}

impl TryFrom<RawInterval> for Interval {
    type Error = anyhow::Error;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Interval::try_new(raw.contig, raw.contig_index, raw.start, raw.stop)
    }
}

impl Interval {
    /// Creates a new `Interval`.
    ///
    /// # Panics
    ///
    /// If `start` is 0 or greater than `stop`.
    pub fn new(
        contig: impl Into<SeqNameStr>,
        contig_index: usize,
        start: PosType,
        stop: PosType,
    ) -> Self {
        assert!(start >= 1, "Interval start must be 1-based");
        assert!(
            start <= stop,
            "Start position must be less than or equal to stop position"
        );
        Self {
            contig: contig.into(),
            contig_index,
            start,
            stop,
        }
    }

    /// Fallible counterpart of [`Interval::new`] for coordinates coming from
    /// user input.
    pub fn try_new(
        contig: impl Into<SeqNameStr>,
        contig_index: usize,
        start: PosType,
        stop: PosType,
    ) -> anyhow::Result<Self> {
        let contig = contig.into();
        if start == 0 || start > stop {
            return Err(LocusError::malformed(
                format!("{}:{}-{}", contig, start, stop),
                "interval must satisfy 1 <= start <= stop",
            )
            .into());
        }
        Ok(Self {
            contig,
            contig_index,
            start,
            stop,
        })
    }

    pub fn contig(&self) -> &SeqNameStr {
        &self.contig
    }

    pub fn contig_index(&self) -> usize {
        self.contig_index
    }

    pub fn start(&self) -> PosType {
        self.start
    }

    pub fn stop(&self) -> PosType {
        self.stop
    }

    /// Number of bases covered.
    pub fn size(&self) -> PosType {
        self.stop - self.start + 1
    }

    pub fn on_same_contig(
        &self,
        other: &Self,
    ) -> bool {
        self.contig_index == other.contig_index
    }

    /// True if this interval ends strictly before `other` begins.
    pub fn is_before(
        &self,
        other: &Self,
    ) -> bool {
        match self.contig_index.cmp(&other.contig_index) {
            Ordering::Less => true,
            Ordering::Equal => self.stop < other.start,
            Ordering::Greater => false,
        }
    }

    pub fn overlaps(
        &self,
        other: &Self,
    ) -> bool {
        self.on_same_contig(other)
            && self.start <= other.stop
            && other.start <= self.stop
    }

    /// True if the intervals abut without sharing a base.
    pub fn is_contiguous(
        &self,
        other: &Self,
    ) -> bool {
        self.on_same_contig(other)
            && (self.start == other.stop + 1 || self.stop + 1 == other.start)
    }

    /// Checks if this interval is fully contained within another one.
    pub fn is_in(
        &self,
        other: &Self,
    ) -> bool {
        self.on_same_contig(other)
            && self.start >= other.start
            && self.stop <= other.stop
    }

    /// Smallest interval spanning both.
    ///
    /// # Panics
    ///
    /// If the intervals neither overlap nor abut.
    pub fn merge(
        &self,
        other: &Self,
    ) -> Self {
        assert!(
            self.overlaps(other) || self.is_contiguous(other),
            "Cannot merge non-contiguous intervals {} and {}",
            self,
            other
        );
        Self {
            contig:       self.contig.clone(),
            contig_index: self.contig_index,
            start:        self.start.min(other.start),
            stop:         self.stop.max(other.stop),
        }
    }

    /// Bases shared by both intervals.
    ///
    /// # Panics
    ///
    /// If the intervals do not overlap.
    pub fn intersect(
        &self,
        other: &Self,
    ) -> Self {
        assert!(
            self.overlaps(other),
            "Cannot intersect non-overlapping intervals {} and {}",
            self,
            other
        );
        Self {
            contig:       self.contig.clone(),
            contig_index: self.contig_index,
            start:        self.start.max(other.start),
            stop:         self.stop.min(other.stop),
        }
    }

    /// Parts of this interval not covered by `other`, in ascending order.
    pub fn subtract(
        &self,
        other: &Self,
    ) -> Vec<Self> {
        if !self.overlaps(other) {
            return vec![self.clone()];
        }
        let mut parts = Vec::with_capacity(2);
        if self.start < other.start {
            parts.push(self.with_bounds(self.start, other.start - 1));
        }
        if other.stop < self.stop {
            parts.push(self.with_bounds(other.stop + 1, self.stop));
        }
        parts
    }

    /// Cuts the interval into `[start, pos - 1]` and `[pos, stop]`.
    ///
    /// # Panics
    ///
    /// If `pos` is not in `(start, stop]`.
    pub fn split_at(
        &self,
        pos: PosType,
    ) -> (Self, Self) {
        assert!(
            pos > self.start && pos <= self.stop,
            "Split position {} is outside of {}",
            pos,
            self
        );
        (
            self.with_bounds(self.start, pos - 1),
            self.with_bounds(pos, self.stop),
        )
    }

    /// Same contig, new bounds.
    pub fn with_bounds(
        &self,
        start: PosType,
        stop: PosType,
    ) -> Self {
        Self::new(self.contig.clone(), self.contig_index, start, stop)
    }

    /// Interval widened by `padding` bases on both sides, clamped to
    /// `[1, contig_length]`.
    pub fn padded(
        &self,
        padding: PosType,
        contig_length: PosType,
    ) -> Self {
        self.with_bounds(
            self.start.saturating_sub(padding).max(1),
            self.stop.saturating_add(padding).min(contig_length).max(self.start),
        )
    }
}

impl PartialEq for Interval {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.contig_index == other.contig_index
            && self.start == other.start
            && self.stop == other.stop
            && self.contig == other.contig
    }
}

impl Eq for Interval {}

impl PartialOrd for Interval {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Interval {
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        self.contig_index
            .cmp(&other.contig_index)
            .then(self.start.cmp(&other.start))
            .then(self.stop.cmp(&other.stop))
            .then_with(|| self.contig.cmp(&other.contig))
    }
}

impl From<Interval> for bio::io::bed::Record {
    /// BED records are 0-based and half-open.
    fn from(value: Interval) -> Self {
        let mut record = bio::io::bed::Record::new();
        record.set_chrom(value.contig.as_str());
        record.set_start(value.start - 1);
        record.set_end(value.stop);
        record
    }
}

impl Display for Interval {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.contig, self.start, self.stop)
    }
}
