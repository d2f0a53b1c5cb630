use std::sync::Arc;

use noodles::sam::alignment::record::cigar::op::Kind;
use noodles::sam::alignment::record::cigar::Op;

use crate::data_structs::coords::Interval;
use crate::data_structs::typedef::{
    OffsetType,
    PosType,
};

/// Reference bases of the active window together with the interval they
/// cover. Cloning is cheap, the bases are shared.
#[derive(Debug, Clone)]
pub struct ReferenceWindow {
    bases: Arc<[u8]>,
    loc:   Interval,
}

impl ReferenceWindow {
    /// # Panics
    ///
    /// If the number of bases does not match the interval size.
    pub fn new(
        bases: impl Into<Arc<[u8]>>,
        loc: Interval,
    ) -> Self {
        let bases = bases.into();
        assert_eq!(
            bases.len() as PosType,
            loc.size(),
            "Reference window {} must hold exactly {} bases",
            loc,
            loc.size()
        );
        Self { bases, loc }
    }

    pub fn bases(&self) -> &[u8] {
        &self.bases
    }

    pub fn loc(&self) -> &Interval {
        &self.loc
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Absolute position of a window offset.
    pub fn position_of(
        &self,
        offset: usize,
    ) -> PosType {
        self.loc.start() + offset as PosType
    }

    /// Window offset of an absolute position.
    pub fn offset_of(
        &self,
        position: PosType,
    ) -> usize {
        assert!(
            position >= self.loc.start() && position <= self.loc.stop(),
            "Position {} is outside of reference window {}",
            position,
            self.loc
        );
        (position - self.loc.start()) as usize
    }
}

/// Alignment of a haplotype against a [`ReferenceWindow`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HaplotypeAlignment {
    bases:           Vec<u8>,
    cigar:           Vec<Op>,
    alignment_start: OffsetType,
}

impl HaplotypeAlignment {
    /// `alignment_start` is the offset of the first aligned haplotype base in
    /// the reference window. Negative values mark a failed alignment.
    pub fn new(
        bases: impl Into<Vec<u8>>,
        cigar: impl IntoIterator<Item = Op>,
        alignment_start: OffsetType,
    ) -> Self {
        Self {
            bases: bases.into(),
            cigar: cigar.into_iter().collect(),
            alignment_start,
        }
    }

    pub fn bases(&self) -> &[u8] {
        &self.bases
    }

    pub fn cigar(&self) -> &[Op] {
        &self.cigar
    }

    pub fn alignment_start(&self) -> OffsetType {
        self.alignment_start
    }

    pub fn is_aligned(&self) -> bool {
        self.alignment_start >= 0
    }

    /// Number of reference bases spanned by the alignment.
    pub fn reference_length(&self) -> usize {
        self.cigar
            .iter()
            .filter(|op| consumes_reference(op.kind()))
            .map(|op| op.len())
            .sum()
    }

    /// Number of haplotype bases the alignment operations consume.
    pub fn read_length(&self) -> usize {
        self.cigar
            .iter()
            .filter(|op| consumes_read(op.kind()))
            .map(|op| op.len())
            .sum()
    }

    /// Haplotype bases aligned to the reference offsets
    /// `ref_start..=ref_end` of the window.
    ///
    /// Returns `None` when either bound falls inside a deletion, as no
    /// haplotype base is aligned there.
    ///
    /// # Panics
    ///
    /// On a failed alignment, on skip/hard-clip/pad operations, or when the
    /// bounds are not covered by the alignment at all.
    pub fn bases_covering_ref_interval(
        &self,
        ref_start: usize,
        ref_end: usize,
    ) -> Option<&[u8]> {
        assert!(ref_start <= ref_end, "Bad start {} and/or stop {}", ref_start, ref_end);
        assert!(
            self.is_aligned(),
            "Haplotype alignment start must be >= 0 but got {}",
            self.alignment_start
        );

        let mut ref_pos = self.alignment_start as usize;
        let mut bases_pos = 0usize;
        let mut bases_start = None;
        let mut bases_stop = None;

        'ops: for op in self.cigar.iter() {
            match op.kind() {
                Kind::Insertion | Kind::SoftClip => bases_pos += op.len(),
                Kind::Match | Kind::SequenceMatch | Kind::SequenceMismatch => {
                    for _ in 0..op.len() {
                        if ref_pos == ref_start {
                            bases_start = Some(bases_pos);
                        }
                        if ref_pos == ref_end {
                            bases_stop = Some(bases_pos);
                            break 'ops;
                        }
                        ref_pos += 1;
                        bases_pos += 1;
                    }
                },
                Kind::Deletion => {
                    for _ in 0..op.len() {
                        if ref_pos == ref_start || ref_pos == ref_end {
                            return None;
                        }
                        ref_pos += 1;
                    }
                },
                other => panic!("Unsupported cigar operator {:?}", other),
            }
        }

        match (bases_start, bases_stop) {
            (Some(start), Some(stop)) => Some(&self.bases[start..=stop]),
            _ => {
                panic!(
                    "Reference offsets {}-{} are not covered by the haplotype alignment",
                    ref_start, ref_end
                )
            },
        }
    }
}

pub(crate) fn consumes_reference(kind: Kind) -> bool {
    matches!(
        kind,
        Kind::Match
            | Kind::Deletion
            | Kind::Skip
            | Kind::SequenceMatch
            | Kind::SequenceMismatch
    )
}

pub(crate) fn consumes_read(kind: Kind) -> bool {
    matches!(
        kind,
        Kind::Match
            | Kind::Insertion
            | Kind::SoftClip
            | Kind::SequenceMatch
            | Kind::SequenceMismatch
    )
}
