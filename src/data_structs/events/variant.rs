use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::typedef::{
    BaseSeq,
    PosType,
    SeqNameStr,
};
use crate::data_structs::VariantType;
use crate::error::LocusError;

/// Biallelic variant event extracted from one haplotype.
///
/// `start` and `end` are 1-based and inclusive on the reference. Indels
/// carry a padding base, so neither allele is ever empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawVariantEvent")]
pub struct VariantEvent {
    contig:    SeqNameStr,
    start:     PosType,
    end:       PosType,
    source:    SeqNameStr,
    reference: BaseSeq,
    alternate: BaseSeq,
}

#[derive(Deserialize)]
struct RawVariantEvent {
    contig:    SeqNameStr,
    start:     PosType,
    end:       PosType,
    source:    SeqNameStr,
    reference: BaseSeq,
    alternate: BaseSeq,
}

impl TryFrom<RawVariantEvent> for VariantEvent {
    type Error = anyhow::Error;

    fn try_from(raw: RawVariantEvent) -> Result<Self, Self::Error> {
        VariantEvent::try_new(
            raw.contig,
            raw.start,
            raw.end,
            raw.source,
            raw.reference,
            raw.alternate,
        )
    }
}

impl VariantEvent {
    /// # Panics
    ///
    /// If an allele is empty or `start` exceeds `end`.
    pub fn new(
        contig: impl Into<SeqNameStr>,
        start: PosType,
        end: PosType,
        source: impl Into<SeqNameStr>,
        reference: BaseSeq,
        alternate: BaseSeq,
    ) -> Self {
        assert!(
            !reference.is_empty() && !alternate.is_empty(),
            "Variant alleles must not be empty"
        );
        assert!(start <= end, "Variant start must not exceed its end");
        Self {
            contig: contig.into(),
            start,
            end,
            source: source.into(),
            reference,
            alternate,
        }
    }

    /// Fallible counterpart of [`VariantEvent::new`] for events read back
    /// from serialized form.
    pub fn try_new(
        contig: impl Into<SeqNameStr>,
        start: PosType,
        end: PosType,
        source: impl Into<SeqNameStr>,
        reference: BaseSeq,
        alternate: BaseSeq,
    ) -> anyhow::Result<Self> {
        let contig = contig.into();
        let location = format!("{}:{}-{}", contig, start, end);
        if reference.is_empty() || alternate.is_empty() {
            return Err(LocusError::malformed(location, "variant alleles must not be empty").into());
        }
        if start > end {
            return Err(
                LocusError::malformed(location, "variant start must not exceed its end").into(),
            );
        }
        Ok(Self {
            contig,
            start,
            end,
            source: source.into(),
            reference,
            alternate,
        })
    }

    pub fn contig(&self) -> &SeqNameStr {
        &self.contig
    }

    pub fn start(&self) -> PosType {
        self.start
    }

    pub fn end(&self) -> PosType {
        self.end
    }

    pub fn source(&self) -> &SeqNameStr {
        &self.source
    }

    pub fn reference(&self) -> &[u8] {
        &self.reference
    }

    pub fn alternate(&self) -> &[u8] {
        &self.alternate
    }

    /// Shape of the event.
    ///
    /// Indels must share their first (padding) base between the alleles,
    /// anything else that is not a 1bp substitution is a block substitution.
    pub fn variant_type(&self) -> VariantType {
        let (ref_len, alt_len) = (self.reference.len(), self.alternate.len());
        let same_padding = self.reference[0] == self.alternate[0];
        match (ref_len, alt_len) {
            (1, 1) => VariantType::Snp,
            (1, n) if n > 1 && same_padding => VariantType::Insertion,
            (n, 1) if n > 1 && same_padding => VariantType::Deletion,
            _ => VariantType::BlockSubstitution,
        }
    }

    pub fn is_snp(&self) -> bool {
        self.variant_type() == VariantType::Snp
    }

    pub fn is_indel(&self) -> bool {
        self.variant_type().is_indel()
    }

    pub(crate) fn with_alleles(
        &self,
        end: PosType,
        reference: BaseSeq,
        alternate: BaseSeq,
    ) -> Self {
        Self::new(
            self.contig.clone(),
            self.start,
            end,
            self.source.clone(),
            reference,
            alternate,
        )
    }
}

impl Display for VariantEvent {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{} [{}*, {}]",
            self.contig,
            self.start,
            self.end,
            String::from_utf8_lossy(&self.reference),
            String::from_utf8_lossy(&self.alternate)
        )
    }
}
