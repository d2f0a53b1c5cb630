use arcstr::ArcStr;

/// Contig names are shared between many intervals and events, so they are
/// reference counted.
pub type SeqNameStr = ArcStr;
/// 1-based genomic coordinate.
pub type PosType = u64;
/// Signed offset of a haplotype inside its reference window.
pub type OffsetType = i64;
/// Raw nucleotide bytes.
pub type BaseSeq = Vec<u8>;
