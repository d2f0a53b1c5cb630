//! Genomic coordinates.
//!
//! - [`Interval`]: a closed, 1-based region on a ranked contig together with
//!   the interval relations (before, overlap, abutment, merge, intersection,
//!   subtraction, splitting) the rest of the crate is built on.
//! - [`IntervalToken`]: classification of user-supplied interval strings
//!   (locus, interval file or the `unmapped` sentinel).

mod interval;
mod token;

pub use interval::Interval;
pub use token::IntervalToken;
