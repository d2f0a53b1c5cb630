//! Higher-level algorithms built on the data structures of
//! [`crate::data_structs`].
//!
//! - [`intervals`]: set algebra, partitioning and flanking of interval lists.
pub mod intervals;
