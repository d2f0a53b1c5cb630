//! Helpers shared across the crate.
//!
//! - The rayon [`THREAD_POOL`] used for per-haplotype parallel work. Its size
//!   is taken from the `LOCUSKIT_NUM_THREADS` environment variable (all cores
//!   when unset).
//! - Builder-style `with_*` and getter macros.
//! - Nucleotide predicates.

use once_cell::sync::Lazy;
use rayon::{
    ThreadPool,
    ThreadPoolBuilder,
};

pub const NUM_THREADS_ENV: &str = "LOCUSKIT_NUM_THREADS";

pub static THREAD_POOL: Lazy<ThreadPool> = Lazy::new(|| {
    let num_threads: Option<usize> = std::env::var(NUM_THREADS_ENV)
        .ok()
        .and_then(|str| str.parse::<usize>().ok());
    ThreadPoolBuilder::new()
        .num_threads(num_threads.unwrap_or(0))
        .build()
        .expect("Failed to create thread pool")
});

pub fn n_threads() -> usize {
    THREAD_POOL.current_num_threads()
}

#[macro_export]
macro_rules! getter_fn {
    ($field_name: ident, $field_type: ty) => {
        pub fn $field_name(&self) -> &$field_type {
            &self.$field_name
        }
    };
}

#[macro_export]
macro_rules! with_field_fn {
    ($field_name: ident, $field_type: ty) => {
        paste::paste! {
            pub fn [<with_$field_name>](mut self, value: $field_type) -> Self {
            self.$field_name = value;
            self
            }
        }
    };
}

/// A, C, G or T in either case.
pub fn is_regular_base(base: u8) -> bool {
    matches!(base, b'A' | b'C' | b'G' | b'T' | b'a' | b'c' | b'g' | b't')
}

pub fn is_all_regular_bases(bases: &[u8]) -> bool {
    bases.iter().copied().all(is_regular_base)
}

/// Length of the common prefix of `a[a_start..]` and `b[b_start..]`.
pub fn prefix_match_len(
    a: &[u8],
    b: &[u8],
    a_start: usize,
    b_start: usize,
) -> usize {
    a.iter()
        .skip(a_start)
        .zip(b.iter().skip(b_start))
        .take_while(|(x, y)| x == y)
        .count()
}

/// Length of the common suffix of `a[..=a_end]` and `b[..=b_end]`.
pub fn suffix_match_len(
    a: &[u8],
    b: &[u8],
    a_end: usize,
    b_end: usize,
) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    a[..=a_end.min(a.len() - 1)]
        .iter()
        .rev()
        .zip(b[..=b_end.min(b.len() - 1)].iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_bases() {
        assert!(is_all_regular_bases(b"ACGTacgt"));
        assert!(!is_regular_base(b'N'));
        assert!(!is_all_regular_bases(b"ACNT"));
    }

    #[test]
    fn test_prefix_and_suffix_match() {
        assert_eq!(prefix_match_len(b"AACGT", b"ACGA", 1, 0), 3);
        assert_eq!(prefix_match_len(b"ACGT", b"TTTT", 0, 0), 0);
        assert_eq!(suffix_match_len(b"ACGTT", b"GGTT", 4, 3), 3);
        assert_eq!(suffix_match_len(b"ACGT", b"ACGT", 3, 3), 4);
        assert_eq!(suffix_match_len(b"", b"ACGT", 0, 3), 0);
    }
}
