use hashbrown::HashSet;
use locuskit::prelude::*;
use rand::{
    Rng,
    SeedableRng,
};
use rand_chacha::ChaCha8Rng;
use rstest::{
    fixture,
    rstest,
};

/// Sorted, disjoint and non-abutting intervals over three contigs.
fn generate_intervals<R: Rng>(
    rng: &mut R,
    per_contig: usize,
) -> Vec<Interval> {
    let mut intervals = Vec::new();
    for contig_index in 0..3 {
        let name = format!("chr{}", contig_index + 1);
        let mut pos: u64 = rng.gen_range(1..20);
        for _ in 0..per_contig {
            let len: u64 = rng.gen_range(1..200);
            intervals.push(Interval::new(name.as_str(), contig_index, pos, pos + len - 1));
            pos += len + rng.gen_range(1..50);
        }
    }
    intervals
}

fn covered_bases(locs: &[Interval]) -> HashSet<(usize, u64)> {
    locs.iter()
        .flat_map(|loc| (loc.start()..=loc.stop()).map(move |pos| (loc.contig_index(), pos)))
        .collect()
}

#[fixture]
fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

#[fixture]
fn locs(mut rng: ChaCha8Rng) -> Vec<Interval> {
    generate_intervals(&mut rng, 15)
}

#[rstest]
fn test_union_then_merge_loses_only_overlap(mut rng: ChaCha8Rng) {
    for _ in 0..20 {
        let a = generate_intervals(&mut rng, 5);
        let b = generate_intervals(&mut rng, 5);
        let union = merge_by_set_operator(&a, &b, IntervalSetRule::Union).unwrap();
        assert_eq!(union.len(), a.len() + b.len());

        let merged = sort_and_merge(&union, IntervalMergingRule::All);
        let merged_size = interval_size(&merged);
        let separate_size = interval_size(&a) + interval_size(&b);
        let shared = covered_bases(&a)
            .intersection(&covered_bases(&b))
            .count() as u64;

        assert!(merged_size <= separate_size);
        assert_eq!(merged_size, separate_size - shared);
        assert_eq!(merged_size == separate_size, shared == 0);
        assert!(merged.windows(2).all(|w| w[0].is_before(&w[1]) && !w[0].is_contiguous(&w[1])));
    }
}

#[rstest]
fn test_intersection_matches_shared_bases(mut rng: ChaCha8Rng) {
    for _ in 0..20 {
        let a = generate_intervals(&mut rng, 5);
        let b = generate_intervals(&mut rng, 5);
        let shared = covered_bases(&a)
            .intersection(&covered_bases(&b))
            .count() as u64;

        match merge_by_set_operator(&a, &b, IntervalSetRule::Intersection) {
            Ok(both) => {
                assert_eq!(interval_size(&both), shared);
                assert_eq!(covered_bases(&both).len() as u64, shared);
            },
            Err(err) => {
                assert_eq!(shared, 0);
                assert!(err
                    .downcast_ref::<LocusError>()
                    .unwrap()
                    .is_user_configuration());
            },
        }
    }
}

#[rstest]
fn test_split_fixed_intervals_partitions_exactly(locs: Vec<Interval>) {
    for parts in 1..=locs.len() {
        let split = split_fixed_intervals(&locs, parts).unwrap();
        assert_eq!(split.len(), parts);
        assert!(split.iter().all(|part| !part.is_empty()));
        assert_eq!(flatten_split_intervals(&split), locs);
    }
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(7)]
#[case(16)]
#[case(100)]
fn test_split_locus_intervals_balances_bases(
    locs: Vec<Interval>,
    #[case] parts: usize,
) {
    let total = interval_size(&locs);
    let ideal = (total / parts as u64).max(1);
    let split = split_locus_intervals(&locs, parts).unwrap();

    assert_eq!(split.len(), parts);
    assert_eq!(split.iter().map(|part| interval_size(part)).sum::<u64>(), total);
    for part in &split[..parts - 1] {
        assert_eq!(interval_size(part), ideal);
    }

    let flat = flatten_split_intervals(&split);
    assert!(flat.len() >= locs.len());
    assert_eq!(equate(&locs, &flat), Ok(()));
}

#[rstest]
fn test_scatter_outputs_cover_input(locs: Vec<Interval>) {
    let by_contig = scatter_contig_intervals(&locs, 3).unwrap();
    for output in &by_contig {
        let contig = output[0].interval.contig_index();
        assert!(output.iter().all(|s| s.interval.contig_index() == contig));
    }

    let fixed = scatter_fixed_intervals(&split_fixed_intervals(&locs, 4).unwrap(), 4).unwrap();
    let scattered = fixed
        .iter()
        .flatten()
        .map(|s| s.interval.clone())
        .collect::<Vec<_>>();
    assert_eq!(scattered, locs);
    assert_eq!(fixed.last().unwrap().last().unwrap().name, format!("interval_{}", locs.len()));
}

#[rstest]
fn test_flanks_never_touch_the_intervals(locs: Vec<Interval>) {
    let contig_lengths: ContigLengths = locs
        .iter()
        .map(|loc| (loc.contig().clone(), 5_000))
        .collect();

    let flanks = flanking_intervals(&locs, 10, &contig_lengths).unwrap();
    let original = covered_bases(&locs);
    assert!(covered_bases(&flanks).is_disjoint(&original));

    let padded = intervals_with_flanks(&locs, 10, &contig_lengths).unwrap();
    let mut recombined = locs.clone();
    recombined.extend(flanks);
    assert_eq!(sort_and_merge(&recombined, IntervalMergingRule::All), padded);
}

#[rstest]
#[case("chr2:1,001-2,000", Interval::new("chr2", 1, 1001, 2000))]
#[case("chr2:1500+", Interval::new("chr2", 1, 1500, 5000))]
#[case("chr2", Interval::new("chr2", 1, 1, 5000))]
fn test_tokens_feed_interval_lists(
    #[case] token: &str,
    #[case] expected: Interval,
) {
    let token: IntervalToken = token.parse().unwrap();
    let interval = token.into_interval(1, 5000).unwrap();
    assert_eq!(interval, expected);
}
