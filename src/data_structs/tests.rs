mod enums_tests {
    use std::str::FromStr;

    use rstest::rstest;

    use crate::data_structs::enums::*;

    // --- IntervalSetRule Tests ---

    #[rstest]
    #[case("UNION", IntervalSetRule::Union)]
    #[case("union", IntervalSetRule::Union)]
    #[case("Intersection", IntervalSetRule::Intersection)]
    fn test_set_rule_from_str(
        #[case] raw: &str,
        #[case] expected: IntervalSetRule,
    ) {
        assert_eq!(IntervalSetRule::from_str(raw).unwrap(), expected);
    }

    #[test]
    fn test_set_rule_defaults_and_errors() {
        assert_eq!(IntervalSetRule::default(), IntervalSetRule::Union);
        assert!(IntervalSetRule::from_str("XOR").is_err());
    }

    // --- IntervalMergingRule Tests ---

    #[test]
    fn test_merging_rule_from_str() {
        assert_eq!(
            IntervalMergingRule::from_str("overlapping_only").unwrap(),
            IntervalMergingRule::OverlappingOnly
        );
        assert_eq!(
            IntervalMergingRule::from_str("ALL").unwrap(),
            IntervalMergingRule::All
        );
        assert_eq!(IntervalMergingRule::default(), IntervalMergingRule::All);
        assert!(IntervalMergingRule::from_str("SOME").is_err());
    }

    #[test]
    fn test_rules_serialize_as_names() {
        assert_eq!(
            serde_json::to_string(&IntervalMergingRule::OverlappingOnly).unwrap(),
            "\"OVERLAPPING_ONLY\""
        );
        let rule: IntervalSetRule = serde_json::from_str("\"intersection\"").unwrap();
        assert_eq!(rule, IntervalSetRule::Intersection);
    }

    // --- VariantType Tests ---

    #[test]
    fn test_variant_type_indel() {
        assert!(VariantType::Insertion.is_indel());
        assert!(VariantType::Deletion.is_indel());
        assert!(!VariantType::Snp.is_indel());
        assert!(!VariantType::BlockSubstitution.is_indel());
        assert_eq!(VariantType::BlockSubstitution.to_string(), "BLOCK_SUBSTITUTION");
    }
}

mod serde_tests {
    use rstest::rstest;

    use crate::data_structs::coords::Interval;
    use crate::data_structs::events::VariantEvent;

    #[test]
    fn test_interval_json() {
        let interval = Interval::new("chr2", 1, 100, 200);
        let json = serde_json::to_string(&interval).unwrap();
        assert_eq!(
            json,
            r#"{"contig":"chr2","contig_index":1,"start":100,"stop":200}"#
        );
        assert_eq!(serde_json::from_str::<Interval>(&json).unwrap(), interval);
    }

    #[test]
    fn test_variant_event_json() {
        let event = VariantEvent::new("chr1", 5, 5, "hap3", b"C".to_vec(), b"GT".to_vec());
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(serde_json::from_str::<VariantEvent>(&json).unwrap(), event);
    }

    #[rstest]
    #[case::inverted(r#"{"contig":"chr1","contig_index":0,"start":5,"stop":1}"#)]
    #[case::zero_start(r#"{"contig":"chr1","contig_index":0,"start":0,"stop":10}"#)]
    fn test_interval_json_rejects_invalid_bounds(#[case] json: &str) {
        let err = serde_json::from_str::<Interval>(json).unwrap_err();
        assert!(err.to_string().contains("1 <= start <= stop"), "got {}", err);
    }

    #[rstest]
    #[case::empty_reference(
        r#"{"contig":"chr1","start":5,"end":5,"source":"hap0","reference":[],"alternate":[67]}"#,
        "alleles must not be empty"
    )]
    #[case::empty_alternate(
        r#"{"contig":"chr1","start":5,"end":5,"source":"hap0","reference":[67],"alternate":[]}"#,
        "alleles must not be empty"
    )]
    #[case::inverted(
        r#"{"contig":"chr1","start":9,"end":5,"source":"hap0","reference":[67],"alternate":[71]}"#,
        "start must not exceed its end"
    )]
    fn test_variant_event_json_rejects_invalid_events(
        #[case] json: &str,
        #[case] message: &str,
    ) {
        let err = serde_json::from_str::<VariantEvent>(json).unwrap_err();
        assert!(err.to_string().contains(message), "got {}", err);
    }
}
