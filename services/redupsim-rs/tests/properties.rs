use proptest::prelude::*;
use redupsim_core::{edit_distance, lexical_similarity, structural_similarity};

fn sentence() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-c -]{0,12}").unwrap()
}

proptest! {
    #[test]
    fn identity_has_zero_distance(s in sentence()) {
        prop_assert_eq!(edit_distance(&s, &s), 0);
        prop_assert_eq!(lexical_similarity(&s, &s), 1.0);
    }

    #[test]
    fn distance_is_symmetric(a in sentence(), b in sentence()) {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    #[test]
    fn triangle_inequality(a in sentence(), b in sentence(), c in sentence()) {
        prop_assert!(edit_distance(&a, &c) <= edit_distance(&a, &b) + edit_distance(&b, &c));
    }

    #[test]
    fn distance_bounded_by_longer_input(a in sentence(), b in sentence()) {
        let d = edit_distance(&a, &b);
        prop_assert!(d <= a.chars().count().max(b.chars().count()));
    }

    #[test]
    fn scores_stay_in_unit_interval(a in sentence(), b in sentence()) {
        let lexical = lexical_similarity(&a, &b);
        let structural = structural_similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&lexical));
        prop_assert!((0.0..=1.0).contains(&structural));
    }

    #[test]
    fn structural_self_similarity(s in sentence()) {
        prop_assert_eq!(structural_similarity(&s, &s), 1.0);
    }
}
