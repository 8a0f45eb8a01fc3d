use amico_core::{intersect, similarity, tokenize};
use proptest::prelude::*;

fn token() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["mc14", "13TeV", "8TeV", "ttbar", "nonallhad", "Zee", ""])
        .prop_map(String::from)
}

fn tokens() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(token(), 0..8)
}

fn label() -> impl Strategy<Value = String> {
    prop::collection::vec(token(), 1..6).prop_map(|parts| parts.join("_"))
}

proptest! {
    #[test]
    fn intersection_size_is_symmetric(a in tokens(), b in tokens()) {
        prop_assert_eq!(intersect(&a, &b).len(), intersect(&b, &a).len());
    }

    #[test]
    fn intersection_never_exceeds_either_side(a in tokens(), b in tokens()) {
        let size = intersect(&a, &b).len();
        prop_assert!(size <= a.len());
        prop_assert!(size <= b.len());
    }

    #[test]
    fn intersection_counts_min_occurrences(a in tokens(), b in tokens()) {
        let matched = intersect(&a, &b);
        for candidate in a.iter().chain(b.iter()) {
            let in_a = a.iter().filter(|t| *t == candidate).count();
            let in_b = b.iter().filter(|t| *t == candidate).count();
            let in_matched = matched.iter().filter(|t| *t == candidate).count();
            prop_assert_eq!(in_matched, in_a.min(in_b));
        }
    }

    #[test]
    fn token_order_does_not_change_the_score(parts in prop::collection::vec(token(), 1..6), other in label()) {
        let forward = parts.join("_");
        let mut reversed_parts = parts.clone();
        reversed_parts.reverse();
        let reversed = reversed_parts.join("_");

        // Same characters, so the same side is picked as normalizer either way.
        let left = similarity(&forward, &other, "_");
        let right = similarity(&reversed, &other, "_");
        match (left, right) {
            (Ok(l), Ok(r)) => prop_assert_eq!(l, r),
            (Err(_), Err(_)) => {}
            (l, r) => prop_assert!(false, "mismatched outcomes: {:?} vs {:?}", l, r),
        }
    }

    #[test]
    fn score_stays_within_percentage_range(a in label(), b in label()) {
        if let Ok(score) = similarity(&a, &b, "_") {
            prop_assert!((0.0..=100.0).contains(&score));
        }
    }

    #[test]
    fn self_similarity_is_full(a in label()) {
        prop_assume!(!tokenize(&a, "_").is_empty());
        prop_assert_eq!(similarity(&a, &a, "_").unwrap(), 100.0);
    }
}
