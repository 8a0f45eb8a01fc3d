use amico_core::{CrossMatcher, MatchError, MatchOptions, Record, cross_match, similarity};

fn mc14_collection() -> Vec<Record> {
    vec![
        Record::new("mc14_13TeV.110401.ttbar_nonallhad", "mc14_13TeV_ttbar_nonallhad")
            .with_field("type", "AOD"),
        Record::new("mc14_13TeV.147770.Zee", "mc14_13TeV_Zee"),
    ]
}

fn mc12_collection() -> Vec<Record> {
    vec![
        Record::new("mc12_8TeV.117050.ttbar", "mc14_8TeV_ttbar_nonallhad"),
        Record::new("mc12_8TeV.161805.ggH125", "PowhegPythia8_ggH125_WW"),
    ]
}

#[test]
fn end_to_end_pair_matches_with_full_records() {
    let first = vec![Record::new("DS1", "mc14_13TeV_ttbar_nonallhad")];
    let second = vec![Record::new("DS2", "mc14_8TeV_ttbar_nonallhad")];

    let matches = cross_match(&first, &second, &MatchOptions::default()).unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].first, &first[0]);
    assert_eq!(matches[0].second, &second[0]);
    // mc14, ttbar and nonallhad are shared out of the shorter label's four tokens.
    assert_eq!(matches[0].score, 75.0);
}

#[test]
fn empty_collections_produce_no_matches() {
    let records = mc14_collection();
    let options = MatchOptions::default();
    assert!(cross_match(&[], &records, &options).unwrap().is_empty());
    assert!(cross_match(&records, &[], &options).unwrap().is_empty());
    assert!(cross_match(&[], &[], &options).unwrap().is_empty());
}

#[test]
fn records_can_appear_in_several_matches() {
    let first = vec![Record::new("A", "ttbar_nonallhad")];
    let second = vec![
        Record::new("B1", "ttbar_nonallhad_v1"),
        Record::new("B2", "ttbar_allhad"),
        Record::new("B3", "ttbar_nonallhad"),
    ];

    let matches = cross_match(&first, &second, &MatchOptions::default()).unwrap();
    let partners: Vec<&str> = matches.iter().map(|m| m.second.ldn.as_str()).collect();
    assert_eq!(partners, vec!["B1", "B2", "B3"]);
    assert!(matches.iter().all(|m| m.first.ldn == "A"));
}

#[test]
fn catalog_like_collections() {
    let first = mc14_collection();
    let second = mc12_collection();

    let matcher = CrossMatcher::new(MatchOptions::new(40.0).unwrap());
    let matches = matcher.cross_match(&first, &second).unwrap();

    // Only the two ttbar labels overlap enough; "mc14_13TeV_Zee" shares just
    // "mc14" (1 of 3 tokens) with the 8TeV ttbar label.
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].first.ldn, "mc14_13TeV.110401.ttbar_nonallhad");
    assert_eq!(matches[0].second.ldn, "mc12_8TeV.117050.ttbar");
    assert_eq!(matches[0].first.field("type"), Some("AOD"));
}

#[test]
fn inputs_are_untouched() {
    let first = mc14_collection();
    let second = mc12_collection();
    let before = (first.clone(), second.clone());

    let _ = cross_match(&first, &second, &MatchOptions::default()).unwrap();

    assert_eq!((first, second), before);
}

#[test]
fn invalid_label_aborts_the_comparison() {
    let first = mc14_collection();
    let second = vec![Record::new("broken", "")];

    let err = cross_match(&first, &second, &MatchOptions::default()).unwrap_err();
    assert!(matches!(err, MatchError::Pair { .. }));
    assert!(err.to_string().contains("broken"));
}

#[test]
fn zero_token_label_is_an_error_not_a_score() {
    assert!(matches!(
        similarity("", "a_b", "_"),
        Err(MatchError::InvalidLabel { .. })
    ));
}
