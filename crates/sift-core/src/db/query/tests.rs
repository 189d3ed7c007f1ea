use crate::{
    config::QueryOptions,
    db::{
        order::OrderBy,
        predicate::Predicate,
        query::{EntitySource, QueryEngine, entity_map, ordered_entity_map},
    },
    obs::{CollectingSink, DiagnosticKind},
    test_fixtures::{Item, ItemAttr, abc},
};
use proptest::prelude::*;

type P = Predicate<ItemAttr>;
type C = OrderBy<Item>;

fn sorted_ids(items: &[&Item]) -> Vec<i64> {
    let mut ids: Vec<i64> = items.iter().map(|item| item.id).collect();
    ids.sort_unstable();
    ids
}

fn names<'a>(items: &[&'a Item]) -> Vec<&'a str> {
    items.iter().map(|item| item.name.as_str()).collect()
}

#[test]
fn absent_predicate_returns_everything() {
    let engine = QueryEngine::default();
    let items = abc();
    let map = entity_map(abc());
    let ordered = ordered_entity_map(abc().into_iter().rev());

    assert_eq!(names(&engine.filter(&items, None)), ["A", "B", "C"]);
    assert_eq!(names(&engine.filter(items.as_slice(), None)), ["A", "B", "C"]);
    assert_eq!(sorted_ids(&engine.filter(&map, None)), [1, 2, 3]);
    assert_eq!(names(&engine.filter(&ordered, None)), ["C", "B", "A"]);
}

#[test]
fn present_predicate_scans_in_source_order() {
    let engine = QueryEngine::default();
    let items = abc();
    let predicate = P::gt(P::attribute(ItemAttr::Rank), P::literal(15i64));

    assert_eq!(names(&engine.filter(&items, Some(&predicate))), ["A", "C"]);
}

#[test]
fn keyed_sources_answer_identifier_filters_by_lookup() {
    let sink = CollectingSink::new();
    let engine = QueryEngine::new(&sink);
    let map = entity_map(abc());
    let predicate = P::any_identifier([3i64, 9, 1, 3]);

    let found = engine.filter(&map, Some(&predicate));

    assert_eq!(names(&found), ["C", "A"]);
    assert_eq!(
        sink.take()[0].kind,
        DiagnosticKind::IdentifierFastPath {
            requested: 3,
            found: 2
        }
    );
}

#[test]
fn plain_sequences_always_scan() {
    let sink = CollectingSink::new();
    let engine = QueryEngine::new(&sink);
    let items = abc();
    let predicate = P::any_identifier([3i64, 1]);

    assert_eq!(names(&engine.filter(&items, Some(&predicate))), ["A", "C"]);
    assert!(sink.is_empty());
}

#[test]
fn disabled_identifier_fast_path_scans_keyed_sources() {
    let sink = CollectingSink::new();
    let options = QueryOptions {
        identifier_fast_path: false,
        ..QueryOptions::default()
    };
    let engine = QueryEngine::with_options(&sink, options);
    let ordered = ordered_entity_map(abc());

    let found = engine.filter(&ordered, Some(&P::any_identifier([3i64, 1])));

    assert_eq!(names(&found), ["A", "C"]);
    assert!(sink.is_empty());
}

#[test]
fn order_supplies_the_source_index() {
    let sink = CollectingSink::new();
    let engine = QueryEngine::new(&sink);
    let ordered = ordered_entity_map(abc());

    let result = engine.order(&ordered, &[C::explicit([2, 3, 1])]);

    assert_eq!(names(&result), ["B", "C", "A"]);
    assert_eq!(
        sink.take()[0].kind,
        DiagnosticKind::ExplicitSequenceFastPath { listed: 3 }
    );
}

#[test]
fn query_filters_then_orders() {
    let engine = QueryEngine::default();
    let map = entity_map(abc());
    let predicate = P::lt(P::attribute(ItemAttr::Rank), P::literal(25i64));

    let result = engine.query(&map, Some(&predicate), &[C::AttributeDescending(ItemAttr::Rank)]);

    assert_eq!(names(&result), ["C", "B"]);
}

#[test]
fn query_with_explicit_order_over_filtered_subset() {
    let engine = QueryEngine::default();
    let map = entity_map(abc());
    let predicate = P::any_identifier([1i64, 2]);

    let result = engine.query(&map, Some(&predicate), &[C::explicit([2, 3, 1])]);

    assert_eq!(names(&result), ["B", "A"]);
}

#[test]
fn engine_exposes_identifier_extraction() {
    let engine = QueryEngine::default();

    assert_eq!(
        engine.extract_identifiers::<ItemAttr, i64>(&P::any_identifier([5i64, 5, 4])),
        Some(vec![5, 4])
    );
    assert_eq!(
        engine.extract_identifiers::<ItemAttr, i64>(&P::attribute(ItemAttr::Active)),
        None
    );
}

#[test]
fn entity_sources_hold_every_entity() {
    let items = abc();

    assert_eq!(EntitySource::<Item>::entities(&items).count(), 3);
    assert!(EntitySource::<Item>::id_index(&items).is_none());
    assert!(EntitySource::<Item>::id_index(&entity_map(abc())).is_some());
}

// ---- properties --------------------------------------------------------

fn arb_items() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::btree_set(0i64..40, 0..20).prop_map(|ids| {
        ids.into_iter()
            .map(|id| Item::new(id, id % 7, "x"))
            .collect()
    })
}

proptest! {
    #[test]
    fn identifier_fast_path_matches_scan(
        items in arb_items(),
        wanted in prop::collection::vec(0i64..40, 1..6),
    ) {
        let predicate = P::any_identifier(wanted);
        let scan = QueryEngine::with_options(&crate::obs::NoopSink, QueryOptions::without_fast_paths());
        let fast = QueryEngine::default();

        let expected = sorted_ids(&scan.filter(&items, Some(&predicate)));
        let map = entity_map(items.clone());
        let ordered = ordered_entity_map(items.clone());

        prop_assert_eq!(sorted_ids(&fast.filter(&items, Some(&predicate))), expected.clone());
        prop_assert_eq!(sorted_ids(&fast.filter(&map, Some(&predicate))), expected.clone());
        prop_assert_eq!(sorted_ids(&fast.filter(&ordered, Some(&predicate))), expected.clone());
        prop_assert_eq!(sorted_ids(&scan.filter(&map, Some(&predicate))), expected);
    }

    #[test]
    fn options_never_change_ordered_results(
        items in arb_items(),
        keys in prop::collection::vec(0i64..40, 0..40),
    ) {
        let criteria = [C::AttributeAscending(ItemAttr::Rank), C::ExplicitIdentifiers(keys)];
        let ordered = ordered_entity_map(items);
        let slow = QueryEngine::with_options(&crate::obs::NoopSink, QueryOptions::without_fast_paths());

        prop_assert_eq!(
            QueryEngine::default().order(&ordered, &criteria),
            slow.order(&ordered, &criteria)
        );
    }
}
