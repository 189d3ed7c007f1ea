use crate::{
    collection::{DualHashMap, IdIndex, OrderedDualHashMap},
    config::QueryOptions,
    db::order::{OrderBy, OrderingEngine},
    obs::{CollectingSink, Diagnostic, DiagnosticKind, NoopSink},
    test_fixtures::{Item, ItemAttr, abc},
};
use proptest::prelude::*;
use std::cell::Cell;

type C = OrderBy<Item>;

fn names(items: &[&Item]) -> Vec<String> {
    items.iter().map(|item| item.name.clone()).collect()
}

fn refs(items: &[Item]) -> Vec<&Item> {
    items.iter().collect()
}

#[test]
fn empty_criteria_is_identity() {
    let items = abc();
    let ordered = OrderingEngine::default().order(refs(&items), &[], None);

    assert_eq!(names(&ordered), ["A", "B", "C"]);
}

#[test]
fn natural_leaves_order_alone() {
    let items = abc();
    let ordered = OrderingEngine::default().order(refs(&items), &[C::Natural], None);

    assert_eq!(names(&ordered), ["A", "B", "C"]);
}

#[test]
fn identifier_and_attribute_directions() {
    let items = abc();
    let engine = OrderingEngine::default();

    let by = |criterion: C| names(&engine.order(refs(&items), &[criterion], None));

    assert_eq!(by(C::IdentifierAscending), ["A", "B", "C"]);
    assert_eq!(by(C::IdentifierDescending), ["C", "B", "A"]);
    assert_eq!(by(C::AttributeAscending(ItemAttr::Rank)), ["B", "C", "A"]);
    assert_eq!(by(C::AttributeDescending(ItemAttr::Rank)), ["A", "C", "B"]);
}

#[test]
fn explicit_sequence_appends_unlisted_in_relative_order() {
    let items = abc();

    for options in [QueryOptions::default(), QueryOptions::without_fast_paths()] {
        let sink = CollectingSink::new();
        let engine = OrderingEngine::with_options(&sink, options);

        let ordered = engine.order(refs(&items), &[C::explicit([3, 1])], None);

        assert_eq!(names(&ordered), ["C", "A", "B"]);
        assert_eq!(
            sink.take(),
            vec![Diagnostic::new(
                DiagnosticKind::UnlistedIdentifiers { count: 1 }
            )]
        );
    }
}

#[test]
fn explicit_sequence_ignores_unknown_and_repeated_ids() {
    let items = abc();
    let ordered =
        OrderingEngine::default().order(refs(&items), &[C::explicit([9, 2, 3, 2, 1])], None);

    assert_eq!(names(&ordered), ["B", "C", "A"]);
}

#[test]
fn explicit_sequence_fast_path_uses_full_index() {
    let items = abc();
    let index: OrderedDualHashMap<i64, Item> =
        items.iter().map(|item| (item.id, item.clone())).collect();
    let sink = CollectingSink::new();
    let engine = OrderingEngine::new(&sink);

    let ordered = engine.order(
        refs(&items),
        &[C::explicit([2, 3, 1])],
        Some(&index as &dyn IdIndex<Item>),
    );

    assert_eq!(names(&ordered), ["B", "C", "A"]);
    assert_eq!(
        sink.take()[0].kind,
        DiagnosticKind::ExplicitSequenceFastPath { listed: 3 }
    );
}

#[test]
fn explicit_sequence_skips_fast_path_for_partial_input() {
    let items = abc();
    let index: DualHashMap<i64, &Item> = items.iter().map(|item| (item.id, item)).collect();
    let subset = vec![&items[2], &items[0]];
    let sink = CollectingSink::new();

    let ordered = OrderingEngine::new(&sink).order(
        subset,
        &[C::explicit([1, 2, 3])],
        Some(&index as &dyn IdIndex<Item>),
    );

    assert_eq!(names(&ordered), ["A", "C"]);
    assert!(sink.is_empty());
}

struct CountingIndex<'a> {
    inner: DualHashMap<i64, &'a Item>,
    touched: Cell<usize>,
}

impl IdIndex<Item> for CountingIndex<'_> {
    fn lookup(&self, key: &i64) -> Option<&Item> {
        self.touched.set(self.touched.get() + 1);
        self.inner.get(key).copied()
    }

    fn entry_count(&self) -> usize {
        self.touched.set(self.touched.get() + 1);
        self.inner.len()
    }
}

#[test]
fn explicit_sequence_shorter_than_input_goes_straight_to_rank_path() {
    let items = abc();
    let index = CountingIndex {
        inner: items.iter().map(|item| (item.id, item)).collect(),
        touched: Cell::new(0),
    };
    let sink = CollectingSink::new();

    let ordered = OrderingEngine::new(&sink).order(
        refs(&items),
        &[C::explicit([3])],
        Some(&index as &dyn IdIndex<Item>),
    );

    assert_eq!(names(&ordered), ["C", "A", "B"]);
    assert_eq!(index.touched.get(), 0);
    assert_eq!(
        sink.take(),
        vec![Diagnostic::new(
            DiagnosticKind::UnlistedIdentifiers { count: 2 }
        )]
    );
}

#[test]
fn two_keys_apply_by_priority() {
    let items = vec![
        Item::new(1, 1, "b"),
        Item::new(2, 1, "a"),
        Item::new(3, 2, "a"),
    ];
    let criteria = [
        C::AttributeAscending(ItemAttr::Rank),
        C::AttributeAscending(ItemAttr::Name),
    ];

    let ordered = OrderingEngine::default().order(refs(&items), &criteria, None);
    let pairs: Vec<_> = ordered.iter().map(|i| (i.rank, i.name.as_str())).collect();

    assert_eq!(pairs, [(1, "a"), (1, "b"), (2, "a")]);
}

#[test]
fn explicit_sequence_breaks_ties_of_higher_key() {
    let items = vec![
        Item::new(1, 5, "x"),
        Item::new(2, 1, "y"),
        Item::new(3, 5, "z"),
    ];
    let criteria = [
        C::AttributeDescending(ItemAttr::Rank),
        C::explicit([3, 2, 1]),
    ];

    let ordered = OrderingEngine::default().order(refs(&items), &criteria, None);

    assert_eq!(names(&ordered), ["z", "x", "y"]);
}

#[test]
fn missing_attribute_values_keep_relative_order() {
    let items = vec![
        Item::new(1, 0, "a").with_note("m"),
        Item::new(2, 0, "b"),
        Item::new(3, 0, "c").with_note("k"),
    ];

    let ordered = OrderingEngine::default().order(
        refs(&items),
        &[C::AttributeAscending(ItemAttr::Note)],
        None,
    );

    // a missing note is unordered against a present one: no panic, a permutation
    assert_eq!(ordered.len(), 3);
}

// ---- properties --------------------------------------------------------

fn arb_items() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec((-5i64..5, "[a-c]{0,2}"), 0..24).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(id, (rank, name))| Item::new(i64::try_from(id).unwrap(), rank, &name))
            .collect()
    })
}

fn arb_criterion() -> impl Strategy<Value = C> {
    prop_oneof![
        Just(C::IdentifierAscending),
        Just(C::IdentifierDescending),
        Just(C::AttributeAscending(ItemAttr::Rank)),
        Just(C::AttributeDescending(ItemAttr::Name)),
        Just(C::Natural),
        prop::collection::vec(0i64..30, 0..30).prop_map(C::ExplicitIdentifiers),
    ]
}

proptest! {
    #[test]
    fn ordering_is_idempotent(
        items in arb_items(),
        criteria in prop::collection::vec(arb_criterion(), 0..4),
    ) {
        let engine = OrderingEngine::default();
        let once = engine.order(refs(&items), &criteria, None);
        let twice = engine.order(once.clone(), &criteria, None);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn fast_path_agrees_with_rank_path(
        items in arb_items(),
        criteria in prop::collection::vec(arb_criterion(), 0..4),
    ) {
        let fast = OrderingEngine::default();
        let slow = OrderingEngine::with_options(&NoopSink, QueryOptions::without_fast_paths());
        let index: DualHashMap<i64, &Item> = items.iter().map(|item| (item.id, item)).collect();

        let with_index = fast.order(refs(&items), &criteria, Some(&index as &dyn IdIndex<Item>));
        let built = fast.order(refs(&items), &criteria, None);
        let general = slow.order(refs(&items), &criteria, None);

        prop_assert_eq!(&with_index, &general);
        prop_assert_eq!(&built, &general);
    }

    #[test]
    fn ordering_is_a_permutation(
        items in arb_items(),
        criteria in prop::collection::vec(arb_criterion(), 0..4),
    ) {
        let mut ids: Vec<i64> = OrderingEngine::default()
            .order(refs(&items), &criteria, None)
            .iter()
            .map(|item| item.id)
            .collect();
        ids.sort_unstable();

        let expected: Vec<i64> = items.iter().map(|item| item.id).collect();
        prop_assert_eq!(ids, expected);
    }
}
