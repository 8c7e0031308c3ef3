//! Property-based tests for the filter pipeline and pagination window.
//!
//! Tests validate:
//! 1. Every query match really contains the query in some field
//! 2. Every region match contains the filter; an empty filter admits all
//! 3. Filtering is idempotent and order-preserving
//! 4. The window shows exactly min(size, count) items and only grows

use country_browser::model::Country;
use country_browser::state::{
    execute_search, PageWindow, SearchFields, INITIAL_PAGE_SIZE, PAGE_INCREMENT,
};
use proptest::prelude::*;
use serde_json::{json, Value};

const REGIONS: [&str; 5] = ["Asia", "Europe", "Africa", "Americas", ""];

fn arb_country() -> impl Strategy<Value = Country> {
    (
        "[A-Za-z ]{0,12}",
        prop::sample::select(REGIONS.to_vec()),
        prop::option::of("[A-Za-z]{1,8}"),
        prop::option::of(0u64..2_000_000_000),
    )
        .prop_map(|(name, region, capital, population)| {
            let mut value = json!({ "name": name, "region": region });
            if let Some(capital) = capital {
                value["capital"] = Value::String(capital);
            }
            if let Some(population) = population {
                value["population"] = json!(population);
            }
            Country::from_value(value).expect("generated value is an object")
        })
}

fn arb_countries() -> impl Strategy<Value = Vec<Country>> {
    prop::collection::vec(arb_country(), 0..40)
}

fn arb_query() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[A-Za-z0-9]{1,3}"]
}

fn arb_region_filter() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["", "Asia", "Europe", "Am", "Polar"]).prop_map(str::to_string)
}

// ===== Property 1: Query matches =====

proptest! {
    #[test]
    fn every_result_contains_query_in_some_field(
        items in arb_countries(),
        query in arb_query(),
    ) {
        let fields = SearchFields::from_records(&items);
        let results = execute_search(&items, &fields, &query, "");
        let needle = query.to_lowercase();

        for item in results {
            prop_assert!(
                needle.is_empty()
                    || fields
                        .iter()
                        .any(|f| item.search_text(f).is_some_and(|t| t.contains(&needle))),
                "result {:?} does not contain {:?}",
                item.name(),
                query
            );
        }
    }

    #[test]
    fn query_is_case_insensitive(items in arb_countries(), query in "[a-z]{1,3}") {
        let fields = SearchFields::from_records(&items);
        let lower = execute_search(&items, &fields, &query, "");
        let upper = execute_search(&items, &fields, &query.to_uppercase(), "");
        prop_assert_eq!(lower, upper);
    }
}

// ===== Property 2: Region filter =====

proptest! {
    #[test]
    fn every_result_region_contains_filter(
        items in arb_countries(),
        region in arb_region_filter(),
    ) {
        let fields = SearchFields::from_records(&items);
        let results = execute_search(&items, &fields, "", &region);

        if region.is_empty() {
            prop_assert_eq!(results.len(), items.len());
        }
        for item in results {
            prop_assert!(item.region().is_some_and(|r| r.contains(region.as_str())));
        }
    }
}

// ===== Property 3: Idempotence =====

proptest! {
    #[test]
    fn filtering_is_idempotent(
        items in arb_countries(),
        query in arb_query(),
        region in arb_region_filter(),
    ) {
        let fields = SearchFields::from_records(&items);
        let once: Vec<Country> = execute_search(&items, &fields, &query, &region)
            .into_iter()
            .cloned()
            .collect();
        let twice = execute_search(&once, &fields, &query, &region);

        prop_assert_eq!(twice.len(), once.len());
        for (a, b) in twice.iter().zip(once.iter()) {
            prop_assert_eq!(*a, b);
        }
    }

    #[test]
    fn results_keep_input_order(
        items in arb_countries(),
        query in arb_query(),
        region in arb_region_filter(),
    ) {
        let fields = SearchFields::from_records(&items);
        let results = execute_search(&items, &fields, &query, &region);
        let positions: Vec<usize> = results
            .iter()
            .map(|r| {
                items
                    .iter()
                    .position(|i| std::ptr::eq(i, *r))
                    .expect("result borrows from input")
            })
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

// ===== Property 4: Pagination window =====

proptest! {
    #[test]
    fn window_shows_min_of_size_and_count(count in 0usize..100, presses in 0usize..15) {
        let items: Vec<usize> = (0..count).collect();
        let mut window = PageWindow::new();
        for _ in 0..presses {
            window.load_more();
        }

        let expected = INITIAL_PAGE_SIZE + presses * PAGE_INCREMENT;
        prop_assert_eq!(window.size(), expected);
        prop_assert_eq!(window.apply(&items).len(), expected.min(count));
        prop_assert_eq!(window.apply(&items), &items[..expected.min(count)]);
    }

    #[test]
    fn load_more_grows_by_exactly_one_increment(presses in 0usize..50) {
        let mut window = PageWindow::new();
        for _ in 0..presses {
            let before = window.size();
            window.load_more();
            prop_assert_eq!(window.size(), before + PAGE_INCREMENT);
        }
    }
}
