//! Property tests for the typewriter and carousel state machines.

use folio_core::{
    ALL_CATEGORY, CarouselError, CarouselFilter, Categorized, TypeMode, TypewriterCycler,
};
use proptest::prelude::*;

// ── Typewriter ────────────────────────────────────────────────

fn arb_phrases() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-zA-Z .é✓]{1,8}", 1..=4)
}

/// Transitions needed to type, hold, delete, and leave a phrase of `n` chars.
fn cycle_len(n: usize) -> usize {
    2 * n + 3
}

proptest! {
    /// Every phrase is reached at `(Typing, 0)` in round-robin order.
    #[test]
    fn typewriter_visits_phrases_round_robin(phrases in arb_phrases(), rounds in 1usize..=3) {
        let mut tw = TypewriterCycler::new(phrases.clone()).unwrap();
        let mut expected = 0usize;

        for _ in 0..rounds {
            for phrase in &phrases {
                prop_assert_eq!(tw.phrase_index(), expected);
                prop_assert_eq!(tw.char_index(), 0);
                prop_assert_eq!(tw.mode(), TypeMode::Typing);

                for _ in 0..cycle_len(phrase.chars().count()) {
                    tw.advance();
                }
                expected = (expected + 1) % phrases.len();
            }
        }
    }

    /// Typing only ever grows the text by one char (or holds), deleting
    /// only shrinks it by one until empty.
    #[test]
    fn typewriter_char_index_is_monotonic_per_phase(phrases in arb_phrases(), steps in 1usize..200) {
        let mut tw = TypewriterCycler::new(phrases).unwrap();

        for _ in 0..steps {
            let (mode, before, phrase) = (tw.mode(), tw.char_index(), tw.phrase_index());
            let len = tw.current_phrase().chars().count();
            tw.advance();
            let after = tw.char_index();

            match mode {
                TypeMode::Typing if before < len => prop_assert_eq!(after, before + 1),
                TypeMode::Typing => {
                    prop_assert_eq!(after, before);
                    prop_assert_eq!(tw.mode(), TypeMode::HoldingFull);
                }
                TypeMode::HoldingFull => {
                    prop_assert_eq!(after, before);
                    prop_assert_eq!(tw.mode(), TypeMode::Deleting);
                }
                TypeMode::Deleting if before > 0 => prop_assert_eq!(after, before - 1),
                TypeMode::Deleting => {
                    prop_assert_eq!(after, 0);
                    prop_assert_eq!(tw.mode(), TypeMode::Typing);
                    prop_assert_eq!(tw.phrase_index(), (phrase + 1) % tw.phrase_count());
                }
            }

            prop_assert!(tw.char_index() <= tw.current_phrase().chars().count());
            prop_assert!(tw.current_phrase().starts_with(tw.current_text()));
        }
    }

    /// A single phrase returns to the initial state after one full cycle.
    #[test]
    fn typewriter_single_phrase_cycle_is_idempotent(phrase in "[a-z]{1,12}") {
        let mut tw = TypewriterCycler::new([phrase.clone()]).unwrap();
        for _ in 0..cycle_len(phrase.chars().count()) {
            tw.advance();
        }
        prop_assert_eq!(tw.phrase_index(), 0);
        prop_assert_eq!(tw.char_index(), 0);
        prop_assert_eq!(tw.mode(), TypeMode::Typing);
        prop_assert_eq!(tw.current_text(), "");
    }
}

// ── Carousel ──────────────────────────────────────────────────

const CATEGORIES: [&str; 3] = ["a", "b", "c"];

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: usize,
    cat: &'static str,
}

impl Categorized for Item {
    fn category(&self) -> &str {
        self.cat
    }
}

fn arb_items() -> impl Strategy<Value = Vec<Item>> {
    proptest::collection::vec(0usize..CATEGORIES.len(), 0..12).prop_map(|cats| {
        cats.into_iter()
            .enumerate()
            .map(|(id, c)| Item {
                id,
                cat: CATEGORIES[c],
            })
            .collect()
    })
}

#[derive(Debug, Clone)]
enum Nav {
    Next,
    Previous,
}

fn arb_nav() -> impl Strategy<Value = Vec<Nav>> {
    proptest::collection::vec(prop_oneof![Just(Nav::Next), Just(Nav::Previous)], 0..30)
}

fn arb_filter() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(ALL_CATEGORY),
        Just(CATEGORIES[0]),
        Just(CATEGORIES[1]),
        Just(CATEGORIES[2]),
    ]
}

proptest! {
    /// `next` N times from 0 returns to 0; `previous` from 0 lands on N-1.
    #[test]
    fn carousel_wraps_both_ways(items in arb_items(), filter in arb_filter()) {
        let mut c = CarouselFilter::new(items, CATEGORIES);
        c.set_filter(filter).unwrap();
        let n = c.len();

        if n == 0 {
            c.next();
            c.previous();
            prop_assert_eq!(c.current_index(), None);
            prop_assert!(c.current().is_none());
        } else {
            for _ in 0..n {
                c.next();
            }
            prop_assert_eq!(c.current_index(), Some(0));
            c.previous();
            prop_assert_eq!(c.current_index(), Some(n - 1));
        }
    }

    /// Any navigation followed by a valid filter lands on index 0 of an
    /// order-preserving, correctly filtered subset.
    #[test]
    fn carousel_filter_resets_and_preserves_order(
        items in arb_items(),
        first in arb_filter(),
        moves in arb_nav(),
        second in arb_filter(),
    ) {
        let mut c = CarouselFilter::new(items.clone(), CATEGORIES);
        c.set_filter(first).unwrap();
        for m in moves {
            match m {
                Nav::Next => c.next(),
                Nav::Previous => c.previous(),
            }
        }
        c.set_filter(second).unwrap();

        let expected: Vec<&Item> = items
            .iter()
            .filter(|i| second == ALL_CATEGORY || i.cat == second)
            .collect();
        prop_assert_eq!(c.visible_items(), expected.clone());
        prop_assert_eq!(c.current_index(), (!expected.is_empty()).then_some(0));
        prop_assert_eq!(c.current(), expected.first().copied());
    }

    /// The index stays in bounds under arbitrary navigation.
    #[test]
    fn carousel_index_always_valid(items in arb_items(), filter in arb_filter(), moves in arb_nav()) {
        let mut c = CarouselFilter::new(items, CATEGORIES);
        c.set_filter(filter).unwrap();
        for m in moves {
            match m {
                Nav::Next => c.next(),
                Nav::Previous => c.previous(),
            }
            match c.current_index() {
                Some(i) => prop_assert!(i < c.len()),
                None => prop_assert!(c.is_empty()),
            }
        }
    }

    /// Rejected input never changes state.
    #[test]
    fn carousel_rejects_without_mutation(
        items in arb_items(),
        filter in arb_filter(),
        moves in arb_nav(),
        extra in 0usize..5,
    ) {
        let mut c = CarouselFilter::new(items, CATEGORIES);
        c.set_filter(filter).unwrap();
        for m in moves {
            match m {
                Nav::Next => c.next(),
                Nav::Previous => c.previous(),
            }
        }
        let (index, active) = (c.current_index(), c.active_filter().to_string());

        let bad = c.len() + extra;
        prop_assert_eq!(
            c.select_index(bad),
            Err(CarouselError::IndexOutOfRange { index: bad, len: c.len() })
        );
        prop_assert_eq!(
            c.set_filter("nonexistent"),
            Err(CarouselError::InvalidCategory("nonexistent".into()))
        );
        prop_assert_eq!(c.current_index(), index);
        prop_assert_eq!(c.active_filter(), active.as_str());
    }
}
