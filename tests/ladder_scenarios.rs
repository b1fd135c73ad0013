//! End-to-end ladder scenarios over the public API

use word_ladder::commands::{FindOutcome, build_graph, find_words};
use word_ladder::config::LadderConfig;
use word_ladder::core::WordStore;
use word_ladder::rules::{InsertRule, RuleType, SubstituteRule, SwapRule, TransformationRule};
use word_ladder::search::{PathFinder, find_ladder};

fn store_with(words: &[&str], rules: &[RuleType]) -> WordStore {
    let mut store = WordStore::from_words(words);
    for rule in rules {
        store.apply(rule);
    }
    store
}

#[test]
fn cat_to_dog_with_substitution_only() {
    let store = store_with(
        &["cat", "cot", "cog", "dog", "dot"],
        &[RuleType::Substitute(SubstituteRule)],
    );

    let ladder = find_ladder(&store, "cat", "dog");
    assert_eq!(ladder.len(), 4);
    assert!(
        ladder == ["cat", "cot", "cog", "dog"] || ladder == ["cat", "cot", "dot", "dog"],
        "unexpected ladder {ladder:?}"
    );

    assert_eq!(find_ladder(&store, "cat", "cat"), vec!["cat"]);
    assert!(find_ladder(&store, "cat", "xyz").is_empty());
}

#[test]
fn substitution_needs_single_difference() {
    let mut store = WordStore::from_words(["cat", "bat", "bit"]);
    SubstituteRule.apply(&mut store);

    assert!(store.has_edge("cat", "bat"));
    assert!(!store.has_edge("cat", "bit"));
}

#[test]
fn insertion_links_shorter_word() {
    let mut store = WordStore::from_words(["at", "bat"]);
    InsertRule.apply(&mut store);

    assert!(store.has_edge("at", "bat"));
}

#[test]
fn swap_links_without_self_loops() {
    let mut store = WordStore::from_words(["ab", "ba", "aa"]);
    SwapRule.apply(&mut store);

    assert!(store.has_edge("ab", "ba"));
    assert!(!store.has_edge("ab", "ab"));
    assert!(!store.has_edge("aa", "aa"));
    assert_eq!(store.edge_count(), 2);
}

#[test]
fn mixed_rules_build_longer_ladders() {
    let store = store_with(&["a", "at", "bat", "tab", "tub"], &RuleType::all());

    assert_eq!(
        find_ladder(&store, "a", "tub"),
        vec!["a", "at", "bat", "tab", "tub"]
    );
    // Insert edges only grow words, so there is no way back down
    assert!(find_ladder(&store, "tub", "a").is_empty());
}

#[test]
fn every_word_reaches_itself() {
    let store = store_with(&["cold", "cord", "card", "ward", "warm"], &RuleType::all());
    let finder = PathFinder::new(&store);

    for (_, word) in store.iter() {
        assert!(store.exists(word));
        assert_eq!(finder.find(word, word), vec![word]);
    }
}

#[test]
fn unknown_words_never_match() {
    let store = store_with(&["cold", "cord"], &RuleType::all());

    assert!(find_ladder(&store, "warm", "cold").is_empty());
    assert!(find_ladder(&store, "cold", "warm").is_empty());
    assert!(find_ladder(&store, "warm", "warm").is_empty());
}

#[test]
fn rule_order_does_not_change_ladder_length() {
    let words = ["cat", "cot", "cog", "dog", "dot", "act", "coat", "goat", "got"];
    let forward = store_with(&words, &RuleType::all());
    let backward = store_with(
        &words,
        &[
            RuleType::Swap(SwapRule),
            RuleType::Insert(InsertRule),
            RuleType::Substitute(SubstituteRule),
        ],
    );

    for start in words {
        for end in words {
            assert_eq!(
                find_ladder(&forward, start, end).len(),
                find_ladder(&backward, start, end).len(),
                "{start} -> {end}"
            );
        }
    }
    assert_eq!(forward.edge_count(), backward.edge_count());
}

#[test]
fn builtin_dictionary_end_to_end() {
    let build = build_graph(&LadderConfig::default()).unwrap();

    let result = find_words(&build.store, "Cold", "warm").unwrap();
    assert_eq!(result.outcome, FindOutcome::Found);
    assert_eq!(result.ladder.first(), Some(&"cold"));
    assert_eq!(result.ladder.last(), Some(&"warm"));
    for step in result.ladder.windows(2) {
        assert!(build.store.has_edge(step[0], step[1]));
    }

    let missing = find_words(&build.store, "cold", "zebra").unwrap();
    assert_eq!(missing.outcome, FindOutcome::UnknownEnd);
    assert!(missing.ladder.is_empty());
}
