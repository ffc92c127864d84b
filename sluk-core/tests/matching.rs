use sluk_core::query::{SearchQuery, FUZZY_DISTANCE_MAX};

#[test]
fn query_normalizes_words_to_one_uppercase_term() {
    let query = SearchQuery::new(&["white", "Heavy", "CHECK", "mark"], true);
    assert_eq!(query.term(), "WHITE HEAVY CHECK MARK");
    assert!(query.is_exact());
}

#[test]
fn exact_mode_is_case_insensitive_via_normalization() {
    let query = SearchQuery::new(&["latin", "capital", "letter", "a"], true);
    assert_eq!(query.rank("LATIN CAPITAL LETTER A"), Some(0));
    assert_eq!(query.rank("LATIN SMALL LETTER A"), None);
}

#[test]
fn exact_mode_rejects_substrings() {
    let query = SearchQuery::new(&["check", "mark"], true);
    assert_eq!(query.rank("WHITE HEAVY CHECK MARK"), None);
}

#[test]
fn fuzzy_rank_is_minimum_over_description_words() {
    // "A" scores 0 against the word A, 4 against LATIN, 6 against
    // CAPITAL; the record's rank is the minimum.
    let query = SearchQuery::new(&["a"], false);
    assert_eq!(query.rank("LATIN CAPITAL LETTER A"), Some(0));
    assert_eq!(query.rank("LATIN CAPITAL"), Some(4));
}

#[test]
fn fuzzy_requires_term_characters_in_order_within_one_word() {
    let query = SearchQuery::new(&["kcehc"], false);
    assert_eq!(query.rank("CHECK MARK"), None);
}

#[test]
fn fuzzy_multi_word_term_cannot_match_single_words() {
    // The whole term, spaces included, is compared against each word;
    // no single word contains "CAPITAL LETTER A" as a subsequence.
    let query = SearchQuery::new(&["capital", "letter", "a"], false);
    assert_eq!(query.rank("LATIN CAPITAL LETTER A"), None);
}

#[test]
fn fuzzy_threshold_is_exclusive() {
    // Term is a subsequence, distance is exactly the threshold.
    let word = format!("AB{}", "X".repeat(FUZZY_DISTANCE_MAX as usize));
    let query = SearchQuery::new(&["ab"], false);
    assert_eq!(query.rank(&word), None);

    let word = format!("AB{}", "X".repeat((FUZZY_DISTANCE_MAX - 1) as usize));
    assert_eq!(query.rank(&word), Some(FUZZY_DISTANCE_MAX - 1));
}
