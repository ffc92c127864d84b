//! Search query construction and matching.

/// Fuzzy matches at or above this edit distance are discarded.
pub const FUZZY_DISTANCE_MAX: u32 = 10;

/// An immutable search query, built once from the command-line words.
///
/// The term is normalized at construction: words are uppercased and
/// joined with single spaces, so matching against the (already
/// uppercase) database descriptions is a plain comparison.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    term: String,
    exact: bool,
}

impl SearchQuery {
    pub fn new<S: AsRef<str>>(words: &[S], exact: bool) -> Self {
        let term = words
            .iter()
            .map(|w| w.as_ref().to_uppercase())
            .collect::<Vec<_>>()
            .join(" ");
        Self { term, exact }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// Score a description against this query.
    ///
    /// Returns `Some(rank)` when the description is accepted; lower
    /// ranks are better. Exact mode accepts only full equality, always
    /// at rank 0. Fuzzy mode compares the whole term against each word
    /// of the description and keeps the closest word's edit distance,
    /// accepting it below [`FUZZY_DISTANCE_MAX`].
    pub fn rank(&self, description: &str) -> Option<u32> {
        if self.exact {
            return (description == self.term).then_some(0);
        }

        description
            .split(' ')
            .filter(|word| !word.is_empty())
            .filter_map(|word| word_distance(&self.term, word))
            .min()
            .filter(|&distance| distance < FUZZY_DISTANCE_MAX)
    }
}

/// Edit distance between the term and one description word, or `None`
/// when the term's characters do not appear in order within the word.
fn word_distance(term: &str, word: &str) -> Option<u32> {
    if !is_subsequence(term, word) {
        return None;
    }
    Some(strsim::levenshtein(term, word) as u32)
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut chars = haystack.chars();
    needle.chars().all(|n| chars.any(|h| h == n))
}
