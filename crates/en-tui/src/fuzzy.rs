//! Subsequence matching for the quick panel query.
//!
//! A choice matches when every non-space character of the query appears in
//! it, in order, ignoring case. Filtering never reorders choices, so files
//! promoted for the open file stay on top while the user types.

/// Returns the char indices of `candidate` matched by `query`, or `None`
/// when it does not match.
///
/// Matching is greedy from the left.
///
/// # Examples
///
/// ```
/// use en_tui::fuzzy::match_positions;
///
/// assert_eq!(match_positions("pst", "post.js"), Some(vec![0, 2, 3]));
/// assert_eq!(match_positions("xyz", "post.js"), None);
/// ```
#[must_use]
pub fn match_positions(query: &str, candidate: &str) -> Option<Vec<usize>> {
    let mut needles = query
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .peekable();
    let mut positions = Vec::new();

    for (index, c) in candidate.chars().enumerate() {
        let Some(&needle) = needles.peek() else {
            break;
        };
        if c.to_lowercase().eq(std::iter::once(needle)) {
            positions.push(index);
            needles.next();
        }
    }

    needles.peek().is_none().then_some(positions)
}

/// Returns `true` if `query` matches `candidate`.
#[must_use]
pub fn is_match(query: &str, candidate: &str) -> bool {
    match_positions(query, candidate).is_some()
}

/// Returns the indices of `choices` matching `query`, in their original
/// order.
#[must_use]
pub fn filter_indices(query: &str, choices: &[String]) -> Vec<usize> {
    choices
        .iter()
        .enumerate()
        .filter(|(_, choice)| is_match(query, choice))
        .map(|(index, _)| index)
        .collect()
}
