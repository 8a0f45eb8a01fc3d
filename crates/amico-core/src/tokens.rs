//! Label tokenization and multiset intersection.

/// Split a label into tokens.
///
/// An empty label has no tokens. Otherwise every delimiter occurrence splits,
/// so adjacent delimiters produce empty tokens that take part in matching.
pub fn tokenize<'a>(label: &'a str, delimiter: &str) -> Vec<&'a str> {
    if label.is_empty() {
        return Vec::new();
    }
    label.split(delimiter).collect()
}

/// Multiset intersection of two token sequences.
///
/// Walks the shorter sequence (the first one on a tie) and consumes one
/// matching occurrence from a private copy of the other, so `n` copies on one
/// side and `m` on the other yield `min(n, m)` elements. The result is in the
/// walk order. Neither input is modified.
pub fn intersect<T: PartialEq + Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let (shorter, longer) = if second.len() < first.len() {
        (second, first)
    } else {
        (first, second)
    };

    let mut pool = longer.to_vec();
    let mut matched = Vec::with_capacity(shorter.len());
    for element in shorter {
        if let Some(position) = pool.iter().position(|candidate| candidate == element) {
            matched.push(pool.swap_remove(position));
        }
    }
    matched
}
