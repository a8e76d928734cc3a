//! Reverse lookup: find the key that maps to a given value.

use tracing::debug;

/// Scan `mapping` and return the first key whose value equals `target`.
///
/// `mapping` is anything that iterates `(&K, &V)` pairs, so `&HashMap` and
/// `&BTreeMap` both work. Which key wins when several values match is up to
/// the mapping's iteration order; for a `HashMap` that order is unspecified.
pub fn find_key_by_value<'a, K, V, M>(target: &V, mapping: M) -> Option<&'a K>
where
    K: 'a,
    V: PartialEq + 'a,
    M: IntoIterator<Item = (&'a K, &'a V)>,
{
    let found = mapping
        .into_iter()
        .find(|(_, value)| *value == target)
        .map(|(key, _)| key);
    debug!(found = found.is_some(), "reverse lookup finished");
    found
}
