//! Generic sequence helpers: construction, mapping and extremum search.

use crate::error::{Result, ToolkitError};
use tracing::debug;

/// Build a vector holding `count` clones of `item`.
///
/// A negative count is rejected with [`ToolkitError::NegativeCount`] instead
/// of being clamped to an empty vector. A count the allocator cannot satisfy
/// yields [`ToolkitError::CountTooLarge`].
pub fn duplicate<T: Clone>(item: T, count: i64) -> Result<Vec<T>> {
    if count < 0 {
        return Err(ToolkitError::NegativeCount { count });
    }
    let len = usize::try_from(count).map_err(|_| ToolkitError::CountTooLarge { count })?;
    let mut items = Vec::new();
    items
        .try_reserve_exact(len)
        .map_err(|_| ToolkitError::CountTooLarge { count })?;
    debug!(count, "duplicating item");
    items.resize(len, item);
    Ok(items)
}

/// Apply `transformation` to every element, preserving order and length.
pub fn map_sequence<T, U, F>(items: &[T], transformation: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    items.iter().map(transformation).collect()
}

/// Like [`map_sequence`] for fallible transformations: stops at the first
/// element that fails and returns that error.
pub fn try_map_sequence<T, U, E, F>(
    items: &[T],
    transformation: F,
) -> std::result::Result<Vec<U>, E>
where
    F: FnMut(&T) -> std::result::Result<U, E>,
{
    items.iter().map(transformation).collect()
}

/// Return the greatest element, or `None` when `items` is empty.
///
/// The first element is the starting candidate and is only replaced by a
/// strictly greater one, so ties resolve to the earliest maximum. Only
/// `PartialOrd` is required; incomparable elements never replace the
/// candidate.
pub fn max_element<I>(items: I) -> Option<I::Item>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    let mut iter = items.into_iter();
    let mut largest = iter.next()?;
    for element in iter {
        if largest < element {
            largest = element;
        }
    }
    Some(largest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{square, string_to_int};
    use proptest::prelude::*;

    const NUMBERS: [i64; 6] = [10, 23, 61, 17, 15, 8];

    #[test]
    fn test_duplicate_strings() {
        let items = duplicate(String::from("hi"), 3).unwrap();
        assert_eq!(items, vec!["hi", "hi", "hi"]);
    }

    #[test]
    fn test_duplicate_zero_is_empty() {
        let items: Vec<u8> = duplicate(7, 0).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_duplicate_negative_count_fails() {
        assert_eq!(
            duplicate('x', -1),
            Err(ToolkitError::NegativeCount { count: -1 })
        );
    }

    #[test]
    fn test_duplicate_huge_count_is_error() {
        assert_eq!(
            duplicate(0u64, i64::MAX),
            Err(ToolkitError::CountTooLarge { count: i64::MAX })
        );
    }

    #[test]
    fn test_map_sequence_square() {
        let squared = try_map_sequence(&NUMBERS, |&n| square(n)).unwrap();
        assert_eq!(squared, vec![100, 529, 3721, 289, 225, 64]);
    }

    #[test]
    fn test_map_sequence_square_overflow_surfaces() {
        let result = try_map_sequence(&[10_i64, 4_000_000_000, 3], |&n| square(n));
        assert_eq!(
            result,
            Err(ToolkitError::Overflow { value: 4_000_000_000 })
        );

        // the infallible form keeps each per-element result
        let squared = map_sequence(&[10_i64, 4_000_000_000], |&n| square(n));
        assert_eq!(squared[0], Ok(100));
        assert!(squared[1].is_err());
    }

    #[test]
    fn test_map_sequence_changes_type() {
        let lengths = map_sequence(&["a", "bcd", ""], |s| s.len());
        assert_eq!(lengths, vec![1, 3, 0]);
    }

    #[test]
    fn test_try_map_sequence_all_ok() {
        let parsed = try_map_sequence(&["1", "22", "-3"], |s| string_to_int(s)).unwrap();
        assert_eq!(parsed, vec![1, 22, -3]);
    }

    #[test]
    fn test_try_map_sequence_surfaces_first_failure() {
        let mut seen = Vec::new();
        let result = try_map_sequence(&["1", "x", "y"], |s| {
            seen.push(s.to_string());
            string_to_int(s)
        });

        match result {
            Err(ToolkitError::Conversion { input, .. }) => assert_eq!(input, "x"),
            other => panic!("Expected conversion error, got {:?}", other),
        }
        assert_eq!(seen, vec!["1", "x"]);
    }

    #[test]
    fn test_max_element_numbers() {
        assert_eq!(max_element(&NUMBERS), Some(&61));
        assert_eq!(max_element(NUMBERS.to_vec()), Some(61));
    }

    #[test]
    fn test_max_element_empty() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(max_element(&empty), None);
    }

    #[test]
    fn test_max_element_strings() {
        assert_eq!(max_element(["apple", "zebra", "banana"]), Some("zebra"));
    }

    #[test]
    fn test_max_element_keeps_first_of_ties() {
        let pairs = [(2, 'a'), (5, 'b'), (5, 'c'), (1, 'd')];
        let largest = max_element(pairs.iter().map(|p| ByKey(p.0, p.1)));
        assert_eq!(largest.map(|b| b.1), Some('b'));
    }

    #[test]
    fn test_max_element_partial_order() {
        assert_eq!(max_element([1.5, 3.25, -2.0]), Some(3.25));
        // NaN first is never replaced because nothing compares greater
        assert!(max_element([f64::NAN, 1.0]).unwrap().is_nan());
    }

    #[derive(Debug, PartialEq)]
    struct ByKey(i32, char);

    impl PartialOrd for ByKey {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.0.partial_cmp(&other.0)
        }
    }

    proptest! {
        #[test]
        fn test_duplicate_length_and_contents(item in any::<i32>(), count in 0i64..200) {
            let items = duplicate(item, count).unwrap();
            prop_assert_eq!(items.len() as i64, count);
            prop_assert!(items.iter().all(|&x| x == item));
        }

        #[test]
        fn test_map_sequence_pointwise(xs: Vec<i32>) {
            let f = |x: &i32| x.wrapping_mul(3).wrapping_sub(1);
            let mapped = map_sequence(&xs, f);
            prop_assert_eq!(mapped.len(), xs.len());
            for (i, x) in xs.iter().enumerate() {
                prop_assert_eq!(mapped[i], f(x));
            }
        }

        #[test]
        fn test_max_element_matches_iter_max(xs: Vec<i32>) {
            prop_assert_eq!(max_element(&xs), xs.iter().max());
        }
    }
}
