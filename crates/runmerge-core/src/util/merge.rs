//! Merging runs of adjacent equivalent elements
//!
//! A run is a maximal stretch of consecutive elements that are all equivalent
//! to the run's first element (the anchor). Equivalence is always tested as
//! `equal(anchor, candidate)`, never between two neighbouring candidates, so a
//! non-transitive predicate still partitions the input around each anchor.
//!
//! Each run is folded left to right with `merge`, seeded with the anchor, and
//! produces exactly one output element. Input order is preserved.

use std::iter::FusedIterator;

/// Iterator adaptor that folds one run per call to `next`.
///
/// Created by [`MergeAdjacentExt::merge_adjacent`]. Yields `Err` at most once;
/// after an error the adaptor is exhausted.
pub struct MergeAdjacent<I: Iterator, P, F> {
    iter: I,
    /// First element of the next run, read past the end of the previous one.
    pending: Option<I::Item>,
    equal: P,
    merge: F,
    done: bool,
}

impl<I: Iterator, P, F> MergeAdjacent<I, P, F> {
    pub fn new(iter: I, equal: P, merge: F) -> Self {
        Self {
            iter,
            pending: None,
            equal,
            merge,
            done: false,
        }
    }
}

impl<I, T, E, P, F> Iterator for MergeAdjacent<I, P, F>
where
    I: Iterator<Item = T>,
    T: Clone,
    P: FnMut(&T, &T) -> bool,
    F: FnMut(T, T) -> Result<T, E>,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let anchor = match self.pending.take().or_else(|| self.iter.next()) {
            Some(anchor) => anchor,
            None => {
                self.done = true;
                return None;
            }
        };

        // The anchor is only cloned once the run turns out to be longer than one.
        let mut folded: Option<T> = None;

        for candidate in self.iter.by_ref() {
            if !(self.equal)(&anchor, &candidate) {
                self.pending = Some(candidate);
                break;
            }

            let accumulated = folded.take().unwrap_or_else(|| anchor.clone());
            match (self.merge)(accumulated, candidate) {
                Ok(value) => folded = Some(value),
                Err(e) => {
                    self.done = true;
                    self.pending = None;
                    return Some(Err(e));
                }
            }
        }

        Some(Ok(folded.unwrap_or(anchor)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let pending = usize::from(self.pending.is_some());
        let (lower, upper) = self.iter.size_hint();
        let lower = if pending + lower > 0 { 1 } else { 0 };
        (lower, upper.and_then(|u| u.checked_add(pending)))
    }
}

impl<I, T, E, P, F> FusedIterator for MergeAdjacent<I, P, F>
where
    I: Iterator<Item = T>,
    T: Clone,
    P: FnMut(&T, &T) -> bool,
    F: FnMut(T, T) -> Result<T, E>,
{
}

/// Adds [`merge_adjacent`](MergeAdjacentExt::merge_adjacent) to every iterator.
pub trait MergeAdjacentExt: Iterator + Sized {
    fn merge_adjacent<P, F, E>(self, equal: P, merge: F) -> MergeAdjacent<Self, P, F>
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item, &Self::Item) -> bool,
        F: FnMut(Self::Item, Self::Item) -> Result<Self::Item, E>,
    {
        MergeAdjacent::new(self, equal, merge)
    }
}

impl<I: Iterator> MergeAdjacentExt for I {}

/// Folds every run of adjacent equivalent elements into one element.
///
/// Single forward pass over `items`. The first error returned by `merge`
/// aborts the reduction and is returned unchanged.
pub fn merge_adjacent<T, E, P, F>(
    items: impl IntoIterator<Item = T>,
    equal: P,
    merge: F,
) -> Result<Vec<T>, E>
where
    T: Clone,
    P: FnMut(&T, &T) -> bool,
    F: FnMut(T, T) -> Result<T, E>,
{
    items.into_iter().merge_adjacent(equal, merge).collect()
}

/// Splits `items` into anchor-based runs without folding them.
pub fn group_adjacent_by<T, P>(items: impl IntoIterator<Item = T>, mut equal: P) -> Vec<Vec<T>>
where
    P: FnMut(&T, &T) -> bool,
{
    let mut result: Vec<Vec<T>> = Vec::new();
    let mut current_group: Vec<T> = Vec::new();

    for item in items {
        let starts_new_run = match current_group.first() {
            Some(anchor) => !equal(anchor, &item),
            None => false,
        };
        if starts_new_run {
            result.push(std::mem::take(&mut current_group));
        }
        current_group.push(item);
    }

    if !current_group.is_empty() {
        result.push(current_group);
    }

    result
}

/// Groups consecutive items sharing the same key.
pub fn group_adjacent<T, K, F>(items: impl IntoIterator<Item = T>, key_selector: F) -> Vec<Vec<T>>
where
    K: Eq,
    F: Fn(&T) -> K,
{
    group_adjacent_by(items, |anchor, item| key_selector(anchor) == key_selector(item))
}

/// Number of anchor-based runs in `items`.
pub fn count_runs<T, P>(items: &[T], mut equal: P) -> usize
where
    P: FnMut(&T, &T) -> bool,
{
    let mut runs = 0;
    let mut anchor = 0;

    while anchor < items.len() {
        let boundary = items[anchor + 1..]
            .iter()
            .position(|item| !equal(&items[anchor], item))
            .map_or(items.len(), |offset| anchor + 1 + offset);
        runs += 1;
        anchor = boundary;
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn sum(a: i32, b: i32) -> Result<i32, Infallible> {
        Ok(a + b)
    }

    #[test]
    fn merge_adjacent_sums_consecutive_equal_values() {
        let items = vec![1, 1, 2, 2, 2, 1, 3, 3];
        let merged = merge_adjacent(items, |a, b| a == b, sum).unwrap();

        assert_eq!(merged, vec![2, 6, 1, 6]);
    }

    #[test]
    fn merge_adjacent_empty_input_yields_nothing() {
        let merged = merge_adjacent(Vec::<i32>::new(), |a, b| a == b, sum).unwrap();
        assert!(merged.is_empty());
    }

    #[test]
    fn merge_adjacent_compares_against_run_anchor() {
        // Within distance 1 of the anchor: 1 absorbs 2 but not 3, even though 2 ~ 3.
        let items = vec![1, 2, 3, 4];
        let runs = group_adjacent_by(items.clone(), |a: &i32, b: &i32| (a - b).abs() <= 1);
        assert_eq!(runs, vec![vec![1, 2], vec![3, 4]]);

        let merged = merge_adjacent(items, |a: &i32, b: &i32| (a - b).abs() <= 1, sum).unwrap();
        assert_eq!(merged, vec![3, 7]);
    }

    #[test]
    fn equal_receives_anchor_first() {
        // "candidate is at least the anchor": 3 and 2 join the run of 1, 0 does not.
        let at_least_anchor = |anchor: &i32, candidate: &i32| candidate >= anchor;
        let items = vec![1, 3, 2, 0];

        let merged = merge_adjacent(items.clone(), at_least_anchor, sum).unwrap();
        assert_eq!(merged, vec![6, 0]);

        let runs = group_adjacent_by(items.clone(), at_least_anchor);
        assert_eq!(runs, vec![vec![1, 3, 2], vec![0]]);

        assert_eq!(count_runs(&items, at_least_anchor), 2);
    }

    #[test]
    fn merge_adjacent_folds_left_to_right() {
        let items = vec!["a", "a", "a", "b"]
            .into_iter()
            .zip(["1", "2", "3", "4"])
            .map(|(k, v)| (k, v.to_string()))
            .collect::<Vec<_>>();

        let merged = merge_adjacent(
            items,
            |a, b| a.0 == b.0,
            |acc, next| Ok::<_, Infallible>((acc.0, acc.1 + &next.1)),
        )
        .unwrap();

        assert_eq!(merged, vec![("a", "123".to_string()), ("b", "4".to_string())]);
    }

    #[test]
    fn merge_adjacent_stops_at_first_merge_error() {
        let mut calls = 0;
        let result = merge_adjacent(
            vec![1, 1, 2, 2, 3, 3],
            |a, b| a == b,
            |a, b| {
                calls += 1;
                if a == 2 {
                    Err(format!("refused {}", b))
                } else {
                    Ok(a + b)
                }
            },
        );

        assert_eq!(result, Err("refused 2".to_string()));
        assert_eq!(calls, 2);
    }

    #[test]
    fn adaptor_is_lazy_and_fused_after_error() {
        let mut merged = vec![5, 5, 6, 6]
            .into_iter()
            .merge_adjacent(|a, b| a == b, |a, _| if a == 6 { Err(()) } else { Ok(a * 2) });

        assert_eq!(merged.next(), Some(Ok(10)));
        assert_eq!(merged.next(), Some(Err(())));
        assert_eq!(merged.next(), None);
        assert_eq!(merged.next(), None);
    }

    #[test]
    fn group_adjacent_with_strings() {
        let items = vec!["aa", "ab", "ba", "bb"];
        let groups = group_adjacent(items, |s| s.as_bytes()[0]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], vec!["aa", "ab"]);
        assert_eq!(groups[1], vec!["ba", "bb"]);
    }

    #[test]
    fn count_runs_matches_group_count() {
        let items = vec![1, 1, 2, 2, 2, 1, 3, 3];
        assert_eq!(count_runs(&items, |a, b| a == b), 4);
        assert_eq!(count_runs::<i32, _>(&[], |a, b| a == b), 0);
        assert_eq!(count_runs(&[7], |a, b| a == b), 1);
    }
}
