//! Sweep-line primitives over the spans of a single chromosome.
//!
//! Both functions work on plain [Span] slices; grouping by chromosome is the
//! caller's job (see [IntervalSet](crate::models::IntervalSet)).

use crate::models::Span;

///
/// Merge overlapping and adjacent spans.
///
/// Sorts by (start, end), then sweeps to merge spans where
/// `next.start <= current.end`. Touching spans such as `[0,10)` and `[10,20)`
/// become one block `[0,20)`, so the result is a minimal set of maximal,
/// non-overlapping, non-abutting spans.
///
/// Every input span must satisfy `start < end`; see [Span].
///
pub fn reduce(mut spans: Vec<Span>) -> Vec<Span> {
    if spans.is_empty() {
        return spans;
    }
    spans.sort_unstable();

    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    let mut current = spans[0];

    for s in &spans[1..] {
        if s.start <= current.end {
            // overlapping or adjacent -- extend
            current.end = current.end.max(s.end);
        } else {
            merged.push(current);
            current = *s;
        }
    }
    merged.push(current);
    merged.shrink_to_fit();

    merged
}

///
/// Total number of bases covered by both span lists.
///
/// Both inputs must be sorted and overlap-free (the output of [reduce]).
/// Two-pointer sweep: accumulate the overlap of the current pair, then advance
/// whichever span ends first. Runs in O(n + m).
///
/// Lengths are `u128` so sums over spans anywhere in the `u64` coordinate range
/// cannot overflow.
///
pub fn intersect_length(a: &[Span], b: &[Span]) -> u128 {
    let mut i = 0;
    let mut j = 0;
    let mut total: u128 = 0;

    while i < a.len() && j < b.len() {
        total += u128::from(a[i].intersect(&b[j]));

        if a[i].end <= b[j].end {
            i += 1;
        } else {
            j += 1;
        }
    }

    total
}

/// Sum of span widths.
pub fn covered_length(spans: &[Span]) -> u128 {
    spans.iter().map(|s| u128::from(s.width())).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rand::Rng;
    use rstest::*;

    fn spans(raw: &[(u64, u64)]) -> Vec<Span> {
        raw.iter().map(|&(start, end)| Span { start, end }).collect()
    }

    // brute-force: mark every covered base
    fn covered_bases(spans: &[Span], size: usize) -> Vec<bool> {
        let mut bases = vec![false; size];
        for s in spans {
            for b in &mut bases[s.start as usize..s.end as usize] {
                *b = true;
            }
        }
        bases
    }

    fn random_spans(rng: &mut impl Rng, n: usize, size: u64) -> Vec<Span> {
        (0..n)
            .map(|_| {
                let start = rng.random_range(0..size - 1);
                let end = rng.random_range(start + 1..=size.min(start + 40));
                Span { start, end }
            })
            .collect()
    }

    #[rstest]
    fn test_reduce_adjacent_merged() {
        let merged = reduce(spans(&[(10, 20), (0, 10)]));
        assert_eq!(merged, spans(&[(0, 20)]));
        assert_eq!(covered_length(&merged), 20);
    }

    #[rstest]
    fn test_reduce_nested_and_duplicates() {
        let merged = reduce(spans(&[(5, 8), (0, 100), (0, 100), (150, 160), (40, 120)]));
        assert_eq!(merged, spans(&[(0, 120), (150, 160)]));
    }

    #[rstest]
    fn test_reduce_keeps_gaps() {
        let merged = reduce(spans(&[(0, 5), (6, 10)]));
        assert_eq!(merged, spans(&[(0, 5), (6, 10)]));
    }

    #[rstest]
    fn test_reduce_empty() {
        assert_eq!(reduce(Vec::new()), Vec::<Span>::new());
    }

    #[rstest]
    #[case(&[(0, 100)], &[(50, 150)], 50)]
    #[case(&[(0, 10), (20, 30), (40, 50)], &[(5, 45)], 5 + 10 + 5)]
    #[case(&[(0, 10)], &[(10, 20)], 0)]
    #[case(&[(0, 10), (12, 14)], &[], 0)]
    #[case(&[(0, 1000)], &[(1, 2), (3, 4), (998, 1000)], 4)]
    fn test_intersect_length(#[case] a: &[(u64, u64)], #[case] b: &[(u64, u64)], #[case] expected: u128) {
        let a = spans(a);
        let b = spans(b);
        assert_eq!(intersect_length(&a, &b), expected);
        assert_eq!(intersect_length(&b, &a), expected);
    }

    #[rstest]
    fn test_lengths_near_coordinate_limit() {
        let a = spans(&[(0, u64::MAX)]);
        let b = spans(&[(0, u64::MAX), (5, 10)]);
        assert_eq!(covered_length(&a), u64::MAX as u128);
        // overlapping input is summed as given
        assert_eq!(covered_length(&b), u64::MAX as u128 + 5);
        assert_eq!(intersect_length(&a, &a), u64::MAX as u128);
    }

    #[rstest]
    fn test_sweep_matches_per_base_count() {
        let mut rng = rand::rng();
        let size = 500;

        for _ in 0..200 {
            let a = reduce(random_spans(&mut rng, 15, size));
            let b = reduce(random_spans(&mut rng, 15, size));

            let bases_a = covered_bases(&a, size as usize);
            let bases_b = covered_bases(&b, size as usize);

            let expected_a = bases_a.iter().filter(|&&x| x).count() as u128;
            let expected_both = bases_a
                .iter()
                .zip(bases_b.iter())
                .filter(|(x, y)| **x && **y)
                .count() as u128;

            assert_eq!(covered_length(&a), expected_a);
            assert_eq!(intersect_length(&a, &b), expected_both);

            // merged output is maximal: no overlap, no touching
            for pair in a.windows(2) {
                assert!(pair[0].end < pair[1].start);
            }
        }
    }
}
