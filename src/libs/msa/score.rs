use super::aligned::AlignedSet;
use super::scoring::ScoringParams;
use itertools::Itertools;

/// Sum-of-pairs score of one column.
pub fn column_score(column: &[u8], params: &ScoringParams) -> i32 {
    column
        .iter()
        .tuple_combinations()
        .map(|(&a, &b)| params.column_pair(a, b))
        .sum()
}

/// Sum-of-pairs score of the whole alignment: every unordered row pair in
/// every column.
pub fn sum_of_pairs(set: &AlignedSet, params: &ScoringParams) -> i32 {
    set.columns().map(|col| column_score(&col, params)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(rows: &[&str]) -> AlignedSet {
        AlignedSet::new(rows.iter().map(|r| r.as_bytes().to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_column_score() {
        let params = ScoringParams::default();
        // A-A: 3, A--: -2, A--: -2
        assert_eq!(column_score(b"AA-", &params), -1);
        // -- pairs are free
        assert_eq!(column_score(b"A--", &params), -4);
        assert_eq!(column_score(b"ACG", &params), -3);
        assert_eq!(column_score(b"A", &params), 0);
    }

    #[test]
    fn test_identical() {
        let params = ScoringParams::default();
        let s = set(&["ACGT", "ACGT", "ACGT"]);
        assert_eq!(sum_of_pairs(&s, &params), 3 * 4 * 3);
    }

    #[test]
    fn test_pair_equals_pairwise_score() {
        let params = ScoringParams::default();
        let s = set(&["AAAAA", "---AA"]);
        assert_eq!(sum_of_pairs(&s, &params), 0);
    }

    #[test]
    fn test_empty() {
        let params = ScoringParams::default();
        assert_eq!(sum_of_pairs(&AlignedSet::default(), &params), 0);
    }
}
