use super::pairwise::global_align;
use super::scoring::ScoringParams;

/// Pairwise global alignment scores between input sequences, indexed by
/// their input position. The diagonal is undefined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    size: usize,
    scores: Vec<i32>,
}

impl ScoreTable {
    /// Aligns every ordered pair `(i, j)` with `i != j`.
    pub fn build(seqs: &[Vec<u8>], params: &ScoringParams) -> Self {
        let size = seqs.len();
        let mut scores = vec![0; size * size];
        for (i, x) in seqs.iter().enumerate() {
            for (j, y) in seqs.iter().enumerate() {
                if i != j {
                    scores[i * size + j] = global_align(x, y, params).score;
                }
            }
        }
        Self { size, scores }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> Option<i32> {
        if i == j || i >= self.size || j >= self.size {
            None
        } else {
            Some(self.scores[i * self.size + j])
        }
    }

    /// Sum of the scores of `i` against every other sequence.
    pub fn total(&self, i: usize) -> i32 {
        (0..self.size).filter_map(|j| self.get(i, j)).sum()
    }
}

/// The chosen center sequence together with the table it was chosen from.
#[derive(Debug, Clone)]
pub struct Center {
    pub index: usize,
    pub table: ScoreTable,
}

/// Picks the sequence with the greatest total score against all others.
/// On ties the earliest sequence wins.
///
/// Returns `None` for an empty input.
pub fn select_center(seqs: &[Vec<u8>], params: &ScoringParams) -> Option<Center> {
    let table = ScoreTable::build(seqs, params);

    let mut best: Option<(usize, i32)> = None;
    for i in 0..table.size() {
        let total = table.total(i);
        if best.map_or(true, |(_, max)| total > max) {
            best = Some((i, total));
        }
    }

    best.map(|(index, total)| {
        log::debug!("center is sequence {} with total score {}", index, total);
        Center { index, table }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seqs(list: &[&str]) -> Vec<Vec<u8>> {
        list.iter().map(|s| s.as_bytes().to_vec()).collect()
    }

    #[test]
    fn test_table() {
        let params = ScoringParams::default();
        let table = ScoreTable::build(&seqs(&["AAAAA", "AA", "ACGT"]), &params);
        assert_eq!(table.size(), 3);
        assert_eq!(table.get(0, 0), None);
        assert_eq!(table.get(0, 1), Some(0));
        assert_eq!(table.get(1, 0), Some(0));
        assert_eq!(table.get(0, 3), None);
    }

    #[test]
    fn test_center() {
        let params = ScoringParams::default();
        // ACGT is close to both of the others
        let center = select_center(&seqs(&["ACG", "ACGT", "CGT"]), &params).unwrap();
        assert_eq!(center.index, 1);
    }

    #[test]
    fn test_tie_first_wins() {
        let params = ScoringParams::default();
        let center = select_center(&seqs(&["ACGT", "ACGT", "ACGT"]), &params).unwrap();
        assert_eq!(center.index, 0);
        assert_eq!(center.table.total(0), 24);
    }

    #[test]
    fn test_single_and_empty() {
        let params = ScoringParams::default();
        let center = select_center(&seqs(&["ACGT"]), &params).unwrap();
        assert_eq!(center.index, 0);
        assert_eq!(center.table.total(0), 0);
        assert!(select_center(&[], &params).is_none());
    }
}
