//! Position-specific log-odds profile built from a set of equal-width rows,
//! and a scan for the query window that fits the profile best.

use crate::libs::msa::{AlignedSet, GAP};
use std::collections::HashSet;

/// Added to every symbol count of a column.
pub const PSEUDOCOUNT: f64 = 2.0;

/// Shortest query window tried by [`best_window`].
pub const MIN_WINDOW: usize = 3;

/// Log-odds scores per column for every symbol seen in the rows.
///
/// The frequency of symbol `c` in column `i` is
/// `(count + PSEUDOCOUNT) / (rows + |alphabet| * PSEUDOCOUNT)`; the score is
/// `log2` of that frequency over the mean frequency of `c` across all columns.
#[derive(Debug, Clone)]
pub struct Profile {
    alphabet: Vec<u8>,
    /// Position of each byte in `alphabet`
    index: Vec<Option<usize>>,
    scores: Vec<Vec<f64>>,
}

/// The best scoring candidate found in a query.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileHit {
    /// The query window, widened with gaps to the profile width
    pub candidate: Vec<u8>,
    /// Start of the window in the query
    pub start: usize,
    /// Length of the window before gaps were inserted
    pub len: usize,
    pub score: f64,
}

impl Profile {
    /// ```
    /// use smsa::libs::msa::AlignedSet;
    /// use smsa::libs::profile::Profile;
    /// let set = AlignedSet::new(vec![b"ACGT".to_vec(), b"ACGA".to_vec()]).unwrap();
    /// let profile = Profile::build(&set);
    /// assert_eq!(profile.width(), 4);
    /// assert_eq!(profile.alphabet(), b"ACGT");
    /// assert!(profile.get_score(0, b'A').unwrap() > 0.0);
    /// assert!(profile.get_score(0, b'N').is_none());
    /// ```
    pub fn build(set: &AlignedSet) -> Profile {
        let mut alphabet = Vec::new();
        let mut index = vec![None; 256];
        for &b in set.rows().iter().flatten() {
            if index[b as usize].is_none() {
                index[b as usize] = Some(alphabet.len());
                alphabet.push(b);
            }
        }

        let total = set.num_rows() as f64 + alphabet.len() as f64 * PSEUDOCOUNT;
        let freqs: Vec<Vec<f64>> = set
            .columns()
            .map(|column| {
                alphabet
                    .iter()
                    .map(|c| {
                        let count = column.iter().filter(|&b| b == c).count() as f64;
                        (count + PSEUDOCOUNT) / total
                    })
                    .collect()
            })
            .collect();

        let width = freqs.len() as f64;
        let background: Vec<f64> = (0..alphabet.len())
            .map(|k| freqs.iter().map(|col| col[k]).sum::<f64>() / width)
            .collect();

        let scores = freqs
            .iter()
            .map(|col| {
                col.iter()
                    .zip(&background)
                    .map(|(f, bg)| (f / bg).log2())
                    .collect()
            })
            .collect();

        Profile {
            alphabet,
            index,
            scores,
        }
    }

    pub fn width(&self) -> usize {
        self.scores.len()
    }

    /// Symbols in order of first appearance in the rows.
    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    pub fn get_score(&self, column: usize, symbol: u8) -> Option<f64> {
        let k = self.index[symbol as usize]?;
        self.scores.get(column).map(|col| col[k])
    }

    /// Sum of the column scores of `candidate`.
    ///
    /// `None` when the width differs from the profile or a symbol is outside
    /// the alphabet.
    pub fn score(&self, candidate: &[u8]) -> Option<f64> {
        if candidate.len() != self.width() {
            return None;
        }
        candidate
            .iter()
            .enumerate()
            .try_fold(0.0, |acc, (i, &b)| Some(acc + self.get_score(i, b)?))
    }
}

/// Every distinct way to widen `word` to `width` with gaps.
///
/// Gaps are inserted one at a time, left to right, depth first; each
/// intermediate word is expanded once. A word already `width` long or longer
/// is returned unchanged.
///
/// ```
/// use smsa::libs::profile::gap_insertions;
/// let words = gap_insertions(b"AB", 3);
/// assert_eq!(words, vec![b"-AB".to_vec(), b"A-B".to_vec(), b"AB-".to_vec()]);
/// ```
pub fn gap_insertions(word: &[u8], width: usize) -> Vec<Vec<u8>> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();
    insert_gaps(word, width, &mut seen, &mut words);
    words
}

fn insert_gaps(
    word: &[u8],
    width: usize,
    seen: &mut HashSet<Vec<u8>>,
    words: &mut Vec<Vec<u8>>,
) {
    if word.len() >= width {
        words.push(word.to_vec());
        return;
    }
    for i in 0..=word.len() {
        let mut widened = Vec::with_capacity(word.len() + 1);
        widened.extend_from_slice(&word[..i]);
        widened.push(GAP);
        widened.extend_from_slice(&word[i..]);

        if seen.insert(widened.clone()) {
            insert_gaps(&widened, width, seen, words);
        }
    }
}

/// Scans `query` for the window that scores best against `profile`.
///
/// Windows run from the profile width down to [`MIN_WINDOW`], left to right;
/// shorter windows are widened by [`gap_insertions`]. Candidates holding a
/// symbol outside the profile alphabet are skipped. Only a strictly higher
/// score replaces the current best, so the first candidate wins ties.
///
/// Returns `None` when no candidate can be scored.
pub fn best_window(profile: &Profile, query: &[u8]) -> Option<ProfileHit> {
    let width = profile.width();
    let mut best: Option<ProfileHit> = None;

    for len in (MIN_WINDOW..=width).rev() {
        if query.len() < len {
            continue;
        }

        let mut tried = HashSet::new();
        for start in 0..=(query.len() - len) {
            let word = &query[start..start + len];
            if !tried.insert(word) {
                continue;
            }

            for candidate in gap_insertions(word, width) {
                let Some(score) = profile.score(&candidate) else {
                    continue;
                };
                if best.as_ref().map_or(true, |hit| score > hit.score) {
                    best = Some(ProfileHit {
                        candidate,
                        start,
                        len,
                        score,
                    });
                }
            }
        }
        log::debug!("windows of length {} scanned", len);
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(rows: &[&str]) -> Profile {
        let set = AlignedSet::new(rows.iter().map(|r| r.as_bytes().to_vec()).collect()).unwrap();
        Profile::build(&set)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_log_odds() {
        let p = profile(&["ACGTA", "ACGTT", "AGGTA", "ACCTA"]);
        assert_eq!(p.alphabet(), b"ACGT");
        assert!(close(p.get_score(0, b'A').unwrap(), 0.8194));
        assert!(close(p.get_score(0, b'T').unwrap(), -0.5850));
        assert!(close(p.get_score(1, b'C').unwrap(), 0.8365));
        assert!(close(p.get_score(3, b'T').unwrap(), 1.0));
        assert!(close(p.get_score(4, b'T').unwrap(), 0.0));
        assert!(p.get_score(5, b'A').is_none());
    }

    #[test]
    fn test_gaps_in_rows() {
        let p = profile(&["AC-TA", "ACGTA", "A-GTA"]);
        assert_eq!(p.alphabet(), b"AC-TG");
        assert!(close(p.get_score(1, b'-').unwrap(), 0.3219));
        assert!(close(p.get_score(3, b'T').unwrap(), 0.9434));
    }

    #[test]
    fn test_score() {
        let p = profile(&["ACGTA", "ACGTT", "AGGTA", "ACCTA"]);
        assert!(close(p.score(b"ACGTA").unwrap(), 4.0488));
        assert!(p.score(b"ACGT").is_none());
        assert!(p.score(b"ACGTN").is_none());
    }

    #[test]
    fn test_gap_insertions_order() {
        let words: Vec<String> = gap_insertions(b"AB", 4)
            .into_iter()
            .map(|w| String::from_utf8(w).unwrap())
            .collect();
        assert_eq!(words, vec!["--AB", "-A-B", "-AB-", "A--B", "A-B-", "AB--"]);

        assert_eq!(gap_insertions(b"ABC", 3), vec![b"ABC".to_vec()]);
    }

    #[test]
    fn test_best_window_full_width() {
        let p = profile(&["ACGTA", "ACGTT", "AGGTA", "ACCTA"]);
        let hit = best_window(&p, b"TTACGTAGG").unwrap();
        assert_eq!(hit.candidate, b"ACGTA");
        assert_eq!(hit.start, 2);
        assert_eq!(hit.len, 5);
        assert!(close(hit.score, 4.0488));

        let hit = best_window(&p, b"GGACTAC").unwrap();
        assert_eq!(hit.candidate, b"GACTA");
        assert_eq!(hit.start, 1);
    }

    #[test]
    fn test_best_window_with_gaps() {
        let p = profile(&["AC-TA", "ACGTA", "A-GTA"]);
        let hit = best_window(&p, b"TTACTTT").unwrap();
        assert_eq!(hit.candidate, b"AC-T-");
        assert_eq!(hit.start, 2);
        assert_eq!(hit.len, 3);
        assert!(close(hit.score, 2.3831));
    }

    #[test]
    fn test_best_window_none() {
        let p = profile(&["ACGTA", "ACGTT", "AGGTA", "ACCTA"]);
        // the gap is not in the alphabet, so short windows cannot be widened
        assert!(best_window(&p, b"TTTT").is_none());
        assert!(best_window(&p, b"AC").is_none());
    }
}
