use super::scoring::{ScoringParams, GAP};

/// A global alignment of two sequences, both padded to the same length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PairwiseAlignment {
    pub x: Vec<u8>,
    pub y: Vec<u8>,
    pub score: i32,
}

/// Needleman-Wunsch with a linear gap cost.
///
/// Either input may already carry gap symbols; pairing anything with a gap
/// costs `gap_score`, so a sequence can be aligned against a gapped center.
///
/// Rows of the DP matrix run over `y`, columns over `x`. When several moves
/// reproduce a cell, the traceback prefers the diagonal, then the horizontal
/// move (`x` advances against a gap), then the vertical one.
///
/// ```
/// use smsa::libs::msa::{global_align, ScoringParams};
/// let aln = global_align(b"AAAAA", b"AA", &ScoringParams::default());
/// assert_eq!(aln.score, 0);
/// assert_eq!(aln.x, b"AAAAA");
/// assert_eq!(aln.y, b"---AA");
/// ```
pub fn global_align(x: &[u8], y: &[u8], params: &ScoringParams) -> PairwiseAlignment {
    let m = x.len();
    let n = y.len();
    let gap = params.gap_score;

    let mut mat = vec![vec![0i32; m + 1]; n + 1];
    for (i, row) in mat.iter_mut().enumerate() {
        row[0] = gap * i as i32;
    }
    for j in 0..=m {
        mat[0][j] = gap * j as i32;
    }

    for i in 1..=n {
        for j in 1..=m {
            let diag = mat[i - 1][j - 1] + params.pairing(x[j - 1], y[i - 1]);
            let hori = mat[i][j - 1] + gap;
            let vert = mat[i - 1][j] + gap;
            mat[i][j] = diag.max(hori).max(vert);
        }
    }

    // traceback, built in reverse
    let mut aln_x = Vec::with_capacity(m + n);
    let mut aln_y = Vec::with_capacity(m + n);
    let mut i = n;
    let mut j = m;
    while i > 0 || j > 0 {
        let current = mat[i][j];

        if i > 0 && j > 0 && current == mat[i - 1][j - 1] + params.pairing(x[j - 1], y[i - 1]) {
            aln_x.push(x[j - 1]);
            aln_y.push(y[i - 1]);
            i -= 1;
            j -= 1;
        } else if j > 0 && current == mat[i][j - 1] + gap {
            aln_x.push(x[j - 1]);
            aln_y.push(GAP);
            j -= 1;
        } else {
            aln_x.push(GAP);
            aln_y.push(y[i - 1]);
            i -= 1;
        }
    }
    aln_x.reverse();
    aln_y.reverse();

    PairwiseAlignment {
        x: aln_x,
        y: aln_y,
        score: mat[n][m],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::msa::scoring::ungap;

    fn align(x: &str, y: &str) -> (String, String, i32) {
        let aln = global_align(x.as_bytes(), y.as_bytes(), &ScoringParams::default());
        (
            String::from_utf8(aln.x).unwrap(),
            String::from_utf8(aln.y).unwrap(),
            aln.score,
        )
    }

    #[test]
    fn test_empty() {
        assert_eq!(align("", ""), ("".to_string(), "".to_string(), 0));
        assert_eq!(align("ACG", ""), ("ACG".to_string(), "---".to_string(), -6));
        assert_eq!(align("", "AC"), ("--".to_string(), "AC".to_string(), -4));
    }

    #[test]
    fn test_long_short() {
        let (x, y, score) = align("AAAAA", "AA");
        assert_eq!(score, 0);
        assert_eq!(x, "AAAAA");
        assert_eq!(y, "---AA");
    }

    #[test]
    fn test_deletion() {
        let (x, y, score) = align("ACGT", "ACT");
        assert_eq!(score, 7);
        assert_eq!(x, "ACGT");
        assert_eq!(y, "AC-T");
    }

    #[test]
    fn test_mismatch_preferred_over_two_gaps() {
        let (x, y, score) = align("ACGT", "ATGT");
        assert_eq!(score, 8);
        assert_eq!(x, "ACGT");
        assert_eq!(y, "ATGT");
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            ("GATTACA", "GCATGCU"),
            ("AAAAA", "AA"),
            ("HEAGAWGHEE", "PAWHEAE"),
            ("ACGT", ""),
        ];
        let params = ScoringParams::default();
        for (a, b) in pairs {
            let ab = global_align(a.as_bytes(), b.as_bytes(), &params);
            let ba = global_align(b.as_bytes(), a.as_bytes(), &params);
            assert_eq!(ab.score, ba.score, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_round_trip() {
        let params = ScoringParams::default();
        for (a, b) in [("GATTACA", "GCATGCU"), ("TTT", "ACGTACGT")] {
            let aln = global_align(a.as_bytes(), b.as_bytes(), &params);
            assert_eq!(aln.x.len(), aln.y.len());
            assert_eq!(ungap(&aln.x), a.as_bytes());
            assert_eq!(ungap(&aln.y), b.as_bytes());
        }
    }

    #[test]
    fn test_against_gapped_center() {
        // the existing gap column of the center is kept and paired with a gap cost
        let (x, y, score) = align("ACGT", "AC-GT");
        assert_eq!(y, "AC-GT");
        assert_eq!(x.len(), 5);
        assert_eq!(ungap(x.as_bytes()), b"ACGT");
        assert_eq!(score, 4 * 3 - 2);
    }
}
