//! Semi-global pairwise alignment reporting every co-optimal alignment.
//!
//! Leading and trailing overhangs of either sequence are free: the first row
//! and column of the DP matrix are zero, and the alignment may end anywhere in
//! the last row or column.

use crate::libs::msa::GAP;
use crate::libs::sub_matrix::SubMatrix;

const DIAG: u8 = 0b001;
const HORI: u8 = 0b010;
const VERT: u8 = 0b100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemiGlobal {
    pub score: i32,
    /// Distinct co-optimal alignments, sorted by the concatenated rows.
    pub alignments: Vec<(Vec<u8>, Vec<u8>)>,
}

/// Aligns `s1` (matrix rows) against `s2` (matrix columns) and enumerates all
/// tracebacks from every optimal end cell.
///
/// ```
/// use smsa::libs::semi::semi_global;
/// use smsa::libs::sub_matrix::SubMatrix;
/// let res = semi_global(b"HEAGAWGHEE", b"PAWHEAE", &SubMatrix::pam250(), -9);
/// assert!(res.score > 0);
/// assert!(!res.alignments.is_empty());
/// ```
pub fn semi_global(s1: &[u8], s2: &[u8], matrix: &SubMatrix, gap: i32) -> SemiGlobal {
    let n1 = s1.len();
    let n2 = s2.len();

    let mut score = vec![vec![0i32; n2 + 1]; n1 + 1];
    let mut dirs = vec![vec![0u8; n2 + 1]; n1 + 1];

    for i in 1..=n1 {
        for j in 1..=n2 {
            let diag = score[i - 1][j - 1] + matrix.get_score(s1[i - 1], s2[j - 1]);
            let hori = score[i][j - 1] + gap;
            let vert = score[i - 1][j] + gap;
            let best = diag.max(hori).max(vert);

            score[i][j] = best;
            if best == diag {
                dirs[i][j] |= DIAG;
            }
            if best == hori {
                dirs[i][j] |= HORI;
            }
            if best == vert {
                dirs[i][j] |= VERT;
            }
        }
    }

    // end cells: last row and last column
    let ends: Vec<(usize, usize)> = (0..=n2)
        .map(|j| (n1, j))
        .chain((0..n1).map(|i| (i, n2)))
        .collect();
    let best = ends
        .iter()
        .map(|&(i, j)| score[i][j])
        .max()
        .unwrap_or_default();

    let mut alignments = Vec::new();
    for &(i, j) in ends.iter().filter(|&&(i, j)| score[i][j] == best) {
        trace_all(s1, s2, &dirs, i, j, &mut alignments);
    }

    alignments.sort_by(|a, b| {
        let ka = [a.0.as_slice(), a.1.as_slice()].concat();
        let kb = [b.0.as_slice(), b.1.as_slice()].concat();
        ka.cmp(&kb)
    });
    alignments.dedup();

    SemiGlobal {
        score: best,
        alignments,
    }
}

/// Follows every recorded move from `(end_i, end_j)` back to the first row or
/// column, with an explicit stack.
fn trace_all(
    s1: &[u8],
    s2: &[u8],
    dirs: &[Vec<u8>],
    end_i: usize,
    end_j: usize,
    out: &mut Vec<(Vec<u8>, Vec<u8>)>,
) {
    // trailing overhang; one side is always empty
    let mut tail1 = s1[end_i..].to_vec();
    tail1.extend(std::iter::repeat(GAP).take(s2.len() - end_j));
    let mut tail2: Vec<u8> = std::iter::repeat(GAP).take(s1.len() - end_i).collect();
    tail2.extend_from_slice(&s2[end_j..]);

    // (i, j, reversed core of row 1, reversed core of row 2)
    let mut stack = vec![(end_i, end_j, Vec::new(), Vec::new())];
    while let Some((i, j, mut core1, mut core2)) = stack.pop() {
        if i == 0 || j == 0 {
            // leading overhang
            let mut row1 = s1[..i].to_vec();
            row1.extend(std::iter::repeat(GAP).take(j));
            let mut row2: Vec<u8> = std::iter::repeat(GAP).take(i).collect();
            row2.extend_from_slice(&s2[..j]);

            core1.reverse();
            core2.reverse();
            row1.extend(core1);
            row2.extend(core2);
            row1.extend_from_slice(&tail1);
            row2.extend_from_slice(&tail2);
            out.push((row1, row2));
            continue;
        }

        let d = dirs[i][j];
        if d & VERT != 0 {
            let (mut c1, mut c2) = (core1.clone(), core2.clone());
            c1.push(s1[i - 1]);
            c2.push(GAP);
            stack.push((i - 1, j, c1, c2));
        }
        if d & HORI != 0 {
            let (mut c1, mut c2) = (core1.clone(), core2.clone());
            c1.push(GAP);
            c2.push(s2[j - 1]);
            stack.push((i, j - 1, c1, c2));
        }
        if d & DIAG != 0 {
            core1.push(s1[i - 1]);
            core2.push(s2[j - 1]);
            stack.push((i - 1, j - 1, core1, core2));
        }
    }
}
